/// Token types for the formula lexer.

/// Left/right tie-break rule for operators sharing precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Binary operators. All consume two operands; `^` lowers to a `pow`
/// call during code generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    /// Binding strength, higher binds tighter. Unary functions outrank
    /// every binary operator.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Pow => 3,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            BinOp::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }
}

/// A single token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based column of this token's first character.
    pub col: usize,
}

/// All token variants recognized by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Op(BinOp),
    LParen,
    RParen,
}
