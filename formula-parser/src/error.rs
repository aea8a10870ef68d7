/// Parse errors with the offending character, token, or name.

use std::fmt;

/// Any failure of the text → RPN pipeline. Each stage fails fast on
/// the first error; there is no recovery.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// A character outside the expression grammar (lexing stage).
    UnexpectedChar { ch: char, col: usize },
    /// Mismatched parentheses, missing operands, or leftover operands.
    Syntax { message: String, col: usize },
    /// An identifier that is neither in the catalog nor the variable `x`.
    UnknownSymbol { name: String, col: usize },
}

impl ParseError {
    pub fn syntax(message: impl Into<String>, col: usize) -> Self {
        ParseError::Syntax {
            message: message.into(),
            col,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedChar { ch, col } => {
                write!(f, "unexpected character `{ch}` at col {col}")
            }
            ParseError::Syntax { message, col } => {
                write!(f, "syntax error at col {col}: {message}")
            }
            ParseError::UnknownSymbol { name, col } => {
                write!(f, "unknown symbol `{name}` at col {col}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
