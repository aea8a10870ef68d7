/// Shunting-yard parser: token sequence → postfix (RPN) sequence.
///
/// Precedence, high to low: unary functions, `^`, `*` `/`, `+` `-`.
/// `^` is right-associative; everything else is left-associative.
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::rpn::RpnToken;
use crate::symbols::{FunctionSig, Symbol, SymbolTable};
use crate::token::{Assoc, BinOp, Token, TokenKind};

/// Parse a source string into a postfix sequence.
///
/// ```
/// use formula_parser::{parse, SymbolTable};
///
/// let rpn = parse("2+3*4", &SymbolTable::standard()).unwrap();
/// assert_eq!(rpn.len(), 5); // 2 3 4 * +
/// ```
pub fn parse(source: &str, symbols: &SymbolTable) -> Result<Vec<RpnToken>, ParseError> {
    let tokens = Lexer::tokenize(source)?;
    parse_tokens(&tokens, symbols)
}

/// Parse a pre-lexed token sequence into a postfix sequence.
pub fn parse_tokens(tokens: &[Token], symbols: &SymbolTable) -> Result<Vec<RpnToken>, ParseError> {
    let end_col = tokens.last().map(|t| t.col).unwrap_or(1);
    let mut parser = Parser {
        output: Vec::new(),
        stack: Vec::new(),
        operands: 0,
    };

    for tok in tokens {
        match &tok.kind {
            TokenKind::Number(value) => parser.emit_operand(RpnToken::Number(*value)),
            TokenKind::Ident(name) => match symbols.resolve(name, tok.col)? {
                Symbol::Constant(value) => parser.emit_operand(RpnToken::Number(value)),
                Symbol::Variable => parser.emit_operand(RpnToken::Variable),
                // Unary functions act as postfix operators of highest
                // precedence; both `sin(x)` and a trailing `x sin`
                // style fall out of the same stack discipline.
                Symbol::Function(sig) => parser.stack.push(StackOp::Call(sig, tok.col)),
                Symbol::Log2 => parser.stack.push(StackOp::Log2(tok.col)),
            },
            TokenKind::Op(op) => {
                parser.pop_greater(*op)?;
                parser.stack.push(StackOp::Binary(*op, tok.col));
            }
            TokenKind::LParen => parser.stack.push(StackOp::LParen(tok.col)),
            TokenKind::RParen => parser.close_paren(tok.col)?,
        }
    }

    parser.finish(end_col)
}

/// Operator stack entries. Columns ride along for error reporting.
enum StackOp {
    Binary(BinOp, usize),
    Call(FunctionSig, usize),
    Log2(usize),
    LParen(usize),
}

struct Parser {
    output: Vec<RpnToken>,
    stack: Vec<StackOp>,
    /// Operands available on a model evaluation stack; emitting an
    /// operator checks its arity against this so malformed sequences
    /// are rejected before code generation ever sees them.
    operands: u32,
}

impl Parser {
    fn emit_operand(&mut self, token: RpnToken) {
        self.output.push(token);
        self.operands += 1;
    }

    /// Move one operator from the stack to the output, enforcing that
    /// enough operands precede it.
    fn emit_op(&mut self, op: StackOp) -> Result<(), ParseError> {
        match op {
            StackOp::Binary(op, col) => {
                if self.operands < 2 {
                    return Err(ParseError::syntax(
                        format!("operator `{}` is missing an operand", op.symbol()),
                        col,
                    ));
                }
                self.operands -= 1;
                self.output.push(RpnToken::Binary(op));
            }
            StackOp::Call(sig, col) => {
                if self.operands < 1 {
                    return Err(ParseError::syntax(
                        format!("function `{}` is missing its operand", sig.name),
                        col,
                    ));
                }
                self.output.push(RpnToken::Call(sig));
            }
            StackOp::Log2(col) => {
                if self.operands < 1 {
                    return Err(ParseError::syntax("function `log` is missing its operand", col));
                }
                self.output.push(RpnToken::Log2);
            }
            StackOp::LParen(col) => {
                return Err(ParseError::syntax("unmatched `(`", col));
            }
        }
        Ok(())
    }

    /// Pop operators that bind at least as tightly as `incoming`.
    fn pop_greater(&mut self, incoming: BinOp) -> Result<(), ParseError> {
        loop {
            let Some(top) = self.stack.pop() else {
                return Ok(());
            };
            let pops = match &top {
                StackOp::LParen(_) => false,
                // Functions outrank every binary operator.
                StackOp::Call(..) | StackOp::Log2(_) => true,
                StackOp::Binary(top_op, _) => {
                    top_op.precedence() > incoming.precedence()
                        || (top_op.precedence() == incoming.precedence()
                            && incoming.assoc() == Assoc::Left)
                }
            };
            if !pops {
                self.stack.push(top);
                return Ok(());
            }
            self.emit_op(top)?;
        }
    }

    /// Pop to output until the matching `(` marker, discarding it.
    fn close_paren(&mut self, col: usize) -> Result<(), ParseError> {
        loop {
            let Some(top) = self.stack.pop() else {
                return Err(ParseError::syntax("unmatched `)`", col));
            };
            if let StackOp::LParen(_) = top {
                return Ok(());
            }
            self.emit_op(top)?;
        }
    }

    /// Drain the operator stack and check that exactly one value would
    /// remain on the evaluation stack.
    fn finish(mut self, end_col: usize) -> Result<Vec<RpnToken>, ParseError> {
        while let Some(op) = self.stack.pop() {
            self.emit_op(op)?;
        }
        match self.operands {
            1 => Ok(self.output),
            0 => Err(ParseError::syntax("empty expression", end_col)),
            _ => Err(ParseError::syntax(
                "expected operator between operands",
                end_col,
            )),
        }
    }
}
