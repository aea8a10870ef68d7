pub mod error;
pub mod lexer;
pub mod parser;
pub mod rpn;
pub mod symbols;
pub mod token;

pub use error::ParseError;
pub use parser::{parse, parse_tokens};
pub use rpn::RpnToken;
pub use symbols::{FunctionSig, Symbol, SymbolTable};
pub use token::{Assoc, BinOp, Token, TokenKind};
