/// Postfix (RPN) sequence elements emitted by the parser.
use crate::symbols::FunctionSig;
use crate::token::BinOp;

/// One element of the postfix evaluation order. Each operator or
/// function consumes exactly its arity from the elements before it;
/// the parser guarantees the sequence is well-formed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RpnToken {
    /// A numeric literal or a resolved named constant.
    Number(f64),
    /// The free variable `x`.
    Variable,
    Binary(BinOp),
    /// An arity-1 native call (`ln lg sin cos tan`).
    Call(FunctionSig),
    /// The base-2 logarithm expansion.
    Log2,
}
