use std::fmt;

use formula_parser::ParseError;

/// Stack underflow while simulating the emitted instructions. A
/// well-formed RPN sequence never triggers this; it guards against
/// upstream invariant violations.
#[derive(Clone, Debug, PartialEq)]
pub enum CodegenError {
    StackUnderflow { index: usize },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::StackUnderflow { index } => {
                write!(f, "stack underflow at instruction {index}")
            }
        }
    }
}

impl std::error::Error for CodegenError {}

/// Any failure of the source → `CompiledExpression` pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum CompileError {
    Parse(ParseError),
    Codegen(CodegenError),
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<CodegenError> for CompileError {
    fn from(err: CodegenError) -> Self {
        CompileError::Codegen(err)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(err) => err.fmt(f),
            CompileError::Codegen(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for CompileError {}
