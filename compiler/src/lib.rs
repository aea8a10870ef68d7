pub mod codegen;
pub mod error;

pub use codegen::{compile, generate, CompiledExpression};
pub use error::{CodegenError, CompileError};
