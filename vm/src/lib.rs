pub mod error;
pub mod instruction;
pub mod machine;

pub use error::RuntimeError;
pub use instruction::Instruction;
pub use machine::evaluate;
