#[derive(Debug, PartialEq, Eq)]
pub enum RuntimeError {
    StackUnderflow,
    UnknownFunction(String),
}
