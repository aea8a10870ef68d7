//! Reference stack machine mapping each instruction to an `f64`
//! operation. Native calls dispatch by name over the closed set the
//! compiler emits.

use crate::error::RuntimeError;
use crate::instruction::Instruction;

/// Evaluate an instruction sequence at the point `x`.
pub fn evaluate(instructions: &[Instruction], x: f64) -> Result<f64, RuntimeError> {
    let mut stack: Vec<f64> = Vec::new();
    for instr in instructions {
        match *instr {
            Instruction::PushConst(value) => stack.push(value),
            Instruction::LoadVar => stack.push(x),
            Instruction::Add => binary(&mut stack, |a, b| a + b)?,
            Instruction::Sub => binary(&mut stack, |a, b| a - b)?,
            Instruction::Mul => binary(&mut stack, |a, b| a * b)?,
            Instruction::Div => binary(&mut stack, |a, b| a / b)?,
            Instruction::Call { name, arity } => call(&mut stack, name, arity)?,
        }
    }
    stack.pop().ok_or(RuntimeError::StackUnderflow)
}

fn binary(stack: &mut Vec<f64>, op: impl Fn(f64, f64) -> f64) -> Result<(), RuntimeError> {
    let rhs = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
    let lhs = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
    stack.push(op(lhs, rhs));
    Ok(())
}

fn unary(stack: &mut Vec<f64>, op: impl Fn(f64) -> f64) -> Result<(), RuntimeError> {
    let v = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
    stack.push(op(v));
    Ok(())
}

fn call(stack: &mut Vec<f64>, name: &str, arity: u8) -> Result<(), RuntimeError> {
    match (name, arity) {
        ("pow", 2) => binary(stack, f64::powf),
        ("sin", 1) => unary(stack, f64::sin),
        ("cos", 1) => unary(stack, f64::cos),
        ("tan", 1) => unary(stack, f64::tan),
        ("ln", 1) => unary(stack, f64::ln),
        ("log10", 1) => unary(stack, f64::log10),
        _ => Err(RuntimeError::UnknownFunction(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_add() {
        let prog = vec![
            Instruction::PushConst(2.0),
            Instruction::PushConst(3.0),
            Instruction::Add,
        ];
        assert_eq!(evaluate(&prog, 0.0), Ok(5.0));
    }

    #[test]
    fn variable_load() {
        let prog = vec![Instruction::LoadVar, Instruction::LoadVar, Instruction::Mul];
        assert_eq!(evaluate(&prog, 4.0), Ok(16.0));
    }

    #[test]
    fn operand_order() {
        // 10 - 4, not 4 - 10.
        let prog = vec![
            Instruction::PushConst(10.0),
            Instruction::PushConst(4.0),
            Instruction::Sub,
        ];
        assert_eq!(evaluate(&prog, 0.0), Ok(6.0));
    }

    #[test]
    fn native_call() {
        let prog = vec![
            Instruction::PushConst(2.0),
            Instruction::PushConst(10.0),
            Instruction::Call {
                name: "pow",
                arity: 2,
            },
        ];
        assert_eq!(evaluate(&prog, 0.0), Ok(1024.0));
    }

    #[test]
    fn underflow_detected() {
        assert_eq!(evaluate(&[Instruction::Add], 0.0), Err(RuntimeError::StackUnderflow));
        assert_eq!(evaluate(&[], 0.0), Err(RuntimeError::StackUnderflow));
    }

    #[test]
    fn unknown_function() {
        let prog = vec![
            Instruction::PushConst(1.0),
            Instruction::Call {
                name: "sinh",
                arity: 1,
            },
        ];
        assert_eq!(
            evaluate(&prog, 0.0),
            Err(RuntimeError::UnknownFunction("sinh".into()))
        );
    }
}
