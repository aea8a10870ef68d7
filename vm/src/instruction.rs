//! Instruction set for the stack evaluator.
//!
//! Each instruction carries its own static stack effect: the number of
//! slots it pops and pushes, one slot per numeric value. Depth
//! accounting in the code generator runs per instruction, never per
//! source token, because multi-instruction lowerings (the base-2 log
//! expansion) have interior peaks their net effect hides.

/// One instruction of a compiled expression. Operands live on the
/// evaluator's value stack.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Push a literal or resolved constant.
    PushConst(f64),
    /// Push the free variable `x`.
    LoadVar,
    Add,
    Sub,
    Mul,
    Div,
    /// Call a native function: pops `arity` operands, pushes the result.
    Call { name: &'static str, arity: u8 },
}

impl Instruction {
    /// Slots consumed from the stack.
    pub fn pops(&self) -> u32 {
        match self {
            Instruction::PushConst(_) | Instruction::LoadVar => 0,
            Instruction::Add | Instruction::Sub | Instruction::Mul | Instruction::Div => 2,
            Instruction::Call { arity, .. } => u32::from(*arity),
        }
    }

    /// Slots produced. Every instruction leaves exactly one result slot.
    pub fn pushes(&self) -> u32 {
        1
    }

    /// Net change in stack depth.
    pub fn stack_effect(&self) -> i32 {
        self.pushes() as i32 - self.pops() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_effects() {
        assert_eq!(Instruction::PushConst(1.0).stack_effect(), 1);
        assert_eq!(Instruction::LoadVar.stack_effect(), 1);
        assert_eq!(Instruction::Add.stack_effect(), -1);
        assert_eq!(Instruction::Div.stack_effect(), -1);
        // Arity-1 calls pop one operand and push one result.
        assert_eq!(
            Instruction::Call {
                name: "sin",
                arity: 1
            }
            .stack_effect(),
            0
        );
        assert_eq!(
            Instruction::Call {
                name: "pow",
                arity: 2
            }
            .stack_effect(),
            -1
        );
    }
}
