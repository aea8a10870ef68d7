//! Code generator: postfix sequence → instruction list plus the exact
//! peak stack depth evaluating it requires.
//!
//! The depth simulation runs at instruction granularity. The `log`
//! lowering nets zero slots but pushes an interior constant, so its
//! true peak is one above its surroundings; measuring per source token
//! would silently undercount it and corrupt the evaluator's frame.

use formula_parser::rpn::RpnToken;
use formula_parser::symbols::SymbolTable;
use formula_parser::token::BinOp;
use vm::Instruction;

use crate::error::{CodegenError, CompileError};

/// A compiled expression: instructions in postfix evaluation order and
/// the peak number of stack slots they require.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledExpression {
    pub instructions: Vec<Instruction>,
    pub max_stack_depth: u32,
}

/// Compile a source string against a symbol catalog.
///
/// ```
/// use compiler::compile;
/// use formula_parser::SymbolTable;
///
/// let expr = compile("2+3", &SymbolTable::standard()).unwrap();
/// assert_eq!(expr.max_stack_depth, 2);
/// ```
pub fn compile(source: &str, symbols: &SymbolTable) -> Result<CompiledExpression, CompileError> {
    let rpn = formula_parser::parse(source, symbols)?;
    Ok(generate(&rpn)?)
}

/// Lower a postfix sequence to instructions.
pub fn generate(rpn: &[RpnToken]) -> Result<CompiledExpression, CodegenError> {
    let mut cg = CodeGen {
        instructions: Vec::new(),
        depth: 0,
        max_depth: 0,
    };

    for token in rpn {
        match *token {
            RpnToken::Number(value) => cg.emit(Instruction::PushConst(value))?,
            RpnToken::Variable => cg.emit(Instruction::LoadVar)?,
            RpnToken::Binary(op) => cg.emit(lower_binary(op))?,
            RpnToken::Call(sig) => cg.emit(Instruction::Call {
                name: sig.name,
                arity: sig.arity,
            })?,
            RpnToken::Log2 => {
                // log2(v) = ln(v) / ln(2), spelled out as four
                // instructions so the interior PushConst(2.0) is
                // visible to the depth simulation.
                cg.emit(Instruction::Call { name: "ln", arity: 1 })?;
                cg.emit(Instruction::PushConst(2.0))?;
                cg.emit(Instruction::Call { name: "ln", arity: 1 })?;
                cg.emit(Instruction::Div)?;
            }
        }
    }

    Ok(CompiledExpression {
        instructions: cg.instructions,
        max_stack_depth: cg.max_depth,
    })
}

fn lower_binary(op: BinOp) -> Instruction {
    match op {
        BinOp::Add => Instruction::Add,
        BinOp::Sub => Instruction::Sub,
        BinOp::Mul => Instruction::Mul,
        BinOp::Div => Instruction::Div,
        BinOp::Pow => Instruction::Call {
            name: "pow",
            arity: 2,
        },
    }
}

struct CodeGen {
    instructions: Vec<Instruction>,
    depth: u32,
    max_depth: u32,
}

impl CodeGen {
    /// Emit one instruction and step the stack simulation.
    fn emit(&mut self, instr: Instruction) -> Result<(), CodegenError> {
        let pops = instr.pops();
        if self.depth < pops {
            return Err(CodegenError::StackUnderflow {
                index: self.instructions.len(),
            });
        }
        self.depth = self.depth - pops + instr.pushes();
        self.max_depth = self.max_depth.max(self.depth);
        self.instructions.push(instr);
        Ok(())
    }
}
