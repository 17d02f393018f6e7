//! Instruction Store.
//!
//! The program is an immutable, 0-indexed sequence of decoded instructions
//! built once before simulation starts. Fetch addresses it through the
//! program counter; any address that does not name a slot (below the code
//! base or past the last instruction) reads as a NOP, which is how the
//! pipeline drains after the final instruction.

use crate::common::{code_address, code_index, DRAIN_MARGIN};
use crate::isa::Instruction;

/// The loaded program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps an already-decoded instruction sequence.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Returns the instruction addressed by `pc`, or a NOP when `pc` does not
    /// name a slot.
    pub fn fetch(&self, pc: i32) -> Instruction {
        code_index(pc)
            .and_then(|i| self.instructions.get(i))
            .copied()
            .unwrap_or_else(Instruction::nop)
    }

    /// Program counter at which the pipeline is considered drained: the
    /// address `DRAIN_MARGIN` slots past the last instruction.
    pub fn drain_pc(&self) -> i32 {
        code_address(self.instructions.len() + DRAIN_MARGIN)
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
