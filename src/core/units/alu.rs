//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the single-cycle datapath used in the Execute
//! stage. It computes the value each opcode deposits in its latch's result
//! buffer: an arithmetic or logical result, an effective address, or a
//! control-transfer target. Multiplication is computed here too, but its
//! two-cycle occupancy is sequenced by `MulUnit`.

use crate::isa::Opcode;

/// Integer ALU for APEX operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Computes the result buffer for one instruction.
    ///
    /// # Arguments
    ///
    /// * `op` - Opcode being executed
    /// * `pc` - Address of the instruction (branch base)
    /// * `a` - Resolved `rs1` value (zero when absent)
    /// * `b` - Resolved `rs2` value (zero when absent)
    /// * `imm` - Immediate (zero when absent)
    ///
    /// # Returns
    ///
    /// `None` for HALT and NOP, which perform no computation. All arithmetic
    /// wraps on 32-bit overflow.
    pub fn execute(op: Opcode, pc: i32, a: i32, b: i32, imm: i32) -> Option<i32> {
        let res = match op {
            Opcode::Store => b.wrapping_add(imm),
            Opcode::Load | Opcode::Jump => a.wrapping_add(imm),
            Opcode::Movc => imm,
            Opcode::Add => a.wrapping_add(b),
            Opcode::Sub => a.wrapping_sub(b),
            Opcode::And => a & b,
            Opcode::Or => a | b,
            Opcode::Xor => a ^ b,
            Opcode::Mul => a.wrapping_mul(b),
            Opcode::Bz | Opcode::Bnz => pc.wrapping_add(imm),
            Opcode::Halt | Opcode::Nop => return None,
        };
        Some(res)
    }
}
