//! Data Hazard Detection and Forwarding.
//!
//! Decode obtains each source operand from the youngest in-flight producer
//! of that register, falling back to the architectural register file.
//! Because the stages run in reverse pipeline order, by the time Decode
//! runs the Execute and Memory latches already hold this cycle's results,
//! so a non-LOAD producer can always be forwarded. A LOAD only has its
//! value after the Memory stage has read data memory, which makes it
//! pending while it sits in Execute or Memory.

use crate::core::arch::RegisterFile;
use crate::isa::{Instruction, Opcode};

use super::latches::StageLatch;
use super::signals::{Operand, OperandResolution};

/// Forwarding view of one in-flight producer.
///
/// `loads_pending` is true when the producer is a LOAD whose value is not
/// yet in its result buffer.
fn forward_from(latch: &StageLatch, reg: usize, loads_pending: bool) -> Option<Operand> {
    if !latch.writes(reg) {
        return None;
    }
    if loads_pending && latch.inst.opcode == Opcode::Load {
        Some(Operand::Pending)
    } else {
        Some(Operand::Ready(latch.result_buffer))
    }
}

/// Resolves the value of register `reg` for the instruction in Decode.
///
/// Producers are searched youngest first: Execute, then Memory, then
/// Writeback, then the register file.
///
/// # Arguments
///
/// * `reg` - Source register index
/// * `ex` - The Execute latch
/// * `mem` - The Memory latch
/// * `wb` - The Writeback latch
/// * `regs` - The architectural register file
///
/// # Returns
///
/// [`Operand::Pending`] if the youngest producer is an unfinished LOAD,
/// otherwise the forwarded or architectural value.
pub fn resolve(
    reg: usize,
    ex: &StageLatch,
    mem: &StageLatch,
    wb: &StageLatch,
    regs: &RegisterFile,
) -> Operand {
    forward_from(ex, reg, true)
        .or_else(|| forward_from(mem, reg, true))
        .or_else(|| forward_from(wb, reg, false))
        .unwrap_or_else(|| Operand::Ready(regs.read(reg)))
}

/// Source registers an opcode reads at Decode.
///
/// STORE reads both the value register and the base register; LOAD and
/// JUMP read only their base register. Instructions with no register
/// sources resolve nothing.
pub const fn reads(op: Opcode) -> (bool, bool) {
    match op {
        Opcode::Store
        | Opcode::Add
        | Opcode::Sub
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Mul => (true, true),
        Opcode::Load | Opcode::Jump => (true, false),
        Opcode::Movc | Opcode::Bz | Opcode::Bnz | Opcode::Halt | Opcode::Nop => (false, false),
    }
}

/// Resolves every source operand `inst` declares.
///
/// Returns [`OperandResolution::Pending`] if any declared operand is
/// pending. Operands the opcode does not read are reported as `None`.
pub fn resolve_sources(
    inst: &Instruction,
    ex: &StageLatch,
    mem: &StageLatch,
    wb: &StageLatch,
    regs: &RegisterFile,
) -> OperandResolution {
    let (reads_rs1, reads_rs2) = reads(inst.opcode);
    let lookup = |wanted: bool, reg: Option<usize>| -> Operand {
        match (wanted, reg) {
            (true, Some(r)) => resolve(r, ex, mem, wb, regs),
            _ => Operand::Ready(0),
        }
    };

    let rs1 = lookup(reads_rs1, inst.rs1);
    let rs2 = lookup(reads_rs2, inst.rs2);
    if rs1.is_pending() || rs2.is_pending() {
        return OperandResolution::Pending;
    }

    OperandResolution::Ready {
        rs1: if reads_rs1 { rs1.value() } else { None },
        rs2: if reads_rs2 { rs2.value() } else { None },
    }
}
