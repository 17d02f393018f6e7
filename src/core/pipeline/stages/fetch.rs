//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction at the program counter and hands it to Decode
//! unless Decode is holding its own instruction this cycle, in which case
//! the program counter is rewound so the same address is fetched again.

use crate::common::constants::INSTRUCTION_WIDTH;
use crate::core::pipeline::latches::{Stage, StageLatch};
use crate::core::pipeline::signals::IssueDecision;
use crate::core::Cpu;
use crate::isa::{Instruction, Opcode};

/// Executes the instruction fetch stage.
///
/// Addresses outside the program fetch a NOP. Once HALT has executed,
/// everything fetched behind it is replaced by a NOP as well.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `issue` - What Decode did this cycle.
pub fn fetch_stage(cpu: &mut Cpu, issue: IssueDecision) {
    if cpu.latches.fetch.busy {
        return;
    }

    let pc = cpu.pc;
    let inst = if cpu.latches.memory.inst.opcode == Opcode::Halt {
        Instruction::nop()
    } else {
        cpu.program.fetch(pc)
    };

    cpu.latches.fetch = StageLatch::fetched(pc, inst);
    cpu.pc = pc.wrapping_add(INSTRUCTION_WIDTH);

    if issue.holds_fetch() || cpu.mul_unit.is_busy() {
        cpu.pc = pc;
        cpu.latches.fetch.stalled = true;
        tracing::trace!(pc, "IF hold");
    } else {
        tracing::trace!(pc, inst = %inst, "IF");
        cpu.latches.decode = cpu.latches.fetch.clone();
    }

    cpu.cycle_view.record(Stage::Fetch, &cpu.latches.fetch);
}
