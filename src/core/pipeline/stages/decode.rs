//! Instruction Decode (ID) Stage.
//!
//! Decode reads the source operands of the instruction it holds, taking
//! each one from the youngest in-flight producer or from the register
//! file. It also decides whether the instruction may move on this cycle:
//! a pending LOAD result inserts a bubble into Execute, and a multiply
//! occupying Execute freezes the front of the pipeline.

use crate::core::pipeline::hazards::resolve_sources;
use crate::core::pipeline::latches::Stage;
use crate::core::pipeline::signals::{IssueDecision, OperandResolution};
use crate::core::pipeline::stages::flushes_younger;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::Cpu;
use crate::isa::Opcode;

/// Executes the decode stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Returns
///
/// What happened to the decoded instruction, which Fetch uses to decide
/// whether it may hand over a new one.
pub fn decode_stage(cpu: &mut Cpu) -> IssueDecision {
    if cpu.latches.decode.busy {
        return IssueDecision::Idle;
    }

    if flushes_younger(&cpu.latches.writeback, cpu.zero_flag)
        || cpu.latches.memory.inst.opcode == Opcode::Halt
    {
        cpu.latches.decode.squash();
    }

    let resolution = resolve_sources(
        &cpu.latches.decode.inst,
        &cpu.latches.execute,
        &cpu.latches.memory,
        &cpu.latches.writeback,
        &cpu.regs,
    );

    let decision = match resolution {
        OperandResolution::Pending => {
            tracing::debug!(
                cycle = cpu.clock + 1,
                pc = cpu.latches.decode.pc,
                rs1 = ?cpu.latches.decode.inst.rs1,
                rs2 = ?cpu.latches.decode.inst.rs2,
                "ID load-use stall"
            );
            cpu.latches.execute.squash();
            cpu.stats.stalls_data += 1;
            IssueDecision::Stall
        }
        OperandResolution::Ready { .. } if cpu.mul_unit.is_busy() => {
            cpu.stats.stalls_mul += 1;
            IssueDecision::Freeze
        }
        OperandResolution::Ready { rs1, rs2 } => {
            let latch = &mut cpu.latches.decode;
            latch.rs1_value = rs1;
            latch.rs2_value = rs2;
            IssueDecision::Advance
        }
    };

    cpu.latches.decode.stalled = decision.holds_fetch();
    cpu.cycle_view.record(Stage::Decode, &cpu.latches.decode);
    if decision == IssueDecision::Advance {
        cpu.latches.execute = cpu.latches.decode.clone();
    }
    decision
}
