//! Execute (EX) Stage.
//!
//! This module implements the execution stage of the pipeline. It is
//! responsible for:
//! - Computing ALU results, effective addresses and branch targets.
//! - Updating the zero flag for ADD, SUB and MUL.
//! - Occupying the stage for a second cycle while MUL completes.

use crate::core::pipeline::latches::Stage;
use crate::core::pipeline::stages::flushes_younger;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::Alu;
use crate::core::Cpu;
use crate::isa::Opcode;

/// Executes the Execute stage of the pipeline.
///
/// # Logic Flow
/// 1. **Flush**: Squashes the latch if a control transfer or HALT has just
///    left the Memory stage.
/// 2. **Multiply**: On the first MUL cycle, marks the multiplier busy and
///    sends a bubble to Memory without advancing.
/// 3. **Execution**: Runs the ALU and updates the zero flag.
/// 4. **Advance**: Copies the latch into the Memory latch.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn execute_stage(cpu: &mut Cpu) {
    if cpu.latches.execute.busy {
        return;
    }

    if flushes_younger(&cpu.latches.writeback, cpu.zero_flag) {
        cpu.latches.execute.squash();
    }

    let opcode = cpu.latches.execute.inst.opcode;

    if opcode == Opcode::Mul && !cpu.mul_unit.step() {
        tracing::debug!(
            cycle = cpu.clock + 1,
            pc = cpu.latches.execute.pc,
            "EX multiply busy"
        );
        cpu.latches.execute.stalled = true;
        cpu.latches.memory.squash();
        cpu.cycle_view.record(Stage::Execute, &cpu.latches.execute);
        return;
    }

    let latch = &mut cpu.latches.execute;
    let a = latch.rs1_value.unwrap_or_default();
    let b = latch.rs2_value.unwrap_or_default();
    if let Some(result) = Alu::execute(opcode, latch.pc, a, b, latch.inst.imm_or_zero()) {
        latch.result_buffer = result;
        if opcode.sets_zero_flag() {
            cpu.zero_flag = result == 0;
        }
        tracing::trace!(pc = latch.pc, op = %opcode, result, "EX");
    }
    latch.stalled = false;

    cpu.cycle_view.record(Stage::Execute, &cpu.latches.execute);
    cpu.latches.memory = cpu.latches.execute.clone();
}
