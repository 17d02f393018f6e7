//! Writeback (WB) Stage.
//!
//! The final stage of the pipeline. It commits results to the
//! architectural register file, counts committed instructions, and
//! recognizes HALT.

use crate::core::pipeline::latches::Stage;
use crate::core::Cpu;
use crate::isa::Opcode;

/// Executes the writeback stage.
///
/// Register-writing instructions commit their result buffer to `rd`. Every
/// instruction other than NOP and HALT counts as committed. HALT stops the
/// simulation at the end of the current cycle.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn wb_stage(cpu: &mut Cpu) {
    let wb = &cpu.latches.writeback;
    if wb.busy {
        return;
    }

    let inst = wb.inst;
    let result = wb.result_buffer;
    let pc = wb.pc;

    if inst.opcode.writes_register() {
        if let Some(rd) = inst.rd {
            cpu.regs.write(rd, result);
            tracing::trace!(pc, rd, value = result, "WB commit");
        }
    }

    match inst.opcode {
        Opcode::Nop => {}
        Opcode::Halt => {
            cpu.halted = true;
            tracing::debug!(pc, "HALT reached writeback");
        }
        _ => cpu.stats.instructions_committed += 1,
    }

    cpu.cycle_view.record(Stage::Writeback, &cpu.latches.writeback);
}
