//! Memory Access (MEM) Stage.
//!
//! Performs data memory reads and writes and resolves control transfers.
//! Branch and jump targets were computed by Execute; the decision to take
//! them is made here, after which the two younger instructions in Decode
//! and Execute are squashed and fetch is redirected.

use crate::core::pipeline::latches::Stage;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::Cpu;
use crate::isa::Opcode;

/// Executes the memory stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn mem_stage(cpu: &mut Cpu) {
    if cpu.latches.memory.busy {
        return;
    }

    let latch = &mut cpu.latches.memory;
    let addr = latch.result_buffer;

    match latch.inst.opcode {
        Opcode::Store => {
            let value = latch.rs1_value.unwrap_or_default();
            cpu.memory.write(addr, value);
            latch.memory_address = Some(addr);
            tracing::trace!(pc = latch.pc, addr, value, "MEM store");
        }
        Opcode::Load => {
            latch.result_buffer = cpu.memory.read(addr);
            latch.memory_address = Some(addr);
            tracing::trace!(pc = latch.pc, addr, value = latch.result_buffer, "MEM load");
        }
        opcode if opcode.is_control() => {
            let taken = match opcode {
                Opcode::Bz => cpu.zero_flag,
                Opcode::Bnz => !cpu.zero_flag,
                _ => true,
            };
            if taken {
                let target = latch.result_buffer;
                tracing::debug!(cycle = cpu.clock + 1, pc = latch.pc, target, "MEM redirect");
                cpu.latches.execute.squash();
                cpu.latches.decode.squash();
                cpu.mul_unit.reset();
                cpu.pc = target;
                cpu.stats.redirects += 1;
            }
        }
        _ => {}
    }

    cpu.cycle_view.record(Stage::Memory, &cpu.latches.memory);
    cpu.latches.writeback = cpu.latches.memory.clone();
}
