//! Cycle trace and state dump printing.
//!
//! Formats the per-cycle stage contents and the final architectural state
//! in the classic APEX layout.

use super::Cpu;
use crate::core::pipeline::{Stage, StageLatch};
use crate::isa::Opcode;

/// Order in which the stages run, and are therefore printed, each cycle.
const PRINT_ORDER: [Stage; 5] = [
    Stage::Writeback,
    Stage::Memory,
    Stage::Execute,
    Stage::Decode,
    Stage::Fetch,
];

/// Renders one stage line, e.g. `Writeback      : pc(4000) MOVC,R0,#5 R0(5)`.
///
/// The Writeback line also shows the committed effect.
pub fn describe(stage: Stage, latch: &StageLatch) -> String {
    let mut line = format!("{:<15}: pc({}) {}", stage.name(), latch.pc, latch.inst);
    if stage == Stage::Writeback {
        match (latch.inst.opcode, latch.inst.rd) {
            (Opcode::Store, _) => {
                let addr = latch.memory_address.unwrap_or(latch.result_buffer);
                let value = latch.rs1_value.unwrap_or_default();
                line.push_str(&format!(" MEM({addr})={value}"));
            }
            (op, Some(rd)) if op.writes_register() => {
                line.push_str(&format!(" R{rd}({})", latch.result_buffer));
            }
            _ => {}
        }
    }
    line
}

impl Cpu {
    /// Prints what every stage processed during the last cycle.
    pub fn print_stage_contents(&self) {
        println!("--------------------------------");
        println!("Clock Cycle #: {}", self.clock);
        println!("--------------------------------");
        for stage in PRINT_ORDER {
            if let Some(latch) = self.cycle_view.get(stage) {
                println!("{}", describe(stage, latch));
            }
        }
    }

    /// Prints the first `registers` registers and `memory_words` data words.
    pub fn dump_state(&self, registers: usize, memory_words: usize) {
        self.regs.dump(registers);
        self.memory.dump(memory_words);
    }
}
