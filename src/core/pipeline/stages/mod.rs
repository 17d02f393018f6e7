//! Pipeline stage implementations.
//!
//! Contains the five stages of the instruction pipeline:
//! - Fetch: Reads the next instruction from code memory
//! - Decode: Resolves source operands and detects data hazards
//! - Execute: Performs ALU operations and drives the multiplier
//! - Memory: Handles load/store operations and resolves control transfers
//! - Writeback: Commits results to the register file
//!
//! The CPU calls them in reverse order (writeback first) once per cycle, so
//! every stage reads its own latch before the upstream stage overwrites it.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;

use crate::isa::Opcode;

use super::latches::StageLatch;

/// Whether the instruction that has just left the Memory stage retires
/// everything younger than it: a taken branch, a jump, or HALT.
///
/// Decode and Execute each apply this check to their own latch. It reads
/// the zero flag as it stands when the check runs, so Decode sees any flag
/// update Execute made earlier in the same cycle.
pub(crate) fn flushes_younger(wb: &StageLatch, zero_flag: bool) -> bool {
    match wb.inst.opcode {
        Opcode::Bz => zero_flag,
        Opcode::Bnz => !zero_flag,
        Opcode::Jump | Opcode::Halt => true,
        _ => false,
    }
}
