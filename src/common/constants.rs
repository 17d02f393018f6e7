//! Architectural constants.
//!
//! These values are part of the APEX programming model: programs are
//! addressed from `CODE_BASE` in steps of `INSTRUCTION_WIDTH`, and the
//! register file and data memory have fixed capacities.

/// Address of the first instruction slot.
pub const CODE_BASE: i32 = 4000;

/// Distance in bytes between consecutive instruction slots.
pub const INSTRUCTION_WIDTH: i32 = 4;

/// Number of architectural registers (R0-R31).
pub const NUM_REGS: usize = 32;

/// Default capacity of the data memory in words.
pub const DATA_MEMORY_WORDS: usize = 4000;

/// Number of instruction slots fetched past the end of the program before
/// the driver declares the pipeline drained.
///
/// One slot per stage behind Fetch, so the last real instruction reaches
/// Writeback exactly when the program counter crosses the margin.
pub const DRAIN_MARGIN: usize = 4;
