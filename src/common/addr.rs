//! Program counter addressing.
//!
//! The loader produces a 0-indexed instruction list; the pipeline addresses
//! it through the program counter using `index = (pc - CODE_BASE) / 4`.

use super::constants::{CODE_BASE, INSTRUCTION_WIDTH};

/// Converts a program counter into an instruction slot index.
///
/// Returns `None` for addresses below `CODE_BASE`, which never name a slot.
pub fn code_index(pc: i32) -> Option<usize> {
    let offset = pc.checked_sub(CODE_BASE)?;
    if offset < 0 {
        return None;
    }
    usize::try_from(offset / INSTRUCTION_WIDTH).ok()
}

/// Converts an instruction slot index back into its program counter.
pub fn code_address(index: usize) -> i32 {
    let index = i32::try_from(index).unwrap_or(i32::MAX / INSTRUCTION_WIDTH);
    CODE_BASE.saturating_add(index.saturating_mul(INSTRUCTION_WIDTH))
}
