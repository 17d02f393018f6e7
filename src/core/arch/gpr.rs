//! APEX General-Purpose Register File.
//!
//! This module implements the architectural register file: 32 signed
//! 32-bit registers (R0-R31) plus a parallel validity bit per register.
//! R0 is an ordinary register; nothing is hardwired to zero.
//!
//! The validity bits are informational only. They start set, are set
//! again whenever Writeback commits a register, and are never cleared at
//! issue; the forwarding logic does not consult them.

use crate::common::NUM_REGS;

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
    valid: [bool; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register zero and marked valid.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
            valid: [true; NUM_REGS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    pub fn read(&self, idx: usize) -> i32 {
        debug_assert!(idx < NUM_REGS, "register R{idx} out of range");
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Commits a value to a register and marks it valid.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    /// * `val` - The value to write
    pub fn write(&mut self, idx: usize, val: i32) {
        debug_assert!(idx < NUM_REGS, "register R{idx} out of range");
        if let (Some(reg), Some(valid)) = (self.regs.get_mut(idx), self.valid.get_mut(idx)) {
            *reg = val;
            *valid = true;
        }
    }

    /// Returns the validity bit of a register.
    pub fn is_valid(&self, idx: usize) -> bool {
        self.valid.get(idx).copied().unwrap_or(false)
    }

    /// All register values, R0 first.
    pub const fn values(&self) -> &[i32; NUM_REGS] {
        &self.regs
    }

    /// All validity bits, R0 first.
    pub const fn validity(&self) -> &[bool; NUM_REGS] {
        &self.valid
    }

    /// Prints the first `count` registers in the APEX state-report format.
    pub fn dump(&self, count: usize) {
        println!("\n=============== STATE OF ARCHITECTURAL REGISTER FILE ==========");
        for (i, (val, valid)) in self.regs.iter().zip(&self.valid).take(count).enumerate() {
            let status = if *valid { "Valid" } else { "Invalid" };
            println!("|   REG[{i:02}]  |   Value = {val:4}  |   Status = {status:>10}    |");
        }
    }
}
