//! APEX architectural state.
//!
//! This module contains the programmer-visible storage of the machine:
//! the register file with its validity bits and the data memory.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Data memory implementation.
pub mod memory;

pub use gpr::RegisterFile;
pub use memory::DataMemory;
