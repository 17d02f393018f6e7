//! APEX CPU core.
//!
//! This module contains the processor model: architectural state, the
//! instruction store, functional units, the five-stage pipeline, and the
//! `Cpu` that ties them together one cycle at a time.

/// Register file and data memory.
pub mod arch;

/// CPU state and the per-cycle scheduler.
pub mod cpu;

/// Stage latches, forwarding, and the stage functions.
pub mod pipeline;

/// Immutable instruction store.
pub mod program;

/// ALU and multiplier.
pub mod units;

pub use cpu::{ArchSnapshot, Cpu};
pub use program::Program;
