//! Common utilities and types used throughout the APEX pipeline simulator.
//!
//! This module provides the architectural constants, program-counter
//! addressing helpers, and the error type shared by the loader,
//! configuration layer, and simulation driver.

/// Program-counter to instruction-slot addressing.
pub mod addr;

/// Architectural constants (code base, instruction width, register count).
pub mod constants;

/// Error types for loading, configuration, and reporting.
pub mod error;

pub use addr::{code_address, code_index};
pub use constants::{CODE_BASE, DATA_MEMORY_WORDS, DRAIN_MARGIN, INSTRUCTION_WIDTH, NUM_REGS};
pub use error::SimError;
