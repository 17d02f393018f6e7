//! Execution units.
//!
//! Functional units used by the Execute stage: the single-cycle ALU and
//! the two-cycle multiplier.

/// Arithmetic Logic Unit.
pub mod alu;

/// Multi-cycle multiply unit.
pub mod mul;

pub use alu::Alu;
pub use mul::MulUnit;
