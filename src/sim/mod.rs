//! Simulation harness.
//!
//! Loading programs from text and driving the CPU until it halts, drains,
//! or exhausts its cycle budget.

/// Text program loader.
pub mod loader;

/// Cycle loop and termination.
pub mod simulator;

pub use loader::{load_program, parse_program};
pub use simulator::{ExitReason, Simulator};
