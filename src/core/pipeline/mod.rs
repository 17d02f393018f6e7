//! Instruction pipeline implementation.
//!
//! This module contains the five-stage instruction pipeline (fetch, decode,
//! execute, memory, writeback), the stage latches, operand forwarding, and
//! the per-cycle hazard signals.

/// Operand forwarding and load-use detection.
pub mod hazards;

/// Stage latches and the per-cycle view of what each stage processed.
pub mod latches;

/// Hazard signals passed between stages within one cycle.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latch components.
pub mod traits;

pub use latches::{CycleView, Latches, Stage, StageLatch};
pub use signals::{IssueDecision, Operand, OperandResolution};
pub use traits::PipelineLatch;
