//! Pipeline latch interface.
//!
//! Control flow changes invalidate in-flight instructions by rewriting
//! their latches in place. The trait captures that operation so stages can
//! squash any latch uniformly.

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Converts the occupying instruction into a NOP.
    ///
    /// The latch keeps its program counter and fill state; only the
    /// instruction is retracted, so it can no longer write a register,
    /// touch memory, or redirect the program counter.
    fn squash(&mut self);

    /// Checks whether the latch holds a bubble.
    fn is_bubble(&self) -> bool;
}
