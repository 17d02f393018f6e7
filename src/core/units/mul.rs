//! Multi-cycle multiply unit.
//!
//! MUL occupies Execute for two cycles. The unit's busy flag is the only
//! hazard state that survives a cycle boundary: it is raised on the first
//! cycle (nothing leaves Execute, Decode and Fetch freeze), cleared on the
//! second when the product is produced, and reset by a taken branch or
//! jump squashing the pipeline.

/// Busy state of the multiplier, owned by the Execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MulUnit {
    busy: bool,
}

impl MulUnit {
    /// Creates an idle unit.
    pub const fn new() -> Self {
        Self { busy: false }
    }

    /// Whether a MUL is mid-flight in Execute.
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Advances the two-cycle protocol for the MUL currently in Execute.
    ///
    /// Returns `false` on the first cycle (the unit becomes busy) and `true`
    /// on the second, when the product may leave Execute (the unit becomes
    /// idle again).
    pub fn step(&mut self) -> bool {
        let ready = self.busy;
        self.busy = !self.busy;
        ready
    }

    /// Abandons any multiply in progress.
    pub fn reset(&mut self) {
        self.busy = false;
    }
}
