//! Per-cycle hazard signals.
//!
//! These values are computed fresh every cycle and handed from the stage
//! that produces them to the stage that consumes them. None of them is
//! stored between cycles.

/// Availability of one source operand at Decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The most recent value of the register.
    Ready(i32),
    /// The producer is a LOAD that has not finished its memory access.
    Pending,
}

impl Operand {
    /// The value, if available.
    pub const fn value(self) -> Option<i32> {
        match self {
            Self::Ready(v) => Some(v),
            Self::Pending => None,
        }
    }

    /// Whether the operand forces a stall.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Result of resolving every source operand an instruction declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandResolution {
    /// All declared operands are available. Undeclared ones are `None`.
    Ready {
        /// `rs1` value if the opcode reads `rs1`.
        rs1: Option<i32>,
        /// `rs2` value if the opcode reads `rs2`.
        rs2: Option<i32>,
    },
    /// At least one declared operand is pending.
    Pending,
}

/// What Decode did with its instruction this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueDecision {
    /// Decode has not yet received an instruction.
    Idle,
    /// The instruction moved into Execute.
    Advance,
    /// An operand is pending: a bubble entered Execute and the instruction
    /// stays in Decode.
    Stall,
    /// The multiplier occupies Execute: nothing moved.
    Freeze,
}

impl IssueDecision {
    /// Whether Fetch must re-fetch the same address next cycle instead of
    /// handing a new instruction to Decode.
    pub const fn holds_fetch(self) -> bool {
        matches!(self, Self::Stall | Self::Freeze)
    }
}
