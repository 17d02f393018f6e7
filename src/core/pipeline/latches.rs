//! Pipeline latch structures for inter-stage communication.
//!
//! Each of the five stages owns one latch holding the instruction that
//! currently occupies it plus the values computed for it so far. A stage
//! advances by overwriting the *next* stage's latch with a copy of its own;
//! because stages run in reverse pipeline order, a latch is never
//! overwritten before the stage that owns it has read it this cycle.

use std::fmt;

use crate::isa::Instruction;

use super::traits::PipelineLatch;

/// Pipeline stages, in program-flow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Decode and register fetch.
    Decode,
    /// Execute.
    Execute,
    /// Data memory access and branch resolution.
    Memory,
    /// Register writeback.
    Writeback,
}

impl Stage {
    /// All stages in program-flow order.
    pub const ALL: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Position of the stage in program-flow order.
    pub const fn index(self) -> usize {
        match self {
            Self::Fetch => 0,
            Self::Decode => 1,
            Self::Execute => 2,
            Self::Memory => 3,
            Self::Writeback => 4,
        }
    }

    /// Display name used by the cycle trace.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "Fetch",
            Self::Decode => "Decode/RF",
            Self::Execute => "Execute",
            Self::Memory => "Memory",
            Self::Writeback => "Writeback",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of one stage's latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageLatch {
    /// Program counter the instruction was fetched from.
    pub pc: i32,
    /// The instruction occupying the stage.
    pub inst: Instruction,
    /// `rs1` value, present once Decode has resolved it.
    pub rs1_value: Option<i32>,
    /// `rs2` value, present once Decode has resolved it.
    pub rs2_value: Option<i32>,
    /// ALU result, effective address, branch target, or loaded value.
    pub result_buffer: i32,
    /// Data memory address accessed by the Memory stage.
    pub memory_address: Option<i32>,
    /// Set until the first instruction reaches this stage. Only Fetch
    /// starts clear; advancing copies a clear flag forward, and nothing
    /// ever sets it again.
    pub busy: bool,
    /// Whether the stage held this instruction instead of advancing it on
    /// the last cycle it ran. Reported for tracing only.
    pub stalled: bool,
}

impl StageLatch {
    /// An empty latch that has not yet seen an instruction.
    pub fn idle() -> Self {
        Self {
            busy: true,
            ..Self::default()
        }
    }

    /// A freshly fetched instruction.
    pub fn fetched(pc: i32, inst: Instruction) -> Self {
        Self {
            pc,
            inst,
            ..Self::default()
        }
    }

    /// Whether the occupying instruction writes register `reg`.
    pub fn writes(&self, reg: usize) -> bool {
        self.inst.rd == Some(reg)
    }
}

impl PipelineLatch for StageLatch {
    fn squash(&mut self) {
        self.inst = Instruction::nop();
    }

    fn is_bubble(&self) -> bool {
        self.inst.is_nop()
    }
}

/// The five stage latches of the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latches {
    /// Fetch latch: the instruction fetched this cycle.
    pub fetch: StageLatch,
    /// Decode/register-fetch latch.
    pub decode: StageLatch,
    /// Execute latch.
    pub execute: StageLatch,
    /// Memory latch.
    pub memory: StageLatch,
    /// Writeback latch.
    pub writeback: StageLatch,
}

impl Default for Latches {
    /// Creates the power-on pipeline: every stage except Fetch is busy.
    fn default() -> Self {
        Self {
            fetch: StageLatch::default(),
            decode: StageLatch::idle(),
            execute: StageLatch::idle(),
            memory: StageLatch::idle(),
            writeback: StageLatch::idle(),
        }
    }
}

impl Latches {
    /// Latch owned by `stage`.
    pub const fn get(&self, stage: Stage) -> &StageLatch {
        match stage {
            Stage::Fetch => &self.fetch,
            Stage::Decode => &self.decode,
            Stage::Execute => &self.execute,
            Stage::Memory => &self.memory,
            Stage::Writeback => &self.writeback,
        }
    }

    /// Iterates the latches in program-flow order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &StageLatch)> + '_ {
        Stage::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// What each stage processed during the most recent cycle.
///
/// A stage's entry is `None` when it did not run (it was still waiting for
/// the pipeline to fill). This is the view the per-cycle display prints,
/// since a latch may be overwritten by the upstream stage later in the
/// same cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleView {
    stages: [Option<StageLatch>; 5],
}

impl CycleView {
    /// Records the latch `stage` processed this cycle.
    pub fn record(&mut self, stage: Stage, latch: &StageLatch) {
        self.stages[stage.index()] = Some(latch.clone());
    }

    /// Forgets the previous cycle.
    pub fn clear(&mut self) {
        self.stages = Default::default();
    }

    /// The latch `stage` processed, if it ran.
    pub fn get(&self, stage: Stage) -> Option<&StageLatch> {
        self.stages[stage.index()].as_ref()
    }
}
