//! Pipeline Driver.
//!
//! Owns the CPU and decides, between cycles, whether the simulation is
//! over. Three conditions end a run:
//!
//! 1. **Halted**: HALT reached Writeback during the last cycle.
//! 2. **EndOfProgram**: the program counter has run past the last
//!    instruction by the drain margin and every stage behind Fetch holds a
//!    bubble. A control transfer to an address past the end reaches the
//!    drain address early, so the instructions still in flight are
//!    finished first.
//! 3. **CycleLimit**: the configured cycle budget is spent.

use std::fmt;

use crate::config::Config;
use crate::core::pipeline::{PipelineLatch, Stage};
use crate::core::{Cpu, Program};

/// Why a simulation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// HALT committed.
    Halted,
    /// Fetch ran past the end of the program and the pipeline drained.
    EndOfProgram,
    /// The cycle budget ran out first.
    CycleLimit,
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Halted => "halted",
            Self::EndOfProgram => "end of program",
            Self::CycleLimit => "cycle limit reached",
        })
    }
}

/// Runs a [`Cpu`] to completion.
pub struct Simulator {
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Builds a simulator for `program` using `config`.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(program, config),
            max_cycles: config.simulation.max_cycles,
        }
    }

    /// Wraps an already constructed CPU.
    pub fn from_cpu(cpu: Cpu, max_cycles: Option<u64>) -> Self {
        Self { cpu, max_cycles }
    }

    /// Whether Decode through Writeback hold nothing left to commit.
    fn drained(&self) -> bool {
        self.cpu
            .latches
            .iter()
            .filter(|(stage, _)| *stage != Stage::Fetch)
            .all(|(_, latch)| latch.is_bubble())
    }

    /// Checks the conditions that end a run before the next cycle starts.
    fn should_stop(&self) -> Option<ExitReason> {
        if self.cpu.halted {
            return Some(ExitReason::Halted);
        }
        if self.cpu.pc >= self.cpu.program.drain_pc() && self.drained() {
            return Some(ExitReason::EndOfProgram);
        }
        if self.max_cycles.is_some_and(|max| self.cpu.clock >= max) {
            return Some(ExitReason::CycleLimit);
        }
        None
    }

    /// Simulates one cycle unless the run is already over.
    ///
    /// # Returns
    ///
    /// `Some(reason)` once the run has ended, `None` while it continues.
    pub fn step(&mut self) -> Option<ExitReason> {
        if let Some(reason) = self.should_stop() {
            return Some(reason);
        }
        self.cpu.tick();
        None
    }

    /// Runs until the simulation ends.
    pub fn run(&mut self) -> ExitReason {
        self.run_with(|_| {})
    }

    /// Runs until the simulation ends, calling `observer` after every
    /// cycle.
    pub fn run_with<F>(&mut self, mut observer: F) -> ExitReason
    where
        F: FnMut(&Cpu),
    {
        let reason = loop {
            if let Some(reason) = self.should_stop() {
                break reason;
            }
            self.cpu.tick();
            observer(&self.cpu);
            if self.cpu.halted {
                break ExitReason::Halted;
            }
        };
        tracing::debug!(
            cycles = self.cpu.clock,
            committed = self.cpu.stats.instructions_committed,
            %reason,
            "simulation complete"
        );
        reason
    }
}
