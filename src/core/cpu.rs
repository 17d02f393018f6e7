//! APEX CPU core.
//!
//! The `Cpu` owns all architectural state (register file, data memory,
//! zero flag, program counter), the five stage latches, and the multiplier.
//! One call to [`Cpu::tick`] simulates one clock cycle.

use serde::Serialize;

use super::arch::{DataMemory, RegisterFile};
use super::pipeline::{stages, CycleView, Latches};
use super::program::Program;
use super::units::MulUnit;
use crate::common::constants::CODE_BASE;
use crate::config::Config;
use crate::stats::SimStats;

mod trace;

pub use trace::describe;

/// Architectural state captured at a cycle boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchSnapshot {
    /// Cycles completed.
    pub cycle: u64,
    /// Program counter of the next fetch.
    pub pc: i32,
    /// Register values, R0 first.
    pub registers: Vec<i32>,
    /// Register validity bits, R0 first.
    pub valid: Vec<bool>,
    pub zero_flag: bool,
    /// Full data memory contents.
    pub memory: Vec<i32>,
    /// Committed instruction count.
    pub committed: u64,
    pub halted: bool,
    /// Run statistics up to this cycle.
    pub stats: SimStats,
}

pub struct Cpu {
    pub regs: RegisterFile,
    pub memory: DataMemory,
    pub zero_flag: bool,
    pub pc: i32,
    pub program: Program,
    pub latches: Latches,
    pub mul_unit: MulUnit,
    pub halted: bool,
    pub clock: u64,
    pub stats: SimStats,
    pub cycle_view: CycleView,
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU at power-on with `program` in code memory.
    ///
    /// Data memory size and cycle tracing come from `config`.
    pub fn new(program: Program, config: &Config) -> Self {
        Self::with_memory(program, config.memory.data_words, config.traces_cycles())
    }

    /// Creates a CPU with `data_words` words of data memory.
    pub fn with_memory(program: Program, data_words: usize, trace: bool) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: DataMemory::new(data_words),
            zero_flag: false,
            pc: CODE_BASE,
            program,
            latches: Latches::default(),
            mul_unit: MulUnit::new(),
            halted: false,
            clock: 0,
            stats: SimStats::default(),
            cycle_view: CycleView::default(),
            trace,
        }
    }

    /// Simulates one clock cycle.
    ///
    /// Stages run in reverse pipeline order so each one reads its own
    /// latch before the stage behind it overwrites it.
    pub fn tick(&mut self) {
        self.cycle_view.clear();

        stages::wb_stage(self);
        stages::mem_stage(self);
        stages::execute_stage(self);
        let issue = stages::decode_stage(self);
        stages::fetch_stage(self, issue);

        self.clock += 1;
        self.stats.cycles += 1;
        tracing::trace!(cycle = self.clock, pc = self.pc, ?issue, "cycle complete");

        if self.trace {
            self.print_stage_contents();
        }
    }

    /// The five stage latches as they stand after the last cycle.
    pub fn latches(&self) -> &Latches {
        &self.latches
    }

    /// What each stage processed during the last cycle.
    pub fn cycle_view(&self) -> &CycleView {
        &self.cycle_view
    }

    /// Copies the architectural state.
    pub fn snapshot(&self) -> ArchSnapshot {
        ArchSnapshot {
            cycle: self.clock,
            pc: self.pc,
            registers: self.regs.values().to_vec(),
            valid: self.regs.validity().to_vec(),
            zero_flag: self.zero_flag,
            memory: self.memory.words().to_vec(),
            committed: self.stats.instructions_committed,
            halted: self.halted,
            stats: self.stats.clone(),
        }
    }
}
