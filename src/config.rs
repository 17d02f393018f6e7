//! Simulator configuration.
//!
//! Settings are read from a TOML file. Every section and key is optional
//! and falls back to the values of a stock APEX run, so an empty file is a
//! valid configuration.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::common::constants::DATA_MEMORY_WORDS;
use crate::common::SimError;

const DEFAULT_REPORT_REGISTERS: usize = 16;
const DEFAULT_REPORT_MEMORY_WORDS: usize = 100;

/// How much the simulator prints while it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Print nothing but the completion line.
    Quiet,
    /// Print the final register file and data memory.
    #[default]
    Simulate,
    /// Also print every stage's contents each cycle.
    Display,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub simulation: SimulationConfig,
    pub memory: MemoryConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    pub verbosity: Verbosity,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Upper bound on simulated cycles. Unbounded when absent.
    pub max_cycles: Option<u64>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MemoryConfig {
    /// Size of data memory in words.
    pub data_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_words: DATA_MEMORY_WORDS,
        }
    }
}

/// Extent of the final state dump.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub registers: usize,
    pub memory_words: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            registers: DEFAULT_REPORT_REGISTERS,
            memory_words: DEFAULT_REPORT_MEMORY_WORDS,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Whether every cycle's stage contents should be printed.
    pub fn traces_cycles(&self) -> bool {
        cfg!(feature = "always-trace") || self.general.verbosity == Verbosity::Display
    }
}
