//! APEX Pipeline Simulator CLI.
//!
//! Loads an APEX assembly program, runs it through the five-stage pipeline,
//! and reports the final architectural state.
//!
//! # Usage
//!
//! ```text
//! apex-sim program.asm --mode display --cycles 50
//! ```
//!
//! The verbosity decides what is printed:
//! 1. **quiet**: only the completion line.
//! 2. **simulate**: the final register file and data memory.
//! 3. **display**: additionally every stage's contents on every cycle.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use apex_sim::common::SimError;
use apex_sim::config::{Config, Verbosity};
use apex_sim::sim::{load_program, Simulator};

/// Command-line arguments for the APEX pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "APEX 5-Stage Pipeline Simulator")]
struct Args {
    /// Assembly program to run.
    program: PathBuf,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output verbosity, overriding the configuration file.
    #[arg(short, long, value_enum)]
    mode: Option<Verbosity>,

    /// Maximum number of cycles to simulate.
    #[arg(long)]
    cycles: Option<u64>,

    /// Write the final architectural state as JSON to this file.
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Main entry point for the APEX simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses arguments and loads the optional TOML
///    configuration, letting command-line flags override it.
/// 2. **Loader**: Parses the program file.
/// 3. **Simulation Loop**: Ticks the CPU until HALT commits, the program
///    drains, or the cycle limit is reached.
/// 4. **Report**: Prints the final state and statistics, and optionally
///    exports the state as JSON.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(mode) = args.mode {
        config.general.verbosity = mode;
    }
    if args.cycles.is_some() {
        config.simulation.max_cycles = args.cycles;
    }

    let program = load_program(&args.program)?;
    let mut sim = Simulator::new(program, &config);
    let reason = sim.run();

    println!("(apex) >> Simulation Complete ({reason})");

    let cpu = &sim.cpu;
    if config.general.verbosity != Verbosity::Quiet || config.traces_cycles() {
        cpu.dump_state(config.report.registers, config.report.memory_words);
        cpu.stats.print();
    }

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&cpu.snapshot())?;
        fs::write(path, json).map_err(|source| SimError::Io {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}
