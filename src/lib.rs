//! APEX Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate simulator of the APEX teaching
//! processor: a five-stage in-order pipeline with operand forwarding,
//! load-use stalls, a two-cycle multiplier, and branches resolved in the
//! Memory stage with squash-on-taken.
//!
//! # Architecture
//!
//! * **Core**: 5-stage in-order pipeline (Fetch, Decode/RF, Execute, Memory, Writeback).
//! * **State**: 32 signed registers, word-addressed data memory, a zero flag.
//! * **Driver**: cycle loop that stops on HALT, program drain, or a cycle bound.
//!
//! # Modules
//!
//! * `common`: Shared constants, address helpers, and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Program loader and simulation driver.
//! * `stats`: Performance statistics collection.
//!
//! # Example
//!
//! ```
//! use apex_sim::config::Config;
//! use apex_sim::sim::{parse_program, ExitReason, Simulator};
//!
//! let program = parse_program("MOVC,R1,#5\nADD,R2,R1,R1\nHALT\n").unwrap();
//! let mut sim = Simulator::new(program, &Config::default());
//! assert_eq!(sim.run(), ExitReason::Halted);
//! assert_eq!(sim.cpu.regs.read(2), 10);
//! ```

/// Shared constants, address conversion, and error types.
pub mod common;

/// Run configuration: verbosity, cycle bound, memory size, report extent.
///
/// Loads and parses TOML configuration files; every field has a default.
pub mod config;

/// CPU core implementation including pipeline stages and execution units.
///
/// Implements the 5-stage in-order pipeline, its latches and forwarding
/// network, and the architectural state it updates.
pub mod core;

/// Instruction Set Architecture definitions.
pub mod isa;

/// Program loader and the simulation loop.
pub mod sim;

/// Performance statistics collection and reporting.
///
/// Tracks cycle counts, committed instructions, and stall causes.
pub mod stats;
