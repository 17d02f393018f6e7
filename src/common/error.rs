//! Simulator error definitions.
//!
//! The pipeline core itself has no recoverable error surface: every cycle
//! produces a deterministic next state. Errors only arise at the edges,
//! while loading a program, reading configuration, or exporting results.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the loader, configuration, and reporting layers.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read or written.
    #[error("could not access '{path}': {source}")]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A program line named an opcode the instruction set does not define.
    #[error("line {line}: unknown opcode '{mnemonic}'")]
    UnknownOpcode {
        /// 1-based source line.
        line: usize,
        /// The offending mnemonic as written.
        mnemonic: String,
    },

    /// A program line supplied the wrong number of operands for its opcode.
    #[error("line {line}: {opcode} takes {expected} operand(s), found {found}")]
    OperandCount {
        /// 1-based source line.
        line: usize,
        /// Canonical mnemonic of the opcode.
        opcode: &'static str,
        /// Operand count required by the opcode.
        expected: usize,
        /// Operand count present on the line.
        found: usize,
    },

    /// A register operand was malformed or outside R0-R31.
    #[error("line {line}: invalid register operand '{operand}'")]
    InvalidRegister {
        /// 1-based source line.
        line: usize,
        /// The operand text.
        operand: String,
    },

    /// An immediate operand was malformed or does not fit in 32 bits.
    #[error("line {line}: invalid immediate operand '{operand}'")]
    InvalidImmediate {
        /// 1-based source line.
        line: usize,
        /// The operand text.
        operand: String,
    },

    /// The configuration file is not valid TOML for `Config`.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A snapshot could not be serialized.
    #[error("could not serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
