//! APEX Assembly Loader.
//!
//! Reads a program written one instruction per line, for example:
//!
//! ```text
//! MOVC,R1,#5
//! ADD,R2,R1,R1   ; comment
//! STORE,R2,R0,#0
//! HALT
//! ```
//!
//! Fields may be separated by commas, whitespace, or both. Mnemonics are
//! case-insensitive. Text after `;` or `//` is ignored, as are blank lines.

use std::fs;
use std::path::Path;

use crate::common::constants::NUM_REGS;
use crate::common::SimError;
use crate::core::Program;
use crate::isa::{Instruction, Opcode, OperandShape};

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the assembly source.
///
/// # Returns
///
/// The parsed program, or the first error encountered.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&text)?;
    tracing::debug!(path = %path.display(), instructions = program.len(), "program loaded");
    Ok(program)
}

/// Parses program text into a [`Program`].
pub fn parse_program(text: &str) -> Result<Program, SimError> {
    let mut instructions = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if let Some(inst) = parse_line(raw, idx + 1)? {
            instructions.push(inst);
        }
    }
    Ok(Program::new(instructions))
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find(';'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

/// Parses one source line. Returns `None` for blank or comment-only lines.
fn parse_line(raw: &str, line: usize) -> Result<Option<Instruction>, SimError> {
    let mut fields = strip_comment(raw)
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty());

    let Some(mnemonic) = fields.next() else {
        return Ok(None);
    };
    let opcode: Opcode = mnemonic.parse().map_err(|_| SimError::UnknownOpcode {
        line,
        mnemonic: mnemonic.to_string(),
    })?;

    let operands: Vec<&str> = fields.collect();
    let shape = opcode.shape();
    if operands.len() != shape.arity() {
        return Err(SimError::OperandCount {
            line,
            opcode: opcode.mnemonic(),
            expected: shape.arity(),
            found: operands.len(),
        });
    }

    let reg = |i: usize| register(operands[i], line);
    let imm = |i: usize| immediate(operands[i], line);

    let inst = match shape {
        OperandShape::None => match opcode {
            Opcode::Halt => Instruction::halt(),
            _ => Instruction::nop(),
        },
        OperandShape::DestImm => Instruction::movc(reg(0)?, imm(1)?),
        OperandShape::DestSrcSrc => Instruction::alu(opcode, reg(0)?, reg(1)?, reg(2)?),
        OperandShape::DestSrcImm => Instruction::load(reg(0)?, reg(1)?, imm(2)?),
        OperandShape::SrcSrcImm => Instruction::store(reg(0)?, reg(1)?, imm(2)?),
        OperandShape::SrcImm => Instruction::jump(reg(0)?, imm(1)?),
        OperandShape::Imm => match opcode {
            Opcode::Bz => Instruction::bz(imm(0)?),
            _ => Instruction::bnz(imm(0)?),
        },
    };
    Ok(Some(inst))
}

/// Parses `Rn` (either case) with `n` below the register count.
fn register(text: &str, line: usize) -> Result<usize, SimError> {
    text.strip_prefix(['R', 'r'])
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&n| n < NUM_REGS)
        .ok_or_else(|| SimError::InvalidRegister {
            line,
            operand: text.to_string(),
        })
}

/// Parses `#n`, where `n` is a signed decimal integer.
fn immediate(text: &str, line: usize) -> Result<i32, SimError> {
    text.strip_prefix('#')
        .and_then(|n| n.parse::<i32>().ok())
        .ok_or_else(|| SimError::InvalidImmediate {
            line,
            operand: text.to_string(),
        })
}
