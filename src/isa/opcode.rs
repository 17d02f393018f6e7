//! Opcode definitions.
//!
//! Each opcode is a closed enum variant. Stages dispatch on it with
//! exhaustive `match` expressions, so adding an opcode is a compile error
//! everywhere it is not yet handled.

use std::fmt;
use std::str::FromStr;

/// APEX opcodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `MEM[rs2 + imm] <- rs1`.
    Store,
    /// `rd <- MEM[rs1 + imm]`.
    Load,
    /// `rd <- imm`.
    Movc,
    /// `rd <- rs1 + rs2`, updates the zero flag.
    Add,
    /// `rd <- rs1 - rs2`, updates the zero flag.
    Sub,
    /// `rd <- rs1 & rs2`.
    And,
    /// `rd <- rs1 | rs2`.
    Or,
    /// `rd <- rs1 ^ rs2` (written `EX-OR` in APEX assembly).
    Xor,
    /// `rd <- rs1 * rs2`, two cycles in Execute, updates the zero flag.
    Mul,
    /// Branch to `pc + imm` when the zero flag is set.
    Bz,
    /// Branch to `pc + imm` when the zero flag is clear.
    Bnz,
    /// Jump to `rs1 + imm`.
    Jump,
    /// Stop the machine once this reaches Writeback.
    Halt,
    /// Bubble.
    #[default]
    Nop,
}

/// Which fields an opcode carries, in assembly operand order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandShape {
    /// No operands (`HALT`, `NOP`).
    None,
    /// `rd, #imm` (`MOVC`).
    DestImm,
    /// `rd, rs1, rs2` (register ALU ops).
    DestSrcSrc,
    /// `rd, rs1, #imm` (`LOAD`).
    DestSrcImm,
    /// `rs1, rs2, #imm` (`STORE`).
    SrcSrcImm,
    /// `rs1, #imm` (`JUMP`).
    SrcImm,
    /// `#imm` (`BZ`, `BNZ`).
    Imm,
}

impl OperandShape {
    /// Number of operands written in assembly.
    pub const fn arity(self) -> usize {
        match self {
            Self::None => 0,
            Self::Imm => 1,
            Self::DestImm | Self::SrcImm => 2,
            Self::DestSrcSrc | Self::DestSrcImm | Self::SrcSrcImm => 3,
        }
    }
}

impl Opcode {
    /// All opcodes, in encoding order.
    pub const ALL: [Self; 14] = [
        Self::Store,
        Self::Load,
        Self::Movc,
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Mul,
        Self::Bz,
        Self::Bnz,
        Self::Jump,
        Self::Halt,
        Self::Nop,
    ];

    /// Canonical assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Store => "STORE",
            Self::Load => "LOAD",
            Self::Movc => "MOVC",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "EX-OR",
            Self::Mul => "MUL",
            Self::Bz => "BZ",
            Self::Bnz => "BNZ",
            Self::Jump => "JUMP",
            Self::Halt => "HALT",
            Self::Nop => "NOP",
        }
    }

    /// Operand layout of this opcode.
    pub const fn shape(self) -> OperandShape {
        match self {
            Self::Store => OperandShape::SrcSrcImm,
            Self::Load => OperandShape::DestSrcImm,
            Self::Movc => OperandShape::DestImm,
            Self::Add | Self::Sub | Self::And | Self::Or | Self::Xor | Self::Mul => {
                OperandShape::DestSrcSrc
            }
            Self::Bz | Self::Bnz => OperandShape::Imm,
            Self::Jump => OperandShape::SrcImm,
            Self::Halt | Self::Nop => OperandShape::None,
        }
    }

    /// Whether the opcode commits a value to a destination register.
    pub const fn writes_register(self) -> bool {
        matches!(
            self.shape(),
            OperandShape::DestImm | OperandShape::DestSrcSrc | OperandShape::DestSrcImm
        )
    }

    /// Whether the opcode updates the zero flag in Execute.
    pub const fn sets_zero_flag(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul)
    }

    /// Whether the opcode can redirect the program counter.
    pub const fn is_control(self) -> bool {
        matches!(self, Self::Bz | Self::Bnz | Self::Jump)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when a mnemonic does not name an opcode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMnemonic(pub String);

impl FromStr for Opcode {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "XOR" {
            return Ok(Self::Xor);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic() == upper)
            .ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}
