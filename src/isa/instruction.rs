//! Decoded instruction records.
//!
//! An `Instruction` is the loader's output and the unit of work carried
//! through every pipeline latch. Operand presence is fixed by the opcode:
//! constructors only populate the fields the opcode's shape declares, and
//! absent operands never take part in forwarding or register reads.

use std::fmt;

use super::opcode::{Opcode, OperandShape};

/// A single decoded APEX instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Operation to perform.
    pub opcode: Opcode,
    /// Destination register, absent for STORE, branches, HALT, and NOP.
    pub rd: Option<usize>,
    /// First source register.
    pub rs1: Option<usize>,
    /// Second source register.
    pub rs2: Option<usize>,
    /// Signed immediate.
    pub imm: Option<i32>,
}

impl Instruction {
    const fn with(
        opcode: Opcode,
        rd: Option<usize>,
        rs1: Option<usize>,
        rs2: Option<usize>,
        imm: Option<i32>,
    ) -> Self {
        Self {
            opcode,
            rd,
            rs1,
            rs2,
            imm,
        }
    }

    /// `STORE rs1, rs2, #imm` writes `rs1` to `MEM[rs2 + imm]`.
    pub const fn store(rs1: usize, rs2: usize, imm: i32) -> Self {
        Self::with(Opcode::Store, None, Some(rs1), Some(rs2), Some(imm))
    }

    /// `LOAD rd, rs1, #imm` reads `MEM[rs1 + imm]` into `rd`.
    pub const fn load(rd: usize, rs1: usize, imm: i32) -> Self {
        Self::with(Opcode::Load, Some(rd), Some(rs1), None, Some(imm))
    }

    /// `MOVC rd, #imm`.
    pub const fn movc(rd: usize, imm: i32) -> Self {
        Self::with(Opcode::Movc, Some(rd), None, None, Some(imm))
    }

    /// Register-register operation `op rd, rs1, rs2`.
    ///
    /// `op` must be one of ADD, SUB, AND, OR, XOR, or MUL.
    pub fn alu(op: Opcode, rd: usize, rs1: usize, rs2: usize) -> Self {
        debug_assert_eq!(op.shape(), OperandShape::DestSrcSrc);
        Self::with(op, Some(rd), Some(rs1), Some(rs2), None)
    }

    /// `ADD rd, rs1, rs2`.
    pub fn add(rd: usize, rs1: usize, rs2: usize) -> Self {
        Self::alu(Opcode::Add, rd, rs1, rs2)
    }

    /// `SUB rd, rs1, rs2`.
    pub fn sub(rd: usize, rs1: usize, rs2: usize) -> Self {
        Self::alu(Opcode::Sub, rd, rs1, rs2)
    }

    /// `MUL rd, rs1, rs2`.
    pub fn mul(rd: usize, rs1: usize, rs2: usize) -> Self {
        Self::alu(Opcode::Mul, rd, rs1, rs2)
    }

    /// `BZ #imm`.
    pub const fn bz(imm: i32) -> Self {
        Self::with(Opcode::Bz, None, None, None, Some(imm))
    }

    /// `BNZ #imm`.
    pub const fn bnz(imm: i32) -> Self {
        Self::with(Opcode::Bnz, None, None, None, Some(imm))
    }

    /// `JUMP rs1, #imm`.
    pub const fn jump(rs1: usize, imm: i32) -> Self {
        Self::with(Opcode::Jump, None, Some(rs1), None, Some(imm))
    }

    /// `HALT`.
    pub const fn halt() -> Self {
        Self::with(Opcode::Halt, None, None, None, None)
    }

    /// A bubble.
    pub const fn nop() -> Self {
        Self::with(Opcode::Nop, None, None, None, None)
    }

    /// Whether this instruction is a bubble.
    pub const fn is_nop(&self) -> bool {
        matches!(self.opcode, Opcode::Nop)
    }

    /// Immediate value, zero when the opcode carries none.
    pub fn imm_or_zero(&self) -> i32 {
        self.imm.unwrap_or(0)
    }
}

impl fmt::Display for Instruction {
    /// Formats the instruction in APEX assembly syntax, e.g. `ADD,R2,R1,R1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reg = |r: Option<usize>| r.unwrap_or_default();
        let imm = self.imm_or_zero();
        let op = self.opcode;
        match op.shape() {
            OperandShape::None => write!(f, "{op}"),
            OperandShape::DestImm => write!(f, "{op},R{},#{imm}", reg(self.rd)),
            OperandShape::DestSrcSrc => write!(
                f,
                "{op},R{},R{},R{}",
                reg(self.rd),
                reg(self.rs1),
                reg(self.rs2)
            ),
            OperandShape::DestSrcImm => {
                write!(f, "{op},R{},R{},#{imm}", reg(self.rd), reg(self.rs1))
            }
            OperandShape::SrcSrcImm => {
                write!(f, "{op},R{},R{},#{imm}", reg(self.rs1), reg(self.rs2))
            }
            OperandShape::SrcImm => write!(f, "{op},R{},#{imm}", reg(self.rs1)),
            OperandShape::Imm => write!(f, "{op},#{imm}"),
        }
    }
}
