//! APEX Instruction Set Architecture.
//!
//! The instruction set is a small fixed-point ISA of fourteen opcodes. Every
//! opcode has a fixed operand shape, so an instruction's destination,
//! sources, and immediate are either always present or always absent.

/// Decoded instruction records and their textual form.
pub mod instruction;

/// Opcode enumeration and operand shapes.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::{Opcode, OperandShape};
