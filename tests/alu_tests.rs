//! Unit tests for the ALU and multiplier.

use apex_sim::core::units::{Alu, MulUnit};
use apex_sim::isa::Opcode;

/// Tests register-register arithmetic.
#[test]
fn test_alu_arith() {
    assert_eq!(Alu::execute(Opcode::Add, 0, 10, 20, 0), Some(30));
    assert_eq!(Alu::execute(Opcode::Sub, 0, 10, 20, 0), Some(-10));
    assert_eq!(Alu::execute(Opcode::Mul, 0, -3, 7, 0), Some(-21));
}

/// Tests that arithmetic wraps on overflow.
#[test]
fn test_alu_wrapping() {
    assert_eq!(Alu::execute(Opcode::Add, 0, i32::MAX, 1, 0), Some(i32::MIN));
    assert_eq!(Alu::execute(Opcode::Sub, 0, i32::MIN, 1, 0), Some(i32::MAX));
    assert_eq!(
        Alu::execute(Opcode::Mul, 0, 0x10000, 0x10000, 0),
        Some(0)
    );
}

/// Tests bitwise operations.
#[test]
fn test_alu_logic() {
    assert_eq!(Alu::execute(Opcode::And, 0, 0b1100, 0b1010, 0), Some(0b1000));
    assert_eq!(Alu::execute(Opcode::Or, 0, 0b1100, 0b1010, 0), Some(0b1110));
    assert_eq!(Alu::execute(Opcode::Xor, 0, 0b1100, 0b1010, 0), Some(0b0110));
}

/// Tests effective address and target computation.
#[test]
fn test_alu_addresses() {
    // STORE addresses off its second source, LOAD and JUMP off the first.
    assert_eq!(Alu::execute(Opcode::Store, 0, 99, 10, 4), Some(14));
    assert_eq!(Alu::execute(Opcode::Load, 0, 10, 99, 4), Some(14));
    assert_eq!(Alu::execute(Opcode::Jump, 0, 4000, 0, 8), Some(4008));
    assert_eq!(Alu::execute(Opcode::Bz, 4012, 0, 0, -8), Some(4004));
    assert_eq!(Alu::execute(Opcode::Bnz, 4012, 0, 0, 12), Some(4024));
    assert_eq!(Alu::execute(Opcode::Movc, 0, 1, 2, 42), Some(42));
}

/// Tests that HALT and NOP compute nothing.
#[test]
fn test_alu_no_result() {
    assert_eq!(Alu::execute(Opcode::Halt, 4000, 1, 2, 3), None);
    assert_eq!(Alu::execute(Opcode::Nop, 4000, 1, 2, 3), None);
}

/// Tests the two-cycle multiplier protocol.
#[test]
fn test_mul_unit_two_cycles() {
    let mut unit = MulUnit::new();
    assert!(!unit.is_busy());

    assert!(!unit.step());
    assert!(unit.is_busy());

    assert!(unit.step());
    assert!(!unit.is_busy());

    assert!(!unit.step());
    unit.reset();
    assert!(!unit.is_busy());
}
