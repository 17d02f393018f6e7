//! Integration tests for common utilities module.

use apex_sim::common::*;
use apex_sim::core::Program;
use apex_sim::isa::Instruction;

/// Tests program counter to slot index conversion.
#[test]
fn test_code_index() {
    assert_eq!(code_index(4000), Some(0));
    assert_eq!(code_index(4004), Some(1));
    assert_eq!(code_index(4040), Some(10));
    assert_eq!(code_index(3996), None);
    assert_eq!(code_index(0), None);
    assert_eq!(code_index(i32::MIN), None);
}

/// Tests slot index to program counter conversion.
#[test]
fn test_code_address() {
    assert_eq!(code_address(0), CODE_BASE);
    assert_eq!(code_address(3), 4012);
    for i in 0..50 {
        assert_eq!(code_index(code_address(i)), Some(i));
    }
}

/// Tests that fetching outside the program yields NOP padding.
#[test]
fn test_program_fetch_padding() {
    let program = Program::new(vec![Instruction::movc(1, 5), Instruction::halt()]);
    assert_eq!(program.fetch(4000), Instruction::movc(1, 5));
    assert_eq!(program.fetch(4004), Instruction::halt());
    assert!(program.fetch(4008).is_nop());
    assert!(program.fetch(3996).is_nop());
    assert!(program.fetch(-4).is_nop());
}

/// Tests the drain address used to detect the end of the program.
#[test]
fn test_program_drain_pc() {
    let program: Program = vec![Instruction::nop(); 5].into();
    assert_eq!(program.drain_pc(), CODE_BASE + 4 * (5 + DRAIN_MARGIN as i32));
    assert_eq!(Program::default().drain_pc(), 4016);
}

/// Tests error messages carry the source line.
#[test]
fn test_error_display() {
    let err = SimError::UnknownOpcode {
        line: 3,
        mnemonic: "FOO".to_string(),
    };
    assert_eq!(err.to_string(), "line 3: unknown opcode 'FOO'");

    let err = SimError::OperandCount {
        line: 7,
        opcode: "ADD",
        expected: 3,
        found: 2,
    };
    assert_eq!(err.to_string(), "line 7: ADD takes 3 operand(s), found 2");
}
