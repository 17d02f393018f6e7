//! Tests for the assembly loader.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use apex_sim::common::SimError;
use apex_sim::isa::{Instruction, Opcode};
use apex_sim::sim::{load_program, parse_program};

/// Tests parsing every instruction form.
#[test]
fn test_parse_all_forms() {
    let program = parse_program(
        "MOVC,R1,#5
ADD,R2,R1,R1
SUB,R3,R2,R1
AND,R4,R2,R1
OR,R5,R2,R1
EX-OR,R6,R2,R1
MUL,R7,R2,R1
LOAD,R8,R1,#8
STORE,R2,R0,#0
BZ,#-8
BNZ,#12
JUMP,R1,#4
NOP
HALT",
    )
    .unwrap();

    assert_eq!(
        program.instructions(),
        &[
            Instruction::movc(1, 5),
            Instruction::add(2, 1, 1),
            Instruction::sub(3, 2, 1),
            Instruction::alu(Opcode::And, 4, 2, 1),
            Instruction::alu(Opcode::Or, 5, 2, 1),
            Instruction::alu(Opcode::Xor, 6, 2, 1),
            Instruction::mul(7, 2, 1),
            Instruction::load(8, 1, 8),
            Instruction::store(2, 0, 0),
            Instruction::bz(-8),
            Instruction::bnz(12),
            Instruction::jump(1, 4),
            Instruction::nop(),
            Instruction::halt(),
        ]
    );
}

/// Tests separators, case, comments, and blank lines.
#[test]
fn test_parse_lenient_syntax() {
    let program = parse_program(
        "; header comment

  movc r1 #5      ; trailing comment
ADD, R2, R1, R1   // other comment style
xor,r3,r1,r2
",
    )
    .unwrap();

    assert_eq!(
        program.instructions(),
        &[
            Instruction::movc(1, 5),
            Instruction::add(2, 1, 1),
            Instruction::alu(Opcode::Xor, 3, 1, 2),
        ]
    );
}

/// Tests that an unknown mnemonic is reported with its line.
#[test]
fn test_parse_unknown_opcode() {
    let err = parse_program("MOVC,R1,#1\nFOO,R1\n").unwrap_err();
    assert!(matches!(
        err,
        SimError::UnknownOpcode { line: 2, ref mnemonic } if mnemonic == "FOO"
    ));
}

/// Tests operand count checking.
#[test]
fn test_parse_operand_count() {
    let err = parse_program("ADD,R1,R2").unwrap_err();
    assert!(matches!(
        err,
        SimError::OperandCount {
            line: 1,
            opcode: "ADD",
            expected: 3,
            found: 2
        }
    ));

    let err = parse_program("HALT,#1").unwrap_err();
    assert!(matches!(err, SimError::OperandCount { expected: 0, found: 1, .. }));
}

/// Tests register operand validation.
#[test]
fn test_parse_invalid_register() {
    for bad in ["MOVC,R32,#1", "MOVC,X1,#1", "MOVC,R,#1", "MOVC,#1,#1"] {
        let err = parse_program(bad).unwrap_err();
        assert!(matches!(err, SimError::InvalidRegister { line: 1, .. }), "{bad}");
    }
}

/// Tests immediate operand validation.
#[test]
fn test_parse_invalid_immediate() {
    for bad in ["MOVC,R1,5", "MOVC,R1,#five", "BZ,#99999999999", "LOAD,R1,R2,R3"] {
        let err = parse_program(bad).unwrap_err();
        assert!(matches!(err, SimError::InvalidImmediate { line: 1, .. }), "{bad}");
    }
}

/// Tests loading a program from a file.
#[test]
fn test_load_program_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "MOVC,R0,#5").unwrap();
    writeln!(file, "HALT").unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program.get(1), Some(&Instruction::halt()));
}

/// Tests that a missing file reports its path.
#[test]
fn test_load_program_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.asm");
    let err = load_program(&path).unwrap_err();
    match err {
        SimError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}
