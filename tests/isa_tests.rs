//! Tests for the APEX instruction set definitions.

use apex_sim::isa::{Instruction, Opcode, OperandShape};

/// Tests mnemonic parsing, including case and the XOR alias.
#[test]
fn test_opcode_from_str() {
    assert_eq!("MOVC".parse::<Opcode>(), Ok(Opcode::Movc));
    assert_eq!("movc".parse::<Opcode>(), Ok(Opcode::Movc));
    assert_eq!("EX-OR".parse::<Opcode>(), Ok(Opcode::Xor));
    assert_eq!("xor".parse::<Opcode>(), Ok(Opcode::Xor));
    assert_eq!("Halt".parse::<Opcode>(), Ok(Opcode::Halt));
    assert!("ADDI".parse::<Opcode>().is_err());
}

/// Tests that every opcode's mnemonic parses back to itself.
#[test]
fn test_opcode_mnemonics_parse() {
    for op in Opcode::ALL {
        assert_eq!(op.mnemonic().parse::<Opcode>(), Ok(op));
    }
}

/// Tests the operand layout of each opcode family.
#[test]
fn test_opcode_shapes() {
    assert_eq!(Opcode::Store.shape(), OperandShape::SrcSrcImm);
    assert_eq!(Opcode::Load.shape(), OperandShape::DestSrcImm);
    assert_eq!(Opcode::Movc.shape(), OperandShape::DestImm);
    assert_eq!(Opcode::Mul.shape(), OperandShape::DestSrcSrc);
    assert_eq!(Opcode::Bnz.shape(), OperandShape::Imm);
    assert_eq!(Opcode::Jump.shape(), OperandShape::SrcImm);
    assert_eq!(Opcode::Nop.shape().arity(), 0);
    assert_eq!(Opcode::Add.shape().arity(), 3);
}

/// Tests which opcodes write registers and the zero flag.
#[test]
fn test_opcode_effects() {
    let writers: Vec<Opcode> = Opcode::ALL
        .into_iter()
        .filter(|op| op.writes_register())
        .collect();
    assert_eq!(
        writers,
        vec![
            Opcode::Load,
            Opcode::Movc,
            Opcode::Add,
            Opcode::Sub,
            Opcode::And,
            Opcode::Or,
            Opcode::Xor,
            Opcode::Mul
        ]
    );

    assert!(Opcode::Sub.sets_zero_flag());
    assert!(Opcode::Mul.sets_zero_flag());
    assert!(!Opcode::And.sets_zero_flag());
    assert!(!Opcode::Movc.sets_zero_flag());
    assert!(Opcode::Jump.is_control());
    assert!(!Opcode::Halt.is_control());
}

/// Tests that constructors fill exactly the operands the opcode declares.
#[test]
fn test_instruction_operands() {
    let st = Instruction::store(2, 0, 4);
    assert_eq!((st.rd, st.rs1, st.rs2, st.imm), (None, Some(2), Some(0), Some(4)));

    let ld = Instruction::load(3, 1, -8);
    assert_eq!((ld.rd, ld.rs1, ld.rs2, ld.imm), (Some(3), Some(1), None, Some(-8)));

    let bz = Instruction::bz(12);
    assert_eq!((bz.rd, bz.rs1, bz.rs2, bz.imm), (None, None, None, Some(12)));

    assert!(Instruction::default().is_nop());
    assert_eq!(Instruction::halt().imm_or_zero(), 0);
}

/// Tests assembly rendering.
#[test]
fn test_instruction_display() {
    assert_eq!(Instruction::movc(1, 5).to_string(), "MOVC,R1,#5");
    assert_eq!(Instruction::add(2, 1, 1).to_string(), "ADD,R2,R1,R1");
    assert_eq!(Instruction::alu(Opcode::Xor, 4, 2, 3).to_string(), "EX-OR,R4,R2,R3");
    assert_eq!(Instruction::store(2, 0, 0).to_string(), "STORE,R2,R0,#0");
    assert_eq!(Instruction::load(3, 1, 8).to_string(), "LOAD,R3,R1,#8");
    assert_eq!(Instruction::bz(-8).to_string(), "BZ,#-8");
    assert_eq!(Instruction::jump(1, 4).to_string(), "JUMP,R1,#4");
    assert_eq!(Instruction::halt().to_string(), "HALT");
}
