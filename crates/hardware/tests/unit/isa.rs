//! Instruction Table Tests.
//!
//! Encoding round-trips, the `AABCDDDD` field decoders, and mnemonic
//! rendering.

use pretty_assertions::assert_eq;
use rstest::rstest;

use ls8_core::isa::{Opcode, disasm, opcodes};

#[rstest]
#[case(Opcode::Hlt)]
#[case(Opcode::Ldi)]
#[case(Opcode::Prn)]
#[case(Opcode::Add)]
#[case(Opcode::Sub)]
#[case(Opcode::Mul)]
#[case(Opcode::Div)]
#[case(Opcode::Push)]
#[case(Opcode::Pop)]
#[case(Opcode::Call)]
#[case(Opcode::Ret)]
#[case(Opcode::Cmp)]
#[case(Opcode::Jmp)]
#[case(Opcode::Jeq)]
#[case(Opcode::Jne)]
fn encoding_round_trips(#[case] opcode: Opcode) {
    assert_eq!(Opcode::from_u8(opcode.encoding()), Some(opcode));
}

#[test]
fn bytes_outside_the_table_do_not_decode() {
    assert_eq!(Opcode::from_u8(0b0000_0000), None, "NOP is not implemented");
    assert_eq!(Opcode::from_u8(0b1111_1111), None);
}

#[rstest]
#[case(Opcode::Hlt, 0)]
#[case(Opcode::Ret, 0)]
#[case(Opcode::Prn, 1)]
#[case(Opcode::Call, 1)]
#[case(Opcode::Jeq, 1)]
#[case(Opcode::Ldi, 2)]
#[case(Opcode::Add, 2)]
#[case(Opcode::Cmp, 2)]
fn operand_count_comes_from_the_top_bits(#[case] opcode: Opcode, #[case] count: u8) {
    assert_eq!(opcode.operand_count(), count);
}

#[test]
fn alu_bit_marks_arithmetic_and_compare() {
    assert!(Opcode::Add.is_alu_op());
    assert!(Opcode::Div.is_alu_op());
    assert!(Opcode::Cmp.is_alu_op());
    assert!(!Opcode::Ldi.is_alu_op());
    assert!(!Opcode::Jmp.is_alu_op());
}

#[test]
fn disassembly_renders_per_operand_count() {
    assert_eq!(disasm::disassemble(Opcode::Hlt, 0, 0), "HLT");
    assert_eq!(disasm::disassemble(Opcode::Prn, 3, 0), "PRN R3");
    assert_eq!(disasm::disassemble(Opcode::Ldi, 0, 8), "LDI R0, 8");
    assert_eq!(disasm::disassemble(Opcode::Mul, 0, 1), "MUL R0, R1");
}

#[test]
fn opcode_constants_match_the_ls8_layout() {
    assert_eq!(opcodes::HLT, 0b0000_0001);
    assert_eq!(opcodes::LDI, 0b1000_0010);
    assert_eq!(opcodes::PRN, 0b0100_0111);
    assert_eq!(opcodes::MUL, 0b1010_0010);
}
