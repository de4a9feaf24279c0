//! # Encoding Tests
//!
//! R-type encoding of the eight RV32M operations, mnemonics and
//! the signedness table that drives diagnostic formatting.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvm_vectors::isa::rv32m::{funct3, opcodes};
use rvm_vectors::isa::{Instruction, MulDivOp, Signedness};

#[rstest]
#[case(MulDivOp::Mul, 0x0220_81B3)]
#[case(MulDivOp::Mulh, 0x0220_91B3)]
#[case(MulDivOp::Mulhsu, 0x0220_A1B3)]
#[case(MulDivOp::Mulhu, 0x0220_B1B3)]
#[case(MulDivOp::Div, 0x0220_C1B3)]
#[case(MulDivOp::Divu, 0x0220_D1B3)]
#[case(MulDivOp::Rem, 0x0220_E1B3)]
#[case(MulDivOp::Remu, 0x0220_F1B3)]
fn encodes_x3_x1_x2(#[case] op: MulDivOp, #[case] word: u32) {
    let inst = Instruction::new(op, 3, 1, 2);
    assert_eq!(inst.encode(), word);
    assert_eq!(inst.encode() >> 25, opcodes::M_EXTENSION);
}

#[test]
fn encodes_high_registers() {
    let inst = Instruction::new(MulDivOp::Div, 10, 30, 31);
    assert_eq!(inst.encode(), 0x03FF_4533);
    assert_eq!(inst.to_string(), "div x10, x30, x31");
}

#[test]
fn register_indices_are_truncated_to_five_bits() {
    let inst = Instruction::new(MulDivOp::Mul, 35, 33, 34);
    assert_eq!((inst.rd, inst.rs1, inst.rs2), (3, 1, 2));
}

#[test]
fn opcode_constants() {
    assert_eq!(opcodes::OP, 0x33);
    assert_eq!(opcodes::M_EXTENSION, 1);
    assert_eq!(funct3::MUL, 0);
    assert_eq!(funct3::REMU, 7);
}

#[test]
fn funct3_values_are_distinct() {
    let mut codes: Vec<u32> = MulDivOp::ALL.into_iter().map(MulDivOp::funct3).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes, (0..8).collect::<Vec<u32>>());
}

#[rstest]
#[case("MULHSU", MulDivOp::Mulhsu)]
#[case("divu", MulDivOp::Divu)]
#[case("Rem", MulDivOp::Rem)]
fn parses_mnemonics_case_insensitively(#[case] text: &str, #[case] op: MulDivOp) {
    assert_eq!(text.parse::<MulDivOp>(), Ok(op));
    assert_eq!(op.to_string(), op.mnemonic());
}

#[test]
fn unknown_mnemonic_is_rejected() {
    let err = "ADD".parse::<MulDivOp>().unwrap_err();
    assert_eq!(err.to_string(), "unknown RV32M mnemonic \"ADD\"");
}

#[test]
fn signedness_table() {
    use Signedness::{Signed, Unsigned};
    let table: Vec<_> = MulDivOp::ALL
        .into_iter()
        .map(|op| (op, op.a_sign(), op.b_sign(), op.result_sign()))
        .collect();
    assert_eq!(
        table,
        vec![
            (MulDivOp::Mul, Signed, Signed, Signed),
            (MulDivOp::Mulh, Signed, Signed, Signed),
            (MulDivOp::Mulhsu, Signed, Unsigned, Signed),
            (MulDivOp::Mulhu, Unsigned, Unsigned, Unsigned),
            (MulDivOp::Div, Signed, Signed, Signed),
            (MulDivOp::Divu, Unsigned, Unsigned, Unsigned),
            (MulDivOp::Rem, Signed, Signed, Signed),
            (MulDivOp::Remu, Unsigned, Unsigned, Unsigned),
        ]
    );
}

#[test]
fn serde_uses_upper_case_mnemonics() {
    assert_eq!(serde_json::to_string(&MulDivOp::Mulhsu).unwrap(), "\"MULHSU\"");
    let op: MulDivOp = serde_json::from_str("\"REMU\"").unwrap();
    assert_eq!(op, MulDivOp::Remu);
}
