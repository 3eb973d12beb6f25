//! # Decode Property Tests
//!
//! Format classification, field extraction, and operation resolution.

use mipsdec_core::common::DecodeTable;
use mipsdec_core::isa::decode::{classify, decode, decode_value, extract_fields, resolve_operation};
use mipsdec_core::isa::instruction::{
    Fields, Format, InstructionBits, JumpFields, RegisterFields,
};
use mipsdec_core::isa::operation::Operation;
use mipsdec_core::isa::{funct, opcodes};
use mipsdec_core::DecodeError;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::{i_type, j_type, r_type, InstructionBuilder};
use crate::common::init_tracing;

#[test]
fn test_classify_is_total() {
    for opcode in 0..64u8 {
        let expected = match opcode {
            0 => Format::RegisterType,
            2 | 3 => Format::JumpType,
            _ => Format::ImmediateType,
        };
        assert_eq!(classify(opcode), expected, "opcode {opcode}");
    }
}

#[test]
fn test_register_fields_at_their_offsets() {
    let raw = r_type(9, 10, 8, 3, funct::ADD);
    assert_eq!(
        extract_fields(raw, Format::RegisterType),
        Fields::Register(RegisterFields {
            opcode: 0,
            rs: 9,
            rt: 10,
            rd: 8,
            shamt: 3,
            funct: 32,
        })
    );
}

#[test]
fn test_immediate_is_unsigned() {
    let raw = i_type(opcodes::ADDI, 17, 16, 0xFFFF);
    match extract_fields(raw, Format::ImmediateType) {
        Fields::Immediate(i) => {
            assert_eq!(i.opcode, 8);
            assert_eq!(i.rs, 17);
            assert_eq!(i.rt, 16);
            assert_eq!(i.immediate, 65535);
        }
        other => panic!("expected immediate fields, got {other:?}"),
    }
    assert_eq!(decode(raw).unwrap().mnemonic(), "addi $s0, $s1, 65535");
}

#[test]
fn test_jump_label_is_26_bits() {
    let raw = j_type(opcodes::JAL, 0x03FF_FFFF);
    assert_eq!(
        extract_fields(raw, Format::JumpType),
        Fields::Jump(JumpFields {
            opcode: 3,
            label: 67_108_863,
        })
    );
}

#[rstest]
#[case(funct::SLL, Operation::Sll)]
#[case(funct::SRL, Operation::Srl)]
#[case(funct::SRA, Operation::Sra)]
#[case(funct::SLLV, Operation::Sllv)]
#[case(funct::SRLV, Operation::Srlv)]
#[case(funct::SRAV, Operation::Srav)]
#[case(funct::JR, Operation::Jr)]
#[case(funct::JALR, Operation::Jalr)]
#[case(funct::SYSCALL, Operation::Syscall)]
#[case(funct::BREAK, Operation::Break)]
#[case(funct::MFHI, Operation::Mfhi)]
#[case(funct::MTHI, Operation::Mthi)]
#[case(funct::MFLO, Operation::Mflo)]
#[case(funct::MTLO, Operation::Mtlo)]
#[case(funct::MULT, Operation::Mult)]
#[case(funct::MULTU, Operation::Multu)]
#[case(funct::DIV, Operation::Div)]
#[case(funct::DIVU, Operation::Divu)]
#[case(funct::ADD, Operation::Add)]
#[case(funct::ADDU, Operation::Addu)]
#[case(funct::SUB, Operation::Sub)]
#[case(funct::SUBU, Operation::Subu)]
#[case(funct::AND, Operation::And)]
#[case(funct::OR, Operation::Or)]
#[case(funct::XOR, Operation::Xor)]
#[case(funct::NOR, Operation::Nor)]
#[case(funct::SLT, Operation::Slt)]
#[case(funct::SLTU, Operation::Sltu)]
fn test_every_function_code_decodes(#[case] code: u32, #[case] expected: Operation) {
    init_tracing();
    let inst = decode(r_type(1, 2, 3, 4, code)).unwrap();
    assert_eq!(inst.format(), Format::RegisterType);
    assert_eq!(inst.operation(), expected);
    assert_eq!(inst.name(), expected.name());
}

#[rstest]
#[case(opcodes::BEQ, Operation::Beq)]
#[case(opcodes::BNE, Operation::Bne)]
#[case(opcodes::BLEZ, Operation::Blez)]
#[case(opcodes::BGTZ, Operation::Bgtz)]
#[case(opcodes::ADDI, Operation::Addi)]
#[case(opcodes::ADDIU, Operation::Addiu)]
#[case(opcodes::SLTI, Operation::Slti)]
#[case(opcodes::SLTIU, Operation::Sltiu)]
#[case(opcodes::ANDI, Operation::Andi)]
#[case(opcodes::ORI, Operation::Ori)]
#[case(opcodes::XORI, Operation::Xori)]
#[case(opcodes::LUI, Operation::Lui)]
#[case(opcodes::LB, Operation::Lb)]
#[case(opcodes::LH, Operation::Lh)]
#[case(opcodes::LW, Operation::Lw)]
#[case(opcodes::LBU, Operation::Lbu)]
#[case(opcodes::LHU, Operation::Lhu)]
#[case(opcodes::SB, Operation::Sb)]
#[case(opcodes::SH, Operation::Sh)]
#[case(opcodes::SW, Operation::Sw)]
#[case(opcodes::LWC1, Operation::Lwc1)]
#[case(opcodes::SWC1, Operation::Swc1)]
fn test_every_immediate_opcode_decodes(#[case] opcode: u32, #[case] expected: Operation) {
    init_tracing();
    let inst = decode(i_type(opcode, 4, 5, 10)).unwrap();
    assert_eq!(inst.format(), Format::ImmediateType);
    assert_eq!(inst.operation(), expected);
}

#[rstest]
#[case(opcodes::J, Operation::J, "j 1024")]
#[case(opcodes::JAL, Operation::Jal, "jal 1024")]
fn test_jump_opcodes_decode(#[case] opcode: u32, #[case] expected: Operation, #[case] text: &str) {
    let inst = decode(j_type(opcode, 1024)).unwrap();
    assert_eq!(inst.format(), Format::JumpType);
    assert_eq!(inst.operation(), expected);
    assert_eq!(inst.mnemonic(), text);
}

#[test]
fn test_regimm_selects_by_rt() {
    let bltz = decode(InstructionBuilder::new().bltz(4, 8).build()).unwrap();
    assert_eq!(bltz.operation(), Operation::Bltz);
    assert_eq!(bltz.mnemonic(), "bltz $a0, 8");

    let bgez = decode(InstructionBuilder::new().bgez(4, 8).build()).unwrap();
    assert_eq!(bgez.operation(), Operation::Bgez);
    assert_eq!(bgez.mnemonic(), "bgez $a0, 8");
}

#[test]
fn test_regimm_unassigned_selector() {
    init_tracing();
    let raw = i_type(opcodes::REGIMM, 4, 2, 8);
    assert_eq!(
        decode(raw),
        Err(DecodeError::UnknownOperation {
            table: DecodeTable::RegImm,
            code: 2,
        })
    );
}

#[test]
fn test_unassigned_opcode() {
    init_tracing();
    let raw = i_type(0b010011, 0, 0, 0);
    let err = decode(raw).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownOperation {
            table: DecodeTable::Opcode,
            code: 19,
        }
    );
    assert!(err.is_unknown_operation());
}

#[test]
fn test_unassigned_function_code() {
    let raw = r_type(1, 2, 3, 0, 1);
    assert_eq!(
        decode(raw),
        Err(DecodeError::UnknownOperation {
            table: DecodeTable::Function,
            code: 1,
        })
    );
}

#[test]
fn test_resolve_special_marker() {
    // An opcode-table lookup of SPECIAL names the marker, never a real operation.
    let fields = extract_fields(0, Format::ImmediateType);
    assert_eq!(resolve_operation(&fields), Ok(Operation::Special));
}

#[test]
fn test_zero_word_is_sll() {
    let inst = decode(0).unwrap();
    assert_eq!(inst.operation(), Operation::Sll);
    assert_eq!(inst.mnemonic(), "sll $zero, $zero, 0");
    assert_eq!(inst.bits(), "0".repeat(32));
}

#[test]
fn test_decode_value_range() {
    assert!(decode_value(0x2230_0005).is_ok());
    assert_eq!(
        decode_value(u64::from(u32::MAX) + 1),
        Err(DecodeError::MalformedWord("4294967296".to_string()))
    );
}

#[test]
fn test_instruction_accessors() {
    let raw = 0x2230_0005;
    let inst = decode(raw).unwrap();
    assert_eq!(inst.raw(), raw);
    assert_eq!(inst.opcode(), 8);
    assert_eq!(inst.bits(), "00100010001100000000000000000101");
    assert_eq!(inst.to_string(), "addi $s0, $s1, 5");
}

proptest! {
    #[test]
    fn prop_classify_depends_only_on_opcode(raw in any::<u32>(), noise in any::<u32>()) {
        let other = (raw & 0xFC00_0000) | (noise & 0x03FF_FFFF);
        prop_assert_eq!(classify(raw.opcode()), classify(other.opcode()));
    }

    #[test]
    fn prop_decode_is_deterministic(raw in any::<u32>()) {
        prop_assert_eq!(decode(raw), decode(raw));
    }

    #[test]
    fn prop_fields_match_bit_slices(raw in any::<u32>()) {
        match extract_fields(raw, Format::RegisterType) {
            Fields::Register(r) => {
                prop_assert_eq!(u32::from(r.opcode), raw >> 26);
                prop_assert_eq!(u32::from(r.rs), (raw >> 21) & 0x1F);
                prop_assert_eq!(u32::from(r.rt), (raw >> 16) & 0x1F);
                prop_assert_eq!(u32::from(r.rd), (raw >> 11) & 0x1F);
                prop_assert_eq!(u32::from(r.shamt), (raw >> 6) & 0x1F);
                prop_assert_eq!(u32::from(r.funct), raw & 0x3F);
            }
            other => prop_assert!(false, "unexpected fields {:?}", other),
        }
    }

    #[test]
    fn prop_decoded_format_matches_opcode(raw in any::<u32>()) {
        if let Ok(inst) = decode(raw) {
            prop_assert_eq!(inst.format(), classify(inst.opcode()));
            prop_assert_eq!(inst.fields().format(), inst.format());
            prop_assert!(inst.mnemonic().starts_with(inst.name()));
        }
    }
}
