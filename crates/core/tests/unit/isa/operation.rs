//! # Operation Table Tests

use std::collections::HashSet;

use mipsdec_core::DecodeError;
use mipsdec_core::common::DecodeTable;
use mipsdec_core::isa::instruction::Format;
use mipsdec_core::isa::operation::{OperandLayout, Operation};
use rstest::rstest;

#[test]
fn test_names_round_trip() {
    for op in Operation::ALL {
        assert_eq!(Operation::from_name(op.name()), Some(op), "{op}");
    }
    assert_eq!(Operation::from_name("[R-Type]"), None);
    assert_eq!(Operation::from_name("nop"), None);
}

#[test]
fn test_names_are_unique_and_lowercase() {
    let names: HashSet<_> = Operation::ALL.iter().map(|op| op.name()).collect();
    assert_eq!(names.len(), Operation::ALL.len());
    assert!(names.iter().all(|n| *n == n.to_lowercase()));
}

#[test]
fn test_function_table_is_injective() {
    let resolved: Vec<_> = (0..64u8)
        .filter_map(|code| Operation::from_funct(code).ok())
        .collect();
    assert_eq!(resolved.len(), 28);
    let unique: HashSet<_> = resolved.iter().collect();
    assert_eq!(unique.len(), 28);
    assert!(
        resolved
            .iter()
            .all(|op| op.layout().map(OperandLayout::format) == Some(Format::RegisterType))
    );
}

#[test]
fn test_opcode_table_is_injective() {
    // REGIMM contributes two operations through its rt selector.
    let mut resolved: Vec<_> = (0..64u8)
        .filter_map(|code| Operation::from_opcode(code, 0).ok())
        .collect();
    resolved.push(Operation::from_opcode(1, 1).unwrap());

    // 26 assigned opcodes (SPECIAL and bltz included) plus bgez.
    assert_eq!(resolved.len(), 27);
    let unique: HashSet<_> = resolved.iter().collect();
    assert_eq!(unique.len(), 27);
    assert!(resolved.contains(&Operation::Special));
}

#[test]
fn test_every_operation_has_a_layout() {
    for op in Operation::ALL {
        assert!(op.layout().is_some(), "{op} has no layout");
    }
    assert_eq!(Operation::Special.layout(), None);
}

#[rstest]
#[case(Operation::Add, OperandLayout::RdRsRt)]
#[case(Operation::Sra, OperandLayout::RdRtShamt)]
#[case(Operation::Srav, OperandLayout::RdRtRs)]
#[case(Operation::Divu, OperandLayout::RsRt)]
#[case(Operation::Mtlo, OperandLayout::Rs)]
#[case(Operation::Mflo, OperandLayout::Rd)]
#[case(Operation::Jalr, OperandLayout::RdRs)]
#[case(Operation::Break, OperandLayout::NoOperands)]
#[case(Operation::Sltiu, OperandLayout::RtRsImm)]
#[case(Operation::Lui, OperandLayout::RtImm)]
#[case(Operation::Lhu, OperandLayout::RtImmRs)]
#[case(Operation::Swc1, OperandLayout::RtImmRs)]
#[case(Operation::Bne, OperandLayout::RsRtLabel)]
#[case(Operation::Bgtz, OperandLayout::RsLabel)]
#[case(Operation::Jal, OperandLayout::Label)]
fn test_layout(#[case] op: Operation, #[case] layout: OperandLayout) {
    assert_eq!(op.layout(), Some(layout));
}

#[rstest]
#[case(0b010000)]
#[case(0b011111)]
#[case(0b100010)]
#[case(0b111111)]
fn test_unassigned_opcodes(#[case] code: u8) {
    assert_eq!(
        Operation::from_opcode(code, 0),
        Err(DecodeError::UnknownOperation {
            table: DecodeTable::Opcode,
            code: u32::from(code),
        })
    );
}

#[test]
fn test_regimm_selector_range() {
    assert_eq!(Operation::from_opcode(1, 0), Ok(Operation::Bltz));
    assert_eq!(Operation::from_opcode(1, 1), Ok(Operation::Bgez));
    for rt in 2..32u8 {
        assert!(matches!(
            Operation::from_opcode(1, rt),
            Err(DecodeError::UnknownOperation { table: DecodeTable::RegImm, .. })
        ));
    }
}

#[test]
fn test_display_and_serialize_use_name() {
    assert_eq!(Operation::Sltu.to_string(), "sltu");
    assert_eq!(serde_json::to_string(&Operation::Lwc1).unwrap(), "\"lwc1\"");
}
