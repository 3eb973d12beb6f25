//! MIPS32 Instruction Decoder.
//!
//! This module turns a 32-bit word into an [`Instruction`]. It performs:
//! 1. **Classification:** Primary opcode to [`Format`].
//! 2. **Extraction:** Slicing the word into the field set of that format.
//! 3. **Resolution:** Naming the operation from the opcode or function code table.
//! 4. **Formatting:** Rendering the canonical mnemonic.

use tracing::{debug, trace};

use crate::common::DecodeError;
use crate::isa::disasm::format_mnemonic;
use crate::isa::instruction::{
    Fields, Format, ImmediateFields, Instruction, InstructionBits, JumpFields, RegisterFields,
};
use crate::isa::opcodes;
use crate::isa::operation::Operation;

/// Classifies a primary opcode into its encoding format.
///
/// Total over all 64 opcodes: `SPECIAL` is register-type, `J`/`JAL` are
/// jump-type, and everything else (assigned or not) is immediate-type.
pub const fn classify(opcode: u8) -> Format {
    match opcode as u32 {
        opcodes::SPECIAL => Format::RegisterType,
        opcodes::J | opcodes::JAL => Format::JumpType,
        _ => Format::ImmediateType,
    }
}

/// Slices a word into the fields of `format`.
///
/// Never fails: every 32-bit word has a well-defined value for each field.
pub fn extract_fields(raw: u32, format: Format) -> Fields {
    match format {
        Format::RegisterType => Fields::Register(RegisterFields {
            opcode: raw.opcode(),
            rs: raw.rs(),
            rt: raw.rt(),
            rd: raw.rd(),
            shamt: raw.shamt(),
            funct: raw.funct(),
        }),
        Format::ImmediateType => Fields::Immediate(ImmediateFields {
            opcode: raw.opcode(),
            rs: raw.rs(),
            rt: raw.rt(),
            immediate: raw.imm(),
        }),
        Format::JumpType => Fields::Jump(JumpFields {
            opcode: raw.opcode(),
            label: raw.target(),
        }),
    }
}

/// Names the operation encoded by a field set.
///
/// Register-type words are looked up by function code; all others by
/// primary opcode (with `rt` selecting within REGIMM).
///
/// # Errors
///
/// `UnknownOperation` if the relevant code has no table entry.
pub fn resolve_operation(fields: &Fields) -> Result<Operation, DecodeError> {
    match fields {
        Fields::Register(r) => Operation::from_funct(r.funct),
        Fields::Immediate(i) => Operation::from_opcode(i.opcode, i.rt),
        Fields::Jump(j) => Operation::from_opcode(j.opcode, 0),
    }
}

/// Decodes a 32-bit instruction word.
///
/// # Errors
///
/// * `UnknownOperation` - the opcode or function code is unassigned.
/// * `UnformattableCategory` - the operation has no operand layout.
pub fn decode(raw: u32) -> Result<Instruction, DecodeError> {
    let format = classify(raw.opcode());
    let fields = extract_fields(raw, format);

    let named = resolve_operation(&fields)
        .and_then(|op| format_mnemonic(op, &fields).map(|text| (op, text)));

    match named {
        Ok((operation, mnemonic)) => {
            trace!(raw, %format, %mnemonic, "decoded");
            Ok(Instruction::new(raw, fields, operation, mnemonic))
        }
        Err(err) => {
            debug!(raw, %format, %err, "decode failed");
            Err(err)
        }
    }
}

/// Decodes a value that has not yet been narrowed to 32 bits.
///
/// # Errors
///
/// `MalformedWord` if `value` exceeds `u32::MAX`; otherwise as [`decode`].
pub fn decode_value(value: u64) -> Result<Instruction, DecodeError> {
    let raw = u32::try_from(value).map_err(|_| DecodeError::MalformedWord(value.to_string()))?;
    decode(raw)
}
