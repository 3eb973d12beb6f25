//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the value types produced by a
//! decode: the encoding [`Format`], the per-format field sets, and the
//! immutable [`Instruction`].
//!
//! Bit offsets are written most-significant-bit first throughout, so the
//! opcode occupies bits 31-26 and the function code bits 5-0.

use std::fmt;

use serde::Serialize;

use crate::isa::operation::Operation;

/// Width of an encoded instruction in bits.
pub const WORD_BITS: u32 = 32;

/// Bit mask for the 6-bit opcode and function code fields.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for the 5-bit register and shift-amount fields.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

const OPCODE_SHIFT: u32 = 26;
const RS_SHIFT: u32 = 21;
const RT_SHIFT: u32 = 16;
const RD_SHIFT: u32 = 11;
const SHAMT_SHIFT: u32 = 6;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every method is a plain shift-and-mask; none of them validates that the
/// field is meaningful for the word's format.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 31-26).
    fn opcode(&self) -> u8;

    /// Extracts the first source register (bits 25-21).
    fn rs(&self) -> u8;

    /// Extracts the second source / immediate target register (bits 20-16).
    fn rt(&self) -> u8;

    /// Extracts the destination register of a register-type word (bits 15-11).
    fn rd(&self) -> u8;

    /// Extracts the shift amount (bits 10-6).
    fn shamt(&self) -> u8;

    /// Extracts the function code (bits 5-0).
    fn funct(&self) -> u8;

    /// Extracts the 16-bit immediate (bits 15-0), zero-extended.
    fn imm(&self) -> u16;

    /// Extracts the 26-bit jump target (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rs(&self) -> u8 {
        ((self >> RS_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rt(&self) -> u8 {
        ((self >> RT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn shamt(&self) -> u8 {
        ((self >> SHAMT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn funct(&self) -> u8 {
        (self & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Instruction encoding format, determined solely by the primary opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register: `opcode | rs | rt | rd | shamt | funct`.
    #[serde(rename = "R")]
    RegisterType,
    /// Immediate: `opcode | rs | rt | immediate`.
    #[serde(rename = "I")]
    ImmediateType,
    /// Jump: `opcode | label`.
    #[serde(rename = "J")]
    JumpType,
}

impl Format {
    /// Returns the one-letter tag conventionally used for the format.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::RegisterType => "R",
            Self::ImmediateType => "I",
            Self::JumpType => "J",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fields of a register-type word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterFields {
    /// Primary opcode (always `SPECIAL`).
    pub opcode: u8,
    /// First source register.
    pub rs: u8,
    /// Second source register.
    pub rt: u8,
    /// Destination register.
    pub rd: u8,
    /// Shift amount.
    pub shamt: u8,
    /// Function code.
    pub funct: u8,
}

/// Fields of an immediate-type word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImmediateFields {
    /// Primary opcode.
    pub opcode: u8,
    /// Source / base register.
    pub rs: u8,
    /// Target register (or REGIMM selector).
    pub rt: u8,
    /// 16-bit immediate, treated as unsigned.
    #[serde(rename = "imm")]
    pub immediate: u16,
}

/// Fields of a jump-type word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct JumpFields {
    /// Primary opcode.
    pub opcode: u8,
    /// 26-bit jump target.
    pub label: u32,
}

/// Extracted field set; one case per [`Format`], each carrying only the
/// fields that exist for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Fields {
    /// Register-type fields.
    Register(RegisterFields),
    /// Immediate-type fields.
    Immediate(ImmediateFields),
    /// Jump-type fields.
    Jump(JumpFields),
}

impl Fields {
    /// Returns the format this field set belongs to.
    pub const fn format(&self) -> Format {
        match self {
            Self::Register(_) => Format::RegisterType,
            Self::Immediate(_) => Format::ImmediateType,
            Self::Jump(_) => Format::JumpType,
        }
    }

    /// Returns the primary opcode, present in every format.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Register(r) => r.opcode,
            Self::Immediate(i) => i.opcode,
            Self::Jump(j) => j.opcode,
        }
    }

    /// Returns `(name, value)` pairs in encoding order, most significant first.
    pub fn entries(&self) -> Vec<(&'static str, u32)> {
        match *self {
            Self::Register(r) => vec![
                ("opcode", r.opcode.into()),
                ("rs", r.rs.into()),
                ("rt", r.rt.into()),
                ("rd", r.rd.into()),
                ("shamt", r.shamt.into()),
                ("funct", r.funct.into()),
            ],
            Self::Immediate(i) => vec![
                ("opcode", i.opcode.into()),
                ("rs", i.rs.into()),
                ("rt", i.rt.into()),
                ("imm", i.immediate.into()),
            ],
            Self::Jump(j) => vec![("opcode", j.opcode.into()), ("label", j.label)],
        }
    }
}

/// A decoded instruction.
///
/// Created once per decoded word and never mutated. Every field is derived
/// from `raw`; the value shares no state with other instructions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    raw: u32,
    opcode: u8,
    format: Format,
    fields: Fields,
    operation: Operation,
    mnemonic: String,
}

impl Instruction {
    /// Assembles an instruction from already-validated parts.
    pub(crate) fn new(raw: u32, fields: Fields, operation: Operation, mnemonic: String) -> Self {
        Self {
            raw,
            opcode: fields.opcode(),
            format: fields.format(),
            fields,
            operation,
            mnemonic,
        }
    }

    /// Raw 32-bit encoding.
    pub const fn raw(&self) -> u32 {
        self.raw
    }

    /// Primary opcode (bits 31-26).
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Encoding format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Extracted fields for this format.
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Resolved operation.
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Resolved operation name (e.g. `"addi"`).
    pub const fn name(&self) -> &'static str {
        self.operation.name()
    }

    /// Canonical assembly text (e.g. `"addi $s0, $s1, 5"`).
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The raw word as a 32-character binary string.
    pub fn bits(&self) -> String {
        format!("{:032b}", self.raw)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic)
    }
}
