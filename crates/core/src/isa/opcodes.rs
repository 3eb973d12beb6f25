//! MIPS32 Primary Opcodes.
//!
//! Defines the primary opcodes (bits 31-26). Opcode `SPECIAL` selects the
//! register-type format, where the operation is named by the function code.

/// Register-type escape; operation is selected by the function code.
pub const SPECIAL: u32 = 0b000000;
/// Branch on sign of `rs` (BLTZ, BGEZ); operation is selected by `rt`.
pub const REGIMM: u32 = 0b000001;

/// Jump.
pub const J: u32 = 0b000010;
/// Jump and Link.
pub const JAL: u32 = 0b000011;

/// Branch on Equal.
pub const BEQ: u32 = 0b000100;
/// Branch on Not Equal.
pub const BNE: u32 = 0b000101;
/// Branch on Less Than or Equal to Zero.
pub const BLEZ: u32 = 0b000110;
/// Branch on Greater Than Zero.
pub const BGTZ: u32 = 0b000111;

/// Add Immediate.
pub const ADDI: u32 = 0b001000;
/// Add Immediate Unsigned.
pub const ADDIU: u32 = 0b001001;
/// Set on Less Than Immediate.
pub const SLTI: u32 = 0b001010;
/// Set on Less Than Immediate Unsigned.
pub const SLTIU: u32 = 0b001011;
/// And Immediate.
pub const ANDI: u32 = 0b001100;
/// Or Immediate.
pub const ORI: u32 = 0b001101;
/// Xor Immediate.
pub const XORI: u32 = 0b001110;
/// Load Upper Immediate.
pub const LUI: u32 = 0b001111;

/// Load Byte.
pub const LB: u32 = 0b100000;
/// Load Halfword.
pub const LH: u32 = 0b100001;
/// Load Word.
pub const LW: u32 = 0b100011;
/// Load Byte Unsigned.
pub const LBU: u32 = 0b100100;
/// Load Halfword Unsigned.
pub const LHU: u32 = 0b100101;

/// Store Byte.
pub const SB: u32 = 0b101000;
/// Store Halfword.
pub const SH: u32 = 0b101001;
/// Store Word.
pub const SW: u32 = 0b101011;

/// Load Word to Coprocessor 1.
pub const LWC1: u32 = 0b110001;
/// Store Word from Coprocessor 1.
pub const SWC1: u32 = 0b111001;

/// Returns true for the integer loads that drive `MemRead`.
///
/// `LWC1` is excluded: it does not write the integer register file.
pub const fn is_load(opcode: u32) -> bool {
    matches!(opcode, LB | LBU | LH | LHU | LW)
}

/// Returns true for the integer stores that drive `MemWrite`.
pub const fn is_store(opcode: u32) -> bool {
    matches!(opcode, SB | SH | SW)
}

/// Returns true for the conditional branches that drive `Branch`.
pub const fn is_branch(opcode: u32) -> bool {
    matches!(opcode, BEQ | BNE | REGIMM | BGTZ | BLEZ)
}
