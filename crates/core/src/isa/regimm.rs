//! MIPS32 REGIMM Selectors.
//!
//! Under primary opcode `REGIMM`, the `rt` field (bits 20-16) selects the
//! operation instead of naming a register.

/// Branch on Less Than Zero.
pub const BLTZ: u32 = 0b00000;
/// Branch on Greater Than or Equal to Zero.
pub const BGEZ: u32 = 0b00001;
