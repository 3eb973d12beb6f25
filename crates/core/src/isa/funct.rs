//! MIPS32 Function Codes.
//!
//! The function code (bits 5-0) names the operation of every word whose
//! primary opcode is `SPECIAL`.

/// Shift Word Left Logical.
pub const SLL: u32 = 0b000000;
/// Shift Word Right Logical.
pub const SRL: u32 = 0b000010;
/// Shift Word Right Arithmetic.
pub const SRA: u32 = 0b000011;
/// Shift Word Left Logical Variable.
pub const SLLV: u32 = 0b000100;
/// Shift Word Right Logical Variable.
pub const SRLV: u32 = 0b000110;
/// Shift Word Right Arithmetic Variable.
pub const SRAV: u32 = 0b000111;

/// Jump Register.
pub const JR: u32 = 0b001000;
/// Jump and Link Register.
pub const JALR: u32 = 0b001001;
/// System Call.
pub const SYSCALL: u32 = 0b001100;
/// Breakpoint.
pub const BREAK: u32 = 0b001101;

/// Move From HI.
pub const MFHI: u32 = 0b010000;
/// Move To HI.
pub const MTHI: u32 = 0b010001;
/// Move From LO.
pub const MFLO: u32 = 0b010010;
/// Move To LO.
pub const MTLO: u32 = 0b010011;

/// Multiply Word.
pub const MULT: u32 = 0b011000;
/// Multiply Unsigned Word.
pub const MULTU: u32 = 0b011001;
/// Divide Word.
pub const DIV: u32 = 0b011010;
/// Divide Unsigned Word.
pub const DIVU: u32 = 0b011011;

/// Add Word.
pub const ADD: u32 = 0b100000;
/// Add Unsigned Word.
pub const ADDU: u32 = 0b100001;
/// Subtract Word.
pub const SUB: u32 = 0b100010;
/// Subtract Unsigned Word.
pub const SUBU: u32 = 0b100011;
/// And.
pub const AND: u32 = 0b100100;
/// Or.
pub const OR: u32 = 0b100101;
/// Exclusive Or.
pub const XOR: u32 = 0b100110;
/// Not Or.
pub const NOR: u32 = 0b100111;

/// Set on Less Than.
pub const SLT: u32 = 0b101010;
/// Set on Less Than Unsigned.
pub const SLTU: u32 = 0b101011;
