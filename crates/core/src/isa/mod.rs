//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encoding constants, operation tables, register names, and
//! decoding logic for the MIPS32 integer instruction subset.
//!
//! # Layout
//!
//! * `opcodes`: Primary opcodes (bits 31-26).
//! * `funct`: Function codes for register-type words (bits 5-0).
//! * `regimm`: `rt` selectors under the REGIMM primary opcode.
//! * `operation`: Operation enum, operand layouts, and table lookups.

/// Register name table (index ↔ `$name`).
pub mod abi;

/// Format classification, field extraction, and the decode entry point.
pub mod decode;

/// Mnemonic formatter producing canonical assembly text.
pub mod disasm;

/// Function code definitions for register-type instructions.
pub mod funct;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Primary opcode definitions.
pub mod opcodes;

/// Operation names, operand layouts, and opcode/function-code tables.
pub mod operation;

/// REGIMM `rt` selector definitions (`bltz`/`bgez`).
pub mod regimm;
