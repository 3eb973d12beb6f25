//! Decode error definitions.
//!
//! This module defines every way a single decode call can fail. It provides:
//! 1. **Input Errors:** Words that are not representable as 32 unsigned bits.
//! 2. **Table Errors:** Opcodes or function codes with no assigned operation.
//! 3. **Formatting Errors:** Operations with no operand layout.
//! 4. **Register Errors:** Out-of-range indices and unknown register names.
//!
//! Errors are local to one decode call; no partial result accompanies them.

use std::fmt;

/// Lookup table in which an operation code was not found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeTable {
    /// Primary opcode table (bits 31-26).
    Opcode,
    /// Function code table used by register-type words (bits 5-0).
    Function,
    /// REGIMM selector table, keyed by the `rt` field under opcode `0b000001`.
    RegImm,
}

impl fmt::Display for DecodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opcode => write!(f, "opcode"),
            Self::Function => write!(f, "function code"),
            Self::RegImm => write!(f, "regimm selector"),
        }
    }
}

/// Errors raised while decoding or formatting a single instruction word.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input is not a non-negative integer that fits in 32 bits.
    ///
    /// The associated value is the offending input as supplied.
    #[error("malformed instruction word `{0}`")]
    MalformedWord(String),

    /// Opcode, function code, or REGIMM selector has no table entry.
    #[error("unknown operation: {table} {code:#08b} is unassigned")]
    UnknownOperation {
        /// Table the code was looked up in.
        table: DecodeTable,
        /// The unassigned code.
        code: u32,
    },

    /// Operation resolved but has no operand layout (or its fields do not
    /// match the layout's format).
    #[error("operation `{0}` cannot be formatted")]
    UnformattableCategory(&'static str),

    /// Register index outside 0-31.
    #[error("invalid register index {0}")]
    InvalidRegisterIndex(u8),

    /// Register name not present in the register table.
    #[error("unknown register name `{0}`")]
    UnknownRegister(String),
}

impl DecodeError {
    /// Returns true if the error came from an operation table lookup.
    pub const fn is_unknown_operation(&self) -> bool {
        matches!(self, Self::UnknownOperation { .. })
    }
}
