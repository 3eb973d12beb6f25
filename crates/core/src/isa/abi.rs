//! MIPS32 register name table.
//!
//! Maps the 32 general-purpose register indices to their conventional
//! assembler names and back. The table is a compile-time constant.

use crate::common::DecodeError;

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 32;

/// Register $0 (hardwired zero).
pub const REG_ZERO: u8 = 0;
/// Register $1 (assembler temporary).
pub const REG_AT: u8 = 1;
/// Register $2 (first return value).
pub const REG_V0: u8 = 2;
/// Register $4 (first argument).
pub const REG_A0: u8 = 4;
/// Register $8 (first temporary).
pub const REG_T0: u8 = 8;
/// Register $16 (first saved register).
pub const REG_S0: u8 = 16;
/// Register $28 (global pointer).
pub const REG_GP: u8 = 28;
/// Register $29 (stack pointer).
pub const REG_SP: u8 = 29;
/// Register $30 (saved register 8 / frame pointer).
pub const REG_S8: u8 = 30;
/// Register $31 (return address).
pub const REG_RA: u8 = 31;

/// Canonical names for $0–$31.
pub const REG_NAMES: [&str; REG_COUNT] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$s8", "$ra",
];

/// Alias accepted for $30 on reverse lookup. Never produced by `register_name`.
const FP_ALIAS: &str = "$fp";

/// Returns the canonical name of a register.
///
/// # Errors
///
/// `InvalidRegisterIndex` if `index` is not in 0-31. A 5-bit field
/// extracted from a word can never trigger this.
pub fn register_name(index: u8) -> Result<&'static str, DecodeError> {
    REG_NAMES
        .get(index as usize)
        .copied()
        .ok_or(DecodeError::InvalidRegisterIndex(index))
}

/// Returns the index of a register given its name.
///
/// Accepts every canonical name plus the `$fp` alias for $30.
///
/// # Errors
///
/// `UnknownRegister` if `name` is not in the table.
pub fn register_index(name: &str) -> Result<u8, DecodeError> {
    if name == FP_ALIAS {
        return Ok(REG_S8);
    }
    REG_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as u8)
        .ok_or_else(|| DecodeError::UnknownRegister(name.to_string()))
}
