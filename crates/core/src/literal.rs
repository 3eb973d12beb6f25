//! Numeric literal parsing.
//!
//! Converts operator input such as `0x2230_0005`, `0B1010`, or `573571077`
//! into a 32-bit instruction word. Supported forms:
//!
//! - decimal (no prefix)
//! - `0b` binary, `0o` octal, `0x` hexadecimal; prefix case-insensitive
//! - `_` between digits as a separator
//!
//! Signs are rejected: an instruction word is never negative.

use crate::common::DecodeError;

/// Parses a literal into a 32-bit word.
///
/// # Errors
///
/// `MalformedWord` if the input is empty, signed, contains a digit invalid
/// for its radix, or exceeds `u32::MAX`.
pub fn parse_word(input: &str) -> Result<u32, DecodeError> {
    let malformed = || DecodeError::MalformedWord(input.to_string());
    let text = input.trim();

    let (radix, digits) = split_radix(text);
    let digits: String = digits.chars().filter(|&c| c != '_').collect();

    // from_str_radix accepts a leading '+', which is a sign we reject.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed());
    }
    u32::from_str_radix(&digits, radix).map_err(|_| malformed())
}

/// Splits an optional radix prefix off `text`.
fn split_radix(text: &str) -> (u32, &str) {
    let prefix = text.get(..2).map(str::to_ascii_lowercase);
    match prefix.as_deref() {
        Some("0b") => (2, &text[2..]),
        Some("0o") => (8, &text[2..]),
        Some("0x") => (16, &text[2..]),
        _ => (10, text),
    }
}
