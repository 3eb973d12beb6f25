//! Common utilities and types used throughout the decoder.
//!
//! This module provides the error type shared by the ISA tables, the field
//! extractor, the mnemonic formatter, and the literal parser.

/// Error types for decode and formatting failures.
pub mod error;

pub use error::{DecodeError, DecodeTable};
