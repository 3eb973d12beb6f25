//! MIPS32 instruction decoder library.
//!
//! This crate decodes single 32-bit MIPS instruction words with the following:
//! 1. **ISA:** Format classification, field extraction, and opcode/function-code tables.
//! 2. **Disassembly:** Canonical assembly mnemonics with per-category operand ordering.
//! 3. **Control:** The seven-signal control vector of a single-cycle datapath.
//! 4. **I/O helpers:** Numeric literal parsing, report rendering, and configuration.
//!
//! Decoding is stateless: every table is a compile-time constant and every
//! operation is a pure function of its input word.

/// Common types (decode errors).
pub mod common;
/// Decoder configuration (tracing, report style, prompt).
pub mod config;
/// Datapath control signal derivation.
pub mod control;
/// Instruction set (opcodes, function codes, registers, decode, disassembly).
pub mod isa;
/// Numeric literal to instruction word parsing.
pub mod literal;
/// Text and JSON rendering of decoded instructions.
pub mod report;

/// Error type shared by every decode operation.
pub use crate::common::DecodeError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Control vector derived from a decoded instruction.
pub use crate::control::ControlSignals;
/// Top-level decode entry point.
pub use crate::isa::decode::decode;
/// Immutable decoded instruction value.
pub use crate::isa::instruction::Instruction;
