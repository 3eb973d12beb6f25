//! Decoded instruction reports.
//!
//! Renders an [`Instruction`] and its [`ControlSignals`] to any writer, in
//! either a line-oriented text form or as a single JSON object per word.

use std::io::{self, Write};

use serde::Serialize;

use crate::common::DecodeError;
use crate::config::{ReportConfig, ReportStyle};
use crate::control::ControlSignals;
use crate::isa::abi::register_name;
use crate::isa::instruction::{Fields, Format, Instruction};
use crate::isa::opcodes;

/// JSON shape of one decoded word.
#[derive(Serialize)]
struct JsonReport<'a> {
    raw: u32,
    bits: String,
    format: Format,
    operation: &'static str,
    mnemonic: &'a str,
    fields: &'a Fields,
    signals: &'a ControlSignals,
}

/// JSON shape of one failed decode.
#[derive(Serialize)]
struct JsonError<'a> {
    input: &'a str,
    error: String,
}

/// Writes the report for one decoded instruction.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    inst: &Instruction,
    signals: &ControlSignals,
    config: &ReportConfig,
) -> io::Result<()> {
    match config.style {
        ReportStyle::Text => write_text(out, inst, signals, config),
        ReportStyle::Json => {
            let report = JsonReport {
                raw: inst.raw(),
                bits: inst.bits(),
                format: inst.format(),
                operation: inst.name(),
                mnemonic: inst.mnemonic(),
                fields: inst.fields(),
                signals,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

/// Writes a one-line report for input that failed to parse or decode.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_error<W: Write>(
    out: &mut W,
    input: &str,
    err: &DecodeError,
    config: &ReportConfig,
) -> io::Result<()> {
    match config.style {
        ReportStyle::Text => writeln!(out, "error: {input}: {err}"),
        ReportStyle::Json => {
            let report = JsonError {
                input,
                error: err.to_string(),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

fn write_text<W: Write>(
    out: &mut W,
    inst: &Instruction,
    signals: &ControlSignals,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out, "Instruction: {}", inst.name())?;
    writeln!(out, "- Format: {}", inst.format())?;
    if config.show_bits {
        writeln!(out, "- Bits: {}", inst.bits())?;
    }
    writeln!(out, "- Mnemonic: {}", inst.mnemonic())?;

    writeln!(out, "- Fields:")?;
    for (field, value) in inst.fields().entries() {
        match annotation(inst, field, value).filter(|_| config.annotate_fields) {
            Some(note) => writeln!(out, "\t{field}: {value} ({note})")?,
            None => writeln!(out, "\t{field}: {value}")?,
        }
    }

    writeln!(out, "- Control signals:")?;
    for (name, value) in signals.entries() {
        writeln!(out, "\t{name}: {value}")?;
    }
    Ok(())
}

/// Returns the name a field value stands for, if any.
fn annotation(inst: &Instruction, field: &str, value: u32) -> Option<&'static str> {
    let is_register = inst.format() == Format::RegisterType;
    match field {
        "opcode" if !is_register => Some(inst.name()),
        "funct" => Some(inst.name()),
        // Under REGIMM, rt selects the operation and names no register.
        "rt" if u32::from(inst.opcode()) == opcodes::REGIMM => None,
        "rs" | "rt" | "rd" => u8::try_from(value).ok().and_then(|i| register_name(i).ok()),
        _ => None,
    }
}
