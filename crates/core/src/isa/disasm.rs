//! Mnemonic formatter for MIPS32.
//!
//! Renders an operation and its fields as conventional assembly text.
//! Operand order depends on the operation's [`OperandLayout`], not on the
//! encoding format alone: `sllv` and `add` are both register-type, but one
//! reads `rd, rt, rs` and the other `rd, rs, rt`.
//!
//! Registers render by name, immediates and labels as unsigned decimal.
//!
//! # Usage
//!
//! ```
//! use mipsdec_core::isa::disasm::disassemble;
//! let text = disassemble(0x2230_0005).unwrap(); // addi $s0, $s1, 5
//! assert_eq!(text, "addi $s0, $s1, 5");
//! ```

use crate::common::DecodeError;
use crate::isa::abi::register_name;
use crate::isa::decode::decode;
use crate::isa::instruction::Fields;
use crate::isa::operation::{OperandLayout, Operation};

/// Formats `operation` with the operands taken from `fields`.
///
/// # Errors
///
/// * `UnformattableCategory` - the operation has no layout, or `fields`
///   belong to a different format than the layout reads.
/// * `InvalidRegisterIndex` - a register field is out of range (cannot
///   happen for fields produced by the extractor).
pub fn format_mnemonic(operation: Operation, fields: &Fields) -> Result<String, DecodeError> {
    let name = operation.name();
    let unformattable = || DecodeError::UnformattableCategory(name);
    let layout = operation.layout().ok_or_else(unformattable)?;

    let text = match (layout, fields) {
        // ── Register-type ─────────────────────────────────
        (OperandLayout::RdRsRt, Fields::Register(r)) => format!(
            "{name} {}, {}, {}",
            register_name(r.rd)?,
            register_name(r.rs)?,
            register_name(r.rt)?
        ),
        (OperandLayout::RdRtShamt, Fields::Register(r)) => format!(
            "{name} {}, {}, {}",
            register_name(r.rd)?,
            register_name(r.rt)?,
            r.shamt
        ),
        (OperandLayout::RdRtRs, Fields::Register(r)) => format!(
            "{name} {}, {}, {}",
            register_name(r.rd)?,
            register_name(r.rt)?,
            register_name(r.rs)?
        ),
        (OperandLayout::RsRt, Fields::Register(r)) => {
            format!("{name} {}, {}", register_name(r.rs)?, register_name(r.rt)?)
        }
        (OperandLayout::Rs, Fields::Register(r)) => format!("{name} {}", register_name(r.rs)?),
        (OperandLayout::Rd, Fields::Register(r)) => format!("{name} {}", register_name(r.rd)?),
        (OperandLayout::RdRs, Fields::Register(r)) => {
            format!("{name} {}, {}", register_name(r.rd)?, register_name(r.rs)?)
        }
        (OperandLayout::NoOperands, Fields::Register(_)) => name.to_string(),

        // ── Immediate-type ────────────────────────────────
        (OperandLayout::RtRsImm, Fields::Immediate(i)) => format!(
            "{name} {}, {}, {}",
            register_name(i.rt)?,
            register_name(i.rs)?,
            i.immediate
        ),
        (OperandLayout::RtImm, Fields::Immediate(i)) => {
            format!("{name} {}, {}", register_name(i.rt)?, i.immediate)
        }
        (OperandLayout::RtImmRs, Fields::Immediate(i)) => format!(
            "{name} {}, {}({})",
            register_name(i.rt)?,
            i.immediate,
            register_name(i.rs)?
        ),
        (OperandLayout::RsRtLabel, Fields::Immediate(i)) => format!(
            "{name} {}, {}, {}",
            register_name(i.rs)?,
            register_name(i.rt)?,
            i.immediate
        ),
        (OperandLayout::RsLabel, Fields::Immediate(i)) => {
            format!("{name} {}, {}", register_name(i.rs)?, i.immediate)
        }

        // ── Jump-type ─────────────────────────────────────
        (OperandLayout::Label, Fields::Jump(j)) => format!("{name} {}", j.label),

        _ => return Err(unformattable()),
    };
    Ok(text)
}

/// Decodes `raw` and returns only its mnemonic.
///
/// # Errors
///
/// Any error [`decode`] reports.
pub fn disassemble(raw: u32) -> Result<String, DecodeError> {
    decode(raw).map(|inst| inst.mnemonic().to_string())
}
