//! Single-cycle control signals.
//!
//! This module defines the signals that steer a single-cycle datapath. It performs:
//! 1. **Classification:** Marks an opcode as load, store, or branch.
//! 2. **Derivation:** Maps (format, class) to the seven-signal control vector.
//! 3. **Tri-state Values:** Distinguishes "don't care" from a deasserted signal.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::isa::instruction::{Format, Instruction};
use crate::isa::opcodes;

/// Names of the control signals, in vector order.
pub const SIGNAL_NAMES: [&str; 7] = [
    "ALUSrc", "Branch", "MemRead", "MemToReg", "MemWrite", "RegDst", "RegWrite",
];

/// Value of one control line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Driven high (1).
    Asserted,
    /// Driven low (0).
    Deasserted,
    /// Unconstrained for this instruction class (X). Not the same as 0.
    DontCare,
}

impl Signal {
    /// Maps a boolean to `Asserted` / `Deasserted`.
    pub const fn from_bool(high: bool) -> Self {
        if high { Self::Asserted } else { Self::Deasserted }
    }

    /// Returns `Some(1)`, `Some(0)`, or `None` for don't-care.
    pub const fn bit(self) -> Option<u8> {
        match self {
            Self::Asserted => Some(1),
            Self::Deasserted => Some(0),
            Self::DontCare => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asserted => f.write_str("1"),
            Self::Deasserted => f.write_str("0"),
            Self::DontCare => f.write_str("X"),
        }
    }
}

impl Serialize for Signal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.bit() {
            Some(bit) => serializer.serialize_u8(bit),
            None => serializer.serialize_none(),
        }
    }
}

/// Opcode-level instruction class used by the control unit.
///
/// Computed from the primary opcode only; function codes never affect it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstructionClass {
    /// Integer load (`lb`, `lbu`, `lh`, `lhu`, `lw`).
    pub is_load: bool,
    /// Integer store (`sb`, `sh`, `sw`).
    pub is_store: bool,
    /// Conditional branch (`beq`, `bne`, `bgez`/`bltz`, `bgtz`, `blez`).
    pub is_branch: bool,
}

impl InstructionClass {
    /// Classifies a primary opcode.
    pub const fn from_opcode(opcode: u8) -> Self {
        let opcode = opcode as u32;
        Self {
            is_load: opcodes::is_load(opcode),
            is_store: opcodes::is_store(opcode),
            is_branch: opcodes::is_branch(opcode),
        }
    }
}

/// Control signals for a single-cycle datapath.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControlSignals {
    /// ALU operand B comes from the immediate rather than `rt`.
    #[serde(rename = "ALUSrc")]
    pub alu_src: Signal,
    /// Instruction is a conditional branch.
    pub branch: Signal,
    /// Data memory is read.
    pub mem_read: Signal,
    /// Register write-back value comes from memory rather than the ALU.
    pub mem_to_reg: Signal,
    /// Data memory is written.
    pub mem_write: Signal,
    /// Destination register is `rd` rather than `rt`.
    pub reg_dst: Signal,
    /// Register file is written.
    pub reg_write: Signal,
}

impl ControlSignals {
    /// Derives the control vector from the format and opcode class.
    ///
    /// `MemToReg` and `RegDst` are don't-care for stores and branches, which
    /// write no register.
    pub const fn derive(format: Format, class: InstructionClass) -> Self {
        let InstructionClass {
            is_load,
            is_store,
            is_branch,
        } = class;
        let is_register = matches!(format, Format::RegisterType);
        let no_dest = is_store || is_branch;

        Self {
            alu_src: Signal::from_bool(!(is_register || is_branch)),
            branch: Signal::from_bool(is_branch),
            mem_read: Signal::from_bool(is_load),
            mem_to_reg: if is_load {
                Signal::Asserted
            } else if no_dest {
                Signal::DontCare
            } else {
                Signal::Deasserted
            },
            mem_write: Signal::from_bool(is_store),
            reg_dst: if no_dest {
                Signal::DontCare
            } else {
                Signal::from_bool(is_register)
            },
            reg_write: Signal::from_bool(!no_dest),
        }
    }

    /// Derives the control vector of a decoded instruction.
    pub const fn for_instruction(inst: &Instruction) -> Self {
        Self::derive(inst.format(), InstructionClass::from_opcode(inst.opcode()))
    }

    /// Returns `(name, value)` pairs in vector order.
    pub const fn entries(&self) -> [(&'static str, Signal); 7] {
        [
            (SIGNAL_NAMES[0], self.alu_src),
            (SIGNAL_NAMES[1], self.branch),
            (SIGNAL_NAMES[2], self.mem_read),
            (SIGNAL_NAMES[3], self.mem_to_reg),
            (SIGNAL_NAMES[4], self.mem_write),
            (SIGNAL_NAMES[5], self.reg_dst),
            (SIGNAL_NAMES[6], self.reg_write),
        ]
    }
}

impl From<&Instruction> for ControlSignals {
    fn from(inst: &Instruction) -> Self {
        Self::for_instruction(inst)
    }
}
