//! Operation tables.
//!
//! This module names every supported operation and assigns it an operand
//! layout. It performs:
//! 1. **Opcode Lookup:** Primary opcode (and REGIMM `rt` selector) to operation.
//! 2. **Function Lookup:** Function code of register-type words to operation.
//! 3. **Layout Assignment:** One [`OperandLayout`] per operation, used by the
//!    mnemonic formatter.
//!
//! Lookups are exhaustive matches over constants, so the tables are fixed at
//! compile time and an unassigned code is an explicit error.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::common::{DecodeError, DecodeTable};
use crate::isa::instruction::Format;
use crate::isa::{funct, opcodes, regimm};

/// Operand ordering category used when rendering a mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandLayout {
    /// `name rd, rs, rt` (register arithmetic and logic).
    RdRsRt,
    /// `name rd, rt, shamt` (shift by fixed amount).
    RdRtShamt,
    /// `name rd, rt, rs` (shift by variable amount).
    RdRtRs,
    /// `name rs, rt` (multiply and divide).
    RsRt,
    /// `name rs` (`jr`, `mthi`, `mtlo`).
    Rs,
    /// `name rd` (`mfhi`, `mflo`).
    Rd,
    /// `name rd, rs` (`jalr`).
    RdRs,
    /// `name` (`break`, `syscall`).
    NoOperands,
    /// `name rt, rs, immediate` (immediate arithmetic and logic).
    RtRsImm,
    /// `name rt, immediate` (`lui`).
    RtImm,
    /// `name rt, immediate(rs)` (loads and stores).
    RtImmRs,
    /// `name rs, rt, label` (`beq`, `bne`).
    RsRtLabel,
    /// `name rs, label` (compare-with-zero branches).
    RsLabel,
    /// `name label` (`j`, `jal`).
    Label,
}

impl OperandLayout {
    /// Returns the format whose fields this layout reads.
    pub const fn format(self) -> Format {
        match self {
            Self::RdRsRt
            | Self::RdRtShamt
            | Self::RdRtRs
            | Self::RsRt
            | Self::Rs
            | Self::Rd
            | Self::RdRs
            | Self::NoOperands => Format::RegisterType,
            Self::RtRsImm | Self::RtImm | Self::RtImmRs | Self::RsRtLabel | Self::RsLabel => {
                Format::ImmediateType
            }
            Self::Label => Format::JumpType,
        }
    }
}

/// A named MIPS32 operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Opcode-table marker for the register-type escape. Has no operand
    /// layout; the real operation comes from the function code.
    Special,

    // Function-code table.
    /// Add Word.
    Add,
    /// Add Unsigned Word.
    Addu,
    /// And.
    And,
    /// Breakpoint.
    Break,
    /// Divide Word.
    Div,
    /// Divide Unsigned Word.
    Divu,
    /// Jump and Link Register.
    Jalr,
    /// Jump Register.
    Jr,
    /// Move From HI.
    Mfhi,
    /// Move From LO.
    Mflo,
    /// Move To HI.
    Mthi,
    /// Move To LO.
    Mtlo,
    /// Multiply Word.
    Mult,
    /// Multiply Unsigned Word.
    Multu,
    /// Not Or.
    Nor,
    /// Or.
    Or,
    /// Shift Word Left Logical.
    Sll,
    /// Shift Word Left Logical Variable.
    Sllv,
    /// Set on Less Than.
    Slt,
    /// Set on Less Than Unsigned.
    Sltu,
    /// Shift Word Right Arithmetic.
    Sra,
    /// Shift Word Right Arithmetic Variable.
    Srav,
    /// Shift Word Right Logical.
    Srl,
    /// Shift Word Right Logical Variable.
    Srlv,
    /// Subtract Word.
    Sub,
    /// Subtract Unsigned Word.
    Subu,
    /// System Call.
    Syscall,
    /// Exclusive Or.
    Xor,

    // Opcode table.
    /// Add Immediate.
    Addi,
    /// Add Immediate Unsigned.
    Addiu,
    /// And Immediate.
    Andi,
    /// Branch on Equal.
    Beq,
    /// Branch on Greater Than or Equal to Zero.
    Bgez,
    /// Branch on Greater Than Zero.
    Bgtz,
    /// Branch on Less Than or Equal to Zero.
    Blez,
    /// Branch on Less Than Zero.
    Bltz,
    /// Branch on Not Equal.
    Bne,
    /// Load Byte.
    Lb,
    /// Load Byte Unsigned.
    Lbu,
    /// Load Halfword.
    Lh,
    /// Load Halfword Unsigned.
    Lhu,
    /// Load Upper Immediate.
    Lui,
    /// Load Word.
    Lw,
    /// Load Word to Coprocessor 1.
    Lwc1,
    /// Or Immediate.
    Ori,
    /// Store Byte.
    Sb,
    /// Set on Less Than Immediate.
    Slti,
    /// Set on Less Than Immediate Unsigned.
    Sltiu,
    /// Store Halfword.
    Sh,
    /// Store Word.
    Sw,
    /// Store Word from Coprocessor 1.
    Swc1,
    /// Xor Immediate.
    Xori,
    /// Jump.
    J,
    /// Jump and Link.
    Jal,
}

impl Operation {
    /// Every operation a word can decode to (excludes the `Special` marker).
    pub const ALL: [Self; 54] = [
        Self::Add,
        Self::Addu,
        Self::And,
        Self::Break,
        Self::Div,
        Self::Divu,
        Self::Jalr,
        Self::Jr,
        Self::Mfhi,
        Self::Mflo,
        Self::Mthi,
        Self::Mtlo,
        Self::Mult,
        Self::Multu,
        Self::Nor,
        Self::Or,
        Self::Sll,
        Self::Sllv,
        Self::Slt,
        Self::Sltu,
        Self::Sra,
        Self::Srav,
        Self::Srl,
        Self::Srlv,
        Self::Sub,
        Self::Subu,
        Self::Syscall,
        Self::Xor,
        Self::Addi,
        Self::Addiu,
        Self::Andi,
        Self::Beq,
        Self::Bgez,
        Self::Bgtz,
        Self::Blez,
        Self::Bltz,
        Self::Bne,
        Self::Lb,
        Self::Lbu,
        Self::Lh,
        Self::Lhu,
        Self::Lui,
        Self::Lw,
        Self::Lwc1,
        Self::Ori,
        Self::Sb,
        Self::Slti,
        Self::Sltiu,
        Self::Sh,
        Self::Sw,
        Self::Swc1,
        Self::Xori,
        Self::J,
        Self::Jal,
    ];

    /// Looks up a primary opcode.
    ///
    /// `rt` is only consulted for `REGIMM`, where it selects between
    /// `bltz` and `bgez`.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` if the opcode (or REGIMM selector) is unassigned.
    pub fn from_opcode(opcode: u8, rt: u8) -> Result<Self, DecodeError> {
        let op = match opcode as u32 {
            opcodes::SPECIAL => Self::Special,
            opcodes::REGIMM => match rt as u32 {
                regimm::BLTZ => Self::Bltz,
                regimm::BGEZ => Self::Bgez,
                _ => {
                    return Err(DecodeError::UnknownOperation {
                        table: DecodeTable::RegImm,
                        code: rt as u32,
                    });
                }
            },
            opcodes::J => Self::J,
            opcodes::JAL => Self::Jal,
            opcodes::BEQ => Self::Beq,
            opcodes::BNE => Self::Bne,
            opcodes::BLEZ => Self::Blez,
            opcodes::BGTZ => Self::Bgtz,
            opcodes::ADDI => Self::Addi,
            opcodes::ADDIU => Self::Addiu,
            opcodes::SLTI => Self::Slti,
            opcodes::SLTIU => Self::Sltiu,
            opcodes::ANDI => Self::Andi,
            opcodes::ORI => Self::Ori,
            opcodes::XORI => Self::Xori,
            opcodes::LUI => Self::Lui,
            opcodes::LB => Self::Lb,
            opcodes::LH => Self::Lh,
            opcodes::LW => Self::Lw,
            opcodes::LBU => Self::Lbu,
            opcodes::LHU => Self::Lhu,
            opcodes::SB => Self::Sb,
            opcodes::SH => Self::Sh,
            opcodes::SW => Self::Sw,
            opcodes::LWC1 => Self::Lwc1,
            opcodes::SWC1 => Self::Swc1,
            code => {
                return Err(DecodeError::UnknownOperation {
                    table: DecodeTable::Opcode,
                    code,
                });
            }
        };
        Ok(op)
    }

    /// Looks up the function code of a register-type word.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` if the function code is unassigned.
    pub fn from_funct(code: u8) -> Result<Self, DecodeError> {
        let op = match code as u32 {
            funct::SLL => Self::Sll,
            funct::SRL => Self::Srl,
            funct::SRA => Self::Sra,
            funct::SLLV => Self::Sllv,
            funct::SRLV => Self::Srlv,
            funct::SRAV => Self::Srav,
            funct::JR => Self::Jr,
            funct::JALR => Self::Jalr,
            funct::SYSCALL => Self::Syscall,
            funct::BREAK => Self::Break,
            funct::MFHI => Self::Mfhi,
            funct::MTHI => Self::Mthi,
            funct::MFLO => Self::Mflo,
            funct::MTLO => Self::Mtlo,
            funct::MULT => Self::Mult,
            funct::MULTU => Self::Multu,
            funct::DIV => Self::Div,
            funct::DIVU => Self::Divu,
            funct::ADD => Self::Add,
            funct::ADDU => Self::Addu,
            funct::SUB => Self::Sub,
            funct::SUBU => Self::Subu,
            funct::AND => Self::And,
            funct::OR => Self::Or,
            funct::XOR => Self::Xor,
            funct::NOR => Self::Nor,
            funct::SLT => Self::Slt,
            funct::SLTU => Self::Sltu,
            code => {
                return Err(DecodeError::UnknownOperation {
                    table: DecodeTable::Function,
                    code,
                });
            }
        };
        Ok(op)
    }

    /// Reverse lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Special => "[R-Type]",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::And => "and",
            Self::Break => "break",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Jalr => "jalr",
            Self::Jr => "jr",
            Self::Mfhi => "mfhi",
            Self::Mflo => "mflo",
            Self::Mthi => "mthi",
            Self::Mtlo => "mtlo",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Nor => "nor",
            Self::Or => "or",
            Self::Sll => "sll",
            Self::Sllv => "sllv",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Sra => "sra",
            Self::Srav => "srav",
            Self::Srl => "srl",
            Self::Srlv => "srlv",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::Syscall => "syscall",
            Self::Xor => "xor",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Andi => "andi",
            Self::Beq => "beq",
            Self::Bgez => "bgez",
            Self::Bgtz => "bgtz",
            Self::Blez => "blez",
            Self::Bltz => "bltz",
            Self::Bne => "bne",
            Self::Lb => "lb",
            Self::Lbu => "lbu",
            Self::Lh => "lh",
            Self::Lhu => "lhu",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Lwc1 => "lwc1",
            Self::Ori => "ori",
            Self::Sb => "sb",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Swc1 => "swc1",
            Self::Xori => "xori",
            Self::J => "j",
            Self::Jal => "jal",
        }
    }

    /// Operand layout, or `None` for the `Special` marker.
    pub const fn layout(self) -> Option<OperandLayout> {
        let layout = match self {
            Self::Special => return None,
            Self::Add
            | Self::Addu
            | Self::And
            | Self::Nor
            | Self::Or
            | Self::Slt
            | Self::Sltu
            | Self::Sub
            | Self::Subu
            | Self::Xor => OperandLayout::RdRsRt,
            Self::Sll | Self::Sra | Self::Srl => OperandLayout::RdRtShamt,
            Self::Sllv | Self::Srav | Self::Srlv => OperandLayout::RdRtRs,
            Self::Div | Self::Divu | Self::Mult | Self::Multu => OperandLayout::RsRt,
            Self::Jr | Self::Mthi | Self::Mtlo => OperandLayout::Rs,
            Self::Mfhi | Self::Mflo => OperandLayout::Rd,
            Self::Jalr => OperandLayout::RdRs,
            Self::Break | Self::Syscall => OperandLayout::NoOperands,
            Self::Addi
            | Self::Addiu
            | Self::Andi
            | Self::Ori
            | Self::Slti
            | Self::Sltiu
            | Self::Xori => OperandLayout::RtRsImm,
            Self::Lui => OperandLayout::RtImm,
            Self::Lb
            | Self::Lbu
            | Self::Lh
            | Self::Lhu
            | Self::Lw
            | Self::Lwc1
            | Self::Sb
            | Self::Sh
            | Self::Sw
            | Self::Swc1 => OperandLayout::RtImmRs,
            Self::Beq | Self::Bne => OperandLayout::RsRtLabel,
            Self::Bgez | Self::Bgtz | Self::Blez | Self::Bltz => OperandLayout::RsLabel,
            Self::J | Self::Jal => OperandLayout::Label,
        };
        Some(layout)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
