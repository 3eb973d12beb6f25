//! Datapath control.
//!
//! Derives the control vector a single-cycle MIPS datapath needs for one
//! decoded instruction. Nothing here executes the instruction.

/// Control signal vector and tri-state signal values.
pub mod signals;

pub use signals::{ControlSignals, InstructionClass, Signal};
