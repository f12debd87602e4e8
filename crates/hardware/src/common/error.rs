//! Trap and Error definitions.
//!
//! This module defines the error handling for the machine. It provides:
//! 1. **Trap Representation:** Fatal execution-time faults raised by the core.
//! 2. **Load Errors:** Failures turning a program listing into memory contents.
//! 3. **Top-level Errors:** A single error type for callers that drive a whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Execution-time faults.
///
/// Every trap is terminal for the current run: the execution loop stops at the
/// faulting instruction and leaves registers, memory, and PC untouched so the
/// caller can inspect them.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Trap {
    /// A memory access fell outside the 256-byte address space.
    #[error("AddressOutOfRange({address:#x}, {access})")]
    AddressOutOfRange {
        /// The faulting address.
        address: usize,
        /// What the access was for.
        access: AccessType,
    },

    /// An operand named a register outside `R0`-`R7`.
    #[error("RegisterOutOfRange({index:#04x})")]
    RegisterOutOfRange {
        /// The offending register index.
        index: u8,
    },

    /// The ALU was handed an opcode it does not implement.
    #[error("UnsupportedOperation({opcode:#04x})")]
    UnsupportedOperation {
        /// The opcode handed to the ALU.
        opcode: u8,
    },

    /// The fetched byte does not name any instruction.
    #[error("UnknownOpcode({opcode:#04x} at pc {pc:#04x})")]
    UnknownOpcode {
        /// The byte that was fetched.
        opcode: u8,
        /// Address it was fetched from.
        pc: usize,
    },

    /// A push would move SP below address 0.
    #[error("StackOverflow(sp={sp:#04x})")]
    StackOverflow {
        /// Stack pointer at the time of the push.
        sp: u8,
    },

    /// A pop was attempted with nothing on the stack.
    #[error("StackUnderflow(sp={sp:#04x})")]
    StackUnderflow {
        /// Stack pointer at the time of the pop.
        sp: u8,
    },
}

/// Failures while turning a program listing into memory contents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A non-blank, non-comment line is not an 8-bit binary literal.
    #[error("line {line}: invalid binary literal {text:?}")]
    Parse {
        /// 1-based line number in the listing.
        line: usize,
        /// The line content after comment stripping.
        text: String,
    },

    /// The program does not fit in memory.
    #[error("program is {len} bytes but memory holds {capacity}")]
    Overflow {
        /// Number of program bytes.
        len: usize,
        /// Available memory cells.
        capacity: usize,
    },

    /// The listing could not be read.
    #[error("could not read {path:?}: {source}")]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Top-level error for driving a complete run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Program loading failed; nothing was executed.
    #[error("load failed: {0}")]
    Load(#[from] LoadError),

    /// Execution stopped on a trap.
    #[error("trap: {0}")]
    Trap(#[from] Trap),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("could not read configuration {path:?}: {source}")]
    ConfigIo {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing program output failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl SimError {
    /// Returns the trap that stopped execution, if this error is one.
    pub const fn as_trap(&self) -> Option<&Trap> {
        match self {
            Self::Trap(trap) => Some(trap),
            _ => None,
        }
    }
}
