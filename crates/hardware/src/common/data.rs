//! Memory Access Types.
//!
//! Classifies memory accesses so that an out-of-range trap can report whether it
//! happened while fetching an opcode, prefetching an operand, or moving data.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Opcode or operand fetch performed by the execution loop.
    Fetch,

    /// Data read (stack pop, trace).
    Read,

    /// Data write (stack push, program load).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}
