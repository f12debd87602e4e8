//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct, which holds the eight 8-bit
//! registers of the machine. It provides:
//! 1. **Storage:** Eight zero-initialized registers (`R0`-`R7`).
//! 2. **Bounds Checking:** Register indices come straight from program bytes, so
//!    every access is validated and reported as a trap instead of panicking.
//! 3. **Observability:** A compact dump used by trace lines and fatal-trap reports.

use std::fmt::Write as _;

use super::constants::REGISTER_COUNT;
use super::error::Trap;

/// General-purpose register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index taken from an operand byte.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::RegisterOutOfRange`] if `idx` is not in `0..8`.
    pub fn read(&self, idx: u8) -> Result<u8, Trap> {
        self.regs
            .get(idx as usize)
            .copied()
            .ok_or(Trap::RegisterOutOfRange { index: idx })
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index taken from an operand byte.
    /// * `val` - The value to store.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::RegisterOutOfRange`] if `idx` is not in `0..8`.
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), Trap> {
        let slot = self
            .regs
            .get_mut(idx as usize)
            .ok_or(Trap::RegisterOutOfRange { index: idx })?;
        *slot = val;
        Ok(())
    }

    /// Returns all register values in index order.
    pub const fn as_slice(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }

    /// Formats the registers as space-separated hex bytes, `R0` first.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(REGISTER_COUNT * 3);
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{val:02X}");
        }
        out
    }
}
