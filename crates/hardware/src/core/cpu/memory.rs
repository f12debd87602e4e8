//! Main Memory and Stack Access.
//!
//! This module provides the flat byte store and the CPU-side access paths into it.
//! It performs the following:
//! 1. **Bounds Checking:** Every address is validated; out-of-range access is a trap.
//! 2. **Shadow Registers:** `MAR`/`MDR` record the last address and byte moved.
//! 3. **Stack Discipline:** Push/pop with SP bounds enforced at both ends.

use super::Cpu;
use crate::common::constants::MEMORY_SIZE;
use crate::common::{AccessType, Trap};

/// Flat 256-byte main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
    mar: usize,
    mdr: u8,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
            mar: 0,
            mdr: 0,
        }
    }

    /// Reads one byte, updating `MAR`/`MDR`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfRange`] if `address` is past the end of memory.
    pub fn read(&mut self, address: usize, access: AccessType) -> Result<u8, Trap> {
        let val = self
            .peek(address)
            .ok_or(Trap::AddressOutOfRange { address, access })?;
        self.mar = address;
        self.mdr = val;
        Ok(val)
    }

    /// Writes one byte, updating `MAR`/`MDR`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfRange`] if `address` is past the end of memory.
    pub fn write(&mut self, address: usize, val: u8) -> Result<(), Trap> {
        let cell = self.cells.get_mut(address).ok_or(Trap::AddressOutOfRange {
            address,
            access: AccessType::Write,
        })?;
        *cell = val;
        self.mar = address;
        self.mdr = val;
        Ok(())
    }

    /// Reads one byte without touching the shadow registers.
    pub fn peek(&self, address: usize) -> Option<u8> {
        self.cells.get(address).copied()
    }

    /// Returns the whole memory image.
    pub const fn as_slice(&self) -> &[u8; MEMORY_SIZE] {
        &self.cells
    }

    /// Memory Address Register: last address accessed.
    pub const fn mar(&self) -> usize {
        self.mar
    }

    /// Memory Data Register: last byte read or written.
    pub const fn mdr(&self) -> u8 {
        self.mdr
    }
}

impl Cpu {
    /// Reads a byte of main memory.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfRange`] for addresses outside memory.
    pub fn ram_read(&mut self, address: usize) -> Result<u8, Trap> {
        self.ram.read(address, AccessType::Read)
    }

    /// Writes a byte of main memory.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfRange`] for addresses outside memory.
    pub fn ram_write(&mut self, address: usize, value: u8) -> Result<(), Trap> {
        self.ram.write(address, value)
    }

    /// Number of bytes currently on the stack.
    pub const fn stack_depth(&self) -> usize {
        self.stack_top.saturating_sub(self.sp) as usize
    }

    /// Decrements SP, then stores `value` at the new top of stack.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::StackOverflow`] if SP is already at address 0; SP is
    /// left unchanged.
    pub fn push_byte(&mut self, value: u8) -> Result<(), Trap> {
        let Some(sp) = self.sp.checked_sub(1) else {
            return Err(Trap::StackOverflow { sp: self.sp });
        };
        self.ram_write(sp as usize, value)?;
        self.sp = sp;
        let depth = self.stack_depth();
        self.stats.observe_stack_depth(depth);
        Ok(())
    }

    /// Loads the byte at the top of stack, then increments SP.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::StackUnderflow`] if the stack is empty; SP is left
    /// unchanged.
    pub fn pop_byte(&mut self) -> Result<u8, Trap> {
        if self.sp >= self.stack_top {
            return Err(Trap::StackUnderflow { sp: self.sp });
        }
        let val = self.ram_read(self.sp as usize)?;
        self.sp += 1;
        Ok(val)
    }
}
