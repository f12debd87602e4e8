//! Global Machine Constants.
//!
//! This module defines the fixed geometry of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the flat byte store.
//! 2. **Register Constants:** Width of the general-purpose register file.
//! 3. **Stack Constants:** Reset value of the stack pointer.
//! 4. **Instruction Constants:** Bit fields of the opcode byte.

/// Number of addressable memory cells (one byte each).
pub const MEMORY_SIZE: usize = 0x100;

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 0x08;

/// Stack pointer value at reset.
///
/// The stack grows downward from here; cells `0xF4..=0xFF` sit above the
/// stack and are never touched by push/pop.
pub const STACK_TOP: u8 = 0xF4;

/// Address at which the loader places the first program byte.
pub const PROGRAM_BASE: usize = 0x00;

/// Number of bytes prefetched after every opcode, whether used or not.
pub const OPERAND_PREFETCH: usize = 2;

/// Bit shift for extracting the operand count (bits 7-6).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit mask for the ALU flag (bit 5).
pub const ALU_FLAG_MASK: u8 = 0b0010_0000;

/// Bit mask for the operation identifier (bits 4-0).
pub const IDENTIFIER_MASK: u8 = 0b0001_1111;

/// Marker that starts a comment in a program listing.
pub const COMMENT_MARKER: char = '#';
