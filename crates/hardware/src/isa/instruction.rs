//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the LS-8 opcode byte and the `Instruction`
//! record the execution loop builds on every fetch.

use crate::common::constants::{ALU_FLAG_MASK, IDENTIFIER_MASK, OPERAND_COUNT_SHIFT};

/// Trait for extracting fields from an LS-8 opcode byte.
pub trait InstructionBits {
    /// Extracts the operand count (bits 7-6).
    ///
    /// The execution loop advances PC by `operand_count() + 1` after a handler runs.
    fn operand_count(&self) -> u8;

    /// Returns whether the ALU flag (bit 5) is set.
    ///
    /// Dispatch never looks at this bit; it is used to classify unsupported
    /// ALU opcodes and by the disassembler.
    fn is_alu(&self) -> bool;

    /// Extracts the operation identifier (bits 4-0).
    fn identifier(&self) -> u8;

    /// Number of bytes the instruction occupies, opcode included.
    fn length(&self) -> usize {
        self.operand_count() as usize + 1
    }
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        self >> OPERAND_COUNT_SHIFT
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_FLAG_MASK != 0
    }

    #[inline(always)]
    fn identifier(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// A fetched instruction: the opcode and the two bytes that follow it.
///
/// Both operand bytes are always prefetched; handlers ignore the ones they
/// do not need.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Address the opcode was fetched from.
    pub pc: usize,
    /// The opcode byte.
    pub opcode: u8,
    /// First trailing byte (register index or immediate).
    pub operand_a: u8,
    /// Second trailing byte (register index or immediate).
    pub operand_b: u8,
}

impl Instruction {
    /// Address of the instruction that follows this one.
    pub fn next_pc(&self) -> usize {
        self.pc + self.opcode.length()
    }
}
