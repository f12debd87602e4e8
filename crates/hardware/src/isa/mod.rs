//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, opcode bit-field extraction, and the disassembler
//! for the LS-8 instruction set.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode bit-field extraction and the fetched-instruction record.
pub mod instruction;

/// Opcode values and mnemonics.
pub mod opcodes;
