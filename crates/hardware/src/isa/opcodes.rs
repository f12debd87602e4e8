//! LS-8 Opcodes.
//!
//! Each opcode is a single byte laid out as `NNAI_IIII`: `NN` is the operand
//! count, `A` marks ALU operations, and `IIIII` identifies the operation.

/// Halt the CPU and stop the run.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate value into a register (`LDI reg, value`).
pub const LDI: u8 = 0b1000_0010;

/// Print a register as a decimal integer (`PRN reg`).
pub const PRN: u8 = 0b0100_0111;

/// Push a register onto the stack (`PUSH reg`).
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register (`POP reg`).
pub const POP: u8 = 0b0100_0110;

/// Add two registers, storing the result in the first (`ADD reg_a, reg_b`).
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers, storing the result in the first (`MUL reg_a, reg_b`).
pub const MUL: u8 = 0b1010_0010;

/// Returns the assembler mnemonic for a known opcode.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    match opcode {
        HLT => Some("HLT"),
        LDI => Some("LDI"),
        PRN => Some("PRN"),
        PUSH => Some("PUSH"),
        POP => Some("POP"),
        ADD => Some("ADD"),
        MUL => Some("MUL"),
        _ => None,
    }
}
