//! Instruction Disassembler for LS-8.
//!
//! Converts an opcode byte and its two trailing bytes into a human-readable
//! mnemonic string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::isa::opcodes;
//!
//! assert_eq!(disassemble(opcodes::LDI, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(opcodes::MUL, 0, 1), "MUL R0, R1");
//! assert_eq!(disassemble(0xFF, 0, 0), "UNKNOWN 0xff");
//! ```

use crate::isa::opcodes::{self, mnemonic};

/// Disassembles one instruction.
///
/// Returns a mnemonic like `"PRN R0"` or `"UNKNOWN 0x.."` for bytes with no
/// instruction behind them.
///
/// # Arguments
///
/// * `opcode` - The opcode byte.
/// * `a` - First trailing byte.
/// * `b` - Second trailing byte.
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(name) = mnemonic(opcode) else {
        return format!("UNKNOWN {opcode:#04x}");
    };
    match opcode {
        opcodes::HLT => name.to_string(),
        opcodes::LDI => format!("{name} R{a}, {b}"),
        opcodes::PRN | opcodes::PUSH | opcodes::POP => format!("{name} R{a}"),
        _ => format!("{name} R{a}, R{b}"),
    }
}
