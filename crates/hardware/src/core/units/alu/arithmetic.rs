//! ALU arithmetic operations.
//!
//! All results wrap modulo 256, matching the 8-bit register width.

use crate::isa::opcodes;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `opcode` - `ADD` or `MUL`.
/// * `a`      - First operand.
/// * `b`      - Second operand.
///
/// # Returns
///
/// The wrapped 8-bit result, or `None` if `opcode` is not an arithmetic operation.
pub const fn execute(opcode: u8, a: u8, b: u8) -> Option<u8> {
    match opcode {
        opcodes::ADD => Some(a.wrapping_add(b)),
        opcodes::MUL => Some(a.wrapping_mul(b)),
        _ => None,
    }
}
