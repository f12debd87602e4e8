//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit integer ALU. Operations are selected by
//! opcode value alone: the ALU dispatch is one match over opcodes, with no
//! secondary key.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

use crate::common::Trap;

/// Arithmetic Logic Unit (ALU) for 8-bit register operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `opcode` - The opcode selecting the operation.
    /// * `a`      - Value of the first register (also the destination).
    /// * `b`      - Value of the second register.
    ///
    /// # Returns
    ///
    /// The 8-bit result; arithmetic wraps modulo 256.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnsupportedOperation`] for opcodes with no ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::Alu;
    /// use ls8_core::isa::opcodes;
    ///
    /// assert_eq!(Alu::execute(opcodes::MUL, 8, 9), Ok(72));
    /// assert_eq!(Alu::execute(opcodes::ADD, 200, 100), Ok(44));
    /// assert!(Alu::execute(opcodes::PRN, 1, 1).is_err());
    /// ```
    pub const fn execute(opcode: u8, a: u8, b: u8) -> Result<u8, Trap> {
        match arithmetic::execute(opcode, a, b) {
            Some(result) => Ok(result),
            None => Err(Trap::UnsupportedOperation { opcode }),
        }
    }
}
