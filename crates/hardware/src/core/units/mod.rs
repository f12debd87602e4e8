//! Execution units and functional components.
//!
//! Holds the functional units the instruction handlers delegate to. The LS-8
//! has one: the integer ALU.

/// Arithmetic Logic Unit for register-to-register operations.
pub mod alu;
