//! Common utilities and types used throughout the LS-8 machine.
//!
//! This module provides the building blocks shared by the loader and the core:
//! 1. **Constants:** Memory size, register count, stack reset value, opcode bit fields.
//! 2. **Memory Access:** Classification of memory operations for fault reporting.
//! 3. **Error Handling:** Traps, load errors, and the top-level run error.
//! 4. **Register Management:** The bounds-checked general-purpose register file.

/// Machine-wide constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, STACK_TOP};
pub use data::AccessType;
pub use error::{LoadError, SimError, Trap};
pub use reg::RegisterFile;
