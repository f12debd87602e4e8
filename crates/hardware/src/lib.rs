//! LS-8 virtual CPU library.
//!
//! This crate implements a small 8-bit virtual CPU with the following:
//! 1. **Core:** 256 bytes of memory, eight registers, PC, SP, and FL, driven by a
//!    fetch, decode, dispatch loop over a flat opcode-indexed handler table.
//! 2. **ISA:** Opcode definitions, bit-field extraction, and a disassembler.
//! 3. **Loader:** Parses a text listing of binary literals into memory.
//! 4. **Support:** Configuration, traps and errors, and execution statistics.
//!
//! ```
//! use ls8_core::{Cpu, sim::loader};
//!
//! let listing = "\
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//! let mut cpu = Cpu::default();
//! assert_eq!(loader::load(&mut cpu, listing.lines()).unwrap(), 6);
//! assert_eq!(cpu.run_collect().unwrap(), vec![8]);
//! ```

/// Common types and constants (registers, traps, access types).
pub mod common;
/// Run configuration.
pub mod config;
/// CPU core (state, memory, dispatch, execution, ALU).
pub mod core;
/// Instruction set (opcodes, field extraction, disassembler).
pub mod isa;
/// Program loader.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and the dispatch table.
pub use crate::core::Cpu;
/// Error types surfaced by loading and running.
pub use crate::common::{LoadError, SimError, Trap};
