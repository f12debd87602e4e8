//! Core processor implementation.
//!
//! This module contains the CPU (state, memory, dispatch table, execution loop)
//! and the execution units its handlers delegate to.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
