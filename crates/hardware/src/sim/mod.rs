//! Simulation utilities and program loading.
//!
//! Provides the loader that turns a program listing into the initial memory
//! image before execution starts.

pub mod loader;
