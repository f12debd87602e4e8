//! Configuration system for the LS-8 machine.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine constants (stack reset value, tracing off).
//! 2. **Structures:** `general` (observability) and `system` (machine layout) sections.
//!
//! Configuration is supplied as JSON (see the `--config` flag of the CLI) or built
//! with `Config::default()`. Every field is optional in JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the machine.
mod defaults {
    /// Stack pointer value at reset.
    pub const STACK_TOP: u8 = crate::common::constants::STACK_TOP;
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "system": { "stack_top": 240 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.system.stack_top, 0xF0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine layout.
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigIo`] if the file cannot be read and
    /// [`SimError::Config`] if it is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log a trace line (PC, instruction bytes, registers) before every step.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Machine layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemConfig {
    /// Stack pointer at reset; the stack occupies the cells below it.
    #[serde(default = "SystemConfig::default_stack_top")]
    pub stack_top: u8,
}

impl SystemConfig {
    /// Returns the default stack reset value.
    const fn default_stack_top() -> u8 {
        defaults::STACK_TOP
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            stack_top: defaults::STACK_TOP,
        }
    }
}
