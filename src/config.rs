//! Runtime configuration.
//!
//! Loaded from TOML; every field has a default so an empty document is valid.
//!
//! ```toml
//! text_input = true
//! axis_deadzone = 0.1
//! start_captured = false
//! ```

use crate::error::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Emit text events for qualifying key presses.
    pub text_input: bool,
    /// Normalized gamepad axis values with a smaller magnitude are reported as `0.0`.
    pub axis_deadzone: f32,
    /// Start with the pointer in capture (relative) mode.
    pub start_captured: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            text_input: true,
            axis_deadzone: 0.0,
            start_captured: false,
        }
    }
}

impl InputConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: InputConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.axis_deadzone) {
            return Err(InputError::Config(format!(
                "axis_deadzone must be in [0, 1), got {}",
                self.axis_deadzone
            )));
        }
        Ok(())
    }
}
