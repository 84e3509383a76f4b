//! User-supplied gamepad layouts.
//!
//! A [`GamepadMapping`] overrides the default platform-id tables of
//! [`GamepadAxisId::from_platform`] and [`GamepadButtonId::from_platform`] for controllers
//! whose raw numbering differs. Ids with no override fall back to the default table.
//!
//! Mappings are TOML documents; adding several accumulates them, and a later entry for the
//! same platform id wins.
//!
//! ```toml
//! [[axes]]
//! platform = 3
//! axis = "RightX"
//!
//! [[buttons]]
//! platform = 1
//! button = "A"
//! ```

use crate::error::Result;
use crate::gamepad::{GamepadAxisId, GamepadButtonId};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisBinding {
    pub platform: u8,
    pub axis: GamepadAxisId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonBinding {
    pub platform: u8,
    pub button: GamepadButtonId,
}

/// Platform id overrides for gamepad axes and buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GamepadMapping {
    pub axes: Vec<AxisBinding>,
    pub buttons: Vec<ButtonBinding>,
}

impl GamepadMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Append another mapping's entries. Returns how many were added.
    pub fn extend(&mut self, other: GamepadMapping) -> usize {
        let added = other.len();
        self.axes.extend(other.axes);
        self.buttons.extend(other.buttons);
        added
    }

    /// Total number of axis and button entries.
    pub fn len(&self) -> usize {
        self.axes.len() + self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a platform axis id, latest override first.
    pub fn axis(&self, platform: u8) -> Option<GamepadAxisId> {
        self.axes
            .iter()
            .rev()
            .find(|b| b.platform == platform)
            .map(|b| b.axis)
            .or_else(|| GamepadAxisId::from_platform(platform))
    }

    /// Resolve a platform button id, latest override first.
    pub fn button(&self, platform: u8) -> Option<GamepadButtonId> {
        self.buttons
            .iter()
            .rev()
            .find(|b| b.platform == platform)
            .map(|b| b.button)
            .or_else(|| GamepadButtonId::from_platform(platform))
    }
}
