//! Crate error type.
//!
//! Only [`InputError::Init`] is fatal. Everything raised while handling a single raw event is
//! logged and contained to that event.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The platform input subsystem could not be started.
    #[error("input subsystem failed to initialize: {0}")]
    Init(String),

    /// A connected gamepad could not be opened. Availability tracking still proceeds.
    #[error("couldn't open gamepad {which}: {reason}")]
    GamepadOpen { which: i32, reason: String },

    /// A removal arrived while no gamepad was tracked as connected.
    #[error("gamepad removed when none were known to be connected")]
    GamepadUnderflow,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InputError>;
