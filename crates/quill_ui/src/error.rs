//! # UI Error Types
//!
//! Errors from loading UI configuration. Misusing the UI API (bad layout
//! ids, out-of-range slots) is a programming error and panics instead.

use thiserror::Error;

/// Errors that can occur while building a UI context from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid ui config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The font name does not match a built-in face.
    #[error("unknown font face: {0}")]
    UnknownFont(String),

    /// Layouts would have no widget slots.
    #[error("max_slots must be at least 1")]
    ZeroSlots,

    /// Buttons would have no height.
    #[error("button_height must be at least 1")]
    ZeroButtonHeight,

    /// A size is larger than any layout can hold.
    #[error("{key} = {value} exceeds the maximum of {max}")]
    TooLarge {
        /// Offending key.
        key: &'static str,
        /// Configured value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },
}

/// Result type for UI configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
