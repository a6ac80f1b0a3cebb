//! Window configuration.

use serde::{Deserialize, Serialize};

use crate::error::{WindowError, WindowResult};

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    720
}

fn default_title() -> String {
    "Quill".into()
}

fn default_forward_capacity() -> usize {
    64
}

/// Window size, title and input buffering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Window title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Events the forwarder may hand over ahead of the next drain.
    #[serde(default = "default_forward_capacity")]
    pub forward_capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            forward_capacity: default_forward_capacity(),
        }
    }
}

impl WindowConfig {
    /// Creates a configuration with the given size and title.
    #[must_use]
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parses and validates a TOML document. Missing keys take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the size is zero.
    pub fn from_toml_str(source: &str) -> WindowResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero-sized windows.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidSize`] if either dimension is zero.
    pub fn validate(&self) -> WindowResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WindowError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = WindowConfig::from_toml_str("title = \"demo\"").unwrap();
        assert_eq!(config.title, "demo");
        assert_eq!(config.width, 1080);
        assert_eq!(config.forward_capacity, 64);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = WindowConfig::from_toml_str("width = 0").unwrap_err();
        assert!(matches!(err, WindowError::InvalidSize { width: 0, height: 720 }));
    }

    #[test]
    fn test_malformed_document() {
        let err = WindowConfig::from_toml_str("width = [").unwrap_err();
        assert!(matches!(err, WindowError::Parse(_)));
    }
}
