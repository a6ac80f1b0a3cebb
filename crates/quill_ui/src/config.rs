//! UI configuration.
//!
//! ```toml
//! max_slots = 32
//! button_height = 56
//! y_margin = 4
//! font = "10x20"
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::text::FontFace;

/// Widget slots per layout.
pub const DEFAULT_MAX_SLOTS: usize = 32;
/// Button height in pixels.
pub const DEFAULT_BUTTON_HEIGHT: u32 = 56;
/// Vertical gap between stacked widgets.
pub const DEFAULT_Y_MARGIN: u32 = 4;

/// Upper bound for `max_slots`.
pub const MAX_SLOTS: usize = 4096;
/// Upper bound for `button_height` and `y_margin`, in pixels.
pub const MAX_EXTENT: u32 = 16_384;

fn default_max_slots() -> usize {
    DEFAULT_MAX_SLOTS
}

fn default_button_height() -> u32 {
    DEFAULT_BUTTON_HEIGHT
}

fn default_y_margin() -> u32 {
    DEFAULT_Y_MARGIN
}

fn default_font() -> String {
    FontFace::default().name().into()
}

fn check_max(key: &'static str, value: u64, max: u64) -> ConfigResult<()> {
    if value > max {
        return Err(ConfigError::TooLarge { key, value, max });
    }
    Ok(())
}

/// Sizing and default font for a UI context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Widget slots allocated for every layout.
    #[serde(default = "default_max_slots")]
    pub max_slots: usize,
    /// Height of every text button.
    #[serde(default = "default_button_height")]
    pub button_height: u32,
    /// Gap left below each widget in a vertical layout.
    #[serde(default = "default_y_margin")]
    pub y_margin: u32,
    /// Default theme font, by name (`"6x10"`, `"8x13"`, `"9x15"`, `"10x20"`).
    #[serde(default = "default_font")]
    pub font: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_slots: default_max_slots(),
            button_height: default_button_height(),
            y_margin: default_y_margin(),
            font: default_font(),
        }
    }
}

impl UiConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or a value is invalid.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges and the font name.
    ///
    /// Counts and sizes are capped at [`MAX_SLOTS`] and [`MAX_EXTENT`] so a
    /// bad document cannot ask for more memory than the process has.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_slots == 0 {
            return Err(ConfigError::ZeroSlots);
        }
        if self.button_height == 0 {
            return Err(ConfigError::ZeroButtonHeight);
        }
        check_max("max_slots", self.max_slots as u64, MAX_SLOTS as u64)?;
        check_max("button_height", self.button_height.into(), MAX_EXTENT.into())?;
        check_max("y_margin", self.y_margin.into(), MAX_EXTENT.into())?;
        self.font_face().map(|_| ())
    }

    /// Resolves the configured font name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFont`] if no built-in face has that name.
    pub fn font_face(&self) -> ConfigResult<FontFace> {
        FontFace::from_name(&self.font).ok_or_else(|| ConfigError::UnknownFont(self.font.clone()))
    }
}
