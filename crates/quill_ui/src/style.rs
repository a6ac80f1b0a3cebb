//! Colors and button themes.

use bytemuck::{Pod, Zeroable};

use crate::text::FontFace;

/// 8-bit RGBA color, laid out exactly as the pixel buffer uploads it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Floral white, default button text.
    pub const FLORAL_WHITE: Self = Self::rgb(255, 250, 240);
    /// Raisin black, default button background.
    pub const RAISIN_BLACK: Self = Self::rgb(36, 33, 36);
    /// Default hovered button background.
    pub const CHARCOAL: Self = Self::rgb(45, 45, 45);

    /// Creates a color from RGBA values.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Colors and font of a text button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonColorTheme {
    /// Text color.
    pub text: Color,
    /// Background while the pointer is elsewhere.
    pub background: Color,
    /// Background while the pointer is over the button.
    pub hovered: Color,
    /// Font used for the label.
    pub font: FontFace,
}

impl ButtonColorTheme {
    /// Light text on a near-black button.
    pub const DARK: Self = Self {
        text: Color::FLORAL_WHITE,
        background: Color::RAISIN_BLACK,
        hovered: Color::CHARCOAL,
        font: FontFace::Mono10x20,
    };

    /// Returns the theme with a different font.
    #[must_use]
    pub const fn with_font(mut self, font: FontFace) -> Self {
        self.font = font;
        self
    }
}

impl Default for ButtonColorTheme {
    fn default() -> Self {
        Self::DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_bytes_are_rgba() {
        let pixels = [Color::rgba(1, 2, 3, 4), Color::rgba(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
