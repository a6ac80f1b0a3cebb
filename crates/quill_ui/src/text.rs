//! # Text Rasterization
//!
//! Renders text into [`Bitmap`]s with the fixed-cell monospace fonts that
//! ship inside `embedded-graphics`. No font files, no shaping: every
//! character occupies one cell, so measuring is arithmetic.
//!
//! ```text
//!  "Open"  ->  ┌──┬──┬──┬──┐  width  = n·cell + (n-1)·spacing
//!              │O │p │e │n │  height = cell
//!              └──┴──┴──┴──┘
//! ```

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point as EgPoint, Size as EgSize};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_8X13, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::{Drawable, Pixel};

use crate::bitmap::Bitmap;
use crate::geometry::Size;
use crate::style::Color;

/// One of the built-in monospace font faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// 6x10 pixel cells.
    Mono6x10,
    /// 8x13 pixel cells.
    Mono8x13,
    /// 9x15 pixel cells.
    Mono9x15,
    /// 10x20 pixel cells.
    #[default]
    Mono10x20,
}

impl FontFace {
    /// Every available face.
    pub const ALL: [Self; 4] = [Self::Mono6x10, Self::Mono8x13, Self::Mono9x15, Self::Mono10x20];

    /// Looks a face up by its name (`"6x10"`, `"8x13"`, `"9x15"`, `"10x20"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.name() == name)
    }

    /// Returns the face name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono6x10 => "6x10",
            Self::Mono8x13 => "8x13",
            Self::Mono9x15 => "9x15",
            Self::Mono10x20 => "10x20",
        }
    }

    fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Mono6x10 => &FONT_6X10,
            Self::Mono8x13 => &FONT_8X13,
            Self::Mono9x15 => &FONT_9X15,
            Self::Mono10x20 => &FONT_10X20,
        }
    }

    /// Size of one character cell.
    #[must_use]
    pub fn cell_size(self) -> Size {
        let size = self.mono_font().character_size;
        Size::new(size.width, size.height)
    }

    /// Horizontal gap between cells.
    #[must_use]
    pub fn spacing(self) -> u32 {
        self.mono_font().character_spacing
    }

    /// Height of one line of text.
    #[must_use]
    pub fn line_height(self) -> u32 {
        self.cell_size().height
    }

    /// Width of a run of `chars` characters.
    #[must_use]
    pub fn run_width(self, chars: usize) -> u32 {
        if chars == 0 {
            return 0;
        }
        let n = chars as u32;
        n * self.cell_size().width + (n - 1) * self.spacing()
    }

    /// Bounding box of `text` on a single line.
    #[must_use]
    pub fn measure(self, text: &str) -> Size {
        let chars = text.chars().count();
        if chars == 0 {
            Size::ZERO
        } else {
            Size::new(self.run_width(chars), self.line_height())
        }
    }
}

/// Lets embedded-graphics draw straight into a [`Bitmap`].
struct GlyphTarget<'a>(&'a mut Bitmap);

impl OriginDimensions for GlyphTarget<'_> {
    fn size(&self) -> EgSize {
        EgSize::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for GlyphTarget<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(EgPoint { x, y }, color) in pixels {
            self.0.set(x, y, Color::rgb(color.r(), color.g(), color.b()));
        }
        Ok(())
    }
}

fn to_rgb888(color: Color) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

fn draw_line(target: &mut Bitmap, line: &str, top: i32, text_color: Color, face: FontFace) {
    let style = MonoTextStyleBuilder::new()
        .font(face.mono_font())
        .text_color(to_rgb888(text_color))
        .build();
    let text = Text::with_baseline(line, EgPoint::new(0, top), style, Baseline::Top);
    if let Err(never) = text.draw(&mut GlyphTarget(target)) {
        match never {}
    }
}

/// Renders `text` on one line over a solid background.
///
/// The bitmap is exactly [`FontFace::measure`] in size. An empty string
/// gives an empty bitmap. Control characters, `'\n'` included, render as
/// blank cells; use [`render_text_multi`] for line breaks.
#[must_use]
pub fn render_text(text: &str, text_color: Color, background: Color, face: FontFace) -> Bitmap {
    let size = face.measure(text);
    if size.is_empty() {
        return Bitmap::empty();
    }
    let line: String = text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    let mut bitmap = Bitmap::filled(size, background);
    draw_line(&mut bitmap, &line, 0, text_color, face);
    bitmap
}

/// Splits `text` greedily so that no line is wider than `max_width`.
///
/// Characters are added to the current line while the line still fits;
/// the first character that would overflow starts a new line. A single
/// character wider than `max_width` still gets a line of its own.
/// `'\n'` forces a break.
#[must_use]
pub fn wrap_lines(text: &str, face: FontFace, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut count = 0usize;
    for c in text.chars() {
        if c == '\n' {
            lines.push(std::mem::take(&mut current));
            count = 0;
            continue;
        }
        if count > 0 && face.run_width(count + 1) > max_width {
            lines.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(c);
        count += 1;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders `text` wrapped to `max_width`, lines stacked top-aligned.
///
/// The bitmap is as wide as the widest line (never wider than
/// `max_width`) and `lines × line_height` tall.
#[must_use]
pub fn render_text_multi(
    text: &str,
    text_color: Color,
    background: Color,
    face: FontFace,
    max_width: u32,
) -> Bitmap {
    let lines = wrap_lines(text, face, max_width);
    let widest = lines.iter().map(|line| face.measure(line).width).max().unwrap_or(0);
    let line_height = face.line_height();
    let size = Size::new(widest.min(max_width), line_height * lines.len() as u32);
    if size.is_empty() {
        return Bitmap::empty();
    }

    let mut bitmap = Bitmap::filled(size, background);
    for (i, line) in lines.iter().enumerate() {
        draw_line(&mut bitmap, line, (i as u32 * line_height) as i32, text_color, face);
    }
    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(10, 20, 30);
    const FG: Color = Color::rgb(250, 250, 250);

    #[test]
    fn test_face_lookup() {
        assert_eq!(FontFace::from_name("8x13"), Some(FontFace::Mono8x13));
        assert_eq!(FontFace::from_name("gomono"), None);
        assert_eq!(FontFace::default().cell_size(), Size::new(10, 20));
    }

    #[test]
    fn test_render_text_is_tightly_sized() {
        let face = FontFace::Mono10x20;
        let bmp = render_text("Open", FG, BG, face);

        assert_eq!(bmp.size(), Size::new(face.run_width(4), 20));
        // Some glyph pixels were drawn over the background.
        assert!(bmp.pixels().iter().any(|&p| p == FG));
        assert!(bmp.pixels().iter().any(|&p| p == BG));
    }

    #[test]
    fn test_render_text_keeps_characters_after_control_chars() {
        let face = FontFace::Mono10x20;
        let bmp = render_text("ab\ncd", FG, BG, face);

        assert_eq!(bmp, render_text("ab cd", FG, BG, face));
        assert_eq!(render_text("a\tb", FG, BG, face), render_text("a b", FG, BG, face));
    }

    #[test]
    fn test_render_empty_text() {
        assert!(render_text("", FG, BG, FontFace::Mono6x10).is_empty());
        assert!(render_text_multi("", FG, BG, FontFace::Mono6x10, 100).is_empty());
    }

    #[test]
    fn test_wrap_respects_max_width() {
        let face = FontFace::Mono10x20;
        let text = "a very long sentence that needs wrapping";
        let lines = wrap_lines(text, face, 100);

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| face.measure(l).width <= 100));
        assert_eq!(lines.concat(), text);

        // Every break happened because the next character would overflow.
        for pair in lines.windows(2) {
            let extended = pair[0].chars().count() + 1;
            assert!(face.run_width(extended) > 100);
        }

        let bmp = render_text_multi(text, FG, BG, face, 100);
        assert!(bmp.width() <= 100);
        assert_eq!(bmp.height(), lines.len() as u32 * face.line_height());
    }

    #[test]
    fn test_wrap_oversized_glyph_and_newlines() {
        let face = FontFace::Mono10x20;

        assert_eq!(wrap_lines("ab", face, 5), vec!["a", "b"]);
        assert_eq!(render_text_multi("ab", FG, BG, face, 5).width(), 5);

        assert_eq!(wrap_lines("ab\ncd", face, 500), vec!["ab", "cd"]);
        assert!(wrap_lines("abc", face, 0).is_empty());
    }
}
