//! Text button rendering.

use std::sync::Arc;

use crate::bitmap::Bitmap;
use crate::geometry::{Point, Rect, Size};
use crate::style::{ButtonColorTheme, Color};
use crate::text::render_text;

/// A button's size and both of its pre-rendered faces.
///
/// Bitmaps are shared with the draw queue, so enqueuing a face every frame
/// never copies pixels.
#[derive(Debug, Clone)]
pub struct CachedButton {
    /// Size the button was rendered at.
    pub size: Size,
    /// Face shown while the pointer is elsewhere.
    pub normal: Arc<Bitmap>,
    /// Face shown while the pointer is over the button.
    pub hovered: Arc<Bitmap>,
}

impl CachedButton {
    /// Renders both faces of a button labelled `text`.
    #[must_use]
    pub fn render(text: &str, theme: &ButtonColorTheme, size: Size) -> Self {
        let (normal, hovered) = render_button(text, theme, size);
        Self {
            size,
            normal: Arc::new(normal),
            hovered: Arc::new(hovered),
        }
    }

    /// The face to draw for the given hover state.
    #[must_use]
    pub fn face(&self, hovered: bool) -> &Arc<Bitmap> {
        if hovered {
            &self.hovered
        } else {
            &self.normal
        }
    }
}

/// Renders the normal and hovered faces of a button.
///
/// Each face is `size` filled with its background, with the label centered.
/// A label larger than the button is cropped around its center.
#[must_use]
pub fn render_button(text: &str, theme: &ButtonColorTheme, size: Size) -> (Bitmap, Bitmap) {
    let face = |background: Color| {
        let label = render_text(text, theme.text, background, theme.font);
        let mut bitmap = Bitmap::filled(size, background);
        let x = size.width as i32 / 2 - label.width() as i32 / 2;
        let y = size.height as i32 / 2 - label.height() as i32 / 2;
        bitmap.copy_from(&label, Rect::from_pos_size(Point::new(x, y), label.size()), Point::ZERO);
        bitmap
    };
    (face(theme.background), face(theme.hovered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FontFace;

    #[test]
    fn test_faces_differ_only_by_background() {
        let theme = ButtonColorTheme::default();
        let (normal, hovered) = render_button("Open", &theme, Size::new(250, 56));

        assert_eq!(normal.size(), Size::new(250, 56));
        assert_eq!(hovered.size(), Size::new(250, 56));
        assert_eq!(normal.get(0, 0), Some(theme.background));
        assert_eq!(hovered.get(0, 0), Some(theme.hovered));
        assert!(normal.pixels().iter().any(|&p| p == theme.text));
    }

    #[test]
    fn test_label_is_centered() {
        let theme = ButtonColorTheme::default().with_font(FontFace::Mono6x10);
        let (normal, _) = render_button("W", &theme, Size::new(40, 30));

        // The label cell spans x 17..23 and y 10..20; nothing is drawn outside it.
        for y in 0..30 {
            for x in 0..40 {
                let inside = (17..23).contains(&x) && (10..20).contains(&y);
                if !inside {
                    assert_eq!(normal.get(x, y), Some(theme.background), "pixel ({x},{y})");
                }
            }
        }
        assert!(normal.pixels().iter().any(|&p| p == theme.text));
    }

    #[test]
    fn test_oversized_label_is_cropped() {
        let theme = ButtonColorTheme::default();
        let text = "a label far wider than the button itself";
        let (normal, _) = render_button(text, &theme, Size::new(30, 10));

        assert_eq!(normal.size(), Size::new(30, 10));
    }

    #[test]
    fn test_cached_button_face() {
        let button = CachedButton::render("x", &ButtonColorTheme::default(), Size::new(10, 10));
        assert!(Arc::ptr_eq(button.face(true), &button.hovered));
        assert!(Arc::ptr_eq(button.face(false), &button.normal));
    }
}
