//! Layout regions and the placement cursor.
//!
//! A layout is a rectangle on screen plus a cursor. Every widget declared
//! into it is placed at the cursor, then the cursor moves past it. Once
//! per frame the cursor returns to the rectangle's origin.

use crate::geometry::{Point, Rect, Size};
use crate::widget::SlotArena;

/// Placement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right. Declared but not implemented: placing a widget in a
    /// horizontal layout panics.
    Horizontal,
}

/// A registered layout region and the widget slots it owns.
pub struct LayoutRegion {
    orientation: Orientation,
    place: Rect,
    cursor: Point,
    slots: SlotArena,
}

impl LayoutRegion {
    /// Creates a region with `capacity` empty widget slots.
    #[must_use]
    pub fn new(orientation: Orientation, place: Rect, capacity: usize) -> Self {
        Self {
            orientation,
            place,
            cursor: place.origin(),
            slots: SlotArena::new(capacity),
        }
    }

    /// Placement direction.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The region's rectangle on screen.
    #[must_use]
    pub fn place(&self) -> Rect {
        self.place
    }

    /// Where the next widget will go.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// The region's widget slots.
    #[must_use]
    pub fn slots(&self) -> &SlotArena {
        &self.slots
    }

    /// Mutable access to the widget slots.
    pub fn slots_mut(&mut self) -> &mut SlotArena {
        &mut self.slots
    }

    /// Places a widget of `size` at the cursor and advances past it plus
    /// `margin`. The cursor saturates at `i32::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if the region is [`Orientation::Horizontal`].
    pub fn place_next(&mut self, size: Size, margin: u32) -> Rect {
        match self.orientation {
            Orientation::Vertical => {
                let target = Rect::from_pos_size(self.cursor, size);
                let step = i32::try_from(size.height.saturating_add(margin)).unwrap_or(i32::MAX);
                self.cursor.y = self.cursor.y.saturating_add(step);
                target
            }
            Orientation::Horizontal => panic!("horizontal layout is not implemented"),
        }
    }

    /// Moves the cursor back to the region's origin.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.place.origin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_placement() {
        let mut layout = LayoutRegion::new(Orientation::Vertical, Rect::new(20, 10, 250, 400), 4);

        let a = layout.place_next(Size::new(250, 56), 4);
        let b = layout.place_next(Size::new(250, 56), 4);

        assert_eq!(a, Rect::new(20, 10, 250, 56));
        assert_eq!(b, Rect::new(20, 70, 250, 56));
        assert_eq!(layout.cursor(), Point::new(20, 130));

        layout.reset_cursor();
        assert_eq!(layout.cursor(), Point::new(20, 10));
    }

    #[test]
    fn test_cursor_saturates_instead_of_wrapping() {
        let mut layout = LayoutRegion::new(Orientation::Vertical, Rect::new(0, 10, 10, 10), 1);

        let _ = layout.place_next(Size::new(10, u32::MAX), u32::MAX);
        assert_eq!(layout.cursor(), Point::new(0, i32::MAX));

        let _ = layout.place_next(Size::new(10, 10), 0);
        assert_eq!(layout.cursor(), Point::new(0, i32::MAX));
    }

    #[test]
    #[should_panic(expected = "horizontal layout is not implemented")]
    fn test_horizontal_placement_panics() {
        let mut layout = LayoutRegion::new(Orientation::Horizontal, Rect::new(0, 0, 100, 100), 1);
        let _ = layout.place_next(Size::new(10, 10), 0);
    }
}
