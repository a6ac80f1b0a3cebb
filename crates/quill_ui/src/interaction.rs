//! Hover and click detection.
//!
//! The pointer's button state is live. Once per frame, when the UI pass
//! ends, the primary button state is copied into `previous_down`. A click
//! is the up-to-down edge between that snapshot and the live state, taken
//! while the pointer is over the widget:
//!
//! ```text
//!  previous   current   over widget   clicked
//!  up         down      yes           yes (first widget only)
//!  down       down      yes           no
//!  up         up        yes           no
//! ```

use quill_input::PointerState;

use crate::geometry::{Point, Rect};

/// Per-context click edge tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    previous_down: bool,
    click_consumed: bool,
}

impl Interaction {
    /// Creates the tracker with the primary button up.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the pointer is inside `target`.
    #[must_use]
    pub fn hovered(pointer: &PointerState, target: Rect) -> bool {
        target.contains(Point::new(pointer.x, pointer.y))
    }

    /// Returns true if `target` receives this frame's click.
    ///
    /// At most one widget per frame gets the click; later widgets that
    /// overlap the first one see false.
    pub fn clicked(&mut self, pointer: &PointerState, target: Rect) -> bool {
        let edge = pointer.primary_down() && !self.previous_down;
        if edge && !self.click_consumed && Self::hovered(pointer, target) {
            self.click_consumed = true;
            return true;
        }
        false
    }

    /// Snapshots the primary button for the next frame's edge test.
    pub fn end_frame(&mut self, pointer: &PointerState) {
        self.previous_down = pointer.primary_down();
        self.click_consumed = false;
    }

    /// The primary button state captured by the last [`end_frame`](Self::end_frame).
    #[must_use]
    pub fn previous_down(&self) -> bool {
        self.previous_down
    }
}
