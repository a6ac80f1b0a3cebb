//! Draw queue and CPU compositing.
//!
//! Widgets enqueue `(rect, bitmap)` pairs while the frame is declared. The
//! window drains the queue once per frame and composites it in submission
//! order, so later operations cover earlier ones where they overlap.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::bitmap::Bitmap;
use crate::geometry::{Point, Rect};

/// A bitmap to copy to a screen rectangle.
#[derive(Debug, Clone)]
pub struct DrawOp {
    /// Destination on screen.
    pub target: Rect,
    /// Pixels to copy. Only the top-left `target.size()` is used.
    pub bitmap: Arc<Bitmap>,
}

impl DrawOp {
    /// Creates a draw operation.
    #[must_use]
    pub fn new(target: Rect, bitmap: Arc<Bitmap>) -> Self {
        Self { target, bitmap }
    }
}

/// Shared, lock-protected list of pending draw operations.
///
/// Cloning shares the queue.
#[derive(Debug, Clone, Default)]
pub struct DrawQueue {
    ops: Arc<Mutex<Vec<DrawOp>>>,
}

impl DrawQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation.
    pub fn push(&self, op: DrawOp) {
        self.ops.lock().push(op);
    }

    /// Number of pending operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.lock().len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.lock().is_empty()
    }

    /// Removes and returns every pending operation, oldest first.
    #[must_use]
    pub fn take(&self) -> Vec<DrawOp> {
        std::mem::take(&mut *self.ops.lock())
    }
}

/// Copies `ops` onto `canvas` in order and returns the touched regions.
///
/// Each operation is clipped to the canvas. Operations that land entirely
/// off-canvas, or whose bitmap is empty, are skipped and report no region.
pub fn composite(canvas: &mut Bitmap, ops: &[DrawOp]) -> Vec<Rect> {
    let bounds = canvas.bounds();
    let mut touched = Vec::with_capacity(ops.len());
    for op in ops {
        if op.bitmap.is_empty() {
            continue;
        }
        let drawn = Rect::from_pos_size(op.target.origin(), op.bitmap.size());
        let Some(region) = op
            .target
            .intersection(&drawn)
            .and_then(|r| r.intersection(&bounds))
        else {
            continue;
        };
        canvas.copy_from(&op.bitmap, op.target, Point::ZERO);
        touched.push(region);
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::style::Color;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);

    fn solid(w: u32, h: u32, color: Color) -> Arc<Bitmap> {
        Arc::new(Bitmap::filled(Size::new(w, h), color))
    }

    #[test]
    fn test_queue_take_is_fifo() {
        let queue = DrawQueue::new();
        queue.push(DrawOp::new(Rect::new(0, 0, 1, 1), solid(1, 1, RED)));
        queue.push(DrawOp::new(Rect::new(1, 1, 1, 1), solid(1, 1, GREEN)));
        assert_eq!(queue.len(), 2);

        let ops = queue.take();
        assert!(queue.is_empty());
        assert_eq!(ops[0].target, Rect::new(0, 0, 1, 1));
        assert_eq!(ops[1].target, Rect::new(1, 1, 1, 1));
    }

    #[test]
    fn test_later_ops_cover_earlier_ones() {
        let mut canvas = Bitmap::new(Size::new(4, 4));
        let ops = [
            DrawOp::new(Rect::new(0, 0, 4, 4), solid(4, 4, RED)),
            DrawOp::new(Rect::new(1, 1, 2, 2), solid(2, 2, GREEN)),
        ];

        let touched = composite(&mut canvas, &ops);

        assert_eq!(touched, vec![Rect::new(0, 0, 4, 4), Rect::new(1, 1, 2, 2)]);
        assert_eq!(canvas.get(0, 0), Some(RED));
        assert_eq!(canvas.get(1, 1), Some(GREEN));
    }

    #[test]
    fn test_composite_clips_and_skips() {
        let mut canvas = Bitmap::new(Size::new(4, 4));
        let ops = [
            DrawOp::new(Rect::new(2, 2, 5, 5), solid(5, 5, RED)),
            DrawOp::new(Rect::new(10, 10, 2, 2), solid(2, 2, RED)),
            DrawOp::new(Rect::new(0, 0, 2, 2), Arc::new(Bitmap::empty())),
        ];

        let touched = composite(&mut canvas, &ops);

        assert_eq!(touched, vec![Rect::new(2, 2, 2, 2)]);
        assert_eq!(canvas.get(3, 3), Some(RED));
        assert_eq!(canvas.get(0, 0), Some(Color::TRANSPARENT));
    }
}
