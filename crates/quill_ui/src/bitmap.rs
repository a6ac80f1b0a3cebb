//! RGBA pixel buffers.

use crate::geometry::{Point, Rect, Size};
use crate::style::Color;

/// A row-major RGBA image whose origin is always `(0, 0)`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Creates a bitmap filled with `color`.
    #[must_use]
    pub fn filled(size: Size, color: Color) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![color; size.width as usize * size.height as usize],
        }
    }

    /// Creates a transparent bitmap.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self::filled(size, Color::TRANSPARENT)
    }

    /// Creates a zero-sized bitmap.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Size::ZERO)
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The bitmap's own rectangle, at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(Point::ZERO, self.size())
    }

    /// Returns true if the bitmap has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, or None outside the bitmap.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Sets the pixel at `(x, y)`. Writes outside the bitmap are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel data as raw RGBA bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Overwrites every pixel.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Copies `src` into `dst`, replacing the destination pixels.
    ///
    /// `src_origin` is the source pixel that lands on `dst`'s top-left
    /// corner. The copy is clipped to both bitmaps; the part of `dst`
    /// that falls outside either is left untouched.
    pub fn copy_from(&mut self, src: &Bitmap, dst: Rect, src_origin: Point) {
        let Some(clip) = dst.intersection(&self.bounds()) else {
            return;
        };

        // Same region, expressed in source coordinates.
        let shifted = Rect::new(
            src_origin.x + (clip.x - dst.x),
            src_origin.y + (clip.y - dst.y),
            clip.width,
            clip.height,
        );
        let Some(src_clip) = shifted.intersection(&src.bounds()) else {
            return;
        };

        let dst_x = clip.x + (src_clip.x - shifted.x);
        let dst_y = clip.y + (src_clip.y - shifted.y);
        let run = src_clip.width as usize;

        for row in 0..src_clip.height as i32 {
            let s = src.offset(src_clip.x, src_clip.y + row);
            let d = self.offset(dst_x, dst_y + row);
            self.pixels[d..d + run].copy_from_slice(&src.pixels[s..s + run]);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.bounds().contains(Point::new(x, y)).then(|| self.offset(x, y))
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
