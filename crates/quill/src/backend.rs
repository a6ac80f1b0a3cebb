//! The rendering backend seam.
//!
//! A backend owns the OS window, the graphics context and the screen
//! texture. The window facade drives it once per frame:
//!
//! ```text
//! alive():  should_close? ─ no ─► poll_events()  (callbacks → InputSink)
//!                         └ yes ► destroy_window()
//! draw():   upload_region() per touched rect ─► present_frame()
//! ```

use quill_input::InputSink;
use quill_ui::{Bitmap, Rect};

use crate::error::BackendResult;

/// A windowing and presentation backend.
pub trait Backend {
    /// Opens the window and routes every input callback into `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window, context or shader cannot be created.
    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        sink: InputSink,
    ) -> BackendResult<()>;

    /// Processes pending OS events, invoking the input callbacks.
    fn poll_events(&mut self);

    /// Returns true once the OS has asked the window to close.
    fn should_close(&self) -> bool;

    /// Closes the window and releases the input sink.
    fn destroy_window(&mut self);

    /// Copies `region` of `canvas` to the screen texture.
    fn upload_region(&mut self, canvas: &Bitmap, region: Rect);

    /// Shows the screen texture.
    fn present_frame(&mut self);
}
