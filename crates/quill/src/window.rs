//! # Window Facade
//!
//! The application's whole surface: one window, its event stream, a
//! screen canvas and the draw queue that widgets and [`Window::to_draw`]
//! fill each frame.
//!
//! ```text
//! while window.alive() {
//!     for event in window.events().drain() { .. }   // never blocks
//!     ui.layout(..); ui.text_button(..);            // enqueue
//!     window.draw_ui(&mut ui);                      // composite + present
//! }
//! ```

use std::sync::Arc;

use quill_input::{EventChannel, EventStream, InputSink, Pointer};
use quill_ui::{composite, Bitmap, Color, ConfigResult, DrawOp, DrawQueue, Rect, Size, Ui, UiConfig};

use crate::backend::Backend;
use crate::config::WindowConfig;
use crate::error::WindowResult;

/// A live window driven by a [`Backend`].
pub struct Window<B: Backend> {
    backend: B,
    config: WindowConfig,
    events: EventStream,
    pointer: Pointer,
    draw_queue: DrawQueue,
    canvas: Bitmap,
    full_upload: bool,
    dead: bool,
    destroyed: bool,
}

impl<B: Backend> Window<B> {
    /// Starts input delivery and opens the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the forwarder
    /// thread cannot start, or the backend fails to create the window.
    pub fn create(mut backend: B, config: WindowConfig) -> WindowResult<Self> {
        config.validate()?;
        let (publisher, events) = EventChannel::new(config.forward_capacity)?;
        let pointer = Pointer::new();
        let sink = InputSink::new(pointer.clone(), publisher);

        backend.create_window(config.width, config.height, &config.title, sink)?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            title = %config.title,
            "window created"
        );

        let canvas = Bitmap::new(Size::new(config.width, config.height));
        Ok(Self {
            backend,
            config,
            events,
            pointer,
            draw_queue: DrawQueue::new(),
            canvas,
            full_upload: true,
            dead: false,
            destroyed: false,
        })
    }

    /// Polls OS events and returns true while the window should keep
    /// running.
    ///
    /// After a close request or [`die`](Self::die) the window is destroyed
    /// and every later call returns false.
    pub fn alive(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        if !self.dead && !self.backend.should_close() {
            self.backend.poll_events();
            return true;
        }
        self.destroy();
        false
    }

    /// Requests termination at the next [`alive`](Self::alive) check.
    pub fn die(&mut self) {
        self.dead = true;
    }

    /// The stream of input events, in the order they happened.
    #[must_use]
    pub fn events(&self) -> &EventStream {
        &self.events
    }

    /// The live pointer state.
    #[must_use]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Creates a UI context that reads this window's pointer and draws
    /// into its queue.
    #[must_use]
    pub fn setup_ui(&self) -> Ui {
        Ui::new(self.pointer.clone(), self.draw_queue.clone())
    }

    /// Like [`setup_ui`](Self::setup_ui), with explicit sizing.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn setup_ui_with(&self, config: &UiConfig) -> ConfigResult<Ui> {
        Ui::with_config(self.pointer.clone(), self.draw_queue.clone(), config)
    }

    /// Enqueues `bitmap` to be copied to `target` on the next draw.
    pub fn to_draw(&self, target: Rect, bitmap: Arc<Bitmap>) {
        self.draw_queue.push(DrawOp::new(target, bitmap));
    }

    /// Composites everything queued, uploads what changed and presents.
    pub fn draw(&mut self) {
        let ops = self.draw_queue.take();
        let touched = composite(&mut self.canvas, &ops);
        tracing::trace!(ops = ops.len(), regions = touched.len(), "composited frame");

        if std::mem::take(&mut self.full_upload) {
            self.backend.upload_region(&self.canvas, self.canvas.bounds());
        } else {
            for region in touched {
                self.backend.upload_region(&self.canvas, region);
            }
        }
        self.backend.present_frame();
    }

    /// Ends `ui`'s frame, then draws.
    pub fn draw_ui(&mut self, ui: &mut Ui) {
        ui.end_frame();
        self.draw();
    }

    /// Resets the canvas to transparent. The next draw uploads all of it.
    pub fn clear(&mut self) {
        self.canvas.fill(Color::TRANSPARENT);
        self.full_upload = true;
    }

    /// The composited screen contents.
    #[must_use]
    pub fn canvas(&self) -> &Bitmap {
        &self.canvas
    }

    /// The configuration the window was created with.
    #[must_use]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Returns true once the window has been torn down.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            self.backend.destroy_window();
            self.destroyed = true;
            tracing::debug!(title = %self.config.title, "window destroyed");
        }
    }
}

impl<B: Backend> Drop for Window<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BackendError, WindowError};
    use crate::headless::{HeadlessBackend, HeadlessHandle};

    const RED: Color = Color::rgb(255, 0, 0);

    fn window() -> (Window<HeadlessBackend>, HeadlessHandle) {
        let backend = HeadlessBackend::new();
        let handle = backend.handle();
        let window = Window::create(backend, WindowConfig::new(32, 16, "test")).unwrap();
        (window, handle)
    }

    #[test]
    fn test_create_reports_backend_failure() {
        let backend = HeadlessBackend::failing(BackendError::Shader("no fragment stage".into()));
        let err = Window::create(backend, WindowConfig::default()).err().unwrap();
        assert!(matches!(err, WindowError::Backend(BackendError::Shader(_))));
    }

    #[test]
    fn test_die_destroys_once() {
        let (mut window, handle) = window();
        assert!(window.alive());

        window.die();
        assert!(!window.alive());
        assert!(!window.alive());
        assert!(handle.is_destroyed());
        assert!(window.is_destroyed());
    }

    #[test]
    fn test_first_draw_uploads_whole_canvas() {
        let (mut window, handle) = window();
        window.to_draw(Rect::new(2, 2, 4, 4), Arc::new(Bitmap::filled(Size::new(4, 4), RED)));

        window.draw();
        assert_eq!(handle.uploads(), 1);
        assert_eq!(handle.presents(), 1);
        assert_eq!(handle.pixel(3, 3), Some(RED));

        // Only the touched region afterwards.
        window.to_draw(Rect::new(0, 0, 1, 1), Arc::new(Bitmap::filled(Size::new(1, 1), RED)));
        window.draw();
        assert_eq!(handle.uploads(), 2);
    }

    #[test]
    fn test_clear_forces_full_upload() {
        let (mut window, handle) = window();
        window.to_draw(Rect::new(0, 0, 4, 4), Arc::new(Bitmap::filled(Size::new(4, 4), RED)));
        window.draw();

        window.clear();
        assert_eq!(window.canvas().get(0, 0), Some(Color::TRANSPARENT));
        window.draw();

        assert_eq!(handle.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(handle.uploads(), 2);
    }
}
