//! # Headless Backend
//!
//! An in-memory [`Backend`] for tests and demos. It keeps a copy of the
//! screen texture, replays scripted raw input on every poll and counts
//! uploads and presents.
//!
//! The backend is moved into the window, so scripting and inspection go
//! through a cloned [`HeadlessHandle`]:
//!
//! ```rust
//! use quill::{HeadlessBackend, RawInput, Window, WindowConfig};
//!
//! let backend = HeadlessBackend::new();
//! let handle = backend.handle();
//! let mut window = Window::create(backend, WindowConfig::new(64, 64, "test")).unwrap();
//!
//! handle.send(RawInput::CursorPos { x: 3.0, y: 4.0 });
//! assert!(window.alive());
//! assert_eq!(window.pointer().snapshot().x, 3);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use quill_input::{InputSink, RawInput};
use quill_ui::{Bitmap, Color, Rect, Size};

use crate::backend::Backend;
use crate::error::{BackendError, BackendResult};

#[derive(Default)]
struct Shared {
    pending: VecDeque<RawInput>,
    screen: Bitmap,
    close_requested: bool,
    destroyed: bool,
    uploads: usize,
    presents: usize,
}

/// In-memory backend.
pub struct HeadlessBackend {
    shared: Arc<Mutex<Shared>>,
    sink: Option<InputSink>,
    fail_create: Option<BackendError>,
}

impl HeadlessBackend {
    /// Creates a backend that opens successfully.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::default(),
            sink: None,
            fail_create: None,
        }
    }

    /// Creates a backend whose `create_window` fails with `error`.
    #[must_use]
    pub fn failing(error: BackendError) -> Self {
        Self {
            fail_create: Some(error),
            ..Self::new()
        }
    }

    /// Returns a handle for scripting input and inspecting output.
    #[must_use]
    pub fn handle(&self) -> HeadlessHandle {
        HeadlessHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for HeadlessBackend {
    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        sink: InputSink,
    ) -> BackendResult<()> {
        if let Some(error) = self.fail_create.take() {
            return Err(error);
        }
        self.shared.lock().screen = Bitmap::new(Size::new(width, height));
        self.sink = Some(sink);
        tracing::trace!(width, height, title, "headless window created");
        Ok(())
    }

    fn poll_events(&mut self) {
        let pending: Vec<RawInput> = self.shared.lock().pending.drain(..).collect();
        let Some(sink) = &self.sink else {
            return;
        };
        for raw in pending {
            if raw == RawInput::CloseRequested {
                self.shared.lock().close_requested = true;
            }
            sink.on_raw_input(raw);
        }
    }

    fn should_close(&self) -> bool {
        self.shared.lock().close_requested
    }

    fn destroy_window(&mut self) {
        self.sink = None;
        self.shared.lock().destroyed = true;
    }

    fn upload_region(&mut self, canvas: &Bitmap, region: Rect) {
        let mut shared = self.shared.lock();
        shared.screen.copy_from(canvas, region, region.origin());
        shared.uploads += 1;
    }

    fn present_frame(&mut self) {
        self.shared.lock().presents += 1;
    }
}

/// Shared view of a [`HeadlessBackend`].
#[derive(Clone)]
pub struct HeadlessHandle {
    shared: Arc<Mutex<Shared>>,
}

impl HeadlessHandle {
    /// Queues raw input for the next poll.
    pub fn send(&self, raw: RawInput) {
        self.shared.lock().pending.push_back(raw);
    }

    /// Queues several raw inputs for the next poll, in order.
    pub fn send_all(&self, raws: impl IntoIterator<Item = RawInput>) {
        self.shared.lock().pending.extend(raws);
    }

    /// Simulates the user pressing the window's close button.
    pub fn request_close(&self) {
        self.send(RawInput::CloseRequested);
    }

    /// Pixel on the presented screen texture.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.shared.lock().screen.get(x, y)
    }

    /// Returns true once the window has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.shared.lock().destroyed
    }

    /// Number of `upload_region` calls.
    #[must_use]
    pub fn uploads(&self) -> usize {
        self.shared.lock().uploads
    }

    /// Number of `present_frame` calls.
    #[must_use]
    pub fn presents(&self) -> usize {
        self.shared.lock().presents
    }
}
