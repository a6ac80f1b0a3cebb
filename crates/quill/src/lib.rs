//! # Quill
//!
//! A small immediate-mode GUI layer over a pluggable window backend.
//!
//! ## Crates
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           quill                              │
//! │        Window facade · Backend trait · HeadlessBackend       │
//! ├──────────────────────────────┬───────────────────────────────┤
//! │         quill_input          │           quill_ui            │
//! │  Event · Pointer · InputSink │  Ui · layouts · slot cache    │
//! │  EventChannel · FrameClock   │  text · bitmaps · compositor  │
//! └──────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `backend`: the seam to the OS window and GPU
//! - `headless`: in-memory backend for tests and demos
//! - `window`: the per-frame application surface
//! - `config`: window configuration

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod backend;
pub mod config;
pub mod error;
pub mod headless;
pub mod window;

pub use quill_input as input;
pub use quill_ui as ui;

pub use backend::Backend;
pub use config::WindowConfig;
pub use error::{BackendError, BackendResult, WindowError, WindowResult};
pub use headless::{HeadlessBackend, HeadlessHandle};
pub use window::Window;

pub use quill_input::{Action, Event, FrameClock, Key, MouseButton, RawInput};
pub use quill_ui::{Bitmap, ButtonColorTheme, Color, Orientation, Rect, Size, Ui};
