//! # Quill UI
//!
//! An immediate-mode UI whose widgets keep their pixels between frames.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          FRAME                               │
//! ├──────────────────────────────────────────────────────────────┤
//! │  layout() → text_button() → end_frame() → composite()        │
//! │      ↓            ↓              ↓              ↓            │
//! │   select      slot cache     reset cursors   copy bitmaps    │
//! │   region      + hit test     + snapshot      in FIFO order   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layout ids, slot ids and orientation are API contracts: misuse panics.
//! Only loading configuration returns errors.

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bitmap;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod style;
pub mod text;
pub mod widget;

pub use bitmap::Bitmap;
pub use config::UiConfig;
pub use context::Ui;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Point, Rect, Size};
pub use interaction::Interaction;
pub use layout::{LayoutRegion, Orientation};
pub use render::{composite, DrawOp, DrawQueue};
pub use style::{ButtonColorTheme, Color};
pub use text::{render_text, render_text_multi, wrap_lines, FontFace};
pub use widget::{render_button, CachedButton, SlotArena};
