//! # Quill Input
//!
//! Everything between the OS input callbacks and the frame loop:
//!
//! ```text
//! ┌──────────┐  RawInput  ┌───────────┐  Event  ┌───────────┐  Event  ┌────────────┐
//! │ Backend  │──────────>│ InputSink │────────>│ Forwarder │────────>│ EventStream│
//! │ callbacks│           └─────┬─────┘         │  (thread) │         │  drain()   │
//! └──────────┘                 │ writes        └───────────┘         └────────────┘
//!                              ▼
//!                        ┌───────────┐  read once per widget
//!                        │  Pointer  │──────────────────────> UI
//!                        └───────────┘
//! ```
//!
//! Publishing never blocks and never reorders. The forwarder buffers
//! whatever the consumer has not taken yet and flushes it on shutdown.

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod channel;
pub mod clock;
pub mod error;
pub mod event;
pub mod input;

pub use channel::{EventChannel, EventPublisher, EventStream};
pub use clock::FrameClock;
pub use error::{InputError, InputResult};
pub use event::{ButtonEvent, Event, Position, ScrollDelta};
pub use input::{Action, InputSink, Key, MouseButton, Pointer, PointerState, RawInput};
