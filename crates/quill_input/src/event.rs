//! # Input Events
//!
//! Events are created by the [`InputSink`](crate::InputSink), pass through
//! the [`EventChannel`](crate::EventChannel) untouched, and are consumed
//! exactly once by the frame loop's drain.

use std::fmt;

use crate::input::{Key, MouseButton};

/// A pixel position in window coordinates (origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Payload of a pointer press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    /// Pointer position when the button changed.
    pub position: Position,
    /// Which button changed.
    pub button: MouseButton,
}

/// Scroll offsets, truncated to whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollDelta {
    /// Horizontal offset.
    pub dx: i32,
    /// Vertical offset.
    pub dy: i32,
}

/// An input event.
///
/// Each variant carries only the data that is meaningful for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked the window to close.
    WindowClose,
    /// The pointer moved.
    PointerMove(Position),
    /// A pointer button was pressed.
    PointerDown(ButtonEvent),
    /// A pointer button was released.
    PointerUp(ButtonEvent),
    /// The scroll wheel or touchpad scrolled.
    Scroll(ScrollDelta),
    /// A key was pressed.
    KeyDown(Key),
    /// A key was released.
    KeyUp(Key),
    /// A held key auto-repeated.
    KeyRepeat(Key),
    /// A character was typed.
    TextInput(char),
}

impl Event {
    /// Short name of the event kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::WindowClose => "WindowClose",
            Self::PointerMove(_) => "PointerMove",
            Self::PointerDown(_) => "PointerDown",
            Self::PointerUp(_) => "PointerUp",
            Self::Scroll(_) => "Scroll",
            Self::KeyDown(_) => "KeyDown",
            Self::KeyUp(_) => "KeyUp",
            Self::KeyRepeat(_) => "KeyRepeat",
            Self::TextInput(_) => "TextInput",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.kind())?;
        match self {
            Self::WindowClose => Ok(()),
            Self::PointerMove(pos) => write!(f, " {pos}"),
            Self::PointerDown(ev) | Self::PointerUp(ev) => {
                write!(f, " {} {}", ev.button, ev.position)
            }
            Self::Scroll(delta) => write!(f, " ({},{})", delta.dx, delta.dy),
            Self::KeyDown(key) | Self::KeyUp(key) | Self::KeyRepeat(key) => write!(f, " {key}"),
            Self::TextInput(c) => write!(f, " {c:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let ev = Event::PointerDown(ButtonEvent {
            position: Position::new(3, 4),
            button: MouseButton::Left,
        });
        assert_eq!(ev.to_string(), "[PointerDown] Left (3,4)");
        assert_eq!(Event::KeyRepeat(Key::PageUp).to_string(), "[KeyRepeat] PageUp");
        assert_eq!(Event::WindowClose.to_string(), "[WindowClose]");
        assert_eq!(Event::TextInput('x').to_string(), "[TextInput] 'x'");
    }
}
