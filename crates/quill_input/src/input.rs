//! Raw input translation and the shared pointer state.
//!
//! The backend reports every OS callback to an [`InputSink`]. The sink
//! updates the [`Pointer`] first and then publishes the matching
//! [`Event`], so a widget declared after the drain sees the same state
//! the events describe.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::channel::EventPublisher;
use crate::event::{ButtonEvent, Event, Position, ScrollDelta};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button. This is the primary button for widgets.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl MouseButton {
    /// Returns the bit mask for a button.
    const fn mask(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Middle => 4,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Middle => "Middle",
        };
        f.write_str(name)
    }
}

/// Keyboard key.
///
/// Only the keys a UI cares about are mapped; the backend drops the rest.
/// Left/right variants of modifiers collapse into one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Escape key.
    Escape,
    /// Space bar.
    Space,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Either shift key.
    Shift,
    /// Either control key.
    Ctrl,
    /// Either alt key.
    Alt,
}

impl Key {
    /// Returns the key name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Escape => "Escape",
            Self::Space => "Space",
            Self::Backspace => "Backspace",
            Self::Delete => "Delete",
            Self::Enter => "Enter",
            Self::Tab => "Tab",
            Self::Home => "Home",
            Self::End => "End",
            Self::PageUp => "PageUp",
            Self::PageDown => "PageDown",
            Self::Shift => "Shift",
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pointer state as last reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Current pointer X position.
    pub x: i32,
    /// Current pointer Y position.
    pub y: i32,
    /// Mouse buttons currently held.
    buttons_down: u8,
}

impl PointerState {
    /// Creates a pointer state at the given position with no buttons held.
    #[must_use]
    pub const fn at(x: i32, y: i32) -> Self {
        Self { x, y, buttons_down: 0 }
    }

    /// Returns the pointer position.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub const fn is_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & button.mask()) != 0
    }

    /// Returns true if the primary (left) button is held.
    #[must_use]
    pub const fn primary_down(&self) -> bool {
        self.is_down(MouseButton::Left)
    }

    /// Records a press or release.
    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        if down {
            self.buttons_down |= button.mask();
        } else {
            self.buttons_down &= !button.mask();
        }
    }

    /// Updates the pointer position.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

/// Shared handle to the live pointer state.
///
/// Written by the input side, read by the UI. Cloning shares the state.
#[derive(Debug, Clone, Default)]
pub struct Pointer {
    state: Arc<RwLock<PointerState>>,
}

impl Pointer {
    /// Creates a pointer at the origin with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PointerState {
        *self.state.read()
    }

    /// Mutates the state in place.
    pub fn update(&self, f: impl FnOnce(&mut PointerState)) {
        f(&mut self.state.write());
    }

    /// Moves the pointer.
    pub fn move_to(&self, x: i32, y: i32) {
        self.update(|p| p.set_position(x, y));
    }

    /// Presses or releases a button.
    pub fn set_button(&self, button: MouseButton, down: bool) {
        self.update(|p| p.set_button(button, down));
    }
}

/// What happened to a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Went down.
    Press,
    /// Went up.
    Release,
    /// Held long enough to auto-repeat (keys only).
    Repeat,
}

/// An OS input callback, already mapped to Quill's key and button sets.
///
/// `None` keys/buttons are inputs the backend could not map; the sink
/// ignores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Cursor moved to a position in window coordinates.
    CursorPos {
        /// X position.
        x: f64,
        /// Y position.
        y: f64,
    },
    /// Mouse button changed.
    MouseButton {
        /// Mapped button.
        button: Option<MouseButton>,
        /// Press or release.
        action: Action,
    },
    /// Scroll offsets.
    Scroll {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
    },
    /// Unicode character typed.
    Char(char),
    /// Key changed.
    Key {
        /// Mapped key.
        key: Option<Key>,
        /// Press, release or repeat.
        action: Action,
    },
    /// Framebuffer resized. Resizing is not supported.
    FramebufferResize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// Close button pressed.
    CloseRequested,
}

/// Entry point for backend callbacks.
#[derive(Clone)]
pub struct InputSink {
    pointer: Pointer,
    publisher: EventPublisher,
}

impl InputSink {
    /// Creates a sink writing to `pointer` and publishing to `publisher`.
    #[must_use]
    pub fn new(pointer: Pointer, publisher: EventPublisher) -> Self {
        Self { pointer, publisher }
    }

    /// Returns the pointer this sink writes to.
    #[must_use]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Translates one raw callback into pointer updates and an event.
    pub fn on_raw_input(&self, raw: RawInput) {
        let event = match raw {
            RawInput::CursorPos { x, y } => {
                let (x, y) = (x as i32, y as i32);
                self.pointer.move_to(x, y);
                Event::PointerMove(Position::new(x, y))
            }
            RawInput::MouseButton { button: None, .. } | RawInput::Key { key: None, .. } => return,
            RawInput::MouseButton { button: Some(button), action } => {
                let down = match action {
                    Action::Press => true,
                    Action::Release => false,
                    Action::Repeat => return,
                };
                self.pointer.set_button(button, down);
                let payload = ButtonEvent {
                    position: self.pointer.snapshot().position(),
                    button,
                };
                if down {
                    Event::PointerDown(payload)
                } else {
                    Event::PointerUp(payload)
                }
            }
            RawInput::Scroll { dx, dy } => Event::Scroll(ScrollDelta {
                dx: dx as i32,
                dy: dy as i32,
            }),
            RawInput::Char(c) => Event::TextInput(c),
            RawInput::Key { key: Some(key), action } => match action {
                Action::Press => Event::KeyDown(key),
                Action::Release => Event::KeyUp(key),
                Action::Repeat => Event::KeyRepeat(key),
            },
            RawInput::FramebufferResize { width, height } => {
                tracing::debug!(width, height, "framebuffer resize ignored");
                return;
            }
            RawInput::CloseRequested => Event::WindowClose,
        };
        self.publisher.publish(event);
    }
}
