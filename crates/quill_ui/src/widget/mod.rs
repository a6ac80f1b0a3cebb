//! Widget slots and the text button.
//!
//! Widgets are identified by `(layout, slot)`. The slot is a small integer
//! picked by the caller and stays the cache key for as long as the layout
//! lives.

mod button;
mod slot;

pub use button::{render_button, CachedButton};
pub use slot::SlotArena;
