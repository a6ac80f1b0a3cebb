//! Fixed-capacity widget slot storage.

use super::CachedButton;

/// Per-layout arena of widget slots, allocated once at its full capacity.
///
/// A slot is empty until first touched. Filled slots stay filled until
/// [`clear`](Self::clear).
pub struct SlotArena {
    slots: Box<[Option<CachedButton>]>,
}

impl SlotArena {
    /// Creates an arena of `capacity` empty slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The cached button in `slot`, if it has been rendered.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&CachedButton> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Returns the cached button in `slot`, rendering it with `render` on
    /// first touch.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= capacity`.
    pub fn get_or_insert_with(
        &mut self,
        slot: usize,
        render: impl FnOnce() -> CachedButton,
    ) -> &CachedButton {
        self.slots[slot].get_or_insert_with(render)
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Number of filled slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::style::ButtonColorTheme;

    fn button() -> CachedButton {
        CachedButton::render("x", &ButtonColorTheme::default(), Size::new(20, 20))
    }

    #[test]
    fn test_render_only_on_first_touch() {
        let mut arena = SlotArena::new(4);
        let mut renders = 0;

        arena.get_or_insert_with(2, || {
            renders += 1;
            button()
        });
        arena.get_or_insert_with(2, || {
            renders += 1;
            button()
        });

        assert_eq!(renders, 1);
        assert_eq!(arena.occupied(), 1);
        assert!(arena.get(2).is_some());
        assert!(arena.get(9).is_none());
    }

    #[test]
    fn test_clear_empties_all_slots() {
        let mut arena = SlotArena::new(3);
        arena.get_or_insert_with(0, button);
        arena.get_or_insert_with(1, button);

        arena.clear();

        assert_eq!(arena.occupied(), 0);
        assert_eq!(arena.capacity(), 3);
    }
}
