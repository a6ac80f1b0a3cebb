//! The immediate-mode UI context.
//!
//! Widgets are declared again every frame. Their pixels are rendered once
//! per slot and reused until the layout is invalidated:
//!
//! ```text
//!  frame N:  layout(0, ..) ─► text_button(0, "Open") ─► text_button(1, "Quit")
//!                                   │                          │
//!                         slot 0 cached? ── no ─► rasterize both faces
//!                                   │
//!                         place at cursor, hit-test, enqueue face
//!  end_frame(): cursors back to origin, primary button snapshotted
//! ```

use quill_input::Pointer;

use crate::config::UiConfig;
use crate::error::ConfigResult;
use crate::geometry::{Rect, Size};
use crate::interaction::Interaction;
use crate::layout::{LayoutRegion, Orientation};
use crate::render::{DrawOp, DrawQueue};
use crate::style::ButtonColorTheme;
use crate::widget::CachedButton;

/// One independent UI: its layouts, widget caches and click state.
pub struct Ui {
    max_slots: usize,
    button_height: u32,
    y_margin: u32,
    layouts: Vec<LayoutRegion>,
    active: Option<usize>,
    default_theme: ButtonColorTheme,
    pointer: Pointer,
    interaction: Interaction,
    draw_queue: DrawQueue,
    rasterizations: u64,
}

impl Ui {
    /// Creates a UI with the default configuration.
    #[must_use]
    pub fn new(pointer: Pointer, draw_queue: DrawQueue) -> Self {
        let config = UiConfig::default();
        Self {
            max_slots: config.max_slots,
            button_height: config.button_height,
            y_margin: config.y_margin,
            layouts: Vec::new(),
            active: None,
            default_theme: ButtonColorTheme::default(),
            pointer,
            interaction: Interaction::new(),
            draw_queue,
            rasterizations: 0,
        }
    }

    /// Creates a UI from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn with_config(
        pointer: Pointer,
        draw_queue: DrawQueue,
        config: &UiConfig,
    ) -> ConfigResult<Self> {
        config.validate()?;
        let font = config.font_face()?;
        let mut ui = Self::new(pointer, draw_queue);
        ui.max_slots = config.max_slots;
        ui.button_height = config.button_height;
        ui.y_margin = config.y_margin;
        ui.default_theme = ButtonColorTheme::default().with_font(font);
        Ok(ui)
    }

    /// Registers layout `id`, or re-selects it if it already exists, and
    /// makes it the target of subsequent widget calls.
    ///
    /// Re-selecting keeps the layout's first orientation, rectangle and
    /// cached widgets.
    ///
    /// # Panics
    ///
    /// Panics if `id` is neither an existing layout nor the next unused id.
    pub fn layout(&mut self, id: usize, orientation: Orientation, place: Rect) {
        let count = self.layouts.len();
        if id == count {
            tracing::debug!(id, ?orientation, ?place, "layout registered");
            self.layouts.push(LayoutRegion::new(orientation, place, self.max_slots));
        } else if id > count {
            panic!("layout ids must be registered in order from 0: got {id}, next is {count}");
        }
        self.active = Some(id);
    }

    /// Declares a text button in the active layout and returns true if it
    /// was clicked this frame.
    ///
    /// `theme` falls back to the context's default theme. The theme and
    /// text only matter the first time the slot is rendered; call
    /// [`invalidate_elements`](Self::invalidate_elements) to apply new ones.
    ///
    /// # Panics
    ///
    /// Panics if no layout is registered, if `slot` is out of range, or if
    /// the active layout is horizontal.
    pub fn text_button(
        &mut self,
        slot: usize,
        text: &str,
        theme: Option<&ButtonColorTheme>,
    ) -> bool {
        let Some(active) = self.active else {
            panic!("text_button called before any layout was registered");
        };
        let theme = theme.unwrap_or(&self.default_theme);
        let layout = &mut self.layouts[active];
        let capacity = layout.slots().capacity();
        assert!(slot < capacity, "slot {slot} out of range, layouts hold {capacity} slots");

        let size = Size::new(layout.place().width, self.button_height);
        let rasterizations = &mut self.rasterizations;
        let button = layout
            .slots_mut()
            .get_or_insert_with(slot, || {
                *rasterizations += 1;
                tracing::trace!(layout = active, slot, text, "rasterizing button");
                CachedButton::render(text, theme, size)
            })
            .clone();

        let target = layout.place_next(button.size, self.y_margin);
        let pointer = self.pointer.snapshot();
        let hovered = Interaction::hovered(&pointer, target);
        let clicked = self.interaction.clicked(&pointer, target);

        self.draw_queue.push(DrawOp::new(target, button.face(hovered).clone()));
        if clicked {
            tracing::debug!(layout = active, slot, text, "button clicked");
        }
        clicked
    }

    /// Drops every cached widget in the active layout.
    ///
    /// # Panics
    ///
    /// Panics if no layout is registered.
    pub fn invalidate_elements(&mut self) {
        let Some(active) = self.active else {
            panic!("invalidate_elements called before any layout was registered");
        };
        tracing::debug!(layout = active, "invalidating layout elements");
        self.layouts[active].slots_mut().clear();
    }

    /// Finishes the frame's declarations: every cursor returns to its
    /// layout's origin and the primary button is snapshotted for the next
    /// frame's click detection.
    pub fn end_frame(&mut self) {
        self.layouts.iter_mut().for_each(LayoutRegion::reset_cursor);
        self.interaction.end_frame(&self.pointer.snapshot());
    }

    /// Enqueues an arbitrary bitmap after everything already queued.
    pub fn to_draw(&self, op: DrawOp) {
        self.draw_queue.push(op);
    }

    /// The queue this context draws into.
    #[must_use]
    pub fn draw_queue(&self) -> &DrawQueue {
        &self.draw_queue
    }

    /// The pointer this context reads.
    #[must_use]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Registered layouts, in id order.
    #[must_use]
    pub fn layouts(&self) -> &[LayoutRegion] {
        &self.layouts
    }

    /// Id of the layout widget calls currently target.
    #[must_use]
    pub fn active_layout(&self) -> Option<usize> {
        self.active
    }

    /// The theme used when a widget call passes none.
    #[must_use]
    pub fn default_theme(&self) -> &ButtonColorTheme {
        &self.default_theme
    }

    /// Replaces the default theme. Already cached widgets keep their look
    /// until invalidated.
    pub fn set_default_theme(&mut self, theme: ButtonColorTheme) {
        self.default_theme = theme;
    }

    /// How many buttons have been rasterized since creation.
    #[must_use]
    pub fn rasterizations(&self) -> u64 {
        self.rasterizations
    }
}
