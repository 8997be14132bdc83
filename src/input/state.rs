//! Input state machine and pointer event types.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingItems        (pointer down on an item body)
//! Idle -> ResizingItem         (pointer down on a visible resize handle)
//! Idle -> MarqueeSelecting     (pointer down on empty canvas)
//!
//! Any -> Idle                  (pointer up - finalizes operation)
//! ```

use crate::types::{ItemId, Point, Rect};

/// Which pointer button was pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Cmd on macOS
    pub platform: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn control() -> Self {
        Self {
            control: true,
            ..Default::default()
        }
    }

    /// Ctrl or Cmd, whichever the platform uses for shortcuts.
    pub fn secondary(&self) -> bool {
        self.control || self.platform
    }
}

/// Pointer press in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDownEvent {
    pub position: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerMoveEvent {
    pub position: Point,
    pub modifiers: Modifiers,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerUpEvent {
    pub position: Point,
    pub button: MouseButton,
}

/// A key press. `key` uses the usual key names: `"Delete"`,
/// `"Backspace"`, or the typed character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// Resize handle corner. The opposite corner stays fixed while resizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandlePosition {
    pub const ALL: [HandlePosition; 4] = [
        HandlePosition::TopLeft,
        HandlePosition::TopRight,
        HandlePosition::BottomLeft,
        HandlePosition::BottomRight,
    ];

    /// Square hit target of side `size` inside this corner of `rect`.
    pub fn hit_rect(self, rect: Rect, size: f32) -> Rect {
        let x = match self {
            Self::TopLeft | Self::BottomLeft => rect.x,
            Self::TopRight | Self::BottomRight => rect.right() - size,
        };
        let y = match self {
            Self::TopLeft | Self::TopRight => rect.y,
            Self::BottomLeft | Self::BottomRight => rect.bottom() - size,
        };
        Rect::new(x, y, size, size)
    }

    /// Handle under `point`, if any. Checked in [`Self::ALL`] order.
    pub fn at(rect: Rect, point: Point, size: f32) -> Option<HandlePosition> {
        Self::ALL
            .into_iter()
            .find(|handle| handle.hit_rect(rect, size).contains(point))
    }

    /// Moving this handle left grows the item.
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Moving this handle changes the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Unified input state for pointer interactions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Dragging one or more items
    DraggingItems {
        /// Item under the pointer when the drag started
        primary_item: ItemId,
        /// Pointer offset from the item's visual top-left
        drag_offset: Point,
    },

    /// Resizing an item with a fixed aspect ratio
    ResizingItem {
        item_id: ItemId,
        handle: HandlePosition,
        /// Client position at resize start
        start_client: Point,
        /// Real size at resize start
        start_size: (f32, f32),
        /// Real position at resize start
        start_pos: (f32, f32),
        /// start width / start height
        aspect_ratio: f32,
    },

    /// Marquee selection, both corners in visual canvas space
    MarqueeSelecting { start: Point, current: Point },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_items(&self) -> bool {
        matches!(self, Self::DraggingItems { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    /// Gestures that edit geometry and therefore commit on release
    pub fn is_editing(&self) -> bool {
        self.is_dragging_items() || self.is_resizing()
    }

    pub fn dragged_item_id(&self) -> Option<ItemId> {
        match self {
            Self::DraggingItems { primary_item, .. } => Some(*primary_item),
            _ => None,
        }
    }

    pub fn resized_item_id(&self) -> Option<ItemId> {
        match self {
            Self::ResizingItem { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_dragging(&mut self, item_id: ItemId, offset: Point) {
        *self = Self::DraggingItems {
            primary_item: item_id,
            drag_offset: offset,
        };
    }

    pub fn start_marquee(&mut self, start: Point) {
        *self = Self::MarqueeSelecting { start, current: start };
    }

    pub fn set_marquee_current(&mut self, current: Point) {
        if let Self::MarqueeSelecting { current: c, .. } = self {
            *c = current;
        }
    }

    /// Normalized marquee rectangle in visual canvas space
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::MarqueeSelecting { start, current } => Some(Rect::from_corners(*start, *current)),
            _ => None,
        }
    }
}
