//! Pointer down handling - hit testing and gesture start.
//!
//! Hit testing goes through the board's R-tree, so pointer down stays cheap
//! on large layouts.

use crate::app::{Editor, EditorEvent};
use crate::input::coords::CoordinateConverter;
use crate::input::{HandlePosition, InputState, MouseButton, PointerDownEvent};
use crate::profile_scope;
use crate::types::{ItemId, Point};
use tracing::trace;

impl Editor {
    pub fn handle_pointer_down(&mut self, event: &PointerDownEvent) {
        profile_scope!("handle_pointer_down");

        if event.button != MouseButton::Primary {
            return;
        }

        let zoom = self.view.zoom;
        let canvas_pos = CoordinateConverter::client_to_canvas(event.position, &self.coord_context());

        let Some(item_id) = self.canvas.board.item_at_visual_point(canvas_pos, zoom) else {
            self.start_marquee(canvas_pos, event.modifiers.shift);
            return;
        };

        if let Some(handle) = self.handle_at(item_id, canvas_pos) {
            self.start_resize(item_id, handle, event.position);
        } else {
            self.start_drag(item_id, canvas_pos, event.modifiers.shift);
        }
    }

    /// Visible resize handle of `item_id` under a visual canvas point
    fn handle_at(&self, item_id: ItemId, canvas_pos: Point) -> Option<HandlePosition> {
        if !self.handles_visible(item_id) {
            return None;
        }
        let item = self.canvas.board.get_item(item_id)?;
        let rect = CoordinateConverter::item_visual_rect(item, self.view.zoom);
        HandlePosition::at(rect, canvas_pos, self.config.handle_size)
    }

    fn start_drag(&mut self, item_id: ItemId, canvas_pos: Point, shift: bool) {
        // Pressing on a member of a multi-selection keeps the group intact
        if !self.canvas.selection.contains(item_id) {
            self.canvas.selection.select(item_id, shift);
        }
        self.canvas.selection.set_primary(item_id);

        let Some(item) = self.canvas.board.get_item(item_id) else {
            return;
        };
        let rect = CoordinateConverter::item_visual_rect(item, self.view.zoom);
        let offset = Point::new(canvas_pos.x - rect.x, canvas_pos.y - rect.y);
        self.canvas.input_state.start_dragging(item_id, offset);
        trace!(item_id, "Drag started");

        self.notify(EditorEvent::SelectionChanged);
    }

    fn start_resize(&mut self, item_id: ItemId, handle: HandlePosition, client_pos: Point) {
        let Some(item) = self.canvas.board.get_item(item_id) else {
            return;
        };
        let (width, height) = item.size;
        self.canvas.input_state = InputState::ResizingItem {
            item_id,
            handle,
            start_client: client_pos,
            start_size: item.size,
            start_pos: item.position,
            aspect_ratio: width / height,
        };
        self.canvas.selection.set_primary(item_id);
        trace!(item_id, ?handle, "Resize started");

        self.notify(EditorEvent::SelectionChanged);
    }

    fn start_marquee(&mut self, canvas_pos: Point, shift: bool) {
        if !shift {
            self.canvas.selection.deselect_all();
        }
        self.canvas.input_state.start_marquee(canvas_pos);
        self.notify(EditorEvent::SelectionChanged);
    }
}
