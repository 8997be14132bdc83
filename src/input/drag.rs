//! Pointer move handling - item dragging, resizing, marquee tracking.
//!
//! ## Performance Notes
//!
//! Pointer move fires on every frame of a gesture. Idle moves return
//! immediately, and a drag touches only the items it moves. Nothing here
//! commits; that happens once on pointer up.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::{Editor, EditorEvent};
use crate::constants::MIN_ITEM_SIZE;
use crate::input::coords::CoordinateConverter;
use crate::input::{HandlePosition, InputState, PointerMoveEvent};
use crate::perf::POINTER_MOVE_BUDGET_MS;
use crate::profile_scope;
use crate::types::{ItemId, Point};

/// New `(position, size)` for a corner resize, or `None` when the result
/// would be smaller than [`MIN_ITEM_SIZE`] on either axis or cross the
/// canvas origin.
///
/// `dx` is the real-space horizontal pointer travel since the resize began.
/// Height always follows width through `aspect`; the corner opposite the
/// handle stays fixed.
pub fn compute_resize(
    handle: HandlePosition,
    start_pos: (f32, f32),
    start_size: (f32, f32),
    aspect: f32,
    dx: f32,
) -> Option<((f32, f32), (f32, f32))> {
    let (sx, sy) = start_pos;
    let (sw, sh) = start_size;

    let width = if handle.is_left() { sw - dx } else { sw + dx };
    let height = width / aspect;
    let x = if handle.is_left() { sx + dx } else { sx };
    let y = if handle.is_top() { sy + (sh - height) } else { sy };

    if !(width >= MIN_ITEM_SIZE && height >= MIN_ITEM_SIZE) || x < 0.0 || y < 0.0 {
        return None;
    }
    Some(((x, y), (width, height)))
}

impl Editor {
    pub fn handle_pointer_move(&mut self, event: &PointerMoveEvent) {
        profile_scope!("handle_pointer_move", POINTER_MOVE_BUDGET_MS);

        let state = self.canvas.input_state;
        match state {
            InputState::Idle => {}
            InputState::DraggingItems {
                primary_item,
                drag_offset,
            } => {
                profile_scope!("item_drag");
                self.drag_to(primary_item, drag_offset, event.position);
            }
            InputState::ResizingItem {
                item_id,
                handle,
                start_client,
                start_size,
                start_pos,
                aspect_ratio,
            } => {
                profile_scope!("item_resize");
                let dx = CoordinateConverter::to_real(event.position.x - start_client.x, self.view.zoom);
                if let Some((position, size)) = compute_resize(handle, start_pos, start_size, aspect_ratio, dx) {
                    self.canvas.board.set_geometry(item_id, position, size);
                    self.notify(EditorEvent::ItemsChanged);
                }
            }
            InputState::MarqueeSelecting { .. } => {
                let canvas_pos = CoordinateConverter::client_to_canvas(event.position, &self.coord_context());
                self.canvas.input_state.set_marquee_current(canvas_pos);
                self.notify(EditorEvent::SelectionChanged);
            }
        }
    }

    /// Move the dragged item so the grab point stays under the pointer. When
    /// it belongs to a multi-selection the whole group moves by the same
    /// delta, each item clamped at the origin on its own.
    fn drag_to(&mut self, primary_item: ItemId, drag_offset: Point, client_pos: Point) {
        let zoom = self.view.zoom;
        let canvas_pos = CoordinateConverter::client_to_canvas(client_pos, &self.coord_context());
        let visual = Point::new(canvas_pos.x - drag_offset.x, canvas_pos.y - drag_offset.y);
        let target = CoordinateConverter::visual_to_real(visual, zoom);
        let target = (target.x.max(0.0), target.y.max(0.0));

        let Some(item) = self.canvas.board.get_item(primary_item) else {
            return;
        };
        let (px, py) = item.position;

        let selection = &self.canvas.selection;
        if selection.is_multi() && selection.contains(primary_item) {
            let (dx, dy) = (target.0 - px, target.1 - py);
            for id in selection.ids() {
                self.canvas.board.update_item(id, |item| {
                    let (x, y) = item.position;
                    item.position = ((x + dx).max(0.0), (y + dy).max(0.0));
                });
            }
        } else {
            self.canvas.board.set_position(primary_item, target);
        }

        self.notify(EditorEvent::ItemsChanged);
    }
}
