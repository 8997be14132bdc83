//! Pointer up handling - finalize the active gesture.

use crate::app::{Editor, EditorEvent};
use crate::input::coords::CoordinateConverter;
use crate::input::{InputState, MouseButton, PointerUpEvent};
use crate::types::Rect;
use tracing::trace;

impl Editor {
    pub fn handle_pointer_up(&mut self, event: &PointerUpEvent) {
        if event.button != MouseButton::Primary {
            return;
        }

        let state = self.canvas.input_state;
        self.canvas.input_state.reset();

        match state {
            InputState::Idle => {}
            InputState::DraggingItems { .. } | InputState::ResizingItem { .. } => {
                self.commit();
            }
            InputState::MarqueeSelecting { start, .. } => {
                let current = CoordinateConverter::client_to_canvas(event.position, &self.coord_context());
                let rect = Rect::from_corners(start, current);

                // The selection was already cleared on pointer down unless
                // shift was held, so hits are always added
                let hits = self
                    .canvas
                    .selection
                    .select_rect(&self.canvas.board, self.view.zoom, rect, true);
                trace!(hits, "Marquee finished");
                self.notify(EditorEvent::SelectionChanged);
            }
        }
    }
}
