//! Pointer and keyboard input handling for the canvas.
//!
//! This module implements all interaction logic for the layout canvas:
//! item selection, dragging, resizing, marquee selection and shortcuts.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. Handlers are further `impl Editor` blocks,
//! so they see the same canvas state the actions do.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and event types
//! - `coords` - Client, visual and real coordinate conversion
//! - `mouse_down` - Pointer down handling (hit testing, gesture start)
//! - `drag` - Pointer move handling (drag, resize, marquee)
//! - `mouse_up` - Pointer up handling (commit, marquee finish)
//! - `keyboard` - Delete and undo shortcuts

pub mod coords;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;
mod keyboard;

pub use drag::compute_resize;
pub use state::{
    HandlePosition, InputState, KeyEvent, Modifiers, MouseButton, PointerDownEvent, PointerMoveEvent,
    PointerUpEvent,
};
