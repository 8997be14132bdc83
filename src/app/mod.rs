//! Application module - the Editor controller and its operations.
//!
//! This module is organized into several submodules:
//! - `state` - The Editor struct, its sub-structs and change events
//! - `lifecycle` - Startup, commit/persist, undo and clearing
//! - `actions` - Item add/delete/resize, snapping, toggles and uploads
//! - `layout_actions` - Bulk placement, wall guide packing, fit-to-view
//!
//! Pointer and keyboard handling lives in [`crate::input`] as further
//! `impl Editor` blocks.

mod state;
mod lifecycle;
mod actions;
mod layout_actions;

pub use lifecycle::load_default_layout;
pub use state::{CanvasState, Editor, EditorEvent, PersistenceState, Subscriber};
