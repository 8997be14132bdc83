//! Posterboard - a headless layout engine for arranging posters and photos
//! on a wall calibrated to real inches.
//!
//! ## Crate Layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `app` | The [`Editor`] controller: actions, lifecycle, notifications |
//! | `input` | Pointer/keyboard state machine and coordinate conversion |
//! | `board` | Item store with the spatial index kept in sync |
//! | `selection` | Primary item plus multi-selection set |
//! | `standard_sizes` | Print-size table and best-fit matching |
//! | `auto_layout` | Shelf packing, bulk placement, fit-to-view |
//! | `history` | Bounded linear undo stack |
//! | `snapshot` | Persisted layout format and restore |
//! | `storage` | Key-value persistence backends |
//! | `assets` | Asset registry, decoding and preloading |
//! | `render` | Scene model for a rendering adapter |
//!
//! Geometry is stored in real units (1/300 inch). Anything drawn is derived
//! by multiplying with the current zoom.

pub mod app;
pub mod assets;
pub mod auto_layout;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod selection;
pub mod snapshot;
pub mod spatial_index;
pub mod standard_sizes;
pub mod storage;
pub mod types;
pub mod view;

pub use app::{Editor, EditorEvent};
pub use config::EditorConfig;
pub use render::{CurrentSize, ItemVisual, Scene};
pub use snapshot::Snapshot;
pub use storage::{FileStorage, MemoryStorage, Storage};
