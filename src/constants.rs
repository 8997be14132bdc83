//! Application-wide constants.
//!
//! Physical calibration values and interaction thresholds. Anything a
//! deployment may want to tune lives in [`crate::config::EditorConfig`]
//! instead; the values here define the geometry model itself.

// ============================================================================
// Physical Calibration
// ============================================================================

/// Real-space resolution: one real unit is 1/DPI inch
pub const DPI: f32 = 300.0;

/// Letter paper width (8.5") in real pixels
pub const LETTER_WIDTH: f32 = 8.5 * DPI;

/// Letter paper height (11") in real pixels
pub const LETTER_HEIGHT: f32 = 11.0 * DPI;

/// Inches per foot, for the aggregate size display
pub const INCHES_PER_FOOT: f32 = 12.0;

// ============================================================================
// Zoom
// ============================================================================

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Floor applied by every zoom producer so `to_real` never divides by zero
pub const MIN_ZOOM: f32 = 0.01;

// ============================================================================
// Item Defaults
// ============================================================================

/// Minimum item size for resize operations (real pixels)
pub const MIN_ITEM_SIZE: f32 = 50.0;

/// Real offset of the wall guide's top-left corner
pub const WALL_GUIDE_OFFSET: f32 = 20.0;

// ============================================================================
// History & Persistence
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;

/// Storage key the current snapshot is persisted under
pub const STORAGE_KEY: &str = "posterPlacerState";

// ============================================================================
// Input Handling
// ============================================================================

/// Size of the square resize handle at each corner, in visual pixels
pub const RESIZE_HANDLE_SIZE: f32 = 12.0;
