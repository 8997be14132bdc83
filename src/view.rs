//! View settings and viewport geometry.
//!
//! `ViewState` is persisted with every snapshot; `Viewport` is host-supplied
//! window geometry and never persisted.

use crate::constants::{DEFAULT_ZOOM, DPI, MIN_ZOOM, WALL_GUIDE_OFFSET};
use crate::types::{Point, Rect};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A named wall size the layout can be packed into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallPreset {
    /// Persisted identifier
    pub key: &'static str,
    pub name: &'static str,
    pub width_in: f32,
    pub height_in: f32,
}

/// Key persisted when no guide is active
pub const NO_WALL_PRESET: &str = "none";

static WALL_PRESETS: Lazy<HashMap<&'static str, WallPreset>> = Lazy::new(|| {
    [WallPreset::dorm()]
        .into_iter()
        .map(|preset| (preset.key, preset))
        .collect()
});

impl WallPreset {
    /// Look up a preset by its persisted key. `"none"` and unknown keys
    /// yield `None`.
    pub fn by_key(key: &str) -> Option<WallPreset> {
        WALL_PRESETS.get(key).copied()
    }

    pub fn dorm() -> WallPreset {
        WallPreset {
            key: "dorm",
            name: "Dorm",
            width_in: 80.0,
            height_in: 40.0,
        }
    }

    /// The guide rectangle in real units
    pub fn guide_rect(&self) -> Rect {
        Rect::new(
            WALL_GUIDE_OFFSET,
            WALL_GUIDE_OFFSET,
            self.width_in * DPI,
            self.height_in * DPI,
        )
    }

    pub fn label(&self) -> String {
        format!("{}: {}\" × {}\"", self.name, self.width_in, self.height_in)
    }
}

/// Persisted view settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// visual = real × zoom
    pub zoom: f32,
    pub show_labels: bool,
    pub show_handles: bool,
    pub snap_to_standard: bool,
    pub wall_preset: Option<WallPreset>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            show_labels: true,
            show_handles: false,
            snap_to_standard: false,
            wall_preset: None,
        }
    }
}

impl ViewState {
    /// Set zoom, flooring non-finite or non-positive values.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom.max(MIN_ZOOM)
        } else {
            MIN_ZOOM
        };
    }

    pub fn wall_guide(&self) -> Option<Rect> {
        self.wall_preset.map(|preset| preset.guide_rect())
    }

    pub fn wall_preset_key(&self) -> &'static str {
        self.wall_preset.map_or(NO_WALL_PRESET, |preset| preset.key)
    }
}

/// Host-supplied geometry of the scrollable canvas element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Client-space position of the canvas element's top-left corner
    pub origin: Point,
    /// Current scroll offset of the canvas element
    pub scroll: Point,
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            scroll: Point::default(),
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}
