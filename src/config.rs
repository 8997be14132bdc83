//! Editor configuration.
//!
//! Tunables for layout and persistence. Physical constants (DPI, paper
//! sizes, minimum item size) live in [`crate::constants`] and are fixed.

use crate::constants::{MAX_HISTORY_STATES, RESIZE_HANDLE_SIZE, STORAGE_KEY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Storage key the layout is saved under
    pub storage_key: String,
    /// Maximum number of undo steps kept
    pub max_history: usize,
    /// Gap between packed items, real units
    pub pack_padding: f32,
    /// Where newly added items land, real units
    pub default_position: (f32, f32),
    /// Top-left offset of bulk placement, visual pixels
    pub bulk_start: f32,
    /// Fraction of the viewport area bulk placement aims to fill
    pub bulk_fill_ratio: f32,
    /// Viewport width/height reserved around bulk placement, visual pixels
    pub bulk_inset: (f32, f32),
    /// Viewport width/height reserved around fit-to-view, visual pixels
    pub fit_inset: (f32, f32),
    /// Side of the square resize hit target at each corner, visual pixels
    pub handle_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            max_history: MAX_HISTORY_STATES,
            pack_padding: 20.0,
            default_position: (50.0, 50.0),
            bulk_start: 30.0,
            bulk_fill_ratio: 0.7,
            bulk_inset: (60.0, 100.0),
            fit_inset: (100.0, 150.0),
            handle_size: RESIZE_HANDLE_SIZE,
        }
    }
}

impl EditorConfig {
    /// `<config dir>/posterboard/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("posterboard").join("config.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Ignoring config file");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}
