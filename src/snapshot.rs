//! Persisted layout snapshots.
//!
//! A [`Snapshot`] is the serialized form of every placed item plus the view
//! settings. It is what gets written to storage and what the undo stack
//! holds. The JSON shape is camelCase and tolerant of missing fields so
//! older saves and hand-written default layouts still load.

use crate::board::Board;
use crate::error::{AssetError, AssetResult, SnapshotResult};
use crate::types::{AssetId, AssetOrigin, ItemContent, PlacedItem};
use crate::view::{ViewState, WallPreset};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedKind {
    #[default]
    Image,
    Block,
}

/// One placed item as persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    #[serde(rename = "type", default)]
    pub kind: SavedKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<AssetId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_f32")]
    pub width: f32,
    #[serde(default, deserialize_with = "nullable_f32")]
    pub height: f32,
    #[serde(default, deserialize_with = "nullable_f32")]
    pub max_width: f32,
    #[serde(default, deserialize_with = "nullable_f32")]
    pub max_height: f32,
    #[serde(default, deserialize_with = "nullable_f32")]
    pub x: f32,
    #[serde(default, deserialize_with = "nullable_f32")]
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_snap_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_snap_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_from_posters: Option<bool>,
    /// Data URL of the image bytes, present only for uploaded assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

/// Non-finite numbers are written as `null`; read them back as NaN so the
/// item fails geometry validation instead of the whole document.
fn nullable_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(f32::NAN))
}

impl SavedItem {
    fn from_item(item: &PlacedItem, board: &Board) -> Self {
        let (width, height) = item.size;
        let (x, y) = item.position;
        match &item.content {
            ItemContent::Block { label } => Self {
                kind: SavedKind::Block,
                source_id: None,
                name: label.clone(),
                width,
                height,
                max_width: width,
                max_height: height,
                x,
                y,
                pre_snap_width: None,
                pre_snap_height: None,
                is_from_posters: None,
                src: None,
            },
            ItemContent::Image {
                asset_id,
                name,
                natural_size,
                pre_snap_size,
            } => {
                let asset = board.assets().get(*asset_id);
                let uploaded = asset.is_some_and(|asset| asset.is_uploaded());
                Self {
                    kind: SavedKind::Image,
                    source_id: Some(*asset_id),
                    name: name.clone(),
                    width,
                    height,
                    max_width: natural_size.0,
                    max_height: natural_size.1,
                    x,
                    y,
                    pre_snap_width: pre_snap_size.map(|size| size.0),
                    pre_snap_height: pre_snap_size.map(|size| size.1),
                    is_from_posters: Some(asset.is_some() && !uploaded),
                    src: asset
                        .filter(|asset| asset.is_uploaded())
                        .map(|asset| to_data_url(&asset.bytes)),
                }
            }
        }
    }

    /// The saved resize ceiling, falling back to the current size when the
    /// save predates it.
    fn max_size(&self) -> (f32, f32) {
        if self.max_width > 0.0 && self.max_height > 0.0 {
            (self.max_width, self.max_height)
        } else {
            (self.width, self.height)
        }
    }

    fn has_valid_geometry(&self) -> bool {
        [self.width, self.height, self.x, self.y].iter().all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Serializable capture of the layout and view settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub placed_images: Vec<SavedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_zoom: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_handles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_to_poster: Option<bool>,
}

/// Outcome of applying a snapshot to a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub restored: usize,
    pub skipped: usize,
}

impl Snapshot {
    pub fn capture(board: &Board, view: &ViewState) -> Self {
        Self {
            placed_images: board
                .items()
                .iter()
                .map(|item| SavedItem::from_item(item, board))
                .collect(),
            canvas_zoom: Some(view.zoom),
            wall_preset: Some(view.wall_preset_key().to_string()),
            show_labels: Some(view.show_labels),
            show_handles: Some(view.show_handles),
            snap_to_poster: Some(view.snap_to_standard),
        }
    }

    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Apply view settings and append every resolvable item to `board`.
    ///
    /// The board is expected to be empty. Items get fresh ids. Images are
    /// resolved by asset name first, then from inline data (which registers
    /// a new uploaded asset); anything else is skipped with a warning.
    pub fn restore_into(&self, board: &mut Board, view: &mut ViewState) -> RestoreReport {
        let zoom = self
            .canvas_zoom
            .filter(|zoom| zoom.is_finite() && *zoom != 0.0)
            .unwrap_or(1.0);
        view.set_zoom(zoom);

        if let Some(key) = &self.wall_preset {
            view.wall_preset = WallPreset::by_key(key);
        }
        if let Some(show) = self.show_labels {
            view.show_labels = show;
        }
        if let Some(show) = self.show_handles {
            view.show_handles = show;
        }
        if let Some(snap) = self.snap_to_poster {
            view.snap_to_standard = snap;
        }

        let mut report = RestoreReport::default();
        for saved in &self.placed_images {
            if !saved.has_valid_geometry() {
                warn!(name = %saved.name, "Skipping saved item with invalid geometry");
                report.skipped += 1;
                continue;
            }
            let position = (saved.x.max(0.0), saved.y.max(0.0));
            let size = (saved.width, saved.height);

            match saved.kind {
                SavedKind::Block => {
                    board.add_block(saved.name.clone(), size, position);
                }
                SavedKind::Image => {
                    let Some(asset_id) = resolve_asset(board, saved) else {
                        warn!(name = %saved.name, "Could not restore image");
                        report.skipped += 1;
                        continue;
                    };
                    let pre_snap_size = saved.pre_snap_width.zip(saved.pre_snap_height);
                    board.add_item(
                        position,
                        size,
                        ItemContent::Image {
                            asset_id,
                            name: saved.name.clone(),
                            natural_size: saved.max_size(),
                            pre_snap_size,
                        },
                    );
                }
            }
            report.restored += 1;
        }

        debug!(restored = report.restored, skipped = report.skipped, "Restored snapshot");
        report
    }
}

fn resolve_asset(board: &mut Board, saved: &SavedItem) -> Option<AssetId> {
    if let Some(asset) = board.assets().find_by_name(&saved.name) {
        return Some(asset.id);
    }
    let src = saved.src.as_deref()?;
    match from_data_url(src) {
        Ok(bytes) => Some(board.assets_mut().register(
            saved.name.clone(),
            saved.max_size(),
            AssetOrigin::Uploaded,
            Arc::from(bytes),
        )),
        Err(e) => {
            warn!(name = %saved.name, error = %e, "Inline image data is unusable");
            None
        }
    }
}

/// Encode image bytes as a `data:` URL.
pub fn to_data_url(bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a base64 `data:` URL. A bare base64 payload is accepted as well.
pub fn from_data_url(src: &str) -> AssetResult<Vec<u8>> {
    let payload = match src.split_once(";base64,") {
        Some((_, payload)) => payload,
        None if src.starts_with("data:") => {
            let header = src.split(',').next().unwrap_or(src);
            return Err(AssetError::UnsupportedInline(header.to_string()));
        }
        None => src,
    };
    Ok(STANDARD.decode(payload.trim())?)
}
