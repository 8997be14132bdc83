//! Item actions - add, delete, resize-to-max, snapping, toggles and uploads.

use super::{Editor, EditorEvent};
use crate::assets::decode_asset;
use crate::constants::DPI;
use crate::error::AssetResult;
use crate::types::{AssetId, AssetOrigin, ItemId};
use tracing::{debug, info};

impl Editor {
    // ==================== Adding Items ====================

    /// Place an asset at its natural size at the default position.
    pub fn add_asset_to_canvas(&mut self, asset_id: AssetId) -> Option<ItemId> {
        let id = self
            .canvas
            .board
            .add_image(asset_id, self.config.default_position)?;
        self.notify(EditorEvent::ItemsChanged);
        self.commit();
        Some(id)
    }

    /// Add a placeholder block sized in inches, labelled `W" × H"`.
    pub fn add_block(&mut self, width_in: f32, height_in: f32) -> ItemId {
        let label = format!("{width_in}\" × {height_in}\"");
        let size = (width_in * DPI, height_in * DPI);
        let id = self
            .canvas
            .board
            .add_block(label, size, self.config.default_position);
        self.notify(EditorEvent::ItemsChanged);
        self.commit();
        id
    }

    // ==================== Editing Items ====================

    /// Delete every selected item. No-op on an empty selection.
    pub fn delete_selected(&mut self) -> usize {
        if self.canvas.selection.is_empty() {
            return 0;
        }
        let ids = self.canvas.selection.ids();
        let removed = self.canvas.board.remove_items(&ids);
        self.canvas.selection.deselect_all();
        debug!(removed, "Deleted selection");

        self.notify(EditorEvent::ItemsChanged);
        self.notify(EditorEvent::SelectionChanged);
        self.commit();
        removed
    }

    /// Reset an item to its max size, clearing the over-max state.
    pub fn resize_to_max(&mut self, id: ItemId) -> bool {
        let resized = self
            .canvas
            .board
            .update_item(id, |item| item.size = item.max_size());
        if resized {
            self.notify(EditorEvent::ItemsChanged);
            self.commit();
        }
        resized
    }

    /// Snap image items to standard print sizes, or restore their pre-snap
    /// sizes. Applies to selected images, or every image when nothing is
    /// selected. Blocks are never snapped.
    pub fn set_snap_to_standard(&mut self, snap: bool) {
        self.view.snap_to_standard = snap;

        let selection = &self.canvas.selection;
        let targets: Vec<ItemId> = self
            .canvas
            .board
            .items()
            .iter()
            .filter(|item| item.is_image())
            .filter(|item| selection.is_empty() || selection.contains(item.id))
            .map(|item| item.id)
            .collect();

        for id in targets {
            self.canvas.board.update_item(id, |item| {
                if snap {
                    item.snap_to_standard_size();
                } else {
                    item.restore_pre_snap_size();
                }
            });
        }

        self.notify(EditorEvent::ItemsChanged);
        self.notify(EditorEvent::ViewChanged);
        self.commit();
    }

    // ==================== View Toggles ====================

    pub fn set_show_labels(&mut self, show: bool) {
        self.view.show_labels = show;
        self.notify(EditorEvent::ViewChanged);
        self.commit();
    }

    pub fn set_show_handles(&mut self, show: bool) {
        self.view.show_handles = show;
        self.notify(EditorEvent::ViewChanged);
        self.commit();
    }

    // ==================== Assets ====================

    /// Register user-supplied image bytes as an uploaded asset.
    pub fn upload_asset(&mut self, name: &str, bytes: Vec<u8>) -> AssetResult<AssetId> {
        let decoded = decode_asset(name, bytes)?;
        let id = self.canvas.board.assets_mut().register(
            decoded.name,
            decoded.natural_size,
            AssetOrigin::Uploaded,
            decoded.bytes,
        );
        info!(asset = name, "Uploaded asset");
        self.notify(EditorEvent::AssetsChanged);
        Ok(id)
    }

    /// Drop every uploaded asset and every item showing one.
    pub fn remove_uploaded_assets(&mut self) -> usize {
        let removed_assets = self.canvas.board.assets_mut().remove_uploaded();
        let removed_items = self
            .canvas
            .board
            .remove_where(|item| item.asset_id().is_some_and(|id| removed_assets.contains(&id)));
        self.canvas.selection.deselect_all();
        debug!(assets = removed_assets.len(), items = removed_items.len(), "Removed uploads");

        self.notify(EditorEvent::AssetsChanged);
        self.notify(EditorEvent::ItemsChanged);
        self.notify(EditorEvent::SelectionChanged);
        self.commit();
        removed_assets.len()
    }
}
