//! Layout actions - bulk placement, wall guide packing and fit-to-view.

use super::{Editor, EditorEvent};
use crate::auto_layout::{bulk_placement, fit_zoom, pack_below_guide, pack_into_guide};
use crate::profile_scope;
use crate::types::AssetId;
use crate::view::WallPreset;
use tracing::debug;

impl Editor {
    /// Space left for content after subtracting `inset` from the viewport
    fn available_area(&self, inset: (f32, f32)) -> (f32, f32) {
        (
            self.canvas.viewport.width - inset.0,
            self.canvas.viewport.height - inset.1,
        )
    }

    /// Write shelf-packed positions back in store order.
    fn apply_positions(&mut self, positions: Vec<(f32, f32)>) {
        let mut positions = positions.into_iter();
        self.canvas.board.update_all(|item| {
            if let Some(position) = positions.next() {
                item.position = position;
            }
        });
    }

    fn item_sizes(&self) -> Vec<(f32, f32)> {
        self.canvas.board.items().iter().map(|item| item.size).collect()
    }

    /// Place every asset that isn't on the canvas yet, smallest first, and
    /// zoom so they roughly fill the viewport. Commits once.
    pub fn place_all(&mut self) -> usize {
        profile_scope!("place_all");

        let board = &self.canvas.board;
        let mut pending: Vec<(AssetId, (f32, f32))> = board
            .assets()
            .iter()
            .filter(|asset| !board.is_asset_placed(asset.id))
            .map(|asset| (asset.id, asset.natural_size))
            .collect();
        pending.sort_by(|(_, (aw, ah)), (_, (bw, bh))| (aw * ah).total_cmp(&(bw * bh)));

        let sizes: Vec<(f32, f32)> = pending.iter().map(|(_, size)| *size).collect();
        let Some(placement) = bulk_placement(
            &sizes,
            self.available_area(self.config.bulk_inset),
            self.config.bulk_start,
            self.config.pack_padding,
            self.config.bulk_fill_ratio,
        ) else {
            return 0;
        };

        self.view.set_zoom(placement.zoom);
        for ((asset_id, _), position) in pending.iter().zip(placement.positions) {
            self.canvas.board.add_image(*asset_id, position);
        }
        debug!(count = pending.len(), zoom = self.view.zoom, "Placed all assets");

        self.notify(EditorEvent::ItemsChanged);
        self.notify(EditorEvent::ViewChanged);
        self.commit();
        pending.len()
    }

    /// Show (or hide) a wall guide. Showing one packs the existing items
    /// into it in store order.
    pub fn set_wall_preset(&mut self, preset: Option<WallPreset>) {
        self.view.wall_preset = preset;

        if let Some(guide) = self.view.wall_guide() {
            if !self.canvas.board.is_empty() {
                profile_scope!("pack_into_guide");
                let positions = pack_into_guide(&self.item_sizes(), guide, self.config.pack_padding);
                self.apply_positions(positions);
                self.notify(EditorEvent::ItemsChanged);
            }
        }

        self.notify(EditorEvent::ViewChanged);
        self.commit();
    }

    /// Re-pack every item in rows below the wall guide. No-op without a
    /// guide or without items.
    pub fn move_out_of_guide(&mut self) -> bool {
        let Some(guide) = self.view.wall_guide() else {
            return false;
        };
        if self.canvas.board.is_empty() {
            return false;
        }
        profile_scope!("pack_below_guide");

        let positions = pack_below_guide(&self.item_sizes(), guide, self.config.pack_padding);
        self.apply_positions(positions);
        self.notify(EditorEvent::ItemsChanged);
        self.commit();
        true
    }

    /// Zoom out so every item and the wall guide fit in the viewport. Never
    /// zooms in past 1. No-op on an empty canvas.
    pub fn fit_to_view(&mut self) -> bool {
        let available = self.available_area(self.config.fit_inset);
        let Some(zoom) = fit_zoom(self.canvas.board.extent(), self.view.wall_guide(), available) else {
            return false;
        };
        self.view.set_zoom(zoom);
        self.notify(EditorEvent::ViewChanged);
        self.commit();
        true
    }
}
