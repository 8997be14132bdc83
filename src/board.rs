//! Layout item store.
//!
//! `Board` owns the ordered list of placed items, the asset registry they
//! reference, and the spatial index used for hit testing. Store order is
//! z-order: later items draw on top and win hit tests.
//!
//! Item geometry is only mutated through `Board` so the spatial index never
//! drifts from the items it describes.

use crate::assets::AssetRegistry;
use crate::input::coords::CoordinateConverter;
use crate::spatial_index::SpatialIndex;
use crate::types::{AssetId, ItemContent, ItemId, PlacedItem, Point, Rect};
use std::collections::HashSet;
use tracing::trace;

/// Source of item identifiers.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> ItemId;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: ItemId,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        self.last += 1;
        self.last
    }
}

pub struct Board {
    items: Vec<PlacedItem>,
    assets: AssetRegistry,
    index: SpatialIndex,
    ids: Box<dyn IdGenerator>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("items", &self.items)
            .field("assets", &self.assets.len())
            .finish()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(SequentialIds::default()))
    }

    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            items: Vec::new(),
            assets: AssetRegistry::new(),
            index: SpatialIndex::new(),
            ids,
        }
    }

    // ==================== Items ====================

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new item on top of the stack with a fresh id.
    pub fn add_item(&mut self, position: (f32, f32), size: (f32, f32), content: ItemContent) -> ItemId {
        let id = self.ids.next_id();
        let item = PlacedItem {
            id,
            position: (position.0.max(0.0), position.1.max(0.0)),
            size,
            content,
        };
        self.index.update(&item);
        trace!(%item, "Added item");
        self.items.push(item);
        id
    }

    /// Place an instance of a registered asset at its natural size.
    pub fn add_image(&mut self, asset_id: AssetId, position: (f32, f32)) -> Option<ItemId> {
        let asset = self.assets.get(asset_id)?;
        let natural_size = asset.natural_size;
        let content = ItemContent::Image {
            asset_id,
            name: asset.name.clone(),
            natural_size,
            pre_snap_size: None,
        };
        Some(self.add_item(position, natural_size, content))
    }

    pub fn add_block(&mut self, label: impl Into<String>, size: (f32, f32), position: (f32, f32)) -> ItemId {
        self.add_item(position, size, ItemContent::Block { label: label.into() })
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<PlacedItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        self.index.remove(id);
        Some(self.items.remove(idx))
    }

    /// Remove every listed item, returning how many existed.
    pub fn remove_items(&mut self, ids: &[ItemId]) -> usize {
        let doomed: HashSet<ItemId> = ids.iter().copied().collect();
        let before = self.items.len();
        self.items.retain(|item| !doomed.contains(&item.id));
        for id in &doomed {
            self.index.remove(*id);
        }
        before - self.items.len()
    }

    /// Remove items matching a predicate, returning their ids.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&PlacedItem) -> bool) -> Vec<ItemId> {
        let ids: Vec<ItemId> = self
            .items
            .iter()
            .filter(|item| predicate(item))
            .map(|item| item.id)
            .collect();
        self.remove_items(&ids);
        ids
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Mutate one item in place and reindex it.
    pub fn update_item(&mut self, id: ItemId, f: impl FnOnce(&mut PlacedItem)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        f(item);
        self.index.update(item);
        true
    }

    /// Mutate every item in store order, then rebuild the index once.
    pub fn update_all(&mut self, mut f: impl FnMut(&mut PlacedItem)) {
        for item in &mut self.items {
            f(item);
        }
        self.index.rebuild(self.items.iter());
    }

    pub fn set_position(&mut self, id: ItemId, position: (f32, f32)) -> bool {
        self.update_item(id, |item| item.position = position)
    }

    pub fn set_geometry(&mut self, id: ItemId, position: (f32, f32), size: (f32, f32)) -> bool {
        self.update_item(id, |item| {
            item.position = position;
            item.size = size;
        })
    }

    /// Any image item still references this asset.
    pub fn is_asset_placed(&self, asset_id: AssetId) -> bool {
        self.items.iter().any(|item| item.asset_id() == Some(asset_id))
    }

    /// Maximum right and bottom edges over all items, if any.
    pub fn extent(&self) -> Option<(f32, f32)> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.iter().fold((0.0_f32, 0.0_f32), |(right, bottom), item| {
            (right.max(item.right()), bottom.max(item.bottom()))
        }))
    }

    // ==================== Hit Testing ====================

    /// Topmost item whose visual box contains `point` (visual canvas space).
    pub fn item_at_visual_point(&self, point: Point, zoom: f32) -> Option<ItemId> {
        let real = CoordinateConverter::visual_to_real(point, zoom);
        let candidates: HashSet<ItemId> = self.index.query_point(real).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }
        self.items
            .iter()
            .rev()
            .filter(|item| candidates.contains(&item.id))
            .find(|item| CoordinateConverter::item_visual_rect(item, zoom).contains(point))
            .map(|item| item.id)
    }

    /// Items whose visual box strictly overlaps `rect`, in store order.
    pub fn items_in_visual_rect(&self, rect: Rect, zoom: f32) -> Vec<ItemId> {
        // Widen the real-space query by one visual pixel so rounding in the
        // conversion cannot drop a candidate.
        let slack = CoordinateConverter::to_real(1.0, zoom);
        let real = CoordinateConverter::rect_to_real(rect, zoom);
        let query = Rect::new(
            real.x - slack,
            real.y - slack,
            real.width + 2.0 * slack,
            real.height + 2.0 * slack,
        );
        let candidates: HashSet<ItemId> = self.index.query_rect(query).into_iter().collect();
        self.items
            .iter()
            .filter(|item| candidates.contains(&item.id))
            .filter(|item| CoordinateConverter::item_visual_rect(item, zoom).intersects(&rect))
            .map(|item| item.id)
            .collect()
    }

    // ==================== Assets ====================

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetRegistry {
        &mut self.assets
    }
}
