//! Spatial Index Module
//!
//! R-tree over the real-space bounding boxes of placed items. Pointer hit
//! testing and marquee selection use it as a candidate filter; the exact
//! test (strict overlap, visual space) is applied by the caller.

use crate::types::{ItemId, PlacedItem, Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A canvas item's real-space bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn from_item(item: &PlacedItem) -> Self {
        Self {
            item_id: item.id,
            min_x: item.position.0,
            min_y: item.position.1,
            max_x: item.right(),
            max_y: item.bottom(),
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for placed items.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or move an item's box.
    pub fn update(&mut self, item: &PlacedItem) {
        if let Some(old_entry) = self.entries.remove(&item.id) {
            self.tree.remove(&old_entry);
        }
        let entry = SpatialEntry::from_item(item);
        self.tree.insert(entry);
        self.entries.insert(item.id, entry);
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        match self.entries.remove(&item_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Items whose box contains the real-space point (edges inclusive).
    pub fn query_point(&self, point: Point) -> Vec<ItemId> {
        let envelope = AABB::from_point([point.x, point.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_id)
            .collect()
    }

    /// Items whose box intersects or touches the real-space rectangle.
    pub fn query_rect(&self, rect: Rect) -> Vec<ItemId> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a>(&mut self, items: impl Iterator<Item = &'a PlacedItem>) {
        let entries: Vec<SpatialEntry> = items.map(SpatialEntry::from_item).collect();
        self.entries = entries.iter().map(|e| (e.item_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
