//! Selection model - primary item plus the multi-selection set.
//!
//! The primary item is always a member of the set whenever it is set, so
//! "the selection" for group operations is just [`SelectionManager::ids`].

use crate::board::Board;
use crate::types::{ItemId, Rect};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    primary: Option<ItemId>,
    selected: HashSet<ItemId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` and make it primary. Without `additive` the previous
    /// selection is dropped first.
    pub fn select(&mut self, id: ItemId, additive: bool) {
        if !additive {
            self.deselect_all();
        }
        self.selected.insert(id);
        self.primary = Some(id);
    }

    /// Make an already-selected item primary without touching the set.
    pub fn set_primary(&mut self, id: ItemId) {
        self.selected.insert(id);
        self.primary = Some(id);
    }

    pub fn deselect_all(&mut self) {
        self.primary = None;
        self.selected.clear();
    }

    /// Select every item whose visual bounding box strictly overlaps `rect`
    /// (visual canvas space). Returns the number of items hit.
    pub fn select_rect(&mut self, board: &Board, zoom: f32, rect: Rect, additive: bool) -> usize {
        if !additive {
            self.deselect_all();
        }
        let hits = board.items_in_visual_rect(rect, zoom);
        for &id in &hits {
            self.select(id, true);
        }
        hits.len()
    }

    /// Forget an item that no longer exists.
    pub fn remove(&mut self, id: ItemId) {
        self.selected.remove(&id);
        if self.primary == Some(id) {
            self.primary = None;
        }
    }

    #[inline]
    pub fn primary(&self) -> Option<ItemId> {
        self.primary
    }

    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.selected.iter().copied().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// A group operation applies: two or more items are selected.
    #[inline]
    pub fn is_multi(&self) -> bool {
        self.selected.len() > 1
    }
}
