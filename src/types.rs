//! Core types for the Posterboard layout engine.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: geometry primitives, source assets, and placed canvas items.
//!
//! All item geometry is stored in *real* space (1 unit = 1/300 inch). Visual
//! geometry is always derived through [`crate::input::coords`].

use crate::standard_sizes::{find_best_standard_size, is_larger_than_letter};
use std::fmt;
use std::sync::Arc;

/// Identifier of a placed item, unique for the process lifetime.
pub type ItemId = u64;

/// Identifier of an asset in the registry.
pub type AssetId = u64;

// ============================================================================
// Geometry
// ============================================================================

/// A point in either real or visual space (the caller knows which).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with a top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized rectangle spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self {
            x: left,
            y: top,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: rectangles that merely touch do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

// ============================================================================
// Assets
// ============================================================================

/// Where an asset came from.
///
/// Bundled assets are re-resolved by name when a snapshot is restored;
/// uploaded assets have their bytes inlined into the snapshot instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetOrigin {
    Bundled,
    Uploaded,
}

/// A source image available for placement.
#[derive(Clone, Debug)]
pub struct Asset {
    pub id: AssetId,
    /// Display name (file name), also the restore key for bundled assets
    pub name: String,
    /// Natural pixel size of the decoded image
    pub natural_size: (f32, f32),
    pub origin: AssetOrigin,
    /// Encoded image bytes as supplied by the source
    pub bytes: Arc<[u8]>,
}

impl Asset {
    #[inline]
    pub fn area(&self) -> f32 {
        self.natural_size.0 * self.natural_size.1
    }

    #[inline]
    pub fn is_uploaded(&self) -> bool {
        self.origin == AssetOrigin::Uploaded
    }
}

// ============================================================================
// Placed Items
// ============================================================================

/// The content of a placed item.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemContent {
    /// An instance of an asset
    Image {
        asset_id: AssetId,
        /// Asset name, kept so the item can be re-resolved after undo
        name: String,
        /// The asset's natural size, which is the resize ceiling
        natural_size: (f32, f32),
        /// Size recorded before a standard-size snap was applied
        pre_snap_size: Option<(f32, f32)>,
    },
    /// A label-only placeholder with no natural size of its own
    Block { label: String },
}

/// A positioned, sized rectangle on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub id: ItemId,
    /// Top-left position in real units
    pub position: (f32, f32),
    /// Size in real units
    pub size: (f32, f32),
    pub content: ItemContent,
}

impl PlacedItem {
    /// A new image item at the asset's natural size.
    pub fn image(id: ItemId, asset: &Asset, position: (f32, f32)) -> Self {
        Self {
            id,
            position,
            size: asset.natural_size,
            content: ItemContent::Image {
                asset_id: asset.id,
                name: asset.name.clone(),
                natural_size: asset.natural_size,
                pre_snap_size: None,
            },
        }
    }

    pub fn block(id: ItemId, label: impl Into<String>, size: (f32, f32), position: (f32, f32)) -> Self {
        Self {
            id,
            position,
            size,
            content: ItemContent::Block {
                label: label.into(),
            },
        }
    }

    #[inline]
    pub fn is_block(&self) -> bool {
        matches!(self.content, ItemContent::Block { .. })
    }

    #[inline]
    pub fn is_image(&self) -> bool {
        matches!(self.content, ItemContent::Image { .. })
    }

    pub fn name(&self) -> &str {
        match &self.content {
            ItemContent::Image { name, .. } => name,
            ItemContent::Block { label } => label,
        }
    }

    pub fn asset_id(&self) -> Option<AssetId> {
        match &self.content {
            ItemContent::Image { asset_id, .. } => Some(*asset_id),
            ItemContent::Block { .. } => None,
        }
    }

    /// The resize ceiling. Blocks have no natural size, so their max is
    /// always their current size.
    pub fn max_size(&self) -> (f32, f32) {
        match &self.content {
            ItemContent::Image { natural_size, .. } => *natural_size,
            ItemContent::Block { .. } => self.size,
        }
    }

    pub fn pre_snap_size(&self) -> Option<(f32, f32)> {
        match &self.content {
            ItemContent::Image { pre_snap_size, .. } => *pre_snap_size,
            ItemContent::Block { .. } => None,
        }
    }

    /// Snap an image to the best standard size for its pre-snap size,
    /// recording the pre-snap size first if it isn't already. Re-snapping
    /// always starts from the recorded size. Blocks are left alone.
    pub fn snap_to_standard_size(&mut self) -> bool {
        let current = self.size;
        let ItemContent::Image { pre_snap_size, .. } = &mut self.content else {
            return false;
        };
        let basis = *pre_snap_size.get_or_insert(current);
        let best = find_best_standard_size(basis.0, basis.1);
        self.size = (best.width, best.height);
        true
    }

    /// Undo a snap. No-op when no pre-snap size is recorded.
    pub fn restore_pre_snap_size(&mut self) -> bool {
        let ItemContent::Image { pre_snap_size, .. } = &mut self.content else {
            return false;
        };
        match pre_snap_size.take() {
            Some(size) => {
                self.size = size;
                true
            }
            None => false,
        }
    }

    /// Real-space bounding box.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.0, self.position.1, self.size.0, self.size.1)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.0 + self.size.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.1 + self.size.1
    }

    /// Resized past the source's natural resolution.
    pub fn is_over_max(&self) -> bool {
        let (max_w, max_h) = self.max_size();
        self.size.0 > max_w || self.size.1 > max_h
    }

    /// Won't fit on letter paper in either orientation.
    pub fn is_large(&self) -> bool {
        is_larger_than_letter(self.size.0, self.size.1)
    }
}

impl fmt::Display for PlacedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} at ({:.0}, {:.0}) {:.0}×{:.0}",
            self.name(),
            self.id,
            self.position.0,
            self.position.1,
            self.size.0,
            self.size.1
        )
    }
}
