//! Automatic placement: shelf packing, bulk placement, wall-guide packing
//! and fit-to-view zoom.
//!
//! Everything here is pure geometry in real units. Callers decide which
//! items to pack and in what order, then write the positions back.

use crate::constants::MIN_ZOOM;
use crate::types::Rect;
use tracing::debug;

/// Greedy row-by-row placement.
///
/// An item wraps to a new row when it would cross `max_x`, unless the cursor
/// is still at the row start (an item wider than the boundary gets a row of
/// its own rather than looping forever).
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    row_start: f32,
    max_x: f32,
    padding: f32,
    x: f32,
    y: f32,
    row_height: f32,
}

impl ShelfPacker {
    pub fn new(start: (f32, f32), max_x: f32, padding: f32) -> Self {
        Self {
            row_start: start.0,
            max_x,
            padding,
            x: start.0,
            y: start.1,
            row_height: 0.0,
        }
    }

    /// Position for the next item of `size`.
    pub fn place(&mut self, size: (f32, f32)) -> (f32, f32) {
        if self.x + size.0 > self.max_x && self.x != self.row_start {
            self.x = self.row_start;
            self.y += self.row_height + self.padding;
            self.row_height = 0.0;
        }
        let position = (self.x, self.y);
        self.x += size.0 + self.padding;
        self.row_height = self.row_height.max(size.1);
        position
    }
}

/// Pack `sizes` in order, returning one position per size.
pub fn pack(sizes: &[(f32, f32)], start: (f32, f32), max_x: f32, padding: f32) -> Vec<(f32, f32)> {
    let mut packer = ShelfPacker::new(start, max_x, padding);
    sizes.iter().map(|&size| packer.place(size)).collect()
}

/// Result of placing many assets at once.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkPlacement {
    pub zoom: f32,
    pub positions: Vec<(f32, f32)>,
}

/// Choose a zoom at which the combined area of `sizes` fills `fill_ratio` of
/// the available viewport, then pack them in real units at that zoom.
///
/// `available`, `start` and `padding` are visual pixels. `sizes` are packed
/// in the given order; callers sort them first.
pub fn bulk_placement(
    sizes: &[(f32, f32)],
    available: (f32, f32),
    start: f32,
    padding: f32,
    fill_ratio: f32,
) -> Option<BulkPlacement> {
    if sizes.is_empty() {
        return None;
    }
    let total_area: f32 = sizes.iter().map(|(w, h)| w * h).sum();
    let target_area = available.0 * available.1;

    let scale = (target_area / total_area).sqrt() * fill_ratio;
    // Pack at the zoom the view will actually use
    let zoom = if scale.is_finite() && scale > 0.0 {
        scale.clamp(MIN_ZOOM, 1.0)
    } else {
        MIN_ZOOM
    };

    let origin = start / zoom;
    let positions = pack(sizes, (origin, origin), available.0 / zoom, padding / zoom);
    debug!(count = sizes.len(), zoom, "Bulk placement");
    Some(BulkPlacement { zoom, positions })
}

/// Pack inside the guide, inset by `padding` on the left, top and right.
pub fn pack_into_guide(sizes: &[(f32, f32)], guide: Rect, padding: f32) -> Vec<(f32, f32)> {
    pack(
        sizes,
        (guide.x + padding, guide.y + padding),
        guide.right() - padding,
        padding,
    )
}

/// Pack in rows starting `padding` below the guide, as wide as the guide.
pub fn pack_below_guide(sizes: &[(f32, f32)], guide: Rect, padding: f32) -> Vec<(f32, f32)> {
    pack(sizes, (guide.x, guide.bottom() + padding), guide.right(), padding)
}

/// Zoom that shows everything up to `extent` (and the guide) inside
/// `available`, never above 1. `None` when there is nothing to show.
pub fn fit_zoom(extent: Option<(f32, f32)>, guide: Option<Rect>, available: (f32, f32)) -> Option<f32> {
    let (mut max_right, mut max_bottom) = extent.unwrap_or((0.0, 0.0));
    if let Some(guide) = guide {
        max_right = max_right.max(guide.right());
        max_bottom = max_bottom.max(guide.bottom());
    }
    if max_right == 0.0 && max_bottom == 0.0 {
        return None;
    }
    Some((available.0 / max_right).min(available.1 / max_bottom).min(1.0))
}
