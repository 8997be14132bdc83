//! Scene model for a rendering adapter.
//!
//! The editor doesn't draw anything itself. A host subscribes to
//! [`EditorEvent`](crate::app::EditorEvent)s and rebuilds its view from
//! [`Editor::scene`], which carries every item's visual rectangle plus the
//! derived presentation flags (over-max, large, selection, labels).

use crate::app::Editor;
use crate::constants::{DPI, INCHES_PER_FOOT};
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::standard_sizes::format_inches;
use crate::types::{ItemId, PlacedItem, Rect};
use std::fmt;

/// Marker shown on items that won't fit on letter paper
pub const LARGE_MARKER: &str = "L";

/// One placed item as it should be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemVisual {
    pub id: ItemId,
    /// Visual canvas rectangle
    pub rect: Rect,
    pub is_block: bool,
    /// Resized past the source's natural resolution
    pub over_max: bool,
    pub selected: bool,
    pub primary: bool,
    pub handles_visible: bool,
    /// Text overlay, if one should be shown
    pub label: Option<String>,
    pub large_marker: Option<&'static str>,
}

/// The wall guide outline and its caption.
#[derive(Clone, Debug, PartialEq)]
pub struct WallGuideVisual {
    /// Visual canvas rectangle
    pub rect: Rect,
    pub label: String,
}

/// Everything a host needs to draw one frame of the canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Items in store order; later items draw on top
    pub items: Vec<ItemVisual>,
    /// Marquee rectangle in visual canvas space while one is being dragged
    pub marquee: Option<Rect>,
    pub wall_guide: Option<WallGuideVisual>,
    /// Aggregate size caption, see [`CurrentSize`]
    pub current_size: String,
}

/// Aggregate extent of the layout in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl CurrentSize {
    /// Placeholder caption for an empty canvas
    pub const EMPTY: &'static str = "Current: — in × — in (— ft × — ft)";

    pub fn from_extent(max_right: f32, max_bottom: f32) -> Self {
        Self {
            width_in: max_right / DPI,
            height_in: max_bottom / DPI,
        }
    }

    pub fn width_ft(&self) -> f32 {
        self.width_in / INCHES_PER_FOOT
    }

    pub fn height_ft(&self) -> f32 {
        self.height_in / INCHES_PER_FOOT
    }
}

impl fmt::Display for CurrentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current: {:.1} in × {:.1} in ({:.1} ft × {:.1} ft)",
            self.width_in,
            self.height_in,
            self.width_ft(),
            self.height_ft()
        )
    }
}

/// Caption for an item. Images show pixel and inch dimensions when labels
/// are on; blocks always show their name.
pub fn item_label(item: &PlacedItem, show_labels: bool) -> Option<String> {
    if item.is_block() {
        return Some(item.name().to_string());
    }
    if !show_labels {
        return None;
    }
    let (width, height) = item.size;
    Some(format!(
        "{width:.0} × {height:.0}px\n{}",
        format_inches(width, height)
    ))
}

impl Editor {
    /// Aggregate extent of every item, `None` on an empty canvas.
    pub fn current_size(&self) -> Option<CurrentSize> {
        self.canvas
            .board
            .extent()
            .map(|(right, bottom)| CurrentSize::from_extent(right, bottom))
    }

    pub fn scene(&self) -> Scene {
        profile_scope!("scene");

        let zoom = self.view.zoom;
        let selection = &self.canvas.selection;
        let items = self
            .canvas
            .board
            .items()
            .iter()
            .map(|item| ItemVisual {
                id: item.id,
                rect: CoordinateConverter::item_visual_rect(item, zoom),
                is_block: item.is_block(),
                over_max: item.is_over_max(),
                selected: selection.contains(item.id),
                primary: selection.primary() == Some(item.id),
                handles_visible: self.handles_visible(item.id),
                label: item_label(item, self.view.show_labels),
                large_marker: item.is_large().then_some(LARGE_MARKER),
            })
            .collect();

        let wall_guide = self.view.wall_preset.map(|preset| WallGuideVisual {
            rect: CoordinateConverter::rect_to_visual(preset.guide_rect(), zoom),
            label: preset.label(),
        });

        Scene {
            items,
            marquee: self.canvas.input_state.marquee_rect(),
            wall_guide,
            current_size: self
                .current_size()
                .map_or_else(|| CurrentSize::EMPTY.to_string(), |size| size.to_string()),
        }
    }
}
