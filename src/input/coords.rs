//! Coordinate conversion between real and visual space.
//!
//! Real space: 1 unit = 1/[`DPI`](crate::constants::DPI) inch, independent of
//! zoom. Visual space: screen pixels inside the canvas, `real × zoom`.
//! Client space: raw pointer coordinates, offset from visual canvas space by
//! the viewport origin and scroll position.

use crate::types::{PlacedItem, Point, Rect};
use crate::view::Viewport;

/// Context needed for client-to-canvas conversions
pub struct CoordinateContext<'a> {
    pub viewport: &'a Viewport,
    pub zoom: f32,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(viewport: &'a Viewport, zoom: f32) -> Self {
        Self { viewport, zoom }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Real length to visual length
    #[inline]
    pub fn to_visual(value: f32, zoom: f32) -> f32 {
        value * zoom
    }

    /// Visual length to real length. `zoom` must be positive.
    #[inline]
    pub fn to_real(value: f32, zoom: f32) -> f32 {
        value / zoom
    }

    /// Client (pointer) position to visual canvas position, scroll included
    #[inline]
    pub fn client_to_canvas(client: Point, ctx: &CoordinateContext<'_>) -> Point {
        Point::new(
            client.x - ctx.viewport.origin.x + ctx.viewport.scroll.x,
            client.y - ctx.viewport.origin.y + ctx.viewport.scroll.y,
        )
    }

    /// Visual canvas point to real point
    #[inline]
    pub fn visual_to_real(point: Point, zoom: f32) -> Point {
        Point::new(Self::to_real(point.x, zoom), Self::to_real(point.y, zoom))
    }

    pub fn rect_to_visual(rect: Rect, zoom: f32) -> Rect {
        Rect::new(
            Self::to_visual(rect.x, zoom),
            Self::to_visual(rect.y, zoom),
            Self::to_visual(rect.width, zoom),
            Self::to_visual(rect.height, zoom),
        )
    }

    pub fn rect_to_real(rect: Rect, zoom: f32) -> Rect {
        Rect::new(
            Self::to_real(rect.x, zoom),
            Self::to_real(rect.y, zoom),
            Self::to_real(rect.width, zoom),
            Self::to_real(rect.height, zoom),
        )
    }

    /// Visual bounding box of a placed item
    #[inline]
    pub fn item_visual_rect(item: &PlacedItem, zoom: f32) -> Rect {
        Self::rect_to_visual(item.bounds(), zoom)
    }
}
