//! Standard poster and photo sizes.
//!
//! Maps arbitrary pixel dimensions onto the largest standard print size that
//! does not exceed them. The rule is "best fit that does not exceed", not
//! nearest aspect ratio: a 13×19 inch image snaps to 12×18, never 16×20.

use crate::constants::{DPI, LETTER_HEIGHT, LETTER_WIDTH};

/// A named print size in inches, listed short side first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardSize {
    pub short_in: f32,
    pub long_in: f32,
    pub name: &'static str,
}

/// Standard print sizes, ascending by area.
pub const STANDARD_SIZES: [StandardSize; 10] = [
    StandardSize { short_in: 4.0, long_in: 6.0, name: "4×6" },
    StandardSize { short_in: 5.0, long_in: 7.0, name: "5×7" },
    StandardSize { short_in: 8.0, long_in: 10.0, name: "8×10" },
    StandardSize { short_in: 8.5, long_in: 11.0, name: "8.5×11" },
    StandardSize { short_in: 11.0, long_in: 14.0, name: "11×14" },
    StandardSize { short_in: 12.0, long_in: 18.0, name: "12×18" },
    StandardSize { short_in: 16.0, long_in: 20.0, name: "16×20" },
    StandardSize { short_in: 18.0, long_in: 24.0, name: "18×24" },
    StandardSize { short_in: 20.0, long_in: 30.0, name: "20×30" },
    StandardSize { short_in: 24.0, long_in: 36.0, name: "24×36" },
];

/// The result of a match, oriented like the input and in real pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeMatch {
    pub width: f32,
    pub height: f32,
    pub name: &'static str,
}

/// Find the largest standard size that fits within `width_px × height_px`.
///
/// Falls back to the smallest entry when nothing fits. The returned size is
/// portrait when the input is portrait, landscape otherwise (square inputs
/// come back landscape).
pub fn find_best_standard_size(width_px: f32, height_px: f32) -> SizeMatch {
    let width_in = width_px / DPI;
    let height_in = height_px / DPI;
    let is_portrait = height_in > width_in;

    let min_in = width_in.min(height_in);
    let max_in = width_in.max(height_in);

    let best = STANDARD_SIZES
        .iter()
        .rev()
        .find(|size| size.short_in <= min_in && size.long_in <= max_in)
        .unwrap_or(&STANDARD_SIZES[0]);

    if is_portrait {
        SizeMatch {
            width: best.short_in * DPI,
            height: best.long_in * DPI,
            name: best.name,
        }
    } else {
        SizeMatch {
            width: best.long_in * DPI,
            height: best.short_in * DPI,
            name: best.name,
        }
    }
}

/// True when the dimensions won't fit on letter paper in either orientation.
pub fn is_larger_than_letter(width: f32, height: f32) -> bool {
    let min_dim = width.min(height);
    let max_dim = width.max(height);
    min_dim > LETTER_WIDTH || max_dim > LETTER_HEIGHT
}

/// Physical size label, e.g. `8.5" × 11.0"`.
pub fn format_inches(width_px: f32, height_px: f32) -> String {
    format!("{:.1}\" × {:.1}\"", width_px / DPI, height_px / DPI)
}
