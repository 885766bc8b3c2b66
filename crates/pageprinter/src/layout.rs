//! Aspect-preserving page fit and centering.

use crate::REFERENCE_DPI;
use crate::device::PageMetrics;

/// A scaled, centered destination rectangle in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Fit a source image onto the page described by `metrics`.
///
/// The image is scaled by `dpi / 72` and clamped to the page width. If the
/// derived height overflows the page, the height is clamped and the width
/// recomputed from the aspect ratio; the recomputed width is not rechecked
/// against the page width.
pub fn fit_to_page(src_width: u32, src_height: u32, metrics: &PageMetrics) -> Placement {
    let scale = f64::from(metrics.dpi) / f64::from(REFERENCE_DPI);
    let aspect = f64::from(src_height) / f64::from(src_width);

    let mut width = (f64::from(src_width) * scale) as u32;
    if width > metrics.page_width {
        width = metrics.page_width;
    }
    let mut height = (f64::from(width) * aspect) as u32;

    if height > metrics.page_height {
        height = metrics.page_height;
        width = (f64::from(height) / aspect) as u32;
    }

    Placement {
        x: (metrics.page_width.saturating_sub(width) / 2) as i32,
        y: (metrics.page_height.saturating_sub(height) / 2) as i32,
        width,
        height,
    }
}
