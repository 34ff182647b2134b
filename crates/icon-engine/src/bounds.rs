//! Content-span and bounding-box detection over RGBA images.
//!
//! A column counts as content-bearing when any of its pixels is both
//! non-transparent and visibly non-white. The span scan finds the first
//! contiguous run of such columns; the bounding box is alpha-only.

use image::{Rgba, RgbaImage};
use tracing::debug;

/// Channel value at or above which a pixel is considered white.
const NEAR_WHITE: u8 = 250;

/// Horizontal extent of the first contiguous block of content columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSpan {
    /// First content-bearing column, `None` if the image is blank.
    pub start_x: Option<u32>,
    /// First non-content column after `start_x`; the image width when the
    /// content runs to the right edge or no content exists.
    pub end_x: u32,
}

/// Tight rectangle around non-transparent pixels.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Bounds {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Scan columns left to right for the first block of drawn content.
///
/// The scan stops at the first non-content column after content has started.
/// Any later content blocks are ignored; images with multiple disjoint
/// blocks keep only the first one.
pub fn find_content_span(img: &RgbaImage) -> ContentSpan {
    let (width, height) = img.dimensions();

    let mut start_x = None;
    for x in 0..width {
        let has_content = (0..height).any(|y| is_content_pixel(img.get_pixel(x, y)));

        if has_content {
            if start_x.is_none() {
                start_x = Some(x);
            }
        } else if start_x.is_some() {
            debug!(?start_x, end_x = x, "Content span ends at gap");
            return ContentSpan { start_x, end_x: x };
        }
    }

    // No trailing gap: keep the whole width.
    debug!(?start_x, end_x = width, "No gap found, span covers full width");
    ContentSpan {
        start_x,
        end_x: width,
    }
}

/// Tight bounding box of all pixels with non-zero alpha.
///
/// Returns `None` when every pixel is fully transparent.
pub fn content_bbox(img: &RgbaImage) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => Bounds {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => Bounds {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    bounds
}

/// A pixel is content when it is neither transparent nor near-white.
fn is_content_pixel(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    a > 0 && (r < NEAR_WHITE || g < NEAR_WHITE || b < NEAR_WHITE)
}
