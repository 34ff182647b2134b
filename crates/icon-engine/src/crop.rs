//! Content-aware logo cropping.
//!
//! Isolates the first block of drawn content (e.g. the emblem to the left of
//! a wordmark), trims empty margins, and squares the result for icon use.

use image::RgbaImage;
use image::imageops;
use tracing::debug;

use crate::bounds::{content_bbox, find_content_span};
use crate::compose::pad_to_square;

/// Crop an image to its first content block and square-pad it.
///
/// Pipeline: detect the content span, crop everything right of the first
/// trailing gap, tighten to the alpha bounding box, then center on a
/// transparent square canvas. A blank input skips the tightening step and
/// comes back square-padded at its original dimensions.
pub fn crop_to_content(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let span = find_content_span(img);
    debug!(?span.start_x, span.end_x, width, height, "Cropping to content span");

    let lead = imageops::crop_imm(img, 0, 0, span.end_x, height).to_image();

    let tight = match content_bbox(&lead) {
        Some(bbox) => {
            debug!(
                left = bbox.left,
                top = bbox.top,
                right = bbox.right,
                bottom = bbox.bottom,
                "Tightening to alpha bounding box"
            );
            imageops::crop_imm(&lead, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
        }
        None => lead,
    };

    pad_to_square(&tight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const DARK: Rgba<u8> = Rgba([20, 40, 60, 255]);
    const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn image_with_block(
        width: u32,
        height: u32,
        cols: std::ops::Range<u32>,
        rows: std::ops::Range<u32>,
    ) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(width, height, TRANSPARENT);
        for x in cols {
            for y in rows.clone() {
                img.put_pixel(x, y, DARK);
            }
        }
        img
    }

    #[test]
    fn crops_block_before_gap_to_square() {
        // 100x50, dark shape in columns 0-39 and rows 5-44, transparent rest.
        let img = image_with_block(100, 50, 0..40, 5..45);
        let out = crop_to_content(&img);

        assert_eq!(out.dimensions(), (40, 40));
        for y in 0..40 {
            for x in 0..40 {
                assert_eq!(*out.get_pixel(x, y), DARK, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn drops_content_after_the_gap() {
        // Emblem in columns 2..6, gap, then a wordmark in columns 10..28.
        let mut img = image_with_block(30, 8, 2..6, 2..6);
        for x in 10..28 {
            for y in 2..6 {
                img.put_pixel(x, y, DARK);
            }
        }

        let out = crop_to_content(&img);
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(*out.get_pixel(0, 0), DARK);
    }

    #[test]
    fn trims_margins_when_no_gap_exists() {
        let img = image_with_block(20, 10, 12..20, 3..7);
        let out = crop_to_content(&img);

        // end_x falls back to the full width; the bbox trims to 8x4.
        assert_eq!(out.dimensions(), (8, 8));
    }

    #[test]
    fn blank_image_is_square_padded_as_is() {
        let img = RgbaImage::from_pixel(12, 7, TRANSPARENT);
        let out = crop_to_content(&img);

        assert_eq!(out.dimensions(), (12, 12));
        for pixel in out.pixels() {
            assert_eq!(pixel.0[3], 0);
        }
    }

    #[test]
    fn content_is_recentered_pixel_exact() {
        // Tall 3x7 shape with a distinguishable pattern.
        let mut img = RgbaImage::from_pixel(12, 9, TRANSPARENT);
        for y in 1..8 {
            for x in 4..7 {
                img.put_pixel(x, y, Rgba([x as u8 * 10, y as u8 * 10, 5, 255]));
            }
        }

        let out = crop_to_content(&img);
        assert_eq!(out.dimensions(), (7, 7));

        // Content is 3x7; x offset = (7 - 3) / 2 = 2, y offset = 0.
        for y in 0..7 {
            for x in 0..3 {
                assert_eq!(
                    *out.get_pixel(x + 2, y),
                    *img.get_pixel(x + 4, y + 1),
                    "pixel ({x}, {y})"
                );
            }
        }
        // Padding columns stay transparent.
        for y in 0..7 {
            assert_eq!(out.get_pixel(0, y).0[3], 0);
            assert_eq!(out.get_pixel(6, y).0[3], 0);
        }
    }

    #[test]
    fn rerunning_on_own_output_is_stable() {
        let img = image_with_block(40, 25, 3..18, 4..21);
        let once = crop_to_content(&img);
        let twice = crop_to_content(&once);

        assert_eq!(once.dimensions(), twice.dimensions());
        assert_eq!(once, twice);
    }

    #[test]
    fn opaque_white_margins_survive_the_bbox_crop() {
        // Opaque white never starts the content span, but it does count
        // for the alpha bounding box once inside the span crop.
        let mut img = image_with_block(10, 4, 1..4, 0..4);
        for y in 0..4 {
            img.put_pixel(0, y, Rgba([255, 255, 255, 255]));
        }

        let out = crop_to_content(&img);
        // Span is columns 1..4; the crop keeps columns 0..4 and the bbox
        // keeps the leading white column because it is opaque.
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*out.get_pixel(1, 0), DARK);
    }
}
