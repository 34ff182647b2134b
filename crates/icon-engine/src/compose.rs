//! Square canvas composition.

use image::RgbaImage;
use image::imageops;
use tracing::debug;

/// Center an image on a fully transparent square canvas.
///
/// The canvas side is `max(width, height)`. The paste offsets use integer
/// floor division, so odd padding leaves the extra pixel on the right and
/// bottom. Source pixels are copied byte for byte, not alpha-composited.
pub fn pad_to_square(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let side = width.max(height);

    let mut canvas = RgbaImage::new(side, side);
    let x = (side - width) / 2;
    let y = (side - height) / 2;
    debug!(width, height, side, x, y, "Centering image on square canvas");

    imageops::replace(&mut canvas, img, i64::from(x), i64::from(y));
    canvas
}
