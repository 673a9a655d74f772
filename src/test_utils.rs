//! Test fixtures shared by the unit tests.

use image::{Rgba, RgbaImage};

/// Creates a leaf-like test image: a green content block centered on a
/// plain white background.
///
/// The content block spans the middle third of each axis, so for a 10x10
/// image the pixels at x, y in 3..7 are green and everything else is white.
pub fn leaf_on_white(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    for y in height / 3..height - height / 3 {
        for x in width / 3..width - width / 3 {
            image.put_pixel(x, y, Rgba([40, 160, 70, 255]));
        }
    }
    image
}
