use image::{DynamicImage, Luma, Rgba, RgbaImage};
use imageproc::definitions::Image;
use imageproc::filter::box_filter;
use imageproc::map::map_colors2;
use itertools::Itertools;

use crate::error::RemovalError;

/// The background removal capability
///
/// The runner treats removal as an opaque collaborator: decoded image in,
/// RGBA image with background pixels made transparent out. Implementations
/// must not touch the filesystem; reading and writing the asset is the
/// runner's job.
pub trait RemoveBackground {
    /// Removes the background from a decoded image.
    ///
    /// # Errors
    ///
    /// * [`RemovalError::EmptyImage`] - When the input has zero width or height
    /// * [`RemovalError::InvalidParameter`] - When the implementation was
    ///   configured with an unusable parameter
    fn remove_background(&self, image: &DynamicImage) -> Result<RgbaImage, RemovalError>;
}

/// Border color keying removal
///
/// Estimates the background color as the mean of the border-ring pixels,
/// then makes every pixel within `threshold` Euclidean RGB distance of that
/// color transparent. The resulting hard mask is softened with a box filter
/// so content edges keep a thin semi-transparent fringe instead of aliasing.
///
/// This is a deliberately simple stand-in for model-based matting: it works
/// well on assets shot or rendered against a near-uniform backdrop, which is
/// exactly what the batch in this crate processes.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderKeyRemover {
    /// Maximum RGB distance from the estimated background color for a pixel
    /// to count as background. Range 0..=441 (the RGB cube diagonal).
    pub threshold: f32,
    /// Box filter radius applied to the mask; 0 disables feathering.
    pub feather_radius: u32,
}

impl Default for BorderKeyRemover {
    fn default() -> Self {
        Self {
            threshold: 60.0,
            feather_radius: 1,
        }
    }
}

impl RemoveBackground for BorderKeyRemover {
    fn remove_background(&self, image: &DynamicImage) -> Result<RgbaImage, RemovalError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(RemovalError::InvalidParameter(format!(
                "threshold must be a non-negative finite number, got {}",
                self.threshold
            )));
        }

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(RemovalError::EmptyImage);
        }

        let key = estimate_background_color(&rgba);
        let mut mask = key_mask(&rgba, key, self.threshold);
        if self.feather_radius > 0 {
            mask = box_filter(&mask, self.feather_radius, self.feather_radius);
        }

        // Keep whatever transparency the input already had.
        Ok(map_colors2(&rgba, &mask, |p, m| {
            Rgba([p[0], p[1], p[2], p[3].min(m[0])])
        }))
    }
}

/// Mean color of the one-pixel border ring.
fn estimate_background_color(image: &RgbaImage) -> [f32; 3] {
    let (width, height) = image.dimensions();
    let mut sum = [0f64; 3];
    let mut count = 0u64;
    for (x, y) in border_coordinates(width, height) {
        let pixel = image.get_pixel(x, y);
        for (acc, &channel) in sum.iter_mut().zip(pixel.0.iter().take(3)) {
            *acc += f64::from(channel);
        }
        count += 1;
    }
    sum.map(|acc| (acc / count as f64) as f32)
}

/// Coordinates of the border ring, deduplicated for 1-wide or 1-tall images.
fn border_coordinates(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let top = (0..width).map(move |x| (x, 0));
    let bottom = (0..width).map(move |x| (x, height - 1));
    let left = (0..height).map(move |y| (0, y));
    let right = (0..height).map(move |y| (width - 1, y));
    top.chain(bottom).chain(left).chain(right).unique()
}

/// Hard alpha mask: 0 where a pixel matches the key color, 255 elsewhere.
fn key_mask(image: &RgbaImage, key: [f32; 3], threshold: f32) -> Image<Luma<u8>> {
    let mut mask = Image::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let distance = key
            .iter()
            .zip(pixel.0.iter().take(3))
            .map(|(&k, &c)| (f32::from(c) - k).powi(2))
            .sum::<f32>()
            .sqrt();
        let value = if distance <= threshold { 0 } else { 255 };
        mask.put_pixel(x, y, Luma([value]));
    }
    mask
}
