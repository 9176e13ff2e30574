// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::luma;
use image::RgbaImage;

/// Edge length of the bell icon and of the square sampling window beneath it.
pub const ICON_SIZE: u32 = 32;
/// Inset of the icon from the top and right edges of its container.
pub const ICON_MARGIN: u32 = 24;

/// Luminance reported when no pixel buffer can be produced. Reads as "bright",
/// so the caller falls back to the dark icon variant.
pub const FALLBACK_LUMINANCE: f32 = 255.0;

/// The rectangular region of a background image sampled for the icon decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SampleWindow {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The window directly beneath the bell icon, recomputed from the image's
    /// natural width on every load. Origin is clamped to stay non-negative for
    /// images narrower than the icon and its margin.
    pub const fn beneath_icon(image_width: u32) -> Self {
        Self::new(
            image_width.saturating_sub(ICON_SIZE + ICON_MARGIN),
            ICON_MARGIN,
            ICON_SIZE,
            ICON_SIZE,
        )
    }
}

/// Reads the window into a buffer of exactly `width × height` samples and
/// returns the median luminance of every pixel in it.
///
/// Window positions past the image edge read as transparent black, matching a
/// sub-region blit onto a cleared buffer. A degenerate zero-area window yields
/// [`FALLBACK_LUMINANCE`].
pub fn median_luminance(image: &RgbaImage, window: SampleWindow) -> f32 {
    let mut luminances = Vec::with_capacity((window.width * window.height) as usize);

    for dy in 0..window.height {
        for dx in 0..window.width {
            let (x, y) = (window.x + dx, window.y + dy);
            let channels = if x < image.width() && y < image.height() {
                image.get_pixel(x, y).0
            } else {
                [0, 0, 0, 0]
            };
            luminances.push(luma::pixel_luminance(&channels));
        }
    }

    luma::median(luminances).unwrap_or(FALLBACK_LUMINANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_window_beneath_icon_placement() {
        let window = SampleWindow::beneath_icon(200);
        assert_eq!(window, SampleWindow::new(144, 24, 32, 32));
    }

    #[test]
    fn test_window_beneath_icon_clamps_origin() {
        // Narrower than icon + margin: origin clamps to the left edge.
        assert_eq!(SampleWindow::beneath_icon(40).x, 0);
        assert_eq!(SampleWindow::beneath_icon(0).x, 0);
    }

    #[test]
    fn test_median_luminance_uniform_image() {
        let image = RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 255]));
        let median = median_luminance(&image, SampleWindow::beneath_icon(image.width()));
        assert_eq!(median, luma::pixel_luminance(&[255, 255, 255, 255]));
    }

    #[test]
    fn test_median_luminance_out_of_bounds_reads_black() {
        // A 32x32 white image sampled at y = 24: only 8 of 32 rows overlap the
        // image, the rest of the buffer reads as transparent black. With 768
        // zeros against 256 whites the median is 0.
        let image = RgbaImage::from_pixel(32, 32, Rgba([255, 255, 255, 255]));
        let median = median_luminance(&image, SampleWindow::beneath_icon(image.width()));
        assert_eq!(median, 0.0);
    }

    #[test]
    fn test_median_luminance_degenerate_window() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let median = median_luminance(&image, SampleWindow::new(0, 0, 0, 0));
        assert_eq!(median, FALLBACK_LUMINANCE);
    }

    #[test]
    fn test_median_luminance_mixed_window() {
        // Left half black, right half white: even sample count, median is the
        // mean of one black and one white sample.
        let mut image = RgbaImage::from_pixel(8, 4, Rgba([0, 0, 0, 255]));
        for y in 0..4 {
            for x in 4..8 {
                image.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let median = median_luminance(&image, SampleWindow::new(0, 0, 8, 4));
        let expected = luma::pixel_luminance(&[255, 255, 255, 255]) / 2.0;
        assert_eq!(median, expected);
    }
}
