// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::sampler::{self, SampleWindow};
use crate::types::Rgba;
use image::RgbaImage;
use strum_macros::Display;

/// Median luminance above which the background counts as bright.
pub const LUMA_MIDPOINT: f32 = 128.0;

/// Rendering tone of the bell icon.
///
/// `Dark` before any background has loaded; thereafter a pure function of the
/// most recently loaded image's sampled region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, serde::Serialize, serde::Deserialize,
)]
pub enum IconTone {
    #[default]
    Dark,
    Light,
}

impl IconTone {
    /// Dark on a bright background, light on a dark one. Exactly the midpoint
    /// is not "bright", so it maps to light.
    pub fn for_luminance(median: f32) -> Self {
        if median > LUMA_MIDPOINT {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Decides the tone for a freshly loaded background image: places the
    /// sampling window beneath the icon and thresholds its median luminance.
    pub fn for_image(image: &RgbaImage) -> Self {
        let window = SampleWindow::beneath_icon(image.width());
        let median = sampler::median_luminance(image, window);
        let tone = Self::for_luminance(median);
        log::debug!("Sampled median luminance {median:.1} -> {tone} icon");
        tone
    }

    pub const fn stroke_colour(self) -> Rgba {
        match self {
            Self::Dark => Rgba::new(0x22, 0x22, 0x22, 255),
            Self::Light => Rgba::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba as ImageRgba;

    #[test]
    fn test_default_tone_is_dark() {
        assert_eq!(IconTone::default(), IconTone::Dark);
    }

    #[test]
    fn test_for_luminance_bright_maps_to_dark() {
        assert_eq!(IconTone::for_luminance(255.0), IconTone::Dark);
        assert_eq!(IconTone::for_luminance(128.5), IconTone::Dark);
    }

    #[test]
    fn test_for_luminance_dark_maps_to_light() {
        assert_eq!(IconTone::for_luminance(0.0), IconTone::Light);
        assert_eq!(IconTone::for_luminance(127.9), IconTone::Light);
    }

    #[test]
    fn test_for_luminance_midpoint_maps_to_light() {
        // 128 is not > 128.
        assert_eq!(IconTone::for_luminance(LUMA_MIDPOINT), IconTone::Light);
    }

    #[test]
    fn test_for_image_white_background() {
        let image = RgbaImage::from_pixel(200, 200, ImageRgba([255, 255, 255, 255]));
        assert_eq!(IconTone::for_image(&image), IconTone::Dark);
    }

    #[test]
    fn test_for_image_black_background() {
        let image = RgbaImage::from_pixel(200, 200, ImageRgba([0, 0, 0, 255]));
        assert_eq!(IconTone::for_image(&image), IconTone::Light);
    }

    #[test]
    fn test_stroke_colours() {
        assert_eq!(IconTone::Dark.stroke_colour(), Rgba::new(34, 34, 34, 255));
        assert_eq!(IconTone::Light.stroke_colour(), Rgba::WHITE);
    }

    #[test]
    fn test_tone_display() {
        assert_eq!(IconTone::Dark.to_string(), "Dark");
        assert_eq!(IconTone::Light.to_string(), "Light");
    }
}
