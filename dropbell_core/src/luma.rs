// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.

/// Rec. 601 channel weights for perceived brightness.
pub const RED_WEIGHT: f32 = 0.299;
pub const GREEN_WEIGHT: f32 = 0.587;
pub const BLUE_WEIGHT: f32 = 0.114;

/// Luminance of a single RGBA pixel. Alpha is ignored.
pub fn pixel_luminance(channels: &[u8; 4]) -> f32 {
    RED_WEIGHT * f32::from(channels[0])
        + GREEN_WEIGHT * f32::from(channels[1])
        + BLUE_WEIGHT * f32::from(channels[2])
}

/// Median of a sample set, consuming it.
///
/// Sorts ascending; for an odd count returns the middle element, for an even
/// count the arithmetic mean of the two middle elements. Returns `None` for an
/// empty set.
pub fn median(mut luminances: Vec<f32>) -> Option<f32> {
    if luminances.is_empty() {
        return None;
    }

    luminances.sort_by(f32::total_cmp);

    let mid = luminances.len() / 2;
    if luminances.len() % 2 != 0 {
        Some(luminances[mid])
    } else {
        Some((luminances[mid - 1] + luminances[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_luminance_extremes() {
        // The weights sum to 1 in decimal but not bit-exactly in f32.
        assert!((pixel_luminance(&[255, 255, 255, 255]) - 255.0).abs() < 0.01);
        assert_eq!(pixel_luminance(&[0, 0, 0, 255]), 0.0);
    }

    #[test]
    fn test_pixel_luminance_ignores_alpha() {
        let opaque = pixel_luminance(&[90, 140, 30, 255]);
        let transparent = pixel_luminance(&[90, 140, 30, 0]);
        assert_eq!(opaque, transparent);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(vec![10.0, 20.0, 30.0]), Some(20.0));
        assert_eq!(median(vec![30.0, 10.0, 20.0]), Some(20.0));
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(vec![10.0, 20.0, 30.0, 40.0]), Some(25.0));
        assert_eq!(median(vec![40.0, 10.0, 30.0, 20.0]), Some(25.0));
    }

    #[test]
    fn test_median_single_element() {
        assert_eq!(median(vec![128.0]), Some(128.0));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(Vec::new()), None);
    }
}
