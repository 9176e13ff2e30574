// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use dropbell_core::types::Rgba;
use egui::Color32;

/// Conversion from the framework-independent core colour into egui's.
pub(crate) trait IntoColor32 {
    fn into_color32(self) -> Color32;
}

impl IntoColor32 for Rgba {
    fn into_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_color32_opaque() {
        let c = Rgba::new(34, 34, 34, 255).into_color32();
        assert_eq!(c, Color32::from_rgb(34, 34, 34));
    }

    #[test]
    fn test_into_color32_white() {
        assert_eq!(Rgba::WHITE.into_color32(), Color32::WHITE);
    }
}
