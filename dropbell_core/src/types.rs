// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use serde::{Deserialize, Serialize};

/// A plain sRGB colour with alpha, independent of any UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
}

impl From<[u8; 4]> for Rgba {
    fn from(arr: [u8; 4]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
            a: arr[3],
        }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_into_array() {
        let arr = [10, 20, 30, 40];
        let colour: Rgba = arr.into();
        assert_eq!(colour, Rgba::new(10, 20, 30, 40));

        let arr2: [u8; 4] = colour.into();
        assert_eq!(arr2, arr);
    }

    #[test]
    fn test_rgba_consts() {
        assert_eq!(Rgba::WHITE, Rgba::new(255, 255, 255, 255));
        assert_eq!(Rgba::BLACK, Rgba::new(0, 0, 0, 255));
    }
}
