//! Linear RGB color type
//!
//! Gamma-decoded light intensity. The sRGB to XYZ matrix only applies here.

use super::lut::{srgb8_to_linear, srgb_to_linear};
use super::srgb::Srgb;

/// A color in linear RGB color space, channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decode an 8-bit scan triple using the precomputed gamma table.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            r: srgb8_to_linear(bytes[0]),
            g: srgb8_to_linear(bytes[1]),
            b: srgb8_to_linear(bytes[2]),
        }
    }

    /// CIE XYZ tristimulus values (D65, scaled so that white has Y = 100).
    pub fn to_xyz(self) -> [f64; 3] {
        let (r, g, b) = (self.r * 100.0, self.g * 100.0, self.b * 100.0);
        [
            r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
            r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
            r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
        ]
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_formula_paths_agree() {
        for bytes in [[0u8, 0, 0], [235, 254, 250], [20, 105, 74], [104, 4, 2]] {
            let via_table = LinearRgb::from_bytes(bytes);
            let via_formula = LinearRgb::from(Srgb::from_bytes(bytes));
            assert!((via_table.r - via_formula.r).abs() < 1e-12);
            assert!((via_table.g - via_formula.g).abs() < 1e-12);
            assert!((via_table.b - via_formula.b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mid_gray_decode() {
        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041
        let linear = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5));
        assert!((linear.r - 0.214041).abs() < 1e-5);
    }

    #[test]
    fn test_white_xyz() {
        let [x, y, z] = LinearRgb::new(1.0, 1.0, 1.0).to_xyz();
        // rows sum to the D65 white point
        assert!((x - 95.047).abs() < 1e-4, "X was {x}");
        assert!((y - 100.0).abs() < 1e-4, "Y was {y}");
        assert!((z - 108.883).abs() < 1e-4, "Z was {z}");
    }

    #[test]
    fn test_white_is_neutral_in_lab() {
        let white = crate::Lab::from(LinearRgb::new(1.0, 1.0, 1.0));
        assert!((white.l - 100.0).abs() < 1e-3, "L was {}", white.l);
        assert!(white.a.abs() < 1e-3, "a was {}", white.a);
        assert!(white.b.abs() < 1e-3, "b was {}", white.b);
    }
}
