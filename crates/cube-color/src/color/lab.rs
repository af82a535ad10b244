//! CIELAB color type
//!
//! Lab is the space CIEDE2000 is defined on. Conversion goes
//! linear RGB -> XYZ (D65) -> Lab with the classic 0.008856 / 7.787 knee.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// D65 reference white, Y normalized to 100.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

const EPSILON: f64 = 0.008856;
const KAPPA_SLOPE: f64 = 7.787;

/// A color in CIELAB space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green)
/// - `b`: Blue-yellow axis (negative = blue)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert an 8-bit scan triple straight to Lab.
    ///
    /// ```
    /// use cube_color::Lab;
    ///
    /// let white = Lab::from_bytes([255, 255, 255]);
    /// assert!((white.l - 100.0).abs() < 0.01);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from(LinearRgb::from_bytes(bytes))
    }

    /// Squared Euclidean distance (CIE76 squared). Used for clustering
    /// where a cheap centroid metric is enough.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Bit patterns of the three components, with -0.0 folded onto 0.0.
    ///
    /// Two colors with equal keys are bitwise identical, which makes the key
    /// usable for hashing memoized distances.
    #[inline]
    pub fn key(self) -> [u64; 3] {
        [bits(self.l), bits(self.a), bits(self.b)]
    }
}

#[inline]
fn bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

fn pivot(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

impl From<LinearRgb> for Lab {
    fn from(linear: LinearRgb) -> Self {
        let [x, y, z] = linear.to_xyz();
        let fx = pivot(x / WHITE_X);
        let fy = pivot(y / WHITE_Y);
        let fz = pivot(z / WHITE_Z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Srgb> for Lab {
    fn from(srgb: Srgb) -> Self {
        Self::from(LinearRgb::from(srgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        let black = Lab::from_bytes([0, 0, 0]);
        assert!(black.l.abs() < 1e-9);
        assert!(black.a.abs() < 1e-9);
        assert!(black.b.abs() < 1e-9);

        let white = Lab::from_bytes([255, 255, 255]);
        assert!((white.l - 100.0).abs() < 0.01);
        assert!(white.a.abs() < 0.05);
        assert!(white.b.abs() < 0.05);
    }

    #[test]
    fn test_primary_red() {
        // Reference: L 53.24, a 80.09, b 67.20
        let red = Lab::from_bytes([255, 0, 0]);
        assert!((red.l - 53.24).abs() < 0.05, "L was {}", red.l);
        assert!((red.a - 80.09).abs() < 0.1, "a was {}", red.a);
        assert!((red.b - 67.20).abs() < 0.1, "b was {}", red.b);
    }

    #[test]
    fn test_axes_signs() {
        let green = Lab::from_bytes([20, 105, 74]);
        assert!(green.a < 0.0);

        let blue = Lab::from_bytes([3, 40, 146]);
        assert!(blue.b < 0.0);

        let yellow = Lab::from_bytes([210, 208, 2]);
        assert!(yellow.b > 50.0);
    }

    #[test]
    fn test_dark_colors_use_linear_segment() {
        // Very dark red stays finite and continuous around the knee
        let a = Lab::from_bytes([2, 0, 0]);
        let b = Lab::from_bytes([3, 0, 0]);
        assert!(a.l.is_finite() && b.l.is_finite());
        assert!(b.l > a.l);
    }

    #[test]
    fn test_key_folds_negative_zero() {
        assert_eq!(Lab::new(0.0, -0.0, 0.0).key(), Lab::new(0.0, 0.0, 0.0).key());
        assert_ne!(Lab::new(1.0, 0.0, 0.0).key(), Lab::new(0.0, 0.0, 0.0).key());
    }

    #[test]
    fn test_byte_and_srgb_paths_agree() {
        let bytes = [148, 53, 9];
        let via_bytes = Lab::from_bytes(bytes);
        let via_srgb = Lab::from(Srgb::from_bytes(bytes));
        assert!(via_bytes.distance_squared(via_srgb) < 1e-18);
    }
}
