//! Reference palette: one swatch per sticker color

use super::{ColorName, PaletteError};
use crate::color::{Lab, Srgb};
use crate::metric::DistanceCache;

/// A named swatch with its Lab coordinates precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub name: ColorName,
    pub srgb: Srgb,
    pub lab: Lab,
}

impl Swatch {
    pub fn new(name: ColorName, srgb: Srgb) -> Self {
        Self {
            name,
            srgb,
            lab: Lab::from(srgb),
        }
    }
}

/// The six reference swatches used to name anchor squares.
///
/// Swatches are stored in [`ColorName::ALL`] order. No two names may share
/// the same 8-bit swatch.
///
/// # Example
///
/// ```
/// use cube_color::{ColorName, DistanceCache, Lab, ReferencePalette};
///
/// let palette = ReferencePalette::default();
/// let mut cache = DistanceCache::new();
/// let (name, _) = palette.find_nearest(Lab::from_bytes([110, 6, 4]), &mut cache);
/// assert_eq!(name, ColorName::Red);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePalette {
    swatches: [Swatch; 6],
}

impl ReferencePalette {
    /// Build a palette from one sRGB color per name, in [`ColorName::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateColor`] if two names map to the same
    /// 8-bit color.
    pub fn new(colors: [Srgb; 6]) -> Result<Self, PaletteError> {
        let swatches = ColorName::ALL.map(|name| Swatch::new(name, colors[name.index()]));

        for (i, a) in swatches.iter().enumerate() {
            for b in &swatches[i + 1..] {
                if a.srgb.to_bytes() == b.srgb.to_bytes() {
                    return Err(PaletteError::DuplicateColor {
                        first: a.name,
                        second: b.name,
                    });
                }
            }
        }

        Ok(Self { swatches })
    }

    /// Start from the default swatches and replace the named ones.
    ///
    /// Names may be two-letter codes or full names; values are hex strings.
    ///
    /// ```
    /// use cube_color::{ColorName, ReferencePalette};
    ///
    /// let palette = ReferencePalette::with_overrides([("Rd", "#7a0a05")]).unwrap();
    /// assert_eq!(palette.swatch(ColorName::Red).srgb.to_hex(), "#7a0a05");
    /// ```
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut colors = ColorName::ALL.map(ColorName::default_swatch);
        for (name, hex) in overrides {
            let name: ColorName = name.parse()?;
            colors[name.index()] = hex.parse()?;
        }
        Self::new(colors)
    }

    pub fn swatch(&self, name: ColorName) -> &Swatch {
        &self.swatches[name.index()]
    }

    #[inline]
    pub fn lab(&self, name: ColorName) -> Lab {
        self.swatches[name.index()].lab
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    /// Closest swatch by CIEDE2000. Ties resolve to the earlier name.
    pub fn find_nearest(&self, color: Lab, cache: &mut DistanceCache) -> (ColorName, f64) {
        let mut best = (self.swatches[0].name, f64::INFINITY);
        for swatch in &self.swatches {
            let d = cache.distance(color, swatch.lab);
            if d < best.1 {
                best = (swatch.name, d);
            }
        }
        best
    }
}

impl Default for ReferencePalette {
    fn default() -> Self {
        let swatches = ColorName::ALL.map(|name| Swatch::new(name, name.default_swatch()));
        Self { swatches }
    }
}
