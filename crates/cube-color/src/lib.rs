#![allow(clippy::excessive_precision, clippy::module_inception)]

//! cube-color: color science for reading Rubik's cube scans
//!
//! Camera scans of cube stickers are noisy: lighting shifts, glare and white
//! balance all move a square's RGB value away from the sticker's nominal
//! color. Deciding which of six colors a square shows is done in CIELAB with
//! the CIEDE2000 difference, which tracks perceived difference far better
//! than RGB distance, especially between the red and orange stickers.
//!
//! # Quick Start
//!
//! ```
//! use cube_color::{ColorName, DistanceCache, Lab, ReferencePalette};
//!
//! let palette = ReferencePalette::default();
//! let mut cache = DistanceCache::new();
//!
//! let scanned = Lab::from_bytes([22, 110, 70]);
//! let (name, distance) = palette.find_nearest(scanned, &mut cache);
//! assert_eq!(name, ColorName::Green);
//! assert!(distance < 10.0);
//! ```
//!
//! # Color Pipeline
//!
//! 1. 8-bit channels are normalized to 0.0..=1.0 ([`Srgb`]).
//! 2. IEC 61966-2-1 gamma decode ([`LinearRgb`]); 8-bit input goes through a
//!    table generated at build time.
//! 3. sRGB/D65 matrix to XYZ, then XYZ to CIELAB ([`Lab`]) with reference
//!    white (95.047, 100, 108.883).
//! 4. [`ciede2000`] with unit weighting factors, including the rotation term.
//!
//! [`DistanceCache`] memoizes step 4 per run, keyed on the unordered pair.

pub mod color;
pub mod metric;
pub mod palette;


pub use color::{Lab, LinearRgb, Srgb};
pub use metric::{ciede2000, DistanceCache};
pub use palette::{ColorName, PaletteError, ParseColorError, ReferencePalette, Swatch};
