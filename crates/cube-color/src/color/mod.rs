//! Color types and conversion utilities
//!
//! Scanned squares travel through three color spaces before they can be
//! compared:
//!
//! - **sRGB**: what the camera hands us. Use for I/O.
//! - **LinearRgb**: gamma-decoded light intensity, the input to the XYZ matrix.
//! - **Lab**: CIELAB under D65, the space CIEDE2000 is defined on.
//!
//! # Example
//!
//! ```
//! use cube_color::{Lab, LinearRgb, Srgb};
//!
//! let srgb = Srgb::from_u8(20, 105, 74);
//! let linear = LinearRgb::from(srgb);
//! let lab = Lab::from(linear);
//! assert!(lab.a < 0.0); // green
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod srgb;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
