//! Cube sticker colors and the reference palette
//!
//! [`ColorName`] is the closed set of six sticker colors. [`ReferencePalette`]
//! binds each name to the sRGB swatch a scanner typically reports for it.

mod error;
mod name;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use name::ColorName;
pub use palette::{ReferencePalette, Swatch};
