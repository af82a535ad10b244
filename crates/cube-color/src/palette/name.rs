use std::fmt;
use std::str::FromStr;

use super::PaletteError;
use crate::color::Srgb;

/// One of the six sticker colors.
///
/// The two-letter [`code`](ColorName::code) is the external form used in
/// reports and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorName {
    White,
    Green,
    Yellow,
    Orange,
    Blue,
    Red,
}

impl ColorName {
    pub const ALL: [ColorName; 6] = [
        ColorName::White,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Orange,
        ColorName::Blue,
        ColorName::Red,
    ];

    /// Position in [`ColorName::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            ColorName::White => "Wh",
            ColorName::Green => "Gr",
            ColorName::Yellow => "Ye",
            ColorName::Orange => "OR",
            ColorName::Blue => "Bu",
            ColorName::Red => "Rd",
        }
    }

    /// The color on the opposite side under the standard color scheme.
    ///
    /// ```
    /// use cube_color::ColorName;
    /// assert_eq!(ColorName::White.opposite(), ColorName::Yellow);
    /// assert_eq!(ColorName::Red.opposite().opposite(), ColorName::Red);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            ColorName::White => ColorName::Yellow,
            ColorName::Yellow => ColorName::White,
            ColorName::Green => ColorName::Blue,
            ColorName::Blue => ColorName::Green,
            ColorName::Red => ColorName::Orange,
            ColorName::Orange => ColorName::Red,
        }
    }

    /// Typical scanned value for this sticker.
    pub fn default_swatch(self) -> Srgb {
        let bytes = match self {
            ColorName::White => [0xeb, 0xfe, 0xfa],
            ColorName::Green => [0x14, 0x69, 0x4a],
            ColorName::Yellow => [0xd2, 0xd0, 0x02],
            ColorName::Orange => [0x94, 0x35, 0x09],
            ColorName::Blue => [0x03, 0x28, 0x92],
            ColorName::Red => [0x68, 0x04, 0x02],
        };
        Srgb::from_bytes(bytes)
    }

    /// Idealized display color, used when rendering a resolved cube.
    pub fn html(self) -> Srgb {
        let bytes = match self {
            ColorName::White => [0xff, 0xff, 0xff],
            ColorName::Green => [0x00, 0x66, 0x00],
            ColorName::Yellow => [0xff, 0xcc, 0x00],
            ColorName::Orange => [0xff, 0x66, 0x00],
            ColorName::Blue => [0x00, 0x00, 0x99],
            ColorName::Red => [0xcc, 0x00, 0x00],
        };
        Srgb::from_bytes(bytes)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ColorName {
    type Err = PaletteError;

    /// Accepts the two-letter code or the full English name, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorName::ALL
            .into_iter()
            .find(|name| {
                wanted.eq_ignore_ascii_case(name.code())
                    || wanted.eq_ignore_ascii_case(&format!("{name:?}"))
            })
            .ok_or_else(|| PaletteError::UnknownColorName(s.to_string()))
    }
}
