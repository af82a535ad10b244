use std::fmt;

/// One of the six sides of the cube.
///
/// The declaration order is the scan order: the scanner reports U, L, F, R,
/// B, D, each side row-major as seen when facing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SideId {
    U,
    L,
    F,
    R,
    B,
    D,
}

impl SideId {
    /// Scan order.
    pub const ALL: [SideId; 6] = [
        SideId::U,
        SideId::L,
        SideId::F,
        SideId::R,
        SideId::B,
        SideId::D,
    ];

    /// Order of the projected state string.
    pub const PROJECTION_ORDER: [SideId; 6] = [
        SideId::U,
        SideId::R,
        SideId::F,
        SideId::D,
        SideId::L,
        SideId::B,
    ];

    /// Position in scan order.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn label(self) -> char {
        match self {
            SideId::U => 'U',
            SideId::L => 'L',
            SideId::F => 'F',
            SideId::R => 'R',
            SideId::B => 'B',
            SideId::D => 'D',
        }
    }
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_follows_scan_order() {
        for (i, side) in SideId::ALL.iter().enumerate() {
            assert_eq!(side.ordinal(), i);
        }
    }

    #[test]
    fn test_projection_order_labels() {
        let labels: String = SideId::PROJECTION_ORDER.iter().map(|s| s.label()).collect();
        assert_eq!(labels, "URFDLB");
    }
}
