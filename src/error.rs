use cube_color::{ColorName, PaletteError};
use thiserror::Error;

use crate::models::{SideId, Stage};

/// Any failure while resolving a scan.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

/// The input or configuration does not describe a supported cube.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Unsupported square count: {count} (expected 6*N*N squares)")]
    UnsupportedSquareCount { count: usize },

    #[error("Unsupported cube size: {size}x{size}x{size} (supported sizes are 2 to 6)")]
    UnsupportedSize { size: usize },

    #[error("Scan is missing square {position}")]
    MissingPosition { position: usize },

    #[error("Invalid square position: {0}")]
    InvalidPosition(String),

    #[error("Malformed scan: {0}")]
    MalformedScan(String),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Config error: {0}")]
    Config(String),
}

/// The anchor squares that fix the cube's frame could not be located.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    #[error("Expected 3 corner clusters without a reference anchor, found {found}")]
    AnchorClusters { found: usize },

    #[error("No corner holds one square from each remaining anchor cluster")]
    FinalAnchorsNotFound,
}

/// The scan cannot be labeled as a legal cube.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConsistencyError {
    #[error("No legal color combination left for {slot} while resolving {stage} ({remaining} in pool)")]
    NoLegalCombination {
        stage: Stage,
        slot: String,
        remaining: usize,
    },

    #[error("Sides {side} and {other} both resolved to {color}")]
    DuplicateSideColor {
        side: SideId,
        other: SideId,
        color: ColorName,
    },

    #[error("Square {position} is {existing}, cannot reassign it to {requested}")]
    ConflictingAssignment {
        position: usize,
        existing: ColorName,
        requested: ColorName,
    },

    #[error("Square {position} was never resolved")]
    UnresolvedSquare { position: usize },
}
