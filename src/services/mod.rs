pub mod anchors;
pub mod clustering;
pub mod permutations;
pub mod pipeline;
pub mod projection;
pub mod resolver;

pub use clustering::{partition_around_anchors, Clusterer, KMeans};
pub use permutations::permutations;
pub use pipeline::ColorResolver;
pub use projection::{project, side_colors, CubeReport};
pub use resolver::SlotResolver;
