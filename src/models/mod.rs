pub mod config;
pub mod cube;
pub mod report;
pub mod scan;
pub mod side;
pub mod topology;

pub use config::{ClusteringConfig, ResolverConfig};
pub use cube::{Anchor, CubeState, Facelet, ResolvedCube};
pub use report::{ResolutionReport, ResolutionStep, Stage};
pub use scan::ScanData;
pub use side::SideId;
pub use topology::{CenterFamily, CornerSlot, CubeSize, EdgeSlot, FaceletKind, SideGeometry, Topology};
