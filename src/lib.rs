//! Rubik's cube color resolver
//!
//! Turns a noisy RGB scan of an NxNxN cube (N = 2..=6) into the side label of
//! every square, the input format of two-phase solvers.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::{ConfigurationError, ConsistencyError, ResolveError, TopologyError};
pub use models::{CubeState, ResolvedCube, ResolverConfig, ScanData};
pub use services::{ColorResolver, CubeReport};

/// Validate a scan and build cube state.
pub fn load(scan: &ScanData) -> Result<CubeState, ConfigurationError> {
    CubeState::load(scan)
}

/// Resolve a loaded cube with the default palette and clustering.
pub fn resolve(cube: CubeState) -> Result<ResolvedCube, ResolveError> {
    ColorResolver::default().resolve(cube)
}

/// Side-label string in U, R, F, D, L, B order.
pub fn project(cube: &ResolvedCube) -> String {
    services::project(cube)
}
