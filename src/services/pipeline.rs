use cube_color::{DistanceCache, ReferencePalette};

use super::clustering::{Clusterer, KMeans};
use super::{anchors, projection, resolver::SlotResolver};
use crate::error::{ConfigurationError, ResolveError};
use crate::models::{CubeState, ResolutionReport, ResolvedCube, ResolverConfig, ScanData};

/// Orchestrates anchors → centers → edges → corners → side labels for one
/// scan at a time.
///
/// Holds only read-only configuration. Each call to [`resolve`](Self::resolve)
/// owns its own distance cache, so a resolver can be reused across scans.
pub struct ColorResolver {
    palette: ReferencePalette,
    clusterer: Box<dyn Clusterer>,
}

impl ColorResolver {
    pub fn new(palette: ReferencePalette) -> Self {
        Self {
            palette,
            clusterer: Box::new(KMeans::default()),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigurationError> {
        Ok(Self {
            palette: config.reference_palette()?,
            clusterer: Box::new(KMeans::from_config(&config.clustering)),
        })
    }

    /// Replace the clustering used to find anchors on even cubes.
    pub fn with_clusterer(mut self, clusterer: impl Clusterer + 'static) -> Self {
        self.clusterer = Box::new(clusterer);
        self
    }

    pub fn palette(&self) -> &ReferencePalette {
        &self.palette
    }

    /// Validate a scan and build the cube state.
    pub fn load(&self, scan: &ScanData) -> Result<CubeState, ConfigurationError> {
        CubeState::load(scan)
    }

    /// Label every square of a loaded cube.
    pub fn resolve(&self, mut cube: CubeState) -> Result<ResolvedCube, ResolveError> {
        let mut cache = DistanceCache::new();

        let positions = anchors::discover(&cube, self.clusterer.as_ref())?;
        let anchors = anchors::name(&cube, positions, &self.palette, &mut cache);
        anchors::bind(&mut cube, &anchors)?;

        let propagated_centers = anchors::propagate_centers(&mut cube, &anchors, &mut cache)?;
        let frame = anchors::frame(&cube, &anchors)?;

        tracing::debug!(
            frame = ?frame.iter().map(|c| c.code()).collect::<Vec<_>>(),
            propagated_centers,
            "Bound cube frame"
        );

        let outcome = SlotResolver::new(&mut cube, &mut cache, &anchors, frame).resolve_all()?;
        let side_colors = projection::side_colors(&cube, frame)?;

        tracing::info!(
            size = cube.size().get(),
            steps = outcome.steps.len(),
            distances = cache.len(),
            cache_hits = cache.hits(),
            "Resolved cube"
        );

        let report = ResolutionReport {
            steps: outcome.steps,
            propagated_centers,
            leftover_combinations: outcome.leftover,
        };
        Ok(ResolvedCube::new(cube, side_colors, anchors, report)?)
    }

    /// [`load`](Self::load) followed by [`resolve`](Self::resolve).
    pub fn resolve_scan(&self, scan: &ScanData) -> Result<ResolvedCube, ResolveError> {
        let cube = self.load(scan)?;
        self.resolve(cube)
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new(ReferencePalette::default())
    }
}
