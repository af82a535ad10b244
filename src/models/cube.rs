//! Mutable per-run cube state and the finished, fully labeled cube.

use cube_color::{ColorName, Lab};

use super::{CubeSize, FaceletKind, ResolutionReport, ScanData, SideId, Topology};
use crate::error::{ConfigurationError, ConsistencyError};

/// One scanned square.
#[derive(Debug, Clone, PartialEq)]
pub struct Facelet {
    pub position: usize,
    pub side: SideId,
    pub kind: FaceletKind,
    pub rgb: [u8; 3],
    pub lab: Lab,
    color: Option<ColorName>,
}

impl Facelet {
    pub fn color(&self) -> Option<ColorName> {
        self.color
    }

    pub fn is_resolved(&self) -> bool {
        self.color.is_some()
    }

    /// Whether `color` may be written: unset, or already the same color.
    fn check(&self, color: ColorName) -> Result<(), ConsistencyError> {
        match self.color {
            Some(existing) if existing != color => Err(ConsistencyError::ConflictingAssignment {
                position: self.position,
                existing,
                requested: color,
            }),
            _ => Ok(()),
        }
    }

    /// Set the color once; repeating the same color is a no-op.
    fn assign(&mut self, color: ColorName) -> Result<(), ConsistencyError> {
        self.check(color)?;
        self.color = Some(color);
        Ok(())
    }
}

/// All squares of one scan, indexed by position - 1.
#[derive(Debug, Clone)]
pub struct CubeState {
    topology: Topology,
    facelets: Vec<Facelet>,
}

impl CubeState {
    /// Validate a scan and convert every square to Lab.
    ///
    /// The scan must hold exactly positions 1..=6·N² for a supported N.
    pub fn load(scan: &ScanData) -> Result<Self, ConfigurationError> {
        let size = CubeSize::from_square_count(scan.len())?;
        let topology = Topology::new(size);

        let mut facelets = Vec::with_capacity(size.square_count());
        for side in topology.sides() {
            for position in side.positions() {
                let rgb = scan
                    .get(position)
                    .ok_or(ConfigurationError::MissingPosition { position })?;
                facelets.push(Facelet {
                    position,
                    side: side.side,
                    kind: side
                        .kind_of(position)
                        .unwrap_or(FaceletKind::Center),
                    rgb,
                    lab: Lab::from_bytes(rgb),
                    color: None,
                });
            }
        }

        tracing::debug!(size = size.get(), squares = facelets.len(), "Loaded scan");

        Ok(Self { topology, facelets })
    }

    pub fn size(&self) -> CubeSize {
        self.topology.size()
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    pub fn facelet(&self, position: usize) -> Option<&Facelet> {
        position
            .checked_sub(1)
            .and_then(|index| self.facelets.get(index))
    }

    /// Lab of a position taken from this cube's topology.
    pub(crate) fn lab(&self, position: usize) -> Lab {
        self.facelets[position - 1].lab
    }

    pub(crate) fn assign(
        &mut self,
        position: usize,
        color: ColorName,
    ) -> Result<(), ConsistencyError> {
        self.facelets[position - 1].assign(color)
    }

    /// Label several squares at once. Nothing is written unless every
    /// square accepts its color.
    pub(crate) fn assign_all(
        &mut self,
        assignments: &[(usize, ColorName)],
    ) -> Result<(), ConsistencyError> {
        for &(position, color) in assignments {
            self.facelets[position - 1].check(color)?;
        }
        for &(position, color) in assignments {
            self.facelets[position - 1].assign(color)?;
        }
        Ok(())
    }

    pub fn resolved_count(&self) -> usize {
        self.facelets.iter().filter(|f| f.is_resolved()).count()
    }
}

/// An anchor square: a piece whose position alone fixes a side's color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: usize,
    pub name: ColorName,
    pub rgb: [u8; 3],
    pub lab: Lab,
}

/// A cube with every square labeled and a color bound to each side.
#[derive(Debug, Clone)]
pub struct ResolvedCube {
    cube: CubeState,
    colors: Vec<ColorName>,
    side_colors: [ColorName; 6],
    sides_by_color: [SideId; 6],
    anchors: [Anchor; 6],
    report: ResolutionReport,
}

impl ResolvedCube {
    /// Seal a run. Fails if any square is unlabeled or two sides share a color.
    pub(crate) fn new(
        cube: CubeState,
        side_colors: [ColorName; 6],
        anchors: [Anchor; 6],
        report: ResolutionReport,
    ) -> Result<Self, ConsistencyError> {
        let colors = cube
            .facelets()
            .iter()
            .map(|f| {
                f.color().ok_or(ConsistencyError::UnresolvedSquare {
                    position: f.position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let sides_by_color = invert_side_colors(&side_colors)?;

        Ok(Self {
            cube,
            colors,
            side_colors,
            sides_by_color,
            anchors,
            report,
        })
    }

    pub fn size(&self) -> CubeSize {
        self.cube.size()
    }

    pub fn topology(&self) -> &Topology {
        self.cube.topology()
    }

    pub fn facelets(&self) -> &[Facelet] {
        self.cube.facelets()
    }

    pub fn anchors(&self) -> &[Anchor; 6] {
        &self.anchors
    }

    pub fn anchor(&self, color: ColorName) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.name == color)
    }

    pub fn report(&self) -> &ResolutionReport {
        &self.report
    }

    pub fn side_color(&self, side: SideId) -> ColorName {
        self.side_colors[side.ordinal()]
    }

    /// The side whose color is `color`.
    pub fn side_for(&self, color: ColorName) -> SideId {
        self.sides_by_color[color.index()]
    }

    /// Final color of every square, indexed by position - 1.
    pub fn colors(&self) -> &[ColorName] {
        &self.colors
    }

    pub fn color_of(&self, position: usize) -> Option<ColorName> {
        position
            .checked_sub(1)
            .and_then(|index| self.colors.get(index))
            .copied()
    }
}

/// Map each color back to the side that carries it.
///
/// Fails on the first pair of sides (in scan order) sharing a color.
pub(crate) fn invert_side_colors(
    side_colors: &[ColorName; 6],
) -> Result<[SideId; 6], ConsistencyError> {
    let mut owner: [Option<SideId>; 6] = [None; 6];
    for side in SideId::ALL {
        let color = side_colors[side.ordinal()];
        if let Some(other) = owner[color.index()] {
            return Err(ConsistencyError::DuplicateSideColor {
                side: other,
                other: side,
                color,
            });
        }
        owner[color.index()] = Some(side);
    }
    // six distinct colors over six sides fill every entry
    Ok(owner.map(|side| side.unwrap_or(SideId::U)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_scan(n: usize) -> ScanData {
        (1..=6 * n * n).map(|p| (p, [10, 20, 30])).collect()
    }

    #[test]
    fn test_load_classifies_squares() {
        let cube = CubeState::load(&uniform_scan(3)).unwrap();
        assert_eq!(cube.size().get(), 3);
        assert_eq!(cube.facelets().len(), 54);
        assert_eq!(cube.facelet(1).unwrap().kind, FaceletKind::Corner);
        assert_eq!(cube.facelet(2).unwrap().kind, FaceletKind::Edge);
        assert_eq!(cube.facelet(5).unwrap().kind, FaceletKind::Center);
        assert_eq!(cube.facelet(10).unwrap().side, SideId::L);
        assert!(cube.facelet(0).is_none());
        assert!(cube.facelet(55).is_none());
    }

    #[test]
    fn test_load_missing_position() {
        let mut scan: ScanData = (2..=54).map(|p| (p, [0, 0, 0])).collect();
        scan.insert(99, [0, 0, 0]);
        assert_eq!(
            CubeState::load(&scan).unwrap_err(),
            ConfigurationError::MissingPosition { position: 1 }
        );
    }

    #[test]
    fn test_assign_is_idempotent_but_never_changes() {
        let mut cube = CubeState::load(&uniform_scan(2)).unwrap();
        cube.assign(3, ColorName::Red).unwrap();
        cube.assign(3, ColorName::Red).unwrap();
        assert_eq!(
            cube.assign(3, ColorName::Orange),
            Err(ConsistencyError::ConflictingAssignment {
                position: 3,
                existing: ColorName::Red,
                requested: ColorName::Orange,
            })
        );
        assert_eq!(cube.facelet(3).unwrap().color(), Some(ColorName::Red));
        assert_eq!(cube.resolved_count(), 1);
    }

    #[test]
    fn test_assign_all_writes_nothing_on_conflict() {
        let mut cube = CubeState::load(&uniform_scan(2)).unwrap();
        cube.assign(18, ColorName::Blue).unwrap();

        let result = cube.assign_all(&[
            (1, ColorName::White),
            (5, ColorName::Orange),
            (18, ColorName::Green),
        ]);
        assert_eq!(
            result,
            Err(ConsistencyError::ConflictingAssignment {
                position: 18,
                existing: ColorName::Blue,
                requested: ColorName::Green,
            })
        );
        assert_eq!(cube.facelet(1).unwrap().color(), None);
        assert_eq!(cube.facelet(5).unwrap().color(), None);
        assert_eq!(cube.resolved_count(), 1);

        cube.assign_all(&[(1, ColorName::White), (18, ColorName::Blue)])
            .unwrap();
        assert_eq!(cube.resolved_count(), 2);
    }

    fn anchors() -> [Anchor; 6] {
        ColorName::ALL.map(|name| Anchor {
            position: name.index() + 1,
            name,
            rgb: [0, 0, 0],
            lab: Lab::new(0.0, 0.0, 0.0),
        })
    }

    #[test]
    fn test_resolved_cube_rejects_unresolved() {
        let cube = CubeState::load(&uniform_scan(2)).unwrap();
        let result = ResolvedCube::new(
            cube,
            ColorName::ALL,
            anchors(),
            ResolutionReport::default(),
        );
        assert!(matches!(
            result,
            Err(ConsistencyError::UnresolvedSquare { position: 1 })
        ));
    }

    #[test]
    fn test_resolved_cube_rejects_duplicate_side_colors() {
        let mut cube = CubeState::load(&uniform_scan(2)).unwrap();
        for p in 1..=24 {
            cube.assign(p, ColorName::White).unwrap();
        }
        let mut sides = ColorName::ALL;
        sides[5] = ColorName::White;
        let result = ResolvedCube::new(cube, sides, anchors(), ResolutionReport::default());
        assert_eq!(
            result.unwrap_err(),
            ConsistencyError::DuplicateSideColor {
                side: SideId::U,
                other: SideId::D,
                color: ColorName::White,
            }
        );
    }
}
