//! Fixed cube geometry: where every square sits and which squares belong to
//! the same physical piece.
//!
//! Squares are numbered from 1 in scan order (U, L, F, R, B, D), row-major
//! within a side. Nothing here depends on colors; a [`Topology`] is computed
//! once per cube size.

use super::SideId;
use crate::error::ConfigurationError;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 6;

/// Edge length N of a supported cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeSize(usize);

impl CubeSize {
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(ConfigurationError::UnsupportedSize { size })
        }
    }

    /// Infer N from the number of scanned squares, which must be 6·N².
    pub fn from_square_count(count: usize) -> Result<Self, ConfigurationError> {
        let unsupported = ConfigurationError::UnsupportedSquareCount { count };
        if count == 0 || count % 6 != 0 {
            return Err(unsupported);
        }
        let per_side = count / 6;
        let size = (per_side as f64).sqrt().round() as usize;
        if size * size != per_side {
            return Err(unsupported);
        }
        Self::new(size)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    pub fn squares_per_side(self) -> usize {
        self.0 * self.0
    }

    pub fn square_count(self) -> usize {
        6 * self.squares_per_side()
    }

    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    /// Number of squares in each edge run between two corners.
    pub fn edge_run_len(self) -> usize {
        self.0 - 2
    }

    /// Number of distinct edge orbits.
    pub fn orbit_count(self) -> usize {
        match self.0 {
            2 => 0,
            3 | 4 => 1,
            _ => 2,
        }
    }

    /// Orbit of the square at `ring` along an edge run.
    ///
    /// Squares the same distance from the nearer corner are interchangeable
    /// under legal moves, so they share an orbit. Only 5x5 and 6x6 have a
    /// second orbit.
    pub fn orbit_of(self, ring: usize) -> usize {
        match (self.0, ring) {
            (5, 1) => 1,
            (6, 1 | 2) => 1,
            _ => 0,
        }
    }

    /// Center families: indices into a side's interior that can only be
    /// permuted among themselves.
    pub fn center_families(self) -> &'static [CenterFamily] {
        match self.0 {
            4 => FAMILIES_4,
            5 => FAMILIES_5,
            6 => FAMILIES_6,
            _ => &[],
        }
    }
}

/// A set of interior positions (per side) forming one center orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterFamily {
    pub name: &'static str,
    pub indices: &'static [usize],
}

const FAMILIES_4: &[CenterFamily] = &[CenterFamily {
    name: "centers",
    indices: &[0, 1, 2, 3],
}];

const FAMILIES_5: &[CenterFamily] = &[
    CenterFamily {
        name: "t-centers",
        indices: &[1, 3, 5, 7],
    },
    CenterFamily {
        name: "x-centers",
        indices: &[0, 2, 6, 8],
    },
];

const FAMILIES_6: &[CenterFamily] = &[
    CenterFamily {
        name: "inner x-centers",
        indices: &[5, 6, 9, 10],
    },
    CenterFamily {
        name: "outer x-centers",
        indices: &[0, 3, 12, 15],
    },
    CenterFamily {
        name: "left obliques",
        indices: &[1, 7, 8, 14],
    },
    CenterFamily {
        name: "right obliques",
        indices: &[2, 4, 11, 13],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceletKind {
    Corner,
    Edge,
    Center,
}

/// One of the four runs of edge squares bordering a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRun {
    North,
    South,
    West,
    East,
}

/// Positions of the squares on one side, grouped by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideGeometry {
    pub side: SideId,
    pub first: usize,
    pub last: usize,
    /// Top-left, top-right, bottom-left, bottom-right.
    pub corners: [usize; 4],
    pub north: Vec<usize>,
    pub south: Vec<usize>,
    pub west: Vec<usize>,
    pub east: Vec<usize>,
    /// Interior squares, row-major. Includes `mid` on odd cubes.
    pub centers: Vec<usize>,
    pub mid: Option<usize>,
}

impl SideGeometry {
    pub fn new(size: CubeSize, side: SideId) -> Self {
        let n = size.get();
        let first = side.ordinal() * n * n + 1;
        let last = first + n * n - 1;
        let inner = 1..n - 1;

        Self {
            side,
            first,
            last,
            corners: [first, first + n - 1, last - n + 1, last],
            north: inner.clone().map(|c| first + c).collect(),
            south: inner.clone().map(|c| first + (n - 1) * n + c).collect(),
            west: inner.clone().map(|r| first + r * n).collect(),
            east: inner.clone().map(|r| first + r * n + n - 1).collect(),
            centers: inner
                .clone()
                .flat_map(|r| inner.clone().map(move |c| first + r * n + c))
                .collect(),
            mid: size.is_odd().then(|| first + (n * n - 1) / 2),
        }
    }

    pub fn contains(&self, position: usize) -> bool {
        (self.first..=self.last).contains(&position)
    }

    pub fn run(&self, run: EdgeRun) -> &[usize] {
        match run {
            EdgeRun::North => &self.north,
            EdgeRun::South => &self.south,
            EdgeRun::West => &self.west,
            EdgeRun::East => &self.east,
        }
    }

    /// Row-major positions of the whole side.
    pub fn positions(&self) -> std::ops::RangeInclusive<usize> {
        self.first..=self.last
    }

    pub fn kind_of(&self, position: usize) -> Option<FaceletKind> {
        if !self.contains(position) {
            return None;
        }
        if self.corners.contains(&position) {
            Some(FaceletKind::Corner)
        } else if self.centers.contains(&position) {
            Some(FaceletKind::Center)
        } else {
            Some(FaceletKind::Edge)
        }
    }
}

/// Two squares on the same edge piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSlot {
    pub positions: [usize; 2],
    pub sides: [SideId; 2],
    /// Index along the first run, 0 nearest its start corner.
    pub ring: usize,
    pub orbit: usize,
}

impl EdgeSlot {
    pub fn label(&self) -> String {
        format!(
            "edge {}{}-{}{}",
            self.sides[0], self.positions[0], self.sides[1], self.positions[1]
        )
    }
}

/// Three squares on the same corner piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerSlot {
    pub positions: [usize; 3],
    pub sides: [SideId; 3],
}

impl CornerSlot {
    pub fn label(&self) -> String {
        format!(
            "corner {}{}-{}{}-{}{}",
            self.sides[0],
            self.positions[0],
            self.sides[1],
            self.positions[1],
            self.sides[2],
            self.positions[2]
        )
    }
}

use EdgeRun::{East, North, South, West};
use SideId::{B, D, F, L, R, U};

/// (side, corner index) for each of the eight corner pieces.
const CORNERS: [[(SideId, usize); 3]; 8] = [
    [(U, 0), (L, 0), (B, 1)],
    [(U, 1), (B, 0), (R, 1)],
    [(U, 2), (F, 0), (L, 1)],
    [(U, 3), (R, 0), (F, 1)],
    [(D, 0), (L, 3), (F, 2)],
    [(D, 1), (F, 3), (R, 2)],
    [(D, 2), (B, 3), (L, 2)],
    [(D, 3), (R, 3), (B, 2)],
];

/// The corner whose squares fix U, F and L on even cubes, listed L, F, U.
pub const REFERENCE_CORNER: [(SideId, usize); 3] = [(L, 1), (F, 0), (U, 2)];

/// Paired edge runs. `true` means the run is read back to front so that
/// index i on both runs lands on the same piece.
const EDGES: [((SideId, EdgeRun, bool), (SideId, EdgeRun, bool)); 12] = [
    ((U, North, false), (B, North, true)),
    ((U, West, false), (L, North, false)),
    ((U, South, false), (F, North, false)),
    ((U, East, false), (R, North, true)),
    ((F, West, false), (L, East, false)),
    ((F, East, false), (R, West, false)),
    ((F, South, false), (D, North, false)),
    ((L, West, false), (B, East, false)),
    ((L, South, false), (D, West, true)),
    ((R, South, false), (D, East, false)),
    ((R, East, false), (B, West, false)),
    ((B, South, true), (D, South, false)),
];

/// Complete geometry for one cube size.
#[derive(Debug, Clone)]
pub struct Topology {
    size: CubeSize,
    sides: Vec<SideGeometry>,
    edges: Vec<EdgeSlot>,
    corners: Vec<CornerSlot>,
}

impl Topology {
    pub fn new(size: CubeSize) -> Self {
        let sides: Vec<SideGeometry> = SideId::ALL
            .iter()
            .map(|&side| SideGeometry::new(size, side))
            .collect();

        let corners = CORNERS
            .iter()
            .map(|slot| CornerSlot {
                positions: slot.map(|(side, i)| sides[side.ordinal()].corners[i]),
                sides: slot.map(|(side, _)| side),
            })
            .collect();

        let mut edges = Vec::with_capacity(12 * size.edge_run_len());
        for &((side_a, run_a, rev_a), (side_b, run_b, rev_b)) in &EDGES {
            let a = oriented(sides[side_a.ordinal()].run(run_a), rev_a);
            let b = oriented(sides[side_b.ordinal()].run(run_b), rev_b);
            for (ring, (pa, pb)) in a.into_iter().zip(b).enumerate() {
                edges.push(EdgeSlot {
                    positions: [pa, pb],
                    sides: [side_a, side_b],
                    ring,
                    orbit: size.orbit_of(ring),
                });
            }
        }

        Self {
            size,
            sides,
            edges,
            corners,
        }
    }

    pub fn size(&self) -> CubeSize {
        self.size
    }

    pub fn side(&self, side: SideId) -> &SideGeometry {
        &self.sides[side.ordinal()]
    }

    pub fn sides(&self) -> &[SideGeometry] {
        &self.sides
    }

    pub fn side_of(&self, position: usize) -> Option<SideId> {
        if position == 0 {
            return None;
        }
        SideId::ALL
            .get((position - 1) / self.size.squares_per_side())
            .copied()
    }

    pub fn kind_of(&self, position: usize) -> Option<FaceletKind> {
        self.side_of(position)
            .and_then(|side| self.side(side).kind_of(position))
    }

    pub fn edges(&self) -> &[EdgeSlot] {
        &self.edges
    }

    pub fn edges_in_orbit(&self, orbit: usize) -> impl Iterator<Item = &EdgeSlot> {
        self.edges.iter().filter(move |slot| slot.orbit == orbit)
    }

    pub fn corners(&self) -> &[CornerSlot] {
        &self.corners
    }

    /// Positions of the reference corner squares, in L, F, U order.
    pub fn reference_corner(&self) -> [usize; 3] {
        REFERENCE_CORNER.map(|(side, i)| self.side(side).corners[i])
    }
}

fn oriented(run: &[usize], reversed: bool) -> Vec<usize> {
    if reversed {
        run.iter().rev().copied().collect()
    } else {
        run.to_vec()
    }
}
