//! Anchor discovery, naming and center propagation.
//!
//! Anchors are six squares, one per color, whose colors fix the cube's frame.
//! On odd cubes they are the fixed middle centers. Even cubes have no fixed
//! centers, so the anchors come from two corner pieces: a reference corner in
//! a known slot, plus whichever corner holds the three colors the reference
//! corner lacks.

use std::collections::HashMap;

use cube_color::{ColorName, DistanceCache, Lab, ReferencePalette};

use super::clustering::{partition_around_anchors, Clusterer};
use super::permutations::permutations;
use crate::error::{ConsistencyError, TopologyError};
use crate::models::cube::invert_side_colors;
use crate::models::{Anchor, CubeState, SideId};

/// Positions of the six anchor squares.
///
/// Odd cubes: the middle center of each side, in scan order. Even cubes: the
/// reference corner (L, F, U) followed by the opposite corner's squares in
/// slot order.
pub fn discover(cube: &CubeState, clusterer: &dyn Clusterer) -> Result<[usize; 6], TopologyError> {
    let topology = cube.topology();

    if topology.size().is_odd() {
        return Ok(SideId::ALL.map(|side| {
            let geometry = topology.side(side);
            geometry.mid.unwrap_or(geometry.first)
        }));
    }

    let corner_positions: Vec<usize> = topology
        .corners()
        .iter()
        .flat_map(|slot| slot.positions)
        .collect();
    let labs: Vec<Lab> = corner_positions.iter().map(|&p| cube.lab(p)).collect();

    let groups = clusterer.cluster(&labs, 6);
    let mut group_of = HashMap::with_capacity(corner_positions.len());
    for (g, members) in groups.iter().enumerate() {
        for &i in members {
            group_of.insert(corner_positions[i], g);
        }
    }

    let reference = topology.reference_corner();
    let anchored: Vec<usize> = reference
        .iter()
        .filter_map(|p| group_of.get(p).copied())
        .collect();
    let free: Vec<usize> = groups
        .iter()
        .enumerate()
        .filter(|(g, members)| !members.is_empty() && !anchored.contains(g))
        .map(|(g, _)| g)
        .collect();

    tracing::debug!(?reference, ?free, "Clustered corner squares");

    if free.len() != 3 {
        return Err(TopologyError::AnchorClusters { found: free.len() });
    }

    let opposite = topology
        .corners()
        .iter()
        .find(|slot| {
            let mut seen: Vec<usize> = slot
                .positions
                .iter()
                .filter_map(|p| group_of.get(p).copied())
                .collect();
            seen.sort_unstable();
            seen.dedup();
            seen.len() == 3 && seen.iter().all(|g| free.contains(g))
        })
        .ok_or(TopologyError::FinalAnchorsNotFound)?;

    Ok([
        reference[0],
        reference[1],
        reference[2],
        opposite.positions[0],
        opposite.positions[1],
        opposite.positions[2],
    ])
}

/// Give each anchor a distinct color name.
///
/// All 720 assignments of names to anchors are scored by summed CIEDE2000
/// against the palette; the first strictly lowest total wins.
pub fn name(
    cube: &CubeState,
    positions: [usize; 6],
    palette: &ReferencePalette,
    cache: &mut DistanceCache,
) -> [Anchor; 6] {
    let labs = positions.map(|p| cube.lab(p));

    let mut best: Option<(f64, Vec<usize>)> = None;
    for order in permutations(6) {
        let mut total = 0.0;
        for (lab, &color) in labs.iter().zip(&order) {
            total += cache.distance(*lab, palette.lab(ColorName::ALL[color]));
        }
        if best.as_ref().map_or(true, |(score, _)| total < *score) {
            best = Some((total, order));
        }
    }

    let order = best.map(|(_, order)| order).unwrap_or_else(|| (0..6).collect());
    let anchors: [Anchor; 6] = std::array::from_fn(|i| {
        let position = positions[i];
        Anchor {
            position,
            name: ColorName::ALL[order[i]],
            rgb: cube.facelet(position).map_or([0, 0, 0], |f| f.rgb),
            lab: labs[i],
        }
    });

    tracing::debug!(
        anchors = ?anchors.iter().map(|a| (a.position, a.name.code())).collect::<Vec<_>>(),
        "Named anchors"
    );
    anchors
}

/// Label the anchor squares themselves.
pub fn bind(cube: &mut CubeState, anchors: &[Anchor; 6]) -> Result<(), ConsistencyError> {
    for anchor in anchors {
        cube.assign(anchor.position, anchor.name)?;
    }
    Ok(())
}

/// Label every non-anchor center square, one center family at a time.
///
/// Each family holds the same number of squares of every color, so each
/// anchor accepts at most a sixth of the family. Returns the number of
/// squares labeled.
pub fn propagate_centers(
    cube: &mut CubeState,
    anchors: &[Anchor; 6],
    cache: &mut DistanceCache,
) -> Result<usize, ConsistencyError> {
    let anchor_labs = anchors.map(|a| a.lab);
    let anchor_positions = anchors.map(|a| a.position);
    let mut labeled = 0;

    for family in cube.size().center_families() {
        let members: Vec<usize> = SideId::ALL
            .iter()
            .flat_map(|&side| {
                let centers = &cube.topology().side(side).centers;
                family.indices.iter().map(move |&i| centers[i])
            })
            .filter(|p| !anchor_positions.contains(p))
            .collect();
        let labs: Vec<Lab> = members.iter().map(|&p| cube.lab(p)).collect();
        let capacity = members.len().div_ceil(anchors.len());

        let groups = partition_around_anchors(&anchor_labs, &labs, capacity, cache);
        for (anchor, group) in anchors.iter().zip(&groups) {
            for &i in group {
                cube.assign(members[i], anchor.name)?;
                labeled += 1;
            }
        }

        tracing::debug!(family = family.name, squares = members.len(), "Propagated centers");
    }

    Ok(labeled)
}

/// The cube's frame: the color each side carries on the solved cube these
/// anchors describe, indexed by [`SideId::ordinal`].
///
/// Odd cubes read it off the middle centers. Even cubes take U, F and L from
/// the reference corner and give D, B and R the opposite colors. The frame
/// fixes which pairs and triples are legal; final side labels come from
/// [`side_colors`](super::projection::side_colors).
pub fn frame(
    cube: &CubeState,
    anchors: &[Anchor; 6],
) -> Result<[ColorName; 6], ConsistencyError> {
    let topology = cube.topology();

    let colors = if topology.size().is_odd() {
        let mut colors = [ColorName::White; 6];
        for side in SideId::ALL {
            let geometry = topology.side(side);
            let position = geometry.mid.unwrap_or(geometry.first);
            colors[side.ordinal()] = cube
                .facelet(position)
                .and_then(|f| f.color())
                .ok_or(ConsistencyError::UnresolvedSquare { position })?;
        }
        colors
    } else {
        let (l, f, u) = (anchors[0].name, anchors[1].name, anchors[2].name);
        let mut colors = [ColorName::White; 6];
        colors[SideId::U.ordinal()] = u;
        colors[SideId::L.ordinal()] = l;
        colors[SideId::F.ordinal()] = f;
        colors[SideId::R.ordinal()] = l.opposite();
        colors[SideId::B.ordinal()] = f.opposite();
        colors[SideId::D.ordinal()] = u.opposite();
        colors
    };

    invert_side_colors(&colors)?;
    Ok(colors)
}
