//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use rubiks_color_resolver::models::SideId;
use rubiks_color_resolver::ResolvedCube;

/// Every committed slot was at least as confident as any slot it beat.
pub fn assert_confidence_ordering(cube: &ResolvedCube) {
    for step in &cube.report().steps {
        if let Some(competing) = step.competing_margin {
            assert!(
                step.margin >= competing,
                "{} committed with margin {} below competing {}",
                step.slot,
                step.margin,
                competing
            );
        }
    }
}

/// Structural invariants that hold for any successful resolution.
pub fn assert_well_formed(cube: &ResolvedCube) {
    let n = cube.size().get();
    assert_eq!(cube.colors().len(), 6 * n * n);

    // every color appears exactly N² times
    for side in SideId::ALL {
        let color = cube.side_color(side);
        let count = cube.colors().iter().filter(|&&c| c == color).count();
        assert_eq!(count, n * n, "color {color} appears {count} times");
    }

    // every pool was used up exactly
    assert_eq!(cube.report().leftover_combinations, 0);
    let slots = cube.topology().edges().len() + cube.topology().corners().len();
    assert_eq!(cube.report().steps.len(), slots);

    assert_confidence_ordering(cube);
}

/// Slot colors are all distinct and no two are opposite colors.
pub fn assert_legal_pieces(cube: &ResolvedCube) {
    let topology = cube.topology();
    let pieces = topology
        .edges()
        .iter()
        .map(|slot| slot.positions.to_vec())
        .chain(topology.corners().iter().map(|slot| slot.positions.to_vec()));
    for positions in pieces {
        let colors: Vec<_> = positions
            .iter()
            .filter_map(|&p| cube.color_of(p))
            .collect();
        assert_eq!(colors.len(), positions.len());
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert!(a != b, "piece {positions:?} repeats {a}");
                assert!(a.opposite() != *b, "piece {positions:?} holds opposites {a} and {b}");
            }
        }
    }
}
