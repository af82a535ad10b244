//! Scan builders.

use cube_color::{ColorName, DistanceCache, Lab, ReferencePalette};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rubiks_color_resolver::services::Clusterer;
use rubiks_color_resolver::ScanData;

/// Standard color scheme in scan order: U, L, F, R, B, D.
pub const SCHEME: [ColorName; 6] = [
    ColorName::White,
    ColorName::Orange,
    ColorName::Green,
    ColorName::Red,
    ColorName::Blue,
    ColorName::Yellow,
];

/// Scan-order side indices.
pub mod side {
    pub const U: usize = 0;
    pub const L: usize = 1;
    pub const F: usize = 2;
    pub const R: usize = 3;
    pub const B: usize = 4;
    pub const D: usize = 5;
}

/// Sticker color of every position (index = position - 1) on a solved cube.
pub fn solved_layout(n: usize) -> Vec<ColorName> {
    let per_side = n * n;
    (0..6 * per_side).map(|i| SCHEME[i / per_side]).collect()
}

/// Turn the outer U layer a quarter: the top row of F moves to L, R to F,
/// B to R, L to B.
pub fn turn_top_layer(layout: &mut [ColorName], n: usize) {
    let old = layout.to_vec();
    let row_start = |s: usize| s * n * n;
    for (to, from) in [
        (side::L, side::F),
        (side::F, side::R),
        (side::R, side::B),
        (side::B, side::L),
    ] {
        for c in 0..n {
            layout[row_start(to) + c] = old[row_start(from) + c];
        }
    }
}

/// Scan using each color's default swatch verbatim.
pub fn scan_from_layout(layout: &[ColorName]) -> ScanData {
    layout
        .iter()
        .enumerate()
        .map(|(i, color)| (i + 1, color.default_swatch().to_bytes()))
        .collect()
}

pub fn solved_scan(n: usize) -> ScanData {
    scan_from_layout(&solved_layout(n))
}

pub fn turned_scan(n: usize) -> ScanData {
    let mut layout = solved_layout(n);
    turn_top_layer(&mut layout, n);
    scan_from_layout(&layout)
}

/// Add uniform noise of up to `amplitude` to every channel.
pub fn jitter(scan: &ScanData, amplitude: i16, seed: u64) -> ScanData {
    let mut rng = StdRng::seed_from_u64(seed);
    scan.iter()
        .map(|(position, rgb)| {
            let noisy = rgb.map(|v| {
                let delta = rng.gen_range(-amplitude..=amplitude);
                (v as i16 + delta).clamp(0, 255) as u8
            });
            (position, noisy)
        })
        .collect()
}

/// Scale every channel, as a dimmer light would.
pub fn dim(scan: &ScanData, factor: f64) -> ScanData {
    scan.iter()
        .map(|(position, rgb)| {
            let dimmed = rgb.map(|v| (v as f64 * factor).round().clamp(0.0, 255.0) as u8);
            (position, dimmed)
        })
        .collect()
}

fn repeat_label(label: char, count: usize) -> String {
    std::iter::repeat(label).take(count).collect()
}

/// Projection of a solved cube: each of U R F D L B repeated N² times.
pub fn solved_projection(n: usize) -> String {
    "URFDLB"
        .chars()
        .map(|label| repeat_label(label, n * n))
        .collect()
}

/// Projection after [`turn_top_layer`]. Centers, or on even cubes the
/// majority of each side, keep the frame fixed.
pub fn turned_projection(n: usize) -> String {
    let side = |top: char, rest: char| repeat_label(top, n) + &repeat_label(rest, n * n - n);
    [
        repeat_label('U', n * n),
        side('B', 'R'),
        side('R', 'F'),
        repeat_label('D', n * n),
        side('F', 'L'),
        side('L', 'B'),
    ]
    .concat()
}

/// Projection after [`turn_top_layer`] on a 2x2. Every turned side is split
/// two and two, so the frame comes from the reference corner, which moved
/// with the layer.
pub fn turned_projection_2x2() -> String {
    "UUUURRFFFFLLDDDDLLBBBBRR".to_string()
}

/// Groups points by their nearest default swatch. Stands in for k-means
/// where a fully predictable grouping is wanted.
pub struct NearestSwatchClusterer;

impl Clusterer for NearestSwatchClusterer {
    fn cluster(&self, points: &[Lab], k: usize) -> Vec<Vec<usize>> {
        let palette = ReferencePalette::default();
        let mut cache = DistanceCache::new();
        let mut groups = vec![Vec::new(); k];
        for (i, &point) in points.iter().enumerate() {
            let (name, _) = palette.find_nearest(point, &mut cache);
            if let Some(group) = groups.get_mut(name.index()) {
                group.push(i);
            }
        }
        groups
    }
}
