//! Grouping scanned colors.
//!
//! [`Clusterer`] is the seam for unsupervised grouping; [`KMeans`] is the
//! default. [`partition_around_anchors`] is the supervised variant used for
//! center squares, where each group is seeded by a known anchor.

use cube_color::{DistanceCache, Lab};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ClusteringConfig;

/// Partitions colors into `k` groups.
pub trait Clusterer {
    /// Returns exactly `k` groups of indices into `points`. Every point lands
    /// in one group; groups may be empty.
    fn cluster(&self, points: &[Lab], k: usize) -> Vec<Vec<usize>>;
}

/// k-means with k-means++ seeding over squared Lab distance.
///
/// Runs `restarts` independent seedings, the i-th seeded from `seed + i`, and
/// keeps the partition with the lowest within-cluster sum of squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KMeans {
    seed: u64,
    max_iterations: usize,
    restarts: usize,
}

impl KMeans {
    pub const DEFAULT_RESTARTS: usize = 10;

    pub fn new(seed: u64, max_iterations: usize) -> Self {
        Self {
            seed,
            max_iterations,
            restarts: Self::DEFAULT_RESTARTS,
        }
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn from_config(config: &ClusteringConfig) -> Self {
        if config.max_iterations == 0 {
            tracing::warn!("clustering.max_iterations is 0, running a single assignment pass");
        }
        if config.restarts == 0 {
            tracing::warn!("clustering.restarts is 0, running a single seeding");
        }
        Self::new(config.seed, config.max_iterations).with_restarts(config.restarts)
    }

    fn seed_centroids(&self, points: &[Lab], k: usize, rng: &mut StdRng) -> Vec<Lab> {
        let mut chosen = vec![rng.gen_range(0..points.len())];

        while chosen.len() < k.min(points.len()) {
            let weights: Vec<f64> = points
                .iter()
                .map(|p| {
                    chosen
                        .iter()
                        .map(|&c| p.distance_squared(points[c]))
                        .fold(f64::INFINITY, f64::min)
                })
                .collect();
            let total: f64 = weights.iter().sum();

            let mut pick = None;
            if total > 0.0 {
                let mut target = rng.gen::<f64>() * total;
                for (i, &w) in weights.iter().enumerate() {
                    if w > 0.0 {
                        pick = Some(i);
                        if target < w {
                            break;
                        }
                        target -= w;
                    }
                }
            }
            // All remaining points coincide with a centroid
            let pick = pick.or_else(|| (0..points.len()).find(|i| !chosen.contains(i)));

            match pick {
                Some(i) => chosen.push(i),
                None => break,
            }
        }

        chosen.into_iter().map(|i| points[i]).collect()
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self::from_config(&ClusteringConfig::default())
    }
}

fn nearest(centroids: &[Lab], point: Lab) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = point.distance_squared(*c);
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}

impl KMeans {
    /// One seeding plus Lloyd iterations. Returns the assignment and its
    /// within-cluster sum of squares.
    fn run_once(&self, points: &[Lab], k: usize, rng: &mut StdRng) -> (Vec<usize>, f64) {
        let mut centroids = self.seed_centroids(points, k, rng);
        let mut assignment = vec![usize::MAX; points.len()];

        for _ in 0..self.max_iterations.max(1) {
            let mut changed = false;
            for (slot, point) in assignment.iter_mut().zip(points) {
                let c = nearest(&centroids, *point);
                if *slot != c {
                    *slot = c;
                    changed = true;
                }
            }
            if !changed {
                break;
            }

            let mut sums = vec![(0.0, 0.0, 0.0, 0usize); centroids.len()];
            for (&c, point) in assignment.iter().zip(points) {
                let s = &mut sums[c];
                s.0 += point.l;
                s.1 += point.a;
                s.2 += point.b;
                s.3 += 1;
            }
            for (centroid, &(l, a, b, n)) in centroids.iter_mut().zip(&sums) {
                if n > 0 {
                    let n = n as f64;
                    *centroid = Lab::new(l / n, a / n, b / n);
                }
            }
        }

        let inertia = assignment
            .iter()
            .zip(points)
            .map(|(&c, point)| point.distance_squared(centroids[c]))
            .sum();
        (assignment, inertia)
    }
}

impl Clusterer for KMeans {
    fn cluster(&self, points: &[Lab], k: usize) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); k];
        if points.is_empty() || k == 0 {
            return groups;
        }

        let mut best: Option<(Vec<usize>, f64)> = None;
        for run in 0..self.restarts.max(1) {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(run as u64));
            let (assignment, inertia) = self.run_once(points, k, &mut rng);
            tracing::trace!(run, inertia, "k-means run finished");
            if best.as_ref().map_or(true, |(_, lowest)| inertia < *lowest) {
                best = Some((assignment, inertia));
            }
        }

        if let Some((assignment, inertia)) = best {
            tracing::trace!(points = points.len(), k, inertia, "k-means finished");
            for (i, &c) in assignment.iter().enumerate() {
                groups[c].push(i);
            }
        }
        groups
    }
}

/// Assign every point to an anchor, closest pairs first, with at most
/// `capacity` points per anchor.
///
/// All (distance, point, anchor) triples are ranked by CIEDE2000 and taken
/// greedily; ties break on point index then anchor index. Returns one group
/// of point indices per anchor.
pub fn partition_around_anchors(
    anchors: &[Lab],
    points: &[Lab],
    capacity: usize,
    cache: &mut DistanceCache,
) -> Vec<Vec<usize>> {
    let mut candidates = Vec::with_capacity(anchors.len() * points.len());
    for (p, &point) in points.iter().enumerate() {
        for (a, &anchor) in anchors.iter().enumerate() {
            candidates.push((cache.distance(point, anchor), p, a));
        }
    }
    candidates.sort_by(|x, y| {
        x.0.total_cmp(&y.0)
            .then(x.1.cmp(&y.1))
            .then(x.2.cmp(&y.2))
    });

    let mut groups = vec![Vec::new(); anchors.len()];
    let mut placed = vec![false; points.len()];
    for (_, p, a) in candidates {
        if placed[p] || groups[a].len() >= capacity {
            continue;
        }
        groups[a].push(p);
        placed[p] = true;
    }
    groups
}
