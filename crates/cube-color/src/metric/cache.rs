use std::collections::HashMap;

use super::ciede2000::ciede2000;
use crate::color::Lab;

type PairKey = ([u64; 3], [u64; 3]);

/// Memoized CIEDE2000 distances for one resolution run.
///
/// Entries are keyed on the unordered pair of Lab bit patterns, so
/// `distance(a, b)` and `distance(b, a)` share one entry and always return
/// the identical value. The cache is owned by whoever drives a run and is
/// dropped with it; nothing is shared between runs.
#[derive(Debug, Default)]
pub struct DistanceCache {
    entries: HashMap<PairKey, f64>,
    hits: u64,
    misses: u64,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// CIEDE2000 between `a` and `b`, computed at most once per pair.
    ///
    /// ```
    /// use cube_color::{DistanceCache, Lab};
    ///
    /// let mut cache = DistanceCache::new();
    /// let a = Lab::from_bytes([104, 4, 2]);
    /// let b = Lab::from_bytes([148, 53, 9]);
    /// let first = cache.distance(a, b);
    /// assert_eq!(cache.distance(b, a), first);
    /// assert_eq!(cache.hits(), 1);
    /// ```
    pub fn distance(&mut self, a: Lab, b: Lab) -> f64 {
        let (ka, kb) = (a.key(), b.key());
        if ka == kb {
            return 0.0;
        }
        let (key, first, second) = if ka < kb {
            ((ka, kb), a, b)
        } else {
            ((kb, ka), b, a)
        };

        if let Some(&cached) = self.entries.get(&key) {
            self.hits += 1;
            return cached;
        }
        self.misses += 1;
        let value = ciede2000(first, second);
        self.entries.insert(key, value);
        value
    }

    /// Number of distinct pairs stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
