//! Perceptual color difference
//!
//! [`ciede2000`] is the raw metric. [`DistanceCache`] memoizes it for the
//! lifetime of one resolution run, since the same pairs get compared many
//! times while slots are scored.

mod cache;
mod ciede2000;

pub use cache::DistanceCache;
pub use ciede2000::ciede2000;
