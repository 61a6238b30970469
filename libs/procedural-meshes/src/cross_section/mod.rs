//! # Cross-Section Cache
//!
//! Unit-circle samples shared by every segment of a cylinder strip.
//!
//! The circle lies in the XY plane. For `n` radial segments the cache holds
//! `n + 2` points at angle step `2π / n`; the two extra samples let quad `k`
//! read points `k + 1` and `k + 2` without wrapping.

use crate::math::Vec3;
use config::constants::{CROSS_SECTION_LOOKAHEAD, MIN_RADIAL_SEGMENTS};
use std::f64::consts::TAU;
use tracing::{debug, warn};

/// Memoized cross-section points for the most recently requested segment count.
///
/// Each shape instance owns its own cache.
///
/// # Example
///
/// ```rust
/// use procedural_meshes::cross_section::CrossSectionCache;
///
/// let mut cache = CrossSectionCache::new();
/// cache.ensure(8);
/// let generation = cache.generation();
///
/// cache.ensure(8); // same count, nothing recomputed
/// assert_eq!(cache.generation(), generation);
/// assert_eq!(cache.points().len(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrossSectionCache {
    points: Vec<Vec3>,
    segment_count: Option<u32>,
    generation: u64,
}

impl CrossSectionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the cache consistent with `segment_count` and returns its points.
    ///
    /// Recomputes only when the count differs from the last request. Counts
    /// below 3 leave the cache empty.
    pub fn ensure(&mut self, segment_count: u32) -> &[Vec3] {
        if self.segment_count == Some(segment_count) {
            return &self.points;
        }

        self.points.clear();
        if segment_count < MIN_RADIAL_SEGMENTS {
            warn!(
                segment_count,
                "cross-section needs at least {MIN_RADIAL_SEGMENTS} segments, leaving it empty"
            );
        } else {
            let step = TAU / f64::from(segment_count);
            let sample_count = segment_count as usize + CROSS_SECTION_LOOKAHEAD;
            self.points.extend((0..sample_count).map(|i| {
                let (sin, cos) = (i as f64 * step).sin_cos();
                Vec3::new(cos, sin, 0.0)
            }));
        }

        self.segment_count = Some(segment_count);
        self.generation += 1;
        debug!(
            segment_count,
            generation = self.generation,
            "recomputed cross-section"
        );
        &self.points
    }

    /// Cached points, `segment_count + 2` of them (or none).
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Segment count the cache was last computed for.
    pub fn segment_count(&self) -> Option<u32> {
        self.segment_count
    }

    /// Incremented every time the points are recomputed.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
