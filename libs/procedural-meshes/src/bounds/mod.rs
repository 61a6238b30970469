//! # Bounds
//!
//! Axis-aligned bounding boxes derived from shape parameters rather than by
//! scanning generated vertices.

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box given by its min and max corners.
///
/// # Example
///
/// ```rust
/// use procedural_meshes::bounds::Aabb;
/// use glam::DVec3;
///
/// let b = Aabb::from_half_extent(DVec3::splat(1.0));
/// assert_eq!(b.size(), DVec3::splat(2.0));
/// assert!(b.contains(DVec3::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box centered at the origin.
    pub fn from_half_extent(half_extent: Vec3) -> Self {
        Self::new(-half_extent, half_extent)
    }

    /// Grows the box by `amount` on every side.
    pub fn expand(self, amount: f64) -> Self {
        Self::new(self.min - Vec3::splat(amount), self.max + Vec3::splat(amount))
    }

    /// Returns true if `point` lies inside or on the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// How strip bounds are seeded before scanning the control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
    /// Min and max start at the origin, so the box always contains it even
    /// when every control point lies far away.
    OriginAnchored,
    /// Min and max start at the first control point.
    #[default]
    Tight,
}

/// Bounds of a cube of the given full size, centered at the origin.
pub fn cube_bounds(size: Vec3) -> Aabb {
    Aabb::from_half_extent(size / 2.0)
}

/// Bounds of a cylinder strip: the control polyline's box padded by `radius`.
///
/// # Example
///
/// ```rust
/// use procedural_meshes::bounds::{strip_bounds, BoundsMode};
/// use glam::DVec3;
///
/// let points = [DVec3::new(5.0, 5.0, 5.0), DVec3::new(5.0, 5.0, 15.0)];
///
/// let tight = strip_bounds(&points, 1.0, BoundsMode::Tight);
/// assert_eq!(tight.min, DVec3::new(4.0, 4.0, 4.0));
///
/// let anchored = strip_bounds(&points, 1.0, BoundsMode::OriginAnchored);
/// assert_eq!(anchored.min, DVec3::splat(-1.0));
/// ```
pub fn strip_bounds(points: &[Vec3], radius: f64, mode: BoundsMode) -> Aabb {
    let seed = match mode {
        BoundsMode::OriginAnchored => Vec3::ZERO,
        BoundsMode::Tight => points.first().copied().unwrap_or(Vec3::ZERO),
    };

    let (min, max) = points
        .iter()
        .fold((seed, seed), |(min, max), p| (min.min(*p), max.max(*p)));

    Aabb::new(min, max).expand(radius)
}
