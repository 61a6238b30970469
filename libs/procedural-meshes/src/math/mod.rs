//! Vector math shared by the generators.
//!
//! Thin layer over `glam` f64 types. Rotations follow the host convention of
//! X forward, Y right, Z up, with angles in degrees.

pub use glam::{DQuat as Quat, DVec2 as Vec2, DVec3 as Vec3};

/// Pitch/yaw/roll orientation in degrees.
///
/// Positive pitch lifts the forward axis (+X) toward +Z, positive yaw turns
/// it toward +Y, and positive roll turns +Y toward -Z. When converted to a
/// quaternion roll is applied first, then pitch, then yaw.
///
/// # Examples
/// ```
/// use procedural_meshes::math::{Rotator, Vec3};
///
/// let r = Rotator::from_direction(Vec3::new(0.0, 0.0, 1.0));
/// assert!((r.pitch - 90.0).abs() < 1e-9);
/// assert_eq!(r.yaw, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotator {
    /// Rotation about the right axis (Y), in degrees
    pub pitch: f64,
    /// Rotation about the up axis (Z), in degrees
    pub yaw: f64,
    /// Rotation about the forward axis (X), in degrees
    pub roll: f64,
}

impl Rotator {
    /// Creates a rotator from pitch, yaw, and roll in degrees.
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Returns the rotator that turns +X onto `direction`, with zero roll.
    ///
    /// A zero vector yields the identity rotator.
    pub fn from_direction(direction: Vec3) -> Self {
        let yaw = direction.y.atan2(direction.x).to_degrees();
        let horizontal = direction.x.hypot(direction.y);
        let pitch = direction.z.atan2(horizontal).to_degrees();
        Self::new(pitch, yaw, 0.0)
    }

    /// Returns a copy with the given deltas added component-wise.
    pub fn add(self, delta_pitch: f64, delta_yaw: f64, delta_roll: f64) -> Self {
        Self::new(
            self.pitch + delta_pitch,
            self.yaw + delta_yaw,
            self.roll + delta_roll,
        )
    }

    /// Converts to a quaternion (roll, then pitch, then yaw).
    ///
    /// glam rotates counter-clockwise about each axis, so pitch and roll are
    /// negated to keep the host's sign convention.
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_z(self.yaw.to_radians())
            * Quat::from_rotation_y(-self.pitch.to_radians())
            * Quat::from_rotation_x(-self.roll.to_radians())
    }
}

/// Rotates `point` about `pivot`.
///
/// # Examples
/// ```
/// use procedural_meshes::math::{rotate_point_around_pivot, Rotator, Vec3};
///
/// let quarter_turn = Rotator::new(0.0, 90.0, 0.0).to_quat();
/// let p = rotate_point_around_pivot(Vec3::new(2.0, 0.0, 0.0), Vec3::X, quarter_turn);
/// assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-12);
/// ```
pub fn rotate_point_around_pivot(point: Vec3, pivot: Vec3, rotation: Quat) -> Vec3 {
    rotation * (point - pivot) + pivot
}

/// Normalizes `v`, or returns zero when its squared length is below `tolerance`.
///
/// Meant for inputs whose scale the caller controls, such as a segment
/// direction. Face normals use [`quad_normal`] instead.
pub fn safe_normal(v: Vec3, tolerance: f64) -> Vec3 {
    let length_squared = v.length_squared();
    if length_squared < tolerance {
        return Vec3::ZERO;
    }
    v / length_squared.sqrt()
}

/// Flat normal of the quad swept from edge `a`→`b` along `offset`.
///
/// With the far corner `c = b + offset` this is `cross(a - c, b - c)`,
/// normalized. The result is zero only when the cross product is exactly
/// zero, so thin or tiny quads keep a unit normal.
pub fn quad_normal(a: Vec3, b: Vec3, offset: Vec3) -> Vec3 {
    let far = b + offset;
    (a - far).cross(b - far).normalize_or_zero()
}

/// Normalized average of two normals; zero for exactly opposite inputs.
pub fn blend_normals(a: Vec3, b: Vec3) -> Vec3 {
    ((a + b) / 2.0).normalize_or_zero()
}
