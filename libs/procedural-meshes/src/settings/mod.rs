//! Generator configuration building on the shared `config` crate.
//!
//! The module wraps the workspace [`GeneratorConfig`] together with the
//! bounds policy so a host can store one serializable settings value.

use crate::bounds::BoundsMode;
use crate::error::MeshResult;
use crate::math::Vec3;
use crate::primitives::cylinder_strip::StripParams;
use config::constants::{GeneratorConfig, DEFAULT_RADIAL_SEGMENTS, EPSILON_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Mesh generator configuration.
///
/// # Examples
/// ```
/// use procedural_meshes::settings::MeshConfig;
/// let cfg = MeshConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Squared length below which a segment or direction counts as zero.
    pub tolerance: f64,
    /// Radial segment count for strips that do not set their own.
    pub default_radial_segments: u32,
    /// How strip bounds are seeded.
    pub bounds_mode: BoundsMode,
}

impl MeshConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use procedural_meshes::bounds::BoundsMode;
    /// use procedural_meshes::settings::MeshConfig;
    /// let cfg = MeshConfig::new(1.0e-10, 16, BoundsMode::OriginAnchored).unwrap();
    /// assert_eq!(cfg.default_radial_segments, 16);
    /// ```
    pub fn new(
        tolerance: f64,
        default_radial_segments: u32,
        bounds_mode: BoundsMode,
    ) -> MeshResult<Self> {
        let generator = GeneratorConfig::new(tolerance, default_radial_segments)?;
        Ok(Self::from_generator(generator, bounds_mode))
    }

    /// Combines a validated generator snapshot with a bounds policy.
    pub fn from_generator(generator: GeneratorConfig, bounds_mode: BoundsMode) -> Self {
        Self {
            tolerance: generator.tolerance,
            default_radial_segments: generator.default_radial_segments,
            bounds_mode,
        }
    }

    /// Re-checks values that may have come from deserialization.
    pub fn validate(&self) -> MeshResult<GeneratorConfig> {
        Ok(GeneratorConfig::new(
            self.tolerance,
            self.default_radial_segments,
        )?)
    }

    /// Strip parameters pinned to this configuration's radial segment count,
    /// with flat shading.
    pub fn strip_params(&self, points: Vec<Vec3>, radius: f64) -> StripParams {
        StripParams::new(points, radius, self.default_radial_segments, false)
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_radial_segments: DEFAULT_RADIAL_SEGMENTS,
            bounds_mode: BoundsMode::default(),
        }
    }
}
