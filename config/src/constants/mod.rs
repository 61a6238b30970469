//! Centralized configuration values shared by the procedural mesh generators.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that the geometry crate can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Vectors whose *squared* length is below this are treated as zero.
///
/// Applied to control-point segments and segment directions; face normals
/// and tangents are normalized without a cutoff.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of radial segments around a cylinder strip.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_RADIAL_SEGMENTS, MIN_RADIAL_SEGMENTS};
/// assert!(DEFAULT_RADIAL_SEGMENTS >= MIN_RADIAL_SEGMENTS);
/// ```
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 10;

/// Smallest radial segment count that still encloses a volume.
///
/// Fewer segments produce a zero-area or zero-step cross-section.
///
/// # Examples
/// ```
/// use config::constants::MIN_RADIAL_SEGMENTS;
/// assert_eq!(MIN_RADIAL_SEGMENTS, 3);
/// ```
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

/// Default cylinder strip radius.
pub const DEFAULT_STRIP_RADIUS: f64 = 10.0;

/// Smallest number of control points that forms one strip segment.
///
/// # Examples
/// ```
/// use config::constants::MIN_STRIP_POINTS;
/// let points = 1;
/// assert!(points < MIN_STRIP_POINTS);
/// ```
pub const MIN_STRIP_POINTS: usize = 2;

/// Extra cross-section samples cached past the last segment so neighbouring
/// quads can be looked up without wrapping.
pub const CROSS_SECTION_LOOKAHEAD: usize = 2;

// =============================================================================
// BUFFER LAYOUT CONSTANTS
// =============================================================================

/// Vertices emitted per quad. Quads never share vertices.
pub const VERTICES_PER_QUAD: usize = 4;

/// Indices emitted per quad (2 triangles × 3 indices).
pub const INDICES_PER_QUAD: usize = 6;

/// Number of faces on a cube.
pub const CUBE_FACE_COUNT: usize = 6;

/// Vertex buffer length of a cube (6 faces × 4 vertices).
///
/// # Examples
/// ```
/// use config::constants::{CUBE_FACE_COUNT, CUBE_VERTEX_COUNT, VERTICES_PER_QUAD};
/// assert_eq!(CUBE_VERTEX_COUNT, CUBE_FACE_COUNT * VERTICES_PER_QUAD);
/// ```
pub const CUBE_VERTEX_COUNT: usize = CUBE_FACE_COUNT * VERTICES_PER_QUAD;

/// Index buffer length of a cube (6 faces × 2 triangles × 3 indices).
///
/// # Examples
/// ```
/// use config::constants::CUBE_INDEX_COUNT;
/// assert_eq!(CUBE_INDEX_COUNT, 36);
/// ```
pub const CUBE_INDEX_COUNT: usize = CUBE_FACE_COUNT * INDICES_PER_QUAD;

/// Fixed pitch correction, in degrees, applied when orienting a cross-section
/// along a strip segment. The cached circle lies in the XY plane while a
/// rotator's forward axis is +X.
pub const SEGMENT_PITCH_CORRECTION_DEGREES: f64 = 90.0;

/// Immutable snapshot of generator settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Squared length below which a segment or direction counts as zero.
    pub tolerance: f64,
    /// Radial segment count used when a strip does not specify one.
    pub default_radial_segments: u32,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and default radial segments.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.default_radial_segments, 24);
    /// ```
    pub fn new(tolerance: f64, default_radial_segments: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_radial_segments < MIN_RADIAL_SEGMENTS {
            return Err(ConfigError::InvalidSegments(default_radial_segments));
        }
        Ok(Self {
            tolerance,
            default_radial_segments,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_radial_segments: DEFAULT_RADIAL_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative, or not finite.
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "default_radial_segments must be >= {MIN_RADIAL_SEGMENTS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
