//! # Cylinder Strip
//!
//! A tube of cylinder segments following a polyline of control points.
//!
//! Each segment sweeps the cached unit circle, scaled by the radius and
//! turned perpendicular to the segment, from its start point to its end
//! point. Every radial step becomes one quad of four unshared vertices, so
//! shading is either flat per quad or softened by averaging each quad's
//! normal with its neighbours' normals.
//!
//! ## Example
//!
//! ```rust
//! use procedural_meshes::primitives::cylinder_strip::{generate_cylinder_strip, StripParams};
//! use procedural_meshes::settings::MeshConfig;
//! use glam::DVec3;
//!
//! let params = StripParams::new(vec![DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)], 1.0, 4, false);
//! let mesh = generate_cylinder_strip(&params, &MeshConfig::default()).unwrap();
//! assert_eq!(mesh.vertex_count(), 16);
//! assert_eq!(mesh.indices.len(), 24);
//! ```

use crate::bounds::strip_bounds;
use crate::buffers::{BufferSizes, BufferWriter, QuadTriangles};
use crate::cross_section::CrossSectionCache;
use crate::error::{MeshError, MeshResult};
use crate::math::{
    blend_normals, quad_normal, rotate_point_around_pivot, safe_normal, Rotator, Vec2, Vec3,
};
use crate::mesh::{MeshData, Vertex};
use crate::settings::MeshConfig;
use config::constants::{
    CROSS_SECTION_LOOKAHEAD, DEFAULT_STRIP_RADIUS, MIN_RADIAL_SEGMENTS, MIN_STRIP_POINTS,
    SEGMENT_PITCH_CORRECTION_DEGREES,
};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Corner order p3-p2-p0, p2-p1-p0 for a quad stored as p0, p1, p2, p3.
const STRIP_TRIANGLES: QuadTriangles = [[3, 2, 0], [2, 1, 0]];

/// Cylinder strip parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    /// Control points; consecutive pairs form segments.
    pub points: Vec<Vec3>,
    /// Tube radius.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Quads around the circumference of each segment. When absent the
    /// generator uses [`MeshConfig::default_radial_segments`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial_segments: Option<u32>,
    /// Average each quad's normal with its neighbours.
    #[serde(default = "default_smooth_normals")]
    pub smooth_normals: bool,
}

fn default_radius() -> f64 {
    DEFAULT_STRIP_RADIUS
}

fn default_smooth_normals() -> bool {
    true
}

impl StripParams {
    /// Creates strip parameters.
    pub fn new(points: Vec<Vec3>, radius: f64, radial_segments: u32, smooth_normals: bool) -> Self {
        Self {
            points,
            radius,
            radial_segments: Some(radial_segments),
            smooth_normals,
        }
    }

    /// Radial segment count, falling back to the configured default.
    pub fn segment_count(&self, config: &MeshConfig) -> u32 {
        self.radial_segments.unwrap_or(config.default_radial_segments)
    }

    /// Buffer sizes these parameters imply under `config`.
    pub fn buffer_sizes(&self, config: &MeshConfig) -> BufferSizes {
        BufferSizes::cylinder_strip(self.points.len(), self.segment_count(config))
    }

    /// Rejects input that would put non-finite values into the buffers.
    ///
    /// Too few points or segments is not an error; that yields an empty mesh.
    pub fn validate(&self, tolerance: f64) -> MeshResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "strip radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if let Some(i) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::degenerate(format!(
                "control point {i} is not finite: {}",
                self.points[i]
            )));
        }
        if let Some(i) = self
            .points
            .windows(2)
            .position(|pair| (pair[1] - pair[0]).length_squared() < tolerance)
        {
            return Err(MeshError::degenerate(format!(
                "segment {i} has zero length at {}",
                self.points[i]
            )));
        }
        Ok(())
    }
}

/// Overwrites `mesh` with the strip described by `params`.
///
/// `mesh` must already be sized with [`StripParams::buffer_sizes`] for the
/// same `config`. When
/// there are too few points or segments nothing is written and the bounds
/// are cleared.
pub fn fill_cylinder_strip(
    params: &StripParams,
    cross_section: &mut CrossSectionCache,
    config: &MeshConfig,
    mesh: &mut MeshData,
) -> MeshResult<()> {
    let segments = params.segment_count(config);
    if params.buffer_sizes(config).is_empty() {
        warn!(
            points = params.points.len(),
            radial_segments = segments,
            "cylinder strip needs {MIN_STRIP_POINTS} points and {MIN_RADIAL_SEGMENTS} radial segments, output is empty"
        );
        mesh.writer().finish()?;
        mesh.bounds = Default::default();
        return Ok(());
    }

    let ring = cross_section.ensure(segments);
    let mut writer = mesh.writer();
    for pair in params.points.windows(2) {
        sweep_segment(&mut writer, ring, pair[0], pair[1], params, config.tolerance)?;
    }
    writer.finish()?;

    mesh.bounds = strip_bounds(&params.points, params.radius, config.bounds_mode);
    trace!(
        segments = params.points.len() - 1,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cylinder strip"
    );
    Ok(())
}

/// Creates a cylinder strip mesh with a fresh cross-section cache.
pub fn generate_cylinder_strip(params: &StripParams, config: &MeshConfig) -> MeshResult<MeshData> {
    config.validate()?;
    params.validate(config.tolerance)?;
    let mut mesh = MeshData::allocate(params.buffer_sizes(config));
    fill_cylinder_strip(params, &mut CrossSectionCache::new(), config, &mut mesh)?;
    Ok(mesh)
}

/// Writes one quad per ring step for one segment.
fn sweep_segment(
    writer: &mut BufferWriter<'_>,
    ring: &[Vec3],
    start: Vec3,
    end: Vec3,
    params: &StripParams,
    tolerance: f64,
) -> MeshResult<()> {
    // The ring carries two lookahead samples past the last step.
    let n = ring.len() - CROSS_SECTION_LOOKAHEAD;
    let offset = end - start;
    let rotation = Rotator::from_direction(safe_normal(start - end, tolerance))
        .add(SEGMENT_PITCH_CORRECTION_DEGREES, 0.0, 0.0)
        .to_quat();
    let ring_point =
        |i: usize| rotate_point_around_pivot(ring[i] * params.radius + start, start, rotation);
    let u_step = 1.0 / n as f64;

    for k in 0..n {
        let p0 = ring_point(k);
        let p1 = ring_point(k + 1);
        let p2 = p1 + offset;
        let p3 = p0 + offset;

        let flat = quad_normal(p0, p1, offset);
        let (left, right) = if params.smooth_normals {
            let previous = quad_normal(ring_point((k + n - 1) % n), p0, offset);
            let next = quad_normal(p1, ring_point(k + 2), offset);
            (blend_normals(flat, previous), blend_normals(flat, next))
        } else {
            (flat, flat)
        };
        let tangent = (p0 - p1).normalize_or_zero();

        let u0 = 1.0 - u_step * k as f64;
        let u1 = 1.0 - u_step * (k + 1) as f64;
        writer.write_quad(
            [
                Vertex::new(p0, left, tangent, Vec2::new(u0, 1.0)),
                Vertex::new(p1, right, tangent, Vec2::new(u1, 1.0)),
                Vertex::new(p2, right, tangent, Vec2::new(u1, 0.0)),
                Vertex::new(p3, left, tangent, Vec2::new(u0, 0.0)),
            ],
            STRIP_TRIANGLES,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
