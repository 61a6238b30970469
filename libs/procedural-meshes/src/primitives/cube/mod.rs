//! Cube primitive implementation.
//!
//! Six independently shaded faces of four unshared vertices each, so edges
//! stay hard.

use crate::bounds::cube_bounds;
use crate::buffers::BufferSizes;
use crate::error::{MeshError, MeshResult};
use crate::math::Vec3;
use crate::mesh::MeshData;
use crate::primitives::build_quad;
use config::constants::CUBE_FACE_COUNT;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Cube parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    /// Full extent along each axis; the cube is centered at the origin.
    pub size: Vec3,
}

impl CubeParams {
    /// Creates cube parameters.
    pub const fn new(size: Vec3) -> Self {
        Self { size }
    }

    /// Rejects non-finite or non-positive extents.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.size.is_finite() {
            return Err(MeshError::degenerate(format!(
                "cube size must be finite, got {}",
                self.size
            )));
        }
        if self.size.min_element() <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "cube size must be positive on every axis, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

/// One cube face: corner indices (bottom-left, bottom-right, top-right,
/// top-left), normal, tangent.
struct Face {
    corners: [usize; 4],
    normal: Vec3,
    tangent: Vec3,
}

// Front, back, left, right, top, bottom.
const FACES: [Face; CUBE_FACE_COUNT] = [
    Face {
        corners: [0, 1, 2, 3],
        normal: Vec3::X,
        tangent: Vec3::Y,
    },
    Face {
        corners: [5, 4, 7, 6],
        normal: Vec3::NEG_X,
        tangent: Vec3::NEG_Y,
    },
    Face {
        corners: [1, 5, 6, 2],
        normal: Vec3::NEG_Y,
        tangent: Vec3::X,
    },
    Face {
        corners: [4, 0, 3, 7],
        normal: Vec3::Y,
        tangent: Vec3::NEG_X,
    },
    Face {
        corners: [6, 7, 3, 2],
        normal: Vec3::Z,
        tangent: Vec3::Y,
    },
    Face {
        corners: [1, 0, 4, 5],
        normal: Vec3::NEG_Z,
        tangent: Vec3::NEG_Y,
    },
];

/// The 8 cube corners from half-extents.
///
/// Vertex ordering:
/// 0: (+x, +y, -z)  1: (+x, -y, -z)  2: (+x, -y, +z)  3: (+x, +y, +z)
/// 4: (-x, +y, -z)  5: (-x, -y, -z)  6: (-x, -y, +z)  7: (-x, +y, +z)
fn corners(size: Vec3) -> [Vec3; 8] {
    let Vec3 { x, y, z } = size / 2.0;
    [
        Vec3::new(x, y, -z),
        Vec3::new(x, -y, -z),
        Vec3::new(x, -y, z),
        Vec3::new(x, y, z),
        Vec3::new(-x, y, -z),
        Vec3::new(-x, -y, -z),
        Vec3::new(-x, -y, z),
        Vec3::new(-x, y, z),
    ]
}

/// Overwrites `mesh` with a cube. The buffers must already be sized with
/// [`BufferSizes::cube`](crate::buffers::BufferSizes::cube).
pub fn fill_cube(params: &CubeParams, mesh: &mut MeshData) -> MeshResult<()> {
    let p = corners(params.size);
    let mut writer = mesh.writer();
    for face in &FACES {
        build_quad(
            &mut writer,
            face.corners.map(|i| p[i]),
            face.normal,
            face.tangent,
        )?;
    }
    writer.finish()?;

    mesh.bounds = cube_bounds(params.size);
    trace!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cube"
    );
    Ok(())
}

/// Creates a cube mesh centered at the origin.
///
/// # Examples
/// ```
/// use procedural_meshes::primitives::cube::{generate_cube, CubeParams};
/// use glam::DVec3;
///
/// let mesh = generate_cube(&CubeParams::new(DVec3::splat(2.0))).unwrap();
/// assert_eq!(mesh.bounds.min, DVec3::splat(-1.0));
/// assert_eq!(mesh.bounds.max, DVec3::splat(1.0));
/// ```
pub fn generate_cube(params: &CubeParams) -> MeshResult<MeshData> {
    params.validate()?;
    let mut mesh = MeshData::allocate(BufferSizes::cube());
    fill_cube(params, &mut mesh)?;
    Ok(mesh)
}
