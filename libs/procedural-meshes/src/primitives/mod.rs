//! Primitive mesh generators.
//!
//! Each generator fills preallocated [`MeshData`](crate::mesh::MeshData)
//! buffers quad by quad through a [`BufferWriter`].

pub mod cube;
pub mod cylinder_strip;

use crate::buffers::{BufferWriter, QuadTriangles};
use crate::error::MeshResult;
use crate::math::{Vec2, Vec3};
use crate::mesh::Vertex;

/// Triangles of a face quad given as bottom-left, bottom-right, top-right,
/// top-left.
pub const FACE_TRIANGLES: QuadTriangles = [[0, 1, 2], [0, 2, 3]];

/// UVs matching the corner order of [`FACE_TRIANGLES`].
const FACE_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
];

/// Writes one flat-shaded quad.
///
/// `corners` are bottom-left, bottom-right, top-right, top-left. All four
/// vertices share `normal` and `tangent`.
pub fn build_quad(
    writer: &mut BufferWriter<'_>,
    corners: [Vec3; 4],
    normal: Vec3,
    tangent: Vec3,
) -> MeshResult<()> {
    let mut vertices = [Vertex::default(); 4];
    for ((vertex, position), uv) in vertices.iter_mut().zip(corners).zip(FACE_UVS) {
        *vertex = Vertex::new(position, normal, tangent, uv);
    }
    writer.write_quad(vertices, FACE_TRIANGLES)
}
