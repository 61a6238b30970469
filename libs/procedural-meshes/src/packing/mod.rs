//! GPU vertex packing at the output boundary.
//!
//! Positions go out as f32, normals and tangents as octahedral-encoded
//! snorm16x2, and UVs as f16. Encoding works on the f64 vertex data and
//! quantizes once. One [`PackedVertex`] is 24 bytes.

use crate::math::{Vec2, Vec3};
use crate::mesh::{MeshData, Vertex};
use bytemuck::{cast_slice, Pod, Zeroable};
use half::f16;

const SNORM16_MAX: f64 = i16::MAX as f64;

/// Quantizes a value in [-1, 1] to a signed normalized 16-bit integer.
///
/// Out-of-range input is clamped.
#[inline]
pub fn to_snorm16(value: f64) -> i16 {
    (value.clamp(-1.0, 1.0) * SNORM16_MAX).round() as i16
}

/// Inverse of [`to_snorm16`].
#[inline]
pub fn from_snorm16(value: i16) -> f64 {
    (f64::from(value) / SNORM16_MAX).max(-1.0)
}

/// Per-component sign with zero counted as positive.
fn sign_not_zero(v: Vec2) -> Vec2 {
    Vec2::new(
        if v.x >= 0.0 { 1.0 } else { -1.0 },
        if v.y >= 0.0 { 1.0 } else { -1.0 },
    )
}

/// Reflects a point of the octahedron's lower half across the diagonals of
/// the unit square. The map is its own inverse.
fn fold(v: Vec2) -> Vec2 {
    (Vec2::ONE - Vec2::new(v.y.abs(), v.x.abs())) * sign_not_zero(v)
}

/// Maps a direction onto the octahedral square [-1, 1]².
///
/// Zero and non-finite input map to the origin.
///
/// # Examples
/// ```
/// use procedural_meshes::math::{Vec2, Vec3};
/// use procedural_meshes::packing::encode_octahedral;
///
/// assert_eq!(encode_octahedral(Vec3::Z), Vec2::ZERO);
/// assert_eq!(encode_octahedral(Vec3::X), Vec2::X);
/// ```
pub fn encode_octahedral(dir: Vec3) -> Vec2 {
    let l1_norm = dir.abs().element_sum();
    if l1_norm == 0.0 || !l1_norm.is_finite() {
        return Vec2::ZERO;
    }
    let projected = dir.truncate() / l1_norm;
    if dir.z >= 0.0 {
        projected
    } else {
        fold(projected)
    }
}

/// Maps a point of the octahedral square back to a unit direction.
pub fn decode_octahedral(encoded: Vec2) -> Vec3 {
    let z = 1.0 - encoded.x.abs() - encoded.y.abs();
    let xy = if z >= 0.0 { encoded } else { fold(encoded) };
    xy.extend(z).normalize_or_zero()
}

/// Packs a direction as two snorm16 values, u in the low half.
pub fn pack_octahedral_u32(dir: Vec3) -> u32 {
    let encoded = encode_octahedral(dir);
    let u = to_snorm16(encoded.x) as u16;
    let v = to_snorm16(encoded.y) as u16;
    u32::from(u) | (u32::from(v) << 16)
}

/// Unpacks a direction written by [`pack_octahedral_u32`].
pub fn unpack_octahedral_u32(packed: u32) -> Vec3 {
    let u = from_snorm16(packed as u16 as i16);
    let v = from_snorm16((packed >> 16) as u16 as i16);
    decode_octahedral(Vec2::new(u, v))
}

/// GPU-ready vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PackedVertex {
    /// Position
    pub position: [f32; 3],
    /// Octahedral normal
    pub normal: u32,
    /// Octahedral tangent
    pub tangent: u32,
    /// Texture coordinate
    pub uv: [f16; 2],
}

impl From<&Vertex> for PackedVertex {
    fn from(vertex: &Vertex) -> Self {
        Self {
            position: vertex.position.as_vec3().to_array(),
            normal: pack_octahedral_u32(vertex.normal),
            tangent: pack_octahedral_u32(vertex.tangent),
            uv: [
                f16::from_f64(vertex.uv.x),
                f16::from_f64(vertex.uv.y),
            ],
        }
    }
}

/// Packed vertex and index buffers ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedMesh {
    /// Packed vertices
    pub vertices: Vec<PackedVertex>,
    /// Triangle indices, unchanged from the source mesh
    pub indices: Vec<u32>,
}

impl PackedMesh {
    /// Vertex buffer as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}

/// Packs a mesh for GPU upload.
///
/// # Example
///
/// ```rust
/// use procedural_meshes::{generate_cube, pack_mesh, CubeParams};
/// use glam::DVec3;
///
/// let mesh = generate_cube(&CubeParams::new(DVec3::ONE)).unwrap();
/// let packed = pack_mesh(&mesh);
/// assert_eq!(packed.vertex_bytes().len(), 24 * 24);
/// assert_eq!(packed.index_bytes().len(), 36 * 4);
/// ```
pub fn pack_mesh(mesh: &MeshData) -> PackedMesh {
    PackedMesh {
        vertices: mesh.vertices.iter().map(PackedVertex::from).collect(),
        indices: mesh.indices.clone(),
    }
}
