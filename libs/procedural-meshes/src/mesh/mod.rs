//! # Mesh Data Structure
//!
//! Output representation handed to the host renderer: unshared vertices with
//! normal, tangent, and UV, a flat triangle index list, and bounds.
//!
//! All geometry is computed in f64. Export to f32 happens through the
//! flattening helpers here or through [`crate::packing`].
//!
//! ## Winding
//!
//! Triangles are emitted for a left-handed, Z-up host: for a triangle
//! `(a, b, c)` the right-handed cross product `(b - a) × (c - a)` points away
//! from the stored vertex normal. Call [`MeshData::reverse_winding`] before
//! handing buffers to a right-handed renderer.

use crate::bounds::Aabb;
use crate::buffers::{BufferSizes, BufferWriter};
use crate::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A single mesh vertex. Vertices are never shared between quads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in shape space
    pub position: Vec3,
    /// Unit normal (or zero for degenerate faces)
    pub normal: Vec3,
    /// Unit tangent (or zero for degenerate faces)
    pub tangent: Vec3,
    /// Texture coordinate, origin at the top-left
    pub uv: Vec2,
}

impl Vertex {
    /// Creates a vertex.
    pub const fn new(position: Vec3, normal: Vec3, tangent: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            tangent,
            uv,
        }
    }
}

/// Generated vertex and index buffers plus bounds.
///
/// # Example
///
/// ```rust
/// use procedural_meshes::{generate_cube, CubeParams};
/// use glam::DVec3;
///
/// let mesh = generate_cube(&CubeParams::new(DVec3::splat(2.0))).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex buffer
    pub vertices: Vec<Vertex>,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
    /// Bounds of the generated geometry
    pub bounds: Aabb,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates zero-filled buffers of exactly the given sizes.
    ///
    /// Generators overwrite every slot; the buffer lengths never change
    /// afterwards.
    pub fn allocate(sizes: BufferSizes) -> Self {
        Self {
            vertices: vec![Vertex::default(); sizes.vertices],
            indices: vec![0; sizes.indices],
            bounds: Aabb::default(),
        }
    }

    /// Current buffer lengths.
    pub fn buffer_sizes(&self) -> BufferSizes {
        BufferSizes::new(self.vertices.len(), self.indices.len())
    }

    /// Returns a writer that fills the buffers from slot zero.
    pub fn writer(&mut self) -> BufferWriter<'_> {
        BufferWriter::new(&mut self.vertices, &mut self.indices)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - The index count is a multiple of 3
    /// - All triangle indices reference an existing vertex
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.indices.len() % 3 != 0 {
            return false;
        }
        let vertex_count = self.vertices.len();
        self.indices
            .iter()
            .all(|&index| (index as usize) < vertex_count)
    }

    /// Flips the front face of every triangle.
    pub fn reverse_winding(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }

    /// Exports positions as a flat `[x, y, z, ...]` f32 array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(self.vertices.iter().map(|v| v.position))
    }

    /// Exports normals as a flat `[x, y, z, ...]` f32 array.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(self.vertices.iter().map(|v| v.normal))
    }

    /// Exports tangents as a flat `[x, y, z, ...]` f32 array.
    pub fn tangents_f32(&self) -> Vec<f32> {
        flatten3(self.vertices.iter().map(|v| v.tangent))
    }

    /// Exports UVs as a flat `[u, v, ...]` f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 2);
        for v in &self.vertices {
            result.push(v.uv.x as f32);
            result.push(v.uv.y as f32);
        }
        result
    }
}

fn flatten3(values: impl ExactSizeIterator<Item = Vec3>) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
