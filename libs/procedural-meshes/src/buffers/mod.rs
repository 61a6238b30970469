//! # Buffer Sizing
//!
//! Exact vertex and index counts derived from shape parameters, and the
//! cursor generators use to fill preallocated buffers by index.
//!
//! Buffers are allocated once from [`BufferSizes`] and then only overwritten.
//! [`BufferWriter`] hands out slots quad by quad and reports any disagreement
//! between the sizing formula and the fill loop as an error.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Vertex;
use config::constants::{
    CUBE_INDEX_COUNT, CUBE_VERTEX_COUNT, INDICES_PER_QUAD, MIN_RADIAL_SEGMENTS, MIN_STRIP_POINTS,
    VERTICES_PER_QUAD,
};

/// Local corner indices of the two triangles of one quad.
pub type QuadTriangles = [[u32; 3]; 2];

/// Vertex and index buffer lengths.
///
/// # Example
///
/// ```rust
/// use procedural_meshes::buffers::BufferSizes;
///
/// let sizes = BufferSizes::cylinder_strip(3, 8);
/// assert_eq!(sizes.vertices, 4 * 8 * 2);
/// assert_eq!(sizes.indices, 6 * 8 * 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferSizes {
    /// Vertex buffer length
    pub vertices: usize,
    /// Index buffer length
    pub indices: usize,
}

impl BufferSizes {
    /// No geometry.
    pub const EMPTY: Self = Self::new(0, 0);

    /// Creates sizes from explicit lengths.
    pub const fn new(vertices: usize, indices: usize) -> Self {
        Self { vertices, indices }
    }

    /// Sizes for `quads` unshared quads.
    pub const fn quads(quads: usize) -> Self {
        Self::new(quads * VERTICES_PER_QUAD, quads * INDICES_PER_QUAD)
    }

    /// A cube: 6 faces of 4 vertices and 2 triangles each.
    pub const fn cube() -> Self {
        Self::new(CUBE_VERTEX_COUNT, CUBE_INDEX_COUNT)
    }

    /// One strip segment: one quad per radial segment.
    pub const fn strip_segment(radial_segments: u32) -> Self {
        Self::quads(radial_segments as usize)
    }

    /// A cylinder strip through `control_points` points.
    ///
    /// Empty when there are fewer than 2 points or fewer than 3 radial
    /// segments, matching the generator's empty-output policy.
    pub const fn cylinder_strip(control_points: usize, radial_segments: u32) -> Self {
        if control_points < MIN_STRIP_POINTS || radial_segments < MIN_RADIAL_SEGMENTS {
            return Self::EMPTY;
        }
        Self::quads(radial_segments as usize * (control_points - 1))
    }

    /// Returns true if no geometry fits.
    pub const fn is_empty(&self) -> bool {
        self.vertices == 0 && self.indices == 0
    }
}

/// Fills preallocated vertex and index buffers one quad at a time.
///
/// Offsets advance only inside the writer; generators never track their own
/// running counters.
#[derive(Debug)]
pub struct BufferWriter<'a> {
    vertices: &'a mut [Vertex],
    indices: &'a mut [u32],
    next_vertex: usize,
    next_index: usize,
}

impl<'a> BufferWriter<'a> {
    /// Starts writing at slot zero of both buffers.
    pub fn new(vertices: &'a mut [Vertex], indices: &'a mut [u32]) -> Self {
        Self {
            vertices,
            indices,
            next_vertex: 0,
            next_index: 0,
        }
    }

    /// Offsets of the next vertex and index slots.
    pub fn offsets(&self) -> (usize, usize) {
        (self.next_vertex, self.next_index)
    }

    /// Writes four corners and two triangles whose indices are local to the
    /// quad (0..4).
    pub fn write_quad(
        &mut self,
        corners: [Vertex; VERTICES_PER_QUAD],
        triangles: QuadTriangles,
    ) -> MeshResult<()> {
        let vertex_base = self.next_vertex;
        let vertex_end = vertex_base + VERTICES_PER_QUAD;
        let index_end = self.next_index + INDICES_PER_QUAD;

        if vertex_end > self.vertices.len() {
            return Err(MeshError::BufferOverflow {
                buffer: "vertex",
                index: vertex_end - 1,
                capacity: self.vertices.len(),
            });
        }
        if index_end > self.indices.len() {
            return Err(MeshError::BufferOverflow {
                buffer: "index",
                index: index_end - 1,
                capacity: self.indices.len(),
            });
        }
        let base = u32::try_from(vertex_base).map_err(|_| {
            MeshError::invalid_parameter("vertices", "vertex count exceeds the u32 index range")
        })?;

        self.vertices[vertex_base..vertex_end].copy_from_slice(&corners);
        for (slot, local) in self.indices[self.next_index..index_end]
            .iter_mut()
            .zip(triangles.iter().flatten())
        {
            *slot = base + local;
        }

        self.next_vertex = vertex_end;
        self.next_index = index_end;
        Ok(())
    }

    /// Checks that every slot of both buffers was written.
    pub fn finish(self) -> MeshResult<()> {
        if self.next_vertex != self.vertices.len() {
            return Err(MeshError::BufferUnderfilled {
                buffer: "vertex",
                written: self.next_vertex,
                capacity: self.vertices.len(),
            });
        }
        if self.next_index != self.indices.len() {
            return Err(MeshError::BufferUnderfilled {
                buffer: "index",
                written: self.next_index,
                capacity: self.indices.len(),
            });
        }
        Ok(())
    }
}
