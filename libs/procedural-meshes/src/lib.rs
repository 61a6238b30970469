//! # Procedural Meshes
//!
//! Parametric cube and cylinder-strip mesh generation.
//! Turns a handful of numbers into vertex buffers (position, normal,
//! tangent, UV), triangle indices, and bounds ready for a renderer.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParams → BufferSizes → generator (fills by index) → MeshData → packing
//! ```
//!
//! ## Generators
//!
//! - **Cube**: six hard-edged faces, 24 vertices, 36 indices
//! - **Cylinder strip**: a tube along a polyline with flat or smoothed
//!   normals, `4·n` vertices and `6·n` indices per segment
//!
//! ## Usage
//!
//! ```rust
//! use procedural_meshes::{configure, CubeParams, ShapeParams};
//! use glam::DVec3;
//!
//! let mesh = configure(&ShapeParams::Cube(CubeParams::new(DVec3::splat(2.0))))?;
//! assert_eq!(mesh.vertex_count(), 24);
//! assert_eq!(mesh.triangle_count(), 12);
//! # Ok::<(), procedural_meshes::MeshError>(())
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod bounds;
pub mod buffers;
pub mod cross_section;
pub mod error;
pub mod math;
pub mod mesh;
pub mod packing;
pub mod primitives;
pub mod settings;
pub mod shape;

pub use bounds::{Aabb, BoundsMode};
pub use buffers::BufferSizes;
pub use cross_section::CrossSectionCache;
pub use error::{MeshError, MeshResult};
pub use mesh::{MeshData, Vertex};
pub use packing::{pack_mesh, PackedMesh, PackedVertex};
pub use primitives::cube::{generate_cube, CubeParams};
pub use primitives::cylinder_strip::{generate_cylinder_strip, StripParams};
pub use settings::MeshConfig;
pub use shape::{configure, configure_with, Shape, ShapeParams};
