//! # Shapes
//!
//! Host-facing entry points.
//!
//! [`configure`] builds a mesh from parameters in one call. [`Shape`] keeps
//! its buffers and cross-section cache between calls so a host can
//! regenerate in place whenever parameters change.
//!
//! ## Example
//!
//! ```rust
//! use procedural_meshes::{Shape, ShapeParams, StripParams};
//! use glam::DVec3;
//!
//! let points = vec![DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)];
//! let mut shape = Shape::new(ShapeParams::CylinderStrip(StripParams::new(points, 1.0, 8, true)))?;
//! assert_eq!(shape.generate()?.vertex_count(), 32);
//!
//! let mut params = shape.params().clone();
//! if let ShapeParams::CylinderStrip(strip) = &mut params {
//!     strip.radius = 2.0;
//! }
//! shape.set_params(params)?;
//! assert_eq!(shape.generate()?.bounds.max.x, 2.0);
//! # Ok::<(), procedural_meshes::MeshError>(())
//! ```

use crate::buffers::BufferSizes;
use crate::cross_section::CrossSectionCache;
use crate::error::MeshResult;
use crate::mesh::MeshData;
use crate::primitives::cube::{fill_cube, CubeParams};
use crate::primitives::cylinder_strip::{fill_cylinder_strip, StripParams};
use crate::settings::MeshConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Parameters of any supported shape.
///
/// Serialized with a `shape` tag:
///
/// ```json
/// { "shape": "cube", "size": [2.0, 2.0, 2.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeParams {
    /// Axis-aligned cube centered at the origin
    Cube(CubeParams),
    /// Tube along a polyline
    CylinderStrip(StripParams),
}

impl ShapeParams {
    /// Buffer sizes these parameters imply under `config`.
    pub fn buffer_sizes(&self, config: &MeshConfig) -> BufferSizes {
        match self {
            Self::Cube(_) => BufferSizes::cube(),
            Self::CylinderStrip(strip) => strip.buffer_sizes(config),
        }
    }

    /// Rejects degenerate numeric input.
    pub fn validate(&self, config: &MeshConfig) -> MeshResult<()> {
        match self {
            Self::Cube(cube) => cube.validate(),
            Self::CylinderStrip(strip) => strip.validate(config.tolerance),
        }
    }
}

/// Builds a mesh from `params` with the default configuration.
pub fn configure(params: &ShapeParams) -> MeshResult<MeshData> {
    configure_with(params, &MeshConfig::default())
}

/// Builds a mesh from `params` with a fresh cross-section cache.
pub fn configure_with(params: &ShapeParams, config: &MeshConfig) -> MeshResult<MeshData> {
    let mut shape = Shape::with_config(params.clone(), *config)?;
    shape.generate()?;
    Ok(shape.mesh)
}

/// A shape instance owning its parameters, cache, and buffers.
#[derive(Debug, Clone)]
pub struct Shape {
    params: ShapeParams,
    config: MeshConfig,
    cross_section: CrossSectionCache,
    mesh: MeshData,
}

impl Shape {
    /// Creates a shape with the default configuration.
    pub fn new(params: ShapeParams) -> MeshResult<Self> {
        Self::with_config(params, MeshConfig::default())
    }

    /// Creates a shape. Buffers are allocated on the first [`Shape::generate`].
    pub fn with_config(params: ShapeParams, config: MeshConfig) -> MeshResult<Self> {
        config.validate()?;
        params.validate(&config)?;
        Ok(Self {
            params,
            config,
            cross_section: CrossSectionCache::new(),
            mesh: MeshData::new(),
        })
    }

    /// Replaces the parameters. Takes effect on the next [`Shape::generate`].
    ///
    /// On error the previous parameters are kept.
    pub fn set_params(&mut self, params: ShapeParams) -> MeshResult<()> {
        params.validate(&self.config)?;
        self.params = params;
        Ok(())
    }

    /// Regenerates every vertex and index in place.
    ///
    /// Buffers are reallocated only when the parameters imply different
    /// sizes. Too few control points or segments yields an empty mesh.
    pub fn generate(&mut self) -> MeshResult<&MeshData> {
        let sizes = self.params.buffer_sizes(&self.config);
        if self.mesh.buffer_sizes() != sizes {
            debug!(
                vertices = sizes.vertices,
                indices = sizes.indices,
                "allocating mesh buffers"
            );
            self.mesh = MeshData::allocate(sizes);
        }

        match &self.params {
            ShapeParams::Cube(cube) => fill_cube(cube, &mut self.mesh)?,
            ShapeParams::CylinderStrip(strip) => {
                fill_cylinder_strip(strip, &mut self.cross_section, &self.config, &mut self.mesh)?
            }
        }
        trace!(
            vertices = self.mesh.vertex_count(),
            triangles = self.mesh.triangle_count(),
            "regenerated shape"
        );
        Ok(&self.mesh)
    }

    /// The last generated mesh.
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Current parameters.
    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    /// Generator configuration.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Cross-section cache owned by this shape.
    pub fn cross_section(&self) -> &CrossSectionCache {
        &self.cross_section
    }
}
