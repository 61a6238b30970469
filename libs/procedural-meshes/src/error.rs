//! # Mesh Errors
//!
//! Error types for procedural mesh generation.
//!
//! ## Error Policy
//!
//! - Too few control points or radial segments is not an error: the
//!   generators return an empty mesh and the host clears its output
//! - Degenerate numeric input is rejected before any buffer is touched
//! - A fill loop that disagrees with its buffer sizing is reported, never
//!   papered over by resizing

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// ## Example
///
/// ```rust
/// use procedural_meshes::{configure, CubeParams, MeshError, ShapeParams};
/// use glam::DVec3;
///
/// let params = ShapeParams::Cube(CubeParams::new(DVec3::new(0.0, 1.0, 1.0)));
/// match configure(&params) {
///     Ok(mesh) => println!("{} vertices", mesh.vertex_count()),
///     Err(MeshError::DegenerateGeometry { message }) => eprintln!("rejected: {message}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// A parameter is outside its accepted range
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// Input would produce zero-length or non-finite geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the degenerate input
        message: String,
    },

    /// A generator asked for a slot past the end of a preallocated buffer
    #[error("{buffer} buffer overflow: slot {index} requested, capacity {capacity}")]
    BufferOverflow {
        /// Which buffer overflowed ("vertex" or "index")
        buffer: &'static str,
        /// The requested slot
        index: usize,
        /// The buffer length fixed at allocation
        capacity: usize,
    },

    /// A generator finished without writing every preallocated slot
    #[error("{buffer} buffer underfilled: wrote {written} of {capacity} slots")]
    BufferUnderfilled {
        /// Which buffer was left partially written
        buffer: &'static str,
        /// Slots written by the generator
        written: usize,
        /// The buffer length fixed at allocation
        capacity: usize,
    },

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;
