//! # Config Crate
//!
//! Centralized configuration constants for procedural mesh generation.
//! Buffer layout counts, tessellation defaults, and numeric tolerances are
//! defined here so the generators never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CUBE_VERTEX_COUNT, DEFAULT_RADIAL_SEGMENTS, MIN_RADIAL_SEGMENTS};
//!
//! // A cube never shares vertices between faces
//! assert_eq!(CUBE_VERTEX_COUNT, 24);
//!
//! // Fall back to the default resolution when none is requested
//! let requested: Option<u32> = None;
//! let segments = requested.unwrap_or(DEFAULT_RADIAL_SEGMENTS);
//! assert!(segments >= MIN_RADIAL_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Derived Counts**: Buffer sizes are spelled out from their factors
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
