//! # CSG Errors
//!
//! Error types for tree construction and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or exporting a CSG tree.
#[derive(Debug, Error)]
pub enum CsgError {
    /// A dimension is not finite, negative, or zero where it must be positive.
    #[error("Invalid dimension {name}: {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Parameters that are individually valid but describe impossible geometry.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A polygon with fewer than three points.
    #[error("Degenerate polygon: {points} points, need at least 3")]
    DegeneratePolygon { points: usize },

    /// A 2D-only operation was given a 3D child.
    #[error("{operation} requires a 2D child")]
    NotTwoDimensional { operation: &'static str },

    /// Writing serialized output failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CsgError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
