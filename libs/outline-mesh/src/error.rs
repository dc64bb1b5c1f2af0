//! # Mesh Errors
//!
//! Error types for mesh generation. Only configuration and buffer-capacity
//! problems are errors; everything that goes wrong inside a single part is
//! reported as a [`pipeline_types::Diagnostic`] instead.

use config::ConfigError;
use thiserror::Error;

/// Errors that can abort mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Pipeline settings failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A write would land outside the planned buffer
    #[error("{buffer} buffer overflow: writing {len} elements at offset {offset} (capacity {capacity})")]
    BufferOverflow {
        buffer: &'static str,
        offset: usize,
        len: usize,
        capacity: usize,
    },

    /// Too many vertices for 32-bit indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many indices
    #[error("Too many indices: {count} (max: {max})")]
    TooManyIndices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a buffer overflow error.
    pub fn overflow(buffer: &'static str, offset: usize, len: usize, capacity: usize) -> Self {
        Self::BufferOverflow {
            buffer,
            offset,
            len,
            capacity,
        }
    }
}
