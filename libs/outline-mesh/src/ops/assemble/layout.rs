//! Buffer sizing and per-part offsets.

use config::constants::{MAX_INDICES, MAX_VERTICES};

use crate::error::MeshError;
use crate::ops::extrude::PartBase;
use crate::part::Part;

/// Where every part writes in the shared buffers.
///
/// Buffers hold two consecutive regions: the caps of every part (in part
/// order), then the walls of every part (in part order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferLayout {
    pub bases: Vec<PartBase>,
    pub face_vertex_count: usize,
    pub face_index_count: usize,
    pub vertex_count: usize,
    pub index_count: usize,
}

impl BufferLayout {
    /// Computes totals and offsets for `parts`.
    pub fn plan(parts: &[Part]) -> Result<Self, MeshError> {
        let mut offsets = Vec::with_capacity(parts.len());
        let mut vertex = 0usize;
        let mut index = 0usize;

        for part in parts {
            offsets.push((vertex, index));
            vertex += part.face_vertex_count();
            index += part.face_index_count();
        }
        let face_vertex_count = vertex;
        let face_index_count = index;

        let mut bases = Vec::with_capacity(parts.len());
        for (part, &(face_vertex, face_index)) in parts.iter().zip(&offsets) {
            bases.push(PartBase {
                face_vertex: vertex_base(face_vertex)?,
                face_index,
                wall_vertex: vertex_base(vertex)?,
                wall_index: index,
            });
            vertex += part.wall_vertex_count();
            index += part.wall_index_count();
        }

        if vertex > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertex,
                max: MAX_VERTICES,
            });
        }
        if index > MAX_INDICES {
            return Err(MeshError::TooManyIndices {
                count: index,
                max: MAX_INDICES,
            });
        }

        Ok(Self {
            bases,
            face_vertex_count,
            face_index_count,
            vertex_count: vertex,
            index_count: index,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0 && self.index_count == 0
    }
}

fn vertex_base(offset: usize) -> Result<u32, MeshError> {
    if offset > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: offset,
            max: MAX_VERTICES,
        });
    }
    u32::try_from(offset).map_err(|_| MeshError::TooManyVertices {
        count: offset,
        max: MAX_VERTICES,
    })
}
