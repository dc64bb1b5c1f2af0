//! Preallocated output buffers with bounds-checked writes.

use pipeline_types::Rect;

use crate::error::MeshError;
use crate::mesh::{Mesh, MeshVertex};

use super::layout::BufferLayout;

/// Zero-initialized vertex and index buffers sized from a [`BufferLayout`].
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    pub fn new(layout: &BufferLayout) -> Self {
        Self::with_capacity(layout.vertex_count, layout.index_count)
    }

    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: vec![MeshVertex::default(); vertex_count],
            indices: vec![0; index_count],
        }
    }

    /// Copies `vertices` into the buffer starting at `offset`.
    pub fn fill_vertices(
        &mut self,
        offset: usize,
        vertices: &[MeshVertex],
    ) -> Result<(), MeshError> {
        let capacity = self.vertices.len();
        let slot = offset
            .checked_add(vertices.len())
            .and_then(|end| self.vertices.get_mut(offset..end))
            .ok_or_else(|| MeshError::overflow("vertex", offset, vertices.len(), capacity))?;
        slot.copy_from_slice(vertices);
        Ok(())
    }

    /// Copies `indices` into the buffer starting at `offset`.
    pub fn fill_indices(&mut self, offset: usize, indices: &[u32]) -> Result<(), MeshError> {
        let capacity = self.indices.len();
        let slot = offset
            .checked_add(indices.len())
            .and_then(|end| self.indices.get_mut(offset..end))
            .ok_or_else(|| MeshError::overflow("index", offset, indices.len(), capacity))?;
        slot.copy_from_slice(indices);
        Ok(())
    }

    pub fn finish(self, bounds: Rect, texture: Option<String>) -> Mesh {
        Mesh::from_buffers(self.vertices, self.indices, bounds, texture)
    }
}
