//! # Buffer Assembly
//!
//! Packs the extruded geometry of every part into one vertex buffer and one
//! index buffer.
//!
//! ## Steps
//!
//! 1. [`BufferLayout::plan`] sizes the buffers and gives each part its
//!    [`PartBase`]: caps of all parts first, walls of all parts second.
//! 2. Parts are extruded in parallel against their precomputed bases.
//! 3. Results are copied in part order into a [`MeshBuilder`], whose writes
//!    are bounds-checked.
//!
//! [`PartBase`]: crate::ops::extrude::PartBase

mod builder;
mod layout;

#[cfg(test)]
mod tests;

pub use builder::MeshBuilder;
pub use layout::BufferLayout;

use glam::{DVec2, DVec3};
use pipeline_types::Rect;
use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::{Mesh, MeshVertex};
use crate::ops::extrude::extrude_part;
use crate::part::Part;

/// Maps planar positions into texture space over a bounding rectangle.
///
/// `u` runs 0 → 1 from `min.x` to `max.x`; `v` runs 1 → 0 from `min.y` to
/// `max.y`, so the top of the outline samples the top of the texture. An
/// axis with zero extent maps to the start of its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvMapper {
    bounds: Rect,
}

impl UvMapper {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn map(&self, p: DVec2) -> DVec2 {
        let size = self.bounds.size();
        let rel = p - self.bounds.min;
        let u = if size.x > 0.0 { rel.x / size.x } else { 0.0 };
        let v = if size.y > 0.0 { 1.0 - rel.y / size.y } else { 1.0 };
        DVec2::new(u, v)
    }

    pub fn vertex(&self, position: DVec3) -> MeshVertex {
        MeshVertex::new(position, self.map(position.truncate()))
    }

    pub fn vertices(&self, positions: &[DVec3]) -> Vec<MeshVertex> {
        positions.iter().map(|&p| self.vertex(p)).collect()
    }
}

struct PartBuffers {
    face_vertices: Vec<MeshVertex>,
    face_indices: Vec<u32>,
    wall_vertices: Vec<MeshVertex>,
    wall_indices: Vec<u32>,
}

/// Extrudes `parts` by `depth` and packs them into a single mesh.
pub fn assemble(
    parts: &[Part],
    depth: f64,
    bounds: Rect,
    texture: Option<String>,
) -> Result<Mesh, MeshError> {
    let layout = BufferLayout::plan(parts)?;
    let uv = UvMapper::new(bounds);

    let buffers: Vec<PartBuffers> = parts
        .par_iter()
        .zip(layout.bases.par_iter())
        .map(|(part, base)| {
            let out = extrude_part(part, depth, base);
            PartBuffers {
                face_vertices: uv.vertices(&out.face_vertices),
                face_indices: out.face_indices,
                wall_vertices: uv.vertices(&out.wall_vertices),
                wall_indices: out.wall_indices,
            }
        })
        .collect();

    let mut builder = MeshBuilder::new(&layout);
    for (part, base) in buffers.iter().zip(&layout.bases) {
        builder.fill_vertices(base.face_vertex as usize, &part.face_vertices)?;
        builder.fill_indices(base.face_index, &part.face_indices)?;
        builder.fill_vertices(base.wall_vertex as usize, &part.wall_vertices)?;
        builder.fill_indices(base.wall_index, &part.wall_indices)?;
    }

    log::debug!(
        "assembled {} parts: {} vertices, {} indices",
        parts.len(),
        layout.vertex_count,
        layout.index_count
    );

    Ok(builder.finish(bounds, texture))
}
