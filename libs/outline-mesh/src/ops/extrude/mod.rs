//! # Extrusion
//!
//! Turns a planar [`Part`] into prism geometry: a front cap at `z = 0`, a
//! back cap at `z = -depth`, and side walls stitching the two along every
//! contour edge.
//!
//! Extrusion is pure. Where the geometry lands in the shared buffers is
//! decided up front by the layout planner and passed in as a [`PartBase`], so
//! parts can be extruded independently and in parallel.
//!
//! ## Winding
//!
//! Triangulations are counter-clockwise when seen from +z. The front cap
//! reverses each triangle so it is clockwise from the viewer side, which is
//! the front-facing convention of the consuming renderer; the back cap keeps
//! the original order and therefore faces away.


use glam::{DVec2, DVec3};

use crate::part::Part;

/// Offsets of one part inside the shared vertex and index buffers.
///
/// Vertex bases are added to every index the part emits. Index offsets are
/// the positions its index ranges are written at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartBase {
    pub face_vertex: u32,
    pub face_index: usize,
    pub wall_vertex: u32,
    pub wall_index: usize,
}

/// Positions and absolute indices of one extruded part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtrudedPart {
    pub face_vertices: Vec<DVec3>,
    pub face_indices: Vec<u32>,
    pub wall_vertices: Vec<DVec3>,
    pub wall_indices: Vec<u32>,
}

impl ExtrudedPart {
    pub fn vertex_count(&self) -> usize {
        self.face_vertices.len() + self.wall_vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.face_indices.len() + self.wall_indices.len()
    }
}

#[inline]
fn lift(p: DVec2, z: f64) -> DVec3 {
    p.extend(z)
}

/// Extrudes `part` by `depth` along -z.
///
/// A depth of zero is accepted and yields coincident caps and zero-area
/// walls.
pub fn extrude_part(part: &Part, depth: f64, base: &PartBase) -> ExtrudedPart {
    let (face_vertices, face_indices) = extrude_faces(part, depth, base.face_vertex);
    let (wall_vertices, wall_indices) = extrude_walls(part, depth, base.wall_vertex);
    ExtrudedPart {
        face_vertices,
        face_indices,
        wall_vertices,
        wall_indices,
    }
}

fn extrude_faces(part: &Part, depth: f64, base: u32) -> (Vec<DVec3>, Vec<u32>) {
    let tri = &part.triangulation;
    let front_count = tri.vertex_count() as u32;

    let mut vertices = Vec::with_capacity(part.face_vertex_count());
    vertices.extend(tri.vertices.iter().map(|&p| lift(p, 0.0)));
    vertices.extend(tri.vertices.iter().map(|&p| lift(p, -depth)));

    let mut indices = Vec::with_capacity(part.face_index_count());
    for &[a, b, c] in &tri.triangles {
        indices.extend_from_slice(&[c + base, b + base, a + base]);
    }
    let back = base + front_count;
    for &[a, b, c] in &tri.triangles {
        indices.extend_from_slice(&[a + back, b + back, c + back]);
    }

    (vertices, indices)
}

fn extrude_walls(part: &Part, depth: f64, base: u32) -> (Vec<DVec3>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(part.wall_vertex_count());
    let mut indices = Vec::with_capacity(part.wall_index_count());
    let mut contour_base = base;

    for contour in &part.contours {
        let points = contour.points();
        let n = points.len() as u32;

        vertices.extend(points.iter().map(|&p| lift(p, 0.0)));
        vertices.extend(points.iter().map(|&p| lift(p, -depth)));

        for i in 0..n {
            let next = (i + 1) % n;
            let f0 = contour_base + i;
            let f1 = contour_base + next;
            let b0 = contour_base + n + i;
            let b1 = contour_base + n + next;
            indices.extend_from_slice(&[f0, f1, b0, f1, b1, b0]);
        }

        contour_base += 2 * n;
    }

    (vertices, indices)
}
