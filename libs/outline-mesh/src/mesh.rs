//! # Mesh Data Structure
//!
//! GPU-ready output of the pipeline: an interleaved vertex buffer, a flat
//! `u32` triangle index buffer and the bounding rectangle used for UVs.

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3, Vec3};
use pipeline_types::Rect;

/// Interleaved vertex: position, normal placeholder, texture coordinate.
///
/// Laid out as 8 consecutive `f32`s (32-byte stride) so the vertex buffer can
/// be copied into a GPU buffer as is.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Byte stride of one vertex.
    pub const STRIDE: usize = std::mem::size_of::<MeshVertex>();

    /// Creates a vertex with a zero normal.
    pub fn new(position: DVec3, uv: DVec2) -> Self {
        Self {
            position: position.as_vec3().to_array(),
            normal: [0.0; 3],
            uv: uv.as_vec2().to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Primitive kind of a submesh. Only triangle lists are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
}

/// Draw description of the index buffer, with the material it binds.
#[derive(Debug, Clone, PartialEq)]
pub struct Submesh<'a> {
    pub index_count: usize,
    pub primitive: Primitive,
    /// Opaque texture identifier for the base-color material, if any.
    pub texture: Option<&'a str>,
}

/// A triangle mesh with interleaved vertices and `u32` indices.
///
/// # Example
///
/// ```rust
/// use outline_mesh::Mesh;
///
/// let mesh = Mesh::default();
/// assert!(mesh.is_empty());
/// assert_eq!(mesh.submesh().index_count, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    bounds: Rect,
    texture: Option<String>,
}

impl Mesh {
    /// Creates an empty mesh framed by `bounds`.
    pub fn empty(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub(crate) fn from_buffers(
        vertices: Vec<MeshVertex>,
        indices: Vec<u32>,
        bounds: Rect,
        texture: Option<String>,
    ) -> Self {
        Self {
            vertices,
            indices,
            bounds,
            texture,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Bounding rectangle the UV coordinates were mapped from.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    pub fn set_texture(&mut self, texture: Option<String>) {
        self.texture = texture;
    }

    /// Describes the single submesh covering the whole index buffer.
    pub fn submesh(&self) -> Submesh<'_> {
        Submesh {
            index_count: self.indices.len(),
            primitive: Primitive::Triangles,
            texture: self.texture(),
        }
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Computes the axis-aligned bounding box of all positions.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut iter = self.vertices.iter().map(MeshVertex::position);
        let Some(first) = iter.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - The index buffer holds whole triangles
    /// - All triangle indices are valid
    ///
    /// Degenerate triangles are allowed: zero-depth extrusions emit them on
    /// purpose.
    pub fn validate(&self) -> bool {
        if self.indices.len() % 3 != 0 {
            return false;
        }
        let vertex_count = self.vertices.len() as u64;
        self.indices.iter().all(|&i| (i as u64) < vertex_count)
    }

    /// Computes smooth per-vertex normals from area-weighted face normals.
    ///
    /// Front, back and wall vertices are distinct copies, so caps and walls
    /// never blend. Within a wall there is no crease split: each contour
    /// point is one vertex shared by the two edges meeting there, so a sharp
    /// polygon corner gets the average of both wall normals and shades
    /// rounded. Vertices only touched by zero-area triangles keep a zero
    /// normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for [a, b, c] in self.triangles() {
            let v0 = self.vertices[a as usize].position();
            let v1 = self.vertices[b as usize].position();
            let v2 = self.vertices[c as usize].position();
            let normal = (v1 - v0).cross(v2 - v0);

            normals[a as usize] += normal;
            normals[b as usize] += normal;
            normals[c as usize] += normal;
        }

        for (vertex, normal) in self.vertices.iter_mut().zip(normals) {
            vertex.normal = normal.normalize_or_zero().to_array();
        }
    }

    /// Vertex buffer as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
