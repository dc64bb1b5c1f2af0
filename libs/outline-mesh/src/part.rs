//! # Parts
//!
//! A [`Part`] is one outline source carried through flattening, contour
//! building and tessellation. Its [`SourceKind`] picks the flattening and
//! contour rules once, when the part is built.

use config::PipelineConfig;
use pipeline_types::{OutlinePath, Rect};
use serde::{Deserialize, Serialize};

use crate::ops::contour::{Contour, ContourRules};
use crate::ops::flatten::{FlattenPolicy, FlattenedPath};
use crate::ops::tessellate::Triangulation;

/// Where an outline came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Font glyph outline: quadratic curves only.
    Glyph,
    /// Vector artwork: quadratic and cubic curves.
    VectorArt,
}

impl SourceKind {
    pub fn flatten_policy(self) -> FlattenPolicy {
        match self {
            SourceKind::Glyph => FlattenPolicy::GLYPH,
            SourceKind::VectorArt => FlattenPolicy::VECTOR_ART,
        }
    }

    /// Contour rules for this kind, with the config override applied.
    pub fn contour_rules(self, config: &PipelineConfig) -> ContourRules {
        let default = matches!(self, SourceKind::VectorArt);
        ContourRules {
            drop_leading_origin: config.drop_leading_origin.unwrap_or(default),
        }
    }
}

/// One input outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineSource {
    pub kind: SourceKind,
    pub path: OutlinePath,
}

impl OutlineSource {
    pub fn new(kind: SourceKind, path: OutlinePath) -> Self {
        Self { kind, path }
    }

    pub fn glyph(path: OutlinePath) -> Self {
        Self::new(SourceKind::Glyph, path)
    }

    pub fn vector_art(path: OutlinePath) -> Self {
        Self::new(SourceKind::VectorArt, path)
    }
}

/// One source after planar processing, ready for extrusion.
///
/// Invariant: every triangle index is below `triangulation.vertices.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub kind: SourceKind,
    pub path: FlattenedPath,
    pub contours: Vec<Contour>,
    pub triangulation: Triangulation,
}

impl Part {
    /// A part with no geometry.
    pub fn empty(kind: SourceKind) -> Self {
        Self {
            kind,
            path: FlattenedPath::default(),
            contours: Vec::new(),
            triangulation: Triangulation::default(),
        }
    }

    /// Total points across all contours.
    pub fn contour_point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Front and back copies of the triangulation vertices.
    #[inline]
    pub fn face_vertex_count(&self) -> usize {
        2 * self.triangulation.vertex_count()
    }

    #[inline]
    pub fn face_index_count(&self) -> usize {
        2 * 3 * self.triangulation.triangle_count()
    }

    /// Front and back copies of every contour point.
    #[inline]
    pub fn wall_vertex_count(&self) -> usize {
        2 * self.contour_point_count()
    }

    /// Two triangles per contour edge.
    #[inline]
    pub fn wall_index_count(&self) -> usize {
        6 * self.contour_point_count()
    }

    pub fn vertex_count(&self) -> usize {
        self.face_vertex_count() + self.wall_vertex_count()
    }

    pub fn index_count(&self) -> usize {
        self.face_index_count() + self.wall_index_count()
    }

    /// Bounds of the flattened outline.
    pub fn bounds(&self) -> Option<Rect> {
        self.path.as_path().bounds()
    }

    pub fn is_empty(&self) -> bool {
        self.triangulation.is_empty() && self.contours.is_empty()
    }
}
