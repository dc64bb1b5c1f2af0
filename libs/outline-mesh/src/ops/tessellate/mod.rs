//! # Planar Tessellation
//!
//! Triangulates the contours of one part with the even-odd fill rule, so
//! nested contours become holes regardless of their winding.
//!
//! The fill itself is lyon's sweep-line `FillTessellator`. Its output is
//! post-processed here: every triangle is turned counter-clockwise and,
//! unless disabled, interior edges are flipped until the triangulation is
//! Delaunay (see [`delaunay`]).
//!
//! A [`Tessellator`] is a reusable, single-threaded resource. Contours are
//! queued through [`ContourSink`] as they are closed and consumed by
//! [`Tessellator::tessellate`], which leaves the instance empty and ready for
//! the next part.

pub mod delaunay;


use config::constants::{DEGENERATE_AREA_EPSILON, TESSELLATION_TOLERANCE};
use glam::DVec2;
use lyon::math::Point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, TessellationError,
    VertexBuffers,
};
use thiserror::Error;

use crate::ops::contour::{Contour, ContourSink};

/// Why a set of contours could not be triangulated.
#[derive(Debug, Error)]
pub enum TessellateError {
    #[error("contour {contour} has a non-finite point")]
    NonFinite { contour: usize },
    #[error("contour {contour} has a point outside the single-precision range")]
    OutOfRange { contour: usize },
    #[error("fill tessellation failed: {0:?}")]
    Engine(TessellationError),
}

/// Triangles over a shared vertex list; indices are part-local.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    pub vertices: Vec<DVec2>,
    pub triangles: Vec<[u32; 3]>,
}

impl Triangulation {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Summed unsigned triangle area.
    pub fn area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                );
                0.5 * (b - a).perp_dot(c - a).abs()
            })
            .sum()
    }

    /// Triangles whose area is below [`DEGENERATE_AREA_EPSILON`].
    pub fn degenerate_count(&self) -> usize {
        self.triangles
            .iter()
            .filter(|&&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                );
                (0.5 * (b - a).perp_dot(c - a)).abs() < DEGENERATE_AREA_EPSILON
            })
            .count()
    }

    /// Checks every index addresses a vertex.
    pub fn validate(&self) -> bool {
        let n = self.vertices.len();
        self.triangles
            .iter()
            .all(|t| t.iter().all(|&i| (i as usize) < n))
    }
}

/// Fill tessellator with contours queued for the current part.
pub struct Tessellator {
    engine: FillTessellator,
    options: FillOptions,
    delaunay: bool,
    pending: Vec<Vec<Point>>,
    rejected: Option<TessellateError>,
}

impl Tessellator {
    /// Creates a tessellator; `delaunay` enables edge-flip refinement.
    pub fn new(delaunay: bool) -> Self {
        Self {
            engine: FillTessellator::new(),
            options: FillOptions::tolerance(TESSELLATION_TOLERANCE)
                .with_fill_rule(FillRule::EvenOdd),
            delaunay,
            pending: Vec::new(),
            rejected: None,
        }
    }

    /// Number of contours queued since the last [`tessellate`](Self::tessellate).
    pub fn pending_contours(&self) -> usize {
        self.pending.len()
    }

    /// Drops all queued contours.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.rejected = None;
    }

    /// Triangulates every queued contour and clears the queue, whatever the
    /// outcome.
    pub fn tessellate(&mut self) -> Result<Triangulation, TessellateError> {
        let pending = std::mem::take(&mut self.pending);
        if let Some(err) = self.rejected.take() {
            return Err(err);
        }
        if pending.is_empty() {
            return Ok(Triangulation::default());
        }

        let mut builder = Path::builder();
        for contour in &pending {
            let Some((first, rest)) = contour.split_first() else {
                continue;
            };
            builder.begin(*first);
            for &p in rest {
                builder.line_to(p);
            }
            builder.end(true);
        }
        let path = builder.build();

        let mut buffers: VertexBuffers<DVec2, u32> = VertexBuffers::new();
        self.engine
            .tessellate_path(
                &path,
                &self.options,
                &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                    let p = vertex.position();
                    DVec2::new(f64::from(p.x), f64::from(p.y))
                }),
            )
            .map_err(TessellateError::Engine)?;

        let mut triangles: Vec<[u32; 3]> = buffers
            .indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        delaunay::orient_ccw(&buffers.vertices, &mut triangles);
        if self.delaunay {
            let flips = delaunay::refine(&buffers.vertices, &mut triangles);
            log::trace!("delaunay refinement flipped {flips} edges");
        }

        Ok(Triangulation {
            vertices: buffers.vertices,
            triangles,
        })
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ContourSink for Tessellator {
    fn add_contour(&mut self, contour: &Contour) {
        let index = self.pending.len();
        let points: Vec<Point> = contour
            .points()
            .iter()
            .map(|p| Point::new(p.x as f32, p.y as f32))
            .collect();

        // Finite doubles beyond f32::MAX become infinite once narrowed, and
        // lyon asserts on non-finite input.
        if self.rejected.is_none() {
            if !contour.points().iter().all(|p| p.is_finite()) {
                self.rejected = Some(TessellateError::NonFinite { contour: index });
            } else if !points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
                self.rejected = Some(TessellateError::OutOfRange { contour: index });
            }
        }
        self.pending.push(points);
    }
}
