//! # Extrusion Pipeline
//!
//! Drives outline sources through every stage:
//!
//! ```text
//! OutlineSource → flatten → contours → tessellate → Part ┐
//! OutlineSource → flatten → contours → tessellate → Part ┼→ plan → extrude → Mesh
//! OutlineSource → flatten → contours → tessellate → Part ┘
//! ```
//!
//! Parts are built in parallel, each worker owning its own [`Tessellator`].
//! Problems confined to one part become [`Diagnostic`]s and never abort the
//! run; only invalid settings and buffer limits are errors.

use config::PipelineConfig;
use pipeline_types::{Diagnostic, DiagnosticKind, Rect, Severity, Stage};
use rayon::prelude::*;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::assemble::assemble;
use crate::ops::contour::build_contours;
use crate::ops::flatten::flatten;
use crate::ops::tessellate::{Tessellator, Triangulation};
use crate::part::{OutlineSource, Part};

/// Mesh plus everything reported while building it, in part order.
#[derive(Debug, Clone, Default)]
pub struct ExtrusionOutput {
    pub mesh: Mesh,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtrusionOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Runs the planar stages for one source.
///
/// The tessellator is left empty afterwards. If tessellation fails the part
/// keeps its flattened path but has no contours and no triangles, so it
/// contributes no geometry.
pub fn build_part(
    source: &OutlineSource,
    config: &PipelineConfig,
    tessellator: &mut Tessellator,
) -> (Part, Vec<Diagnostic>) {
    let flat = flatten(
        &source.path,
        source.kind.flatten_policy(),
        config.flatness,
        config.subdivision,
    );
    let mut diagnostics = flat.diagnostics;

    tessellator.clear();
    let set = build_contours(&flat.path, source.kind.contour_rules(config), tessellator);
    diagnostics.extend(set.diagnostics);

    let (contours, triangulation) = match tessellator.tessellate() {
        Ok(triangulation) => (set.contours, triangulation),
        Err(err) => {
            diagnostics.push(Diagnostic::error(
                Stage::Tessellate,
                DiagnosticKind::TessellationFailed,
                err.to_string(),
            ));
            (Vec::new(), Triangulation::default())
        }
    };

    let part = Part {
        kind: source.kind,
        path: flat.path,
        contours,
        triangulation,
    };
    (part, diagnostics)
}

/// Extrudes `sources` into one mesh, mapping UVs over the union of the
/// source bounds. Parts whose tessellation failed do not count towards the
/// bounds.
///
/// # Example
///
/// ```rust
/// use config::PipelineConfig;
/// use glam::DVec2;
/// use outline_mesh::{extrude_outlines, OutlineSource};
/// use pipeline_types::OutlinePath;
///
/// let triangle = OutlinePath::polygon(&[
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 1.0),
/// ]);
/// let out = extrude_outlines(&[OutlineSource::glyph(triangle)], &PipelineConfig::default())?;
/// assert_eq!(out.mesh.vertex_count(), 12);
/// assert_eq!(out.mesh.index_count(), 24);
/// # Ok::<(), outline_mesh::MeshError>(())
/// ```
pub fn extrude_outlines(
    sources: &[OutlineSource],
    config: &PipelineConfig,
) -> Result<ExtrusionOutput, MeshError> {
    run(sources, config, None)
}

/// Like [`extrude_outlines`], with UVs mapped over `bounds` instead.
pub fn extrude_outlines_within(
    sources: &[OutlineSource],
    config: &PipelineConfig,
    bounds: Rect,
) -> Result<ExtrusionOutput, MeshError> {
    run(sources, config, Some(bounds))
}

fn run(
    sources: &[OutlineSource],
    config: &PipelineConfig,
    bounds: Option<Rect>,
) -> Result<ExtrusionOutput, MeshError> {
    config.validate()?;

    let built: Vec<(Part, Vec<Diagnostic>)> = sources
        .par_iter()
        .map_init(
            || Tessellator::new(config.delaunay),
            |tessellator, source| build_part(source, config, tessellator),
        )
        .collect();

    finish(sources, built, config, bounds)
}

fn finish(
    sources: &[OutlineSource],
    built: Vec<(Part, Vec<Diagnostic>)>,
    config: &PipelineConfig,
    bounds: Option<Rect>,
) -> Result<ExtrusionOutput, MeshError> {
    let bounds = bounds.unwrap_or_else(|| source_bounds(sources, &built));

    let mut parts = Vec::with_capacity(built.len());
    let mut diagnostics = Vec::new();
    for (index, (part, part_diagnostics)) in built.into_iter().enumerate() {
        for diagnostic in part_diagnostics {
            let diagnostic = diagnostic.for_part(index);
            match diagnostic.severity {
                Severity::Error => log::error!("{diagnostic}"),
                Severity::Warning => log::warn!("{diagnostic}"),
            }
            diagnostics.push(diagnostic);
        }
        log::debug!(
            "part {index} ({:?}): {} contours, {} points, {} triangles ({} degenerate)",
            part.kind,
            part.contours.len(),
            part.contour_point_count(),
            part.triangulation.triangle_count(),
            part.triangulation.degenerate_count()
        );
        parts.push(part);
    }

    let mesh = assemble(&parts, config.extrusion_depth, bounds, config.texture.clone())?;
    Ok(ExtrusionOutput { mesh, diagnostics })
}

/// Union of the source path bounds of every part that tessellated.
///
/// Failed parts add no geometry, and their paths may hold the very points
/// that made them fail, so they are left out. Non-finite bounds are skipped.
fn source_bounds(sources: &[OutlineSource], built: &[(Part, Vec<Diagnostic>)]) -> Rect {
    sources
        .iter()
        .zip(built)
        .filter(|(_, (_, diagnostics))| {
            !diagnostics
                .iter()
                .any(|d| d.kind == DiagnosticKind::TessellationFailed)
        })
        .filter_map(|(s, _)| s.path.bounds())
        .filter(Rect::is_finite)
        .reduce(|a, b| a.union(&b))
        .unwrap_or_default()
}

/// Sequential pipeline that keeps one tessellator across runs.
///
/// Planar stages run on the calling thread, which suits callers that extrude
/// many small batches (a glyph at a time) from their own worker.
pub struct OutlineExtruder {
    config: PipelineConfig,
    tessellator: Tessellator,
}

impl OutlineExtruder {
    pub fn new(config: PipelineConfig) -> Result<Self, MeshError> {
        config.validate()?;
        let tessellator = Tessellator::new(config.delaunay);
        Ok(Self {
            config,
            tessellator,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the planar stages for one source.
    pub fn build_part(&mut self, source: &OutlineSource) -> (Part, Vec<Diagnostic>) {
        build_part(source, &self.config, &mut self.tessellator)
    }

    /// Extrudes `sources`; `bounds` defaults to the union of source bounds.
    pub fn extrude(
        &mut self,
        sources: &[OutlineSource],
        bounds: Option<Rect>,
    ) -> Result<ExtrusionOutput, MeshError> {
        let built: Vec<_> = sources.iter().map(|s| self.build_part(s)).collect();
        finish(sources, built, &self.config, bounds)
    }
}
