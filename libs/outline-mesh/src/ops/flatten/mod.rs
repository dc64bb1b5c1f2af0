//! # Curve Flattening
//!
//! Converts curve segments into line segments so the rest of the pipeline
//! only deals with polygons.
//!
//! ## Modes
//!
//! - **Adaptive** (default): error-bounded subdivision, see
//!   [`curve::flatten_adaptive`]
//! - **Uniform**: a fixed number of evenly spaced segments per curve
//!
//! Which curve kinds are accepted depends on the [`FlattenPolicy`] of the
//! source. Glyph outlines only flatten quadratics; a cubic segment is reported
//! and dropped, leaving a gap in the outline.

pub mod curve;

#[cfg(test)]
mod tests;

use config::constants::{GLYPH_MAX_SUBDIVISIONS, VECTOR_ART_MAX_SUBDIVISIONS};
use config::Subdivision;
use glam::DVec2;
use pipeline_types::{Diagnostic, DiagnosticKind, OutlinePath, PathCommand, Stage};

use self::curve::{flatten_adaptive, flatten_uniform, Curve};

/// Per-source flattening rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenPolicy {
    /// Whether cubic segments are flattened or reported and skipped.
    pub supports_cubics: bool,
    /// Halving budget per accepted line segment in adaptive mode.
    pub max_subdivisions: u32,
}

impl FlattenPolicy {
    /// Glyph outlines: quadratics only, narrow budget.
    pub const GLYPH: Self = Self {
        supports_cubics: false,
        max_subdivisions: GLYPH_MAX_SUBDIVISIONS,
    };

    /// Vector artwork: quadratics and cubics, wide budget.
    pub const VECTOR_ART: Self = Self {
        supports_cubics: true,
        max_subdivisions: VECTOR_ART_MAX_SUBDIVISIONS,
    };
}

/// A path holding only `MoveTo`, `LineTo` and `Close` commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedPath(OutlinePath);

impl FlattenedPath {
    /// Wraps `path` if it is already free of curves.
    pub fn from_flat(path: OutlinePath) -> Option<Self> {
        path.is_flat().then_some(Self(path))
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        self.0.commands()
    }

    #[inline]
    pub fn as_path(&self) -> &OutlinePath {
        &self.0
    }
}

/// Result of flattening one path.
#[derive(Debug, Clone, Default)]
pub struct Flattened {
    pub path: FlattenedPath,
    pub diagnostics: Vec<Diagnostic>,
}

/// Flattens `path` within `tolerance`.
///
/// # Example
///
/// ```rust
/// use config::Subdivision;
/// use glam::DVec2;
/// use outline_mesh::ops::flatten::{flatten, FlattenPolicy};
/// use pipeline_types::OutlinePath;
///
/// let mut path = OutlinePath::new();
/// path.move_to(DVec2::ZERO)
///     .quad_to(DVec2::new(5.0, 10.0), DVec2::new(10.0, 0.0))
///     .close();
/// let flat = flatten(&path, FlattenPolicy::GLYPH, 0.1, Subdivision::Adaptive);
/// assert!(flat.path.as_path().is_flat());
/// assert!(flat.diagnostics.is_empty());
/// ```
pub fn flatten(
    path: &OutlinePath,
    policy: FlattenPolicy,
    tolerance: f64,
    subdivision: Subdivision,
) -> Flattened {
    let mut out = OutlinePath::with_capacity(path.len());
    let mut diagnostics = Vec::new();
    let mut current = DVec2::ZERO;
    let mut subpath_start = DVec2::ZERO;

    for (index, command) in path.commands().iter().enumerate() {
        match *command {
            PathCommand::MoveTo(p) => {
                out.move_to(p);
                current = p;
                subpath_start = p;
            }
            PathCommand::LineTo(p) => {
                out.line_to(p);
                current = p;
            }
            PathCommand::QuadCurveTo { ctrl, to } => {
                let curve = Curve::Quad {
                    from: current,
                    ctrl,
                    to,
                };
                flatten_curve(&curve, policy, tolerance, subdivision, index, &mut out);
                current = to;
            }
            PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => {
                if !policy.supports_cubics {
                    // The current point stays put, so the next segment starts
                    // where the dropped cubic started.
                    diagnostics.push(Diagnostic::warning(
                        Stage::Flatten,
                        DiagnosticKind::Unsupported,
                        format!("cubic segment at command {index} cannot be flattened for this source; skipped"),
                    ));
                    continue;
                }
                let curve = Curve::Cubic {
                    from: current,
                    ctrl1,
                    ctrl2,
                    to,
                };
                flatten_curve(&curve, policy, tolerance, subdivision, index, &mut out);
                current = to;
            }
            PathCommand::Close => {
                out.close();
                current = subpath_start;
            }
        }
    }

    Flattened {
        path: FlattenedPath(out),
        diagnostics,
    }
}

fn flatten_curve(
    curve: &Curve,
    policy: FlattenPolicy,
    tolerance: f64,
    subdivision: Subdivision,
    index: usize,
    out: &mut OutlinePath,
) {
    match subdivision {
        Subdivision::Adaptive => {
            let converged = flatten_adaptive(curve, tolerance, policy.max_subdivisions, |p| {
                out.line_to(p);
            });
            if !converged {
                log::debug!(
                    "curve at command {index} exceeded {} subdivisions; accepted best candidate",
                    policy.max_subdivisions
                );
            }
        }
        Subdivision::Uniform { segments } => flatten_uniform(curve, segments, |p| {
            out.line_to(p);
        }),
    }
}
