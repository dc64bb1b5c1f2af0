//! # Contour Building
//!
//! Groups the line segments of a flattened path into closed contours and
//! hands each contour to a [`ContourSink`] as soon as its `Close` command is
//! seen, so submission to the tessellator is interleaved with parsing.


use glam::DVec2;
use pipeline_types::{Diagnostic, DiagnosticKind, PathCommand, Stage};

use crate::ops::flatten::FlattenedPath;

/// A closed polygon boundary; the closing edge from the last point back to
/// the first is implicit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    points: Vec<DVec2>,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: DVec2) {
        self.points.push(point);
    }

    /// Shoelace area; positive for counter-clockwise contours.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum();
        0.5 * twice
    }

    /// Iterates the edges `(i, i + 1 mod N)`, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Receives contours the moment they are closed.
pub trait ContourSink {
    fn add_contour(&mut self, contour: &Contour);
}

impl ContourSink for Vec<Contour> {
    fn add_contour(&mut self, contour: &Contour) {
        self.push(contour.clone());
    }
}

/// Source-specific filtering applied while building contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContourRules {
    /// Drop a `MoveTo` point that is exactly `(0, 0)`.
    ///
    /// Vector artwork paths carry a spurious origin anchor at the start of
    /// some subpaths. Whether this filter is wanted for every artwork source
    /// is still waiting on confirmation, so it stays a separate switch.
    pub drop_leading_origin: bool,
}

/// Contours of one path plus what went wrong building them.
#[derive(Debug, Clone, Default)]
pub struct ContourSet {
    pub contours: Vec<Contour>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ContourSet {
    /// Total number of points across all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }
}

/// Splits `path` into contours, submitting each to `sink` as it closes.
///
/// Empty contours are neither stored nor submitted. A subpath left open when
/// the next `MoveTo` (or the end of the path) arrives is closed implicitly and
/// reported.
pub fn build_contours<S: ContourSink + ?Sized>(
    path: &FlattenedPath,
    rules: ContourRules,
    sink: &mut S,
) -> ContourSet {
    let mut set = ContourSet::default();
    let mut current = Contour::new();

    for (index, command) in path.commands().iter().enumerate() {
        match *command {
            PathCommand::MoveTo(p) => {
                if !current.is_empty() {
                    set.diagnostics.push(open_subpath(format!(
                        "subpath still open at command {index}; closed implicitly"
                    )));
                    submit(&mut current, &mut set, sink);
                }
                if rules.drop_leading_origin && p == DVec2::ZERO {
                    continue;
                }
                current.push(p);
            }
            PathCommand::LineTo(p) => current.push(p),
            PathCommand::Close => submit(&mut current, &mut set, sink),
            PathCommand::QuadCurveTo { .. } | PathCommand::CubicCurveTo { .. } => {
                // Unreachable through FlattenedPath's constructors.
                set.diagnostics.push(Diagnostic::warning(
                    Stage::Contour,
                    DiagnosticKind::Unsupported,
                    format!("curve segment at command {index} reached contour building; skipped"),
                ));
            }
        }
    }

    if !current.is_empty() {
        set.diagnostics.push(open_subpath(
            "path ended with an open subpath; closed implicitly".to_string(),
        ));
        submit(&mut current, &mut set, sink);
    }

    set
}

fn submit<S: ContourSink + ?Sized>(current: &mut Contour, set: &mut ContourSet, sink: &mut S) {
    let contour = std::mem::take(current);
    if contour.is_empty() {
        return;
    }
    sink.add_contour(&contour);
    set.contours.push(contour);
}

fn open_subpath(message: String) -> Diagnostic {
    Diagnostic::warning(Stage::Contour, DiagnosticKind::MalformedTopology, message)
}
