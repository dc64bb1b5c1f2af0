//! Shared vocabulary of the outline extrusion pipeline.
//!
//! Outline sources (font glyph extraction, SVG parsing) produce
//! [`OutlinePath`]s and a bounding [`Rect`]; the pipeline reports non-fatal
//! problems as [`Diagnostic`]s tagged with the [`Stage`] that raised them.

mod path;
mod rect;

pub use path::{OutlinePath, PathCommand};
pub use rect::Rect;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Pipeline stage a diagnostic originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Flatten,
    Contour,
    Tessellate,
}

/// What went wrong, independent of the wording of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A segment kind the stage cannot process; the segment was skipped.
    Unsupported,
    /// A subpath was left open; it was closed implicitly.
    MalformedTopology,
    /// The triangulation engine gave up; the part yields no geometry.
    TessellationFailed,
}

/// A non-fatal problem reported while meshing one part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub stage: Stage,
    pub kind: DiagnosticKind,
    /// Index of the part in source order, once known.
    pub part: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        stage: Stage,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            stage,
            kind,
            part: None,
            message: message.into(),
        }
    }

    pub fn warning(stage: Stage, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, stage, kind, message)
    }

    pub fn error(stage: Stage, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, stage, kind, message)
    }

    /// Tags the diagnostic with the index of the part it belongs to.
    pub fn for_part(mut self, part: usize) -> Self {
        self.part = Some(part);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.part {
            Some(part) => write!(f, "[{:?}] part {part}: {}", self.stage, self.message),
            None => write!(f, "[{:?}] {}", self.stage, self.message),
        }
    }
}
