//! Path command streams handed to the pipeline by outline sources.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::Rect;

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Starts a new subpath at the point.
    MoveTo(DVec2),
    /// Straight segment from the current point.
    LineTo(DVec2),
    /// Quadratic Bézier segment from the current point.
    QuadCurveTo { ctrl: DVec2, to: DVec2 },
    /// Cubic Bézier segment from the current point.
    CubicCurveTo { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
    /// Closes the current subpath back to its start.
    Close,
}

impl PathCommand {
    /// Returns true for quadratic and cubic segments.
    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            PathCommand::QuadCurveTo { .. } | PathCommand::CubicCurveTo { .. }
        )
    }

    /// Every point the command references, control points included.
    pub fn points(&self) -> impl Iterator<Item = DVec2> {
        let (buf, len): ([DVec2; 3], usize) = match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => ([p, DVec2::ZERO, DVec2::ZERO], 1),
            PathCommand::QuadCurveTo { ctrl, to } => ([ctrl, to, DVec2::ZERO], 2),
            PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => ([ctrl1, ctrl2, to], 3),
            PathCommand::Close => ([DVec2::ZERO; 3], 0),
        };
        buf.into_iter().take(len)
    }
}

/// An ordered sequence of [`PathCommand`]s.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use pipeline_types::OutlinePath;
///
/// let mut path = OutlinePath::new();
/// path.move_to(DVec2::new(0.0, 0.0))
///     .line_to(DVec2::new(1.0, 0.0))
///     .quad_to(DVec2::new(1.0, 1.0), DVec2::new(0.0, 1.0))
///     .close();
/// assert_eq!(path.len(), 4);
/// assert!(!path.is_flat());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutlinePath {
    commands: Vec<PathCommand>,
}

impl OutlinePath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Builds a closed polygon path from its vertices.
    pub fn polygon(points: &[DVec2]) -> Self {
        let mut path = Self::with_capacity(points.len() + 1);
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for p in iter {
                path.line_to(*p);
            }
            path.close();
        }
        path
    }

    pub fn move_to(&mut self, to: DVec2) -> &mut Self {
        self.push(PathCommand::MoveTo(to))
    }

    pub fn line_to(&mut self, to: DVec2) -> &mut Self {
        self.push(PathCommand::LineTo(to))
    }

    pub fn quad_to(&mut self, ctrl: DVec2, to: DVec2) -> &mut Self {
        self.push(PathCommand::QuadCurveTo { ctrl, to })
    }

    pub fn cubic_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) -> &mut Self {
        self.push(PathCommand::CubicCurveTo { ctrl1, ctrl2, to })
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::Close)
    }

    /// Appends a raw command.
    pub fn push(&mut self, command: PathCommand) -> &mut Self {
        self.commands.push(command);
        self
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns true when no curve commands remain.
    pub fn is_flat(&self) -> bool {
        !self.commands.iter().any(PathCommand::is_curve)
    }

    /// Bounding rectangle of every referenced point, control points included.
    ///
    /// Returns `None` for a path without points.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.commands.iter().flat_map(PathCommand::points))
    }

    /// Returns a copy with every point moved by `offset`.
    pub fn translated(&self, offset: DVec2) -> Self {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
                PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
                PathCommand::QuadCurveTo { ctrl, to } => PathCommand::QuadCurveTo {
                    ctrl: ctrl + offset,
                    to: to + offset,
                },
                PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => PathCommand::CubicCurveTo {
                    ctrl1: ctrl1 + offset,
                    ctrl2: ctrl2 + offset,
                    to: to + offset,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }
}

impl From<Vec<PathCommand>> for OutlinePath {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl FromIterator<PathCommand> for OutlinePath {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OutlinePath {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
