//! Validated pipeline settings shared across crates.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can stay declarative.

use std::fmt;

use crate::constants::{DEFAULT_EXTRUSION_DEPTH, DEFAULT_FLATNESS, DEFAULT_UNIFORM_SUBDIVISIONS};

/// How curve segments are converted into line segments.
///
/// # Examples
/// ```
/// use config::Subdivision;
/// assert_eq!(Subdivision::default(), Subdivision::Adaptive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subdivision {
    /// Error-bounded adaptive subdivision.
    #[default]
    Adaptive,
    /// Fixed number of evenly spaced segments per curve.
    Uniform { segments: u32 },
}

impl Subdivision {
    /// Uniform subdivision with the default segment count.
    ///
    /// # Examples
    /// ```
    /// use config::Subdivision;
    /// assert_eq!(Subdivision::uniform(), Subdivision::Uniform { segments: 5 });
    /// ```
    pub fn uniform() -> Self {
        Subdivision::Uniform {
            segments: DEFAULT_UNIFORM_SUBDIVISIONS,
        }
    }
}

/// Immutable snapshot of the settings one pipeline run works with.
///
/// # Examples
/// ```
/// use config::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert!(config.flatness > 0.0);
/// assert!(config.delaunay);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Flatness tolerance ε used by the curve flattener.
    pub flatness: f64,
    /// Distance between front (z = 0) and back (z = -depth) faces.
    pub extrusion_depth: f64,
    /// Curve subdivision mode.
    pub subdivision: Subdivision,
    /// Request constrained-Delaunay refinement of planar triangulations.
    pub delaunay: bool,
    /// Overrides the per-source default of the origin-point suppression rule.
    /// `None` keeps the source kind's default.
    pub drop_leading_origin: Option<bool>,
    /// Opaque texture identifier carried through to the mesh.
    pub texture: Option<String>,
}

impl PipelineConfig {
    /// Builds a configuration, validating tolerance and depth.
    ///
    /// # Examples
    /// ```
    /// use config::PipelineConfig;
    /// let cfg = PipelineConfig::new(0.05, 0.0).expect("valid config");
    /// assert_eq!(cfg.extrusion_depth, 0.0);
    /// assert!(PipelineConfig::new(0.0, 1.0).is_err());
    /// ```
    pub fn new(flatness: f64, extrusion_depth: f64) -> Result<Self, ConfigError> {
        let config = Self {
            flatness,
            extrusion_depth,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the curve subdivision mode.
    pub fn with_subdivision(mut self, subdivision: Subdivision) -> Self {
        self.subdivision = subdivision;
        self
    }

    /// Enables or disables Delaunay refinement.
    pub fn with_delaunay(mut self, delaunay: bool) -> Self {
        self.delaunay = delaunay;
        self
    }

    /// Forces the origin-point suppression rule on or off for every source.
    pub fn with_drop_leading_origin(mut self, enabled: bool) -> Self {
        self.drop_leading_origin = Some(enabled);
        self
    }

    /// Attaches an opaque texture identifier.
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    /// Checks every numeric field.
    ///
    /// Fields are public, so settings assembled by hand are re-checked by
    /// the pipeline before use.
    ///
    /// # Examples
    /// ```
    /// use config::{PipelineConfig, Subdivision};
    /// let cfg = PipelineConfig::default().with_subdivision(Subdivision::Uniform { segments: 0 });
    /// assert!(cfg.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.flatness.is_finite() || self.flatness <= 0.0 {
            return Err(ConfigError::InvalidFlatness(self.flatness));
        }
        if !self.extrusion_depth.is_finite() || self.extrusion_depth < 0.0 {
            return Err(ConfigError::InvalidDepth(self.extrusion_depth));
        }
        if let Subdivision::Uniform { segments } = self.subdivision {
            if segments == 0 {
                return Err(ConfigError::InvalidSegments(segments));
            }
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            flatness: DEFAULT_FLATNESS,
            extrusion_depth: DEFAULT_EXTRUSION_DEPTH,
            subdivision: Subdivision::Adaptive,
            delaunay: true,
            drop_leading_origin: None,
            texture: None,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the flatness tolerance is zero, negative or not finite.
    InvalidFlatness(f64),
    /// Raised when the extrusion depth is negative or not finite.
    InvalidDepth(f64),
    /// Raised when uniform subdivision asks for zero segments.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlatness(value) => {
                write!(f, "flatness must be positive and finite: {value}")
            }
            ConfigError::InvalidDepth(value) => {
                write!(f, "extrusion depth must be >= 0 and finite: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "uniform subdivision needs at least one segment: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
