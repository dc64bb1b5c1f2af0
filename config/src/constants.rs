//! # Configuration Constants
//!
//! Centralized constants for the outline extrusion pipeline. All curve
//! flattening, tessellation and buffer limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Degeneracy tolerances
//! - **Flattening**: Curve subdivision defaults and budgets
//! - **Tessellation**: Triangulation refinement limits
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Area below which a triangle is treated as degenerate when validating
/// triangulations.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// FLATTENING CONSTANTS
// =============================================================================

/// Default flatness tolerance (ε) for curve flattening.
///
/// The flattener compares the squared deviation between a chord and the curve
/// it replaces against `ε²`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FLATNESS;
///
/// let max_error_sq = DEFAULT_FLATNESS * DEFAULT_FLATNESS;
/// assert!((max_error_sq - 0.01).abs() < 1e-12);
/// ```
pub const DEFAULT_FLATNESS: f64 = 0.1;

/// Maximum number of interval halvings per accepted line segment when
/// flattening glyph curves.
pub const GLYPH_MAX_SUBDIVISIONS: u32 = 20;

/// Maximum number of interval halvings per accepted line segment when
/// flattening vector-artwork curves.
///
/// Vector artwork carries cubic segments with much larger spans than glyph
/// quadratics, so it gets a wider budget.
pub const VECTOR_ART_MAX_SUBDIVISIONS: u32 = 200;

/// Number of line segments emitted per curve in uniform (non-adaptive) mode,
/// as picked by `Subdivision::uniform`.
pub const DEFAULT_UNIFORM_SUBDIVISIONS: u32 = 5;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Default extrusion depth along -Z.
pub const DEFAULT_EXTRUSION_DEPTH: f64 = 1.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Tolerance handed to the fill tessellator.
///
/// Contours are already flattened when they reach the tessellator, so this
/// only matters for the engine's internal intersection handling.
pub const TESSELLATION_TOLERANCE: f32 = 0.01;

/// Upper bound on Delaunay edge-flip sweeps over a single triangulation.
///
/// Lawson flipping terminates on its own; the bound only caps the cost of
/// near-cocircular input where floating-point noise could otherwise keep
/// flipping the same edges.
pub const MAX_DELAUNAY_PASSES: usize = 64;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single assembled mesh.
///
/// Indices are `u32`, so this must stay below `u32::MAX`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// assert!((MAX_VERTICES as u64) < u32::MAX as u64);
/// ```
pub const MAX_VERTICES: usize = 100_000_000;

/// Maximum number of indices in a single assembled mesh.
pub const MAX_INDICES: usize = 300_000_000;
