//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_degenerate_area_epsilon_is_small() {
    assert!(DEGENERATE_AREA_EPSILON > 0.0);
    assert!(DEGENERATE_AREA_EPSILON < 1e-6);
}

// =============================================================================
// FLATTENING TESTS
// =============================================================================

#[test]
fn test_default_flatness_is_positive() {
    assert!(DEFAULT_FLATNESS > 0.0);
}

#[test]
fn test_vector_art_budget_wider_than_glyph_budget() {
    assert!(VECTOR_ART_MAX_SUBDIVISIONS > GLYPH_MAX_SUBDIVISIONS);
}

#[test]
fn test_uniform_subdivisions_nonzero() {
    assert!(DEFAULT_UNIFORM_SUBDIVISIONS >= 1);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_limits_fit_u32_indices() {
    assert!((MAX_VERTICES as u64) < u32::MAX as u64);
    assert!(MAX_INDICES >= MAX_VERTICES);
}

#[test]
fn test_delaunay_passes_bounded() {
    assert!(MAX_DELAUNAY_PASSES >= 1);
}
