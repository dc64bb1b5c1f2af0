//! # Config Crate
//!
//! Centralized configuration for the outline extrusion pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FLATNESS, DEFAULT_UNIFORM_SUBDIVISIONS};
//! use config::{PipelineConfig, Subdivision};
//!
//! // Tolerances are compared squared by the flattener
//! let max_error_sq = DEFAULT_FLATNESS * DEFAULT_FLATNESS;
//! assert!(max_error_sq > 0.0);
//!
//! // Uniform subdivision defaults to a fixed segment count per curve
//! let uniform = Subdivision::uniform();
//! assert_eq!(uniform, Subdivision::Uniform { segments: DEFAULT_UNIFORM_SUBDIVISIONS });
//!
//! // Validated settings snapshot shared by the pipeline stages
//! let cfg = PipelineConfig::new(0.05, 2.0).expect("valid config");
//! assert_eq!(cfg.extrusion_depth, 2.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Any crate in the workspace can depend on it
//! - **Validated Snapshots**: Settings are checked once, at construction

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, PipelineConfig, Subdivision};

#[cfg(test)]
mod tests;
