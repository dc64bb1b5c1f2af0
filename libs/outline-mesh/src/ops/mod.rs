//! # Pipeline Stages
//!
//! One module per stage, in pipeline order. Each stage is usable on its own;
//! [`crate::pipeline`] chains them.

pub mod flatten;
pub mod contour;
pub mod tessellate;
pub mod extrude;
pub mod assemble;
