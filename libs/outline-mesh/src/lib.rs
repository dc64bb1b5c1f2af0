//! # Outline Mesh
//!
//! Turns 2D vector outlines (font glyphs, vector artwork) into extruded,
//! GPU-ready 3D triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! OutlinePath → flatten → contours → tessellate → extrude → assemble → Mesh
//! ```
//!
//! ## Algorithms
//!
//! - **Flattening**: adaptive midpoint-error subdivision, or uniform steps
//! - **Tessellation**: even-odd sweep fill (lyon) refined to Delaunay with
//!   exact predicates (robust)
//! - **Extrusion**: front/back caps plus stitched side walls
//! - **Assembly**: two-pass buffer layout, parallel extrusion (rayon)
//!
//! ## Usage
//!
//! ```rust
//! use config::PipelineConfig;
//! use glam::DVec2;
//! use outline_mesh::{extrude_outlines, OutlineSource};
//! use pipeline_types::OutlinePath;
//!
//! let mut path = OutlinePath::new();
//! path.move_to(DVec2::new(0.0, 0.0))
//!     .quad_to(DVec2::new(5.0, 10.0), DVec2::new(10.0, 0.0))
//!     .close();
//!
//! let config = PipelineConfig::new(0.05, 2.0)?;
//! let out = extrude_outlines(&[OutlineSource::glyph(path)], &config)?;
//! assert!(out.mesh.validate());
//! assert!(out.diagnostics.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod part;
pub mod pipeline;

pub use error::MeshError;
pub use mesh::{Mesh, MeshVertex, Primitive, Submesh};
pub use part::{OutlineSource, Part, SourceKind};
pub use pipeline::{
    build_part, extrude_outlines, extrude_outlines_within, ExtrusionOutput, OutlineExtruder,
};
