//! Cartographic projection adapter and vector rotation.
//!
//! Wraps `proj4rs` to transform points between PROJ.4-grammar descriptors
//! and to build the per-cell Jacobians used to reproject vector fields.

pub mod adapter;
pub mod rotation;

pub use adapter::{project_axes, project_points};
pub use rotation::{apply_rotation, build_rotation_matrices, RotationMatrix, RotationMethod};
