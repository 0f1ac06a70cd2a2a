//! # Grid Engine
//!
//! Numerical core for resampling and reconditioning gridded scalar and
//! vector fields on CF-convention axes: axis search, 2-D and 1-D
//! interpolation kernels, horizontal reprojection, hole filling, and the
//! array looper used to drive per-cell vertical conversions over an
//! arbitrary dimension order.
//!
//! ## Modules
//!
//! - [`axis_search`] — fractional index of a query value on a monotone axis
//! - [`kernels2d`] — nearest/bilinear/bicubic sampling of a horizontal slab
//! - [`kernels1d`] — linear/log/log-log sampling along a vertical axis
//! - [`reprojector`] — pulls an output grid's cells through an input
//!   grid's projection and samples with [`kernels2d`]
//! - [`fill`] — Poisson relaxation and creeping-average hole filling
//! - [`looper`] — nested iteration over named dimensions for arrays that
//!   each depend on a different subset of them
//! - [`config`] — tunable defaults for the above, loadable from the
//!   environment

pub mod axis_search;
pub mod config;
pub mod error;
pub mod fill;
pub mod kernels1d;
pub mod kernels2d;
pub mod looper;
pub mod reprojector;

pub use axis_search::fractional_index;
pub use config::{EngineConfig, InterpolationMethod};
pub use error::{GridEngineError, Result};
pub use fill::{creep_fill, poisson_fill};
pub use kernels2d::InterpolationMethod2d;
pub use looper::{ArrayBinding, ArrayLooper, DimSpec};
pub use reprojector::reproject;
