//! # Vertical Coordinates
//!
//! CF vertical coordinate converters (C7) and the vertical resampler (C8)
//! built on top of `grid-engine`'s axis search and 1-D interpolation
//! kernels.
//!
//! [`converter::VerticalConverter`] is the shared interface; [`variants`]
//! holds one implementation per CF transform family; [`factory`] builds a
//! converter from a [`cf_common::VerticalTransformation`] tag by
//! materialising its named fields through a [`cf_common::Reader`];
//! [`interpolator`] resamples a field from native levels onto target
//! physical levels.

pub mod constants;
pub mod converter;
pub mod factory;
pub mod interpolator;
pub mod variants;

pub use converter::VerticalConverter;
pub use factory::{build_converter, ColumnShape};
pub use interpolator::{resample, VerticalKernel};
