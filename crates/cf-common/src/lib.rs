//! Data model and error/collaborator contracts shared by every component of
//! the gridded-data numerical core.
//!
//! This crate carries no numerics — see `grid-engine`, `vertical-coords`,
//! and `projection` for that.

pub mod axis;
pub mod coord_system;
pub mod error;
pub mod field;
pub mod grid;
pub mod reader;
pub mod units;
pub mod vertical_transform;
pub mod writer;

pub use axis::{Axis, AxisKind};
pub use coord_system::CoordinateSystem;
pub use error::{CoreError, CoreResult};
pub use field::{replace_fill_with_nan, replace_nan_with_fill, Field, FieldMetadata};
pub use grid::{Grid, ProjectionDescriptor};
pub use reader::{DimensionRange, Reader};
pub use units::{LinearConversion, UnitConverter};
pub use vertical_transform::VerticalTransformation;
pub use writer::Writer;
