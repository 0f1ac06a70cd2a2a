//! Error types for the grid engine crate.
//!
//! The numerical core shares [`cf_common::CoreError`] with the rest of the
//! workspace so callers chaining `projection` → `grid-engine` →
//! `vertical-coords` see one error type throughout.

pub use cf_common::{CoreError as GridEngineError, CoreResult as Result};
