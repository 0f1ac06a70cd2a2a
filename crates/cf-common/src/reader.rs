//! Reader collaborator: materialises one slice of one variable. Out of
//! scope to implement (§1 Non-goals) — the core only calls into this trait.

use crate::error::CoreResult;
use crate::field::Field;

/// A (start, size) pair along one dimension of a requested slice.
#[derive(Debug, Clone, Copy)]
pub struct DimensionRange {
    pub start: usize,
    pub size: usize,
}

/// Provided by an external collaborator (NetCDF, GRIB, Felt, METGM, ...).
///
/// The core never assumes streaming: it issues slice requests as needed and
/// retains no results across calls.
pub trait Reader {
    /// Materialise one slice of `variable`, described by a per-dimension
    /// (start, size) request, with unit conversion to `unit`.
    fn read_slice(
        &self,
        variable: &str,
        ranges: &[DimensionRange],
        unit: &str,
    ) -> CoreResult<Field>;
}
