//! The shared interface every vertical transform variant implements (C7).

use cf_common::CoreResult;

/// Produces, for one column `(x, y, t)`, the physical vertical coordinate
/// (pressure in Pa, altitude in m, depth in m) of every native level.
///
/// Implementors may depend on fields that themselves vary over a subset of
/// `(x, y, t)` — a sigma converter's surface pressure depends on all three,
/// its `sigma` values on none. [`Self::shape_dependency`] declares that
/// subset so a [`grid_engine::ArrayLooper`] driving a full 4-D evaluation
/// can avoid re-deriving per-column state where it is actually constant.
pub trait VerticalConverter {
    /// Physical levels at column `(x, y, t)`, length equal to the number of
    /// native vertical levels.
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>>;

    /// Rejects target coordinates outside the column's physical range
    /// (e.g. requesting a depth below the sea floor). Converters with no
    /// such restriction accept everything.
    fn is_valid(&self, _value: f64, _x: usize, _y: usize, _t: usize) -> bool {
        true
    }

    /// Named dimensions this converter's own inputs vary over, for
    /// registration with a [`grid_engine::ArrayLooper`]. Defaults to the
    /// full `(x, y, t)` dependency; constant-in-some-dimension variants
    /// override this to report a smaller subset.
    fn shape_dependency(&self) -> &'static [&'static str] {
        &["x", "y", "t"]
    }
}
