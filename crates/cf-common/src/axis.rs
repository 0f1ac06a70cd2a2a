//! Axis: a strictly monotone 1-D coordinate sequence.

use crate::error::{CoreError, CoreResult};

/// Tags the role an [`Axis`] plays in a [`crate::grid::Grid`] or
/// [`crate::coord_system::CoordinateSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Longitude,
    Latitude,
    ProjectionX,
    ProjectionY,
    Vertical,
    Time,
    Generic,
}

impl AxisKind {
    pub fn is_geographic(self) -> bool {
        matches!(self, AxisKind::Longitude | AxisKind::Latitude)
    }
}

/// A 1-D sequence of coordinates along one named dimension.
///
/// Values must be strictly monotone (increasing or decreasing); this is
/// checked at construction. Longitude axes are interpreted modulo 2π by
/// [`crate::axis`] consumers (see `grid_engine::axis_search`).
#[derive(Debug, Clone)]
pub struct Axis {
    name: String,
    kind: AxisKind,
    values: Vec<f64>,
    ascending: bool,
}

impl Axis {
    /// Build an axis, checking strict monotonicity.
    pub fn new(name: impl Into<String>, kind: AxisKind, values: Vec<f64>) -> CoreResult<Self> {
        if values.len() < 2 {
            return Ok(Self {
                name: name.into(),
                kind,
                ascending: true,
                values,
            });
        }
        let ascending = values[1] > values[0];
        for w in values.windows(2) {
            let ok = if ascending { w[1] > w[0] } else { w[1] < w[0] };
            if !ok {
                return Err(CoreError::configuration(format!(
                    "axis {:?} is not strictly monotone",
                    name.into()
                )));
            }
        }
        Ok(Self {
            name: name.into(),
            kind,
            values,
            ascending,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_monotone() {
        let r = Axis::new("x", AxisKind::Generic, vec![1.0, 2.0, 1.5]);
        assert!(r.is_err());
    }

    #[test]
    fn accepts_descending() {
        let a = Axis::new("lat", AxisKind::Latitude, vec![90.0, 0.0, -90.0]).unwrap();
        assert!(!a.is_ascending());
    }
}
