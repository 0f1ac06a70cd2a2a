//! Grid: a pair of axes plus the projection they are expressed in.

use crate::axis::{Axis, AxisKind};
use crate::error::{CoreError, CoreResult};

/// An opaque PROJ.4-grammar string identifying a cartographic projection,
/// including plain geographic latlon.
///
/// The core never parses the string beyond the one check needed to enforce
/// the Grid invariant below; interpretation is the projection library's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionDescriptor(String);

impl ProjectionDescriptor {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this descriptor names a geographic (latlon) projection, as
    /// opposed to a projected (x/y in linear units) one.
    pub fn is_geographic(&self) -> bool {
        self.0
            .split_whitespace()
            .any(|tok| matches!(tok, "+proj=longlat" | "+proj=latlong" | "+proj=latlon"))
    }
}

impl std::fmt::Display for ProjectionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pair of axes (x, y) plus the projection they are expressed in.
///
/// Invariant: the axis tags are consistent with the projection kind — a
/// geographic projection pairs with `Longitude`/`Latitude` axes, a
/// projected one with `ProjectionX`/`ProjectionY`.
#[derive(Debug, Clone)]
pub struct Grid {
    x: Axis,
    y: Axis,
    projection: ProjectionDescriptor,
}

impl Grid {
    pub fn new(x: Axis, y: Axis, projection: ProjectionDescriptor) -> CoreResult<Self> {
        let (expect_x, expect_y) = if projection.is_geographic() {
            (AxisKind::Longitude, AxisKind::Latitude)
        } else {
            (AxisKind::ProjectionX, AxisKind::ProjectionY)
        };
        if x.kind() != expect_x || y.kind() != expect_y {
            return Err(CoreError::configuration(format!(
                "grid axis tags {:?}/{:?} inconsistent with projection {:?} (expected {:?}/{:?})",
                x.kind(),
                y.kind(),
                projection.as_str(),
                expect_x,
                expect_y
            )));
        }
        Ok(Self { x, y, projection })
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    pub fn projection(&self) -> &ProjectionDescriptor {
        &self.projection
    }

    pub fn nx(&self) -> usize {
        self.x.len()
    }

    pub fn ny(&self) -> usize {
        self.y.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_geographic_axes() {
        let x = Axis::new("lon", AxisKind::Longitude, vec![0.0, 1.0, 2.0]).unwrap();
        let y = Axis::new("lat", AxisKind::Latitude, vec![-1.0, 0.0, 1.0]).unwrap();
        let grid = Grid::new(x, y, ProjectionDescriptor::new("+proj=longlat +datum=WGS84"));
        assert!(grid.is_ok());
    }

    #[test]
    fn rejects_mismatched_axes() {
        let x = Axis::new("x", AxisKind::ProjectionX, vec![0.0, 1.0]).unwrap();
        let y = Axis::new("y", AxisKind::ProjectionY, vec![0.0, 1.0]).unwrap();
        let grid = Grid::new(x, y, ProjectionDescriptor::new("+proj=longlat"));
        assert!(grid.is_err());
    }
}
