//! Coordinate System: the four distinguished axes of a field, any of which
//! may be absent, plus its Vertical Transformation.

use crate::axis::Axis;
use crate::vertical_transform::VerticalTransformation;

/// The distinguished axes a field may carry, plus the transform that turns
/// its native vertical axis into a physical coordinate.
#[derive(Debug, Clone, Default)]
pub struct CoordinateSystem {
    pub geo_x: Option<Axis>,
    pub geo_y: Option<Axis>,
    pub geo_z: Option<Axis>,
    pub time: Option<Axis>,
    pub vertical_transform: Option<VerticalTransformation>,
}

impl CoordinateSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_horizontal(mut self, geo_x: Axis, geo_y: Axis) -> Self {
        self.geo_x = Some(geo_x);
        self.geo_y = Some(geo_y);
        self
    }

    pub fn with_vertical(mut self, geo_z: Axis, transform: VerticalTransformation) -> Self {
        self.geo_z = Some(geo_z);
        self.vertical_transform = Some(transform);
        self
    }

    pub fn with_time(mut self, time: Axis) -> Self {
        self.time = Some(time);
        self
    }

    pub fn has_vertical(&self) -> bool {
        self.geo_z.is_some()
    }
}
