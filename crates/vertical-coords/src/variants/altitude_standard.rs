use crate::constants::{standard_altitude_at_pressure, standard_pressure_at_altitude};
use crate::converter::VerticalConverter;
use cf_common::CoreResult;

/// ICAO standard-atmosphere inversion of a height axis to pressure.
pub struct AltitudeStandardConverter {
    pressure: Vec<f64>,
}

impl AltitudeStandardConverter {
    pub fn new(heights: Vec<f64>) -> Self {
        let pressure = heights.into_iter().map(standard_pressure_at_altitude).collect();
        Self { pressure }
    }
}

impl VerticalConverter for AltitudeStandardConverter {
    fn physical_levels(&self, _x: usize, _y: usize, _t: usize) -> CoreResult<Vec<f64>> {
        Ok(self.pressure.clone())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Inverse ICAO standard atmosphere: wraps a pressure converter and yields
/// altitude for each of its levels.
pub struct PressureToStandardAltitudeConverter {
    inner: Box<dyn VerticalConverter + Send + Sync>,
}

impl PressureToStandardAltitudeConverter {
    pub fn new(inner: Box<dyn VerticalConverter + Send + Sync>) -> Self {
        Self { inner }
    }
}

impl VerticalConverter for PressureToStandardAltitudeConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        let pressure = self.inner.physical_levels(x, y, t)?;
        Ok(pressure.into_iter().map(standard_altitude_at_pressure).collect())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        self.inner.shape_dependency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::IdentityConverter;

    #[test]
    fn round_trips_through_standard_atmosphere() {
        let altitude_conv = AltitudeStandardConverter::new(vec![0.0, 1000.0, 5000.0]);
        let pressure = altitude_conv.physical_levels(0, 0, 0).unwrap();
        let back = PressureToStandardAltitudeConverter::new(Box::new(IdentityConverter::new(pressure)));
        let altitude = back.physical_levels(0, 0, 0).unwrap();
        assert!((altitude[1] - 1000.0).abs() < 1e-3);
    }
}
