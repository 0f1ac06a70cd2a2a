use crate::constants::{barometric_layer_thickness, virtual_temperature, EARTH_GRAVITY};
use crate::converter::VerticalConverter;
use cf_common::CoreResult;

/// Hydrostatic integration from the surface upward or downward, chosen per
/// column by comparing the wrapped pressure converter's first and last
/// level. Virtual temperature corrects for humidity when supplied.
pub struct PressureIntegrationConverter {
    pressure: Box<dyn VerticalConverter + Send + Sync>,
    surface_air_pressure: Vec<f64>,
    surface_geopotential: Vec<f64>,
    air_temperature: Vec<f64>,
    specific_humidity: Option<Vec<f64>>,
    nx: usize,
    ny: usize,
    nz: usize,
}

impl PressureIntegrationConverter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pressure: Box<dyn VerticalConverter + Send + Sync>,
        surface_air_pressure: Vec<f64>,
        surface_geopotential: Vec<f64>,
        air_temperature: Vec<f64>,
        specific_humidity: Option<Vec<f64>>,
        nx: usize,
        ny: usize,
        nz: usize,
    ) -> Self {
        Self {
            pressure,
            surface_air_pressure,
            surface_geopotential,
            air_temperature,
            specific_humidity,
            nx,
            ny,
            nz,
        }
    }

    fn idx3(&self, x: usize, y: usize, t: usize) -> usize {
        t * (self.ny * self.nx) + y * self.nx + x
    }

    fn idx4(&self, x: usize, y: usize, z: usize, t: usize) -> usize {
        t * (self.nz * self.ny * self.nx) + z * (self.ny * self.nx) + y * self.nx + x
    }
}

impl VerticalConverter for PressureIntegrationConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        let pressure = self.pressure.physical_levels(x, y, t)?;
        let nl = pressure.len();
        if nl == 0 {
            return Ok(Vec::new());
        }

        let (mut l0, mut l1, mut dl): (i64, i64, i64) = (0, nl as i64 - 1, 1);
        if pressure.first() < pressure.last() {
            std::mem::swap(&mut l0, &mut l1);
            dl = -1;
        }
        l1 += dl;

        let idx3 = self.idx3(x, y, t);
        let p_surf = self.surface_air_pressure[idx3];
        let mut a = self.surface_geopotential[idx3] / EARTH_GRAVITY;

        let mut altitude = vec![0.0_f64; nl];
        let mut l = l0;
        while l != l1 {
            let lu = l as usize;
            let p_low = if l == l0 { p_surf } else { pressure[(l - dl) as usize] };
            let p_high = pressure[lu];

            let idx4 = self.idx4(x, y, lu, t);
            let mut tv = self.air_temperature[idx4];
            if let Some(sh) = &self.specific_humidity {
                tv = virtual_temperature(sh[idx4], tv);
            }

            a += barometric_layer_thickness(p_low, p_high, tv);
            altitude[lu] = a;
            l += dl;
        }
        Ok(altitude)
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        &["x", "y", "z", "t"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::IdentityConverter;

    #[test]
    fn altitude_is_monotone_with_pressure() {
        // Decreasing pressure with height: column integrates upward.
        let pressure = Box::new(IdentityConverter::new(vec![100000.0, 85000.0, 70000.0]));
        let conv = PressureIntegrationConverter::new(
            pressure,
            vec![100000.0],
            vec![0.0],
            vec![288.0, 280.0, 270.0],
            None,
            1,
            1,
            3,
        );
        let altitude = conv.physical_levels(0, 0, 0).unwrap();
        assert!(altitude[0] < altitude[1]);
        assert!(altitude[1] < altitude[2]);
    }
}
