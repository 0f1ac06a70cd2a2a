use crate::converter::VerticalConverter;
use cf_common::CoreResult;

/// `P(k) = p0 * exp(native[k])`.
pub struct LnPressureConverter {
    pressure: Vec<f64>,
}

impl LnPressureConverter {
    pub fn new(p0: f64, ln_native: Vec<f64>) -> Self {
        let pressure = ln_native.into_iter().map(|ln_p| p0 * ln_p.exp()).collect();
        Self { pressure }
    }
}

impl VerticalConverter for LnPressureConverter {
    fn physical_levels(&self, _x: usize, _y: usize, _t: usize) -> CoreResult<Vec<f64>> {
        Ok(self.pressure.clone())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn converts_ln_pressure_to_pressure() {
        let conv = LnPressureConverter::new(1000.0, vec![0.0, -0.6931471805599453]);
        let p = conv.physical_levels(0, 0, 0).unwrap();
        assert_relative_eq!(p[0], 1000.0, epsilon = 1e-9);
        assert_relative_eq!(p[1], 500.0, epsilon = 1e-6);
    }
}
