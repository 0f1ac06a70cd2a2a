use crate::converter::VerticalConverter;
use cf_common::CoreResult;

/// `P(k) = a[k] * p0 + b[k] * p_surface(x,y,t)`.
pub struct HybridSigmaConverter {
    a: Vec<f64>,
    b: Vec<f64>,
    p0: f64,
    surface_pressure: Vec<f64>,
    nx: usize,
    ny: usize,
}

impl HybridSigmaConverter {
    pub fn new(a: Vec<f64>, b: Vec<f64>, p0: f64, surface_pressure: Vec<f64>, nx: usize, ny: usize) -> Self {
        Self { a, b, p0, surface_pressure, nx, ny }
    }
}

impl VerticalConverter for HybridSigmaConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        let ps = self.surface_pressure[t * (self.ny * self.nx) + y * self.nx + x];
        Ok(self
            .a
            .iter()
            .zip(&self.b)
            .map(|(&ak, &bk)| ak * self.p0 + bk * ps)
            .collect())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        &["x", "y", "t"]
    }
}

/// Like [`HybridSigmaConverter`] but `ap[k]` is already in Pa:
/// `P(k) = ap[k] + b[k] * p_surface(x,y,t)`.
pub struct HybridSigmaApConverter {
    ap: Vec<f64>,
    b: Vec<f64>,
    surface_pressure: Vec<f64>,
    nx: usize,
    ny: usize,
}

impl HybridSigmaApConverter {
    pub fn new(ap: Vec<f64>, b: Vec<f64>, surface_pressure: Vec<f64>, nx: usize, ny: usize) -> Self {
        Self { ap, b, surface_pressure, nx, ny }
    }
}

impl VerticalConverter for HybridSigmaApConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        let ps = self.surface_pressure[t * (self.ny * self.nx) + y * self.nx + x];
        Ok(self
            .ap
            .iter()
            .zip(&self.b)
            .map(|(&apk, &bk)| apk + bk * ps)
            .collect())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        &["x", "y", "t"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hybrid_sigma_pressure_at_column_endpoints() {
        // a=[0,0.5,1], b=[1,0.5,0], p0=1000, ps=900 (spec §8 S4 parameters).
        let conv = HybridSigmaConverter::new(vec![0.0, 0.5, 1.0], vec![1.0, 0.5, 0.0], 1000.0, vec![900.0], 1, 1);
        let p = conv.physical_levels(0, 0, 0).unwrap();
        assert_relative_eq!(p[0], 900.0, epsilon = 1e-9);
        assert_relative_eq!(p[2], 1000.0, epsilon = 1e-9);
        // a(k)*p0 + b(k)*ps applied at the midpoint: 0.5*1000 + 0.5*900.
        assert_relative_eq!(p[1], 950.0, epsilon = 1e-9);
    }

    #[test]
    fn hybrid_sigma_ap_uses_ap_directly() {
        let conv = HybridSigmaApConverter::new(vec![0.0, 500.0], vec![1.0, 0.5], vec![900.0], 1, 1);
        let p = conv.physical_levels(0, 0, 0).unwrap();
        assert_relative_eq!(p[0], 900.0, epsilon = 1e-9);
        assert_relative_eq!(p[1], 950.0, epsilon = 1e-9);
    }
}
