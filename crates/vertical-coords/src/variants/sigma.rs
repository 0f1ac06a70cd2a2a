use crate::converter::VerticalConverter;
use cf_common::CoreResult;

/// `P(k) = p_top + sigma[k] * (p_surface(x,y,t) - p_top)`.
pub struct SigmaConverter {
    p_top: f64,
    sigma: Vec<f64>,
    surface_pressure: Vec<f64>,
    nx: usize,
    ny: usize,
}

impl SigmaConverter {
    pub fn new(p_top: f64, sigma: Vec<f64>, surface_pressure: Vec<f64>, nx: usize, ny: usize) -> Self {
        Self { p_top, sigma, surface_pressure, nx, ny }
    }
}

impl VerticalConverter for SigmaConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        let ps = self.surface_pressure[t * (self.ny * self.nx) + y * self.nx + x];
        Ok(self
            .sigma
            .iter()
            .map(|&s| self.p_top + s * (ps - self.p_top))
            .collect())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        &["x", "y", "t"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_top_and_surface() {
        let conv = SigmaConverter::new(0.0, vec![0.0, 0.5, 1.0], vec![1000.0], 1, 1);
        assert_eq!(conv.physical_levels(0, 0, 0).unwrap(), vec![0.0, 500.0, 1000.0]);
    }
}
