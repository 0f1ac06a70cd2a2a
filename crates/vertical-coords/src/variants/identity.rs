use super::flat_index;
use crate::converter::VerticalConverter;
use cf_common::CoreResult;

/// The native axis values already are the physical coordinate.
pub struct IdentityConverter {
    levels: Vec<f64>,
}

impl IdentityConverter {
    pub fn new(levels: Vec<f64>) -> Self {
        Self { levels }
    }
}

impl VerticalConverter for IdentityConverter {
    fn physical_levels(&self, _x: usize, _y: usize, _t: usize) -> CoreResult<Vec<f64>> {
        Ok(self.levels.clone())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Like [`IdentityConverter`], but the physical values vary with `(x, y, t)`.
pub struct Identity4dConverter {
    pressure: Vec<f64>,
    nx: usize,
    ny: usize,
    nz: usize,
}

impl Identity4dConverter {
    pub fn new(pressure: Vec<f64>, nx: usize, ny: usize, nz: usize) -> Self {
        Self { pressure, nx, ny, nz }
    }
}

impl VerticalConverter for Identity4dConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        let mut h = Vec::with_capacity(self.nz);
        for z in 0..self.nz {
            h.push(self.pressure[flat_index(x, y, z, t, self.nx, self.ny, self.nz)]);
        }
        Ok(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_levels_verbatim() {
        let conv = IdentityConverter::new(vec![1000.0, 850.0, 500.0]);
        assert_eq!(conv.physical_levels(0, 0, 0).unwrap(), vec![1000.0, 850.0, 500.0]);
    }
}
