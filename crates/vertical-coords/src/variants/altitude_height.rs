use crate::converter::VerticalConverter;
use cf_common::CoreResult;

/// Adds or subtracts a surface topography field from a wrapped converter's
/// levels: altitude-to-height subtracts topography, height-to-altitude
/// adds it back.
pub struct AltitudeHeightConverter {
    inner: Box<dyn VerticalConverter + Send + Sync>,
    topography: Vec<f64>,
    nx: usize,
    ny: usize,
    to_height: bool,
}

impl AltitudeHeightConverter {
    pub fn new(
        inner: Box<dyn VerticalConverter + Send + Sync>,
        topography: Vec<f64>,
        nx: usize,
        ny: usize,
        to_height: bool,
    ) -> Self {
        Self { inner, topography, nx, ny, to_height }
    }
}

impl VerticalConverter for AltitudeHeightConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        let levels = self.inner.physical_levels(x, y, t)?;
        let topo = self.topography[t * (self.ny * self.nx) + y * self.nx + x];
        Ok(levels
            .into_iter()
            .map(|h| if self.to_height { h - topo } else { h + topo })
            .collect())
    }

    fn shape_dependency(&self) -> &'static [&'static str] {
        self.inner.shape_dependency()
    }
}

/// Reads levels straight from a time/space-varying geopotential field,
/// dividing by gravity to yield altitude.
pub struct GeopotentialToAltitudeConverter {
    geopotential: Vec<f64>,
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GeopotentialToAltitudeConverter {
    pub fn new(geopotential: Vec<f64>, nx: usize, ny: usize, nz: usize) -> Self {
        Self { geopotential, nx, ny, nz }
    }
}

impl VerticalConverter for GeopotentialToAltitudeConverter {
    fn physical_levels(&self, x: usize, y: usize, t: usize) -> CoreResult<Vec<f64>> {
        use crate::constants::EARTH_GRAVITY;
        let mut h = Vec::with_capacity(self.nz);
        for z in 0..self.nz {
            let idx = t * (self.nz * self.ny * self.nx) + z * (self.ny * self.nx) + y * self.nx + x;
            h.push(self.geopotential[idx] / EARTH_GRAVITY);
        }
        Ok(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::IdentityConverter;

    #[test]
    fn subtracts_topography_for_height() {
        let inner = Box::new(IdentityConverter::new(vec![100.0, 200.0]));
        let conv = AltitudeHeightConverter::new(inner, vec![20.0], 1, 1, true);
        assert_eq!(conv.physical_levels(0, 0, 0).unwrap(), vec![80.0, 180.0]);
    }
}
