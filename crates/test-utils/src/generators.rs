//! Synthetic axis/grid/field generators for predictable, verifiable test data.

use cf_common::{Axis, AxisKind, Field, FieldMetadata, Grid, ProjectionDescriptor};

/// Builds a geographic axis with `n` evenly spaced values starting at
/// `start` and stepping by `step`.
pub fn uniform_axis(name: &str, kind: AxisKind, n: usize, start: f64, step: f64) -> Axis {
    let values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    Axis::new(name, kind, values).expect("uniform_axis: values must be strictly monotonic")
}

/// A longitude/latitude grid covering `[lon0, lon0 + (nx-1)*dlon]` by
/// `[lat0, lat0 + (ny-1)*dlat]`.
pub fn geographic_grid(nx: usize, ny: usize, lon0: f64, dlon: f64, lat0: f64, dlat: f64) -> Grid {
    let lon = uniform_axis("longitude", AxisKind::Longitude, nx, lon0, dlon);
    let lat = uniform_axis("latitude", AxisKind::Latitude, ny, lat0, dlat);
    Grid::new(lon, lat, ProjectionDescriptor::new("+proj=longlat +datum=WGS84")).expect("axis kinds match +proj=longlat")
}

/// Creates a test grid with predictable values.
///
/// Each cell value is `col * 1000 + row`, so callers can verify that
/// samples are read back at the position they expect:
/// `grid[row * width + col] == col * 1000 + row`.
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a temperature-like field in Kelvin, gradient from ~250K
/// (top-left) to ~310K (bottom-right).
pub fn create_temperature_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x_factor = col as f64 / width.max(1) as f64;
            let y_factor = row as f64 / height.max(1) as f64;
            data.push(250.0 + x_factor * 30.0 + y_factor * 30.0);
        }
    }
    data
}

/// Creates a U-component wind field (m/s), varying by row to mimic a
/// latitude-banded jet pattern: -20 at the top edge to +20 at the bottom.
pub fn create_u_wind_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        let lat_factor = (row as f64 / height.max(1) as f64 - 0.5) * 2.0;
        for _col in 0..width {
            data.push(lat_factor * 20.0);
        }
    }
    data
}

/// Creates a V-component wind field (m/s), varying by column: -15 at the
/// left edge to +15 at the right.
pub fn create_v_wind_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            let lon_factor = (col as f64 / width.max(1) as f64 - 0.5) * 2.0;
            data.push(lon_factor * 15.0);
        }
    }
    data
}

/// Creates a field filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a field with NaN at the given `(col, row)` positions, zero
/// elsewhere.
pub fn create_grid_with_nans(width: usize, height: usize, nan_positions: &[(usize, usize)]) -> Vec<f64> {
    let mut data = vec![0.0_f64; width * height];
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f64::NAN;
        }
    }
    data
}

/// Wraps a raw `width * height` row-major buffer as a [`Field`] over `x`/`y`
/// dimensions, tagged with the given units.
pub fn field_2d(values: Vec<f64>, width: usize, height: usize, units: &str) -> Field {
    Field::new(
        vec!["y".into(), "x".into()],
        vec!["latitude".into(), "longitude".into()],
        vec![height, width],
        values,
        FieldMetadata { units: Some(units.into()), ..Default::default() },
    )
    .expect("field_2d: shape matches values.len()")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_grid() {
        let grid = create_test_grid(10, 5);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0); // col=0, row=0
        assert_eq!(grid[1], 1000.0); // col=1, row=0
        assert_eq!(grid[10], 1.0); // col=0, row=1
        assert_eq!(grid[11], 1001.0); // col=1, row=1
    }

    #[test]
    fn test_create_temperature_grid() {
        let grid = create_temperature_grid(100, 100);
        assert_eq!(grid.len(), 10000);
        let min = grid.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = grid.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(min >= 250.0);
        assert!(max <= 310.0);
    }

    #[test]
    fn test_create_constant_grid() {
        let grid = create_constant_grid(10, 10, 42.0);
        assert_eq!(grid.len(), 100);
        assert!(grid.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn test_create_grid_with_nans() {
        let grid = create_grid_with_nans(10, 10, &[(5, 5), (0, 0)]);
        assert!(grid[0].is_nan());
        assert!(grid[55].is_nan());
        assert!(!grid[1].is_nan());
    }

    #[test]
    fn geographic_grid_has_expected_shape() {
        let grid = geographic_grid(4, 3, -10.0, 5.0, 20.0, 2.0);
        assert_eq!(grid.nx(), 4);
        assert_eq!(grid.ny(), 3);
    }

    #[test]
    fn field_2d_wraps_matching_shape() {
        let values = create_test_grid(4, 3);
        let field = field_2d(values, 4, 3, "K");
        assert_eq!(field.shape(), &[3, 4]);
        assert_eq!(field.metadata().units.as_deref(), Some("K"));
    }
}
