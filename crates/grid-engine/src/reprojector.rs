//! Horizontal Reprojector (C5): resample a 3-D (x, y, z) slab from an
//! input grid onto an output grid, pulling samples through the input
//! grid's projection.

use crate::axis_search::fractional_index;
use crate::kernels2d::{sample, InterpolationMethod2d};
use cf_common::{CoreResult, Grid};
use projection::project_axes;
use rayon::prelude::*;
use std::f64::consts::PI;

fn axis_in_kernel_units(grid: &Grid, values: &[f64]) -> Vec<f64> {
    if grid.x_axis().kind().is_geographic() {
        values.iter().map(|v| v * PI / 180.0).collect()
    } else {
        values.to_vec()
    }
}

/// Resample `infield` (shape `nx(src) * ny(src) * nz`) from `src` onto
/// `dst`'s axes, writing `nx(dst) * ny(dst) * nz` output samples.
///
/// Geographic axes on either grid are treated as degrees in the `Grid`
/// data model and converted to radians here, matching [`projection`]'s
/// convention.
pub fn reproject(
    src: &Grid,
    dst: &Grid,
    infield: &[f64],
    nz: usize,
    method: InterpolationMethod2d,
    parallel: bool,
) -> CoreResult<Vec<f64>> {
    let ix = src.nx();
    let iy = src.ny();
    let ox = dst.nx();
    let oy = dst.ny();

    let in_x = axis_in_kernel_units(src, src.x_axis().values());
    let in_y = axis_in_kernel_units(src, src.y_axis().values());
    let out_x = axis_in_kernel_units(dst, dst.x_axis().values());
    let out_y = axis_in_kernel_units(dst, dst.y_axis().values());

    // Pull: project the output grid's intersections into the input
    // projection so we know, for every output cell, which input column to
    // sample.
    let (mut query_x, mut query_y) =
        project_axes(dst.projection(), src.projection(), &out_x, &out_y).map_err(|e| {
            tracing::error!(src = %src.projection(), dst = %dst.projection(), error = %e, "reprojection failed");
            e
        })?;

    tracing::debug!(ix, iy, ox, oy, nz, parallel, "reprojecting slab");

    let in_axis_x = cf_common::Axis::new("in_x", src.x_axis().kind(), in_x)
        .map_err(|_| cf_common::CoreError::internal("reprojector: non-monotone input x axis"))?;
    let in_axis_y = cf_common::Axis::new("in_y", src.y_axis().kind(), in_y)
        .map_err(|_| cf_common::CoreError::internal("reprojector: non-monotone input y axis"))?;

    for qx in query_x.iter_mut() {
        *qx = fractional_index(&in_axis_x, *qx);
    }
    for qy in query_y.iter_mut() {
        *qy = fractional_index(&in_axis_y, *qy);
    }

    let mut outfield = vec![0.0_f64; ox * oy * nz];

    let compute_cell = |i: usize, out: &mut [f64]| {
        sample(method, infield, out, query_x[i], query_y[i], ix, iy, nz);
    };

    if parallel {
        outfield
            .par_chunks_mut(nz)
            .enumerate()
            .for_each(|(i, out)| compute_cell(i, out));
    } else {
        for (i, out) in outfield.chunks_mut(nz).enumerate() {
            compute_cell(i, out);
        }
    }

    Ok(outfield)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_common::{Axis, AxisKind, ProjectionDescriptor};

    #[test]
    fn identity_reprojection_preserves_values() {
        let proj = ProjectionDescriptor::new("+proj=longlat +ellps=WGS84");
        let x = Axis::new("lon", AxisKind::Longitude, vec![0.0, 1.0, 2.0]).unwrap();
        let y = Axis::new("lat", AxisKind::Latitude, vec![0.0, 1.0]).unwrap();
        let grid = Grid::new(x, y, proj).unwrap();

        let field = vec![
            0.0, 1.0, 2.0, //
            3.0, 4.0, 5.0, //
        ];
        let out = reproject(&grid, &grid, &field, 1, InterpolationMethod2d::Nearest, false).unwrap();
        assert_eq!(out, field);
    }
}
