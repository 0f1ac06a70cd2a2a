//! Projection Adapter: wraps `proj4rs` to transform arrays of (x, y)
//! between two PROJ.4-grammar projection descriptors.

use cf_common::{CoreError, CoreResult, ProjectionDescriptor};
use proj4rs::transform::transform;
use proj4rs::Proj;

fn build(descriptor: &ProjectionDescriptor) -> CoreResult<Proj> {
    Proj::from_proj_string(descriptor.as_str()).map_err(|e| {
        tracing::error!(descriptor = %descriptor.as_str(), error = %e, "failed to initialise projection");
        CoreError::projection_failure(format!(
            "failed to initialise projection {:?}: {e}",
            descriptor.as_str()
        ))
    })
}

/// Project an array of (x, y) points in place from `src` to `dst`.
///
/// Longitude/latitude inputs are expected in radians (the caller converts
/// degrees to radians before calling); outputs are in radians for a
/// geographic destination, in the destination's native linear unit
/// otherwise.
pub fn project_points(
    src: &ProjectionDescriptor,
    dst: &ProjectionDescriptor,
    x: &mut [f64],
    y: &mut [f64],
) -> CoreResult<()> {
    if x.len() != y.len() {
        return Err(CoreError::shape_mismatch(vec![x.len()], vec![y.len()]));
    }
    let from = build(src)?;
    let to = build(dst)?;
    for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
        let mut point = (*xi, *yi, 0.0_f64);
        transform(&from, &to, &mut point).map_err(|e| {
            CoreError::projection_failure(format!(
                "transform {:?} -> {:?} failed at ({}, {}): {e}",
                src.as_str(),
                dst.as_str(),
                xi,
                yi
            ))
        })?;
        *xi = point.0;
        *yi = point.1;
    }
    Ok(())
}

/// Project every intersection of the two 1-D source axes (length `nx`,
/// `ny`) from `src` to `dst`, producing two row-major arrays of size
/// `nx * ny`: the projected x and y coordinate of every grid point.
pub fn project_axes(
    src: &ProjectionDescriptor,
    dst: &ProjectionDescriptor,
    axis_x: &[f64],
    axis_y: &[f64],
) -> CoreResult<(Vec<f64>, Vec<f64>)> {
    let nx = axis_x.len();
    let ny = axis_y.len();
    let mut xs = Vec::with_capacity(nx * ny);
    let mut ys = Vec::with_capacity(nx * ny);
    for &yv in axis_y {
        for &xv in axis_x {
            xs.push(xv);
            ys.push(yv);
        }
    }
    project_points(src, dst, &mut xs, &mut ys)?;
    Ok((xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn longlat() -> ProjectionDescriptor {
        ProjectionDescriptor::new("+proj=longlat +ellps=WGS84")
    }

    #[test]
    fn identity_projection_round_trips() {
        let src = longlat();
        let dst = longlat();
        let mut x = vec![0.1_f64, 0.2];
        let mut y = vec![0.3_f64, 0.4];
        project_points(&src, &dst, &mut x, &mut y).unwrap();
        assert_relative_eq!(x[0], 0.1, epsilon = 1e-9);
        assert_relative_eq!(y[1], 0.4, epsilon = 1e-9);
    }

    #[test]
    fn mismatched_lengths_error() {
        let src = longlat();
        let dst = longlat();
        let mut x = vec![0.0];
        let mut y = vec![0.0, 0.1];
        assert!(project_points(&src, &dst, &mut x, &mut y).is_err());
    }

    #[test]
    fn project_axes_shapes_output() {
        let src = longlat();
        let dst = longlat();
        let axis_x = vec![0.0, 0.1, 0.2];
        let axis_y = vec![0.0, 0.1];
        let (xs, ys) = project_axes(&src, &dst, &axis_x, &axis_y).unwrap();
        assert_eq!(xs.len(), 6);
        assert_eq!(ys.len(), 6);
    }
}
