//! Vector Rotation: per-output-cell 2x2 Jacobian of the forward (input ->
//! output) projection, used to reproject (u, v) vector fields alongside a
//! scalar reprojection.

use crate::adapter::project_points;
use cf_common::{CoreResult, ProjectionDescriptor};
use nalgebra::{Matrix2, Vector2};

/// How the rotated vector's length should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMethod {
    /// `u' = M * u`; magnitude follows the local area distortion.
    PreserveDirection,
    /// `u' = M * u`, then rescaled back to the original vector length.
    PreserveSize,
}

/// A row-major 2x2 rotation matrix for one output cell:
/// `[dOutX/dInX, dOutY/dInX, dOutX/dInY, dOutY/dInY]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationMatrix {
    pub m: [f64; 4],
}

impl RotationMatrix {
    fn as_matrix2(&self) -> Matrix2<f64> {
        // `self.m` is row-major [dOutX/dInX, dOutY/dInX, dOutX/dInY, dOutY/dInY];
        // nalgebra's `Matrix2::new` takes arguments row by row.
        Matrix2::new(self.m[0], self.m[2], self.m[1], self.m[3])
    }

    fn apply(&self, u: f64, v: f64) -> (f64, f64) {
        let out = self.as_matrix2() * Vector2::new(u, v);
        (out.x, out.y)
    }
}

/// Build the per-cell rotation matrices for an `ox * oy` output grid,
/// row-major, one [`RotationMatrix`] per output cell.
///
/// `out_x`/`out_y` are the output axis values already converted to the
/// kernel's native unit (radians for a geographic axis). `in_proj_x`/
/// `in_proj_y` are the output grid's intersections already projected into
/// the input projection (the "pull" positions computed by the reprojector).
pub fn build_rotation_matrices(
    proj_input: &ProjectionDescriptor,
    proj_output: &ProjectionDescriptor,
    out_x: &[f64],
    out_y: &[f64],
    in_proj_x: &[f64],
    in_proj_y: &[f64],
) -> CoreResult<Vec<RotationMatrix>> {
    let ox = out_x.len();
    let oy = out_y.len();
    debug_assert_eq!(in_proj_x.len(), ox * oy);
    debug_assert_eq!(in_proj_y.len(), ox * oy);

    // 0.1% of the spacing between neighbouring input-projected cells; fall
    // back to a unit delta when a direction has no neighbour to measure
    // spacing against (a 1-wide or 1-tall output grid).
    let delta_x = if ox > 1 {
        if oy > 1 {
            1e-3 * (in_proj_x[1 * ox + 1] - in_proj_x[0])
        } else {
            1e-3 * (in_proj_x[1] - in_proj_x[0])
        }
    } else if oy > 1 {
        1e-3 * (in_proj_x[ox] - in_proj_x[0])
    } else {
        1e-3
    };
    let delta_y = delta_x;

    let mut perturbed_x_x = in_proj_x.to_vec();
    let mut perturbed_x_y = in_proj_y.to_vec();
    for v in perturbed_x_x.iter_mut() {
        *v += delta_x;
    }
    project_points(proj_input, proj_output, &mut perturbed_x_x, &mut perturbed_x_y)?;

    let mut perturbed_y_x = in_proj_x.to_vec();
    let mut perturbed_y_y = in_proj_y.to_vec();
    for v in perturbed_y_y.iter_mut() {
        *v += delta_y;
    }
    project_points(proj_input, proj_output, &mut perturbed_y_x, &mut perturbed_y_y)?;

    let inv_dx = 1.0 / delta_x;
    let inv_dy = 1.0 / delta_y;
    let mut matrices = Vec::with_capacity(ox * oy);
    for y in 0..oy {
        for x in 0..ox {
            let idx = y * ox + x;
            matrices.push(RotationMatrix {
                m: [
                    (perturbed_x_x[idx] - out_x[x]) * inv_dx,
                    (perturbed_x_y[idx] - out_y[y]) * inv_dx,
                    (perturbed_y_x[idx] - out_x[x]) * inv_dy,
                    (perturbed_y_y[idx] - out_y[y]) * inv_dy,
                ],
            });
        }
    }
    Ok(matrices)
}

/// Apply the per-cell matrices to every z-layer of a (u, v) field, each
/// laid out as `oz` contiguous `ox * oy` layers.
pub fn apply_rotation(
    matrices: &[RotationMatrix],
    u: &mut [f64],
    v: &mut [f64],
    layer_size: usize,
    method: RotationMethod,
) {
    for (u_layer, v_layer) in u.chunks_mut(layer_size).zip(v.chunks_mut(layer_size)) {
        for (i, matrix) in matrices.iter().enumerate() {
            let (u_new, v_new) = matrix.apply(u_layer[i], v_layer[i]);
            match method {
                RotationMethod::PreserveDirection => {
                    u_layer[i] = u_new;
                    v_layer[i] = v_new;
                }
                RotationMethod::PreserveSize => {
                    let orig_sq = u_layer[i] * u_layer[i] + v_layer[i] * v_layer[i];
                    let new_sq = u_new * u_new + v_new * v_new;
                    let norm = (orig_sq / new_sq).sqrt();
                    u_layer[i] = u_new * norm;
                    v_layer[i] = v_new * norm;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_projection_yields_identity_matrix() {
        let proj = ProjectionDescriptor::new("+proj=longlat +ellps=WGS84");
        let out_x = vec![0.0_f64, 0.1, 0.2];
        let out_y = vec![0.0_f64, 0.1];
        let mut in_x = Vec::new();
        let mut in_y = Vec::new();
        for &yv in &out_y {
            for &xv in &out_x {
                in_x.push(xv);
                in_y.push(yv);
            }
        }
        let matrices =
            build_rotation_matrices(&proj, &proj, &out_x, &out_y, &in_x, &in_y).unwrap();
        for m in &matrices {
            assert_relative_eq!(m.m[0], 1.0, epsilon = 1e-6);
            assert_relative_eq!(m.m[1], 0.0, epsilon = 1e-6);
            assert_relative_eq!(m.m[2], 0.0, epsilon = 1e-6);
            assert_relative_eq!(m.m[3], 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn single_column_output_does_not_panic() {
        let proj = ProjectionDescriptor::new("+proj=longlat +ellps=WGS84");
        let out_x = vec![0.0_f64];
        let out_y = vec![0.0_f64, 0.1, 0.2];
        let in_x = vec![0.0_f64; 3];
        let in_y = out_y.clone();
        let matrices =
            build_rotation_matrices(&proj, &proj, &out_x, &out_y, &in_x, &in_y).unwrap();
        assert_eq!(matrices.len(), 3);
    }

    #[test]
    fn preserve_size_keeps_magnitude() {
        let matrix = RotationMatrix {
            m: [2.0, 0.0, 0.0, 1.0],
        };
        let mut u = vec![3.0];
        let mut v = vec![4.0];
        apply_rotation(&[matrix], &mut u, &mut v, 1, RotationMethod::PreserveSize);
        let mag = (u[0] * u[0] + v[0] * v[0]).sqrt();
        assert_relative_eq!(mag, 5.0, epsilon = 1e-9);
    }
}
