//! Vertical Interpolator (C8): resample a scalar field from its native
//! vertical levels onto a caller-supplied set of target physical levels,
//! using a [`VerticalConverter`] (C7) for per-column native levels and a
//! `grid_engine` 1-D kernel for the actual resample.

use crate::converter::VerticalConverter;
use crate::variants::flat_index;
use cf_common::{Axis, AxisKind, CoreResult};
use grid_engine::fractional_index;

/// Which 1-D kernel to apply at each target level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalKernel {
    Linear,
    Log,
    LogLog,
}

/// Resample `field` (shape `nx * ny * nz_in * nt`) onto `target_levels`
/// (length `nz_out`), producing `nx * ny * nz_out * nt` output samples.
///
/// For each column the converter's levels bracket the target via
/// [`grid_engine::axis_search`]; a target rejected by
/// [`VerticalConverter::is_valid`] becomes `f64::NAN`.
pub fn resample(
    field: &[f64],
    nx: usize,
    ny: usize,
    nz_in: usize,
    nt: usize,
    converter: &dyn VerticalConverter,
    kernel: VerticalKernel,
    target_levels: &[f64],
) -> CoreResult<Vec<f64>> {
    let nz_out = target_levels.len();
    let mut out = vec![0.0_f64; nx * ny * nz_out * nt];

    for t in 0..nt {
        for y in 0..ny {
            for x in 0..nx {
                let levels = converter.physical_levels(x, y, t)?;
                let axis = Axis::new("native-vertical", AxisKind::Vertical, levels.clone())?;

                for (k, &target) in target_levels.iter().enumerate() {
                    let out_idx = flat_index(x, y, k, t, nx, ny, nz_out);
                    if !converter.is_valid(target, x, y, t) {
                        tracing::debug!(x, y, t, target, "target level outside column's physical range");
                        out[out_idx] = f64::NAN;
                        continue;
                    }

                    let p = fractional_index(&axis, target);
                    let z0 = (p.floor().max(0.0) as usize).min(nz_in - 1);
                    let z1 = (p.ceil().max(0.0) as usize).min(nz_in - 1);
                    let a = levels[z0];
                    let b = levels[z1];
                    let field_a = [field[flat_index(x, y, z0, t, nx, ny, nz_in)]];
                    let field_b = [field[flat_index(x, y, z1, t, nx, ny, nz_in)]];
                    let mut value = [0.0_f64];

                    match kernel {
                        VerticalKernel::Linear => {
                            grid_engine::kernels1d::linear(&field_a, &field_b, &mut value, a, b, target)
                        }
                        VerticalKernel::Log => {
                            grid_engine::kernels1d::log(&field_a, &field_b, &mut value, a, b, target)?
                        }
                        VerticalKernel::LogLog => {
                            grid_engine::kernels1d::log_log(&field_a, &field_b, &mut value, a, b, target)?
                        }
                    }
                    out[out_idx] = value[0];
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::IdentityConverter;
    use approx::assert_relative_eq;

    #[test]
    fn linear_kernel_recovers_affine_function_of_pressure() {
        // Native levels are pressure itself (identity); F(p) = 2*p + 1.
        let native_pressure = vec![1000.0, 800.0, 600.0, 400.0];
        let field: Vec<f64> = native_pressure.iter().map(|&p| 2.0 * p + 1.0).collect();
        let converter = IdentityConverter::new(native_pressure);

        let targets = vec![900.0, 700.0, 500.0];
        let out = resample(&field, 1, 1, 4, 1, &converter, VerticalKernel::Linear, &targets).unwrap();

        for (k, &target) in targets.iter().enumerate() {
            assert_relative_eq!(out[k], 2.0 * target + 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn invalid_target_becomes_nan() {
        struct AlwaysInvalid;
        impl VerticalConverter for AlwaysInvalid {
            fn physical_levels(&self, _: usize, _: usize, _: usize) -> CoreResult<Vec<f64>> {
                Ok(vec![100.0, 200.0])
            }
            fn is_valid(&self, _value: f64, _x: usize, _y: usize, _t: usize) -> bool {
                false
            }
        }
        let field = vec![1.0, 2.0];
        let out = resample(&field, 1, 1, 2, 1, &AlwaysInvalid, VerticalKernel::Linear, &[150.0]).unwrap();
        assert!(out[0].is_nan());
    }
}
