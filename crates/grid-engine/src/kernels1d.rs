//! Interpolation Kernels (1-D): linear, log, and log-log vertical kernels.
//!
//! Each takes two layers `a_layer`/`b_layer` at known coordinates `a`/`b`
//! and a target coordinate `x`, filling `out` with the interpolated layer.

use cf_common::{CoreError, CoreResult};
use std::f64::consts::E;

/// `o(x) = A + f * (B - A)`, `f = (x - a) / (b - a)`; `f = 0` when `a == b`.
pub fn linear(a_layer: &[f64], b_layer: &[f64], out: &mut [f64], a: f64, b: f64, x: f64) {
    let f = if a == b { 0.0 } else { (x - a) / (b - a) };
    for ((o, &va), &vb) in out.iter_mut().zip(a_layer).zip(b_layer) {
        *o = va + f * (vb - va);
    }
}

/// Linear in log-coordinate: requires strictly positive `a`, `b`, `x`.
pub fn log(a_layer: &[f64], b_layer: &[f64], out: &mut [f64], a: f64, b: f64, x: f64) -> CoreResult<()> {
    if a <= 0.0 || b <= 0.0 || x <= 0.0 {
        return Err(CoreError::domain(format!(
            "log kernel requires strictly positive coordinates, got a={a}, b={b}, x={x}"
        )));
    }
    linear(a_layer, b_layer, out, a.ln(), b.ln(), x.ln());
    Ok(())
}

/// Linear in the log of the coordinate shifted by e, keeping the log
/// argument positive. Requires strictly positive `a`, `b`, `x`.
pub fn log_log(
    a_layer: &[f64],
    b_layer: &[f64],
    out: &mut [f64],
    a: f64,
    b: f64,
    x: f64,
) -> CoreResult<()> {
    if a <= 0.0 || b <= 0.0 || x <= 0.0 {
        return Err(CoreError::domain(format!(
            "log-log kernel requires strictly positive coordinates, got a={a}, b={b}, x={x}"
        )));
    }
    log(a_layer, b_layer, out, (a + E).ln(), (b + E).ln(), (x + E).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_identity_at_a() {
        let a_layer = [1.0, 2.0];
        let b_layer = [3.0, 4.0];
        let mut out = [0.0; 2];
        linear(&a_layer, &b_layer, &mut out, 0.0, 10.0, 0.0);
        assert_eq!(out, a_layer);
    }

    #[test]
    fn linear_equal_coords_returns_a() {
        let a_layer = [1.0];
        let b_layer = [5.0];
        let mut out = [0.0];
        linear(&a_layer, &b_layer, &mut out, 3.0, 3.0, 3.0);
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn log_kernel_s5() {
        let a_layer = [1.0];
        let b_layer = [2.0];
        let mut out = [0.0];
        log(&a_layer, &b_layer, &mut out, 1.0, 10.0, 10.0_f64.sqrt()).unwrap();
        assert_relative_eq!(out[0], 1.5, epsilon = 1e-9);
    }

    #[test]
    fn log_kernel_rejects_non_positive() {
        let a_layer = [1.0];
        let b_layer = [2.0];
        let mut out = [0.0];
        assert!(log(&a_layer, &b_layer, &mut out, -1.0, 10.0, 5.0).is_err());
    }

    #[test]
    fn log_log_rejects_non_positive() {
        let a_layer = [1.0];
        let b_layer = [2.0];
        let mut out = [0.0];
        assert!(log_log(&a_layer, &b_layer, &mut out, 0.0, 10.0, 5.0).is_err());
    }
}
