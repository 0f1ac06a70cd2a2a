//! Axis Search: locate the fractional index of a query value on a
//! strictly monotone axis, with longitude wrap and linear extrapolation.

use cf_common::{Axis, AxisKind};
use std::f64::consts::PI;

fn bsearch(query: f64, axis: &[f64], ascending: bool) -> Result<usize, usize> {
    axis.binary_search_by(|probe| {
        let ord = probe.total_cmp(&query);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    })
}

/// Normalise a longitude query into the axis's own 2pi window, chosen by
/// the sign of the axis endpoints: if either endpoint is negative the
/// window is `(-pi, pi]`, otherwise `[0, 2pi)`.
fn normalise_longitude(query: f64, axis: &[f64]) -> f64 {
    let n = axis.len();
    if n == 0 {
        return query;
    }
    if axis[0] < 0.0 || axis[n - 1] < 0.0 {
        if query > PI {
            query - 2.0 * PI
        } else {
            query
        }
    } else if query < 0.0 {
        query + 2.0 * PI
    } else {
        query
    }
}

/// Return the fractional index `p` such that linearly interpolating `axis`
/// at `p` yields `query`. Inside the axis range this is exact bracketing;
/// outside, `p` is extrapolated linearly from the nearest two points.
pub fn fractional_index(axis: &Axis, query: f64) -> f64 {
    let values = axis.values();
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return 0.0;
    }
    if !query.is_finite() {
        return f64::NAN;
    }

    let q = if axis.kind() == AxisKind::Longitude {
        normalise_longitude(query, values)
    } else {
        query
    };

    match bsearch(q, values, axis.is_ascending()) {
        Ok(pos) => pos as f64,
        Err(pos) => {
            let mut n_pos = pos;
            if n_pos == n {
                n_pos -= 1;
            } else if n_pos == 0 {
                n_pos += 1;
            }
            let slope = values[n_pos] - values[n_pos - 1];
            let offset = values[n_pos] - slope * n_pos as f64;
            (q - offset) / slope
        }
    }
}
