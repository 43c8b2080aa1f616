//! Approximate roots from sign changes at Chebyshev-Lobatto samples.
//!
//! Cheaper than the eigenvalue solve and adequate as a seed for polishing.
//! Each sign change between adjacent samples is refined once by fitting a
//! quadratic through three neighbouring samples.

use std::f64::consts::PI;

use cheb_core::ChebyshevExpansion;
use nalgebra::{Matrix3, Vector3};

/// Approximate real roots inside the domain from `n_points + 1` samples.
///
/// Samples are taken at `t_i = cos(pi i / n_points)`, so roots are reported
/// from `xmax` towards `xmin`. A sample where the expansion is exactly zero
/// (of either sign) is reported as a root once, and the intervals on either
/// side of it are not scanned. Fewer than two intervals yields no roots.
pub fn real_roots_approx(ce: &ChebyshevExpansion, n_points: usize) -> Vec<f64> {
    if n_points < 2 {
        return Vec::new();
    }
    let n = n_points as f64;
    let ts: Vec<f64> = (0..=n_points).map(|i| (PI * i as f64 / n).cos()).collect();
    let ys = ce.y_clenshaw_xscaled(&ts);
    sampled_roots(&ts, &ys)
        .into_iter()
        .map(|t| ce.unscale_x(t))
        .collect()
}

/// Canonical roots from samples `ys` at `ts`, in sample order.
fn sampled_roots(ts: &[f64], ys: &[f64]) -> Vec<f64> {
    let mut roots = Vec::new();
    for i in 0..ts.len() {
        if ys[i] == 0.0 {
            roots.push(ts[i]);
            continue;
        }
        let Some(&y2) = ys.get(i + 1) else {
            break;
        };
        let y1 = ys[i];
        if y2 == 0.0 || y1.is_sign_negative() == y2.is_sign_negative() {
            continue;
        }
        // Three samples around the bracket, shifted left when possible
        let i0 = if i >= 1 { i - 1 } else { i };
        let i0 = i0.min(ts.len().saturating_sub(3));
        let t = quadratic_root_in(&ts[i0..i0 + 3], &ys[i0..i0 + 3], ts[i], ts[i + 1])
            .unwrap_or_else(|| secant(ts[i], y1, ts[i + 1], y2));
        roots.push(t);
    }
    roots
}

/// Root of the quadratic through three samples that lies within `[a, b]`.
///
/// `None` when the interpolant is degenerate or does not have exactly one
/// root inside the bracket.
fn quadratic_root_in(ts: &[f64], ys: &[f64], a: f64, b: f64) -> Option<f64> {
    let m = Matrix3::from_fn(|r, c| ts[r].powi(2 - c as i32));
    let rhs = Vector3::new(ys[0], ys[1], ys[2]);
    let abc = m.col_piv_qr().solve(&rhs)?;
    let (qa, qb, qc) = (abc[0], abc[1], abc[2]);

    let (lo, hi) = (a.min(b), a.max(b));
    let inside = |x: f64| x.is_finite() && x >= lo && x <= hi;

    if qa == 0.0 {
        if qb == 0.0 {
            return None;
        }
        let x = -qc / qb;
        return inside(x).then_some(x);
    }

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return None;
    }
    let q = -0.5 * (qb + qb.signum() * disc.sqrt());
    if q == 0.0 {
        return inside(0.0).then_some(0.0);
    }
    let (x1, x2) = (q / qa, qc / q);
    match (inside(x1), inside(x2)) {
        (true, false) => Some(x1),
        (false, true) => Some(x2),
        _ => None,
    }
}

fn secant(a: f64, fa: f64, b: f64, fb: f64) -> f64 {
    if fb == fa {
        return 0.5 * (a + b);
    }
    a - fa * (b - a) / (fb - fa)
}
