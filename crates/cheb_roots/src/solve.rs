//! Inverse evaluation of monotonic expansions.

use cheb_core::{ChebError, ChebyshevExpansion};
use tracing::trace;

const MAX_BISECTION_ITER: u32 = 200;

/// Find `x` in the domain with `ce.y(x) == y` for a strictly monotonic
/// expansion.
///
/// Fails with [`ChebError::NotMonotonic`] when the nodal values are not
/// strictly monotonic and with [`ChebError::NotBracketed`] when `y` lies
/// outside the range spanned by the endpoint values.
pub fn monotonic_solvex(ce: &ChebyshevExpansion, y: f64) -> Result<f64, ChebError> {
    if !ce.is_monotonic() {
        return Err(ChebError::NotMonotonic);
    }
    let (a, b) = ce.domain();
    let f = |x: f64| ce.y(x) - y;
    let (fa, fb) = (f(a), f(b));

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa * fb > 0.0 || !(fa * fb).is_finite() {
        return Err(ChebError::NotBracketed);
    }

    let tol = 4.0 * f64::EPSILON * a.abs().max(b.abs()).max(1.0);
    let x = bisect_zero(a, fa, b, MAX_BISECTION_ITER, tol, &f);
    trace!(y, x, "monotonic inverse");
    Ok(x)
}

fn bisect_zero<F>(mut x_a: f64, mut f_a: f64, mut x_b: f64, max_iter: u32, tol: f64, f: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..max_iter {
        let x_mid = 0.5 * (x_a + x_b);
        let f_mid = f(x_mid);
        if f_mid == 0.0 {
            return x_mid;
        }

        if f_a * f_mid < 0.0 {
            x_b = x_mid;
        } else {
            x_a = x_mid;
            f_a = f_mid;
        }

        if (x_b - x_a).abs() < tol {
            break;
        }
    }
    0.5 * (x_a + x_b)
}
