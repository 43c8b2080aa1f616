//! Adaptive dyadic subdivision and equal-width refitting.
//!
//! A function that one moderate-order expansion cannot resolve is covered by
//! a contiguous partition of pieces. Each refinement pass halves every piece
//! whose trailing coefficients are not yet negligible relative to its
//! leading ones. Piece boundaries are shared exactly between neighbours.

use cheb_core::{ChebError, ChebyshevExpansion};
use tracing::debug;

use crate::split_types::SplitConfig;

/// Ratio `||c[N+1-m..]|| / ||c[..m]||` of the last `m` coefficients to the
/// first `m`, in the Euclidean norm.
///
/// A zero head with a zero tail gives 0; a zero head with a nonzero tail
/// gives infinity.
pub fn split_error(ce: &ChebyshevExpansion, tail_terms: usize) -> f64 {
    let c = ce.coef();
    let m = tail_terms.min(c.len());
    let norm = |s: &[f64]| s.iter().map(|v| v * v).sum::<f64>().sqrt();
    let head = norm(&c[..m]);
    let tail = norm(&c[c.len() - m..]);
    if head == 0.0 {
        return if tail == 0.0 { 0.0 } else { f64::INFINITY };
    }
    tail / head
}

/// Fit `f` over `[xmin, xmax]` as a contiguous, `xmin`-ordered partition of
/// order-`config.order` pieces.
///
/// Passes stop as soon as every piece meets `config.tolerance` or after
/// `config.max_refine_passes`; pieces that never converge are returned as
/// they stand.
pub fn dyadic_splitting<F>(
    mut f: F,
    xmin: f64,
    xmax: f64,
    config: &SplitConfig,
) -> Result<Vec<ChebyshevExpansion>, ChebError>
where
    F: FnMut(f64) -> f64,
{
    config.validate().map_err(ChebError::InvalidConfig)?;
    let order = config.order;
    let mut pieces = vec![ChebyshevExpansion::factory(order, &mut f, xmin, xmax)?];

    for pass in 0..config.max_refine_passes {
        let mut converged = true;
        // Right to left, so a split never shifts the pieces still to visit
        for i in (0..pieces.len()).rev() {
            if split_error(&pieces[i], config.tail_terms) <= config.tolerance {
                continue;
            }
            let (a, b) = pieces[i].domain();
            let mid = 0.5 * (a + b);
            if !(a < mid && mid < b) {
                continue;
            }
            converged = false;
            let left = ChebyshevExpansion::factory(order, &mut f, a, mid)?;
            let right = ChebyshevExpansion::factory(order, &mut f, mid, b)?;
            pieces[i] = right;
            pieces.insert(i, left);
        }
        debug!(
            pass,
            pieces = pieces.len(),
            converged,
            "dyadic refinement pass"
        );
        if converged {
            break;
        }
    }
    Ok(pieces)
}

/// Refit `ce` on `n_intervals` equal-width pieces at order `order`.
pub fn subdivide(
    ce: &ChebyshevExpansion,
    n_intervals: usize,
    order: usize,
) -> Result<Vec<ChebyshevExpansion>, ChebError> {
    if n_intervals == 0 {
        return Err(ChebError::InvalidConfig("n_intervals must be > 0"));
    }
    let (xmin, xmax) = ce.domain();
    let width = (xmax - xmin) / n_intervals as f64;
    let bound = |i: usize| {
        if i == n_intervals {
            xmax
        } else {
            xmin + width * i as f64
        }
    };
    (0..n_intervals)
        .map(|i| ChebyshevExpansion::factory(order, |x| ce.y(x), bound(i), bound(i + 1)))
        .collect()
}
