//! Roots over a partition of sub-interval expansions.

use cheb_core::{ChebError, ChebyshevExpansion};
use rayon::prelude::*;
use tracing::debug;

use crate::companion::roots_unchecked;
use crate::config::RootConfig;

/// Sorted real roots across all segments, with the default [`RootConfig`].
///
/// Segments are solved independently in parallel. With `only_in_domain`, a
/// root computed just outside its own segment (within
/// [`RootConfig::domain_slack`]) is clamped onto the boundary, so a root on
/// a split point survives and is then reported once.
pub fn real_roots_intervals(segments: &[ChebyshevExpansion], only_in_domain: bool) -> Vec<f64> {
    merge_roots(segments, only_in_domain, &RootConfig::default())
}

/// Multi-interval root solve with explicit tolerances.
pub fn real_roots_intervals_with(
    segments: &[ChebyshevExpansion],
    only_in_domain: bool,
    config: &RootConfig,
) -> Result<Vec<f64>, ChebError> {
    config.validate().map_err(ChebError::InvalidConfig)?;
    Ok(merge_roots(segments, only_in_domain, config))
}

fn merge_roots(
    segments: &[ChebyshevExpansion],
    only_in_domain: bool,
    config: &RootConfig,
) -> Vec<f64> {
    if segments.is_empty() {
        return Vec::new();
    }

    let mut roots: Vec<f64> = segments
        .par_iter()
        .flat_map_iter(|s| roots_unchecked(s, only_in_domain, config))
        .collect();
    roots.sort_by(f64::total_cmp);

    let lo = segments.iter().map(|s| s.xmin()).fold(f64::INFINITY, f64::min);
    let hi = segments.iter().map(|s| s.xmax()).fold(f64::NEG_INFINITY, f64::max);
    let tol = config.dedup_tolerance * (hi - lo);
    let raw = roots.len();
    roots.dedup_by(|b, a| (*b - *a).abs() <= tol);

    debug!(
        segments = segments.len(),
        raw,
        unique = roots.len(),
        "multi-interval root solve"
    );
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine_segments(bounds: &[f64]) -> Vec<ChebyshevExpansion> {
        bounds
            .windows(2)
            .map(|w| ChebyshevExpansion::factory(30, f64::sin, w[0], w[1]).unwrap())
            .collect()
    }

    #[test]
    fn empty_partition() {
        assert!(real_roots_intervals(&[], true).is_empty());
    }

    #[test]
    fn roots_are_sorted_and_complete() {
        let segs = sine_segments(&[0.5, 4.0, 8.0, 11.0]);
        let roots = real_roots_intervals(&segs, true);
        assert_eq!(roots.len(), 3);
        for (got, k) in roots.iter().zip(1..) {
            assert!((got - k as f64 * PI).abs() < 1e-12);
        }
    }

    #[test]
    fn shared_boundary_root_reported_once() {
        // x - 2 on [0, 2] and [2, 5]: both pieces place the root on x = 2
        let segs = vec![
            ChebyshevExpansion::from_polynomial(&[-2.0, 1.0], 0.0, 2.0).unwrap(),
            ChebyshevExpansion::from_polynomial(&[-2.0, 1.0], 2.0, 5.0).unwrap(),
        ];
        let roots = real_roots_intervals(&segs, true);
        assert_eq!(roots.len(), 1, "{roots:?}");
        assert!((roots[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn roots_on_split_points_kept_once() {
        for k in 1..=39 {
            let x0 = f64::from(k) * PI;
            let segs = vec![
                ChebyshevExpansion::factory(12, f64::sin, x0 - 1.3, x0).unwrap(),
                ChebyshevExpansion::factory(12, f64::sin, x0, x0 + 1.7).unwrap(),
            ];
            let roots = real_roots_intervals(&segs, true);
            assert_eq!(roots.len(), 1, "k = {k}: {roots:?}");
            assert!((roots[0] - x0).abs() < 1e-12, "k = {k}: {}", roots[0]);
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let segs = sine_segments(&[1.0, 5.0]);
        let bad = RootConfig {
            dedup_tolerance: -1.0,
            ..RootConfig::default()
        };
        assert!(real_roots_intervals_with(&segs, true, &bad).is_err());
    }
}
