//! Real roots as eigenvalues of the Chebyshev companion matrix.
//!
//! Boyd, "Finding the Zeros of a Univariate Equation", SIAM Review 2013,
//! Appendix A.2. The eigenvalue solve is O(N^3) and loses accuracy as the
//! order grows; long domains are better served by splitting into several
//! moderate-order pieces.
//!
//! Negligible trailing coefficients are trimmed first: a tail at rounding
//! level leaves a tiny `c_N` on the last row and scatters spurious real
//! eigenvalues across the domain. The matrix is balanced before the Schur
//! step. Real eigenvalues are polished by a few guarded Newton steps on the
//! untrimmed expansion and kept only if the residual there is at rounding
//! level.

use cheb_core::{ChebError, ChebyshevExpansion, clenshaw};
use nalgebra::DMatrix;
use nalgebra::linalg::balancing::balance_parlett_reinsch;
use tracing::{trace, warn};

use crate::config::RootConfig;

const NEWTON_STEPS: usize = 3;
const SCHUR_ITER_PER_ROW: usize = 100;

/// Degree after dropping trailing coefficients with
/// `|c_k| <= rel_tol * max |c|`.
///
/// `rel_tol = 0` drops exact zeros only. An all-zero expansion has
/// effective degree 0.
pub fn effective_degree(coef: &[f64], rel_tol: f64) -> usize {
    let scale = coef.iter().fold(0.0f64, |m, c| m.max(c.abs()));
    if scale == 0.0 {
        return 0;
    }
    let cutoff = rel_tol * scale;
    coef.iter().rposition(|c| c.abs() > cutoff).unwrap_or(0)
}

/// Companion matrix with the default trailing-coefficient trim.
pub fn companion_matrix(ce: &ChebyshevExpansion) -> DMatrix<f64> {
    companion_matrix_with(ce, RootConfig::default().trim_tolerance)
}

/// Companion matrix of the expansion, `N x N` for effective degree `N`.
///
/// Row `j` encodes `t T_j = a_j T_{j+1} + T_{j-1} / 2` with `a_0 = 1` and
/// `a_j = 1/2` otherwise. On the last row `T_N` is eliminated through
/// `sum_k c_k T_k = 0`. Degree 1 gives the 1x1 matrix `[-c_0 / c_1]`;
/// degree 0 gives an empty matrix.
pub fn companion_matrix_with(ce: &ChebyshevExpansion, trim_tolerance: f64) -> DMatrix<f64> {
    let c = ce.coef();
    let n = effective_degree(c, trim_tolerance);
    let mut a = DMatrix::zeros(n, n);
    if n == 0 {
        return a;
    }

    let upper = |j: usize| if j == 0 { 1.0 } else { 0.5 };
    for j in 0..n {
        if j >= 1 {
            a[(j, j - 1)] = 0.5;
        }
        if j + 1 < n {
            a[(j, j + 1)] = upper(j);
        }
    }

    let w = upper(n - 1) / c[n];
    for (k, &c_k) in c.iter().take(n).enumerate() {
        a[(n - 1, k)] -= w * c_k;
    }
    a
}

/// Real roots with the default [`RootConfig`].
///
/// With `only_in_domain`, only roots in `[xmin, xmax]` are returned; one
/// computed within [`RootConfig::domain_slack`] outside is clamped onto the
/// boundary. The order of the returned roots is unspecified.
pub fn real_roots(ce: &ChebyshevExpansion, only_in_domain: bool) -> Vec<f64> {
    roots_unchecked(ce, only_in_domain, &RootConfig::default())
}

/// Real roots with explicit tolerances.
pub fn real_roots_with(
    ce: &ChebyshevExpansion,
    only_in_domain: bool,
    config: &RootConfig,
) -> Result<Vec<f64>, ChebError> {
    config.validate().map_err(ChebError::InvalidConfig)?;
    Ok(roots_unchecked(ce, only_in_domain, config))
}

pub(crate) fn roots_unchecked(
    ce: &ChebyshevExpansion,
    only_in_domain: bool,
    config: &RootConfig,
) -> Vec<f64> {
    let mut a = companion_matrix_with(ce, config.trim_tolerance);
    let degree = a.nrows();
    if degree == 0 {
        return Vec::new();
    }
    if !a.iter().all(|v| v.is_finite()) {
        warn!(degree, "non-finite companion matrix, no roots reported");
        return Vec::new();
    }
    balance_parlett_reinsch(&mut a);
    let Some(schur) = a.try_schur(f64::EPSILON, SCHUR_ITER_PER_ROW * degree) else {
        warn!(degree, "companion Schur iteration did not converge");
        return Vec::new();
    };
    let eigenvalues = schur.complex_eigenvalues();
    trace!(
        degree,
        full_degree = ce.coef().len() - 1,
        xmin = ce.xmin(),
        xmax = ce.xmax(),
        "companion eigenvalue solve"
    );

    let slope = ce.deriv(1).ok();
    let magnitude: Vec<f64> = ce.coef().iter().map(|c| c.abs()).collect();
    let (xmin, xmax) = ce.domain();
    let slack = config.domain_slack * (xmax - xmin);
    eigenvalues
        .iter()
        .filter(|z| z.im.abs() < config.imag_tolerance)
        .map(|z| polish(ce, slope.as_ref(), ce.unscale_x(z.re)))
        .filter(|&(x, fx)| {
            // sum |c_k| |T_k(t)| bounds the size of the rounding error in f
            let bound = clenshaw(&magnitude, ce.scale_x(x).abs().max(1.0));
            fx.abs() <= config.residual_tolerance * bound
        })
        .filter_map(|(x, _)| {
            if !only_in_domain {
                Some(x)
            } else if x >= xmin - slack && x <= xmax + slack {
                Some(x.clamp(xmin, xmax))
            } else {
                None
            }
        })
        .collect()
}

/// Newton steps on `ce`, each kept only if it lowers `|f|`. Returns the
/// polished abscissa and the value there.
fn polish(ce: &ChebyshevExpansion, slope: Option<&ChebyshevExpansion>, mut x: f64) -> (f64, f64) {
    let mut fx = ce.y(x);
    let Some(d) = slope else {
        return (x, fx);
    };
    for _ in 0..NEWTON_STEPS {
        let dfx = d.y(x);
        if fx == 0.0 || dfx == 0.0 || !dfx.is_finite() {
            break;
        }
        let next = x - fx / dfx;
        let f_next = ce.y(next);
        if !(f_next.abs() < fx.abs()) {
            break;
        }
        x = next;
        fx = f_next;
    }
    (x, fx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(c: &[f64]) -> ChebyshevExpansion {
        ChebyshevExpansion::canonical(c.to_vec()).unwrap()
    }

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(f64::total_cmp);
        v
    }

    #[test]
    fn effective_degree_ignores_trailing_zeros() {
        assert_eq!(effective_degree(&[1.0, 2.0, 0.0, 0.0], 0.0), 1);
        assert_eq!(effective_degree(&[0.0, 0.0, 0.0], 1e-14), 0);
        assert_eq!(effective_degree(&[3.0], 1e-14), 0);
        assert_eq!(effective_degree(&[0.0, 0.0, 1e-300], 1e-14), 2);
    }

    #[test]
    fn effective_degree_drops_rounding_level_tail() {
        let c = [1.0, 2.0, 0.5, 3e-16, -1e-17];
        assert_eq!(effective_degree(&c, 1e-14), 2);
        assert_eq!(effective_degree(&c, 0.0), 4);
        // the cutoff scales with the largest coefficient
        assert_eq!(effective_degree(&[1e-20, 1e-21, 1e-22], 1e-14), 2);
    }

    #[test]
    fn rounding_tail_shrinks_companion() {
        let ce = canon(&[1.0, 2.0, 3.0, 1e-17]);
        assert_eq!(companion_matrix(&ce).shape(), (2, 2));
        assert_eq!(companion_matrix_with(&ce, 0.0).shape(), (3, 3));
    }

    #[test]
    fn root_free_sine_windows_report_nothing() {
        // |sin| >= sin(0.3) on every window, at orders whose tails are at
        // rounding level
        let pi = std::f64::consts::PI;
        for k in 0..19 {
            let a = f64::from(k) * pi + 0.3;
            for order in 10..=40 {
                let ce = ChebyshevExpansion::factory(order, f64::sin, a, a + 2.0).unwrap();
                let roots = real_roots(&ce, true);
                assert!(roots.is_empty(), "k = {k}, order = {order}: {roots:?}");
            }
        }
    }

    #[test]
    fn untrimmed_tail_eigenvalues_fail_residual_check() {
        let pi = std::f64::consts::PI;
        let untrimmed = RootConfig {
            trim_tolerance: 0.0,
            ..RootConfig::default()
        };
        for k in [1, 4, 9] {
            let a = f64::from(k) * pi + 0.3;
            for order in [20, 30, 40] {
                let ce = ChebyshevExpansion::factory(order, f64::sin, a, a + 2.0).unwrap();
                let roots = real_roots_with(&ce, true, &untrimmed).unwrap();
                assert!(roots.is_empty(), "k = {k}, order = {order}: {roots:?}");
            }
        }
    }

    #[test]
    fn root_on_right_boundary_is_accurate() {
        let pi = std::f64::consts::PI;
        let ce = ChebyshevExpansion::factory(12, f64::sin, 4.0 * pi - 1.3, 4.0 * pi).unwrap();
        let roots = real_roots(&ce, true);
        assert_eq!(roots.len(), 1, "{roots:?}");
        assert!((roots[0] - 4.0 * pi).abs() < 1e-12, "{}", roots[0]);
        assert!(ce.y(roots[0]).abs() < 1e-13);
    }

    #[test]
    fn reported_roots_have_small_residuals() {
        let pi = std::f64::consts::PI;
        for order in [12, 20, 30, 40] {
            let ce = ChebyshevExpansion::factory(order, f64::sin, pi, pi + 1.7).unwrap();
            let roots = real_roots(&ce, true);
            assert_eq!(roots.len(), 1, "order = {order}: {roots:?}");
            assert!(ce.y(roots[0]).abs() < 1e-12);
        }
    }

    #[test]
    fn root_just_outside_is_clamped_onto_boundary() {
        // x - (2 + 1e-13) on [0, 2]: within the slack of xmax
        let ce = ChebyshevExpansion::from_polynomial(&[-(2.0 + 1e-13), 1.0], 0.0, 2.0).unwrap();
        assert_eq!(real_roots(&ce, true), vec![2.0]);
        let strict = RootConfig {
            domain_slack: 0.0,
            ..RootConfig::default()
        };
        assert!(real_roots_with(&ce, true, &strict).unwrap().is_empty());
        // x - 2.1 stays outside
        let far = ChebyshevExpansion::from_polynomial(&[-2.1, 1.0], 0.0, 2.0).unwrap();
        assert!(real_roots(&far, true).is_empty());
    }

    #[test]
    fn boyd_layout_for_cubic() {
        let a = companion_matrix(&canon(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(a.shape(), (3, 3));
        assert_eq!(a[(0, 0)], 0.0);
        assert_eq!(a[(0, 1)], 1.0);
        assert_eq!(a[(1, 0)], 0.5);
        assert_eq!(a[(1, 2)], 0.5);
        assert_eq!(a[(2, 0)], -1.0 / 8.0);
        assert_eq!(a[(2, 1)], 0.5 - 2.0 / 8.0);
        assert_eq!(a[(2, 2)], -3.0 / 8.0);
    }

    #[test]
    fn linear_companion_is_one_by_one() {
        let a = companion_matrix(&canon(&[3.0, 2.0]));
        assert_eq!(a.shape(), (1, 1));
        assert_eq!(a[(0, 0)], -1.5);
    }

    #[test]
    fn linear_root() {
        let roots = real_roots(&canon(&[0.0, 1.0]), true);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].abs() < 1e-14);
    }

    #[test]
    fn trailing_zero_keeps_linear_root() {
        let roots = real_roots(&canon(&[-1.0, 1.0, 0.0]), true);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 1.0).abs() < 1e-14);

        let roots = real_roots(&canon(&[0.0, 1.0, 0.0]), true);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].abs() < 1e-14);
    }

    #[test]
    fn zero_expansion_has_no_roots() {
        let ce = canon(&[0.0, 0.0, 0.0]);
        assert!(real_roots(&ce, true).is_empty());
        assert!(real_roots(&ce, false).is_empty());
        assert_eq!(ce.coef().len(), 3);
    }

    #[test]
    fn constant_has_no_roots() {
        assert!(real_roots(&canon(&[2.0]), false).is_empty());
    }

    #[test]
    fn quadratic_roots() {
        // T_2 = 2t^2 - 1 has roots ±1/sqrt(2)
        let roots = sorted(real_roots(&canon(&[0.0, 0.0, 1.0]), true));
        assert_eq!(roots.len(), 2);
        let r = std::f64::consts::FRAC_1_SQRT_2;
        assert!((roots[0] + r).abs() < 1e-14);
        assert!((roots[1] - r).abs() < 1e-14);
    }

    #[test]
    fn complex_roots_are_discarded() {
        // x^2 + 1 on [-1, 1]: T_0 * 1.5 + T_2 * 0.5
        assert!(real_roots(&canon(&[1.5, 0.0, 0.5]), false).is_empty());
    }

    #[test]
    fn roots_are_rescaled_and_filtered() {
        // (x - 1)(x - 3)(x - 7) on [0, 5]
        let ce = ChebyshevExpansion::from_polynomial(&[-21.0, 31.0, -11.0, 1.0], 0.0, 5.0).unwrap();
        let inside = sorted(real_roots(&ce, true));
        assert_eq!(inside.len(), 2);
        assert!((inside[0] - 1.0).abs() < 1e-12);
        assert!((inside[1] - 3.0).abs() < 1e-12);

        let all = sorted(real_roots(&ce, false));
        assert_eq!(all.len(), 3);
        assert!((all[2] - 7.0).abs() < 1e-10);
    }

    #[test]
    fn explicit_config_is_validated() {
        let ce = canon(&[0.0, 1.0]);
        let bad = RootConfig {
            imag_tolerance: -1.0,
            ..RootConfig::default()
        };
        assert!(matches!(
            real_roots_with(&ce, true, &bad),
            Err(ChebError::InvalidConfig(_))
        ));
        assert_eq!(real_roots_with(&ce, true, &RootConfig::default()).unwrap().len(), 1);
    }
}
