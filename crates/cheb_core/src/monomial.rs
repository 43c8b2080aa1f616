//! Conversion of monomials and power-basis polynomials into Chebyshev form.

use crate::error::ChebError;
use crate::expansion::{ChebyshevExpansion, validate_domain};

/// Chebyshev coefficients of `t^n` on `[-1, 1]`.
///
/// Mason & Handscomb, *Chebyshev Polynomials*, p. 23:
/// `t^n = 2^(1-n) * sum'_{k=0}^{floor(n/2)} C(n, k) T_{n-2k}(t)`,
/// where the primed sum halves the `T_0` term.
fn canonical_powxn(n: usize) -> Vec<f64> {
    let mut c = vec![0.0; n + 1];
    if n == 0 {
        c[0] = 1.0;
        return c;
    }
    let scale = 2f64.powi(1 - n as i32);
    let mut binom = 1.0;
    for k in 0..=n / 2 {
        let idx = n - 2 * k;
        let mut term = scale * binom;
        if idx == 0 {
            term *= 0.5;
        }
        c[idx] = term;
        binom = binom * (n - k) as f64 / (k + 1) as f64;
    }
    c
}

impl ChebyshevExpansion {
    /// The monomial `x^n` on `[xmin, xmax]`.
    ///
    /// With `x = h t + m`, expands `(h t + m)^n` binomially and sums the
    /// canonical monomials; on `[-1, 1]` only the `t^n` term survives.
    pub fn from_powxn(n: usize, xmin: f64, xmax: f64) -> Result<Self, ChebError> {
        validate_domain(xmin, xmax)?;
        let h = 0.5 * (xmax - xmin);
        let m = 0.5 * (xmax + xmin);

        let mut coef = vec![0.0; n + 1];
        let mut binom = 1.0; // C(n, j)
        for j in 0..=n {
            let w = binom * h.powi(j as i32) * m.powi((n - j) as i32);
            if w != 0.0 {
                for (k, t_k) in canonical_powxn(j).into_iter().enumerate() {
                    coef[k] += w * t_k;
                }
            }
            binom = binom * (n - j) as f64 / (j + 1) as f64;
        }
        Self::new(coef, xmin, xmax)
    }

    /// Convert power-basis coefficients `p[i] * x^i` into Chebyshev form.
    pub fn from_polynomial(p: &[f64], xmin: f64, xmax: f64) -> Result<Self, ChebError> {
        if p.is_empty() {
            return Err(ChebError::EmptyCoefficients);
        }
        let mut sum = Self::new(vec![0.0], xmin, xmax)?;
        for (i, &p_i) in p.iter().enumerate() {
            sum.try_add_assign(&(Self::from_powxn(i, xmin, xmax)? * p_i))?;
        }
        Ok(sum)
    }
}
