//! Derivative, antiderivative, and multiplication by the independent
//! variable, all in closed form on the coefficients.

use crate::error::ChebError;
use crate::expansion::ChebyshevExpansion;

impl ChebyshevExpansion {
    /// The `n`-th derivative with respect to the real-world variable.
    ///
    /// Each pass applies Mason & Handscomb eq. 2.52 and the chain-rule
    /// factor `2 / (xmax - xmin)`. Differentiating past the degree gives
    /// the constant zero `[0.0]`.
    pub fn deriv(&self, n: usize) -> Result<Self, ChebError> {
        if n == 0 {
            return Err(ChebError::InvalidDerivativeOrder);
        }
        let half_width = 0.5 * (self.xmax() - self.xmin());
        let mut c = self.coef().to_vec();
        for _ in 0..n {
            c = deriv_once(&c, half_width);
        }
        Ok(Self::from_parts(c, self.xmin(), self.xmax()))
    }

    /// An antiderivative. The constant of integration is arbitrary (the
    /// `T_0` coefficient is zero), so only differences of values are
    /// meaningful.
    pub fn integrate(&self) -> Self {
        let c = self.coef();
        let n = c.len();
        let at = |k: usize| c.get(k).copied().unwrap_or(0.0);
        let half_width = 0.5 * (self.xmax() - self.xmin());

        let mut out = vec![0.0; n + 1];
        out[1] = at(0) - 0.5 * at(2);
        for (k, slot) in out.iter_mut().enumerate().skip(2) {
            *slot = (at(k - 1) - at(k + 1)) / (2.0 * k as f64);
        }
        for v in &mut out {
            *v *= half_width;
        }
        Self::from_parts(out, self.xmin(), self.xmax())
    }

    /// Definite integral over `[a, b]`.
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        let anti = self.integrate();
        anti.y_clenshaw(b) - anti.y_clenshaw(a)
    }

    /// `x * self(x)`, one order higher.
    pub fn times_x(&self) -> Self {
        let mut out = self.clone();
        out.times_x_inplace();
        out
    }

    /// In-place `x * self(x)`.
    ///
    /// With `x = h t + m`: `t T_0 = T_1` and `t T_k = (T_{k+1} + T_{k-1}) / 2`.
    pub fn times_x_inplace(&mut self) {
        let h = 0.5 * (self.xmax() - self.xmin());
        let m = 0.5 * (self.xmax() + self.xmin());
        let coef = self.coef_mut();
        let n = coef.len();

        let mut tc = vec![0.0; n + 1];
        tc[1] += coef[0];
        for k in 1..n {
            tc[k + 1] += 0.5 * coef[k];
            tc[k - 1] += 0.5 * coef[k];
        }
        for (k, v) in tc.iter_mut().enumerate() {
            *v *= h;
            if k < n {
                *v += m * coef[k];
            }
        }
        *coef = tc;
    }
}

fn deriv_once(c: &[f64], half_width: f64) -> Vec<f64> {
    let order = c.len() - 1;
    if order == 0 {
        return vec![0.0];
    }
    (0..order)
        .map(|r| {
            // only k - r odd contributes
            let mut s: f64 = (r + 1..=order)
                .step_by(2)
                .map(|k| 2.0 * k as f64 * c[k])
                .sum();
            if r == 0 {
                s /= 2.0;
            }
            s / half_width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(c: &[f64]) -> ChebyshevExpansion {
        ChebyshevExpansion::canonical(c.to_vec()).unwrap()
    }

    #[test]
    fn third_order_derivatives_are_exact() {
        let ce = canon(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(ce.deriv(1).unwrap().coef(), &[14.0, 12.0, 24.0]);
        assert_eq!(ce.deriv(2).unwrap().coef(), &[12.0, 96.0]);
        assert_eq!(ce.deriv(3).unwrap().coef(), &[96.0]);
    }

    #[test]
    fn fourth_order_derivatives_are_exact() {
        let ce = canon(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(ce.deriv(1).unwrap().coef(), &[14.0, 52.0, 24.0, 40.0]);
        assert_eq!(ce.deriv(2).unwrap().coef(), &[172.0, 96.0, 240.0]);
        assert_eq!(ce.deriv(3).unwrap().coef(), &[96.0, 960.0]);
        assert_eq!(ce.deriv(4).unwrap().coef(), &[960.0]);
    }

    #[test]
    fn derivative_past_degree_is_zero() {
        let ce = canon(&[1.0, 2.0]);
        assert_eq!(ce.deriv(5).unwrap().coef(), &[0.0]);
        assert_eq!(canon(&[3.0]).deriv(1).unwrap().coef(), &[0.0]);
    }

    #[test]
    fn derivative_order_zero_is_rejected() {
        assert_eq!(
            canon(&[1.0]).deriv(0),
            Err(ChebError::InvalidDerivativeOrder)
        );
    }

    #[test]
    fn derivative_applies_chain_rule() {
        // T_1 on [0, 4] is (x - 2) / 2, derivative 1/2.
        let ce = ChebyshevExpansion::new(vec![0.0, 1.0], 0.0, 4.0).unwrap();
        let d = ce.deriv(1).unwrap();
        assert_eq!(d.coef(), &[0.5]);
        assert_eq!(d.domain(), (0.0, 4.0));
    }

    #[test]
    fn integral_of_constant_and_linear() {
        let one = ChebyshevExpansion::new(vec![1.0], 1.0, 3.0).unwrap();
        assert!((one.integral(1.0, 3.0) - 2.0).abs() < 1e-14);
        // x on [-1, 1] integrates to x^2 / 2
        let x = canon(&[0.0, 1.0]);
        assert!((x.integral(0.0, 0.8) - 0.32).abs() < 1e-14);
    }

    #[test]
    fn integrate_then_deriv_recovers_coefficients() {
        let ce = ChebyshevExpansion::new(vec![0.5, -1.0, 2.0, 0.25], -3.0, 5.0).unwrap();
        let back = ce.integrate().deriv(1).unwrap();
        assert_eq!(back.coef().len(), ce.coef().len());
        for (a, b) in back.coef().iter().zip(ce.coef()) {
            assert!((a - b).abs() < 1e-13);
        }
    }

    #[test]
    fn times_x_of_constant_and_identity() {
        let one = canon(&[1.0]);
        assert_eq!(one.times_x().coef(), &[0.0, 1.0]);
        // x * x = (T_0 + T_2) / 2
        let x = canon(&[0.0, 1.0]);
        assert_eq!(x.times_x().coef(), &[0.5, 0.0, 0.5]);
    }

    #[test]
    fn times_x_on_shifted_domain() {
        let ce = ChebyshevExpansion::new(vec![1.0, 2.0, 3.0], -0.3, 4.4).unwrap();
        let xc = ce.times_x();
        for &x in &[-0.3, 0.5, 2.0, 4.4] {
            assert!((xc.y(x) - x * ce.y(x)).abs() < 1e-12);
        }
    }
}
