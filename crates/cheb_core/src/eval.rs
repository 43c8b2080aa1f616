//! Evaluating `f(t) = sum c_k T_k(t)`.
//!
//! [`clenshaw`] folds the coefficients from the top down and never forms a
//! basis value; [`recurrence`] walks `T_{k+1} = 2t T_k - T_{k-1}` upwards
//! and accumulates as it goes. Both have batched and real-world variants
//! on [`ChebyshevExpansion`].

use crate::expansion::ChebyshevExpansion;
use crate::nodes::NodeCache;

/// Value of `sum c_k T_k(t)` by Clenshaw's backward summation.
///
/// `t` is canonical; outside `[-1, 1]` this is the polynomial continuation.
pub fn clenshaw(coeffs: &[f64], t: f64) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    // (b1, b2) trails the backward sweep as (b_k, b_{k+1})
    let (b1, b2) = rest
        .iter()
        .rev()
        .fold((0.0, 0.0), |(b1, b2), &c| (2.0 * t * b1 - b2 + c, b1));
    t * b1 - b2 + c0
}

/// Evaluate `sum(c_k * T_k(t))` by building the basis values forward.
pub fn recurrence(coeffs: &[f64], t: f64) -> f64 {
    match coeffs.len() {
        0 => 0.0,
        1 => coeffs[0],
        _ => {
            let mut t_prev = 1.0;
            let mut t_curr = t;
            let mut sum = coeffs[0] + coeffs[1] * t;
            for &c_k in &coeffs[2..] {
                let t_next = 2.0 * t * t_curr - t_prev;
                sum += c_k * t_next;
                t_prev = t_curr;
                t_curr = t_next;
            }
            sum
        }
    }
}

/// Reusable basis-value scratch for repeated recurrence evaluation.
///
/// The buffer follows the coefficient length of whichever expansion it is
/// handed, so it stays valid across in-place mutation of that expansion.
#[derive(Debug, Clone, Default)]
pub struct RecurrenceBuffer {
    basis: Vec<f64>,
}

impl RecurrenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `ce` at real-world `x`, filling `T_0..T_N` at the scaled
    /// abscissa.
    pub fn eval(&mut self, ce: &ChebyshevExpansion, x: f64) -> f64 {
        let c = ce.coef();
        let n = c.len();
        if self.basis.len() != n {
            self.basis.resize(n, 0.0);
        }
        let t = ce.scale_x(x);
        self.basis[0] = 1.0;
        if n > 1 {
            self.basis[1] = t;
            for k in 1..n - 1 {
                self.basis[k + 1] = 2.0 * t * self.basis[k] - self.basis[k - 1];
            }
        }
        c.iter().zip(&self.basis).map(|(a, b)| a * b).sum()
    }

    /// Basis values from the most recent evaluation.
    pub fn basis(&self) -> &[f64] {
        &self.basis
    }
}

impl ChebyshevExpansion {
    /// Value at real-world `x` (Clenshaw).
    pub fn y(&self, x: f64) -> f64 {
        self.y_clenshaw(x)
    }

    pub fn y_clenshaw(&self, x: f64) -> f64 {
        clenshaw(self.coef(), self.scale_x(x))
    }

    pub fn y_recurrence(&self, x: f64) -> f64 {
        recurrence(self.coef(), self.scale_x(x))
    }

    /// Values at many real-world abscissas (Clenshaw).
    pub fn y_many(&self, xs: &[f64]) -> Vec<f64> {
        let ts: Vec<f64> = xs.iter().map(|&x| self.scale_x(x)).collect();
        self.y_clenshaw_xscaled(&ts)
    }

    /// Values at many real-world abscissas (vectorized recurrence).
    pub fn y_recurrence_many(&self, xs: &[f64]) -> Vec<f64> {
        let ts: Vec<f64> = xs.iter().map(|&x| self.scale_x(x)).collect();
        self.y_recurrence_xscaled(&ts)
    }

    /// Clenshaw at canonical abscissas.
    pub fn y_clenshaw_xscaled(&self, ts: &[f64]) -> Vec<f64> {
        ts.iter().map(|&t| clenshaw(self.coef(), t)).collect()
    }

    /// Recurrence at canonical abscissas, advancing the basis column for
    /// all points at once.
    pub fn y_recurrence_xscaled(&self, ts: &[f64]) -> Vec<f64> {
        let c = self.coef();
        let mut out = vec![c[0]; ts.len()];
        if c.len() == 1 {
            return out;
        }
        for (o, &t) in out.iter_mut().zip(ts) {
            *o += c[1] * t;
        }
        let mut prev = vec![1.0; ts.len()];
        let mut curr = ts.to_vec();
        for &c_k in &c[2..] {
            for ((p, q), &t) in prev.iter_mut().zip(curr.iter_mut()).zip(ts) {
                let next = 2.0 * t * *q - *p;
                *p = *q;
                *q = next;
            }
            for (o, &t_k) in out.iter_mut().zip(&curr) {
                *o += c_k * t_k;
            }
        }
        out
    }

    /// Lobatto nodes of this expansion's order in `[-1, 1]`.
    pub fn nodes_n11(&self) -> Vec<f64> {
        self.nodes_n11_in(NodeCache::global())
    }

    pub fn nodes_n11_in(&self, cache: &NodeCache) -> Vec<f64> {
        cache.get(self.order()).nodes().to_vec()
    }

    /// Lobatto nodes mapped onto `[xmin, xmax]`.
    pub fn nodes_realworld(&self) -> Vec<f64> {
        self.nodes_n11()
            .into_iter()
            .map(|t| self.unscale_x(t))
            .collect()
    }

    /// Expansion values at its own Lobatto nodes.
    pub fn node_function_values(&self) -> Vec<f64> {
        self.node_function_values_in(NodeCache::global())
    }

    pub fn node_function_values_in(&self, cache: &NodeCache) -> Vec<f64> {
        self.y_clenshaw_xscaled(cache.get(self.order()).nodes())
    }
}
