//! Composition of an expansion with a nonlinear map, and monotonicity.
//!
//! Composition resamples at the expansion's own Lobatto nodes and refits at
//! the same order, so the result is never more accurate than the order
//! allows. Maps with poles near the range of the expansion (e.g. the
//! reciprocal of a function with zeros in the domain) give poor results.

use crate::error::ChebError;
use crate::expansion::ChebyshevExpansion;
use crate::fit::{DctFit, NodalFit};
use crate::nodes::NodeCache;

impl ChebyshevExpansion {
    /// Approximate `f(self(x))` where `f` maps a slice of nodal values to
    /// a vector of the same length.
    pub fn apply<F>(&self, f: F) -> Result<Self, ChebError>
    where
        F: FnOnce(&[f64]) -> Vec<f64>,
    {
        let cache = NodeCache::global();
        self.apply_with(cache, &DctFit::new(cache), f)
    }

    /// [`apply`](Self::apply) with an explicit cache and fitter.
    pub fn apply_with<F>(
        &self,
        cache: &NodeCache,
        fitter: &dyn NodalFit,
        f: F,
    ) -> Result<Self, ChebError>
    where
        F: FnOnce(&[f64]) -> Vec<f64>,
    {
        let values = self.node_function_values_in(cache);
        let mapped = f(&values);
        let coef = fitter.fit_nodal(self.order(), &mapped)?;
        Self::new(coef, self.xmin(), self.xmax())
    }

    /// Approximate `f(self(x))` for a scalar map.
    pub fn apply_scalar<F>(&self, mut f: F) -> Result<Self, ChebError>
    where
        F: FnMut(f64) -> f64,
    {
        self.apply(|ys| ys.iter().map(|&y| f(y)).collect())
    }

    /// Approximate `1 / self(x)`.
    ///
    /// Degrades badly when the expansion has zeros or near-zeros inside the
    /// domain; the result is a best-effort approximation.
    pub fn reciprocal(&self) -> Result<Self, ChebError> {
        self.apply_scalar(|y| 1.0 / y)
    }

    /// True if the values at the Lobatto nodes are strictly monotonic.
    ///
    /// Constant expansions are not monotonic.
    pub fn is_monotonic(&self) -> bool {
        let ys = self.node_function_values();
        if ys.len() < 2 {
            return false;
        }
        let increasing = ys.windows(2).all(|w| w[1] > w[0]);
        let decreasing = ys.windows(2).all(|w| w[1] < w[0]);
        increasing || decreasing
    }
}
