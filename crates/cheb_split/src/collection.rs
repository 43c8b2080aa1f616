//! Piecewise expansions over a contiguous partition.

use cheb_core::{ChebError, ChebyshevExpansion};
use cheb_roots::real_roots_intervals;

use crate::dyadic::dyadic_splitting;
use crate::split_types::SplitConfig;

/// A contiguous, `xmin`-ordered sequence of expansions treated as one
/// piecewise function.
///
/// Neighbouring pieces share their common endpoint exactly. At a shared
/// endpoint the left piece is used for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevCollection {
    exps: Vec<ChebyshevExpansion>,
}

impl ChebyshevCollection {
    /// Validate and wrap a partition.
    pub fn new(exps: Vec<ChebyshevExpansion>) -> Result<Self, ChebError> {
        if exps.is_empty() {
            return Err(ChebError::EmptyCollection);
        }
        for w in exps.windows(2) {
            if w[0].xmax() != w[1].xmin() {
                return Err(ChebError::NotContiguous {
                    left_xmax: w[0].xmax(),
                    right_xmin: w[1].xmin(),
                });
            }
        }
        Ok(Self { exps })
    }

    /// Build by dyadic splitting of `f` over `[xmin, xmax]`.
    pub fn from_function<F>(
        f: F,
        xmin: f64,
        xmax: f64,
        config: &SplitConfig,
    ) -> Result<Self, ChebError>
    where
        F: FnMut(f64) -> f64,
    {
        Self::new(dyadic_splitting(f, xmin, xmax, config)?)
    }

    pub fn expansions(&self) -> &[ChebyshevExpansion] {
        &self.exps
    }

    pub fn into_expansions(self) -> Vec<ChebyshevExpansion> {
        self.exps
    }

    pub fn xmin(&self) -> f64 {
        self.exps[0].xmin()
    }

    pub fn xmax(&self) -> f64 {
        self.exps[self.exps.len() - 1].xmax()
    }

    /// Index of the piece containing `x`, by binary search.
    pub fn index_of(&self, x: f64) -> Option<usize> {
        let idx = self.exps.partition_point(|e| e.xmax() < x);
        (idx < self.exps.len() && self.exps[idx].contains(x)).then_some(idx)
    }

    /// Like [`index_of`](Self::index_of), trying `hint` and its right
    /// neighbour before searching. Suited to sweeps over increasing `x`.
    pub fn hinted_index(&self, x: f64, hint: usize) -> Option<usize> {
        for i in [hint, hint.saturating_add(1)] {
            if self.exps.get(i).is_some_and(|e| e.contains(x)) {
                return Some(i);
            }
        }
        self.index_of(x)
    }

    /// Piecewise value at `x`.
    pub fn y(&self, x: f64) -> Result<f64, ChebError> {
        let i = self.index_of(x).ok_or_else(|| self.out_of_domain(x))?;
        Ok(self.exps[i].y(x))
    }

    /// Piecewise values at many abscissas.
    pub fn y_many(&self, xs: &[f64]) -> Result<Vec<f64>, ChebError> {
        let mut hint = 0;
        xs.iter()
            .map(|&x| -> Result<f64, ChebError> {
                hint = self
                    .hinted_index(x, hint)
                    .ok_or_else(|| self.out_of_domain(x))?;
                Ok(self.exps[hint].y(x))
            })
            .collect()
    }

    /// Continuous antiderivative vanishing at `xmin`.
    pub fn integrate(&self) -> Self {
        let mut offset = 0.0;
        let exps = self
            .exps
            .iter()
            .map(|e| {
                let anti = e.integrate();
                let start = anti.y(e.xmin());
                let end = anti.y(e.xmax());
                let piece = anti + (offset - start);
                offset += end - start;
                piece
            })
            .collect();
        Self { exps }
    }

    /// Sorted roots over the whole partition, each reported once.
    pub fn roots(&self) -> Vec<f64> {
        real_roots_intervals(&self.exps, true)
    }

    /// Sorted interior stationary points (roots of the derivative).
    pub fn extrema(&self) -> Result<Vec<f64>, ChebError> {
        let derivs = self
            .exps
            .iter()
            .map(|e| e.deriv(1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(real_roots_intervals(&derivs, true))
    }

    /// Global `(min, max)` over the domain, from piece endpoints and
    /// stationary points.
    pub fn bounds(&self) -> Result<(f64, f64), ChebError> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let endpoints = self.exps.iter().flat_map(|e| [e.xmin(), e.xmax()]);
        for x in endpoints.chain(self.extrema()?) {
            let y = self.y(x)?;
            lo = lo.min(y);
            hi = hi.max(y);
        }
        Ok((lo, hi))
    }

    /// All `x` in the domain where the piecewise function equals `y`, sorted.
    pub fn solve_for_x(&self, y: f64) -> Vec<f64> {
        let shifted: Vec<ChebyshevExpansion> = self.exps.iter().map(|e| e - y).collect();
        real_roots_intervals(&shifted, true)
    }

    fn out_of_domain(&self, x: f64) -> ChebError {
        ChebError::OutOfDomain {
            x,
            xmin: self.xmin(),
            xmax: self.xmax(),
        }
    }
}
