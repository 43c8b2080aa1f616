//! Nodal fitting: nodal samples in, expansion coefficients out.

use nalgebra::DVector;

use crate::error::ChebError;
use crate::nodes::NodeCache;

/// Turns samples at the order-N Lobatto nodes into N+1 coefficients.
///
/// Implementations decide how the transform is realized (dense cosine
/// matrix, FFT, ...). `values[k]` is the sample at `cos(pi k / N)`.
pub trait NodalFit {
    fn fit_nodal(&self, order: usize, values: &[f64]) -> Result<Vec<f64>, ChebError>;
}

/// Dense discrete-cosine-transform fit using the cached fit matrix.
#[derive(Debug, Clone, Copy)]
pub struct DctFit<'c> {
    cache: &'c NodeCache,
}

impl<'c> DctFit<'c> {
    pub fn new(cache: &'c NodeCache) -> Self {
        Self { cache }
    }
}

impl Default for DctFit<'static> {
    fn default() -> Self {
        Self::new(NodeCache::global())
    }
}

impl NodalFit for DctFit<'_> {
    fn fit_nodal(&self, order: usize, values: &[f64]) -> Result<Vec<f64>, ChebError> {
        if values.len() != order + 1 {
            return Err(ChebError::FitLength {
                expected: order + 1,
                got: values.len(),
            });
        }
        let entry = self.cache.get(order);
        let f = DVector::from_column_slice(values);
        let c = entry.fit_matrix() * f;
        Ok(c.iter().copied().collect())
    }
}
