//! Configuration for adaptive dyadic splitting.

/// Parameters of [`dyadic_splitting`](crate::dyadic_splitting).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Order of every fitted piece (default 8).
    pub order: usize,
    /// Number of leading and trailing coefficients compared by the error
    /// estimate (default 3). Must not exceed `order + 1`.
    pub tail_terms: usize,
    /// A piece is converged when its tail-to-head norm ratio is at most
    /// this (default 1e-14).
    pub tolerance: f64,
    /// Maximum number of refinement passes (default 8).
    pub max_refine_passes: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            order: 8,
            tail_terms: 3,
            tolerance: 1e-14,
            max_refine_passes: 8,
        }
    }
}

impl SplitConfig {
    pub fn new(order: usize, tail_terms: usize, tolerance: f64, max_refine_passes: u32) -> Self {
        Self {
            order,
            tail_terms,
            tolerance,
            max_refine_passes,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.order == 0 {
            return Err("order must be > 0");
        }
        if self.tail_terms == 0 {
            return Err("tail_terms must be > 0");
        }
        if self.tail_terms > self.order + 1 {
            return Err("tail_terms must not exceed order + 1");
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be positive");
        }
        Ok(())
    }
}
