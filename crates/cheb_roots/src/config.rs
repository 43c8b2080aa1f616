//! Tolerances for root extraction.

/// Configuration for companion-matrix and multi-interval root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Eigenvalues with `|imag|` below this are treated as real
    /// (default `10 * f64::EPSILON`).
    pub imag_tolerance: f64,
    /// Trailing coefficients with `|c_k| <= trim_tolerance * max |c|` are
    /// dropped before the companion matrix is built (default `1e-14`).
    /// Zero trims exact zeros only.
    pub trim_tolerance: f64,
    /// A polished eigenvalue is kept only if `|f| <= residual_tolerance *
    /// sum |c_k T_k(t)|` there, with `|t|` raised to at least 1
    /// (default `1e-8`).
    pub residual_tolerance: f64,
    /// Roots within `domain_slack * (xmax - xmin)` outside a domain are
    /// clamped onto its boundary instead of dropped (default `1e-12`).
    pub domain_slack: f64,
    /// Roots closer than `dedup_tolerance * partition width` are merged when
    /// combining sub-intervals (default `1e-12`).
    pub dedup_tolerance: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            imag_tolerance: 10.0 * f64::EPSILON,
            trim_tolerance: 1e-14,
            residual_tolerance: 1e-8,
            domain_slack: 1e-12,
            dedup_tolerance: 1e-12,
        }
    }
}

impl RootConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.imag_tolerance.is_finite() || self.imag_tolerance < 0.0 {
            return Err("imag_tolerance must be finite and non-negative");
        }
        if !(0.0..1.0).contains(&self.trim_tolerance) {
            return Err("trim_tolerance must be in [0, 1)");
        }
        if !self.residual_tolerance.is_finite() || self.residual_tolerance <= 0.0 {
            return Err("residual_tolerance must be finite and positive");
        }
        if !self.domain_slack.is_finite() || self.domain_slack < 0.0 {
            return Err("domain_slack must be finite and non-negative");
        }
        if !self.dedup_tolerance.is_finite() || self.dedup_tolerance < 0.0 {
            return Err("dedup_tolerance must be finite and non-negative");
        }
        Ok(())
    }
}
