//! The [`ChebyshevExpansion`] value type and its operator algebra.
//!
//! An expansion is `sum_k c_k T_k(t)` where `t` is the abscissa mapped
//! affinely from `[xmin, xmax]` onto `[-1, 1]`.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::ChebError;
use crate::fit::{DctFit, NodalFit};
use crate::nodes::NodeCache;

/// Map `x` in `[xmin, xmax]` onto the canonical interval `[-1, 1]`.
#[inline]
pub fn to_canonical(x: f64, xmin: f64, xmax: f64) -> f64 {
    (2.0 * x - (xmax + xmin)) / (xmax - xmin)
}

/// Map `t` in `[-1, 1]` back onto `[xmin, xmax]`.
#[inline]
pub fn from_canonical(t: f64, xmin: f64, xmax: f64) -> f64 {
    ((xmax - xmin) * t + (xmax + xmin)) / 2.0
}

pub(crate) fn validate_domain(xmin: f64, xmax: f64) -> Result<(), ChebError> {
    if !xmin.is_finite() || !xmax.is_finite() || xmin >= xmax {
        return Err(ChebError::InvalidDomain { xmin, xmax });
    }
    Ok(())
}

/// Truncated Chebyshev expansion on a finite interval.
///
/// Coefficient index equals polynomial degree; there is always at least
/// one coefficient. All binary operators return new values. Binary algebra
/// between two expansions requires identical domains: the operator forms
/// panic on a mismatch, the `try_*` forms return
/// [`ChebError::DomainMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevExpansion {
    coef: Vec<f64>,
    xmin: f64,
    xmax: f64,
}

impl ChebyshevExpansion {
    /// Expansion from explicit coefficients on `[xmin, xmax]`.
    pub fn new(coef: Vec<f64>, xmin: f64, xmax: f64) -> Result<Self, ChebError> {
        if coef.is_empty() {
            return Err(ChebError::EmptyCoefficients);
        }
        validate_domain(xmin, xmax)?;
        Ok(Self { coef, xmin, xmax })
    }

    /// Expansion from explicit coefficients on `[-1, 1]`.
    pub fn canonical(coef: Vec<f64>) -> Result<Self, ChebError> {
        Self::new(coef, -1.0, 1.0)
    }

    /// Internal constructor for results whose invariants are inherited
    /// from an already-validated operand.
    pub(crate) fn from_parts(coef: Vec<f64>, xmin: f64, xmax: f64) -> Self {
        debug_assert!(!coef.is_empty());
        debug_assert!(xmin < xmax);
        Self { coef, xmin, xmax }
    }

    /// Fit an order-`order` expansion of `f` on `[xmin, xmax]` using the
    /// process-wide node cache and the cosine-transform fit.
    pub fn factory<F>(order: usize, f: F, xmin: f64, xmax: f64) -> Result<Self, ChebError>
    where
        F: FnMut(f64) -> f64,
    {
        let cache = NodeCache::global();
        Self::factory_with(cache, &DctFit::new(cache), order, f, xmin, xmax)
    }

    /// Fit with an explicit node cache and fitting strategy.
    pub fn factory_with<F>(
        cache: &NodeCache,
        fitter: &dyn NodalFit,
        order: usize,
        mut f: F,
        xmin: f64,
        xmax: f64,
    ) -> Result<Self, ChebError>
    where
        F: FnMut(f64) -> f64,
    {
        validate_domain(xmin, xmax)?;
        let entry = cache.get(order);
        let values: Vec<f64> = entry
            .nodes()
            .iter()
            .map(|&t| f(from_canonical(t, xmin, xmax)))
            .collect();
        let coef = fitter.fit_nodal(order, &values)?;
        Self::new(coef, xmin, xmax)
    }

    /// Expansion from samples at the order-`order` Lobatto nodes, mapped
    /// onto `[xmin, xmax]`, with the default fit.
    pub fn from_nodal_values(
        order: usize,
        values: &[f64],
        xmin: f64,
        xmax: f64,
    ) -> Result<Self, ChebError> {
        validate_domain(xmin, xmax)?;
        let coef = DctFit::default().fit_nodal(order, values)?;
        Self::new(coef, xmin, xmax)
    }

    pub fn coef(&self) -> &[f64] {
        &self.coef
    }

    pub fn into_coef(self) -> Vec<f64> {
        self.coef
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.xmin, self.xmax)
    }

    /// Degree of the highest term, `coef().len() - 1`.
    pub fn order(&self) -> usize {
        self.coef.len() - 1
    }

    /// Map a real-world abscissa onto `[-1, 1]`.
    #[inline]
    pub fn scale_x(&self, x: f64) -> f64 {
        to_canonical(x, self.xmin, self.xmax)
    }

    /// Map a canonical abscissa back onto `[xmin, xmax]`.
    #[inline]
    pub fn unscale_x(&self, t: f64) -> f64 {
        from_canonical(t, self.xmin, self.xmax)
    }

    /// True if `x` lies in the closed domain.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.xmin && x <= self.xmax
    }

    pub fn same_domain(&self, other: &Self) -> bool {
        self.xmin == other.xmin && self.xmax == other.xmax
    }

    fn check_domain(&self, other: &Self) -> Result<(), ChebError> {
        if self.same_domain(other) {
            Ok(())
        } else {
            Err(ChebError::DomainMismatch {
                left: self.domain(),
                right: other.domain(),
            })
        }
    }

    pub(crate) fn coef_mut(&mut self) -> &mut Vec<f64> {
        &mut self.coef
    }

    /// Sum with length reconciliation; the shorter operand is zero-padded.
    pub fn try_add(&self, other: &Self) -> Result<Self, ChebError> {
        self.check_domain(other)?;
        Ok(Self::from_parts(
            combine(&self.coef, &other.coef, 1.0),
            self.xmin,
            self.xmax,
        ))
    }

    /// Difference with length reconciliation.
    pub fn try_sub(&self, other: &Self) -> Result<Self, ChebError> {
        self.check_domain(other)?;
        Ok(Self::from_parts(
            combine(&self.coef, &other.coef, -1.0),
            self.xmin,
            self.xmax,
        ))
    }

    /// Product in the Chebyshev basis; result order is the sum of orders.
    pub fn try_mul(&self, other: &Self) -> Result<Self, ChebError> {
        self.check_domain(other)?;
        Ok(Self::from_parts(
            product(&self.coef, &other.coef),
            self.xmin,
            self.xmax,
        ))
    }

    fn accumulate(&mut self, other: &Self, sign: f64) -> Result<(), ChebError> {
        self.check_domain(other)?;
        let n_self = self.coef.len();
        for (c, &d) in self.coef.iter_mut().zip(&other.coef) {
            *c += sign * d;
        }
        if other.coef.len() > n_self {
            self.coef
                .extend(other.coef[n_self..].iter().map(|&d| sign * d));
        }
        Ok(())
    }

    /// In-place `self += other`.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), ChebError> {
        self.accumulate(other, 1.0)
    }

    /// In-place `self -= other`.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), ChebError> {
        self.accumulate(other, -1.0)
    }
}

/// `a + sign * b`, copying the tail of the longer operand.
fn combine(a: &[f64], b: &[f64], sign: f64) -> Vec<f64> {
    let n = a.len().max(b.len());
    (0..n)
        .map(|k| {
            let ak = a.get(k).copied().unwrap_or(0.0);
            let bk = b.get(k).copied().unwrap_or(0.0);
            ak + sign * bk
        })
        .collect()
}

/// Chebyshev-basis product: `T_i T_j = (T_{i+j} + T_{|i-j|}) / 2`.
fn product(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            let half = 0.5 * ai * bj;
            out[i + j] += half;
            out[i.abs_diff(j)] += half;
        }
    }
    out
}

fn unwrap_domain<T>(r: Result<T, ChebError>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

// ---------------------------------------------------------------------------
// Expansion ⊕ expansion
// ---------------------------------------------------------------------------

impl Add for &ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    /// # Panics
    /// If the operands have different domains.
    fn add(self, rhs: Self) -> ChebyshevExpansion {
        unwrap_domain(self.try_add(rhs))
    }
}

impl Add for ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn add(self, rhs: Self) -> ChebyshevExpansion {
        &self + &rhs
    }
}

impl Sub for &ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    /// # Panics
    /// If the operands have different domains.
    fn sub(self, rhs: Self) -> ChebyshevExpansion {
        unwrap_domain(self.try_sub(rhs))
    }
}

impl Sub for ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn sub(self, rhs: Self) -> ChebyshevExpansion {
        &self - &rhs
    }
}

impl Mul for &ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    /// # Panics
    /// If the operands have different domains.
    fn mul(self, rhs: Self) -> ChebyshevExpansion {
        unwrap_domain(self.try_mul(rhs))
    }
}

impl Mul for ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn mul(self, rhs: Self) -> ChebyshevExpansion {
        &self * &rhs
    }
}

impl AddAssign<&ChebyshevExpansion> for ChebyshevExpansion {
    fn add_assign(&mut self, rhs: &ChebyshevExpansion) {
        unwrap_domain(self.try_add_assign(rhs));
    }
}

impl SubAssign<&ChebyshevExpansion> for ChebyshevExpansion {
    fn sub_assign(&mut self, rhs: &ChebyshevExpansion) {
        unwrap_domain(self.try_sub_assign(rhs));
    }
}

// ---------------------------------------------------------------------------
// Expansion ⊕ scalar
// ---------------------------------------------------------------------------

impl Mul<f64> for &ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn mul(self, rhs: f64) -> ChebyshevExpansion {
        let coef = self.coef.iter().map(|&c| c * rhs).collect();
        ChebyshevExpansion::from_parts(coef, self.xmin, self.xmax)
    }
}

impl Mul<f64> for ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn mul(mut self, rhs: f64) -> ChebyshevExpansion {
        self *= rhs;
        self
    }
}

impl Mul<&ChebyshevExpansion> for f64 {
    type Output = ChebyshevExpansion;

    fn mul(self, rhs: &ChebyshevExpansion) -> ChebyshevExpansion {
        rhs * self
    }
}

impl Mul<ChebyshevExpansion> for f64 {
    type Output = ChebyshevExpansion;

    fn mul(self, rhs: ChebyshevExpansion) -> ChebyshevExpansion {
        rhs * self
    }
}

impl MulAssign<f64> for ChebyshevExpansion {
    fn mul_assign(&mut self, rhs: f64) {
        for c in &mut self.coef {
            *c *= rhs;
        }
    }
}

impl Add<f64> for &ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn add(self, rhs: f64) -> ChebyshevExpansion {
        let mut out = self.clone();
        out.coef[0] += rhs;
        out
    }
}

impl Add<f64> for ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn add(mut self, rhs: f64) -> ChebyshevExpansion {
        self.coef[0] += rhs;
        self
    }
}

impl Sub<f64> for &ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn sub(self, rhs: f64) -> ChebyshevExpansion {
        self + (-rhs)
    }
}

impl Sub<f64> for ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn sub(self, rhs: f64) -> ChebyshevExpansion {
        self + (-rhs)
    }
}

impl Neg for &ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn neg(self) -> ChebyshevExpansion {
        self * -1.0
    }
}

impl Neg for ChebyshevExpansion {
    type Output = ChebyshevExpansion;

    fn neg(self) -> ChebyshevExpansion {
        self * -1.0
    }
}
