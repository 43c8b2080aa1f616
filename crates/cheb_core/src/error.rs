//! Error types for Chebyshev expansion construction and algebra.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from expansion construction, algebra preconditions, and solvers.
///
/// Numerical unreliability (ill-conditioned eigenvalue solves, composition
/// near a singularity) is never reported here; those operations return a
/// best-effort result instead.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChebError {
    /// Domain bounds are not finite or `xmin >= xmax`.
    InvalidDomain { xmin: f64, xmax: f64 },
    /// Coefficient sequence is empty.
    EmptyCoefficients,
    /// Binary algebra between expansions on different domains.
    DomainMismatch {
        left: (f64, f64),
        right: (f64, f64),
    },
    /// Derivative of order zero was requested.
    InvalidDerivativeOrder,
    /// Invalid configuration parameter.
    InvalidConfig(&'static str),
    /// Nodal values handed to a fitter do not match the requested order.
    FitLength { expected: usize, got: usize },
    /// Operation requires a monotonic expansion.
    NotMonotonic,
    /// Target value is not bracketed by the expansion over its domain.
    NotBracketed,
    /// A piecewise collection was built from no expansions.
    EmptyCollection,
    /// Adjacent pieces of a collection do not share an endpoint.
    NotContiguous { left_xmax: f64, right_xmin: f64 },
    /// Abscissa lies outside the covered domain.
    OutOfDomain { x: f64, xmin: f64, xmax: f64 },
}

impl Display for ChebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDomain { xmin, xmax } => {
                write!(f, "invalid domain [{xmin}, {xmax}]: need finite xmin < xmax")
            }
            Self::EmptyCoefficients => write!(f, "coefficient sequence must not be empty"),
            Self::DomainMismatch { left, right } => write!(
                f,
                "domain mismatch: [{}, {}] vs [{}, {}]",
                left.0, left.1, right.0, right.1
            ),
            Self::InvalidDerivativeOrder => write!(f, "derivative order must be >= 1"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::FitLength { expected, got } => {
                write!(f, "fit expected {expected} nodal values, got {got}")
            }
            Self::NotMonotonic => write!(f, "expansion is not monotonic over its domain"),
            Self::NotBracketed => write!(f, "target value is not bracketed by the expansion"),
            Self::EmptyCollection => write!(f, "collection needs at least one expansion"),
            Self::NotContiguous {
                left_xmax,
                right_xmin,
            } => write!(
                f,
                "pieces are not contiguous: {left_xmax} then {right_xmin}"
            ),
            Self::OutOfDomain { x, xmin, xmax } => {
                write!(f, "x = {x} outside [{xmin}, {xmax}]")
            }
        }
    }
}

impl Error for ChebError {}
