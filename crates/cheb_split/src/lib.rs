//! Piecewise Chebyshev approximation.
//!
//! [`dyadic_splitting`] covers a domain with equal-order pieces, halving
//! wherever the trailing coefficients are not negligible. [`subdivide`]
//! refits an existing expansion on equal-width pieces.
//! [`ChebyshevCollection`] wraps a partition as one piecewise function with
//! lookup, antiderivative, roots and extrema.

pub mod collection;
pub mod dyadic;
pub mod split_types;

pub use collection::ChebyshevCollection;
pub use dyadic::{dyadic_splitting, split_error, subdivide};
pub use split_types::SplitConfig;
