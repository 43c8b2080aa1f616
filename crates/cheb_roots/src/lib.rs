//! Real roots of Chebyshev expansions.
//!
//! Three entry points:
//! - [`real_roots`]: eigenvalues of the Chebyshev companion matrix, exact up
//!   to floating-point conditioning
//! - [`real_roots_approx`]: sign changes at Lobatto samples refined by a
//!   local quadratic
//! - [`real_roots_intervals`]: parallel solve over a partition of segments,
//!   sorted and deduplicated
//!
//! [`monotonic_solvex`] inverts a strictly monotonic expansion by bisection.

pub mod approx;
pub mod companion;
pub mod config;
pub mod intervals;
pub mod solve;

pub use approx::real_roots_approx;
pub use companion::{
    companion_matrix, companion_matrix_with, effective_degree, real_roots, real_roots_with,
};
pub use config::RootConfig;
pub use intervals::{real_roots_intervals, real_roots_intervals_with};
pub use solve::monotonic_solvex;
