//! Truncated Chebyshev expansions on finite intervals.
//!
//! This crate provides:
//! - [`ChebyshevExpansion`]: coefficient vector plus domain, with sum,
//!   difference, scalar and expansion products, multiplication by `x`,
//!   negation, and composition with nonlinear maps
//! - Clenshaw and three-term-recurrence evaluation, scalar and batched
//! - Closed-form derivative and antiderivative
//! - Monomial and power-basis conversion
//! - A per-order cache of Lobatto nodes and fit matrices ([`NodeCache`])
//!   and a pluggable nodal fit ([`NodalFit`], default [`DctFit`])
//!
//! All work is done on the canonical interval `[-1, 1]`; abscissas are
//! mapped with [`to_canonical`] and [`from_canonical`].

mod calculus;
mod compose;
pub mod error;
pub mod eval;
pub mod expansion;
pub mod fit;
mod monomial;
pub mod nodes;

pub use error::ChebError;
pub use eval::{RecurrenceBuffer, clenshaw, recurrence};
pub use expansion::{ChebyshevExpansion, from_canonical, to_canonical};
pub use fit::{DctFit, NodalFit};
pub use nodes::{NodeCache, NodeEntry, fit_matrix, lobatto_nodes};
