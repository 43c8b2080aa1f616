//! Chebyshev–Lobatto nodes and the nodal fit matrix, cached per order.
//!
//! The nodes of order N are the N+1 extrema of `T_N` on `[-1, 1]`,
//! `cos(pi k / N)` for `k = 0..=N`, ordered from `1` down to `-1`.
//! The fit matrix maps function values at those nodes to expansion
//! coefficients (Boyd, SIAM Review 2013, Appendix A).

use std::f64::consts::PI;
use std::sync::{Arc, OnceLock};

use nalgebra::DMatrix;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Nodes and fit matrix for a single order.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeEntry {
    order: usize,
    nodes: Vec<f64>,
    fit_matrix: DMatrix<f64>,
}

impl NodeEntry {
    fn compute(order: usize) -> Self {
        Self {
            order,
            nodes: lobatto_nodes(order),
            fit_matrix: fit_matrix(order),
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Nodes in `[-1, 1]`, descending.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// The `(N+1) x (N+1)` matrix taking nodal values to coefficients.
    pub fn fit_matrix(&self) -> &DMatrix<f64> {
        &self.fit_matrix
    }
}

/// Chebyshev–Lobatto nodes of order `n`.
///
/// Order 0 has the single node `1.0`; a constant is fully determined by
/// one sample anywhere.
pub fn lobatto_nodes(n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![1.0];
    }
    let nf = n as f64;
    (0..=n).map(|k| (PI * k as f64 / nf).cos()).collect()
}

/// Discrete cosine transform matrix for Lobatto samples of order `n`.
///
/// `L[j][k] = 2 / (p_j p_k n) * cos(pi j k / n)` with `p = 2` at the two
/// end indices and `1` elsewhere.
pub fn fit_matrix(n: usize) -> DMatrix<f64> {
    if n == 0 {
        return DMatrix::from_element(1, 1, 1.0);
    }
    let nf = n as f64;
    let p = |i: usize| if i == 0 || i == n { 2.0 } else { 1.0 };
    DMatrix::from_fn(n + 1, n + 1, |j, k| {
        2.0 / (p(j) * p(k) * nf) * (PI * (j * k) as f64 / nf).cos()
    })
}

/// Order-keyed cache of [`NodeEntry`] values.
///
/// Lookups of populated orders take a shared read lock. First-time
/// population of an order is serialized by the write lock, so concurrent
/// callers never compute or insert the same order twice.
#[derive(Debug, Default)]
pub struct NodeCache {
    entries: RwLock<FxHashMap<usize, Arc<NodeEntry>>>,
}

impl NodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by the convenience constructors.
    pub fn global() -> &'static NodeCache {
        static GLOBAL: OnceLock<NodeCache> = OnceLock::new();
        GLOBAL.get_or_init(NodeCache::new)
    }

    /// Entry for `order`, computing it on first request.
    pub fn get(&self, order: usize) -> Arc<NodeEntry> {
        {
            let map = self.entries.read();
            if let Some(entry) = map.get(&order) {
                return Arc::clone(entry);
            }
        }
        let mut map = self.entries.write();
        let entry = map.entry(order).or_insert_with(|| {
            trace!(order, "populating node cache");
            Arc::new(NodeEntry::compute(order))
        });
        Arc::clone(entry)
    }

    /// Populate the given orders ahead of time.
    pub fn prepopulate<I>(&self, orders: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for order in orders {
            self.get(order);
        }
    }

    /// Drop every cached entry. Outstanding `Arc`s stay valid.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn contains(&self, order: usize) -> bool {
        self.entries.read().contains_key(&order)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
