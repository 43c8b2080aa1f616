//! Dyadic splitting of smooth and rapidly growing functions.

use std::f64::consts::PI;

use cheb_core::ChebyshevExpansion;
use cheb_roots::{real_roots, real_roots_intervals};
use cheb_split::{ChebyshevCollection, SplitConfig, dyadic_splitting, subdivide};

#[test]
fn exp_on_unit_interval() {
    let pieces = dyadic_splitting(f64::exp, -1.0, 1.0, &SplitConfig::new(8, 3, 1e-14, 8)).unwrap();
    assert_eq!(pieces[0].xmin(), -1.0);
    assert_eq!(pieces[pieces.len() - 1].xmax(), 1.0);
    for w in pieces.windows(2) {
        assert_eq!(w[0].xmax(), w[1].xmin());
    }

    for ex in &pieces {
        let (a, b) = ex.domain();
        assert!(b > a);
        for i in 0..=20 {
            let x = a + (b - a) * f64::from(i) / 20.0;
            let diff = (ex.y_clenshaw(x) - x.exp()).abs();
            assert!(diff < 1e-14, "[{a}, {b}] at {x}: diff = {diff}");
        }
    }
}

#[test]
fn funky_function_on_long_domain() {
    let f = |x: f64| x.exp() * x.sin() * (x + 1.0).ln();
    let x = 7.0f64;
    let pieces = dyadic_splitting(f, 0.0, 100.0, &SplitConfig::new(8, 3, 1e-13, 10)).unwrap();
    assert_eq!(pieces[0].xmin(), 0.0);
    assert_eq!(pieces[pieces.len() - 1].xmax(), 100.0);
    for ex in &pieces {
        assert!(ex.xmax() > ex.xmin());
        if x > ex.xmin() && x < ex.xmax() {
            let y = f(x);
            let diff = ((ex.y_clenshaw(x) - y) / y).abs();
            assert!(diff < 1e-13, "diff = {diff}, y = {y}");
        }
    }
}

#[test]
fn split_pieces_recover_every_root() {
    let pieces = dyadic_splitting(f64::sin, 0.5, 60.5, &SplitConfig::new(12, 3, 1e-13, 10)).unwrap();
    let roots = real_roots_intervals(&pieces, true);
    let expected: Vec<f64> = (1..=19).map(|k| f64::from(k) * PI).collect();
    assert_eq!(roots.len(), expected.len(), "{roots:?}");
    for (r, e) in roots.iter().zip(&expected) {
        assert!((r - e).abs() < 1e-10, "{r} vs {e}");
    }
}

#[test]
fn subdivide_then_collect() {
    let ce = ChebyshevExpansion::factory(30, |x| (x / 3.0).cos(), 0.0, 30.0).unwrap();
    let parts = subdivide(&ce, 6, 16).unwrap();
    let coll = ChebyshevCollection::new(parts).unwrap();

    let single = {
        let mut r = real_roots(&ce, true);
        r.sort_by(f64::total_cmp);
        r
    };
    let piecewise = coll.roots();
    assert_eq!(single.len(), piecewise.len());
    for (a, b) in single.iter().zip(&piecewise) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn collection_inverse_of_monotonic_piece() {
    let coll = ChebyshevCollection::from_function(
        |x| x.powi(3) + x,
        -2.0,
        2.5,
        &SplitConfig::default(),
    )
    .unwrap();
    let xs = coll.solve_for_x(2.0);
    assert_eq!(xs.len(), 1, "{xs:?}");
    assert!((xs[0] - 1.0).abs() < 1e-12);
}
