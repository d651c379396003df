use super::homotopy::Homotopy;
use super::step::certify;
use super::*;
use crate::numeric::{CBox, CPoint, Interval};
use crate::poly::{rat, UPoly};

fn cusp() -> BiPoly {
    "x^2 + y^3".parse().unwrap()
}

fn residual(f: &BiPoly, x: Complex64, y: Complex64) -> f64 {
    f.terms()
        .iter()
        .map(|(c, i, j)| x.powu(*i as u32) * y.powu(*j as u32) * c.to_complex64())
        .sum::<Complex64>()
        .norm()
}

#[test]
fn cusp_strand_matches_reference_endpoint() {
    let (x0, x1) = (Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.5));
    let s = follow_strand(&cusp(), x0, x1, Complex64::new(-1.0, 0.0), &ZvkCfg::default()).unwrap();
    assert_eq!(s.samples()[0].0, 0.0);
    assert_eq!(s.samples().last().unwrap().0, 1.0);
    assert!((s.start() - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    let expected_end = Complex64::new(-1.026166099551513, -0.32768940253604323);
    assert!((s.end() - expected_end).norm() < 1e-9, "end {}", s.end());
    for w in s.samples().windows(2) {
        assert!(w[0].0 < w[1].0);
    }
    for &(t, y) in s.samples() {
        let x = x0 * (1.0 - t) + x1 * t;
        assert!(residual(&cusp(), x, y) < 1e-9);
    }
}

#[test]
fn multiprecision_tracking_agrees_with_doubles() {
    let (x0, x1) = (Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.5));
    let y0 = Complex64::new(-1.0, 0.0);
    let fast = follow_strand(&cusp(), x0, x1, y0, &ZvkCfg::default()).unwrap();
    let cfg = ZvkCfg {
        start_prec: 128,
        ..ZvkCfg::default()
    };
    let slow = follow_strand(&cusp(), x0, x1, y0, &cfg).unwrap();
    assert!((fast.end() - slow.end()).norm() < 1e-12);
}

#[test]
fn precision_cap_is_enforced() {
    let (x0, x1) = (Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.5));
    let y0 = Complex64::new(-1.0, 0.0);
    let capped = ZvkCfg {
        max_prec: 32,
        ..ZvkCfg::default()
    };
    assert_eq!(
        follow_strand(&cusp(), x0, x1, y0, &capped),
        Err(ZvkError::PrecisionExhausted { max_prec: 32 })
    );
    let starved = ZvkCfg {
        max_steps: 1,
        max_prec: 256,
        ..ZvkCfg::default()
    };
    assert_eq!(
        follow_strand(&cusp(), x0, x1, y0, &starved),
        Err(ZvkError::PrecisionExhausted { max_prec: 256 })
    );
}

#[test]
fn homotopy_evaluates_value_and_partials() {
    // g = y^2 - t
    let g: GaussBiPoly = UPoly::new(vec![
        UPoly::new(vec![GaussRat::real(rat(0)), GaussRat::real(rat(-1))]),
        UPoly::new(vec![]),
        UPoly::new(vec![GaussRat::real(rat(1))]),
    ]);
    let hom = Homotopy::<f64>::new(&g, 53);
    let (v, vy, vt) = hom.eval(&0.25, &CPoint::new(0.5, 0.0));
    assert_eq!(v, CPoint::new(0.0, 0.0));
    assert_eq!(vy, CPoint::new(1.0, 0.0));
    assert_eq!(vt, CPoint::new(-1.0, 0.0));
}

#[test]
fn rouche_certificate_accepts_simple_roots_only() {
    let b = |x: f64| CBox::new(Interval::point(x), Interval::point(0.0));
    // G = z: one root at the center.
    assert!(certify(&vec![vec![b(0.0), b(1.0)]], 53).is_some());
    // G = 0.01 + z + z^2: a root near -0.0101.
    let r = certify(&vec![vec![b(0.01), b(1.0), b(1.0)]], 53).unwrap();
    assert!(r > 0.0101 && r < 0.05);
    // G = z^2: double root, no certificate.
    assert!(certify(&vec![vec![b(0.0), b(0.0), b(1.0)]], 53).is_none());
    // G = 1 + s·z: derivative vanishes at s = 0.
    assert!(certify(&vec![vec![b(1.0), b(0.0)], vec![b(0.0), b(1.0)]], 53).is_none());
}
