use super::*;
use crate::cfg::ZvkCfg;
use crate::error::ZvkError;
use crate::poly::{rat, ratio, GaussRat, UPoly};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::cmp::Ordering;

fn gauss_poly(coeffs: &[i64]) -> UPoly<GaussRat> {
    UPoly::new(coeffs.iter().map(|&c| GaussRat::real(rat(c))).collect())
}

#[test]
fn cube_roots_of_unity_in_canonical_order() {
    // y^3 - 1
    let roots = isolate_roots(&gauss_poly(&[-1, 0, 0, 1]), &ZvkCfg::default()).unwrap();
    assert_eq!(roots.len(), 3);
    let s = 3f64.sqrt() / 2.0;
    let expected = [
        Complex64::new(-0.5, -s),
        Complex64::new(-0.5, s),
        Complex64::new(1.0, 0.0),
    ];
    for (k, (r, e)) in roots.iter().zip(expected).enumerate() {
        assert_eq!(r.index(), k);
        assert!(r.distance(e) < 1e-12, "{r} should be near {e}");
        assert!(r.radius() < 1e-10);
    }
    // Conjugate roots share an exactly rounded real part.
    assert_eq!(roots[0].approx().re, roots[1].approx().re);
    assert_eq!(roots[0].approx().re, -0.5);
}

#[test]
fn roots_are_sorted_and_disjoint() {
    // (y - 2)(y + 1)(y - 0.5)(y^2 + 4)
    let p = gauss_poly(&[-1, 2]) * gauss_poly(&[-2, 1]) * gauss_poly(&[1, 1]);
    let p = p * gauss_poly(&[4, 0, 1]);
    let roots = isolate_roots(&p, &ZvkCfg::default()).unwrap();
    assert_eq!(roots.len(), 5);
    for w in roots.windows(2) {
        assert_eq!(w[0].position_cmp(&w[1]), Ordering::Less);
        assert!(w[0].distance(w[1].approx()) > w[0].radius() + w[1].radius());
    }
    assert!(roots[0].contains(Complex64::new(-1.0, 0.0)));
    assert!(roots[4].contains(Complex64::new(2.0, 0.0)));
}

#[test]
fn gaussian_coefficients_are_supported() {
    // (y - i)(y - 1 - i) = y^2 - (1 + 2i) y + (-1 + i)
    let p = UPoly::new(vec![
        GaussRat::new(rat(-1), rat(1)),
        GaussRat::new(rat(-1), rat(-2)),
        GaussRat::real(rat(1)),
    ]);
    let roots = isolate_roots(&p, &ZvkCfg::default()).unwrap();
    assert!(roots[0].contains(Complex64::new(0.0, 1.0)));
    assert!(roots[1].contains(Complex64::new(1.0, 1.0)));
}

#[test]
fn clustered_roots_need_more_than_doubles() {
    // (y - 1)(y - 1 - 2^-60)
    let eps = GaussRat::real(ratio(1, 1 << 60));
    let one = GaussRat::real(rat(1));
    let a = UPoly::new(vec![-one.clone(), GaussRat::real(rat(1))]);
    let b = UPoly::new(vec![-(one + eps), GaussRat::real(rat(1))]);
    let roots = isolate_roots(&(a * b), &ZvkCfg::default()).unwrap();
    assert_eq!(roots.len(), 2);
    assert!(roots[0].radius() < 2f64.powi(-61));
    assert!(roots[0].contains(Complex64::new(1.0, 0.0)));
    assert!(!roots[1].contains(Complex64::new(1.0, 0.0)));
    assert_eq!(roots[0].approx(), roots[1].approx());
    // Both roots are real, so only the exact real parts tell them apart.
    assert!(roots.iter().all(|r| r.center().im == rat(0)));
    assert!(roots[0].center().re < roots[1].center().re);
}

#[test]
fn real_roots_of_real_polynomials_sit_on_the_axis() {
    // (y + 1)(y^2 - y + 1): one real root and a conjugate pair.
    let roots = isolate_roots(&gauss_poly(&[1, 0, 0, 1]), &ZvkCfg::default()).unwrap();
    assert_eq!(roots[0].center().im, rat(0));
    assert_eq!(roots[0].approx(), Complex64::new(-1.0, 0.0));
    assert!(roots[1].approx().im < 0.0 && roots[2].approx().im > 0.0);
    assert_eq!(roots[1].approx().re, roots[2].approx().re);

    // A non-real polynomial keeps its centers: y^2 - i has no real roots.
    let p = UPoly::new(vec![GaussRat::new(rat(0), rat(-1)), GaussRat::zero(), GaussRat::one()]);
    let roots = isolate_roots(&p, &ZvkCfg::default()).unwrap();
    assert!(roots.iter().all(|r| r.approx().im.abs() > 0.5));
}

#[test]
fn squareful_input_runs_out_of_precision() {
    let p = gauss_poly(&[1, 2, 1]);
    let cfg = ZvkCfg {
        max_prec: 256,
        root_max_iter: 50,
        ..ZvkCfg::default()
    };
    assert_eq!(
        isolate_roots(&p, &cfg),
        Err(ZvkError::RootIsolation { degree: 2 })
    );
}

#[test]
fn constants_have_no_roots() {
    assert!(isolate_roots(&gauss_poly(&[5]), &ZvkCfg::default())
        .unwrap()
        .is_empty());
    assert_eq!(
        isolate_roots(&UPoly::new(vec![]), &ZvkCfg::default()),
        Err(ZvkError::ZeroPolynomial)
    );
}
