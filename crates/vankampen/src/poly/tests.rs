use super::*;
use num_rational::BigRational;
use num_traits::{One, Zero};

fn q(coeffs: &[i64]) -> QPoly {
    UPoly::new(coeffs.iter().map(|&c| rat(c)).collect())
}

fn qx(coeffs: &[i64]) -> XPoly {
    UPoly::new(coeffs.iter().map(|&c| GaussRat::from_int(c)).collect())
}

#[test]
fn parse_and_display_agree() {
    let f: BiPoly = "y^3 + x^3 - 1".parse().unwrap();
    assert_eq!(f.to_string(), "y^3 + x^3 - 1");
    assert_eq!(f.degree_y(), 3);
    assert_eq!(f.total_degree(), 3);

    let g: BiPoly = "2x^2y - (x+y)(x-y) + 3/4".parse().unwrap();
    let expected = BiPoly::from_terms(&[(2, 2, 1), (-1, 2, 0), (1, 0, 2)])
        + BiPoly::constant(ratio(3, 4));
    assert_eq!(g, expected);

    let h: BiPoly = "x**2 + 0.5*y".parse().unwrap();
    assert_eq!(
        h,
        BiPoly::from_terms(&[(1, 2, 0)]) + BiPoly::y() * BiPoly::constant(ratio(1, 2))
    );
}

#[test]
fn parse_rejects_garbage() {
    assert!(matches!(
        "x +".parse::<BiPoly>(),
        Err(crate::ZvkError::Parse { .. })
    ));
    assert!("3/0".parse::<BiPoly>().is_err());
    assert!("x/y".parse::<BiPoly>().is_err());
    assert!("(x + 1".parse::<BiPoly>().is_err());
    assert!("z".parse::<BiPoly>().is_err());
    assert!("x/(i - I)".parse::<BiPoly>().is_err());
}

#[test]
fn gaussian_coefficients_parse_and_print() {
    let f: BiPoly = "y^3 + x^3 + I*x + 1".parse().unwrap();
    assert!(!f.is_real());
    assert_eq!(f.to_string(), "y^3 + x^3 + I*x + 1");
    assert_eq!(f, "y^3 + x^3 + i x + 1".parse().unwrap());

    let g: BiPoly = "(2 - 3i)*x*y - 2I + 1/(1 + i)".parse().unwrap();
    assert_eq!(g.to_string(), "(2 - 3*I)*x*y + (1/2 - 5/2*I)");
    assert_eq!(g, g.to_string().parse().unwrap());
    assert!("y^2 - x".parse::<BiPoly>().unwrap().is_real());
    // i^2 = -1 folds back to a real polynomial.
    assert!("y^2 + (i*x)^2".parse::<BiPoly>().unwrap().is_real());
}

#[test]
fn univariate_gcd_and_radical() {
    // (x-1)^2 (x+2) = x^3 - 3x + 2
    let p = q(&[2, -3, 0, 1]);
    assert_eq!(p.radical(), q(&[-2, 1, 1]));
    assert_eq!(p.gcd(&p.derivative()), q(&[-1, 1]));
    let (quot, rem) = p.div_rem(&q(&[-1, 1]));
    assert!(rem.is_zero());
    assert_eq!(quot, q(&[-2, 1, 1]));
    assert_eq!(p.div_exact_poly(&q(&[2, 1])), Some(q(&[1, -2, 1])));
    assert_eq!(p.div_exact_poly(&q(&[3, 1])), None);
}

#[test]
fn resultant_matches_hand_computation() {
    assert_eq!(resultant(&q(&[-2, 0, 1]), &q(&[-1, 1])), rat(-1));
    // y^2 + c has discriminant -4c.
    assert_eq!(discriminant(&q(&[5, 0, 1])), rat(-20));
    // Constant cases.
    assert_eq!(resultant(&q(&[3]), &q(&[1, 0, 1])), rat(9));
    assert_eq!(resultant(&q(&[3]), &q(&[2])), BigRational::one());
    assert!(resultant(&QPoly::zero(), &q(&[1, 1])).is_zero());
}

#[test]
fn discriminant_of_fermat_cubic() {
    let f: BiPoly = "y^3 + x^3 - 1".parse().unwrap();
    // -27 (x^3 - 1)^2
    let expected = qx(&[-1, 0, 0, 1]).pow(2).scale(&GaussRat::from_int(-27));
    assert_eq!(f.discriminant_y(), expected);
    assert_eq!(f.discriminant_y().radical(), qx(&[-1, 0, 0, 1]));
}

#[test]
fn bivariate_radical_drops_repeated_factors() {
    let f: BiPoly = "(x + y)^2 * (y - 1) * (x - 2)^3".parse().unwrap();
    let r = f.radical();
    assert_eq!(r.degree_y(), 2);
    assert_eq!(r.degree_x(), 2);
    assert_eq!(r.radical().degree_y(), 2);
    let scaled: BiPoly = "2*y^2 - 2*x".parse().unwrap();
    assert_eq!(scaled.radical().to_string(), "y^2 - x");
    // r vanishes where f does: compare with (x+y)(y-1)(x-2) up to a constant.
    let expected: BiPoly = "(x + y) * (y - 1) * (x - 2)".parse().unwrap();
    let lc_ratio = expected.lc_y().lc() * r.lc_y().lc().inv().unwrap();
    assert_eq!(r * BiPoly::constant(lc_ratio), expected);
}

#[test]
fn shift_makes_leading_coefficient_constant() {
    let f: BiPoly = "x*y - 1".parse().unwrap();
    assert!(!f.has_constant_lc_y());
    let g = f.shift_x_by_y();
    assert_eq!(g, "y^2 + x*y - 1".parse().unwrap());
    assert!(g.has_constant_lc_y());
}

#[test]
fn pullback_interpolates_endpoints() {
    let f: BiPoly = "x^2 + y^3".parse().unwrap();
    let x0 = GaussRat::new(rat(1), rat(0));
    let x1 = GaussRat::new(rat(1), ratio(1, 2));
    let g = f.pullback_segment(&x0, &x1);
    let at = |t: i64| -> UPoly<GaussRat> {
        g.map(|c: &UPoly<GaussRat>| c.eval(&GaussRat::real(rat(t))))
    };
    assert_eq!(at(0), f.specialize_x(&x0));
    assert_eq!(at(1), f.specialize_x(&x1));
}

#[test]
fn gaussian_arithmetic_is_a_field() {
    let a = GaussRat::new(rat(1), rat(2));
    let inv = a.inv().unwrap();
    assert_eq!(a.clone() * inv, GaussRat::one());
    assert_eq!(a.conj() * a.clone(), GaussRat::real(rat(5)));
    assert!(GaussRat::zero().inv().is_none());
}
