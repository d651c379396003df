//! Bivariate polynomials `f(x, y)` over ℚ(i), stored as polynomials in `y`
//! with coefficients in ℚ(i)[x].
//!
//! The distinguished variable is `y`: fibers are the roots in `y` above a
//! fixed `x`, and discriminants eliminate `y`.

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::gauss::GaussRat;
use super::resultant::{discriminant, resultant};
use super::ring::{Field, Ring};
use super::upoly::UPoly;

/// Univariate polynomial over ℚ.
pub type QPoly = UPoly<BigRational>;

/// Univariate polynomial in `x` over ℚ(i).
pub type XPoly = UPoly<GaussRat>;

/// Polynomial in `y` whose coefficients are polynomials in `t` (or `x`) over ℚ(i).
pub type GaussBiPoly = UPoly<XPoly>;

#[derive(Clone, Debug, PartialEq)]
pub struct BiPoly {
    inner: GaussBiPoly,
}

impl BiPoly {
    /// Build from the coefficients of `y^0, y^1, …`.
    pub fn from_y_coeffs(coeffs: Vec<XPoly>) -> Self {
        Self {
            inner: UPoly::new(coeffs),
        }
    }

    /// Sum of `c · x^i · y^j` over `(c, i, j)`.
    pub fn from_terms(terms: &[(i64, usize, usize)]) -> Self {
        terms.iter().fold(BiPoly::zero(), |acc, &(c, i, j)| {
            acc + BiPoly {
                inner: UPoly::monomial(UPoly::monomial(GaussRat::from_int(c), i), j),
            }
        })
    }

    pub fn constant(c: impl Into<GaussRat>) -> Self {
        Self::from_y_coeffs(vec![XPoly::constant(c.into())])
    }

    /// The imaginary unit as a constant polynomial.
    pub fn i() -> Self {
        Self::constant(GaussRat::i())
    }

    /// Polynomial depending on `x` only.
    pub fn from_x_poly(p: XPoly) -> Self {
        Self::from_y_coeffs(vec![p])
    }

    pub fn x() -> Self {
        Self::from_x_poly(XPoly::var())
    }

    pub fn y() -> Self {
        Self {
            inner: UPoly::var(),
        }
    }

    #[inline]
    pub fn y_coeffs(&self) -> &[XPoly] {
        self.inner.coeffs()
    }

    #[inline]
    pub fn as_y_poly(&self) -> &GaussBiPoly {
        &self.inner
    }

    #[inline]
    pub fn degree_y(&self) -> usize {
        self.inner.deg()
    }

    pub fn degree_x(&self) -> usize {
        self.y_coeffs().iter().map(|c| c.deg()).max().unwrap_or(0)
    }

    pub fn total_degree(&self) -> usize {
        self.y_coeffs()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(j, c)| j + c.deg())
            .max()
            .unwrap_or(0)
    }

    /// Leading coefficient with respect to `y`.
    #[inline]
    pub fn lc_y(&self) -> XPoly {
        self.inner.lc()
    }

    /// The leading coefficient in `y` does not depend on `x`.
    #[inline]
    pub fn has_constant_lc_y(&self) -> bool {
        self.lc_y().is_constant()
    }

    pub fn deriv_y(&self) -> Self {
        Self {
            inner: self.inner.derivative(),
        }
    }

    pub fn pow(&self, n: u32) -> Self {
        Self {
            inner: self.inner.pow(n),
        }
    }

    /// All coefficients are real, so the curve is defined over ℚ.
    pub fn is_real(&self) -> bool {
        self.y_coeffs()
            .iter()
            .all(|c| c.coeffs().iter().all(|a| a.im.is_zero()))
    }

    /// Monic gcd of the ℚ(i)[x]-coefficients.
    pub fn content_x(&self) -> XPoly {
        self.y_coeffs()
            .iter()
            .fold(XPoly::zero(), |acc, c| acc.gcd(c))
    }

    /// `self / content_x(self)`.
    pub fn primitive_part(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let c = self.content_x();
        Self::from_y_coeffs(self.y_coeffs().iter().map(|a| a.div_rem(&c).0).collect())
    }

    /// Scaled so the leading coefficient in `y` is itself monic.
    pub fn monic(&self) -> Self {
        match self.lc_y().lc().inv() {
            Some(inv) => self.clone() * BiPoly::constant(inv),
            None => self.clone(),
        }
    }

    /// Squarefree part, monic: radical of the content times the radical of
    /// the primitive part (gcd with `∂/∂y` by primitive remainder sequences).
    pub fn radical(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let c_rad = self.content_x().radical();
        let pp = self.primitive_part();
        let pp_rad = if pp.degree_y() == 0 {
            BiPoly::one()
        } else {
            let g = gcd_y(&pp, &pp.deriv_y());
            let q = pp.inner.div_exact_poly(&g.inner);
            debug_assert!(q.is_some(), "gcd divides the primitive part");
            BiPoly {
                inner: q.unwrap_or_else(|| pp.inner.clone()),
            }
            .primitive_part()
        };
        (pp_rad * BiPoly::from_x_poly(c_rad)).monic()
    }

    /// Linear change of variables `f(x, y) ↦ f(x + y, y)`.
    pub fn shift_x_by_y(&self) -> Self {
        let xs = BiPoly::x() + BiPoly::y();
        self.y_coeffs()
            .iter()
            .enumerate()
            .fold(BiPoly::zero(), |acc, (j, c)| {
                let cx = c.coeffs().iter().rev().fold(BiPoly::zero(), |h, a| {
                    h * xs.clone() + BiPoly::constant(a.clone())
                });
                acc + cx * BiPoly::y().pow(j as u32)
            })
    }

    /// `disc_y(f) ∈ ℚ(i)[x]`.
    pub fn discriminant_y(&self) -> XPoly {
        discriminant(&self.inner)
    }

    /// `Res_y(f, g) ∈ ℚ(i)[x]`.
    pub fn resultant_y(&self, other: &BiPoly) -> XPoly {
        resultant(&self.inner, &other.inner)
    }

    /// Fiber polynomial `f(X, y)` for a Gaussian-rational `X`.
    pub fn specialize_x(&self, x: &GaussRat) -> UPoly<GaussRat> {
        self.inner.map(|c| c.eval(x))
    }

    /// Pullback along the affine path `x = (1 − t)·x0 + t·x1`, as a
    /// polynomial in `y` with coefficients in ℚ(i)[t].
    pub fn pullback_segment(&self, x0: &GaussRat, x1: &GaussRat) -> GaussBiPoly {
        let path = UPoly::new(vec![x0.clone(), x1.clone() - x0.clone()]);
        self.inner.map(|c| c.compose(&path))
    }

    /// Nonzero terms as `(coefficient, x-exponent, y-exponent)`.
    pub fn terms(&self) -> Vec<(GaussRat, usize, usize)> {
        let mut out = Vec::new();
        for (j, c) in self.y_coeffs().iter().enumerate() {
            for (i, a) in c.coeffs().iter().enumerate() {
                if !a.is_zero() {
                    out.push((a.clone(), i, j));
                }
            }
        }
        out
    }
}

/// Primitive gcd in `ℚ(i)[x][y]` of two polynomials.
fn gcd_y(a: &BiPoly, b: &BiPoly) -> BiPoly {
    let mut a = a.primitive_part();
    let mut b = b.primitive_part();
    if a.degree_y() < b.degree_y() {
        std::mem::swap(&mut a, &mut b);
    }
    while !b.is_zero() {
        let r = a.inner.pseudo_rem(&b.inner);
        a = b;
        b = BiPoly { inner: r }.primitive_part();
    }
    a.primitive_part()
}

impl Zero for BiPoly {
    fn zero() -> Self {
        Self {
            inner: UPoly::zero(),
        }
    }
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
}

impl One for BiPoly {
    fn one() -> Self {
        Self::constant(GaussRat::one())
    }
}

impl Add for BiPoly {
    type Output = BiPoly;
    fn add(self, rhs: BiPoly) -> BiPoly {
        BiPoly {
            inner: self.inner + rhs.inner,
        }
    }
}

impl Sub for BiPoly {
    type Output = BiPoly;
    fn sub(self, rhs: BiPoly) -> BiPoly {
        BiPoly {
            inner: self.inner - rhs.inner,
        }
    }
}

impl Mul for BiPoly {
    type Output = BiPoly;
    fn mul(self, rhs: BiPoly) -> BiPoly {
        BiPoly {
            inner: self.inner * rhs.inner,
        }
    }
}

impl Neg for BiPoly {
    type Output = BiPoly;
    fn neg(self) -> BiPoly {
        BiPoly { inner: -self.inner }
    }
}

impl fmt::Display for BiPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms();
        if terms.is_empty() {
            return f.write_str("0");
        }
        terms.sort_by(|a, b| (b.1 + b.2, b.2).cmp(&(a.1 + a.2, a.2)));
        for (k, (c, i, j)) in terms.iter().enumerate() {
            let mono = match (i, j) {
                (0, 0) => String::new(),
                (_, 0) => pow_str("x", *i),
                (0, _) => pow_str("y", *j),
                _ => format!("{}*{}", pow_str("x", *i), pow_str("y", *j)),
            };
            let (negative, mag) = coefficient_str(c);
            let body = if mono.is_empty() {
                mag
            } else if mag == "1" {
                mono
            } else {
                format!("{mag}*{mono}")
            };
            match (k, negative) {
                (0, false) => write!(f, "{body}")?,
                (0, true) => write!(f, "-{body}")?,
                (_, false) => write!(f, " + {body}")?,
                (_, true) => write!(f, " - {body}")?,
            }
        }
        Ok(())
    }
}

/// Sign and magnitude of a coefficient as printed: `3/2`, `2*I`, or a
/// parenthesized `(a + b*I)` that always counts as positive.
fn coefficient_str(c: &GaussRat) -> (bool, String) {
    let scaled = |q: &BigRational, unit: &str| -> String {
        match (q.abs().is_one(), unit) {
            (true, "") => "1".to_string(),
            (true, _) => unit.to_string(),
            (false, "") => format!("{}", q.abs()),
            (false, _) => format!("{}*{unit}", q.abs()),
        }
    };
    if c.im.is_zero() {
        (c.re.is_negative(), scaled(&c.re, ""))
    } else if c.re.is_zero() {
        (c.im.is_negative(), scaled(&c.im, "I"))
    } else {
        let op = if c.im.is_negative() { '-' } else { '+' };
        (false, format!("({} {op} {})", c.re, scaled(&c.im, "I")))
    }
}

fn pow_str(var: &str, e: usize) -> String {
    if e == 1 {
        var.to_string()
    } else {
        format!("{var}^{e}")
    }
}
