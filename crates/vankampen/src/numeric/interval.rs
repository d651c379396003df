//! Outward-rounded real intervals and the complex types built on them.

use super::real::{rmax, rmin, Real, Round};
use crate::poly::GaussRat;
use num_complex::Complex64;

/// Closed interval `[lo, hi]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval<R> {
    pub lo: R,
    pub hi: R,
}

impl<R: Real> Interval<R> {
    pub fn point(x: R) -> Self {
        Self {
            lo: x.clone(),
            hi: x,
        }
    }

    pub fn new(lo: R, hi: R) -> Self {
        Self { lo, hi }
    }

    pub fn zero(prec: u32) -> Self {
        Self::point(R::zero_with(prec))
    }

    /// `[-r, r]` for `r ≥ 0`.
    pub fn symmetric(r: &R) -> Self {
        Self {
            lo: r.negate(),
            hi: r.clone(),
        }
    }

    pub fn from_rational(q: &num_rational::BigRational, prec: u32) -> Self {
        Self {
            lo: R::from_rational(q, prec, Round::Down),
            hi: R::from_rational(q, prec, Round::Up),
        }
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            lo: self.lo.add_rnd(&rhs.lo, Round::Down),
            hi: self.hi.add_rnd(&rhs.hi, Round::Up),
        }
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self {
            lo: self.lo.sub_rnd(&rhs.hi, Round::Down),
            hi: self.hi.sub_rnd(&rhs.lo, Round::Up),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            lo: self.hi.negate(),
            hi: self.lo.negate(),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        let pairs = [
            (&self.lo, &rhs.lo),
            (&self.lo, &rhs.hi),
            (&self.hi, &rhs.lo),
            (&self.hi, &rhs.hi),
        ];
        let mut lo = pairs[0].0.mul_rnd(pairs[0].1, Round::Down);
        let mut hi = pairs[0].0.mul_rnd(pairs[0].1, Round::Up);
        for (a, b) in &pairs[1..] {
            lo = rmin(lo, a.mul_rnd(b, Round::Down));
            hi = rmax(hi, a.mul_rnd(b, Round::Up));
        }
        Self { lo, hi }
    }

    /// Largest absolute value in the interval.
    pub fn mag(&self) -> R {
        rmax(self.lo.magnitude(), self.hi.magnitude())
    }

    /// Smallest absolute value in the interval (zero if it straddles 0).
    pub fn mig(&self) -> R {
        if self.lo.sign() > 0 {
            self.lo.clone()
        } else if self.hi.sign() < 0 {
            self.hi.negate()
        } else {
            R::zero_with(self.lo.prec())
        }
    }

    pub fn contains_zero(&self) -> bool {
        self.lo.sign() <= 0 && self.hi.sign() >= 0
    }

    pub fn is_finite(&self) -> bool {
        self.lo.finite() && self.hi.finite() && self.lo <= self.hi
    }
}

/// Complex number at working precision (midpoint arithmetic, round to
/// nearest).
#[derive(Clone, Debug, PartialEq)]
pub struct CPoint<R> {
    pub re: R,
    pub im: R,
}

impl<R: Real> CPoint<R> {
    pub fn new(re: R, im: R) -> Self {
        Self { re, im }
    }

    pub fn zero(prec: u32) -> Self {
        Self::new(R::zero_with(prec), R::zero_with(prec))
    }

    pub fn from_complex64(z: Complex64, prec: u32) -> Self {
        Self::new(R::from_f64_with(z.re, prec), R::from_f64_with(z.im, prec))
    }

    pub fn from_gauss(z: &GaussRat, prec: u32) -> Self {
        Self::new(
            R::from_rational(&z.re, prec, Round::Nearest),
            R::from_rational(&z.im, prec, Round::Nearest),
        )
    }

    pub fn to_complex64(&self) -> Complex64 {
        Complex64::new(self.re.approx_f64(), self.im.approx_f64())
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(self.re.add(&rhs.re), self.im.add(&rhs.im))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.re.sub(&rhs.re), self.im.sub(&rhs.im))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self::new(
            self.re.mul(&rhs.re).sub(&self.im.mul(&rhs.im)),
            self.re.mul(&rhs.im).add(&self.im.mul(&rhs.re)),
        )
    }

    pub fn scale(&self, k: &R) -> Self {
        Self::new(self.re.mul(k), self.im.mul(k))
    }

    pub fn norm_sqr(&self) -> R {
        self.re.mul(&self.re).add(&self.im.mul(&self.im))
    }

    /// `|re| + |im|`, within a factor √2 of the modulus.
    pub fn l1(&self) -> R {
        self.re.magnitude().add(&self.im.magnitude())
    }

    /// Quotient, or `None` when the divisor is zero.
    pub fn div(&self, rhs: &Self) -> Option<Self> {
        let den = rhs.norm_sqr();
        if den.sign() == 0 {
            return None;
        }
        let num = Self::new(
            self.re.mul(&rhs.re).add(&self.im.mul(&rhs.im)),
            self.im.mul(&rhs.re).sub(&self.re.mul(&rhs.im)),
        );
        Some(Self::new(num.re.div(&den), num.im.div(&den)))
    }

    pub fn is_finite(&self) -> bool {
        self.re.finite() && self.im.finite()
    }
}

/// Rectangular complex enclosure.
#[derive(Clone, Debug, PartialEq)]
pub struct CBox<R> {
    pub re: Interval<R>,
    pub im: Interval<R>,
}

impl<R: Real> CBox<R> {
    pub fn new(re: Interval<R>, im: Interval<R>) -> Self {
        Self { re, im }
    }

    pub fn zero(prec: u32) -> Self {
        Self::new(Interval::zero(prec), Interval::zero(prec))
    }

    pub fn point(z: &CPoint<R>) -> Self {
        Self::new(Interval::point(z.re.clone()), Interval::point(z.im.clone()))
    }

    pub fn from_gauss(z: &GaussRat, prec: u32) -> Self {
        Self::new(
            Interval::from_rational(&z.re, prec),
            Interval::from_rational(&z.im, prec),
        )
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(self.re.add(&rhs.re), self.im.add(&rhs.im))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.re.sub(&rhs.re), self.im.sub(&rhs.im))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self::new(
            self.re.mul(&rhs.re).sub(&self.im.mul(&rhs.im)),
            self.re.mul(&rhs.im).add(&self.im.mul(&rhs.re)),
        )
    }

    /// Upper bound on `|z|` over the box.
    pub fn mag_upper(&self) -> R {
        self.re.mag().add_rnd(&self.im.mag(), Round::Up)
    }

    /// Lower bound on `|z|` over the box.
    pub fn mig_lower(&self) -> R {
        rmax(self.re.mig(), self.im.mig())
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}
