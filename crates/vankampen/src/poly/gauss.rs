//! Gaussian rationals `ℚ(i)`: exact coordinates for basepoints and fibers.

use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::ring::{rat_from_f64, Field, Ring};

/// `re + i·im` with rational parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GaussRat {
    pub re: BigRational,
    pub im: BigRational,
}

impl GaussRat {
    #[inline]
    pub fn new(re: BigRational, im: BigRational) -> Self {
        Self { re, im }
    }

    #[inline]
    pub fn real(re: BigRational) -> Self {
        Self {
            re,
            im: BigRational::zero(),
        }
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self {
            re: BigRational::zero(),
            im: BigRational::one(),
        }
    }

    /// Exact dyadic value of a double-precision complex number.
    pub fn from_complex64(z: Complex64) -> Self {
        Self {
            re: rat_from_f64(z.re),
            im: rat_from_f64(z.im),
        }
    }

    /// Nearest double-precision value.
    pub fn to_complex64(&self) -> Complex64 {
        Complex64::new(
            self.re.to_f64().unwrap_or(f64::NAN),
            self.im.to_f64().unwrap_or(f64::NAN),
        )
    }

    /// `re² + im²`.
    pub fn norm_sqr(&self) -> BigRational {
        &self.re * &self.re + &self.im * &self.im
    }

    pub fn conj(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }
}

impl Add for GaussRat {
    type Output = GaussRat;
    fn add(self, rhs: GaussRat) -> GaussRat {
        GaussRat {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for GaussRat {
    type Output = GaussRat;
    fn sub(self, rhs: GaussRat) -> GaussRat {
        GaussRat {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for GaussRat {
    type Output = GaussRat;
    fn mul(self, rhs: GaussRat) -> GaussRat {
        GaussRat {
            re: &self.re * &rhs.re - &self.im * &rhs.im,
            im: &self.re * &rhs.im + &self.im * &rhs.re,
        }
    }
}

impl Neg for GaussRat {
    type Output = GaussRat;
    fn neg(self) -> GaussRat {
        GaussRat {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Zero for GaussRat {
    fn zero() -> Self {
        Self::real(BigRational::zero())
    }
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl One for GaussRat {
    fn one() -> Self {
        Self::real(BigRational::one())
    }
}

impl Ring for GaussRat {
    fn div_exact(&self, rhs: &Self) -> Option<Self> {
        Some(self.clone() * rhs.inv()?)
    }

    fn from_int(n: i64) -> Self {
        Self::real(BigRational::from_int(n))
    }
}

impl Field for GaussRat {
    fn inv(&self) -> Option<Self> {
        let n = self.norm_sqr();
        if n.is_zero() {
            return None;
        }
        Some(GaussRat {
            re: &self.re / &n,
            im: -(&self.im / &n),
        })
    }
}

impl From<BigRational> for GaussRat {
    fn from(re: BigRational) -> Self {
        Self::real(re)
    }
}

impl fmt::Display for GaussRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_zero() {
            write!(f, "{}", self.re)
        } else if self.re.is_zero() {
            write!(f, "{}*I", self.im)
        } else if self.im.is_negative() {
            write!(f, "({} - {}*I)", self.re, -self.im.clone())
        } else {
            write!(f, "({} + {}*I)", self.re, self.im)
        }
    }
}
