//! Coefficient rings for exact polynomial arithmetic.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Neg, Sub};

/// Commutative integral domain with exact division.
///
/// `Zero`/`One` bring `Add`/`Mul`; the remaining operators are required here.
pub trait Ring:
    Clone + PartialEq + fmt::Debug + Send + Sync + Zero + One + Neg<Output = Self> + Sub<Output = Self>
{
    /// Quotient `self / rhs` if `rhs` divides `self` exactly.
    fn div_exact(&self, rhs: &Self) -> Option<Self>;

    /// Image of an integer.
    fn from_int(n: i64) -> Self;
}

/// Ring in which every non-zero element is invertible.
pub trait Field: Ring {
    fn inv(&self) -> Option<Self>;
}

impl Ring for BigRational {
    fn div_exact(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self / rhs)
        }
    }

    fn from_int(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }
}

impl Field for BigRational {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

/// Shorthand for an integer-valued rational.
#[inline]
pub fn rat(n: i64) -> BigRational {
    BigRational::from_int(n)
}

/// `n / d` as a rational (`d != 0`).
#[inline]
pub fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Exact rational value of a finite `f64` (zero for non-finite input).
#[inline]
pub fn rat_from_f64(x: f64) -> BigRational {
    BigRational::from_float(x).unwrap_or_else(BigRational::zero)
}
