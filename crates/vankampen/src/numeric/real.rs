//! Working-precision scalars with directed rounding.
//!
//! `f64` serves the 53-bit fast path; `BigFloat` everything above. Directed
//! modes only need to be *outward*: `Down` must never exceed the exact
//! result and `Up` must never fall below it.

use num_rational::BigRational;
use num_traits::ToPrimitive;
use std::fmt;

/// Rounding direction of a single operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Round {
    Down,
    Nearest,
    Up,
}

/// Scalar arithmetic at a fixed working precision.
pub trait Real: Clone + fmt::Debug + PartialOrd + Send + Sync {
    /// Working precision in bits.
    fn prec(&self) -> u32;
    fn zero_with(prec: u32) -> Self;
    fn from_f64_with(x: f64, prec: u32) -> Self;
    fn from_rational(q: &BigRational, prec: u32, rnd: Round) -> Self;
    /// `2^e` (exact).
    fn pow2(e: i64, prec: u32) -> Self;
    /// Nearest `f64` (saturating to ±∞/0 outside the double range).
    fn approx_f64(&self) -> f64;
    /// Exact value; `None` for non-finite doubles.
    fn to_rational(&self) -> Option<BigRational>;

    fn add_rnd(&self, rhs: &Self, rnd: Round) -> Self;
    fn sub_rnd(&self, rhs: &Self, rnd: Round) -> Self;
    fn mul_rnd(&self, rhs: &Self, rnd: Round) -> Self;
    /// Quotient; callers rule out a zero divisor.
    fn div_rnd(&self, rhs: &Self, rnd: Round) -> Self;
    fn negate(&self) -> Self;
    /// −1, 0 or 1.
    fn sign(&self) -> i32;
    fn finite(&self) -> bool;

    fn magnitude(&self) -> Self {
        if self.sign() < 0 {
            self.negate()
        } else {
            self.clone()
        }
    }

    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        self.add_rnd(rhs, Round::Nearest)
    }
    #[inline]
    fn sub(&self, rhs: &Self) -> Self {
        self.sub_rnd(rhs, Round::Nearest)
    }
    #[inline]
    fn mul(&self, rhs: &Self) -> Self {
        self.mul_rnd(rhs, Round::Nearest)
    }
    #[inline]
    fn div(&self, rhs: &Self) -> Self {
        self.div_rnd(rhs, Round::Nearest)
    }
}

/// Smaller of two values (the first on incomparable input).
#[inline]
pub fn rmin<R: Real>(a: R, b: R) -> R {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two values (the first on incomparable input).
#[inline]
pub fn rmax<R: Real>(a: R, b: R) -> R {
    if b > a {
        b
    } else {
        a
    }
}

/// Smallest double strictly above `x` (identity on NaN and +∞).
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Largest double strictly below `x`.
#[inline]
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

#[inline]
fn nudge(x: f64, rnd: Round) -> f64 {
    match rnd {
        Round::Nearest => x,
        Round::Down => next_down(x),
        Round::Up => next_up(x),
    }
}

impl Real for f64 {
    fn prec(&self) -> u32 {
        53
    }
    fn zero_with(_prec: u32) -> Self {
        0.0
    }
    fn from_f64_with(x: f64, _prec: u32) -> Self {
        x
    }
    fn from_rational(q: &BigRational, _prec: u32, rnd: Round) -> Self {
        nudge(q.to_f64().unwrap_or(f64::NAN), rnd)
    }
    fn pow2(e: i64, _prec: u32) -> Self {
        let e = e.clamp(-1100, 1100) as i32;
        2f64.powi(e / 2) * 2f64.powi(e - e / 2)
    }
    fn approx_f64(&self) -> f64 {
        *self
    }
    fn to_rational(&self) -> Option<BigRational> {
        BigRational::from_float(*self)
    }
    fn add_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        nudge(self + rhs, rnd)
    }
    fn sub_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        nudge(self - rhs, rnd)
    }
    fn mul_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        nudge(self * rhs, rnd)
    }
    fn div_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        nudge(self / rhs, rnd)
    }
    fn negate(&self) -> Self {
        -self
    }
    fn sign(&self) -> i32 {
        if *self > 0.0 {
            1
        } else if *self < 0.0 {
            -1
        } else {
            0
        }
    }
    fn finite(&self) -> bool {
        self.is_finite()
    }
}
