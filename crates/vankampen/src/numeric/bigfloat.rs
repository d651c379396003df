//! Binary floating point with a `BigInt` mantissa.
//!
//! Value is `mant · 2^exp`, with `|mant| < 2^prec` after every rounded
//! operation. There is no NaN or infinity; division by zero yields zero and
//! callers are expected to rule it out.

use super::real::{Real, Round};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct BigFloat {
    mant: BigInt,
    exp: i64,
    prec: u32,
}

/// Operands whose top bit lies further than this below the other operand's
/// rounding position are replaced by a sticky stand-in.
const STICKY_GUARD: i64 = 4;

impl BigFloat {
    pub fn zero(prec: u32) -> Self {
        Self {
            mant: BigInt::zero(),
            exp: 0,
            prec,
        }
    }

    /// Exact integer; may carry more than `prec` bits until the next rounding.
    pub fn from_bigint(n: BigInt, prec: u32) -> Self {
        Self {
            mant: n,
            exp: 0,
            prec,
        }
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mant
    }

    pub fn exponent(&self) -> i64 {
        self.exp
    }

    /// Position just above the most significant bit (`|x| < 2^top`).
    fn top(&self) -> i64 {
        self.mant.bits() as i64 + self.exp
    }

    /// Same value at another working precision (rounded if it shrinks).
    pub fn with_prec(&self, prec: u32, rnd: Round) -> Self {
        round(self.mant.clone(), self.exp, prec, rnd)
    }

    fn exact_sum(a: &Self, b: &Self) -> (BigInt, i64) {
        let e = a.exp.min(b.exp);
        let ma = &a.mant << (a.exp - e) as usize;
        let mb = &b.mant << (b.exp - e) as usize;
        (ma + mb, e)
    }

    /// Stand-in for `b` when it is far below `a`'s rounding position: a
    /// single bit of the same sign that keeps every rounding mode exact.
    fn sticky_for(a: &Self, b: &Self, prec: u32) -> Option<Self> {
        if a.mant.is_zero() || b.mant.is_zero() {
            return None;
        }
        let floor = a.top() - prec as i64 - STICKY_GUARD;
        if b.top() < floor {
            let unit = if b.mant.is_negative() {
                -BigInt::one()
            } else {
                BigInt::one()
            };
            Some(Self {
                mant: unit,
                exp: floor - 1,
                prec,
            })
        } else {
            None
        }
    }

    fn add_impl(&self, rhs: &Self, rnd: Round) -> Self {
        let prec = self.prec.max(rhs.prec);
        if rhs.mant.is_zero() {
            return self.with_prec(prec, rnd);
        }
        if self.mant.is_zero() {
            return rhs.with_prec(prec, rnd);
        }
        let (a, b) = if self.top() >= rhs.top() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let stand_in = Self::sticky_for(a, b, prec);
        let b = stand_in.as_ref().unwrap_or(b);
        let (m, e) = Self::exact_sum(a, b);
        round(m, e, prec, rnd)
    }
}

/// Round `mant · 2^exp` to `prec` bits.
fn round(mant: BigInt, exp: i64, prec: u32, rnd: Round) -> BigFloat {
    if mant.is_zero() {
        return BigFloat::zero(prec);
    }
    let bits = mant.bits();
    if bits <= prec as u64 {
        return BigFloat { mant, exp, prec };
    }
    let shift = bits - prec as u64;
    let (sign, mag) = mant.into_parts();
    let q: BigUint = &mag >> shift;
    let rem = mag - (&q << shift);
    let bump = match rnd {
        Round::Down => sign == Sign::Minus && !rem.is_zero(),
        Round::Up => sign == Sign::Plus && !rem.is_zero(),
        Round::Nearest => rem >= (BigUint::one() << (shift - 1)),
    };
    let q = if bump { q + 1u32 } else { q };
    // A carry may add one bit; it is a power of two and costs no accuracy.
    BigFloat {
        mant: BigInt::from_biguint(sign, q),
        exp: exp + shift as i64,
        prec,
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (sa, sb) = (self.sign(), other.sign());
        if sa != sb {
            return Some(sa.cmp(&sb));
        }
        if sa == 0 {
            return Some(Ordering::Equal);
        }
        let by_magnitude = match self.top().cmp(&other.top()) {
            Ordering::Equal => {
                let (d, _) = Self::exact_sum(&self.magnitude(), &other.magnitude().negate());
                d.cmp(&BigInt::zero())
            }
            ord => ord,
        };
        Some(if sa > 0 {
            by_magnitude
        } else {
            by_magnitude.reverse()
        })
    }
}

impl Real for BigFloat {
    fn prec(&self) -> u32 {
        self.prec
    }

    fn zero_with(prec: u32) -> Self {
        Self::zero(prec)
    }

    fn from_f64_with(x: f64, prec: u32) -> Self {
        if x == 0.0 || !x.is_finite() {
            return Self::zero(prec);
        }
        let (m, e, s) = num_traits::Float::integer_decode(x);
        let mant = BigInt::from(m) * BigInt::from(s);
        round(mant, e as i64, prec, Round::Nearest)
    }

    fn from_rational(q: &BigRational, prec: u32, rnd: Round) -> Self {
        let num = Self::from_bigint(q.numer().clone(), prec);
        let den = Self::from_bigint(q.denom().clone(), prec);
        num.div_rnd(&den, rnd)
    }

    fn pow2(e: i64, prec: u32) -> Self {
        Self {
            mant: BigInt::one(),
            exp: e,
            prec,
        }
    }

    fn approx_f64(&self) -> f64 {
        if self.mant.is_zero() {
            return 0.0;
        }
        let bits = self.mant.bits() as i64;
        let drop = (bits - 64).max(0);
        let head = (&self.mant >> drop as usize).to_f64().unwrap_or(0.0);
        let e = self.exp + drop;
        if e > 2200 {
            return head.signum() * f64::INFINITY;
        }
        if e < -2200 {
            return 0.0;
        }
        let half = (e / 2) as i32;
        head * 2f64.powi(half) * 2f64.powi(e as i32 - half)
    }

    fn to_rational(&self) -> Option<BigRational> {
        let value = if self.exp >= 0 {
            BigRational::from_integer(&self.mant << self.exp as usize)
        } else {
            BigRational::new(self.mant.clone(), BigInt::one() << (-self.exp) as usize)
        };
        Some(value)
    }

    fn add_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        self.add_impl(rhs, rnd)
    }

    fn sub_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        self.add_impl(&rhs.negate(), rnd)
    }

    fn mul_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        let prec = self.prec.max(rhs.prec);
        round(&self.mant * &rhs.mant, self.exp + rhs.exp, prec, rnd)
    }

    fn div_rnd(&self, rhs: &Self, rnd: Round) -> Self {
        let prec = self.prec.max(rhs.prec);
        if self.mant.is_zero() || rhs.mant.is_zero() {
            return Self::zero(prec);
        }
        let negative = self.mant.is_negative() != rhs.mant.is_negative();
        let na = self.mant.magnitude();
        let nb = rhs.mant.magnitude();
        // Scale so the integer quotient carries at least prec + 2 bits.
        let shift = (prec as i64 + 2 + nb.bits() as i64 - na.bits() as i64).max(0);
        let (q, r) = (na << shift as usize).div_rem(nb);
        // A sticky low bit keeps inexact quotients off the rounding ties.
        let (q, extra) = if r.is_zero() {
            (q, 0)
        } else {
            ((q << 1usize) + 1u32, 1)
        };
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        round(
            BigInt::from_biguint(sign, q),
            self.exp - rhs.exp - shift - extra,
            prec,
            rnd,
        )
    }

    fn negate(&self) -> Self {
        Self {
            mant: -&self.mant,
            exp: self.exp,
            prec: self.prec,
        }
    }

    fn sign(&self) -> i32 {
        match self.mant.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    fn finite(&self) -> bool {
        true
    }
}
