//! Dense univariate polynomials over a `Ring`.
//!
//! Invariants
//! - `coeffs[k]` is the coefficient of `X^k`.
//! - No trailing zero coefficients; the zero polynomial has no coefficients.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::ring::{Field, Ring};

#[derive(Clone, Debug, PartialEq)]
pub struct UPoly<R> {
    coeffs: Vec<R>,
}

impl<R: Ring> UPoly<R> {
    /// Build from low-to-high coefficients (trailing zeros are dropped).
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    #[inline]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// `c · X^k`.
    pub fn monomial(c: R, k: usize) -> Self {
        let mut coeffs = vec![R::zero(); k + 1];
        coeffs[k] = c;
        Self::new(coeffs)
    }

    /// The indeterminate `X`.
    #[inline]
    pub fn var() -> Self {
        Self::monomial(R::one(), 1)
    }

    #[inline]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    #[inline]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Degree, `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Degree with the zero polynomial mapped to 0.
    #[inline]
    pub fn deg(&self) -> usize {
        self.degree().unwrap_or(0)
    }

    /// Coefficient of `X^k` (zero beyond the degree).
    pub fn coeff(&self, k: usize) -> R {
        self.coeffs.get(k).cloned().unwrap_or_else(R::zero)
    }

    /// Leading coefficient (zero for the zero polynomial).
    pub fn lc(&self) -> R {
        self.coeffs.last().cloned().unwrap_or_else(R::zero)
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Horner evaluation.
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Horner evaluation at a polynomial argument (composition `self ∘ p`).
    pub fn compose(&self, p: &UPoly<R>) -> UPoly<R> {
        self.coeffs.iter().rev().fold(UPoly::zero(), |acc, c| {
            acc * p.clone() + UPoly::constant(c.clone())
        })
    }

    /// Coefficient-wise ring change.
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> UPoly<S> {
        UPoly::new(self.coeffs.iter().map(f).collect())
    }

    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, c)| c.clone() * R::from_int(k as i64))
                .collect(),
        )
    }

    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|a| a.clone() * c.clone()).collect())
    }

    pub fn pow(&self, n: u32) -> Self {
        (0..n).fold(UPoly::one(), |acc, _| acc * self.clone())
    }

    /// Multiply by `X^k`.
    fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![R::zero(); k];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { coeffs }
    }

    /// Exact quotient when `d` divides `self` in `R[X]`.
    pub fn div_exact_poly(&self, d: &Self) -> Option<Self> {
        let dd = d.degree()?;
        let lc = d.lc();
        let mut rem = self.clone();
        let mut quot = vec![R::zero(); self.deg().saturating_sub(dd) + 1];
        while let Some(rd) = rem.degree() {
            if rd < dd {
                return None;
            }
            let q = rem.lc().div_exact(&lc)?;
            rem = rem - d.scale(&q).shift(rd - dd);
            // Leading term must cancel exactly.
            if rem.degree() == Some(rd) {
                return None;
            }
            quot[rd - dd] = q;
        }
        Some(Self::new(quot))
    }

    /// Pseudo-remainder: `lc(d)^e · self mod d` for some `e ≥ 0` (fraction free).
    pub fn pseudo_rem(&self, d: &Self) -> Self {
        let Some(dd) = d.degree() else {
            return self.clone();
        };
        let lc = d.lc();
        let mut rem = self.clone();
        while let Some(rd) = rem.degree() {
            if rd < dd {
                break;
            }
            let top = rem.lc();
            rem = rem.scale(&lc) - d.scale(&top).shift(rd - dd);
        }
        rem
    }
}

impl<R: Field> UPoly<R> {
    /// Euclidean division `self = q·d + r` with `deg r < deg d`.
    pub fn div_rem(&self, d: &Self) -> (Self, Self) {
        let Some(dd) = d.degree() else {
            return (UPoly::zero(), self.clone());
        };
        let Some(inv) = d.lc().inv() else {
            return (UPoly::zero(), self.clone());
        };
        let mut rem = self.clone();
        let mut quot = vec![R::zero(); self.deg().saturating_sub(dd) + 1];
        while let Some(rd) = rem.degree() {
            if rd < dd {
                break;
            }
            let q = rem.lc() * inv.clone();
            rem = rem - d.scale(&q).shift(rd - dd);
            quot[rd - dd] = q;
        }
        (Self::new(quot), rem)
    }

    /// Scale to leading coefficient one (zero stays zero).
    pub fn monic(&self) -> Self {
        match self.lc().inv() {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        }
    }

    /// Monic greatest common divisor.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.monic();
        let mut b = other.monic();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r.monic();
        }
        a.monic()
    }

    /// Squarefree part `p / gcd(p, p')`, monic.
    pub fn radical(&self) -> Self {
        if self.is_constant() {
            return self.monic();
        }
        let g = self.gcd(&self.derivative());
        self.div_rem(&g).0.monic()
    }
}

impl<R: Ring> Zero for UPoly<R> {
    fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }
    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }
}

impl<R: Ring> One for UPoly<R> {
    fn one() -> Self {
        Self::constant(R::one())
    }
}

impl<R: Ring> Add for UPoly<R> {
    type Output = UPoly<R>;
    fn add(self, rhs: UPoly<R>) -> UPoly<R> {
        let (mut long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self.coeffs, rhs.coeffs)
        } else {
            (rhs.coeffs, self.coeffs)
        };
        for (a, b) in long.iter_mut().zip(short) {
            *a = a.clone() + b;
        }
        UPoly::new(long)
    }
}

impl<R: Ring> Neg for UPoly<R> {
    type Output = UPoly<R>;
    fn neg(self) -> UPoly<R> {
        UPoly {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl<R: Ring> Sub for UPoly<R> {
    type Output = UPoly<R>;
    fn sub(self, rhs: UPoly<R>) -> UPoly<R> {
        self + (-rhs)
    }
}

impl<R: Ring> Mul for UPoly<R> {
    type Output = UPoly<R>;
    fn mul(self, rhs: UPoly<R>) -> UPoly<R> {
        if self.is_zero() || rhs.is_zero() {
            return UPoly::zero();
        }
        let mut out = vec![R::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].clone() + a.clone() * b.clone();
            }
        }
        UPoly::new(out)
    }
}

impl<R: Ring> Ring for UPoly<R> {
    fn div_exact(&self, rhs: &Self) -> Option<Self> {
        if self.is_zero() {
            return if rhs.is_zero() { None } else { Some(UPoly::zero()) };
        }
        self.div_exact_poly(rhs)
    }

    fn from_int(n: i64) -> Self {
        Self::constant(R::from_int(n))
    }
}

impl<R: Ring + fmt::Display> UPoly<R> {
    /// Render with the given variable name, highest degree first.
    pub fn fmt_in(&self, var: &str) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut parts = Vec::new();
        for (k, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let mono = match k {
                0 => String::new(),
                1 => var.to_string(),
                _ => format!("{var}^{k}"),
            };
            parts.push(if mono.is_empty() {
                format!("{c}")
            } else if c.is_one() {
                mono
            } else {
                format!("({c})*{mono}")
            });
        }
        parts.join(" + ")
    }
}

impl<R: Ring + fmt::Display> fmt::Display for UPoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt_in("X"))
    }
}
