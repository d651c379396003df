//! Text form of bivariate polynomials: rational constants, the imaginary
//! unit `I` (or `i`), `x`, `y`, `+ - * /`, `^` (or `**`) with non-negative integer exponents, parentheses
//! and implicit multiplication (`2x^2y`, `(x+y)(x-y)`).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use std::str::FromStr;

use super::bivariate::BiPoly;
use super::gauss::GaussRat;
use super::ring::Field;
use crate::error::{Result, ZvkError};

impl FromStr for BiPoly {
    type Err = ZvkError;

    fn from_str(s: &str) -> Result<Self> {
        let mut p = Parser {
            src: s.as_bytes(),
            pos: 0,
        };
        let out = p.expr()?;
        p.skip_ws();
        if p.pos != p.src.len() {
            return Err(ZvkError::parse(p.pos, "unexpected trailing input"));
        }
        Ok(out)
    }
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn skip_ws(&mut self) {
        while self.src.get(self.pos).is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.src.get(self.pos).copied()
    }

    fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_pow(&mut self) -> bool {
        if self.eat(b'^') {
            return true;
        }
        if self.src[self.pos..].starts_with(b"**") {
            self.pos += 2;
            return true;
        }
        false
    }

    fn expr(&mut self) -> Result<BiPoly> {
        let mut acc = self.term()?;
        loop {
            if self.eat(b'+') {
                acc = acc + self.term()?;
            } else if self.eat(b'-') {
                acc = acc - self.term()?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn term(&mut self) -> Result<BiPoly> {
        let mut acc = self.unary()?;
        loop {
            match self.peek() {
                Some(b'*') if !self.src[self.pos..].starts_with(b"**") => {
                    self.pos += 1;
                    acc = acc * self.unary()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let at = self.pos;
                    let d = self.unary()?;
                    let inv = constant_value(&d)
                        .and_then(|c| c.inv())
                        .ok_or_else(|| ZvkError::parse(at, "divisor must be a non-zero constant"))?;
                    acc = acc * BiPoly::constant(inv);
                }
                Some(c) if c == b'(' || c == b'.' || c.is_ascii_digit() || is_symbol(c) => {
                    acc = acc * self.unary()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<BiPoly> {
        if self.eat(b'-') {
            return Ok(-self.unary()?);
        }
        if self.eat(b'+') {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<BiPoly> {
        let base = self.atom()?;
        self.skip_ws();
        if self.eat_pow() {
            let at = self.pos;
            let e = self.digits()?;
            let e: u32 = e
                .parse()
                .map_err(|_| ZvkError::parse(at, "exponent out of range"))?;
            return Ok(base.pow(e));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<BiPoly> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let inner = self.expr()?;
                if !self.eat(b')') {
                    return Err(ZvkError::parse(self.pos, "expected ')'"));
                }
                Ok(inner)
            }
            Some(b'x') => {
                self.pos += 1;
                Ok(BiPoly::x())
            }
            Some(b'y') => {
                self.pos += 1;
                Ok(BiPoly::y())
            }
            Some(b'i' | b'I') => {
                self.pos += 1;
                Ok(BiPoly::i())
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => Ok(BiPoly::constant(self.number()?)),
            Some(c) => Err(ZvkError::parse(
                self.pos,
                format!("unexpected character '{}'", c as char),
            )),
            None => Err(ZvkError::parse(self.pos, "unexpected end of input")),
        }
    }

    fn digits(&mut self) -> Result<&str> {
        self.skip_ws();
        let start = self.pos;
        while self.src.get(self.pos).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(ZvkError::parse(start, "expected digits"));
        }
        std::str::from_utf8(&self.src[start..self.pos])
            .map_err(|_| ZvkError::parse(start, "invalid utf-8"))
    }

    /// Decimal literal `123`, `1.25`, `.5` as an exact rational.
    fn number(&mut self) -> Result<BigRational> {
        let start = self.pos;
        let int_part = if self.src.get(self.pos) == Some(&b'.') {
            String::new()
        } else {
            self.digits()?.to_string()
        };
        let mut frac_part = String::new();
        if self.src.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            frac_part = self.digits()?.to_string();
        }
        let digits = format!("{int_part}{frac_part}");
        let num = BigInt::from_str(&digits).map_err(|_| ZvkError::parse(start, "bad number"))?;
        let den = num_traits::pow(BigInt::from(10), frac_part.len());
        Ok(BigRational::new(num, den))
    }
}

fn is_symbol(c: u8) -> bool {
    matches!(c, b'x' | b'y' | b'i' | b'I')
}

fn constant_value(p: &BiPoly) -> Option<GaussRat> {
    if p.is_zero() {
        return Some(GaussRat::zero());
    }
    if p.degree_y() == 0 && p.degree_x() == 0 {
        return Some(p.y_coeffs()[0].coeff(0));
    }
    None
}
