use crate::numeric::{BigFloat, Real, Round};
use crate::poly::GaussRat;
use num_complex::Complex64;
use num_rational::BigRational;
use std::cmp::Ordering;
use std::fmt;

/// A certified root of a squarefree polynomial: the disc of `radius` around
/// the exact dyadic `center` contains exactly one root, the `index`-th in
/// `(re, im)` order.
#[derive(Clone, Debug, PartialEq)]
pub struct AlgebraicPoint {
    center: GaussRat,
    approx: Complex64,
    radius: f64,
    index: usize,
}

impl AlgebraicPoint {
    pub(crate) fn new(center: GaussRat, radius: f64, index: usize) -> Self {
        let approx = Complex64::new(nearest_f64(&center.re), nearest_f64(&center.im));
        Self {
            center,
            approx,
            radius,
            index,
        }
    }

    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn center(&self) -> &GaussRat {
        &self.center
    }

    /// Center rounded to doubles.
    pub fn approx(&self) -> Complex64 {
        self.approx
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn distance(&self, z: Complex64) -> f64 {
        (self.approx - z).norm()
    }

    /// Whether `z` lies in the inclusion disc (decided exactly).
    pub fn contains(&self, z: Complex64) -> bool {
        let Some(r) = BigRational::from_float(self.radius) else {
            return false;
        };
        let d = GaussRat::from_complex64(z) - self.center.clone();
        d.norm_sqr() <= &r * &r
    }

    /// Canonical order: `(re, im)` of the rounded center, the order braid
    /// extraction sees; exact centers break ties.
    pub fn position_cmp(&self, other: &Self) -> Ordering {
        position_cmp(self.approx, other.approx)
            .then_with(|| self.center.re.cmp(&other.center.re))
            .then_with(|| self.center.im.cmp(&other.center.im))
    }
}

/// Correctly rounded double; a negative zero is folded to `+0.0` so equal
/// parts compare equal.
fn nearest_f64(q: &BigRational) -> f64 {
    BigFloat::from_rational(q, 53, Round::Nearest).approx_f64() + 0.0
}

/// Lexicographic `(re, im)` order on doubles (total, NaN last).
pub fn position_cmp(a: Complex64, b: Complex64) -> Ordering {
    a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im))
}

impl fmt::Display for AlgebraicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let z = self.approx;
        let sign = if z.im < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{:.12} {} {:.12}i (±{:.1e})",
            z.re,
            sign,
            z.im.abs(),
            self.radius
        )
    }
}
