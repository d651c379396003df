//! Resultants and discriminants over an integral domain.
//!
//! Fraction-free (Bareiss) elimination of the Sylvester matrix keeps every
//! intermediate entry in the coefficient ring, so the same code serves ℚ,
//! ℚ(i) and ℚ(i)[x] coefficients.

use num_traits::{One, Zero};

use super::ring::Ring;
use super::upoly::UPoly;

/// Sylvester matrix of `p` (degree m) and `q` (degree n), size `(m+n)²`.
pub fn sylvester<R: Ring>(p: &UPoly<R>, q: &UPoly<R>) -> Vec<Vec<R>> {
    let m = p.deg();
    let n = q.deg();
    let size = m + n;
    let mut rows = Vec::with_capacity(size);
    for r in 0..n {
        let mut row = vec![R::zero(); size];
        for k in 0..=m {
            row[r + k] = p.coeff(m - k);
        }
        rows.push(row);
    }
    for r in 0..m {
        let mut row = vec![R::zero(); size];
        for k in 0..=n {
            row[r + k] = q.coeff(n - k);
        }
        rows.push(row);
    }
    rows
}

/// `Res(p, q) = lc(p)^n · ∏ q(α)` over the roots `α` of `p`.
pub fn resultant<R: Ring>(p: &UPoly<R>, q: &UPoly<R>) -> R {
    let (Some(m), Some(n)) = (p.degree(), q.degree()) else {
        return R::zero();
    };
    match (m, n) {
        (0, 0) => R::one(),
        (0, _) => ring_pow(&p.lc(), n),
        (_, 0) => ring_pow(&q.lc(), m),
        _ => bareiss_det(sylvester(p, q)),
    }
}

/// `disc(p) = (−1)^{m(m−1)/2} · Res(p, p') / lc(p)`.
pub fn discriminant<R: Ring>(p: &UPoly<R>) -> R {
    let m = p.deg();
    if m == 0 {
        return R::one();
    }
    let res = resultant(p, &p.derivative());
    let res = if (m * (m - 1) / 2) % 2 == 1 { -res } else { res };
    let q = res.div_exact(&p.lc());
    debug_assert!(q.is_some(), "leading coefficient divides Res(p, p')");
    q.unwrap_or(res)
}

fn ring_pow<R: Ring>(a: &R, n: usize) -> R {
    (0..n).fold(R::one(), |acc, _| acc * a.clone())
}

/// Determinant by Bareiss' fraction-free elimination with row pivoting.
pub(crate) fn bareiss_det<R: Ring>(mut m: Vec<Vec<R>>) -> R {
    let n = m.len();
    if n == 0 {
        return R::one();
    }
    let mut negate = false;
    let mut prev = R::one();
    for k in 0..n - 1 {
        if m[k][k].is_zero() {
            let Some(piv) = (k + 1..n).find(|&i| !m[i][k].is_zero()) else {
                return R::zero();
            };
            m.swap(k, piv);
            negate = !negate;
        }
        for i in k + 1..n {
            for j in k + 1..n {
                let num = m[i][j].clone() * m[k][k].clone() - m[i][k].clone() * m[k][j].clone();
                let q = num.div_exact(&prev);
                debug_assert!(q.is_some(), "Bareiss quotients are exact");
                m[i][j] = q.unwrap_or_else(R::zero);
            }
            m[i][k] = R::zero();
        }
        prev = m[k][k].clone();
    }
    let det = m[n - 1][n - 1].clone();
    if negate {
        -det
    } else {
        det
    }
}
