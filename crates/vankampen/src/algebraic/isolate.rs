//! Certified complex root isolation (Aberth–Ehrlich plus inclusion discs).

use super::point::AlgebraicPoint;
use crate::cfg::ZvkCfg;
use crate::error::{Result, ZvkError};
use crate::numeric::{next_up, BigFloat, CBox, CPoint, Real, Round};
use crate::poly::{GaussRat, UPoly};
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::f64::consts::TAU;
use tracing::{debug, trace};

/// Isolate every complex root of `p`, which must be squarefree.
///
/// Roots come back in canonical `(re, im)` order with `index` set to the
/// position in that order. Doubles provide the starting approximations;
/// certification runs in `BigFloat` from twice the starting precision,
/// doubling up to `cfg.max_prec`, so centers lie far inside one double
/// rounding of their roots. Real roots of a real polynomial get a center
/// on the real axis whenever that can be certified.
pub fn isolate_roots(p: &UPoly<GaussRat>, cfg: &ZvkCfg) -> Result<Vec<AlgebraicPoint>> {
    let n = match p.degree() {
        None => return Err(ZvkError::ZeroPolynomial),
        Some(0) => return Ok(Vec::new()),
        Some(n) => n,
    };
    let guesses = initial_guesses(p);
    let (mut approx, _) = attempt::<f64>(p, &guesses, 53, cfg.root_max_iter);
    let mut prec = cfg.start_prec.max(53) * 2;
    while prec <= cfg.max_prec {
        let start: Vec<Complex64> = if approx.iter().all(|z| z.is_finite()) {
            approx
        } else {
            guesses.clone()
        };
        let (next, discs) = attempt::<BigFloat>(p, &start, prec, cfg.root_max_iter);
        if let Some(discs) = discs {
            let real = p.coeffs().iter().all(|c| c.im.is_zero());
            return Ok(finish(if real { snap_real(discs) } else { discs }));
        }
        debug!(prec, degree = n, "escalating root isolation");
        approx = next;
        prec *= 2;
    }
    Err(ZvkError::RootIsolation { degree: n })
}

/// Exact center and certified radius of one root.
type Disc = (GaussRat, f64);

/// Aberth at one precision; returns the centers and, if certified, the
/// inclusion discs.
fn attempt<R: Real>(
    p: &UPoly<GaussRat>,
    start: &[Complex64],
    prec: u32,
    max_iter: usize,
) -> (Vec<Complex64>, Option<Vec<Disc>>) {
    let coeffs: Vec<CPoint<R>> = p
        .coeffs()
        .iter()
        .map(|c| CPoint::from_gauss(c, prec))
        .collect();
    let z0 = start
        .iter()
        .map(|z| CPoint::from_complex64(*z, prec))
        .collect();
    let z = aberth(&coeffs, z0, prec, max_iter);
    let discs = inclusion_discs(p, &z, prec);
    let centers = z.iter().map(CPoint::to_complex64).collect();
    (centers, discs)
}

/// Points on a circle enclosing every root (Fujiwara's bound).
fn initial_guesses(p: &UPoly<GaussRat>) -> Vec<Complex64> {
    let n = p.deg();
    let lc = p.lc().to_complex64().norm();
    let bound = (0..n)
        .map(|i| {
            let ratio = p.coeff(i).to_complex64().norm() / lc;
            ratio.powf(1.0 / (n - i) as f64)
        })
        .fold(0.0f64, f64::max);
    let radius = if bound > 0.0 && bound.is_finite() {
        2.0 * bound
    } else {
        1.0
    };
    (0..n)
        .map(|k| Complex64::from_polar(radius, TAU * k as f64 / n as f64 + 0.4))
        .collect()
}

fn horner<R: Real>(coeffs: &[CPoint<R>], z: &CPoint<R>) -> (CPoint<R>, CPoint<R>) {
    let prec = z.re.prec();
    let mut p = CPoint::zero(prec);
    let mut dp = CPoint::zero(prec);
    for c in coeffs.iter().rev() {
        dp = dp.mul(z).add(&p);
        p = p.mul(z).add(c);
    }
    (p, dp)
}

fn aberth<R: Real>(
    coeffs: &[CPoint<R>],
    mut z: Vec<CPoint<R>>,
    prec: u32,
    max_iter: usize,
) -> Vec<CPoint<R>> {
    let one = CPoint::new(R::from_f64_with(1.0, prec), R::zero_with(prec));
    let tol = R::pow2(6 - prec as i64, prec);
    for iter in 0..max_iter {
        let mut converged = true;
        for i in 0..z.len() {
            let (p, dp) = horner(coeffs, &z[i]);
            if p.re.sign() == 0 && p.im.sign() == 0 {
                continue;
            }
            let Some(newton) = p.div(&dp) else {
                converged = false;
                continue;
            };
            let repulsion = z
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .filter_map(|(_, zj)| one.div(&z[i].sub(zj)))
                .fold(CPoint::zero(prec), |acc, q| acc.add(&q));
            let Some(w) = newton.div(&one.sub(&newton.mul(&repulsion))) else {
                converged = false;
                continue;
            };
            let scale = R::from_f64_with(1.0, prec).add(&z[i].l1());
            if !(w.l1() <= tol.mul(&scale)) {
                converged = false;
            }
            z[i] = z[i].sub(&w);
        }
        if converged {
            trace!(iter, prec, "aberth converged");
            break;
        }
    }
    z
}

/// Radii `n·|p(z_i)| / |lc · ∏_{j≠i}(z_i − z_j)|`, if the discs are pairwise
/// disjoint.
fn inclusion_discs<R: Real>(p: &UPoly<GaussRat>, z: &[CPoint<R>], prec: u32) -> Option<Vec<Disc>> {
    let coeffs: Vec<CBox<R>> = p
        .coeffs()
        .iter()
        .map(|c| CBox::from_gauss(c, prec))
        .collect();
    let lc = coeffs.last()?.clone();
    let n = R::from_f64_with(z.len() as f64, prec);
    let boxes: Vec<CBox<R>> = z.iter().map(CBox::point).collect();
    let mut radii = Vec::with_capacity(z.len());
    for (i, zi) in boxes.iter().enumerate() {
        if !zi.is_finite() {
            return None;
        }
        let value = coeffs
            .iter()
            .rev()
            .fold(CBox::zero(prec), |acc, c| acc.mul(zi).add(c));
        let den = boxes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(lc.clone(), |acc, (_, zj)| acc.mul(&zi.sub(zj)));
        let den_low = den.mig_lower();
        if den_low.sign() <= 0 || !value.is_finite() || !den.is_finite() {
            return None;
        }
        let r = n
            .mul_rnd(&value.mag_upper(), Round::Up)
            .div_rnd(&den_low, Round::Up);
        radii.push(r);
    }
    for i in 0..boxes.len() {
        for j in i + 1..boxes.len() {
            let gap = boxes[i].sub(&boxes[j]).mig_lower();
            if !(gap > radii[i].add_rnd(&radii[j], Round::Up)) {
                return None;
            }
        }
    }
    radii
        .iter()
        .zip(z)
        .map(|(r, zi)| {
            let center = GaussRat::new(zi.re.to_rational()?, zi.im.to_rational()?);
            Some((center, next_up(r.approx_f64())))
        })
        .collect()
}

/// Moves the centers of real roots of a real polynomial onto the axis.
///
/// A disc crossing the axis is widened to the disc around `(re, 0)` that
/// contains it. If the widened disc misses every other disc it still holds
/// exactly one root, and a disc symmetric about the axis holding a single
/// root of a real polynomial holds a real root.
fn snap_real(mut discs: Vec<Disc>) -> Vec<Disc> {
    for i in 0..discs.len() {
        let Some(wide) = widen_to_axis(&discs[i]) else {
            continue;
        };
        let clear = discs
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .all(|(_, other)| disjoint(&wide, other));
        if clear {
            discs[i] = wide;
        }
    }
    discs
}

fn widen_to_axis((center, radius): &Disc) -> Option<Disc> {
    let r = BigRational::from_float(*radius)?;
    let im = center.im.abs();
    if im.is_zero() || im >= r {
        return None;
    }
    let need = r + im;
    let wide = next_up(need.to_f64()?);
    (BigRational::from_float(wide)? >= need).then(|| (GaussRat::real(center.re.clone()), wide))
}

/// Exact test that two closed discs do not meet.
fn disjoint(a: &Disc, b: &Disc) -> bool {
    let (Some(ra), Some(rb)) = (BigRational::from_float(a.1), BigRational::from_float(b.1)) else {
        return false;
    };
    let sum = ra + rb;
    (a.0.clone() - b.0.clone()).norm_sqr() > &sum * &sum
}

fn finish(discs: Vec<Disc>) -> Vec<AlgebraicPoint> {
    let mut points: Vec<AlgebraicPoint> = discs
        .into_iter()
        .map(|(center, radius)| AlgebraicPoint::new(center, radius, 0))
        .collect();
    points.sort_by(|a, b| a.position_cmp(b));
    points
        .into_iter()
        .enumerate()
        .map(|(index, p)| p.with_index(index))
        .collect()
}
