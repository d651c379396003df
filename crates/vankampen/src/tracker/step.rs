//! Certified predictor–corrector continuation at one working precision.

use super::homotopy::{Grid, Homotopy};
use super::TrackFailure;
use crate::braid::Strand;
use crate::numeric::{CPoint, Real, Round};
use num_complex::Complex64;
use tracing::trace;

const NEWTON_ITERS: usize = 6;

/// Largest power of two not above `x` (at least `2^-30`).
fn dyadic_floor(x: f64) -> f64 {
    if !(x > 0.0) {
        return 2f64.powi(-30);
    }
    2f64.powi(x.log2().floor().max(-30.0) as i32).min(0.5)
}

/// Radius `r` such that the tube holds exactly one root in every disc, via
/// `A0 + Σ_{k≥2} Ak r^k < A1 r`.
pub(crate) fn certify<R: Real>(grid: &Grid<R>, prec: u32) -> Option<R> {
    let zero = R::zero_with(prec);
    let col_sum = |k: usize, skip_first: bool| {
        grid.iter()
            .skip(usize::from(skip_first))
            .filter_map(|row| row.get(k))
            .fold(zero.clone(), |acc, b| acc.add_rnd(&b.mag_upper(), Round::Up))
    };
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    if cols < 2 {
        return None;
    }
    let a0 = col_sum(0, false);
    let lead = grid.first()?.get(1)?.mig_lower();
    let a1 = lead.sub_rnd(&col_sum(1, true), Round::Down);
    if a1.sign() <= 0 || !a0.finite() || !a1.finite() {
        return None;
    }
    let mut r = a0.add_rnd(&a0, Round::Up).div_rnd(&a1, Round::Up);
    if r.sign() == 0 {
        r = R::pow2(-(prec as i64), prec);
    }
    let mut lhs = a0;
    let mut rk = r.mul_rnd(&r, Round::Up);
    for k in 2..cols {
        lhs = lhs.add_rnd(&col_sum(k, false).mul_rnd(&rk, Round::Up), Round::Up);
        rk = rk.mul_rnd(&r, Round::Up);
    }
    let rhs = a1.mul_rnd(&r, Round::Down);
    (lhs.finite() && lhs < rhs).then_some(r)
}

/// Newton at fixed `t`; `None` when the derivative vanishes.
fn correct<R: Real>(hom: &Homotopy<R>, t: &R, mut y: CPoint<R>) -> Option<CPoint<R>> {
    let prec = hom.prec();
    let tol = R::pow2(4 - prec as i64, prec);
    let one = R::from_f64_with(1.0, prec);
    for _ in 0..NEWTON_ITERS {
        let (g, gy, _) = hom.eval(t, &y);
        let dy = g.div(&gy)?;
        y = y.sub(&dy);
        if !y.is_finite() {
            return None;
        }
        if dy.l1() <= tol.mul(&one.add(&y.l1())) {
            break;
        }
    }
    Some(y)
}

/// Track the root near `y0` from `t = 0` to `t = 1`.
pub(crate) fn track<R: Real>(
    hom: &Homotopy<R>,
    y0: Complex64,
    initial_step: f64,
    max_steps: usize,
) -> Result<Strand, TrackFailure> {
    let prec = hom.prec();
    let one = R::from_f64_with(1.0, prec);
    let min_step = R::pow2(8 - prec as i64, prec);
    let mut t = R::zero_with(prec);
    let mut y = correct(hom, &t, CPoint::from_complex64(y0, prec)).ok_or(TrackFailure::Singular)?;
    let mut h = R::from_f64_with(dyadic_floor(initial_step), prec);
    // The strand starts exactly at the given root so it matches the labels.
    let mut samples: Vec<(f64, Complex64)> = vec![(0.0, y0)];
    let (mut accepted, mut rejected) = (0usize, 0usize);

    while t < one {
        if accepted + rejected >= max_steps {
            return Err(TrackFailure::StepBudget);
        }
        if h < min_step {
            return Err(TrackFailure::StepTooSmall);
        }
        let remaining = one.sub(&t);
        let last = h >= remaining;
        let step = if last { remaining } else { h.clone() };
        let t1 = if last { one.clone() } else { t.add(&step) };

        let (_, gy, gt) = hom.eval(&t, &y);
        let predicted = gt
            .div(&gy)
            .map(|v| y.sub(&v.scale(&step)))
            .and_then(|p| correct(hom, &t1, p));
        let certified = predicted.and_then(|y1| {
            let delta = y1.sub(&y);
            certify(&hom.tube(&t, &step, &y, &delta), prec).map(|_| y1)
        });
        match certified {
            Some(y1) => {
                accepted += 1;
                t = t1;
                y = y1;
                push_sample(&mut samples, t.approx_f64(), y.to_complex64());
                h = h.add(&h);
            }
            None => {
                rejected += 1;
                h = h.mul(&R::from_f64_with(0.5, prec));
            }
        }
    }
    trace!(prec, accepted, rejected, "strand tracked");
    Ok(Strand::new(samples))
}

/// Append keeping `t` strictly increasing in `f64`; the newer sample wins a
/// collision, except against the start.
fn push_sample(samples: &mut Vec<(f64, Complex64)>, t: f64, y: Complex64) {
    match samples.last() {
        Some(&(last, _)) if t <= last => {
            if samples.len() > 1 {
                samples.pop();
                samples.push((t, y));
            }
        }
        _ => samples.push((t, y)),
    }
}
