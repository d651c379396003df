//! Strand continuation: certified tracking of one root along one segment.
//!
//! Purpose
//! - Follow a root of `f((1 − t)·x0 + t·x1, y)` from `t = 0` to `t = 1` and
//!   return a piecewise-linear strand whose tube contains the true path and
//!   no other root.
//!
//! Why this design
//! - Every accepted step is certified by Rouché's theorem on the tube around
//!   the linear interpolant, evaluated in outward-rounded interval arithmetic.
//! - Precision escalation is an explicit bounded loop: `f64` first, then
//!   `BigFloat` at doubling precision until `max_prec`, after which the
//!   caller gets `PrecisionExhausted`.
//!
//! References
//! - J. van der Hoeven, "Reliable homotopy continuation" (2011).
//! - M. Marco-Buzunáriz, M. Rodríguez, "SIROCCO: a library for certified
//!   polynomial root continuation" (2016).

mod homotopy;
mod step;

use crate::braid::Strand;
use crate::cfg::ZvkCfg;
use crate::error::{Result, ZvkError};
use crate::numeric::BigFloat;
use crate::poly::{BiPoly, GaussBiPoly, GaussRat};
use homotopy::Homotopy;
use num_complex::Complex64;
use std::fmt;
use tracing::debug;

/// Why one tracking attempt gave up; only drives precision escalation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrackFailure {
    /// `∂g/∂y` vanished at a sample.
    Singular,
    /// The step shrank below `2^(8 − prec)`.
    StepTooSmall,
    /// More than `max_steps` predictor–corrector steps.
    StepBudget,
}

impl fmt::Display for TrackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Singular => "singular derivative",
            Self::StepTooSmall => "step too small",
            Self::StepBudget => "step budget exhausted",
        };
        f.write_str(s)
    }
}

/// Track the root of `f(x0, y)` near `y0` while `x` moves linearly to `x1`.
pub fn follow_strand(
    f: &BiPoly,
    x0: Complex64,
    x1: Complex64,
    y0: Complex64,
    cfg: &ZvkCfg,
) -> Result<Strand> {
    let g = f.pullback_segment(
        &GaussRat::from_complex64(x0),
        &GaussRat::from_complex64(x1),
    );
    track_pullback(&g, y0, cfg)
}

/// Track on an already pulled-back `g(t, y)`, escalating precision.
pub(crate) fn track_pullback(g: &GaussBiPoly, y0: Complex64, cfg: &ZvkCfg) -> Result<Strand> {
    let mut prec = cfg.start_prec.max(53);
    while prec <= cfg.max_prec {
        let attempt = if prec == 53 {
            step::track(&Homotopy::<f64>::new(g, prec), y0, cfg.initial_step, cfg.max_steps)
        } else {
            step::track(
                &Homotopy::<BigFloat>::new(g, prec),
                y0,
                cfg.initial_step,
                cfg.max_steps,
            )
        };
        match attempt {
            Ok(strand) => return Ok(strand),
            Err(reason) => debug!(prec, %reason, "escalating continuation precision"),
        }
        prec *= 2;
    }
    Err(ZvkError::PrecisionExhausted {
        max_prec: cfg.max_prec,
    })
}

#[cfg(test)]
mod tests;
