//! Braid monodromy and the Zariski–Van Kampen presentation.
//!
//! Purpose
//! - Turn a plane curve `f(x, y) = 0` into a presentation of the fundamental
//!   group of its complement: one generator per (basepoint, fiber root), one
//!   relator per (segment, root) identifying the braid-transported generator
//!   at the start vertex with the matching generator at the end vertex.
//!
//! Why this design
//! - Segments are independent pure computations. They fan out over the rayon
//!   pool and are joined before relator assembly, so the presentation does
//!   not depend on scheduling.
//! - Fibers are isolated once per vertex, so every segment meeting a vertex
//!   sees the same labeling.
//! - Nearest-root matching is fail-fast: a reused exact root surfaces as
//!   `RootsTooClose` instead of triggering a silent precision change.
//!
//! References
//! - O. Zariski (1929), E. R. van Kampen (1933).
//! - M. Marco-Buzunáriz, M. Rodríguez, "SIROCCO: a library for certified
//!   polynomial root continuation" (2016).

mod segment;

pub use segment::{braid_in_segment, fiber_at, Fiber};

use crate::algebraic::{isolate_roots, AlgebraicPoint};
use crate::braid::BraidWord;
use crate::cfg::{GroupOptions, ZvkCfg};
use crate::error::{Result, ZvkError};
use crate::group::{simplify, FreeWord, Presentation};
use crate::network::{segments, PathNetwork};
use crate::poly::BiPoly;
use num_complex::Complex64;
use num_traits::Zero;
use rayon::prelude::*;
use tracing::{debug, info};

/// Branch points of the projection `(x, y) ↦ x`: the roots of the radical of
/// `Res_y(disc_y f, f)`, in canonical `(re, im)` order.
///
/// `f` should have a constant leading coefficient in `y`; otherwise vertical
/// asymptotes are missed.
pub fn discriminant_points(f: &BiPoly, cfg: &ZvkCfg) -> Result<Vec<AlgebraicPoint>> {
    if f.is_zero() {
        return Err(ZvkError::ZeroPolynomial);
    }
    let disc = BiPoly::from_x_poly(f.discriminant_y());
    let eliminated = disc.resultant_y(f);
    if eliminated.is_zero() {
        return Err(ZvkError::ZeroPolynomial);
    }
    let rad = eliminated.radical();
    let points = isolate_roots(&rad, cfg)?;
    debug!(degree = rad.deg(), points = points.len(), "discriminant isolated");
    Ok(points)
}

/// Squarefree `f` with constant leading coefficient in `y` (and, projectively,
/// total degree equal to the `y`-degree), reached by repeated `x ↦ x + y`.
pub fn generic_position(f: &BiPoly, projective: bool, cfg: &ZvkCfg) -> Result<BiPoly> {
    if f.is_zero() {
        return Err(ZvkError::ZeroPolynomial);
    }
    let mut g = f.radical();
    if g.total_degree() == 0 {
        return Err(ZvkError::NotBivariate);
    }
    let mut shifts = 0;
    while !g.has_constant_lc_y() || (projective && g.total_degree() > g.degree_y()) {
        if shifts == cfg.max_shifts {
            return Err(ZvkError::GenericPosition { attempts: shifts });
        }
        g = g.shift_x_by_y();
        shifts += 1;
        debug!(shifts, poly = %g, "changed variables x -> x + y");
    }
    Ok(g)
}

/// A presentation together with the curve and network it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSummary {
    /// The squarefree polynomial in generic position actually tracked.
    pub generic: BiPoly,
    pub branch_points: usize,
    pub vertices: usize,
    pub segments: usize,
    pub presentation: Presentation,
}

impl GroupSummary {
    /// Number of strands, the `y`-degree of the generic polynomial.
    pub fn degree(&self) -> usize {
        self.generic.degree_y()
    }
}

/// Fundamental group of the complement of `f = 0` in `ℂ²`, or with
/// `opts.projective` of its projective closure in `ℙ²`.
///
/// Unsimplified, the presentation has exactly `d · |vertices|` generators,
/// each a meridian of the curve.
pub fn fundamental_group(f: &BiPoly, opts: GroupOptions, cfg: &ZvkCfg) -> Result<Presentation> {
    group_summary(f, opts, cfg).map(|s| s.presentation)
}

/// [`fundamental_group`] with the intermediate counts kept.
pub fn group_summary(f: &BiPoly, opts: GroupOptions, cfg: &ZvkCfg) -> Result<GroupSummary> {
    let g = generic_position(f, opts.projective, cfg)?;
    let d = g.degree_y();
    let disc = discriminant_points(&g, cfg)?;
    let branch: Vec<Complex64> = disc.iter().map(AlgebraicPoint::approx).collect();
    let net = segments(&branch, cfg);

    let fibers = fan_out(&net.vertices, cfg.parallel, |&v| fiber_at(&g, v, cfg))?;
    let braids = fan_out(&net.segments, cfg.parallel, |s| {
        segment::segment_braid(&g, &fibers[s.from], &fibers[s.to], cfg)
    })?;

    let p = assemble(d, &net, &braids, opts.projective);
    info!(
        degree = d,
        branch_points = disc.len(),
        vertices = net.vertex_count(),
        segments = net.segments.len(),
        generators = p.ngens(),
        relators = p.relators().len(),
        "braid monodromy assembled"
    );
    Ok(GroupSummary {
        branch_points: disc.len(),
        vertices: net.vertex_count(),
        segments: net.segments.len(),
        presentation: if opts.simplified { simplify(&p) } else { p },
        generic: g,
    })
}

/// Relators `(x_k)·b⁻¹` shifted to the start vertex, times the inverse of
/// `x_k` at the end vertex.
fn assemble(d: usize, net: &PathNetwork, braids: &[BraidWord], projective: bool) -> Presentation {
    let mut p = Presentation::free(d * net.vertex_count());
    if projective {
        p.push_relator(FreeWord::product_of_gens(0..d));
    }
    for (seg, b) in net.segments.iter().zip(braids) {
        let back = b.inverse();
        for k in 0..d {
            let moved = back.act_on(&FreeWord::gen(k)).shifted(d * seg.from);
            let target = FreeWord::gen(d * seg.to + k);
            p.push_relator(moved * target.inverse());
        }
    }
    p
}

fn fan_out<T, U, F>(items: &[T], parallel: bool, f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Result<U> + Sync + Send,
{
    if parallel {
        items.par_iter().map(&f).collect()
    } else {
        items.iter().map(&f).collect()
    }
}

#[cfg(test)]
mod tests;
