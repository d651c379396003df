//! One segment of the path network: fibers, strands and the total braid.

use crate::algebraic::{isolate_roots, AlgebraicPoint};
use crate::braid::{braid_from_piecewise, BraidWord, Strand};
use crate::cfg::ZvkCfg;
use crate::error::{Result, ZvkError};
use crate::poly::{BiPoly, GaussRat};
use crate::tracker::track_pullback;
use num_complex::Complex64;
use tracing::debug;

/// Fiber of a curve above one basepoint, labeled in canonical order.
#[derive(Clone, Debug)]
pub struct Fiber {
    /// The basepoint as an exact dyadic Gaussian rational.
    pub base: GaussRat,
    pub roots: Vec<AlgebraicPoint>,
}

impl Fiber {
    pub fn base_approx(&self) -> Complex64 {
        self.base.to_complex64()
    }

    pub fn degree(&self) -> usize {
        self.roots.len()
    }
}

/// Roots of `f(x, y)` at `x = base`; the fiber must be squarefree of full
/// `y`-degree.
pub fn fiber_at(f: &BiPoly, base: Complex64, cfg: &ZvkCfg) -> Result<Fiber> {
    let exact = GaussRat::from_complex64(base);
    let p = f.specialize_x(&exact);
    let d = f.degree_y();
    let found = p.radical().degree().unwrap_or(0);
    if p.degree() != Some(d) || found != d {
        return Err(ZvkError::DegenerateFiber {
            vertex: format!("{base}"),
            expected: d,
            found,
        });
    }
    let roots = isolate_roots(&p, cfg)?;
    Ok(Fiber { base: exact, roots })
}

/// Total braid of `f` along the segment `x0 → x1`, relative to the canonical
/// labelings of both fibers.
pub fn braid_in_segment(f: &BiPoly, x0: Complex64, x1: Complex64, cfg: &ZvkCfg) -> Result<BraidWord> {
    let start = fiber_at(f, x0, cfg)?;
    let end = fiber_at(f, x1, cfg)?;
    segment_braid(f, &start, &end, cfg)
}

/// `initial · central · final` for precomputed fibers.
pub(crate) fn segment_braid(f: &BiPoly, start: &Fiber, end: &Fiber, cfg: &ZvkCfg) -> Result<BraidWord> {
    let g = f.pullback_segment(&start.base, &end.base);
    let strands = start
        .roots
        .iter()
        .map(|r| track_pullback(&g, r.approx(), cfg))
        .collect::<Result<Vec<Strand>>>()?;
    let central = braid_from_piecewise(&strands);

    let firsts: Vec<Complex64> = strands.iter().map(Strand::start).collect();
    let lasts: Vec<Complex64> = strands.iter().map(Strand::end).collect();
    let at_start = match_roots(&firsts, &start.roots, start.base_approx())?;
    let at_end = match_roots(&lasts, &end.roots, end.base_approx())?;

    let initial: Vec<Strand> = firsts
        .iter()
        .zip(&at_start)
        .map(|(&y, &k)| Strand::linear(start.roots[k].approx(), y))
        .collect();
    let last: Vec<Strand> = lasts
        .iter()
        .zip(&at_end)
        .map(|(&y, &k)| Strand::linear(y, end.roots[k].approx()))
        .collect();
    let braid = braid_from_piecewise(&initial) * central * braid_from_piecewise(&last);
    debug!(
        from = %start.base_approx(),
        to = %end.base_approx(),
        samples = strands.iter().map(|s| s.samples().len()).sum::<usize>(),
        letters = braid.len(),
        "segment braid"
    );
    Ok(braid)
}

/// Index of the nearest exact root for every approximate endpoint; an exact
/// root claimed twice means the fiber is too tight for the tracked precision.
pub(crate) fn match_roots(
    approx: &[Complex64],
    exact: &[AlgebraicPoint],
    vertex: Complex64,
) -> Result<Vec<usize>> {
    let mut used = vec![false; exact.len()];
    approx
        .iter()
        .map(|&y| {
            let nearest = exact
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.distance(y).total_cmp(&b.distance(y)))
                .map(|(k, _)| k);
            match nearest {
                Some(k) if !used[k] => {
                    used[k] = true;
                    Ok(k)
                }
                _ => Err(ZvkError::RootsTooClose {
                    vertex: format!("{vertex}"),
                }),
            }
        })
        .collect()
}
