//! Braid of a family of piecewise-linear strands.

use super::strand::Strand;
use super::word::BraidWord;
use num_complex::Complex64;
use std::cmp::Ordering;

/// Lexicographic `(re, im)` order.
fn lex(a: Complex64, b: Complex64) -> Ordering {
    a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im))
}

/// `1` if `a < b`, `-1` if `a > b`, else `0`.
fn sgn(a: f64, b: f64) -> i32 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => 1,
        Some(Ordering::Greater) => -1,
        _ => 0,
    }
}

/// Two strands (indices in start order) swapping their order within one
/// partition interval.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Crossing {
    t: f64,
    k: usize,
    j: usize,
    sign: i32,
}

impl Crossing {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.t
            .total_cmp(&other.t)
            .then(self.k.cmp(&other.k))
            .then(self.j.cmp(&other.j))
            .then(self.sign.cmp(&other.sign))
    }
}

/// Accumulator threaded through the crossings of one interval: the current
/// position (1-based) of every strand and the letters emitted so far.
#[derive(Clone, Debug)]
struct Sweep {
    pos: Vec<i64>,
    letters: Vec<i32>,
}

impl Sweep {
    fn new(n: usize) -> Self {
        Self {
            pos: (1..=n as i64).collect(),
            letters: Vec::new(),
        }
    }

    fn gap(&self, c: &Crossing) -> i64 {
        self.pos[c.j] - self.pos[c.k]
    }

    /// Emit the crossing with the smallest current gap, then swap the two
    /// strands' positions.
    fn take(mut self, pending: &mut Vec<Crossing>) -> Self {
        let best = (0..pending.len()).min_by(|&a, &b| {
            let (ca, cb) = (&pending[a], &pending[b]);
            self.gap(ca)
                .cmp(&self.gap(cb))
                .then(ca.k.cmp(&cb.k))
                .then(ca.j.cmp(&cb.j))
                .then(ca.sign.cmp(&cb.sign))
        });
        let Some(best) = best else {
            return self;
        };
        let c = pending.remove(best);
        let low = self.pos[c.k].min(self.pos[c.j]);
        if c.sign != 0 {
            self.letters.push(c.sign * low as i32);
        }
        self.pos.swap(c.k, c.j);
        self
    }

    /// Resolve a group of crossings sharing one time.
    fn resolve(self, group: &[Crossing]) -> Self {
        let mut pending = group.to_vec();
        (0..group.len()).fold(self, |acc, _| acc.take(&mut pending))
    }
}

/// The common refinement: `0`, every interior sample time, `1`.
fn common_partition(strands: &[Strand]) -> Vec<f64> {
    let mut times: Vec<f64> = strands
        .iter()
        .flat_map(|s| s.samples().iter().map(|(t, _)| *t))
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect();
    times.sort_by(f64::total_cmp);
    times.dedup();
    let mut out = Vec::with_capacity(times.len() + 2);
    out.push(0.0);
    out.extend(times);
    out.push(1.0);
    out
}

/// Crossings of straight motions `l1[i] → l2[i]`, strands in start order.
fn crossings(l1: &[Complex64], l2: &[Complex64]) -> Vec<Crossing> {
    let mut found = Vec::new();
    for j in 0..l1.len() {
        for k in 0..j {
            if lex(l2[j], l2[k]) != Ordering::Less {
                continue;
            }
            let den = l2[k].re - l1[k].re + l1[j].re - l2[j].re;
            let t = if den != 0.0 {
                (l1[j].re - l1[k].re) / den
            } else {
                0.5
            };
            let im_k = l1[k].im * (1.0 - t) + t * l2[k].im;
            let im_j = l1[j].im * (1.0 - t) + t * l2[j].im;
            found.push(Crossing {
                t,
                k,
                j,
                sign: sgn(im_k, im_j),
            });
        }
    }
    found.sort_by(Crossing::key_cmp);
    found
}

/// Letters contributed by the motion from positions `from` to `to`.
fn interval_letters(from: &[Complex64], to: &[Complex64]) -> Vec<i32> {
    let mut pairs: Vec<(Complex64, Complex64)> =
        from.iter().copied().zip(to.iter().copied()).collect();
    pairs.sort_by(|a, b| lex(a.0, b.0).then(lex(a.1, b.1)));
    let (l1, l2): (Vec<Complex64>, Vec<Complex64>) = pairs.into_iter().unzip();
    let found = crossings(&l1, &l2);
    found
        .chunk_by(|a, b| a.t == b.t)
        .fold(Sweep::new(l1.len()), Sweep::resolve)
        .letters
}

/// Braid realized by `strands` (one per root) moving over `t ∈ [0, 1]`.
///
/// All strands are resampled on the union of their breakpoints. Within each
/// interval, strands are sorted by start position and every pair whose order
/// is inverted at the end contributes a crossing at the time their real parts
/// meet, signed by which imaginary part is smaller there. Simultaneous
/// crossings are emitted smallest position gap first; a crossing with equal
/// imaginary parts is a collision and contributes no letter. The result is
/// deterministic in the input.
pub fn braid_from_piecewise(strands: &[Strand]) -> BraidWord {
    let n = strands.len();
    let times = common_partition(strands);
    let grid: Vec<Vec<Complex64>> = times
        .iter()
        .map(|&t| strands.iter().map(|s| s.at(t)).collect())
        .collect();
    let letters = grid
        .windows(2)
        .flat_map(|w| interval_letters(&w[0], &w[1]))
        .collect();
    BraidWord::new(n, letters)
}
