use super::free::FreeWord;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

/// Finitely presented group `< x_0 … x_{n-1} | relators >`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    ngens: usize,
    relators: Vec<FreeWord>,
}

impl Presentation {
    pub fn new(ngens: usize, relators: Vec<FreeWord>) -> Self {
        debug_assert!(relators
            .iter()
            .all(|r| r.letters().iter().all(|&a| (a.unsigned_abs() as usize) <= ngens)));
        Self { ngens, relators }
    }

    /// Free group of rank `n`.
    pub fn free(n: usize) -> Self {
        Self::new(n, Vec::new())
    }

    pub fn ngens(&self) -> usize {
        self.ngens
    }

    pub fn relators(&self) -> &[FreeWord] {
        &self.relators
    }

    pub fn push_relator(&mut self, r: FreeWord) {
        self.relators.push(r);
    }

    /// Abelian invariants of the group: torsion coefficients `d_1 | d_2 | …`
    /// (each `> 1`), then one `0` per free `ℤ` factor. Coefficients beyond
    /// `u64` saturate.
    pub fn abelian_invariants(&self) -> Vec<u64> {
        let m: Vec<Vec<BigInt>> = self
            .relators
            .iter()
            .map(|r| {
                r.exponent_sums(self.ngens)
                    .into_iter()
                    .map(BigInt::from)
                    .collect()
            })
            .collect();
        let diag = smith_diagonal(m, self.ngens);
        let rank = diag.len();
        let mut out: Vec<u64> = diag
            .into_iter()
            .filter(|d| !d.is_one())
            .map(|d| d.to_u64().unwrap_or(u64::MAX))
            .collect();
        out.extend(std::iter::repeat(0).take(self.ngens - rank));
        out
    }
}

/// Nonzero diagonal of the Smith normal form of `m` (`cols` columns), in
/// divisibility order.
pub(crate) fn smith_diagonal(mut m: Vec<Vec<BigInt>>, cols: usize) -> Vec<BigInt> {
    let rows = m.len();
    let mut diag = Vec::new();
    let mut t = 0;
    while t < rows.min(cols) {
        // Smallest nonzero entry of the trailing block becomes the pivot.
        let Some((pi, pj)) = min_entry(&m, t, cols) else {
            break;
        };
        m.swap(t, pi);
        for row in m.iter_mut() {
            row.swap(t, pj);
        }
        loop {
            let mut clean = true;
            for i in t + 1..rows {
                if m[i][t].is_zero() {
                    continue;
                }
                let q = m[i][t].div_floor(&m[t][t]);
                for j in t..cols {
                    let v = &q * &m[t][j];
                    m[i][j] -= v;
                }
                if !m[i][t].is_zero() {
                    clean = false;
                }
            }
            for j in t + 1..cols {
                if m[t][j].is_zero() {
                    continue;
                }
                let q = m[t][j].div_floor(&m[t][t]);
                for i in t..rows {
                    let v = &q * &m[i][t];
                    m[i][j] -= v;
                }
                if !m[t][j].is_zero() {
                    clean = false;
                }
            }
            if clean {
                // Enforce divisibility by folding an offending row into row t.
                let offending = (t + 1..rows).find(|&i| {
                    (t + 1..cols).any(|j| !m[i][j].mod_floor(&m[t][t]).is_zero())
                });
                match offending {
                    Some(i) => {
                        for j in t..cols {
                            let v = m[i][j].clone();
                            m[t][j] += v;
                        }
                    }
                    None => break,
                }
            }
            // Re-pivot on the smallest nonzero entry of row t / column t.
            let (pi, pj) = min_in_cross(&m, t, cols);
            m.swap(t, pi);
            for row in m.iter_mut() {
                row.swap(t, pj);
            }
        }
        diag.push(m[t][t].abs());
        t += 1;
    }
    diag
}

fn min_entry(m: &[Vec<BigInt>], t: usize, cols: usize) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (i, row) in m.iter().enumerate().skip(t) {
        for (j, v) in row.iter().enumerate().take(cols).skip(t) {
            if v.is_zero() {
                continue;
            }
            if best.map_or(true, |(bi, bj)| v.abs() < m[bi][bj].abs()) {
                best = Some((i, j));
            }
        }
    }
    best
}

fn min_in_cross(m: &[Vec<BigInt>], t: usize, cols: usize) -> (usize, usize) {
    let mut best = (t, t);
    let better = |v: &BigInt, b: (usize, usize)| !v.is_zero() && (m[b.0][b.1].is_zero() || v.abs() < m[b.0][b.1].abs());
    for i in t + 1..m.len() {
        if better(&m[i][t], best) {
            best = (i, t);
        }
    }
    for j in t + 1..cols {
        if better(&m[t][j], best) {
            best = (t, j);
        }
    }
    best
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens: Vec<String> = (0..self.ngens).map(|i| format!("x{i}")).collect();
        let rels: Vec<String> = self.relators.iter().map(|r| r.to_string()).collect();
        write!(f, "< {} | {} >", gens.join(", "), rels.join(", "))
    }
}
