//! Tietze simplification of finite presentations.

use super::free::{generator, letter, FreeWord};
use super::presentation::Presentation;
use std::collections::HashSet;
use tracing::trace;

/// Simplify `p` by Tietze transformations.
///
/// Repeats until nothing applies: cyclic reduction, removal of empty and
/// duplicate relators, elimination of a generator that occurs exactly once
/// in some relator (shortest such relator first), and shortening a relator by
/// more than half of a rotation of another one.
pub fn simplify(p: &Presentation) -> Presentation {
    let mut ngens = p.ngens();
    let mut rels = tidy(p.relators().to_vec());
    loop {
        if let Some((ri, g)) = find_elimination(&rels) {
            let image = solve_for(&rels[ri], g);
            trace!(generator = g, relator = ri, "eliminating generator");
            rels.remove(ri);
            let index: Vec<Option<usize>> = (0..ngens)
                .map(|i| match i.cmp(&g) {
                    std::cmp::Ordering::Less => Some(i),
                    std::cmp::Ordering::Equal => None,
                    std::cmp::Ordering::Greater => Some(i - 1),
                })
                .collect();
            rels = tidy(
                rels.iter()
                    .map(|r| r.substitute(g, &image).renumbered(&index))
                    .collect(),
            );
            ngens -= 1;
            continue;
        }
        if let Some((ri, shorter)) = find_shortening(&rels) {
            rels[ri] = shorter;
            rels = tidy(rels);
            continue;
        }
        break;
    }
    Presentation::new(ngens, rels)
}

/// Cyclically reduce, drop trivial relators and duplicates up to rotation
/// and inversion (first occurrence wins).
fn tidy(rels: Vec<FreeWord>) -> Vec<FreeWord> {
    let mut seen = HashSet::new();
    rels.into_iter()
        .map(|r| r.cyclically_reduced())
        .filter(|r| !r.is_empty())
        .filter(|r| seen.insert(r.canonical_relator()))
        .collect()
}

/// Relator index and generator to eliminate.
fn find_elimination(rels: &[FreeWord]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..rels.len()).collect();
    order.sort_by_key(|&i| rels[i].len());
    order.into_iter().find_map(|ri| {
        let r = &rels[ri];
        r.letters()
            .iter()
            .map(|&a| generator(a))
            .find(|&g| r.occurrences(g) == 1)
            .map(|g| (ri, g))
    })
}

/// From `r = 1` with `x_g` occurring once, the word equal to `x_g`.
fn solve_for(r: &FreeWord, g: usize) -> FreeWord {
    let w = r.letters();
    let pos = w.iter().position(|&a| generator(a) == g).unwrap_or(0);
    // Rotate to x_g^e · rest = 1, so x_g^e = rest⁻¹.
    let rest = FreeWord::new(w[pos + 1..].iter().chain(&w[..pos]).copied());
    if w[pos] == letter(g) {
        rest.inverse()
    } else {
        rest
    }
}

/// A relator that can be shortened using another, with its replacement.
fn find_shortening(rels: &[FreeWord]) -> Option<(usize, FreeWord)> {
    for (ri, r) in rels.iter().enumerate() {
        for (si, s) in rels.iter().enumerate() {
            if si == ri || s.len() > r.len() {
                continue;
            }
            if let Some(shorter) = shorten_with(r, s) {
                return Some((ri, shorter));
            }
        }
    }
    None
}

/// If a cyclic subword of `r` matches more than half of a rotation of `s` or
/// `s⁻¹`, replace it by the inverse of the remaining part.
fn shorten_with(r: &FreeWord, s: &FreeWord) -> Option<FreeWord> {
    let (rw, n) = (r.letters(), r.len());
    let m = s.len();
    if m == 0 || n == 0 {
        return None;
    }
    let inv = s.inverse();
    for base in [s.letters(), inv.letters()] {
        for k in 0..m {
            let rot: Vec<i32> = base[k..].iter().chain(&base[..k]).copied().collect();
            for start in 0..n {
                let len = (0..m.min(n))
                    .take_while(|&t| rw[(start + t) % n] == rot[t])
                    .count();
                if 2 * len <= m {
                    continue;
                }
                // rot = p·q = 1 with p matched, so p = q⁻¹.
                let q = FreeWord::new(rot[len..].iter().copied());
                let tail = (start + len..start + n).map(|t| rw[t % n]);
                let out = (&q.inverse() * &FreeWord::new(tail)).cyclically_reduced();
                if out.len() < n {
                    return Some(out);
                }
            }
        }
    }
    None
}
