use crate::group::{letter, FreeWord};
use std::fmt;
use std::ops::Mul;

/// Braid on `strands` strands as signed 1-based Artin generators:
/// `i` is `σ_i` (strands at positions `i`, `i+1` cross positively).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BraidWord {
    strands: usize,
    letters: Vec<i32>,
}

impl BraidWord {
    pub fn new(strands: usize, letters: Vec<i32>) -> Self {
        debug_assert!(letters
            .iter()
            .all(|&s| s != 0 && (s.unsigned_abs() as usize) < strands));
        Self { strands, letters }
    }

    pub fn identity(strands: usize) -> Self {
        Self::new(strands, Vec::new())
    }

    pub fn strands(&self) -> usize {
        self.strands
    }

    pub fn letters(&self) -> &[i32] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.strands, self.letters.iter().rev().map(|s| -s).collect())
    }

    /// Cancel adjacent `σ_i σ_i⁻¹` pairs.
    pub fn reduced(&self) -> Self {
        let mut out: Vec<i32> = Vec::with_capacity(self.letters.len());
        for &s in &self.letters {
            if out.last() == Some(&-s) {
                out.pop();
            } else {
                out.push(s);
            }
        }
        Self::new(self.strands, out)
    }

    /// `p[k]` is the final position of the strand starting at position `k`.
    pub fn permutation(&self) -> Vec<usize> {
        let mut at: Vec<usize> = (0..self.strands).collect();
        for &s in &self.letters {
            let i = s.unsigned_abs() as usize;
            at.swap(i - 1, i);
        }
        let mut p = vec![0; self.strands];
        for (pos, &strand) in at.iter().enumerate() {
            p[strand] = pos;
        }
        p
    }

    /// Right (Artin) action on the free group `⟨x_0 … x_{n-1}⟩`:
    /// `σ_i` sends `x_{i-1} ↦ x_{i-1} x_i x_{i-1}⁻¹` and `x_i ↦ x_{i-1}`
    /// (0-based generators), letters applied left to right.
    pub fn act_on(&self, w: &FreeWord) -> FreeWord {
        let ngens = w
            .letters()
            .iter()
            .map(|a| a.unsigned_abs() as usize)
            .max()
            .unwrap_or(0)
            .max(self.strands);
        self.letters.iter().fold(w.clone(), |acc, &s| {
            let i = s.unsigned_abs() as usize;
            let (a, b) = (letter(i - 1), letter(i));
            let mut images: Vec<FreeWord> = (0..ngens).map(FreeWord::gen).collect();
            if s > 0 {
                images[i - 1] = FreeWord::new([a, b, -a]);
                images[i] = FreeWord::new([a]);
            } else {
                images[i - 1] = FreeWord::new([b]);
                images[i] = FreeWord::new([-b, a, b]);
            }
            acc.map_gens(&images)
        })
    }
}

impl Mul for BraidWord {
    type Output = BraidWord;
    fn mul(mut self, rhs: BraidWord) -> BraidWord {
        debug_assert_eq!(self.strands, rhs.strands);
        self.letters.extend(rhs.letters);
        self
    }
}

impl Mul<&BraidWord> for &BraidWord {
    type Output = BraidWord;
    fn mul(self, rhs: &BraidWord) -> BraidWord {
        self.clone() * rhs.clone()
    }
}

impl fmt::Display for BraidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.letters.is_empty() {
            return write!(f, "1");
        }
        let parts: Vec<String> = self
            .letters
            .iter()
            .map(|&s| {
                if s > 0 {
                    format!("s{s}")
                } else {
                    format!("s{}^-1", -s)
                }
            })
            .collect();
        write!(f, "{}", parts.join("*"))
    }
}
