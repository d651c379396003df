use std::fmt;
use std::ops::Mul;

/// Element of a free group in Tietze form: letter `a > 0` is `x_{a-1}`,
/// `-a` its inverse. Always freely reduced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FreeWord(Vec<i32>);

/// Tietze letter of generator `x_i`.
#[inline]
pub fn letter(i: usize) -> i32 {
    i as i32 + 1
}

/// Generator index of a Tietze letter.
#[inline]
pub fn generator(a: i32) -> usize {
    a.unsigned_abs() as usize - 1
}

fn free_reduce(letters: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut out: Vec<i32> = Vec::new();
    for a in letters {
        debug_assert!(a != 0, "zero is not a Tietze letter");
        if out.last() == Some(&-a) {
            out.pop();
        } else {
            out.push(a);
        }
    }
    out
}

impl FreeWord {
    pub fn new(letters: impl IntoIterator<Item = i32>) -> Self {
        Self(free_reduce(letters))
    }

    pub fn identity() -> Self {
        Self(Vec::new())
    }

    /// The generator `x_i`.
    pub fn gen(i: usize) -> Self {
        Self(vec![letter(i)])
    }

    /// `x_0 x_1 … x_{n-1}`.
    pub fn product_of_gens(range: std::ops::Range<usize>) -> Self {
        Self(range.map(letter).collect())
    }

    pub fn letters(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(|a| -a).collect())
    }

    /// Renumber `x_i ↦ x_{i + offset}`.
    pub fn shifted(&self, offset: usize) -> Self {
        let offset = offset as i32;
        Self(self.0.iter().map(|&a| a + a.signum() * offset).collect())
    }

    /// Strip letters cancelling across the ends (conjugation).
    pub fn cyclically_reduced(&self) -> Self {
        let w = &self.0;
        let (mut i, mut j) = (0, w.len());
        while j - i >= 2 && w[i] == -w[j - 1] {
            i += 1;
            j -= 1;
        }
        Self(w[i..j].to_vec())
    }

    /// Exponent sum of every generator `x_0 … x_{n-1}`.
    pub fn exponent_sums(&self, n: usize) -> Vec<i64> {
        let mut sums = vec![0i64; n];
        for &a in &self.0 {
            if let Some(s) = sums.get_mut(generator(a)) {
                *s += a.signum() as i64;
            }
        }
        sums
    }

    /// Number of occurrences of `x_i` (either sign).
    pub fn occurrences(&self, i: usize) -> usize {
        self.0.iter().filter(|&&a| generator(a) == i).count()
    }

    /// Replace every occurrence of `x_i` by `w` (and `x_i⁻¹` by `w⁻¹`).
    pub fn substitute(&self, i: usize, w: &FreeWord) -> Self {
        let inv = w.inverse();
        Self::new(self.0.iter().flat_map(|&a| {
            if generator(a) != i {
                vec![a]
            } else if a > 0 {
                w.0.clone()
            } else {
                inv.0.clone()
            }
        }))
    }

    /// Substitute many generators at once (`images[i]` is the image of `x_i`).
    pub fn map_gens(&self, images: &[FreeWord]) -> Self {
        Self::new(self.0.iter().flat_map(|&a| {
            let img = &images[generator(a)];
            if a > 0 {
                img.0.clone()
            } else {
                img.inverse().0
            }
        }))
    }

    /// Renumber generators through `index` (generators mapped to `None` must
    /// not occur).
    pub(crate) fn renumbered(&self, index: &[Option<usize>]) -> Self {
        Self(
            self.0
                .iter()
                .filter_map(|&a| index[generator(a)].map(|g| letter(g) * a.signum()))
                .collect(),
        )
    }

    /// Smallest rotation of the cyclically reduced word or of its inverse.
    /// Relators that agree up to rotation and inversion share this form.
    pub fn canonical_relator(&self) -> Self {
        let base = self.cyclically_reduced();
        let n = base.len();
        if n == 0 {
            return base;
        }
        let inv = base.inverse();
        (0..n)
            .flat_map(|k| {
                let rot = |w: &FreeWord| {
                    let mut v = w.0[k..].to_vec();
                    v.extend_from_slice(&w.0[..k]);
                    FreeWord(v)
                };
                [rot(&base), rot(&inv)]
            })
            .min()
            .unwrap_or(base)
    }
}

impl Mul for FreeWord {
    type Output = FreeWord;
    fn mul(self, rhs: FreeWord) -> FreeWord {
        FreeWord::new(self.0.into_iter().chain(rhs.0))
    }
}

impl Mul<&FreeWord> for &FreeWord {
    type Output = FreeWord;
    fn mul(self, rhs: &FreeWord) -> FreeWord {
        FreeWord::new(self.0.iter().chain(rhs.0.iter()).copied())
    }
}

impl fmt::Display for FreeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }
        let mut first = true;
        let mut k = 0;
        while k < self.0.len() {
            let a = self.0[k];
            let run = self.0[k..].iter().take_while(|&&b| b == a).count();
            if !first {
                write!(f, "*")?;
            }
            first = false;
            let exp = run as i64 * a.signum() as i64;
            if exp == 1 {
                write!(f, "x{}", generator(a))?;
            } else {
                write!(f, "x{}^{}", generator(a), exp)?;
            }
            k += run;
        }
        Ok(())
    }
}
