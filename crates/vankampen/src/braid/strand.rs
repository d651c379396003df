use num_complex::Complex64;

/// Piecewise-linear path of one root over `t ∈ [0, 1]`.
///
/// Samples have strictly increasing `t`, starting at `0` and ending at `1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Strand {
    samples: Vec<(f64, Complex64)>,
}

impl Strand {
    pub fn new(samples: Vec<(f64, Complex64)>) -> Self {
        debug_assert!(samples.len() >= 2, "a strand needs both endpoints");
        debug_assert!(samples.windows(2).all(|w| w[0].0 < w[1].0));
        Self { samples }
    }

    /// Straight strand from `a` at `t = 0` to `b` at `t = 1`.
    pub fn linear(a: Complex64, b: Complex64) -> Self {
        Self::new(vec![(0.0, a), (1.0, b)])
    }

    pub fn samples(&self) -> &[(f64, Complex64)] {
        &self.samples
    }

    pub fn start(&self) -> Complex64 {
        self.samples[0].1
    }

    pub fn end(&self) -> Complex64 {
        self.samples[self.samples.len() - 1].1
    }

    /// Position at `t`; exact at sample times, linear in between.
    pub fn at(&self, t: f64) -> Complex64 {
        let s = &self.samples;
        let i = s.partition_point(|(ti, _)| *ti < t);
        if i == 0 {
            return s[0].1;
        }
        if i == s.len() {
            return s[s.len() - 1].1;
        }
        let (t1, z1) = s[i];
        if t1 == t {
            return z1;
        }
        let (t0, z0) = s[i - 1];
        z0 + (z1 - z0) * ((t - t0) / (t1 - t0))
    }

    /// Same path traversed backwards.
    pub fn reversed(&self) -> Self {
        Self::new(
            self.samples
                .iter()
                .rev()
                .map(|&(t, z)| (1.0 - t, z))
                .collect(),
        )
    }
}
