use num_complex::Complex64;
use std::fmt;

/// Directed edge of the path network, as indices into `PathNetwork::vertices`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
}

impl Segment {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Straight-line segments that avoid every branch point, with deduplicated
/// vertices kept in first-appearance order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathNetwork {
    pub vertices: Vec<Complex64>,
    pub segments: Vec<Segment>,
}

impl PathNetwork {
    /// Degenerate network: one basepoint, no segments.
    pub fn single(base: Complex64) -> Self {
        Self {
            vertices: vec![base],
            segments: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn endpoints(&self, s: Segment) -> (Complex64, Complex64) {
        (self.vertices[s.from], self.vertices[s.to])
    }

    /// Whether every vertex is reachable from vertex 0.
    pub fn is_connected(&self) -> bool {
        let n = self.vertices.len();
        if n == 0 {
            return true;
        }
        let mut adj = vec![Vec::new(); n];
        for s in &self.segments {
            adj[s.from].push(s.to);
            adj[s.to].push(s.from);
        }
        let mut seen = vec![false; n];
        let mut stack = vec![0];
        seen[0] = true;
        while let Some(v) = stack.pop() {
            for &w in &adj[v] {
                if !seen[w] {
                    seen[w] = true;
                    stack.push(w);
                }
            }
        }
        seen.into_iter().all(|s| s)
    }
}

impl fmt::Display for PathNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} segments",
            self.vertices.len(),
            self.segments.len()
        )?;
        for s in &self.segments {
            let (a, b) = self.endpoints(*s);
            writeln!(f, "  v{} ({a}) -> v{} ({b})", s.from, s.to)?;
        }
        Ok(())
    }
}
