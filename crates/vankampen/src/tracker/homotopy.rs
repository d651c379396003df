//! The pulled-back polynomial `g(t, y)` at working precision.

use crate::numeric::{CBox, CPoint, Interval, Real};
use crate::poly::GaussBiPoly;

/// Dense bivariate array indexed `[s-degree][z-degree]`.
pub(crate) type Grid<R> = Vec<Vec<CBox<R>>>;

/// `g(t, y) = Σ_j Σ_a c_{j,a} t^a y^j` with both midpoint and enclosure
/// coefficients.
pub(crate) struct Homotopy<R> {
    mid: Vec<Vec<CPoint<R>>>,
    boxes: Vec<Vec<CBox<R>>>,
    prec: u32,
}

impl<R: Real> Homotopy<R> {
    pub(crate) fn new(g: &GaussBiPoly, prec: u32) -> Self {
        let mid = g
            .coeffs()
            .iter()
            .map(|c| c.coeffs().iter().map(|q| CPoint::from_gauss(q, prec)).collect())
            .collect();
        let boxes = g
            .coeffs()
            .iter()
            .map(|c| c.coeffs().iter().map(|q| CBox::from_gauss(q, prec)).collect())
            .collect();
        Self { mid, boxes, prec }
    }

    pub(crate) fn prec(&self) -> u32 {
        self.prec
    }

    /// `(g, ∂g/∂y, ∂g/∂t)` at `(t, y)`.
    pub(crate) fn eval(&self, t: &R, y: &CPoint<R>) -> (CPoint<R>, CPoint<R>, CPoint<R>) {
        let zero = CPoint::zero(self.prec);
        let (mut g, mut gy, mut gt) = (zero.clone(), zero.clone(), zero.clone());
        for row in self.mid.iter().rev() {
            let (mut c, mut ct) = (zero.clone(), zero.clone());
            for a in row.iter().rev() {
                ct = ct.scale(t).add(&c);
                c = c.scale(t).add(a);
            }
            gy = gy.mul(y).add(&g);
            g = g.mul(y).add(&c);
            gt = gt.mul(y).add(&ct);
        }
        (g, gy, gt)
    }

    /// Enclosures of the coefficients of `G(s, z) = g(t + h·s, y + s·Δ + z)`.
    pub(crate) fn tube(&self, t: &R, h: &R, y: &CPoint<R>, delta: &CPoint<R>) -> Grid<R> {
        let real = |x: &R| CBox::new(Interval::point(x.clone()), Interval::zero(self.prec));
        let (tb, hb) = (real(t), real(h));
        let (yb, db) = (CBox::point(y), CBox::point(delta));
        let mut grid: Grid<R> = Vec::new();
        for row in self.boxes.iter().rev() {
            // c_j(t + h·s) as a polynomial in s.
            let mut col: Vec<CBox<R>> = Vec::new();
            for a in row.iter().rev() {
                let mut next = vec![CBox::zero(self.prec); col.len() + 1];
                for (i, ci) in col.iter().enumerate() {
                    next[i] = next[i].add(&ci.mul(&tb));
                    next[i + 1] = next[i + 1].add(&ci.mul(&hb));
                }
                next[0] = next[0].add(a);
                col = next;
            }
            grid = self.times_path(&grid, &yb, &db);
            if grid.is_empty() {
                grid = vec![vec![CBox::zero(self.prec)]];
            }
            if grid.len() < col.len() {
                let width = grid[0].len();
                grid.resize(col.len(), vec![CBox::zero(self.prec); width]);
            }
            for (i, ci) in col.into_iter().enumerate() {
                grid[i][0] = grid[i][0].add(&ci);
            }
        }
        grid
    }

    /// Multiply by `y + s·Δ + z`.
    fn times_path(&self, grid: &Grid<R>, y: &CBox<R>, delta: &CBox<R>) -> Grid<R> {
        if grid.is_empty() {
            return Vec::new();
        }
        let (rows, cols) = (grid.len(), grid[0].len());
        let mut out = vec![vec![CBox::zero(self.prec); cols + 1]; rows + 1];
        for (a, row) in grid.iter().enumerate() {
            for (k, v) in row.iter().enumerate() {
                out[a][k] = out[a][k].add(&v.mul(y));
                out[a + 1][k] = out[a + 1][k].add(&v.mul(delta));
                out[a][k + 1] = out[a][k + 1].add(v);
            }
        }
        out
    }
}
