//! Bowyer–Watson Delaunay triangulation and its Voronoi dual.

use nalgebra::Vector2;
use std::collections::BTreeMap;

/// Triangle as indices into the point slice, counter-clockwise.
pub(crate) type Tri = [usize; 3];

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Whether `d` lies strictly inside the circumcircle of the CCW triangle
/// `a, b, c`.
fn in_circumcircle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    let (ad, bd, cd) = (a - d, b - d, c - d);
    let det = (ad.x * ad.x + ad.y * ad.y) * (bd.x * cd.y - cd.x * bd.y)
        - (bd.x * bd.x + bd.y * bd.y) * (ad.x * cd.y - cd.x * ad.y)
        + (cd.x * cd.x + cd.y * cd.y) * (ad.x * bd.y - bd.x * ad.y);
    det > 0.0
}

pub(crate) fn circumcenter(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Option<Vector2<f64>> {
    let d = 2.0 * cross(a, b, c);
    if !(d.abs() > 0.0) {
        return None;
    }
    let (ab, ac) = (b - a, c - a);
    let (ab2, ac2) = (ab.norm_squared(), ac.norm_squared());
    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;
    Some(a + Vector2::new(ux, uy))
}

fn ccw(points: &[Vector2<f64>], t: Tri) -> Tri {
    if cross(points[t[0]], points[t[1]], points[t[2]]) < 0.0 {
        [t[0], t[2], t[1]]
    } else {
        t
    }
}

/// Delaunay triangles of `points` (at least three, not all collinear).
pub(crate) fn triangulate(points: &[Vector2<f64>]) -> Vec<Tri> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let (mut lo, mut hi) = (points[0], points[0]);
    for p in points {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    let center = (lo + hi) * 0.5;
    let span = (hi - lo).max().max(1.0) * 64.0;
    let mut all = points.to_vec();
    all.push(center + Vector2::new(-2.0 * span, -span));
    all.push(center + Vector2::new(2.0 * span, -span));
    all.push(center + Vector2::new(0.0, 2.0 * span));
    let mut tris: Vec<Tri> = vec![[n, n + 1, n + 2]];

    for (i, &p) in points.iter().enumerate() {
        let (bad, keep): (Vec<Tri>, Vec<Tri>) = tris
            .into_iter()
            .partition(|t| in_circumcircle(all[t[0]], all[t[1]], all[t[2]], p));
        // Boundary of the cavity: edges of bad triangles not shared by two of them.
        let mut edges: BTreeMap<(usize, usize), (usize, usize, usize)> = BTreeMap::new();
        for t in &bad {
            for k in 0..3 {
                let (a, b) = (t[k], t[(k + 1) % 3]);
                let key = (a.min(b), a.max(b));
                edges.entry(key).or_insert((a, b, 0)).2 += 1;
            }
        }
        tris = keep;
        for (a, b, count) in edges.into_values() {
            if count == 1 {
                tris.push(ccw(&all, [a, b, i]));
            }
        }
    }
    tris.retain(|t| t.iter().all(|&v| v < n));
    tris
}

/// Finite Voronoi ridges: for every Delaunay edge shared by two triangles,
/// the pair of their circumcenters. Ridges come in edge order.
pub(crate) fn finite_ridges(points: &[Vector2<f64>]) -> Vec<(Vector2<f64>, Vector2<f64>)> {
    let tris = triangulate(points);
    let mut by_edge: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    for (ti, t) in tris.iter().enumerate() {
        for k in 0..3 {
            let (a, b) = (t[k], t[(k + 1) % 3]);
            by_edge.entry((a.min(b), a.max(b))).or_default().push(ti);
        }
    }
    let centers: Vec<Option<Vector2<f64>>> = tris
        .iter()
        .map(|t| circumcenter(points[t[0]], points[t[1]], points[t[2]]))
        .collect();
    by_edge
        .into_values()
        .filter(|owners| owners.len() == 2)
        .filter_map(|owners| Some((centers[owners[0]]?, centers[owners[1]]?)))
        .collect()
}
