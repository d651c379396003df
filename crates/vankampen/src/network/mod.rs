//! Path network: bounded Voronoi diagram around the branch points.
//!
//! Purpose
//! - Produce straight segments between basepoints such that no branch point
//!   lies on any segment, and every branch point is enclosed by a cycle.
//!
//! Why this design
//! - Voronoi edges are equidistant from their two nearest branch points, so
//!   travel along them never passes through the discriminant. Four frame
//!   points on the axes bound the diagram; only ridges with two finite
//!   endpoints are kept.
//! - The diagram is built as the dual of a Bowyer–Watson triangulation at
//!   double precision; coincident branch points are a known fragility.
//!
//! References
//! - A. Bowyer (1981), D. F. Watson (1981), incremental Delaunay.
//! - O. Zariski (1929), E. R. van Kampen (1933).

mod delaunay;
mod types;

pub use types::{PathNetwork, Segment};

use crate::cfg::ZvkCfg;
use nalgebra::Vector2;
use num_complex::Complex64;
use tracing::debug;

/// Bounded Voronoi segments around `points`.
///
/// With no branch points the network is a single basepoint at the origin.
pub fn segments(points: &[Complex64], cfg: &ZvkCfg) -> PathNetwork {
    if points.is_empty() {
        return PathNetwork::single(Complex64::new(0.0, 0.0));
    }
    let max_coord = points
        .iter()
        .map(|z| z.re.abs().max(z.im.abs()))
        .fold(0.0f64, f64::max);
    let frame = cfg.frame_scale * max_coord + cfg.frame_margin;
    let mut config: Vec<Vector2<f64>> = points.iter().map(|z| Vector2::new(z.re, z.im)).collect();
    config.extend([
        Vector2::new(frame, 0.0),
        Vector2::new(-frame, 0.0),
        Vector2::new(0.0, frame),
        Vector2::new(0.0, -frame),
    ]);
    let ridges = delaunay::finite_ridges(&config);

    let mut net = PathNetwork::default();
    for (a, b) in ridges {
        let from = vertex_id(&mut net.vertices, a, cfg.vertex_tol);
        let to = vertex_id(&mut net.vertices, b, cfg.vertex_tol);
        if from != to {
            net.segments.push(Segment::new(from, to));
        }
    }
    if net.vertices.is_empty() {
        return PathNetwork::single(Complex64::new(0.0, 0.0));
    }
    debug!(
        points = points.len(),
        vertices = net.vertices.len(),
        segments = net.segments.len(),
        "path network built"
    );
    net
}

/// Index of `p` among `vertices`, appending it if no vertex lies within `tol`.
fn vertex_id(vertices: &mut Vec<Complex64>, p: Vector2<f64>, tol: f64) -> usize {
    let z = Complex64::new(p.x, p.y);
    match vertices.iter().position(|v| (v - z).norm() < tol) {
        Some(i) => i,
        None => {
            vertices.push(z);
            vertices.len() - 1
        }
    }
}
