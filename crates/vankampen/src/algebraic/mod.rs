//! Algebraic points: certified complex roots of Gaussian-rational polynomials.
//!
//! Purpose
//! - Label the `d` sheets above every vertex, and the branch points, with a
//!   reproducible order that downstream stages can match against.
//!
//! Why this design
//! - An inclusion disc that provably holds exactly one root is enough to
//!   compare and order roots reliably; no symbolic algebraic-number arithmetic
//!   is needed for this pipeline.
//!
//! References
//! - O. Aberth, "Iteration methods for finding all zeros of a polynomial
//!   simultaneously", Math. Comp. 27 (1973).
//! - D. Bini, G. Fiorentino, "Design, analysis, and implementation of a
//!   multiprecision polynomial rootfinder", Numer. Algorithms 23 (2000).

mod isolate;
mod point;

pub use isolate::isolate_roots;
pub use point::{position_cmp, AlgebraicPoint};

#[cfg(test)]
mod tests;
