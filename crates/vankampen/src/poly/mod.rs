//! Exact polynomial algebra over ℚ and ℚ(i).
//!
//! Purpose
//! - Provide the symbolic half of the pipeline: discriminants, resultants,
//!   squarefree radicals, changes of variables, fiber specialization and the
//!   affine pullback used by the continuation tracker.
//!
//! Why this design
//! - One dense `UPoly<R>` generic over a small `Ring` trait; bivariate
//!   polynomials nest it (`ℚ(i)[x][y]`), so resultants in `y` reuse the
//!   univariate fraction-free code unchanged.
//!
//! References
//! - Code cross-refs: `algebraic::isolate_roots`, `tracker::follow_strand`,
//!   `monodromy::discriminant_points`

mod bivariate;
mod gauss;
mod parse;
mod resultant;
mod ring;
mod upoly;

pub use bivariate::{BiPoly, GaussBiPoly, QPoly, XPoly};
pub use gauss::GaussRat;
pub use resultant::{discriminant, resultant, sylvester};
pub use ring::{rat, rat_from_f64, ratio, Field, Ring};
pub use upoly::UPoly;

#[cfg(test)]
mod tests;
