//! Numeric layer: scalars with directed rounding, intervals, complex boxes.
//!
//! Purpose
//! - Give the root isolator and the path tracker one arithmetic interface
//!   that runs on hardware doubles first and on `BigFloat` when 53 bits stop
//!   certifying.
//!
//! Why this design
//! - Generic code over `Real` keeps a single implementation of every
//!   certified step; the precision ladder lives in the callers.
//! - Enclosures are rectangular (`CBox`): cheap to multiply and good enough
//!   for Rouché bounds on short tubes.
//!
//! References
//! - R. E. Moore, *Interval Analysis* (1966), outward rounding.
//! - J. van der Hoeven, "Reliable homotopy continuation" (2011).

mod bigfloat;
mod interval;
mod real;

pub use bigfloat::BigFloat;
pub use interval::{CBox, CPoint, Interval};
pub use real::{next_down, next_up, rmax, rmin, Real, Round};
