//! Curated surface for callers (UNSTABLE).
//!
//! Important
//! - Convenience re-exports for the CLI, benches and experiments. Breaking
//!   changes are allowed when they improve the pipeline.

// Pipeline entry points
pub use crate::monodromy::{
    braid_in_segment, discriminant_points, fiber_at, fundamental_group, generic_position,
    group_summary, Fiber, GroupSummary,
};
// Exact algebra
pub use crate::poly::{rat, ratio, BiPoly, GaussRat, QPoly, UPoly, XPoly};
// Root isolation
pub use crate::algebraic::{isolate_roots, AlgebraicPoint};
// Path network
pub use crate::network::{segments, PathNetwork, Segment};
// Continuation and braids
pub use crate::braid::{braid_from_piecewise, BraidWord, Strand};
pub use crate::tracker::follow_strand;
// Groups
pub use crate::group::{simplify, FreeWord, Presentation};
// Configuration and errors
pub use crate::cfg::{GroupOptions, ZvkCfg};
pub use crate::error::{Result, ZvkError};
