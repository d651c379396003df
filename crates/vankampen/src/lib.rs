//! Fundamental groups of plane curve complements by braid monodromy.
//!
//! Pipeline: discriminant points of the projection `(x, y) ↦ x`
//! (`monodromy::discriminant_points`), a Voronoi path network around them
//! (`network::segments`), certified continuation of every fiber root along
//! every segment (`tracker::follow_strand`), braid extraction from the
//! resulting strands (`braid::braid_from_piecewise`) and assembly of the
//! Zariski–Van Kampen presentation (`monodromy::fundamental_group`).
//!
//! API Policy
//! - The crate is project-internal; `api` and `prelude` are convenience
//!   surfaces, not stability promises.

pub mod algebraic;
pub mod api;
pub mod braid;
pub mod cfg;
pub mod error;
pub mod group;
pub mod monodromy;
pub mod network;
pub mod numeric;
pub mod poly;
pub mod tracker;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algebraic::AlgebraicPoint;
pub use braid::{braid_from_piecewise, BraidWord, Strand};
pub use cfg::{GroupOptions, ZvkCfg};
pub use error::{Result, ZvkError};
pub use group::{FreeWord, Presentation};
pub use monodromy::{braid_in_segment, discriminant_points, fundamental_group};
pub use network::{segments, PathNetwork, Segment};
pub use poly::BiPoly;
pub use tracker::follow_strand;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::braid::{braid_from_piecewise, BraidWord, Strand};
    pub use crate::cfg::{GroupOptions, ZvkCfg};
    pub use crate::error::{Result, ZvkError};
    pub use crate::group::{simplify, FreeWord, Presentation};
    pub use crate::monodromy::{braid_in_segment, discriminant_points, fundamental_group};
    pub use crate::network::{segments, PathNetwork};
    pub use crate::poly::BiPoly;
    pub use num_complex::Complex64;
}
