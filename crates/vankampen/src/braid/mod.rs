//! Braid words and their extraction from tracked strands.
//!
//! Purpose
//! - Turn the motion of the `d` roots along one segment into an element of
//!   the braid group, and let braids act on free groups for relator assembly.
//!
//! Why this design
//! - Generators refer to positions in lexicographic `(re, im)` order, the
//!   same order in which roots are labeled at every vertex.
//! - Tie resolution for simultaneous crossings is a fold over an explicit
//!   `(positions, letters)` accumulator, reset per partition interval.
//!
//! References
//! - E. Artin, "Theorie der Zöpfe" (1925), free-group action.
//! - J. I. Cogolludo-Agustín, "Braid monodromy of algebraic curves" (2011).

mod extract;
mod strand;
mod word;

pub use extract::braid_from_piecewise;
pub use strand::Strand;
pub use word::BraidWord;

#[cfg(test)]
mod tests;
