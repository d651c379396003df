//! Group algebra: free words, finite presentations, Tietze simplification.
//!
//! Words use Tietze letters (signed, 1-based) so relators can be shifted
//! between vertex blocks by plain integer arithmetic.

mod free;
mod presentation;
mod tietze;

pub use free::{generator, letter, FreeWord};
pub use presentation::Presentation;
pub use tietze::simplify;
