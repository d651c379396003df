//! Error taxonomy for the braid-monodromy pipeline.
//!
//! Only `RootsTooClose` is expected in normal use; the remaining variants mark
//! precondition violations or exhausted numeric budgets.

use thiserror::Error;

/// Library-wide error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZvkError {
    /// The leading coefficient in `y` could not be made constant (and, for the
    /// projective variant, the total degree bounded by the `y`-degree).
    #[error("generic position not reached after {attempts} changes of variables")]
    GenericPosition { attempts: usize },

    /// Strand continuation kept failing up to the precision cap.
    #[error("continuation failed at every precision up to {max_prec} bits")]
    PrecisionExhausted { max_prec: u32 },

    /// Two approximate strand endpoints matched the same exact root.
    #[error("different roots are too close (vertex {vertex})")]
    RootsTooClose { vertex: String },

    /// The fiber above a chosen vertex is not squarefree of the expected degree.
    #[error("fiber above {vertex} has {found} distinct roots, expected {expected}")]
    DegenerateFiber {
        vertex: String,
        expected: usize,
        found: usize,
    },

    /// Complex roots could not be separated within the precision cap.
    #[error("could not isolate the roots of a degree {degree} polynomial")]
    RootIsolation { degree: usize },

    /// Polynomial text could not be parsed.
    #[error("parse error at byte {pos}: {msg}")]
    Parse { pos: usize, msg: String },

    #[error("the zero polynomial defines no curve")]
    ZeroPolynomial,

    /// A non-zero constant: the curve is empty.
    #[error("polynomial involves neither x nor y")]
    NotBivariate,
}

impl ZvkError {
    pub(crate) fn parse(pos: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            pos,
            msg: msg.into(),
        }
    }
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, ZvkError>;
