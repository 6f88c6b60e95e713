//! Error types for the rail fence crate.

use thiserror::Error;

/// Result type alias for fallible rail fence operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by validated constructors and the puzzle state machine.
///
/// The codec functions themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two rails requested for a validated rail count
    #[error("rail count must be at least 2, got {0}")]
    TooFewRails(usize),

    /// Rail count outside the range a mission offers
    #[error("rail count {rails} is outside the allowed range {min}..={max}")]
    RailsOutOfRange { rails: usize, min: usize, max: usize },

    /// Mission ciphertext does not decrypt to its solution
    #[error("mission ciphertext does not decrypt to the solution with {rails} rails")]
    InconsistentMission { rails: usize },

    /// Puzzle action attempted in the wrong stage
    #[error("cannot {action} while the puzzle is in the {stage} stage")]
    WrongStage {
        action: &'static str,
        stage: crate::puzzle::Stage,
    },
}
