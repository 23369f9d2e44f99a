//! Error type shared by every factor source and consumer.

use thiserror::Error;

/// Errors from producing or consuming a factor sequence.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FactorError {
    /// The input is not a positive integer.
    #[error("invalid input: {0} (expected a positive integer)")]
    InvalidInput(i64),

    /// The factor sequence for this input is empty, so it has no maximum.
    #[error("undefined maximum: {0} has no factors")]
    UndefinedMaximum(i64),

    /// The source has no answer for this input.
    #[error("no factors available for {0}")]
    Unavailable(i64),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
