//! Secret Sharing Scheme errors.

use math_lib::errors::{FieldError, InterpolationError};
use thiserror::Error;

/// Share generation failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    /// Zero can't be shared.
    #[error("secret must be positive integer")]
    NonPositiveSecret,

    /// The secret must be an element of the field.
    #[error("prime must be greater than secret")]
    PrimeNotGreaterThanSecret,

    /// The polynomial needs one coefficient per share required to rebuild the secret.
    #[error("not enough coefficients, need {needed}, have {provided}")]
    NotEnoughCoefficients {
        /// The threshold.
        needed: usize,

        /// The number of coefficients provided.
        provided: usize,
    },

    /// Fewer shares than the threshold would make the secret unrecoverable.
    #[error("total number of shares ({total}) must be greater than or equal threshold ({threshold})")]
    TotalBelowThreshold {
        /// The requested number of shares.
        total: u32,

        /// The threshold.
        threshold: usize,
    },

    /// The prime doesn't define a field.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Secret recovery failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum JoinError {
    /// No shares were provided.
    #[error("no shares provided")]
    NoShares,

    /// The shares carry different primes.
    #[error("shares not from the same series")]
    MismatchedSeries,

    /// The polynomial interpolation failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// The prime doesn't define a field.
    #[error(transparent)]
    Field(#[from] FieldError),
}
