//! Secret sharer interface.

use crate::{
    protocol::{JoinError, SplitError},
    share::SecretShare,
};
use math_lib::errors::{ConversionError, RandomError};
use thiserror::Error;

/// A type that can perform secret sharing, turning secrets into shares and shares into secrets.
///
/// The generic type S refers to the type of the secrets being shared.
pub trait SecretSharer<S: ?Sized>: SecretSharerProperties {
    /// The type of the secrets recovered from shares.
    type Recovered;

    /// Generates shares for the given secret.
    fn generate_shares(&self, secret: &S) -> Result<Vec<SecretShare>, SharerError>;

    /// Recovers the secret behind the provided shares.
    fn recover(&self, shares: &[SecretShare]) -> Result<Self::Recovered, SharerError>;
}

/// The properties of a secret sharer.
pub trait SecretSharerProperties {
    /// The number of shares generated per secret.
    fn total(&self) -> u32;

    /// The number of shares needed to recover a secret.
    fn threshold(&self) -> usize;

    /// The way primes are picked for every secret.
    fn prime_strategy(&self) -> PrimeStrategy;
}

/// How the prime of a series is picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrimeStrategy {
    /// The smallest prime above the bound.
    #[default]
    Next,

    /// A random prime above the bound with the bound's bit length, or one more bit if there's none.
    Random,
}

/// An invalid secret sharer configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SharerConfigError {
    /// At least one share must be needed to recover a secret.
    #[error("threshold must be at least 1")]
    ZeroThreshold,

    /// The threshold can't be reached with the generated shares.
    #[error("threshold ({threshold}) must be lower than or equal to the total number of shares ({total})")]
    ThresholdAboveTotal {
        /// The requested threshold.
        threshold: usize,

        /// The requested number of shares.
        total: u32,
    },

    /// Share indexes past the largest encodable one would be generated.
    #[error("total number of shares ({total}) must be at most {max}")]
    TooManyShares {
        /// The requested number of shares.
        total: u32,

        /// The largest number of shares.
        max: u32,
    },
}

/// An error during share generation or secret recovery.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SharerError {
    /// The secret couldn't be converted from or into an integer.
    #[error("conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// Random coefficients couldn't be drawn.
    #[error("coefficient generation failed: {0}")]
    Random(#[from] RandomError),

    /// The share generation failed.
    #[error("share generation failed: {0}")]
    Split(#[from] SplitError),

    /// The secret recovery failed.
    #[error("secret recovery failed: {0}")]
    Join(#[from] JoinError),
}
