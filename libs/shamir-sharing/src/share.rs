//! Secret shares.

use num_bigint::BigUint;
use std::fmt;

/// A single share in a series: one point `(index, value)` on the polynomial hiding a secret, tagged with
/// the prime of the field the series lives in.
///
/// Shares are immutable. Equality and hashing are structural over all three fields, ordering compares
/// the index first, then the value and lastly the prime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SecretShare {
    index: u32,
    value: BigUint,
    prime: BigUint,
}

impl SecretShare {
    /// Constructs a share.
    ///
    /// No validation is performed, shares produced outside of [crate::split] and [crate::codec::decode]
    /// are trusted to belong to a series.
    pub fn new(index: u32, value: BigUint, prime: BigUint) -> Self {
        Self { index, value, prime }
    }

    /// The ordinal of this share in its series, which is also the abscissa it was evaluated at.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The polynomial evaluated at [SecretShare::index], reduced modulo the prime.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The prime of the series.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }
}

impl fmt::Display for SecretShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretShare{{n={}, share={}, prime={}}}", self.index, self.value, self.prime)
    }
}
