//! Secret sharer implementation.

use crate::{
    codec, protocol,
    secret_sharer::{PrimeStrategy, SecretSharer, SecretSharerProperties, SharerConfigError, SharerError},
    share::SecretShare,
};
use log::debug;
use math_lib::{
    conversions::{decode_integer_to_string, encode_string_to_integer},
    primes::{first_prime_greater_than, random_prime_greater_than},
    random::random_coefficients,
};
use num_bigint::BigUint;
use std::cmp;

/// A secret sharer that picks a fresh prime and random coefficients for every secret.
///
/// ```
/// use shamir_sharing::secret_sharer::ShamirSecretSharer;
///
/// let sharer = ShamirSecretSharer::new(5, 3).unwrap();
/// let shares = sharer.split_str("Hello World!").unwrap();
/// let secret = sharer.join_to_string(&shares[1..4]).unwrap();
/// assert_eq!(secret, "Hello World!");
/// ```
#[derive(Clone, Debug)]
pub struct ShamirSecretSharer {
    total: u32,
    threshold: usize,
    prime_strategy: PrimeStrategy,
}

impl ShamirSecretSharer {
    /// Constructs a new secret sharer.
    ///
    /// # Arguments
    /// * `total` - The number of shares generated per secret, at most [codec::MAX_INDEX] so every share can be
    ///   encoded.
    /// * `threshold` - The number of shares needed to recover a secret, in `1..=total`.
    pub fn new(total: u32, threshold: usize) -> Result<Self, SharerConfigError> {
        if threshold == 0 {
            return Err(SharerConfigError::ZeroThreshold);
        }
        if total > codec::MAX_INDEX {
            return Err(SharerConfigError::TooManyShares { total, max: codec::MAX_INDEX });
        }
        if usize::try_from(total).is_ok_and(|total| threshold > total) {
            return Err(SharerConfigError::ThresholdAboveTotal { threshold, total });
        }
        Ok(Self { total, threshold, prime_strategy: PrimeStrategy::default() })
    }

    /// Sets the way primes are picked.
    pub fn with_prime_strategy(mut self, prime_strategy: PrimeStrategy) -> Self {
        self.prime_strategy = prime_strategy;
        self
    }

    /// Splits an integer secret.
    ///
    /// The prime is picked above both the secret and the number of shares, so every share index is a
    /// distinct element of the field.
    pub fn split_integer(&self, secret: &BigUint) -> Result<Vec<SecretShare>, SharerError> {
        let total = BigUint::from(self.total);
        let bound = cmp::max(secret, &total);
        let prime = match self.prime_strategy {
            PrimeStrategy::Next => first_prime_greater_than(bound),
            PrimeStrategy::Random => random_prime_greater_than(bound),
        };
        debug!("Using {:?} prime of {} bits for {} shares", self.prime_strategy, prime.bits(), self.total);

        let coefficients = random_coefficients(self.threshold, secret, &prime)?;
        Ok(protocol::split(secret, &coefficients, self.total, self.threshold, &prime)?)
    }

    /// Splits a string secret, encoded as the integer its UTF-8 bytes represent.
    pub fn split_str(&self, secret: &str) -> Result<Vec<SecretShare>, SharerError> {
        let secret = encode_string_to_integer(secret)?;
        self.split_integer(&secret)
    }

    /// Joins shares into an integer secret.
    ///
    /// Joining fewer than [SecretSharerProperties::threshold] shares returns a wrong secret, see
    /// [protocol::join].
    pub fn join(&self, shares: &[SecretShare]) -> Result<BigUint, SharerError> {
        debug!("Joining {} shares, threshold is {}", shares.len(), self.threshold);
        Ok(protocol::join(shares)?)
    }

    /// Joins shares into a string secret.
    pub fn join_to_string(&self, shares: &[SecretShare]) -> Result<String, SharerError> {
        let secret = self.join(shares)?;
        Ok(decode_integer_to_string(&secret)?)
    }
}

impl SecretSharerProperties for ShamirSecretSharer {
    fn total(&self) -> u32 {
        self.total
    }

    fn threshold(&self) -> usize {
        self.threshold
    }

    fn prime_strategy(&self) -> PrimeStrategy {
        self.prime_strategy
    }
}

impl SecretSharer<BigUint> for ShamirSecretSharer {
    type Recovered = BigUint;

    fn generate_shares(&self, secret: &BigUint) -> Result<Vec<SecretShare>, SharerError> {
        self.split_integer(secret)
    }

    fn recover(&self, shares: &[SecretShare]) -> Result<BigUint, SharerError> {
        self.join(shares)
    }
}

impl SecretSharer<str> for ShamirSecretSharer {
    type Recovered = String;

    fn generate_shares(&self, secret: &str) -> Result<Vec<SecretShare>, SharerError> {
        self.split_str(secret)
    }

    fn recover(&self, shares: &[SecretShare]) -> Result<String, SharerError> {
        self.join_to_string(shares)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod test {
    use super::*;
    use crate::protocol::{JoinError, SplitError};
    use math_lib::{errors::ConversionError, primes::is_probable_prime};
    use rstest::rstest;

    fn big_secret() -> BigUint {
        BigUint::parse_bytes(b"340282366920938463463374607431768211507", 10).unwrap()
    }

    #[rstest]
    #[case(1, 1)]
    #[case(5, 3)]
    #[case(5, 5)]
    #[case(20, 7)]
    fn integer_round_trip(#[case] total: u32, #[case] threshold: usize) {
        let sharer = ShamirSecretSharer::new(total, threshold).unwrap();
        let secret = big_secret();
        let shares = sharer.split_integer(&secret).unwrap();
        assert_eq!(shares.len(), total as usize);
        assert_eq!(sharer.join(&shares).unwrap(), secret);
        assert_eq!(sharer.join(&shares[shares.len() - threshold..]).unwrap(), secret);
    }

    #[rstest]
    #[case(PrimeStrategy::Next)]
    #[case(PrimeStrategy::Random)]
    fn prime_strategies(#[case] strategy: PrimeStrategy) {
        let sharer = ShamirSecretSharer::new(6, 3).unwrap().with_prime_strategy(strategy);
        assert_eq!(sharer.prime_strategy(), strategy);
        let secret = big_secret();
        let shares = sharer.split_integer(&secret).unwrap();
        let prime = shares[0].prime();
        assert!(prime > &secret);
        assert!(is_probable_prime(prime));
        assert!(shares.iter().all(|share| share.prime() == prime));
        assert_eq!(sharer.join(&shares[2..5]).unwrap(), secret);
    }

    #[test]
    fn next_prime_is_smallest() {
        let sharer = ShamirSecretSharer::new(3, 2).unwrap();
        let shares = sharer.split_integer(&BigUint::from(1610u32)).unwrap();
        assert_eq!(shares[0].prime(), &BigUint::from(1613u32));
    }

    #[test]
    fn prime_above_share_count() {
        let sharer = ShamirSecretSharer::new(10, 2).unwrap();
        let shares = sharer.split_integer(&BigUint::from(1u32)).unwrap();
        assert_eq!(shares[0].prime(), &BigUint::from(11u32));
        assert_eq!(sharer.join(&shares[8..]).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn insufficient_shares() {
        let sharer = ShamirSecretSharer::new(5, 3).unwrap();
        let secret = big_secret();
        let shares = sharer.split_integer(&secret).unwrap();
        assert_ne!(sharer.join(&shares[..2]).unwrap(), secret);
    }

    #[rstest]
    #[case("Hello World!")]
    #[case("a")]
    #[case("sécurité 🔑")]
    fn string_round_trip(#[case] secret: &str) {
        let sharer = ShamirSecretSharer::new(4, 2).unwrap();
        let shares = SecretSharer::<str>::generate_shares(&sharer, secret).unwrap();
        let recovered: String = SecretSharer::<str>::recover(&sharer, &shares[2..]).unwrap();
        assert_eq!(recovered, secret);
    }

    #[rstest]
    #[case("")]
    #[case("\0\0")]
    fn empty_string(#[case] secret: &str) {
        let sharer = ShamirSecretSharer::new(4, 2).unwrap();
        assert_eq!(sharer.split_str(secret), Err(SharerError::Conversion(ConversionError::EmptySecret)));
    }

    #[test]
    fn zero_secret() {
        let sharer = ShamirSecretSharer::new(4, 2).unwrap();
        assert_eq!(sharer.split_integer(&BigUint::from(0u32)), Err(SharerError::Split(SplitError::NonPositiveSecret)));
    }

    #[test]
    fn join_nothing() {
        let sharer = ShamirSecretSharer::new(4, 2).unwrap();
        assert_eq!(sharer.join(&[]), Err(SharerError::Join(JoinError::NoShares)));
    }

    #[rstest]
    #[case(3, 0, SharerConfigError::ZeroThreshold)]
    #[case(0, 0, SharerConfigError::ZeroThreshold)]
    #[case(3, 4, SharerConfigError::ThresholdAboveTotal { threshold: 4, total: 3 })]
    #[case(0, 1, SharerConfigError::ThresholdAboveTotal { threshold: 1, total: 0 })]
    #[case(256, 2, SharerConfigError::TooManyShares { total: 256, max: 255 })]
    #[case(300, 300, SharerConfigError::TooManyShares { total: 300, max: 255 })]
    fn invalid_config(#[case] total: u32, #[case] threshold: usize, #[case] expected: SharerConfigError) {
        assert_eq!(ShamirSecretSharer::new(total, threshold).unwrap_err(), expected);
    }

    #[test]
    fn every_share_encodes_at_max_total() {
        let sharer = ShamirSecretSharer::new(codec::MAX_INDEX, 2).unwrap();
        let shares = sharer.split_integer(&BigUint::from(1234u32)).unwrap();
        assert_eq!(shares.len(), 255);
        assert!(shares.iter().all(|share| share.to_bytes().is_ok()));
    }

    #[test]
    fn properties() {
        let sharer = ShamirSecretSharer::new(7, 4).unwrap();
        assert_eq!(sharer.total(), 7);
        assert_eq!(sharer.threshold(), 4);
        assert_eq!(sharer.prime_strategy(), PrimeStrategy::Next);
    }
}
