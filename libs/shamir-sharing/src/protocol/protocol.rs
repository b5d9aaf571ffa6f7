//! Shamir Secret Sharing Protocol

use crate::{
    protocol::{JoinError, SplitError},
    share::SecretShare,
};
use math_lib::{
    fields::PrimeField,
    polynomial::{point::Point, point_sequence::PointSequence, Polynomial},
};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Split a secret into `total` shares, any `threshold` of which rebuild it.
///
/// The shares are the evaluations at `x = 1..=total` of `P(x) = Σ coefficients[c] · x^c (mod prime)` for
/// `c < threshold`. `coefficients[0]` is expected to be the secret and the rest uniformly random below the
/// prime, but this isn't checked: all of the randomness of the scheme lives in the coefficients so the
/// same inputs always produce the same shares. Coefficients past `threshold` are ignored.
///
/// # Arguments
/// * `secret` - The secret, must be positive.
/// * `coefficients` - The polynomial coefficients, at least `threshold` of them.
/// * `total` - The number of shares to produce.
/// * `threshold` - The number of shares needed to rebuild the secret.
/// * `prime` - The prime defining the field, must be greater than the secret.
pub fn split(
    secret: &BigUint,
    coefficients: &[BigUint],
    total: u32,
    threshold: usize,
    prime: &BigUint,
) -> Result<Vec<SecretShare>, SplitError> {
    if secret.is_zero() {
        return Err(SplitError::NonPositiveSecret);
    }
    if prime <= secret {
        return Err(SplitError::PrimeNotGreaterThanSecret);
    }
    if coefficients.len() < threshold {
        return Err(SplitError::NotEnoughCoefficients { needed: threshold, provided: coefficients.len() });
    }
    if usize::try_from(total).is_ok_and(|total| total < threshold) {
        return Err(SplitError::TotalBelowThreshold { total, threshold });
    }

    let field = PrimeField::new(prime.clone())?;
    let polynomial = Polynomial::from_unsigned_coefficients(coefficients, threshold);

    let mut shares = Vec::new();
    for index in 1..=total {
        let value = polynomial.eval(&BigInt::from(index), &field);
        let value = value.to_biguint().unwrap_or_default();
        shares.push(SecretShare::new(index, value, prime.clone()));
    }
    Ok(shares)
}

/// Join shares back into the secret.
///
/// All shares must carry the same prime. That is the only consistency check: whether they lie on the same
/// polynomial can't be verified, and neither can the threshold used to generate them. Joining fewer shares
/// than that threshold succeeds and returns a value that is *not* the secret. That's inherent to the
/// scheme, a sub-threshold set of shares carries no information about the secret.
///
/// Two shares with the same index (or indexes congruent modulo the prime) make the interpolation divide
/// by zero and fail with [math_lib::errors::InterpolationError::DivByZero].
pub fn join(shares: &[SecretShare]) -> Result<BigUint, JoinError> {
    let (first, rest) = shares.split_first().ok_or(JoinError::NoShares)?;
    let prime = first.prime();
    if rest.iter().any(|share| share.prime() != prime) {
        return Err(JoinError::MismatchedSeries);
    }

    let field = PrimeField::new(prime.clone())?;
    let point_sequence: PointSequence =
        shares.iter().map(|share| Point::new(share.index(), BigInt::from(share.value().clone()))).collect();
    let secret = point_sequence.lagrange_interpolate(&field)?;
    Ok(secret.to_biguint().unwrap_or_default())
}
