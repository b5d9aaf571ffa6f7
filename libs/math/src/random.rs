//! Random integers drawn from the thread's CSPRNG.

use crate::errors::RandomError;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use std::iter;

/// Generates a uniformly random integer in `[0, bound)`.
pub fn random_integer_below(bound: &BigUint) -> Result<BigUint, RandomError> {
    if bound.is_zero() {
        return Err(RandomError::ZeroBound);
    }
    Ok(rand::thread_rng().gen_biguint_below(bound))
}

/// Generates `count` polynomial coefficients.
///
/// The first one is `element_zero` and the rest are uniformly random below `prime`.
pub fn random_coefficients(
    count: usize,
    element_zero: &BigUint,
    prime: &BigUint,
) -> Result<Vec<BigUint>, RandomError> {
    if prime.is_zero() {
        return Err(RandomError::ZeroBound);
    }
    let mut rng = rand::thread_rng();
    let random = iter::repeat_with(|| rng.gen_biguint_below(prime));
    Ok(iter::once(element_zero.clone()).chain(random).take(count).collect())
}
