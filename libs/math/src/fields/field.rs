//! Definitions for fields.

use crate::{
    errors::{DivByZero, FieldError},
    modular::RemEuclid,
};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

/// A prime field `Z/pZ` over arbitrary precision integers.
///
/// Elements are plain [BigInt]s. Every operation accepts any integer, including negative ones, and
/// returns its canonical representative in `[0, p)`. Primality of the modulus is not verified, it is
/// the caller's responsibility to pick a prime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigInt,
}

impl PrimeField {
    /// Creates a new field for the given modulus.
    pub fn new(modulus: BigUint) -> Result<Self, FieldError> {
        if modulus <= BigUint::one() {
            return Err(FieldError::InvalidModulus(modulus));
        }
        Ok(Self { modulus: BigInt::from(modulus) })
    }

    /// The field's modulus.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Reduces an integer into the field.
    pub fn element(&self, value: &BigInt) -> BigInt {
        value.rem_euclid(&self.modulus)
    }

    /// Reduces an unsigned integer into the field.
    pub fn element_from_unsigned(&self, value: &BigUint) -> BigInt {
        self.element(&BigInt::from(value.clone()))
    }

    /// Field addition.
    pub fn add(&self, left: &BigInt, right: &BigInt) -> BigInt {
        (left + right).rem_euclid(&self.modulus)
    }

    /// Field subtraction.
    pub fn sub(&self, left: &BigInt, right: &BigInt) -> BigInt {
        (left - right).rem_euclid(&self.modulus)
    }

    /// Field multiplication.
    pub fn mul(&self, left: &BigInt, right: &BigInt) -> BigInt {
        (left * right).rem_euclid(&self.modulus)
    }

    /// Additive inverse.
    pub fn neg(&self, value: &BigInt) -> BigInt {
        (-value).rem_euclid(&self.modulus)
    }

    /// Modular exponentiation `base^exponent mod p`.
    pub fn pow(&self, base: &BigInt, exponent: &BigUint) -> BigInt {
        let base = self.element(base);
        base.modpow(&BigInt::from(exponent.clone()), &self.modulus)
    }

    /// Multiplicative inverse, found through the extended Euclidean algorithm.
    pub fn inv(&self, value: &BigInt) -> Result<BigInt, DivByZero> {
        let value = self.element(value);
        value.modinv(&self.modulus).map(|inverse| self.element(&inverse)).ok_or(DivByZero)
    }

    /// Field division.
    pub fn div(&self, numerator: &BigInt, denominator: &BigInt) -> Result<BigInt, DivByZero> {
        let inverse = self.inv(denominator)?;
        Ok(self.mul(numerator, &inverse))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use rstest::rstest;

    fn field(modulus: u64) -> PrimeField {
        PrimeField::new(BigUint::from(modulus)).unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn rejects_degenerate_modulus(#[case] modulus: u64) {
        assert_eq!(
            PrimeField::new(BigUint::from(modulus)),
            Err(FieldError::InvalidModulus(BigUint::from(modulus)))
        );
    }

    #[rstest]
    #[case(13, 3, 9)]
    #[case(13, 12, 12)]
    #[case(1613, 2, 807)]
    #[case(1613, -1, 1612)]
    fn inverse(#[case] modulus: u64, #[case] value: i64, #[case] expected: u64) {
        let field = field(modulus);
        let inverse = field.inv(&BigInt::from(value)).unwrap();
        assert_eq!(inverse, BigInt::from(expected));
        assert_eq!(field.mul(&inverse, &BigInt::from(value)), BigInt::one());
    }

    #[test]
    fn zero_has_no_inverse() {
        let field = field(13);
        assert_eq!(field.inv(&BigInt::from(0)), Err(DivByZero));
        assert_eq!(field.inv(&BigInt::from(26)), Err(DivByZero));
        assert_eq!(field.div(&BigInt::from(4), &BigInt::from(-13)), Err(DivByZero));
    }

    #[test]
    fn arithmetic_wraps_into_range() {
        let field = field(13);
        assert_eq!(field.add(&BigInt::from(10), &BigInt::from(5)), BigInt::from(2));
        assert_eq!(field.sub(&BigInt::from(2), &BigInt::from(5)), BigInt::from(10));
        assert_eq!(field.mul(&BigInt::from(-4), &BigInt::from(5)), BigInt::from(6));
        assert_eq!(field.neg(&BigInt::from(3)), BigInt::from(10));
        assert_eq!(field.pow(&BigInt::from(-2), &BigUint::from(3u32)), BigInt::from(5));
        assert_eq!(field.div(&BigInt::from(1), &BigInt::from(2)).unwrap(), BigInt::from(7));
    }
}
