//! Euclidean Remainder

use num_bigint::BigInt;
use num_integer::Integer;

/// Euclidean Remainder trait
pub trait RemEuclid<Rhs = Self> {
    /// Output type of the Euclidean Remainder Operation
    type Output;

    /// function to do the Euclidean Remainder Operation
    fn rem_euclid(self, rhs: Rhs) -> Self::Output;
}

// `%` on BigInt keeps the sign of the dividend, field elements need the floored remainder.
impl RemEuclid<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem_euclid(self, rhs: &BigInt) -> BigInt {
        self.mod_floor(rhs)
    }
}

impl RemEuclid<&BigInt> for BigInt {
    type Output = BigInt;

    fn rem_euclid(self, rhs: &BigInt) -> BigInt {
        self.mod_floor(rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(7, 5, 2)]
    #[case(-7, 5, 3)]
    #[case(-10, 5, 0)]
    #[case(0, 13, 0)]
    #[case(-1, 1613, 1612)]
    fn remainder_is_never_negative(#[case] value: i64, #[case] modulus: i64, #[case] expected: i64) {
        let result = BigInt::from(value).rem_euclid(&BigInt::from(modulus));
        assert_eq!(result, BigInt::from(expected));
    }
}
