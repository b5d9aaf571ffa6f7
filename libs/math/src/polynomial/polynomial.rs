//! Polynomial in Finite Field.

use crate::fields::PrimeField;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Polynomial Expression.
///
/// Coefficients are stored in ascending order of degree, `coefficients[0]` is the constant term.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    /// Coefficients of the polynomial.
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a new polynomial expression.
    pub fn new(coefficients: Vec<BigInt>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// Creates a polynomial out of the first `count` unsigned coefficients.
    pub fn from_unsigned_coefficients(coefficients: &[BigUint], count: usize) -> Polynomial {
        let coefficients = coefficients.iter().take(count).map(|c| BigInt::from(c.clone())).collect();
        Polynomial { coefficients }
    }

    /// Evaluates the polynomial at `x` as `Σ c_i · x^i (mod p)`.
    ///
    /// Each power is computed through modular exponentiation and every partial product and sum is
    /// reduced, so intermediate values never grow past `p²`.
    pub fn eval(&self, x: &BigInt, field: &PrimeField) -> BigInt {
        let mut eval = BigInt::zero();
        let mut exponent = BigUint::zero();
        for coefficient in &self.coefficients {
            let power = field.pow(x, &exponent);
            let term = field.mul(&power, &field.element(coefficient));
            eval = field.add(&eval, &term);
            exponent += 1u32;
        }
        eval
    }
}
