//! Crate errors.

use thiserror::Error;

/// Failed Interpolation Error
#[derive(Error, Debug, Eq, PartialEq)]
pub enum InterpolationError {
    /// Division by zero.
    ///
    /// Only happens when two points share an abscissa modulo the field's prime.
    #[error("division by zero")]
    DivByZero,

    /// Empty point sequence.
    #[error("empty point sequence")]
    EmptySequence,
}

impl From<DivByZero> for InterpolationError {
    fn from(_: DivByZero) -> Self {
        Self::DivByZero
    }
}

/// Prime field construction error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum FieldError {
    /// The modulus can't define a field.
    #[error("invalid field modulus {0}, must be at least 2")]
    InvalidModulus(num_bigint::BigUint),
}

/// Random number generation error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum RandomError {
    /// There are no integers in `[0, 0)`.
    #[error("upper bound must be positive")]
    ZeroBound,
}

/// String and integer conversion error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConversionError {
    /// The string encodes to zero, which can't be a secret.
    #[error("secret string must contain at least one non-NUL character")]
    EmptySecret,

    /// The integer bytes are not valid UTF-8.
    #[error("integer does not encode a UTF-8 string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Division by zero.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("division by zero")]
pub struct DivByZero;
