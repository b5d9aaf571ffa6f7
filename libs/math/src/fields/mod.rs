//! Finite Fields in number theory.

pub mod field;

pub use field::PrimeField;
