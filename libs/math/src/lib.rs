//! Math library for arbitrary precision integers over prime fields and polynomial operations
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    // clippy::arithmetic_side_effects is left out, it flags every BigInt operator
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod conversions;
pub mod errors;
pub mod fields;
pub mod modular;
pub mod polynomial;
pub mod primes;
pub mod random;
