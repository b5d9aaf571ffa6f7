//! Secret Sharer.

pub mod secret_sharer;
pub mod shamir_secret_sharer;

pub use secret_sharer::*;
pub use shamir_secret_sharer::*;
