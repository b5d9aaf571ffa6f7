//! Shamir secret sharing over arbitrary precision prime fields.
//!
//! A secret is split into `total` shares so that any `threshold` of them give the secret back through
//! Lagrange interpolation at zero. Each share can be encoded into a small binary message for storage or
//! transport, see [codec].
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod codec;
pub mod protocol;
pub mod secret_sharer;
pub mod share;

pub use protocol::{join, split};
pub use share::SecretShare;
