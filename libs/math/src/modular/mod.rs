//! Modular BigInts and its Operation

pub mod rem_euclid;

pub use rem_euclid::*;
