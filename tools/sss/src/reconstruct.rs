use crate::config::Config;
use anyhow::{Context, Result};
use log::debug;
use num_bigint::BigUint;
use shamir_sharing::SecretShare;

/// Performs reconstruction of shares into the secret behind them.
#[derive(Default)]
pub struct Reconstructor;

impl Reconstructor {
    /// Reconstructs the shares in the given config using its prime.
    pub fn reconstruct(&self, config: Config) -> Result<BigUint> {
        let Config { prime, shares } = config;
        debug!("Reconstructing secret from {} shares", shares.len());
        let shares: Vec<_> =
            shares.into_iter().map(|share| SecretShare::new(share.index, share.value, prime.clone())).collect();
        shamir_sharing::join(&shares).context("reconstruction failed")
    }
}
