use num_bigint::BigUint;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use std::path::Path;

/// The main config type.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct Config {
    /// The prime all shares were generated with.
    #[serde_as(as = "DisplayFromStr")]
    pub prime: BigUint,

    /// The shares.
    pub shares: Vec<ShareConfig>,
}

impl Config {
    /// Loads the config from a file path.
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::from(path));
        builder.build()?.try_deserialize()
    }
}

/// The configuration for a single share.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct ShareConfig {
    /// The share index.
    pub index: u32,

    /// The share value.
    #[serde_as(as = "DisplayFromStr")]
    pub value: BigUint,
}
