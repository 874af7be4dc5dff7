use config::NetworkType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chain-data RPC endpoint url (Alchemy token API)
    pub rpc_url: String,

    /// Network to run against
    pub network: NetworkType,

    /// Optional wallet RPC endpoint url.
    ///
    /// When absent the wallet capability is unavailable: connecting fails and
    /// submitted inputs are only accepted as hex addresses.
    pub wallet_rpc_url: Option<String>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }
}
