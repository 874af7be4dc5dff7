//! Network configuration for token balance queries.
//!
//! Provides chain-specific addresses and parameters for different networks
//! (mainnet, testnet, etc.).

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Network type (mainnet or testnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Sepolia,
}

/// Complete network configuration for balance queries and name resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type (mainnet or testnet)
    pub network_type: NetworkType,
    /// Chain ID
    pub chain_id: u64,
    /// ENS registry contract address
    pub ens_registry: Address,
}

impl NetworkConfig {
    /// Ethereum mainnet configuration.
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            chain_id: 1,
            // https://etherscan.io/address/0x00000000000C2E074eC69A0dBFb59Ba9E3c4b7eB
            ens_registry: address!("0x00000000000C2E074eC69A0dBFb59Ba9E3c4b7eB"),
        }
    }

    /// Ethereum Sepolia testnet configuration.
    ///
    /// The ENS registry is deployed at the same address on Sepolia.
    pub const fn sepolia() -> Self {
        Self {
            network_type: NetworkType::Sepolia,
            chain_id: 11155111,
            ens_registry: address!("0x00000000000C2E074eC69A0dBFb59Ba9E3c4b7eB"),
        }
    }

    /// Create configuration from network type.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Sepolia => Self::sepolia(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_config() {
        let config = NetworkConfig::mainnet();
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.network_type, NetworkType::Mainnet);
    }

    #[test]
    fn test_sepolia_config() {
        let config = NetworkConfig::sepolia();
        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.network_type, NetworkType::Sepolia);
        // Registry address is shared across both networks
        assert_eq!(config.ens_registry, NetworkConfig::mainnet().ens_registry);
    }

    #[test]
    fn test_from_network_type() {
        let config = NetworkConfig::from_network_type(NetworkType::Sepolia);
        assert_eq!(config.chain_id, 11155111);
    }
}
