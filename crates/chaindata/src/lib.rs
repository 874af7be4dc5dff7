//! Token balance and metadata queries.
//!
//! This crate provides the chain-data collaborator of the balance fetch
//! workflow: listing every ERC-20 balance held by an address, and fetching
//! per-token metadata (symbol, decimals, logo) for a contract address.

pub mod alchemy;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// A single ERC-20 balance entry for the queried address.
///
/// The balance is the raw amount in the token's smallest unit; rendering it
/// requires the token's decimals from [`TokenMetadata`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    /// Token contract address
    pub contract_address: Address,
    /// Raw balance in the token's smallest unit
    pub token_balance: U256,
}

/// Metadata for an ERC-20 token contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token symbol (e.g. "USDC")
    pub symbol: String,
    /// Number of decimals in the raw balance
    pub decimals: u8,
    /// Token logo URL, when the provider has one
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Error, Debug)]
pub enum ChainDataError {
    /// The provider request failed or returned a malformed response
    #[error("Network error: {0}")]
    Network(String),
}

/// Trait for querying token balances and metadata.
pub trait ChainData: Send + Sync {
    /// List all ERC-20 balances held by an address.
    fn get_token_balances(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<Vec<TokenBalance>, ChainDataError>> + Send;

    /// Fetch metadata for a single token contract.
    fn get_token_metadata(
        &self,
        contract_address: Address,
    ) -> impl Future<Output = Result<TokenMetadata, ChainDataError>> + Send;
}
