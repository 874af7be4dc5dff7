use crate::{ChainData, ChainDataError, TokenBalance, TokenMetadata};
use alloy_primitives::Address;
use alloy_provider::Provider;
use serde::Deserialize;
use tracing::debug;

/// Response shape of `alchemy_getTokenBalances`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesResponse {
    /// The queried address, echoed back by the provider
    pub address: Address,
    /// One entry per token contract the address holds
    pub token_balances: Vec<TokenBalance>,
}

// Chain data implementation backed by the Alchemy token API.
//
// Both methods are enhanced-RPC calls carried over the same transport as
// standard JSON-RPC, so they go through `Provider::raw_request`.
pub struct AlchemyTokenApi<P> {
    provider: P,
}

impl<P> AlchemyTokenApi<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> ChainData for AlchemyTokenApi<P>
where
    P: Provider + Clone,
{
    async fn get_token_balances(&self, address: Address) -> Result<Vec<TokenBalance>, ChainDataError> {
        debug!("Querying token balances: address={}", address);

        let response: TokenBalancesResponse = self
            .provider
            .raw_request("alchemy_getTokenBalances".into(), (address, "erc20"))
            .await
            .map_err(|e| ChainDataError::Network(format!("{}", e)))?;

        debug!(
            "Token balances received: address={}, count={}",
            response.address,
            response.token_balances.len()
        );

        Ok(response.token_balances)
    }

    async fn get_token_metadata(
        &self,
        contract_address: Address,
    ) -> Result<TokenMetadata, ChainDataError> {
        debug!("Querying token metadata: contract={}", contract_address);

        let metadata: TokenMetadata = self
            .provider
            .raw_request("alchemy_getTokenMetadata".into(), (contract_address,))
            .await
            .map_err(|e| ChainDataError::Network(format!("{}", e)))?;

        Ok(metadata)
    }
}
