use crate::{Wallet, WalletError};
use alloy_primitives::{keccak256, Address, B256};
use alloy_provider::Provider;
use binding::ens::{IENSRegistry, IPublicResolver};
use tracing::debug;

// Wallet implementation backed by an RPC endpoint.
pub struct RpcWallet<P> {
    provider: P,
    ens_registry: Address,
}

impl<P> RpcWallet<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, ens_registry: Address) -> Self {
        Self {
            provider,
            ens_registry,
        }
    }
}

impl<P> Wallet for RpcWallet<P>
where
    P: Provider + Clone,
{
    async fn request_accounts(&self) -> Result<Address, WalletError> {
        debug!("Requesting wallet accounts");

        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(|e| WalletError::NotInstalled(format!("{}", e)))?;

        accounts
            .first()
            .copied()
            .ok_or_else(|| WalletError::NotInstalled("endpoint exposes no accounts".to_string()))
    }

    async fn resolve_name(&self, name: &str) -> Result<Address, WalletError> {
        debug!("Resolving name: name={}", name);

        let node = namehash(name);

        let registry = IENSRegistry::new(self.ens_registry, &self.provider);
        let resolver_address = registry
            .resolver(node)
            .call()
            .await
            .map_err(|e| WalletError::NotFound(format!("{}: {}", name, e)))?;

        if resolver_address == Address::ZERO {
            return Err(WalletError::NotFound(name.to_string()));
        }

        let resolver = IPublicResolver::new(resolver_address, &self.provider);
        let resolved = resolver
            .addr(node)
            .call()
            .await
            .map_err(|e| WalletError::NotFound(format!("{}: {}", name, e)))?;

        if resolved == Address::ZERO {
            return Err(WalletError::NotFound(name.to_string()));
        }

        debug!("Resolved name: name={}, address={}", name, resolved);
        Ok(resolved)
    }
}

/// Compute the EIP-137 namehash of an ENS name.
///
/// The hash is built from the right-most label outward, starting from the
/// zero node for the empty name.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;

    if name.is_empty() {
        return node;
    }

    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        node = keccak256([node.as_slice(), label_hash.as_slice()].concat());
    }

    node
}
