//! Wallet capability for account access and name resolution.
//!
//! This crate provides the wallet-side collaborator of the balance fetch
//! workflow: requesting an account address from an attached RPC endpoint and
//! resolving human-readable ENS names to addresses.
//!
//! The capability is optional. A dashboard running without a wallet endpoint
//! simply has no [`Wallet`] handle, which is a normal, handled state rather
//! than an error at startup.

pub mod rpc;

use alloy_primitives::Address;
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    /// No wallet endpoint is attached, or it exposes no accounts
    #[error("No wallet accounts available: {0}")]
    NotInstalled(String),

    /// The name does not resolve to an address
    #[error("Name did not resolve: {0}")]
    NotFound(String),
}

/// Trait for wallet access.
pub trait Wallet: Send + Sync {
    /// Request account access and return the primary account address.
    fn request_accounts(&self) -> impl Future<Output = Result<Address, WalletError>> + Send;

    /// Resolve a human-readable name to an address.
    fn resolve_name(&self, name: &str) -> impl Future<Output = Result<Address, WalletError>> + Send;
}
