//! The balance fetch workflow.
//!
//! This crate owns the dashboard's one piece of stateful behavior: accepting
//! an account address (typed, resolved from a name, or taken from a wallet),
//! running the two-stage token query against the chain-data collaborator,
//! and exposing the joined result to the presentation layer.
//!
//! Both collaborators are injected as trait handles so they can be replaced
//! with test doubles.

pub mod display;
pub mod state;

pub use display::format_token_amount;
pub use state::{LengthMismatch, QueryResult, TokenRow, WorkflowState};

use alloy_primitives::Address;
use chaindata::{ChainData, ChainDataError};
use futures::future::try_join_all;
use thiserror::Error;
use tracing::{debug, info};
use wallet::Wallet;

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The submitted input was blank
    #[error("No address entered")]
    EmptyInput,

    /// The input neither resolved as a name nor parsed as a hex address
    #[error("Not a valid address: {0}")]
    InvalidAddress(String),

    /// No wallet capability is attached, or it refused account access
    #[error("No wallet available")]
    WalletUnavailable,

    /// The balance query or any metadata lookup failed
    #[error("Token query failed: {0}")]
    FetchFailed(#[from] ChainDataError),
}

/// State machine driving address selection and the two-stage token query.
pub struct BalanceFetchWorkflow<W, C> {
    wallet: Option<W>,
    chain_data: C,
    state: WorkflowState,
}

impl<W, C> BalanceFetchWorkflow<W, C>
where
    W: Wallet,
    C: ChainData,
{
    /// Create a workflow over the injected collaborators.
    ///
    /// The wallet capability is optional; without it `connect_wallet` fails
    /// with [`WorkflowError::WalletUnavailable`] and submitted inputs are
    /// only accepted as hex addresses.
    pub const fn new(wallet: Option<W>, chain_data: C) -> Self {
        Self {
            wallet,
            chain_data,
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// The result of the last completed query, if one is displayed.
    pub fn result(&self) -> Option<&QueryResult> {
        match &self.state {
            WorkflowState::Displayed { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WorkflowState::Fetching { .. })
    }

    /// Request account access from the wallet and fetch its balances.
    ///
    /// Leaves the state unchanged when no wallet capability is available.
    pub async fn connect_wallet(&mut self) -> Result<(), WorkflowError> {
        let Some(wallet) = &self.wallet else {
            return Err(WorkflowError::WalletUnavailable);
        };

        let address = wallet.request_accounts().await.map_err(|e| {
            debug!("Wallet account request failed: {}", e);
            WorkflowError::WalletUnavailable
        })?;

        info!("Wallet connected: address={}", address);
        self.state = WorkflowState::AddressPending { address };
        self.fetch_balances(address).await
    }

    /// Accept a typed address or name and fetch its balances.
    ///
    /// Name resolution always targets the submitted input. When resolution
    /// fails the input must parse as a hex address.
    pub async fn submit_address(&mut self, raw: &str) -> Result<(), WorkflowError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(WorkflowError::EmptyInput);
        }

        let address = match self.resolve(raw).await {
            Some(resolved) => resolved,
            None => raw
                .parse::<Address>()
                .map_err(|_| WorkflowError::InvalidAddress(raw.to_string()))?,
        };

        self.state = WorkflowState::AddressPending { address };
        self.fetch_balances(address).await
    }

    async fn resolve(&self, raw: &str) -> Option<Address> {
        let wallet = self.wallet.as_ref()?;

        match wallet.resolve_name(raw).await {
            Ok(address) => {
                info!("Resolved name: input={}, address={}", raw, address);
                Some(address)
            }
            Err(e) => {
                debug!("Name resolution failed: input={}, error={}", raw, e);
                None
            }
        }
    }

    /// Run the two-stage token query for an address.
    ///
    /// One balance call, then a concurrent metadata lookup per balance entry.
    /// The join is all-or-nothing: any metadata failure fails the whole query
    /// and no partial result is exposed. On failure the workflow falls back
    /// to `AddressPending` so the address can be retried or reset.
    pub async fn fetch_balances(&mut self, address: Address) -> Result<(), WorkflowError> {
        self.state = WorkflowState::Fetching { address };

        match self.query_tokens(address).await {
            Ok(result) => {
                info!("Query complete: address={}, tokens={}", address, result.len());
                self.state = WorkflowState::Displayed { address, result };
                Ok(())
            }
            Err(e) => {
                self.state = WorkflowState::AddressPending { address };
                Err(WorkflowError::FetchFailed(e))
            }
        }
    }

    async fn query_tokens(&self, address: Address) -> Result<QueryResult, ChainDataError> {
        let balances = self.chain_data.get_token_balances(address).await?;

        debug!(
            "Fanning out metadata lookups: address={}, count={}",
            address,
            balances.len()
        );

        // Unbounded fan-out, one lookup per balance entry. try_join_all keeps
        // results in request order and fails the whole join on the first error.
        let lookups = balances
            .iter()
            .map(|balance| self.chain_data.get_token_metadata(balance.contract_address));
        let metadata = try_join_all(lookups).await?;

        // try_join_all yields one metadata entry per balance; a mismatch
        // means a misbehaving collaborator and fails the whole query.
        QueryResult::join(balances, metadata).map_err(|e| ChainDataError::Network(e.to_string()))
    }

    /// Discard the current address and result, returning to `Idle`.
    pub fn reset(&mut self) {
        self.state = WorkflowState::Idle;
    }
}
