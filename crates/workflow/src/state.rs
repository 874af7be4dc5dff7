use alloy_primitives::Address;
use chaindata::{TokenBalance, TokenMetadata};
use thiserror::Error;

/// Rejected join of balance and metadata lists of different lengths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Balance and metadata counts differ: {balances} balances, {metadata} metadata entries")]
pub struct LengthMismatch {
    pub balances: usize,
    pub metadata: usize,
}

/// A balance entry paired with the metadata fetched for its contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub balance: TokenBalance,
    pub metadata: TokenMetadata,
}

/// The joined result of one balance query.
///
/// Rows are materialized at construction by pairing each balance with the
/// metadata fetched at the same request index, so a mismatched pairing is
/// unrepresentable downstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResult {
    rows: Vec<TokenRow>,
}

impl QueryResult {
    /// Join balances with metadata fetched in the same order.
    ///
    /// Fails when the lists differ in length; a silent zip would truncate to
    /// the shorter list and mispair the remainder.
    pub fn join(
        balances: Vec<TokenBalance>,
        metadata: Vec<TokenMetadata>,
    ) -> Result<Self, LengthMismatch> {
        if balances.len() != metadata.len() {
            return Err(LengthMismatch {
                balances: balances.len(),
                metadata: metadata.len(),
            });
        }

        let rows = balances
            .into_iter()
            .zip(metadata)
            .map(|(balance, metadata)| TokenRow { balance, metadata })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[TokenRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Workflow lifecycle.
///
/// `Idle` -> `AddressPending` -> `Fetching` -> `Displayed`, with `reset`
/// returning to `Idle` from any state. A failed fetch falls back to
/// `AddressPending` so the address can be retried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// No address selected, nothing fetched
    #[default]
    Idle,
    /// An address is selected but no query has completed
    AddressPending { address: Address },
    /// A balance query is in flight
    Fetching { address: Address },
    /// A query completed and its result is available
    Displayed { address: Address, result: QueryResult },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};

    fn balance(contract_address: Address) -> TokenBalance {
        TokenBalance {
            contract_address,
            token_balance: U256::from(1u64),
        }
    }

    fn metadata(symbol: &str) -> TokenMetadata {
        TokenMetadata {
            symbol: symbol.to_string(),
            decimals: 18,
            logo: None,
        }
    }

    #[test]
    fn test_join_pairs_by_index() {
        let usdc = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        let dai = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");

        let result = QueryResult::join(
            vec![balance(usdc), balance(dai)],
            vec![metadata("USDC"), metadata("DAI")],
        )
        .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.rows()[0].metadata.symbol, "USDC");
        assert_eq!(result.rows()[1].metadata.symbol, "DAI");
    }

    #[test]
    fn test_join_rejects_length_mismatch() {
        let usdc = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        let dai = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");

        let err = QueryResult::join(
            vec![balance(usdc), balance(dai)],
            vec![metadata("USDC")],
        )
        .unwrap_err();

        assert_eq!(
            err,
            LengthMismatch {
                balances: 2,
                metadata: 1,
            }
        );
    }

    #[test]
    fn test_join_empty_lists() {
        let result = QueryResult::join(vec![], vec![]).unwrap();
        assert!(result.is_empty());
    }
}
