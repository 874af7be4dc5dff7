pub mod config;

use alloy_primitives::U256;
use workflow::{format_token_amount, QueryResult};

/// Render the query result as a text grid, one token per row.
///
/// Zero balances are skipped, matching the dashboard grid. Tokens without a
/// logo render a `-` placeholder.
pub fn render_grid(result: &QueryResult) -> String {
    let mut grid = String::new();

    for row in result.rows() {
        if row.balance.token_balance == U256::ZERO {
            continue;
        }

        let amount = format_token_amount(row.balance.token_balance, row.metadata.decimals);
        grid.push_str(&format!(
            "{:<10} {:>24} {}\n",
            row.metadata.symbol,
            amount,
            row.metadata.logo.as_deref().unwrap_or("-"),
        ));
    }

    if grid.is_empty() {
        grid.push_str("No ERC-20 balances found.\n");
    }

    grid
}
