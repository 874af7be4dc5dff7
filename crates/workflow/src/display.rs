//! Balance display formatting.

use alloy_primitives::{utils::format_units, U256};

/// Number of fractional digits shown for every balance.
const DISPLAY_DECIMALS: usize = 6;

/// Format a raw token amount for display, fixed to six fractional digits.
///
/// The fractional part is truncated, not rounded. Amounts whose decimals
/// exceed what `format_units` supports fall back to the raw integer value.
pub fn format_token_amount(amount: U256, decimals: u8) -> String {
    let units = format_units(amount, decimals).unwrap_or_else(|_| amount.to_string());

    match units.split_once('.') {
        Some((int, frac)) => format!("{}.{:0<width$.width$}", int, frac, width = DISPLAY_DECIMALS),
        None => format!("{}.{:0<width$}", units, "", width = DISPLAY_DECIMALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_whole_token() {
        let amount = U256::from(1_000_000_000_000_000_000u64);
        assert_eq!(format_token_amount(amount, 18), "1.000000");
    }

    #[test]
    fn test_fraction_is_truncated() {
        let amount = U256::from(1_234_567_890_123_456_789u64);
        assert_eq!(format_token_amount(amount, 18), "1.234567");
    }

    #[test]
    fn test_short_fraction_is_padded() {
        // 123.45 with 6 decimals
        let amount = U256::from(123_450_000u64);
        assert_eq!(format_token_amount(amount, 6), "123.450000");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(format_token_amount(U256::from(42u64), 0), "42.000000");
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(format_token_amount(U256::ZERO, 18), "0.000000");
    }
}
