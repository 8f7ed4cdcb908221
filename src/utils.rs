//! Miscellaneous helper utilities.

use bigdecimal::BigDecimal;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Convert a raw on-chain integer amount into token units as `f64`.
///
/// Goes through `BigDecimal` so reserves above 2^53 wei keep all their
/// digits until the final division, instead of losing precision twice.
pub fn wei_to_token(wei: u128, decimals: u8) -> f64 {
    let scale = BigDecimal::from(10u128.pow(decimals as u32));
    let tokens = BigDecimal::from(wei) / scale;
    tokens.to_string().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_whole_token() {
        assert_eq!(wei_to_token(1_000_000_000_000_000_000, 18), 1.0);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(wei_to_token(0, 18), 0.0);
    }

    #[test]
    fn fractional_amounts_survive() {
        // 0.9975 of an 18-decimal token
        assert_eq!(wei_to_token(997_500_000_000_000_000, 18), 0.9975);
    }

    #[test]
    fn large_reserves_keep_leading_digits() {
        // 123 456 789 tokens at 18 decimals: 26 significant digits in wei,
        // more than f64 integer precision holds.
        let wei = 123_456_789_000_000_000_000_000_000u128;
        let tokens = wei_to_token(wei, 18);
        assert!((tokens - 123_456_789.0).abs() < 1e-3);
    }
}
