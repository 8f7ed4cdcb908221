//! Configuration loader and application settings.

use crate::errors::{AppError, Result};

/// BSC testnet public RPC endpoint, used when `RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";

/// Consolidated application configuration, loaded from environment
/// variables (a `.env` file is honored by the binary before loading).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// RPC endpoint for the BSC-compatible node.
    pub rpc_url: String,
    /// Address of the V2-style pair contract to quote against.
    pub pair_address: String,
    /// Symbol sitting on the pair's token0 side.
    pub pool_token0: String,
    /// Symbol sitting on the pair's token1 side.
    pub pool_token1: String,
    /// Symbol being sold.
    pub token_in: String,
    /// Input amount in token units.
    pub amount_in: f64,
    /// Slippage tolerance in percent (0.5 = 0.5%).
    pub slippage_pct: f64,
    /// LP fee in basis points; PancakeSwap V2 pairs charge 25.
    pub fee_bps: u32,
    /// Trader-supplied minimum output, overriding the slippage-derived one.
    pub min_out: Option<f64>,
    /// Snapshot refresh interval for watch mode; 0 quotes once and exits.
    pub watch_secs: u64,
    /// Print the quote as pretty JSON on stdout instead of a log line.
    pub json_output: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.into());
        let pair_address = std::env::var("PAIR_ADDRESS").map_err(|_| {
            AppError::Config("Set PAIR_ADDRESS env var to the pair contract address".into())
        })?;
        let pool_token0 = std::env::var("POOL_TOKEN0").unwrap_or_else(|_| "tBNB".into());
        let pool_token1 = std::env::var("POOL_TOKEN1").unwrap_or_else(|_| "BUSD".into());
        let token_in = std::env::var("TOKEN_IN").unwrap_or_else(|_| "tBNB".into());
        let amount_in: f64 = std::env::var("AMOUNT_IN")
            .map_err(|_| AppError::Config("Set AMOUNT_IN env var to the input amount".into()))?
            .parse()?;
        let slippage_pct: f64 = std::env::var("SLIPPAGE_PCT")
            .unwrap_or_else(|_| "0.5".into())
            .parse()?;
        let fee_bps: u32 = std::env::var("FEE_BPS")
            .unwrap_or_else(|_| "25".into())
            .parse()?;
        let min_out = match std::env::var("MIN_OUT") {
            Ok(raw) => Some(raw.parse()?),
            Err(_) => None,
        };
        let watch_secs: u64 = std::env::var("WATCH_SECS")
            .unwrap_or_else(|_| "0".into())
            .parse()?;
        let json_output = std::env::var("OUTPUT_JSON").unwrap_or_else(|_| "0".into()) == "1";

        Ok(Self {
            rpc_url,
            pair_address,
            pool_token0,
            pool_token1,
            token_in,
            amount_in,
            slippage_pct,
            fee_bps,
            min_out,
            watch_secs,
            json_output,
        })
    }
}
