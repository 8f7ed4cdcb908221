//! Shared data structures used throughout the application.

use crate::dex::{Pool, SwapResult, Token};
use serde::Serialize;

/// Full quote for swapping a fixed input amount against a pool snapshot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quote {
    pub token_in: Token,
    pub token_out: Token,
    pub amount_in: f64,
    pub amount_out: f64,
    /// Minimum acceptable output after applying the slippage tolerance.
    pub min_out: f64,
    /// Slippage tolerance in percent (0.5 = 0.5%).
    pub slippage_pct: f64,
    pub price_impact_pct: f64,
    /// Liquidity-provider fee in basis points.
    pub fee_bps: u32,
    pub new_reserve0: f64,
    pub new_reserve1: f64,
}

impl Quote {
    pub fn from_result(pool: &Pool, token_in: Token, result: &SwapResult, slippage_pct: f64) -> Self {
        let token_out = if token_in == pool.token0 {
            pool.token1
        } else {
            pool.token0
        };
        Self {
            token_in,
            token_out,
            amount_in: result.amount_in,
            amount_out: result.amount_out,
            min_out: min_out_with_slippage(result.amount_out, slippage_pct),
            slippage_pct,
            price_impact_pct: result.price_impact_pct,
            fee_bps: pool.fee_bps,
            new_reserve0: result.new_reserve0,
            new_reserve1: result.new_reserve1,
        }
    }
}

/// Derive the minimum acceptable output from a quoted output and a slippage
/// tolerance in percent.
pub fn min_out_with_slippage(quoted_out: f64, slippage_pct: f64) -> f64 {
    quoted_out * (1.0 - slippage_pct / 100.0)
}
