use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported token symbols. Closed set so that a typo in configuration
/// fails at parse time instead of producing a nonsense quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Token {
    /// Testnet BNB (wrapped as WBNB on-chain).
    #[serde(rename = "tBNB")]
    TBnb,
    /// Binance-pegged USD stablecoin.
    #[serde(rename = "BUSD")]
    Busd,
}

impl Token {
    /// On-chain decimals; both BSC testnet tokens use 18.
    pub fn decimals(self) -> u8 {
        match self {
            Token::TBnb => 18,
            Token::Busd => 18,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::TBnb => write!(f, "tBNB"),
            Token::Busd => write!(f, "BUSD"),
        }
    }
}

impl FromStr for Token {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Accept the wrapped symbol too; the pair contract holds WBNB.
        if s.eq_ignore_ascii_case("tbnb") || s.eq_ignore_ascii_case("wbnb") {
            Ok(Token::TBnb)
        } else if s.eq_ignore_ascii_case("busd") {
            Ok(Token::Busd)
        } else {
            Err(AppError::Config(format!(
                "unknown token symbol: {s} (expected tBNB or BUSD)"
            )))
        }
    }
}

/// Minimal immutable snapshot of a constant-product pair needed for quoting.
///
/// Reserves are in token units (not wei). A swap may only be priced against
/// a snapshot with both reserves strictly positive.
#[derive(Clone, Copy, Debug)]
pub struct Pool {
    pub token0: Token,
    pub token1: Token,
    /// Reserve backing `token0`.
    pub reserve0: f64,
    /// Reserve backing `token1`.
    pub reserve1: f64,
    /// Liquidity-provider fee in basis points, 0–10000 inclusive (25 = 0.25%).
    pub fee_bps: u32,
}

impl Pool {
    pub fn new(token0: Token, token1: Token, reserve0: f64, reserve1: f64, fee_bps: u32) -> Self {
        Self {
            token0,
            token1,
            reserve0,
            reserve1,
            fee_bps,
        }
    }
}
