//! Core library for the swap-quoter project.
//!
//! Quotes token swaps against a PancakeSwap-V2-style constant-product
//! pair on BSC testnet: fetch live reserves, price the trade off-chain,
//! and guard the result with a minimum-output slippage check.

pub mod config;
pub mod dex;
pub mod errors;
pub mod models;
pub mod monitor;
pub mod utils;
