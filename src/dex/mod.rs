//! DEX integration for PancakeSwap-V2-style pairs.

use crate::errors::Result;
use crate::utils::wei_to_token;
use ethers::{
    contract::abigen,
    providers::{Http, Provider},
    types::Address,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

pub mod calc;
pub mod state;

pub use calc::{SwapError, SwapResult, compute_swap, enforce_min_out};
pub use state::{Pool, Token};

abigen!(
    PancakePair,
    r#"[
        function getReserves() view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast)
    ]"#,
);

/// Handle for reading reserves from a specific V2-style pair contract.
#[derive(Clone)]
pub struct Dex {
    pair: PancakePair<Provider<Http>>,
}

impl Dex {
    pub async fn new(rpc_url: &str, pair_addr: Address) -> Result<Self> {
        let provider = Arc::new(Provider::<Http>::try_from(rpc_url)?);
        let pair = PancakePair::new(pair_addr, provider);
        pair.get_reserves().call().await?; // sanity-check
        Ok(Self { pair })
    }

    /// Build a `Pool` snapshot from live on-chain reserves.
    ///
    /// Pair composition and fee come from configuration: V2 pairs do not
    /// expose their fee on-chain, and the caller knows which token sits on
    /// which side of the pair.
    pub async fn get_pool(&self, token0: Token, token1: Token, fee_bps: u32) -> Result<Pool> {
        let (reserve0_wei, reserve1_wei, _last_update) = self.pair.get_reserves().call().await?;
        let reserve0 = wei_to_token(reserve0_wei, token0.decimals());
        let reserve1 = wei_to_token(reserve1_wei, token1.decimals());
        Ok(Pool::new(token0, token1, reserve0, reserve1, fee_bps))
    }
}

/// Spawn a background task that periodically refreshes the pool snapshot and
/// publishes it via `watch`. RPC errors are logged and the loop keeps going.
pub async fn spawn_pool_watcher(
    dex: Dex,
    token0: Token,
    token1: Token,
    fee_bps: u32,
    interval_secs: u64,
    tx: watch::Sender<Pool>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            match dex.get_pool(token0, token1, fee_bps).await {
                Ok(pool) => {
                    let _ = tx.send(pool);
                }
                Err(e) => {
                    warn!(error = %e, "[POOL] failed to refresh reserves");
                }
            }
        }
    })
}
