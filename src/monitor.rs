//! Periodic quote evaluation against the latest pool snapshot.

use crate::dex::{Pool, Token, compute_swap, enforce_min_out};
use tokio::sync::watch;
use tracing;

/// Spawn the quote monitoring loop for watch mode.
///
/// On every tick the swap is re-priced against the freshest snapshot; a
/// quote that drops below the authorized minimum is flagged so the trader
/// re-quotes instead of executing stale numbers.
pub async fn spawn_quote_monitor(
    pool_rx: watch::Receiver<Pool>,
    token_in: Token,
    amount_in: f64,
    min_out: f64,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;

            let pool = *pool_rx.borrow();
            match compute_swap(&pool, token_in, amount_in) {
                Ok(res) => match enforce_min_out(res.amount_out, min_out) {
                    Ok(()) => {
                        tracing::info!(
                            amount_in,
                            amount_out = res.amount_out,
                            min_out,
                            price_impact_pct = res.price_impact_pct,
                            reserve0 = pool.reserve0,
                            reserve1 = pool.reserve1,
                            "[QUOTE] refreshed"
                        );
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            amount_out = res.amount_out,
                            min_out,
                            "[SLIPPAGE] quote fell below authorized minimum; re-quote before executing"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "[QUOTE] pricing failed");
                }
            }
        }
    })
}
