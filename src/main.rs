use anyhow::Result;
use ethers::types::Address;
use swap_quoter::{
    config::AppConfig,
    dex::{self, Dex, Token, compute_swap, enforce_min_out},
    models::Quote,
    monitor, utils,
};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    // Configuration
    let cfg = AppConfig::load()?;
    let token0: Token = cfg.pool_token0.parse()?;
    let token1: Token = cfg.pool_token1.parse()?;
    if token0 == token1 {
        anyhow::bail!("POOL_TOKEN0 and POOL_TOKEN1 must differ, got {token0} twice");
    }
    let token_in: Token = cfg.token_in.parse()?;
    let pair_addr: Address = cfg.pair_address.parse()?;

    tracing::info!(
        %token_in,
        amount_in = cfg.amount_in,
        slippage_pct = cfg.slippage_pct,
        fee_bps = cfg.fee_bps,
        "[INIT] swap-quoter starting"
    );

    // Live reserves -> pool snapshot -------------------------------------
    let dex = Dex::new(&cfg.rpc_url, pair_addr).await?;
    let pool = dex.get_pool(token0, token1, cfg.fee_bps).await?;
    tracing::info!(
        reserve0 = pool.reserve0,
        reserve1 = pool.reserve1,
        "[POOL] snapshot fetched"
    );

    // Quote ---------------------------------------------------------------
    let result = compute_swap(&pool, token_in, cfg.amount_in)?;
    let quote = Quote::from_result(&pool, token_in, &result, cfg.slippage_pct);

    if cfg.json_output {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        tracing::info!(
            token_in = %quote.token_in,
            token_out = %quote.token_out,
            amount_in = quote.amount_in,
            amount_out = quote.amount_out,
            min_out = quote.min_out,
            price_impact_pct = quote.price_impact_pct,
            fee_bps = quote.fee_bps,
            "[QUOTE] swap quote"
        );
    }

    // Trader-supplied floor wins over the slippage-derived one.
    let min_out = cfg.min_out.unwrap_or(quote.min_out);
    enforce_min_out(result.amount_out, min_out)?;

    // Watch mode ----------------------------------------------------------
    if cfg.watch_secs > 0 {
        let (pool_tx, pool_rx) = watch::channel(pool);
        let pool_task = dex::spawn_pool_watcher(
            dex.clone(),
            token0,
            token1,
            cfg.fee_bps,
            cfg.watch_secs,
            pool_tx,
        )
        .await;
        let monitor_task =
            monitor::spawn_quote_monitor(pool_rx, token_in, cfg.amount_in, min_out, cfg.watch_secs)
                .await;
        tracing::info!(interval_secs = cfg.watch_secs, "[INIT] watch mode started");

        // Wait indefinitely for the watcher tasks (they never finish)
        let _ = futures::join!(pool_task, monitor_task);
    }

    Ok(())
}
