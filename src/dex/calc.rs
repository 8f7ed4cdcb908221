use crate::dex::state::{Pool, Token};
use thiserror::Error;

/// Failures local to the swap calculator.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("amount_in must be a finite positive number, got {0}")]
    InvalidAmount(f64),

    #[error("slippage too high: received {actual:.6} < min_out {min_out:.6}")]
    SlippageExceeded { actual: f64, min_out: f64 },
}

/// Outcome of pricing a single swap against a pool snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SwapResult {
    /// The requested input amount, echoed unchanged.
    pub amount_in: f64,
    /// Output delivered to the trader.
    pub amount_out: f64,
    /// Percentage move of the pool mid-price caused by this swap.
    pub price_impact_pct: f64,
    /// Hypothetical post-swap reserves; the input pool is left untouched.
    pub new_reserve0: f64,
    pub new_reserve1: f64,
}

/// Price a swap of `amount_in` units of `token_in` against `pool` using the
/// constant-product formula with the LP fee taken on the input side.
///
/// # Arguments
/// * `pool` - Pair snapshot; both reserves must be strictly positive
/// * `token_in` - Which side of the pair is being sold
/// * `amount_in` - Input amount in token units, finite and > 0
///
/// # Returns
/// A [`SwapResult`] with the output amount, price impact, and post-swap
/// reserves. Quotes use `f64` math and are off-chain estimates only: the
/// pair contract settles in integer arithmetic that rounds down, so the
/// on-chain amount can differ in the last decimals.
pub fn compute_swap(pool: &Pool, token_in: Token, amount_in: f64) -> Result<SwapResult, SwapError> {
    if !amount_in.is_finite() || amount_in <= 0.0 {
        return Err(SwapError::InvalidAmount(amount_in));
    }

    let is0_in = token_in == pool.token0;
    let (x, y) = if is0_in {
        (pool.reserve0, pool.reserve1)
    } else {
        (pool.reserve1, pool.reserve0)
    };

    // Fee on input: 25 bps -> 0.0025
    let fee = pool.fee_bps as f64 / 10_000.0;
    let amount_in_after_fee = amount_in * (1.0 - fee);

    // Invariant: (x + dx) * (y - dy) = x * y  =>  dy = (y * dx) / (x + dx)
    let amount_out = (y * amount_in_after_fee) / (x + amount_in_after_fee);

    // The fee portion stays in the pool, so the invariant product grows.
    let new_x = x + amount_in_after_fee;
    let new_y = y - amount_out;

    // Mid-price quoted as output per input, before vs after.
    let price_before = y / x;
    let price_after = new_y / new_x;
    let price_impact_pct = ((price_after - price_before) / price_before).abs() * 100.0;

    let (new_reserve0, new_reserve1) = if is0_in { (new_x, new_y) } else { (new_y, new_x) };

    Ok(SwapResult {
        amount_in,
        amount_out,
        price_impact_pct,
        new_reserve0,
        new_reserve1,
    })
}

/// Enforce the trader-authorized minimum output (slippage check).
///
/// Fails iff `actual_out < min_out`. On failure the caller should re-quote
/// with fresh reserves rather than retry as-is.
pub fn enforce_min_out(actual_out: f64, min_out: f64) -> Result<(), SwapError> {
    if actual_out < min_out {
        return Err(SwapError::SlippageExceeded {
            actual: actual_out,
            min_out,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bnb_busd_pool() -> Pool {
        Pool::new(Token::TBnb, Token::Busd, 100.0, 30_000.0, 25)
    }

    #[test]
    fn quote_matches_closed_form() {
        let pool = bnb_busd_pool();
        let res = compute_swap(&pool, Token::TBnb, 1.0).unwrap();

        // Expected value pinned from the documented formula, not re-derived.
        let after_fee = 1.0 * (1.0 - 25.0 / 10_000.0);
        let expected = 30_000.0 * after_fee / (100.0 + after_fee);

        assert_eq!(res.amount_in, 1.0);
        assert!((res.amount_out - expected).abs() < 1e-9);
        assert!((res.new_reserve0 - (100.0 + after_fee)).abs() < 1e-9);
        assert!((res.new_reserve1 - (30_000.0 - expected)).abs() < 1e-9);
    }

    #[test]
    fn output_positive_and_below_reserve() {
        let pool = bnb_busd_pool();
        for amount_in in [1e-6, 0.5, 1.0, 50.0, 1e6] {
            let res = compute_swap(&pool, Token::TBnb, amount_in).unwrap();
            assert!(res.amount_out > 0.0, "amount_in={amount_in}");
            assert!(res.amount_out < pool.reserve1, "amount_in={amount_in}");

            let rev = compute_swap(&pool, Token::Busd, amount_in).unwrap();
            assert!(rev.amount_out > 0.0, "amount_in={amount_in}");
            assert!(rev.amount_out < pool.reserve0, "amount_in={amount_in}");
        }
    }

    #[test]
    fn invariant_never_decreases() {
        let pool = bnb_busd_pool();
        let k = pool.reserve0 * pool.reserve1;
        for amount_in in [0.01, 1.0, 250.0] {
            let res = compute_swap(&pool, Token::TBnb, amount_in).unwrap();
            let k_after = res.new_reserve0 * res.new_reserve1;
            assert!(k_after >= k - 1e-6, "amount_in={amount_in}");
        }
    }

    #[test]
    fn invariant_preserved_exactly_without_fee() {
        let pool = Pool::new(Token::TBnb, Token::Busd, 100.0, 30_000.0, 0);
        let k = pool.reserve0 * pool.reserve1;
        let res = compute_swap(&pool, Token::TBnb, 3.0).unwrap();
        let k_after = res.new_reserve0 * res.new_reserve1;
        assert!((k_after - k).abs() / k < 1e-12);
    }

    #[test]
    fn higher_fee_strictly_lowers_output() {
        let mut prev = f64::INFINITY;
        for fee_bps in [0, 1, 25, 100, 500, 3_000] {
            let pool = Pool::new(Token::TBnb, Token::Busd, 100.0, 30_000.0, fee_bps);
            let res = compute_swap(&pool, Token::TBnb, 1.0).unwrap();
            assert!(res.amount_out < prev, "fee_bps={fee_bps}");
            prev = res.amount_out;
        }
    }

    #[test]
    fn repeated_calls_are_identical_and_pool_is_untouched() {
        let pool = bnb_busd_pool();
        let a = compute_swap(&pool, Token::TBnb, 2.5).unwrap();
        let b = compute_swap(&pool, Token::TBnb, 2.5).unwrap();
        assert_eq!(a.amount_out, b.amount_out);
        assert_eq!(a.price_impact_pct, b.price_impact_pct);
        assert_eq!(a.new_reserve0, b.new_reserve0);
        assert_eq!(a.new_reserve1, b.new_reserve1);
        assert_eq!(pool.reserve0, 100.0);
        assert_eq!(pool.reserve1, 30_000.0);
    }

    #[test]
    fn busd_in_moves_reserves_the_other_way() {
        let pool = bnb_busd_pool();
        let res = compute_swap(&pool, Token::Busd, 300.0).unwrap();
        assert!(res.new_reserve1 > pool.reserve1);
        assert!(res.new_reserve0 < pool.reserve0);
    }

    #[test]
    fn price_impact_grows_with_trade_size() {
        let pool = bnb_busd_pool();
        let small = compute_swap(&pool, Token::TBnb, 0.1).unwrap();
        let large = compute_swap(&pool, Token::TBnb, 10.0).unwrap();
        assert!(small.price_impact_pct > 0.0);
        assert!(large.price_impact_pct > small.price_impact_pct);
    }

    #[test]
    fn rejects_non_positive_and_non_finite_amounts() {
        let pool = bnb_busd_pool();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let res = compute_swap(&pool, Token::TBnb, bad);
            assert!(
                matches!(res, Err(SwapError::InvalidAmount(_))),
                "expected InvalidAmount for {bad}"
            );
        }
    }

    #[test]
    fn min_out_enforced_iff_actual_below() {
        assert!(matches!(
            enforce_min_out(100.0, 101.0),
            Err(SwapError::SlippageExceeded { .. })
        ));
        assert!(enforce_min_out(100.0, 100.0).is_ok());
        assert!(enforce_min_out(100.0, 99.99).is_ok());
        assert!(enforce_min_out(100.0, 0.0).is_ok());
    }
}
