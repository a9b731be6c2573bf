//! Constant-product pricing for uncorrelated Liquidswap pools.
//!
//! The arithmetic here must reproduce the on-chain computation bit-for-bit:
//! the pool contract recomputes the same values when the transaction executes
//! and rejects it if the submitted minimum is not met. Every division is a
//! floor division over unsigned big integers; nothing in the reserve/amount
//! path goes through floating point.

use num_bigint::BigUint;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::common::error::{TradeError, TradeResult};
use crate::constants::liquidswap::FEE_SCALE;
use crate::utils::quote::SwapQuote;

/// Calculates the output amount for an exact-in swap.
///
/// The fee is deducted from the input before it enters the invariant:
///
/// ```text
/// after_fee = amount_in * (10000 - fee_bps) / 10000
/// amount_out = reserve_out - reserve_in * reserve_out / (reserve_in + after_fee)
/// ```
///
/// # Arguments
/// * `reserve_in` - pool reserve on the input side, must be positive
/// * `reserve_out` - pool reserve on the output side, must be positive
/// * `amount_in` - input amount, must be positive
/// * `fee_bps` - pool fee in basis points, `0 <= fee_bps < 10000`
///
/// # Returns
/// * `Ok(BigUint)` - output amount, always strictly below `reserve_out`
/// * `Err(TradeError::Range)` - a precondition was violated
pub fn get_amount_out(
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    amount_in: &BigUint,
    fee_bps: u64,
) -> TradeResult<BigUint> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(TradeError::Range("pool reserves must be positive".to_string()));
    }
    if amount_in.is_zero() {
        return Err(TradeError::Range("input amount must be positive".to_string()));
    }
    if fee_bps >= FEE_SCALE {
        return Err(TradeError::Range(format!(
            "fee {} bps must be below {}",
            fee_bps, FEE_SCALE
        )));
    }

    let after_fee = amount_in * (FEE_SCALE - fee_bps) / FEE_SCALE;
    let new_reserve_in = reserve_in + &after_fee;
    let amount_out = reserve_out - reserve_in * reserve_out / new_reserve_in;
    // The invariant keeps the real-valued output strictly below the reserve;
    // the floor can still land exactly on it for absurdly large inputs. Such
    // a trade would drain the pool and can never execute.
    if &amount_out == reserve_out {
        return Err(TradeError::Range("trade would drain the output reserve".to_string()));
    }
    Ok(amount_out)
}

/// Applies a slippage tolerance to an expected output:
/// `floor(amount_out * (1 - slippage))`.
///
/// `slippage` must be in `[0, 1)`. The decimal factor is applied as an exact
/// rational (`mantissa / 10^scale`) with floor division.
pub fn min_amount_out(amount_out: &BigUint, slippage: Decimal) -> TradeResult<BigUint> {
    let factor = Decimal::ONE - validate_slippage(slippage)?;
    Ok(mul_decimal_floor(amount_out, factor))
}

/// Slippage-adjusted input ceiling for an exact-out swap:
/// `floor(amount_in * (1 + slippage))`.
pub fn max_amount_in(amount_in: &BigUint, slippage: Decimal) -> TradeResult<BigUint> {
    let factor = Decimal::ONE + validate_slippage(slippage)?;
    Ok(mul_decimal_floor(amount_in, factor))
}

/// Full exact-in quote: expected output plus the slippage-floored minimum.
pub fn quote_exact_in(
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    amount_in: &BigUint,
    fee_bps: u64,
    slippage: Decimal,
) -> TradeResult<SwapQuote> {
    let amount_out_expected = get_amount_out(reserve_in, reserve_out, amount_in, fee_bps)?;
    let amount_out_min = min_amount_out(&amount_out_expected, slippage)?;
    Ok(SwapQuote {
        amount_in: amount_in.clone(),
        amount_out_expected,
        amount_out_min,
        fee_bps,
    })
}

fn validate_slippage(slippage: Decimal) -> TradeResult<Decimal> {
    if slippage < Decimal::ZERO || slippage >= Decimal::ONE {
        return Err(TradeError::Range(format!(
            "slippage {} must be within [0, 1)",
            slippage
        )));
    }
    Ok(slippage)
}

/// `floor(value * factor)` for a non-negative decimal factor, computed as
/// `value * mantissa / 10^scale` in big-integer arithmetic.
fn mul_decimal_floor(value: &BigUint, factor: Decimal) -> BigUint {
    let mantissa = BigUint::from(factor.mantissa().unsigned_abs());
    let scale = BigUint::from(10u32).pow(factor.scale());
    value * mantissa / scale
}
