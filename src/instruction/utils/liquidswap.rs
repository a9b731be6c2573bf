//! Liquidswap pool state helpers: resource addressing and reserve parsing.

use num_bigint::BigUint;
use serde::Deserialize;
use serde_json::Value;

use crate::common::error::{TradeError, TradeResult};
use crate::constants::liquidswap::{LIQUIDITY_POOL_MODULE, LIQUIDITY_POOL_STRUCT};

/// Pool reserves in the caller's requested trade direction: `reserve_in` is
/// the side of the coin being sold, `reserve_out` the side being bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolReserves {
    pub reserve_in: BigUint,
    pub reserve_out: BigUint,
}

/// Fully-qualified resource type of a pool,
/// `{script}::liquidity_pool::LiquidityPool<X,Y,Curve>`.
///
/// `coin_x`/`coin_y` must already be in canonical pool order; the caller gets
/// that from [`CoinRegistry::sorted_pair`](crate::common::coin::CoinRegistry).
pub fn pool_resource_type(
    script_address: &str,
    coin_x: &str,
    coin_y: &str,
    curve_type: &str,
) -> String {
    format!(
        "{}::{}::{}<{},{},{}>",
        script_address, LIQUIDITY_POOL_MODULE, LIQUIDITY_POOL_STRUCT, coin_x, coin_y, curve_type
    )
}

#[derive(Debug, Deserialize)]
struct ReserveField {
    value: String,
}

#[derive(Debug, Deserialize)]
struct LiquidityPoolData {
    coin_x_reserve: ReserveField,
    coin_y_reserve: ReserveField,
}

/// Extract the two reserves from a pool resource's `data` object.
///
/// The resource stores reserves in canonical `(X, Y)` order. `swapped` is the
/// flag returned by the pair ordering: when the caller's requested trade
/// direction differs from the canonical order, the two values are exchanged
/// here (exactly once in the whole pipeline) so the result is always
/// positionally `(reserve_in, reserve_out)`.
pub fn parse_pool_reserves(data: &Value, swapped: bool) -> TradeResult<PoolReserves> {
    let pool: LiquidityPoolData = serde_json::from_value(data.clone())
        .map_err(|e| TradeError::Parse(format!("malformed pool resource: {}", e)))?;

    let reserve_x = parse_reserve("coin_x_reserve", &pool.coin_x_reserve.value)?;
    let reserve_y = parse_reserve("coin_y_reserve", &pool.coin_y_reserve.value)?;

    let (reserve_in, reserve_out) =
        if swapped { (reserve_y, reserve_x) } else { (reserve_x, reserve_y) };
    Ok(PoolReserves { reserve_in, reserve_out })
}

fn parse_reserve(field: &str, value: &str) -> TradeResult<BigUint> {
    value
        .parse::<BigUint>()
        .map_err(|e| TradeError::Parse(format!("{} {:?} is not a base-10 integer: {}", field, value, e)))
}
