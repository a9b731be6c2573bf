//! Liquidswap protocol constants.

/// Mainnet address of the Liquidswap modules (scripts, liquidity_pool, curves).
pub const MAINNET_SCRIPT_ADDRESS: &str =
    "0x190d44266241744264b964a37b8f09863167a12d3e70cda39376cfb4e3561e12";

/// Mainnet resource account that holds the `LiquidityPool` resources.
pub const MAINNET_POOL_ADDRESS: &str =
    "0x05a97986a9d031c4567e15b797be516910cfcb4156312482efc6a19c0a30c948";

/// Module that exposes the swap entry functions.
pub const SCRIPTS_MODULE: &str = "scripts";

/// Module that stores the pool resources.
pub const LIQUIDITY_POOL_MODULE: &str = "liquidity_pool";

/// Struct name of the pool resource.
pub const LIQUIDITY_POOL_STRUCT: &str = "LiquidityPool";

/// Constant-product curve marker struct (module path relative to the script
/// address).
pub const UNCORRELATED_CURVE: &str = "curves::Uncorrelated";

/// Default pool fee for uncorrelated pools, in basis points.
pub const DEFAULT_FEE_BPS: u64 = 30;

/// Fee denominator: fee_bps is quoted out of this.
pub const FEE_SCALE: u64 = 10_000;

/// Default slippage tolerance, in basis points (0.50%).
pub const DEFAULT_SLIPPAGE_BPS: u64 = 50;
