/// Quote result types for swap routing.
///
/// This module provides a common result type so higher layers can compare
/// quotes using a consistent shape.
use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    /// Input amount (in smallest units).
    pub amount_in: BigUint,
    /// Expected output amount before slippage (in smallest units).
    pub amount_out_expected: BigUint,
    /// Minimum acceptable output after the slippage tolerance.
    pub amount_out_min: BigUint,
    /// Pool fee applied to the input side, in basis points.
    pub fee_bps: u64,
}
