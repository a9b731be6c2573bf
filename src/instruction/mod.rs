pub mod liquidswap;
pub mod utils;

pub use liquidswap::{SwapDirection, SwapParams, build_swap_payload};
