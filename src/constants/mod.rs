pub mod coins;
pub mod liquidswap;

pub use coins::*;
pub use liquidswap::*;
