pub mod liquidswap;
