//! Coin metadata registry and canonical pair ordering.
//!
//! Liquidswap instantiates a pool's generic parameters in one canonical
//! order; a swap request may name the coins in either order. The comparison
//! here must reproduce the on-chain ordering rule exactly, otherwise the
//! reserve values read from the pool resource get attributed to the wrong
//! side of the trade.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::common::error::{TradeError, TradeResult};
use crate::constants::coins::{APTOS_COIN, USDC_COIN, USDT_COIN};

/// Static metadata for one registered coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinInfo {
    /// Short ticker, e.g. `APT`.
    pub symbol: String,
    /// Number of decimal places of the on-chain amount representation.
    pub decimals: u8,
}

impl CoinInfo {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self { symbol: symbol.into(), decimals }
    }
}

/// Read-only mapping from coin type path to [`CoinInfo`].
///
/// Built once by the process entry point and passed by reference; never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CoinRegistry {
    coins: HashMap<String, CoinInfo>,
}

impl CoinRegistry {
    pub fn new() -> Self {
        Self { coins: HashMap::new() }
    }

    /// Registry seeded with the well-known mainnet coins.
    pub fn mainnet() -> Self {
        let mut registry = Self::new();
        registry.insert(APTOS_COIN, CoinInfo::new("APT", 8));
        registry.insert(USDT_COIN, CoinInfo::new("USDT", 6));
        registry.insert(USDC_COIN, CoinInfo::new("USDC", 6));
        registry
    }

    /// Register a coin. Intended for construction time only.
    pub fn insert(&mut self, coin_type: impl Into<String>, info: CoinInfo) {
        self.coins.insert(coin_type.into(), info);
    }

    pub fn get(&self, coin_type: &str) -> Option<&CoinInfo> {
        self.coins.get(coin_type)
    }

    /// Look up a coin, failing with a configuration error when it is unknown.
    pub fn info(&self, coin_type: &str) -> TradeResult<&CoinInfo> {
        self.coins.get(coin_type).ok_or_else(|| {
            TradeError::Configuration(format!("coin {} is not registered", coin_type))
        })
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// True when `(coin_x, coin_y)` already matches the canonical pool order.
    pub fn is_sorted(&self, coin_x: &str, coin_y: &str) -> TradeResult<bool> {
        Ok(self.compare_coins(coin_x, coin_y)? == Ordering::Less)
    }

    /// Canonicalize a requested `(from, to)` pair into the pool's `(X, Y)`
    /// order. Returns the pair plus whether the request order was swapped.
    pub fn sorted_pair<'a>(
        &self,
        from_coin: &'a str,
        to_coin: &'a str,
    ) -> TradeResult<((&'a str, &'a str), bool)> {
        if self.is_sorted(from_coin, to_coin)? {
            Ok(((from_coin, to_coin), false))
        } else {
            Ok(((to_coin, from_coin), true))
        }
    }

    /// Total order over registered coins: byte-wise over symbols, with the
    /// full type path as tie-breaker so distinct coins never compare equal.
    fn compare_coins(&self, coin_x: &str, coin_y: &str) -> TradeResult<Ordering> {
        if coin_x.is_empty() || coin_y.is_empty() {
            return Err(TradeError::Configuration("coin type must not be empty".to_string()));
        }
        if coin_x == coin_y {
            return Err(TradeError::Configuration(format!(
                "cannot trade {} against itself",
                coin_x
            )));
        }
        let info_x = self.info(coin_x)?;
        let info_y = self.info(coin_y)?;
        let by_symbol = info_x.symbol.as_bytes().cmp(info_y.symbol.as_bytes());
        Ok(match by_symbol {
            Ordering::Equal => coin_x.as_bytes().cmp(coin_y.as_bytes()),
            other => other,
        })
    }
}
