//! 32-byte account addresses in the Move address space.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::error::{TradeError, TradeResult};

/// A 32-byte on-chain address. Serializes under BCS as the raw fixed-width
/// byte array, with no length prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(pub [u8; 32]);

impl AccountAddress {
    pub const LENGTH: usize = 32;

    pub const ZERO: AccountAddress = AccountAddress([0u8; 32]);

    /// Address `0x1` of the Aptos framework.
    pub fn one() -> Self {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        Self(bytes)
    }

    /// Parse a `0x`-prefixed hex literal. Short literals are zero-padded on
    /// the left, as the Move tooling does.
    pub fn from_hex_literal(literal: &str) -> TradeResult<Self> {
        let hex_part = literal
            .strip_prefix("0x")
            .ok_or_else(|| TradeError::Parse(format!("address {} missing 0x prefix", literal)))?;
        if hex_part.is_empty() || hex_part.len() > Self::LENGTH * 2 {
            return Err(TradeError::Parse(format!("address {} has invalid length", literal)));
        }
        let padded = format!("{:0>64}", hex_part);
        let raw = hex::decode(&padded)
            .map_err(|e| TradeError::Parse(format!("address {}: {}", literal, e)))?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    /// Short-form hex literal with leading zeros stripped, e.g. `0x1`.
    pub fn to_hex_literal(&self) -> String {
        let full = hex::encode(self.0);
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() { "0x0".to_string() } else { format!("0x{}", trimmed) }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_literal())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_hex_literal())
    }
}
