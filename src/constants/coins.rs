//! 常用代币常量定义
//!
//! 用于硬编码已知代币的 coin type path 和 symbol

/// Aptos Coin (native gas coin)
pub const APTOS_COIN: &str = "0x1::aptos_coin::AptosCoin";

/// USDT (LayerZero bridged, mainnet)
pub const USDT_COIN: &str =
    "0xf22bede237a07e121b56d91a491eb7bcdfd1f5907926a9e58338f964a01b17fa::asset::USDT";

/// USDC (LayerZero bridged, mainnet)
pub const USDC_COIN: &str =
    "0xf22bede237a07e121b56d91a491eb7bcdfd1f5907926a9e58338f964a01b17fa::asset::USDC";
