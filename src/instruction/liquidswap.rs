//! Liquidswap swap payload construction.
//!
//! The entry points of the `scripts` module are described by ABI templates
//! (BCS bytes shipped with the SDK, module address zeroed). Building a
//! payload is: parse template → bind script address → bind type and literal
//! arguments → BCS-encode. Parsing happens once per process; the templates
//! are immutable afterwards.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::abi::{
    AbiValue, AccountAddress, EncodedPayload, EntryFunction, EntryFunctionAbi, ModuleId, TypeTag,
};
use crate::common::error::{TradeError, TradeResult};
use crate::utils::calc::constant_product::{max_amount_in, min_amount_out};

/// ABI of `scripts::swap` (exact-in): trade `coin_val` of `X` for at least
/// `coin_out_min_val` of `Y`. Module address zeroed, bound at build time.
const SWAP_ABI_HEX: &str = concat!(
    "010473776170",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0773637269707473a501205377617020657861637420636f696e2060586020666f7220617420",
    "6c65617374206d696e696d756d20636f696e206059602e0a202a2060636f696e5f76616c6020",
    "2d20616d6f756e74206f6620636f696e732060586020746f20737761702e0a202a2060636f69",
    "6e5f6f75745f6d696e5f76616c60202d206d696e696d756d20657870656374656420616d6f75",
    "6e74206f6620636f696e732060596020746f206765742e",
    "03017801790563757276650208636f696e5f76616c0210636f696e5f6f75745f6d696e5f7661",
    "6c02"
);

/// ABI of `scripts::swap_into` (exact-out): spend at most `coin_val_max` of
/// `X` to receive exactly `coin_out` of `Y`.
const SWAP_INTO_ABI_HEX: &str = concat!(
    "0109737761705f696e746f",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0773637269707473ab012053776170206d6178696d756d20636f696e2060586020666f722065",
    "7861637420636f696e206059602e0a202a2060636f696e5f76616c5f6d617860202d20686f77",
    "206d756368206f6620636f696e73206058602063616e206265207573656420746f2067657420",
    "60596020636f696e2e0a202a2060636f696e5f6f757460202d20686f77206d756368206f6620",
    "636f696e73206059602073686f756c642062652072657475726e65642e",
    "0301780179056375727665020c636f696e5f76616c5f6d61780208636f696e5f6f757402"
);

static SWAP_ABI: Lazy<TradeResult<EntryFunctionAbi>> =
    Lazy::new(|| EntryFunctionAbi::from_hex(SWAP_ABI_HEX));

static SWAP_INTO_ABI: Lazy<TradeResult<EntryFunctionAbi>> =
    Lazy::new(|| EntryFunctionAbi::from_hex(SWAP_INTO_ABI_HEX));

fn swap_abi() -> TradeResult<EntryFunctionAbi> {
    SWAP_ABI.as_ref().map(Clone::clone).map_err(Clone::clone)
}

fn swap_into_abi() -> TradeResult<EntryFunctionAbi> {
    SWAP_INTO_ABI.as_ref().map(Clone::clone).map_err(Clone::clone)
}

/// Which side of the trade is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// `amount_in` is exact; slippage lowers the acceptable output.
    ExactIn,
    /// `amount_out` is exact; slippage raises the spendable input.
    ExactOut,
}

/// Everything needed to build one swap payload.
#[derive(Debug, Clone)]
pub struct SwapParams {
    /// Address the Liquidswap modules are published under.
    pub script_address: String,
    /// Coin being sold, as a fully-qualified type path.
    pub from_coin: String,
    /// Coin being bought.
    pub to_coin: String,
    /// Input amount (exact for `ExactIn`, pre-slippage for `ExactOut`).
    pub amount_in: BigUint,
    /// Output amount (quoted for `ExactIn`, exact for `ExactOut`).
    pub amount_out: BigUint,
    pub direction: SwapDirection,
    /// Tolerated deviation, in `[0, 1)`.
    pub slippage: Decimal,
    /// Curve marker struct, e.g. `0x..::curves::Uncorrelated`.
    pub curve_type: String,
}

/// Build the BCS entry-function payload for a swap.
///
/// Type arguments are `[from, to, curve]`; the two `u64` literals depend on
/// the direction. Fails before producing any bytes when the pair is
/// degenerate, a type path does not parse, an amount does not fit `u64`, or
/// the arguments do not match the template.
pub fn build_swap_payload(params: &SwapParams) -> TradeResult<EncodedPayload> {
    if params.from_coin == params.to_coin {
        return Err(TradeError::Configuration(format!(
            "cannot swap {} for itself",
            params.from_coin
        )));
    }

    let script_address = AccountAddress::from_hex_literal(&params.script_address)?;
    let ty_args = vec![
        TypeTag::parse(&params.from_coin)?,
        TypeTag::parse(&params.to_coin)?,
        TypeTag::parse(&params.curve_type)?,
    ];

    let (abi, first, second) = match params.direction {
        SwapDirection::ExactIn => {
            let min_out = min_amount_out(&params.amount_out, params.slippage)?;
            (swap_abi()?, to_u64("amount_in", &params.amount_in)?, to_u64("min_out", &min_out)?)
        }
        SwapDirection::ExactOut => {
            let max_in = max_amount_in(&params.amount_in, params.slippage)?;
            (swap_into_abi()?, to_u64("max_in", &max_in)?, to_u64("amount_out", &params.amount_out)?)
        }
    };

    let payload = abi
        .with_module_address(script_address)
        .encode_call(ty_args, &[AbiValue::U64(first), AbiValue::U64(second)])?;
    tracing::debug!(
        from = %params.from_coin,
        to = %params.to_coin,
        bytes = payload.bytes.len(),
        "built swap payload"
    );
    Ok(payload)
}

/// `0x1::coin::CoinStore<T>` resource type of an account's holding of `T`.
/// Its presence is what "registered" means.
pub fn coin_store_type(coin_type: &str) -> String {
    format!("0x1::coin::CoinStore<{}>", coin_type)
}

/// Payload for `0x1::managed_coin::register`, which a recipient account must
/// have executed once per coin before it can receive that coin.
pub fn build_register_coin_payload(coin_type: &str) -> TradeResult<EncodedPayload> {
    let coin = TypeTag::parse(coin_type)?;
    let entry = EntryFunction::new(
        ModuleId::new(AccountAddress::one(), "managed_coin"),
        "register",
        vec![coin],
        vec![],
    );
    EncodedPayload::from_entry_function(entry)
}

fn to_u64(label: &str, value: &BigUint) -> TradeResult<u64> {
    value.to_u64().ok_or_else(|| {
        TradeError::Range(format!("{} {} does not fit an unsigned 64-bit integer", label, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::TransactionPayload;

    const SCRIPT: &str = "0x190d44266241744264b964a37b8f09863167a12d3e70cda39376cfb4e3561e12";

    fn params() -> SwapParams {
        SwapParams {
            script_address: SCRIPT.to_string(),
            from_coin: "0x1::aptos_coin::AptosCoin".to_string(),
            to_coin: format!("{}::asset::USDT", SCRIPT),
            amount_in: BigUint::from(100_000u64),
            amount_out: BigUint::from(181_323u64),
            direction: SwapDirection::ExactIn,
            slippage: Decimal::new(5, 3),
            curve_type: format!("{}::curves::Uncorrelated", SCRIPT),
        }
    }

    #[test]
    fn test_swap_template_parses() {
        let abi = swap_abi().unwrap();
        assert_eq!(abi.name, "swap");
        assert_eq!(abi.module_name.name, "scripts");
        assert_eq!(abi.module_name.address, AccountAddress::ZERO);
        assert_eq!(abi.ty_args.len(), 3);
        let arg_names: Vec<&str> = abi.args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(arg_names, ["coin_val", "coin_out_min_val"]);
        assert!(abi.args.iter().all(|a| a.type_tag == TypeTag::U64));
    }

    #[test]
    fn test_swap_into_template_parses() {
        let abi = swap_into_abi().unwrap();
        assert_eq!(abi.name, "swap_into");
        let arg_names: Vec<&str> = abi.args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(arg_names, ["coin_val_max", "coin_out"]);
    }

    #[test]
    fn test_exact_in_payload() {
        let payload = build_swap_payload(&params()).unwrap();
        let TransactionPayload::EntryFunction(entry) = &payload.payload else {
            panic!("expected entry function payload");
        };
        assert_eq!(entry.function, "swap");
        assert_eq!(entry.module.address.to_hex_literal(), SCRIPT);
        assert_eq!(entry.module.name, "scripts");
        assert_eq!(entry.ty_args.len(), 3);
        // coin_val = 100_000, coin_out_min_val = floor(181_323 * 0.995)
        assert_eq!(entry.args[0], 100_000u64.to_le_bytes().to_vec());
        assert_eq!(entry.args[1], 180_416u64.to_le_bytes().to_vec());
    }

    #[test]
    fn test_exact_out_payload() {
        let mut p = params();
        p.direction = SwapDirection::ExactOut;
        let payload = build_swap_payload(&p).unwrap();
        let TransactionPayload::EntryFunction(entry) = &payload.payload else {
            panic!("expected entry function payload");
        };
        assert_eq!(entry.function, "swap_into");
        // coin_val_max = floor(100_000 * 1.005), coin_out = 181_323
        assert_eq!(entry.args[0], 100_500u64.to_le_bytes().to_vec());
        assert_eq!(entry.args[1], 181_323u64.to_le_bytes().to_vec());
    }

    #[test]
    fn test_payload_bytes_are_deterministic() {
        let a = build_swap_payload(&params()).unwrap();
        let b = build_swap_payload(&params()).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_same_coin_is_rejected() {
        let mut p = params();
        p.to_coin = p.from_coin.clone();
        let err = build_swap_payload(&p).unwrap_err();
        assert!(matches!(err, TradeError::Configuration(_)));
    }

    #[test]
    fn test_oversized_amount_is_range_error() {
        let mut p = params();
        p.amount_in = BigUint::from(u64::MAX) + 1u32;
        let err = build_swap_payload(&p).unwrap_err();
        assert!(matches!(err, TradeError::Range(_)));
    }

    #[test]
    fn test_register_coin_payload() {
        let payload = build_register_coin_payload("0x1::aptos_coin::AptosCoin").unwrap();
        let TransactionPayload::EntryFunction(entry) = &payload.payload else {
            panic!("expected entry function payload");
        };
        assert_eq!(entry.function, "register");
        assert_eq!(entry.module.name, "managed_coin");
        assert_eq!(entry.ty_args.len(), 1);
        assert!(entry.args.is_empty());
    }

    #[test]
    fn test_coin_store_type() {
        assert_eq!(
            coin_store_type("0x1::aptos_coin::AptosCoin"),
            "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>"
        );
    }
}
