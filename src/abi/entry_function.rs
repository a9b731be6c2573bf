//! Typed entry-function ABI templates.
//!
//! A template describes one callable entry function: its name, the module
//! that hosts it, a doc string, the type-parameter slots, and the declared
//! argument types. Templates are shipped as BCS bytes with a zeroed module
//! address; they are parsed once into this typed form, the real address is
//! bound on the parsed value, and only then are literal arguments checked
//! and encoded. Binding never patches template bytes.

use serde::{Deserialize, Serialize};

use crate::abi::address::AccountAddress;
use crate::abi::payload::{EncodedPayload, EntryFunction, ModuleId};
use crate::abi::type_tag::TypeTag;
use crate::common::error::{TradeError, TradeResult};

/// Template kind space. The 1-byte kind marker at the start of a template is
/// this enum's variant index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptAbi {
    TransactionScript(TransactionScriptAbi),
    EntryFunction(EntryFunctionAbi),
}

/// Legacy compiled-script ABI. Carried for wire-format completeness; this
/// crate only ever binds entry functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionScriptAbi {
    pub name: String,
    pub doc: String,
    pub code: Vec<u8>,
    pub ty_args: Vec<TypeArgumentAbi>,
    pub args: Vec<ArgumentAbi>,
}

/// Parsed entry-function template. Field order matches the wire layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunctionAbi {
    pub name: String,
    pub module_name: ModuleId,
    pub doc: String,
    pub ty_args: Vec<TypeArgumentAbi>,
    pub args: Vec<ArgumentAbi>,
}

/// One named type-parameter slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeArgumentAbi {
    pub name: String,
}

/// One declared argument: name plus its type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentAbi {
    pub name: String,
    pub type_tag: TypeTag,
}

impl EntryFunctionAbi {
    /// Parse a template from its BCS bytes. Trailing bytes, truncation, or a
    /// non-entry-function kind marker all fail up front.
    pub fn from_bytes(bytes: &[u8]) -> TradeResult<Self> {
        let abi: ScriptAbi = bcs::from_bytes(bytes)
            .map_err(|e| TradeError::Protocol(format!("template does not parse: {}", e)))?;
        match abi {
            ScriptAbi::EntryFunction(abi) => Ok(abi),
            ScriptAbi::TransactionScript(abi) => Err(TradeError::Protocol(format!(
                "template {} is a transaction script, not an entry function",
                abi.name
            ))),
        }
    }

    /// Parse a template from a hex string.
    pub fn from_hex(s: &str) -> TradeResult<Self> {
        let bytes = hex::decode(s)
            .map_err(|e| TradeError::Protocol(format!("template is not valid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Bind the real module address, replacing the template's placeholder.
    pub fn with_module_address(mut self, address: AccountAddress) -> Self {
        self.module_name.address = address;
        self
    }

    /// Bind type arguments and literal arguments against this template and
    /// produce the submittable payload.
    ///
    /// Fails with `Encoding` when the counts or per-slot types do not match
    /// the template; no bytes are produced on failure.
    pub fn encode_call(
        &self,
        ty_args: Vec<TypeTag>,
        args: &[AbiValue],
    ) -> TradeResult<EncodedPayload> {
        if ty_args.len() != self.ty_args.len() {
            return Err(TradeError::Encoding(format!(
                "{} expects {} type arguments, got {}",
                self.name,
                self.ty_args.len(),
                ty_args.len()
            )));
        }
        if args.len() != self.args.len() {
            return Err(TradeError::Encoding(format!(
                "{} expects {} arguments, got {}",
                self.name,
                self.args.len(),
                args.len()
            )));
        }

        let mut encoded_args = Vec::with_capacity(args.len());
        for (value, slot) in args.iter().zip(&self.args) {
            if !value.matches(&slot.type_tag) {
                return Err(TradeError::Encoding(format!(
                    "argument {} of {} expects {}, got {}",
                    slot.name,
                    self.name,
                    slot.type_tag,
                    value.kind()
                )));
            }
            encoded_args.push(value.to_bcs()?);
        }

        let entry = EntryFunction::new(
            self.module_name.clone(),
            self.name.clone(),
            ty_args,
            encoded_args,
        );
        EncodedPayload::from_entry_function(entry)
    }
}

/// A literal argument value for an entry-function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    Bool(bool),
    U8(u8),
    U64(u64),
    U128(u128),
    Address(AccountAddress),
}

impl AbiValue {
    /// Parse a base-10 string into a `u64` argument. Overflow is reported as
    /// a range violation, anything non-numeric as a parse failure.
    pub fn u64_from_str(s: &str) -> TradeResult<Self> {
        use std::num::IntErrorKind;
        match s.parse::<u64>() {
            Ok(v) => Ok(AbiValue::U64(v)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(TradeError::Range(format!(
                "amount {} does not fit an unsigned 64-bit integer",
                s
            ))),
            Err(e) => Err(TradeError::Parse(format!("amount {}: {}", s, e))),
        }
    }

    fn matches(&self, tag: &TypeTag) -> bool {
        matches!(
            (self, tag),
            (AbiValue::Bool(_), TypeTag::Bool)
                | (AbiValue::U8(_), TypeTag::U8)
                | (AbiValue::U64(_), TypeTag::U64)
                | (AbiValue::U128(_), TypeTag::U128)
                | (AbiValue::Address(_), TypeTag::Address)
        )
    }

    fn kind(&self) -> &'static str {
        match self {
            AbiValue::Bool(_) => "bool",
            AbiValue::U8(_) => "u8",
            AbiValue::U64(_) => "u64",
            AbiValue::U128(_) => "u128",
            AbiValue::Address(_) => "address",
        }
    }

    /// Encode the value to its own BCS byte string (fixed-width
    /// little-endian for the integer kinds).
    fn to_bcs(&self) -> TradeResult<Vec<u8>> {
        let result = match self {
            AbiValue::Bool(v) => bcs::to_bytes(v),
            AbiValue::U8(v) => bcs::to_bytes(v),
            AbiValue::U64(v) => bcs::to_bytes(v),
            AbiValue::U128(v) => bcs::to_bytes(v),
            AbiValue::Address(v) => bcs::to_bytes(v),
        };
        result.map_err(|e| TradeError::Encoding(format!("argument serialization failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_u64_abi() -> EntryFunctionAbi {
        EntryFunctionAbi {
            name: "swap".to_string(),
            module_name: ModuleId::new(AccountAddress::ZERO, "scripts"),
            doc: String::new(),
            ty_args: vec![
                TypeArgumentAbi { name: "x".to_string() },
                TypeArgumentAbi { name: "y".to_string() },
            ],
            args: vec![
                ArgumentAbi { name: "coin_val".to_string(), type_tag: TypeTag::U64 },
                ArgumentAbi { name: "coin_out_min_val".to_string(), type_tag: TypeTag::U64 },
            ],
        }
    }

    #[test]
    fn test_template_round_trip_through_bytes() {
        let abi = two_u64_abi();
        let bytes = bcs::to_bytes(&ScriptAbi::EntryFunction(abi.clone())).unwrap();
        assert_eq!(bytes[0], 1); // entry-function kind marker
        let parsed = EntryFunctionAbi::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, abi);
    }

    #[test]
    fn test_truncated_template_is_protocol_error() {
        let abi = two_u64_abi();
        let bytes = bcs::to_bytes(&ScriptAbi::EntryFunction(abi)).unwrap();
        let err = EntryFunctionAbi::from_bytes(&bytes[..bytes.len() - 3]).unwrap_err();
        assert!(matches!(err, TradeError::Protocol(_)));
    }

    #[test]
    fn test_trailing_bytes_are_protocol_error() {
        let abi = two_u64_abi();
        let mut bytes = bcs::to_bytes(&ScriptAbi::EntryFunction(abi)).unwrap();
        bytes.push(0xff);
        let err = EntryFunctionAbi::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, TradeError::Protocol(_)));
    }

    #[test]
    fn test_script_kind_is_rejected() {
        let script = ScriptAbi::TransactionScript(TransactionScriptAbi {
            name: "main".to_string(),
            doc: String::new(),
            code: vec![0xa1, 0x1c, 0xeb, 0x0b],
            ty_args: vec![],
            args: vec![],
        });
        let bytes = bcs::to_bytes(&script).unwrap();
        assert_eq!(bytes[0], 0);
        let err = EntryFunctionAbi::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, TradeError::Protocol(_)));
    }

    #[test]
    fn test_address_binding_is_structural() {
        let addr = AccountAddress::from_hex_literal("0xdead").unwrap();
        let bound = two_u64_abi().with_module_address(addr);
        assert_eq!(bound.module_name.address, addr);
        assert_eq!(bound.module_name.name, "scripts");
    }

    #[test]
    fn test_encode_call_happy_path() {
        let abi = two_u64_abi().with_module_address(AccountAddress::one());
        let ty_args = vec![TypeTag::U64, TypeTag::U64];
        let payload = abi
            .encode_call(ty_args, &[AbiValue::U64(100_000), AbiValue::U64(99_500)])
            .unwrap();
        // Encoded args are length-prefixed 8-byte little-endian integers at
        // the very end of the payload.
        let bytes = payload.bytes();
        let tail = &bytes[bytes.len() - 18..];
        assert_eq!(tail[0], 8);
        assert_eq!(u64::from_le_bytes(tail[1..9].try_into().unwrap()), 100_000);
        assert_eq!(tail[9], 8);
        assert_eq!(u64::from_le_bytes(tail[10..18].try_into().unwrap()), 99_500);
    }

    #[test]
    fn test_argument_count_mismatch() {
        let abi = two_u64_abi();
        let err = abi
            .encode_call(vec![TypeTag::U64, TypeTag::U64], &[AbiValue::U64(1)])
            .unwrap_err();
        assert!(matches!(err, TradeError::Encoding(_)));
    }

    #[test]
    fn test_type_argument_count_mismatch() {
        let abi = two_u64_abi();
        let err = abi
            .encode_call(vec![TypeTag::U64], &[AbiValue::U64(1), AbiValue::U64(2)])
            .unwrap_err();
        assert!(matches!(err, TradeError::Encoding(_)));
    }

    #[test]
    fn test_argument_type_mismatch() {
        let abi = two_u64_abi();
        let err = abi
            .encode_call(
                vec![TypeTag::U64, TypeTag::U64],
                &[AbiValue::U64(1), AbiValue::Bool(true)],
            )
            .unwrap_err();
        assert!(matches!(err, TradeError::Encoding(_)));
    }

    #[test]
    fn test_u64_from_str() {
        assert_eq!(AbiValue::u64_from_str("100000").unwrap(), AbiValue::U64(100_000));
        assert!(matches!(
            AbiValue::u64_from_str("18446744073709551616").unwrap_err(),
            TradeError::Range(_)
        ));
        assert!(matches!(AbiValue::u64_from_str("12x").unwrap_err(), TradeError::Parse(_)));
    }
}
