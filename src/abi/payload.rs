//! Transaction payload types and their canonical BCS encoding.

use serde::{Deserialize, Serialize};

use crate::abi::address::AccountAddress;
use crate::abi::type_tag::TypeTag;
use crate::common::error::{TradeError, TradeResult};

/// Fully-qualified module identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleId {
    pub address: AccountAddress,
    pub name: String,
}

impl ModuleId {
    pub fn new(address: AccountAddress, name: impl Into<String>) -> Self {
        Self { address, name: name.into() }
    }
}

/// The payload kind space of a user transaction. Variant order fixes the
/// on-wire indices (script = 0, module bundle = 1, entry function = 2); only
/// entry functions are ever produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionPayload {
    Script,
    ModuleBundle,
    EntryFunction(EntryFunction),
}

/// A bound entry-function call: target module and function, fully-qualified
/// type arguments, and each literal argument already encoded to its own BCS
/// byte string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunction {
    pub module: ModuleId,
    pub function: String,
    pub ty_args: Vec<TypeTag>,
    pub args: Vec<Vec<u8>>,
}

impl EntryFunction {
    pub fn new(
        module: ModuleId,
        function: impl Into<String>,
        ty_args: Vec<TypeTag>,
        args: Vec<Vec<u8>>,
    ) -> Self {
        Self { module, function: function.into(), ty_args, args }
    }
}

/// A finished payload: the structured call record for introspection plus its
/// byte-identical BCS encoding. The bytes are produced once and never
/// mutated; the signature computed downstream covers them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    pub payload: TransactionPayload,
    pub bytes: Vec<u8>,
}

impl EncodedPayload {
    /// Encode an entry-function call into its submittable form.
    pub fn from_entry_function(entry: EntryFunction) -> TradeResult<Self> {
        let payload = TransactionPayload::EntryFunction(entry);
        let bytes = bcs::to_bytes(&payload)
            .map_err(|e| TradeError::Encoding(format!("payload serialization failed: {}", e)))?;
        Ok(Self { payload, bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_function_variant_index() {
        let entry = EntryFunction::new(
            ModuleId::new(AccountAddress::one(), "managed_coin"),
            "register",
            vec![],
            vec![],
        );
        let encoded = EncodedPayload::from_entry_function(entry).unwrap();
        // variant 2, module address, module name, function name, empty
        // ty_args, empty args
        assert_eq!(encoded.bytes[0], 2);
        assert_eq!(&encoded.bytes[1..33], AccountAddress::one().as_bytes());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let entry = EntryFunction::new(
            ModuleId::new(AccountAddress::one(), "managed_coin"),
            "register",
            vec![TypeTag::U64],
            vec![vec![1, 2, 3]],
        );
        let a = EncodedPayload::from_entry_function(entry.clone()).unwrap();
        let b = EncodedPayload::from_entry_function(entry).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }
}
