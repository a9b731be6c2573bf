//! Entry-function ABI handling: typed templates, Move type tags, and the
//! canonical BCS payload encoding expected by the Aptos runtime.

pub mod address;
pub mod entry_function;
pub mod payload;
pub mod type_tag;

pub use address::AccountAddress;
pub use entry_function::{AbiValue, ArgumentAbi, EntryFunctionAbi, ScriptAbi, TypeArgumentAbi};
pub use payload::{EncodedPayload, EntryFunction, ModuleId, TransactionPayload};
pub use type_tag::{StructTag, TypeTag};
