//! Typed error taxonomy for quote math and payload encoding.
//!
//! Every fallible step in the quote/encode path returns a `TradeError` to its
//! immediate caller; nothing in this crate aborts the process. Whether a
//! failure is fatal is the caller's policy.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TradeError {
    /// Degenerate or unknown coin pair (same coin on both sides, empty or
    /// unregistered coin type).
    #[error("invalid coin configuration: {0}")]
    Configuration(String),

    /// Malformed numeric string, address, or type path.
    #[error("parse error: {0}")]
    Parse(String),

    /// Arithmetic precondition violated, or a value does not fit the width
    /// declared by the ABI.
    #[error("value out of range: {0}")]
    Range(String),

    /// ABI template bytes are corrupt, truncated, or of an unexpected kind.
    #[error("malformed ABI template: {0}")]
    Protocol(String),

    /// Supplied arguments do not match the ABI's declared arity or types.
    #[error("argument encoding mismatch: {0}")]
    Encoding(String),
}

pub type TradeResult<T> = Result<T, TradeError>;
