//! Error types for the Strata ledger.
//!
//! The taxonomy is minimal by design. Tamper detection is *not* an error —
//! it is the successful outcome of validation, reported through
//! [`Verdict`](crate::chain::Verdict). An empty chain is not an error
//! either: it cannot occur through the public API, so [`Chain::latest`]
//! treats it as a fatal invariant violation rather than a recoverable
//! condition.
//!
//! [`Chain::latest`]: crate::chain::Chain::latest

use thiserror::Error;

/// Errors that can occur while constructing ledger entries.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The payload could not be encoded as JSON (e.g., a map with
    /// non-string keys, or a failing `Serialize` impl). Rejected at block
    /// construction so it can never poison a digest.
    #[error("payload is not JSON-serializable: {0}")]
    PayloadSerialization(#[from] serde_json::Error),
}
