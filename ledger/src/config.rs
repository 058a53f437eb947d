//! # Ledger Configuration & Constants
//!
//! Every magic number and sentinel in Strata lives here. If you're
//! hardcoding a constant somewhere else, you're doing it wrong.
//!
//! Changing any of these invalidates every digest recorded under the old
//! values — a migration concern for anyone persisting chains out-of-band,
//! not a runtime one for this crate.

// ---------------------------------------------------------------------------
// Digest Parameters
// ---------------------------------------------------------------------------

/// Length of a block digest in bytes. SHA-256 output, full width.
pub const DIGEST_LENGTH: usize = 32;

/// The predecessor-digest sentinel for the genesis block.
///
/// Genesis has no predecessor, so its `previous_digest` is all zeros —
/// a value no real SHA-256 digest will ever collide with in practice.
pub const GENESIS_PARENT_DIGEST: [u8; DIGEST_LENGTH] = [0u8; DIGEST_LENGTH];

// ---------------------------------------------------------------------------
// Genesis Parameters
// ---------------------------------------------------------------------------

/// Default payload of the genesis block.
///
/// "Genesis Block" is the term of art for the first block of a chain, and
/// the sentinel is deliberately boring: the genesis block is the trust
/// anchor, so its content carries no security weight.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";
