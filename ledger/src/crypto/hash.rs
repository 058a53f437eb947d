//! # Hashing Utilities
//!
//! SHA-256, and only SHA-256. The ledger's tamper evidence rests entirely
//! on the digest being deterministic and one-way; it does not care which
//! well-audited primitive provides that, so we picked the one the rest of
//! the world already agrees on.
//!
//! All functions here are pure: no state, no randomness, no I/O.

use sha2::{Digest, Sha256};

use crate::config::DIGEST_LENGTH;

/// Compute the SHA-256 hash of the input data.
///
/// Returns the full 32-byte digest as a fixed-size array. The array type
/// propagates naturally through `Block` and `Chain`, which store digests
/// inline rather than on the heap.
///
/// # Example
///
/// ```
/// use strata_ledger::crypto::sha256;
///
/// let digest = sha256(b"strata");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; DIGEST_LENGTH];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices together without concatenation overhead.
///
/// Instead of allocating a buffer to concatenate inputs, we feed them
/// sequentially into the hasher. Same result as hashing the concatenation,
/// less allocation. This is how block preimages are assembled: the fields
/// go in as parts, in a fixed documented order.
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; DIGEST_LENGTH];
    output.copy_from_slice(&result);
    output
}
