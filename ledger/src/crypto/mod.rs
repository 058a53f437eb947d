//! # Cryptographic Primitives for Strata
//!
//! Everything digest-related flows through here. The ledger treats the hash
//! function as an opaque one-way box with three promises: same input, same
//! output; different input, overwhelmingly likely different output; and no
//! walking backwards from digest to input.
//!
//! We chose boring, well-audited cryptography: SHA-256 via the `sha2`
//! crate. One primitive, full 256-bit output, no configuration surface.
//! Swapping the algorithm would invalidate every previously recorded
//! digest, so there is deliberately no way to do it at runtime.

pub mod hash;

pub use hash::{sha256, sha256_multi};
