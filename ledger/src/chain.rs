//! # Chain Management
//!
//! The [`Chain`] owns the ordered block sequence and everything that makes
//! it a ledger rather than a `Vec`: genesis seeding, authoritative linkage
//! assignment on append, and whole-chain validation.
//!
//! ## Validation model
//!
//! Genesis is the trust anchor. It has no predecessor and nothing vouches
//! for it, so validation starts at position 1 and runs two checks per
//! block, in order:
//!
//! 1. **Self-consistency** — the stored digest equals the digest
//!    recomputed from the block's current fields. Catches in-place edits
//!    that forgot to (or couldn't) re-hash.
//! 2. **Link-consistency** — the block's recorded predecessor digest
//!    equals the predecessor's current digest. Catches the cleverer
//!    attack: edit a block *and* re-sync its digest, which passes check 1
//!    but orphans every successor's link.
//!
//! Validation short-circuits at the first failure in ascending order, so
//! the reported index is always the lowest tampered position. It is a
//! pure query: no mutation, no printing. Presentation belongs to callers.

use serde::Serialize;
use std::fmt;

use crate::block::Block;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Which of the two per-block checks failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FailureReason {
    /// The stored digest no longer matches the digest recomputed from the
    /// block's current fields.
    SelfConsistency,
    /// The recorded predecessor digest no longer matches the
    /// predecessor's current digest.
    LinkConsistency,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::SelfConsistency => write!(f, "self-consistency"),
            FailureReason::LinkConsistency => write!(f, "link-consistency"),
        }
    }
}

/// Structured outcome of [`Chain::validate`].
///
/// Tamper detection is a *result*, not a fault: an invalid chain is the
/// validator doing its job, so nothing here is an `Err`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Every block passed both checks.
    Valid,
    /// Validation stopped at the first failing position.
    Invalid {
        /// Index of the first block that failed a check.
        index: u64,
        /// Which check it failed.
        reason: FailureReason,
    },
}

impl Verdict {
    /// Whether the chain validated cleanly.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "chain is VALID"),
            Verdict::Invalid { index, reason } => {
                write!(f, "chain is NOT VALID: {} check failed at block {}", reason, index)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// The ordered, append-only sequence of blocks.
///
/// Construction seeds the genesis block, so a `Chain` is never empty.
/// Blocks are never removed; there is no delete and no reorg. The caller
/// owns the value — no ambient singleton, no global state.
#[derive(Clone, Debug, Serialize)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain seeded with the genesis block.
    pub fn new() -> Self {
        Chain {
            blocks: vec![Block::genesis()],
        }
    }

    /// Number of blocks, genesis included. Always at least 1.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false — genesis is seeded at construction. Provided because
    /// clippy rightfully insists that `len` travels with `is_empty`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The block at `index`, if present.
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Read-only view of the whole sequence.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The last block in the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty, which cannot happen through the
    /// public API — genesis is seeded at construction and nothing removes
    /// blocks. An empty chain means memory was corrupted out-of-band, and
    /// that is a programming-invariant violation, not a recoverable
    /// condition.
    pub fn latest(&self) -> &Block {
        self.blocks
            .last()
            .expect("chain invariant violated: genesis block is always present")
    }

    /// Commit a candidate block to the tip of the chain.
    ///
    /// Everything about the candidate except its payload and timestamp is
    /// provisional: `index` is overwritten with the next position,
    /// `previous_digest` with the current tip's digest, and `digest` is
    /// recomputed over the updated fields. Returns a reference to the
    /// committed block.
    ///
    /// Payload serializability was already enforced by [`Block::new`], so
    /// append itself cannot fail.
    pub fn append(&mut self, mut block: Block) -> &Block {
        block.index = self.blocks.len() as u64;
        block.previous_digest = self.latest().digest();
        block.digest = block.compute_digest();
        self.blocks.push(block);
        self.latest()
    }

    /// Check the whole chain for tampering.
    ///
    /// Scans positions 1..N in ascending order, genesis excluded (trust
    /// anchor). Each block must pass self-consistency, then
    /// link-consistency; the scan stops at the first failure, so the
    /// reported index is the lowest tampered position.
    pub fn validate(&self) -> Verdict {
        for i in 1..self.blocks.len() {
            let current = &self.blocks[i];
            let previous = &self.blocks[i - 1];

            if current.digest() != current.compute_digest() {
                return Verdict::Invalid {
                    index: current.index(),
                    reason: FailureReason::SelfConsistency,
                };
            }

            if current.previous_digest() != previous.digest() {
                return Verdict::Invalid {
                    index: current.index(),
                    reason: FailureReason::LinkConsistency,
                };
            }
        }

        Verdict::Valid
    }

    // -----------------------------------------------------------------------
    // Tamper hooks
    // -----------------------------------------------------------------------

    /// Mutable access to a committed block.
    ///
    /// Tamper-demonstration hook, the storage-layer gap the validator
    /// exists to expose. Real deployments should treat committed blocks
    /// as append-only and never reach for this outside a controlled
    /// harness.
    pub fn block_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
