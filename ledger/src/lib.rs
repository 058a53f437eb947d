// Copyright (c) 2026 Strata Contributors. MIT License.
// See LICENSE for details.

//! # Strata — Core Library
//!
//! Strata is an append-only, tamper-evident ledger: an ordered sequence of
//! blocks in which every block is cryptographically bound to its predecessor
//! through a content digest. Rewrite history anywhere in the middle and the
//! chain tells on you — that is the entire product.
//!
//! Like rock strata, blocks are laid down in order and never rearranged.
//! Unlike rock strata, we can prove it.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of the
//! ledger:
//!
//! - **crypto** — The digest primitive (SHA-256) behind a thin boundary.
//! - **payload** — Canonical JSON encoding. Determinism lives or dies here.
//! - **block** — One ledger entry: position, payload, predecessor link, digest.
//! - **chain** — The ordered sequence: genesis seeding, append, validation.
//! - **error** — The (deliberately tiny) failure taxonomy.
//! - **config** — Protocol constants. All of them. In one place.
//!
//! ## What Strata is not
//!
//! There is no persistence, no networking, no consensus, no mining, and no
//! economic layer. This is a single-threaded, in-memory data structure that
//! demonstrates one security property — tamper evidence — and demonstrates
//! it honestly. Blocks are *detectably* mutable, not *impossibly* mutable;
//! the difference is the point.
//!
//! ## Design Philosophy
//!
//! 1. Digest computation is referentially transparent. Same fields, same
//!    digest, every time. Any deviation defeats tamper detection.
//! 2. Validation is a pure query. It never mutates and never prints —
//!    presentation is someone else's job.
//! 3. Canonical encoding is explicit and tested, never incidental.

pub mod block;
pub mod chain;
pub mod config;
pub mod crypto;
pub mod error;
pub mod payload;

// Re-export the types people actually need so they don't have to memorize
// the module hierarchy.
pub use block::Block;
pub use chain::{Chain, FailureReason, Verdict};
pub use error::LedgerError;
