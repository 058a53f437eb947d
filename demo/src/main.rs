// Copyright (c) 2026 Strata Contributors. MIT License.
// See LICENSE for details.

//! # Strata Tamper-Evidence Demo
//!
//! Entry point for the `strata-demo` binary. Builds a small ledger, then
//! attacks it twice and shows that validation catches both attempts:
//!
//! 1. Build genesis + two blocks, validate — VALID.
//! 2. Rewrite a committed payload in place, validate — NOT VALID, caught
//!    by the self-consistency check at the tampered position.
//! 3. Re-sync the tampered block's digest, validate — still NOT VALID,
//!    caught by the link-consistency check one position downstream.
//!
//! The chain is dumped to stdout as pretty-printed JSON between acts so
//! the field-level effect of each attack is visible. Log events go to
//! stderr via `tracing`.

mod logging;

use anyhow::{Context, Result};
use serde_json::json;

use strata_ledger::{Block, Chain};

fn main() -> Result<()> {
    logging::init_logging("strata_demo=info,strata_ledger=info");

    let mut coin = Chain::new();
    tracing::info!(
        genesis_digest = %coin.latest().digest_hex(),
        "chain created with genesis block"
    );

    let committed = coin.append(Block::new(json!({"amount": 10})).context("append block A")?);
    tracing::info!(index = committed.index(), digest = %committed.digest_hex(), "block committed");

    let committed = coin.append(Block::new(json!({"amount": 30})).context("append block B")?);
    tracing::info!(index = committed.index(), digest = %committed.digest_hex(), "block committed");

    // --- Act 1: the untouched chain ---
    dump(&coin, "freshly built chain")?;
    report(&coin);

    // --- Act 2: rewrite a committed payload, digest left stale ---
    coin.block_mut(1)
        .context("block 1 exists")?
        .tamper_payload(json!({"amount": 200}))
        .context("tamper payload")?;
    tracing::warn!(index = 1, "payload rewritten in place");

    dump(&coin, "after payload rewrite")?;
    report(&coin);

    // --- Act 3: re-sync the tampered block's digest ---
    coin.block_mut(1).context("block 1 exists")?.resync_digest();
    tracing::warn!(index = 1, "digest re-synced to tampered payload");

    dump(&coin, "after digest re-sync")?;
    report(&coin);

    Ok(())
}

/// Pretty-print the whole chain to stdout, with a banner.
fn dump(chain: &Chain, label: &str) -> Result<()> {
    println!("--- {label} ---");
    println!("{}", serde_json::to_string_pretty(chain).context("serialize chain")?);
    Ok(())
}

/// Run validation and report the verdict on both streams.
fn report(chain: &Chain) {
    let verdict = chain.validate();
    if verdict.is_valid() {
        tracing::info!(blocks = chain.len(), "validation passed");
    } else {
        tracing::warn!(verdict = %verdict, "validation failed");
    }
    println!("{verdict}");
    println!();
}
