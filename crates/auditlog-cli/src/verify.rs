//! # Verify Subcommand
//!
//! Offline verification of an exported ledger: load the JSON record list,
//! walk the chain, and report either the record count or the first
//! offense. Exits nonzero on violation so the command composes in scripts.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use auditlog_chain::Ledger;

/// Arguments for the `auditlog verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to a ledger export produced by `auditlog demo --output`.
    pub file: PathBuf,
}

/// Verify an exported ledger file.
pub fn run_verify(args: &VerifyArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let ledger: Ledger = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse ledger from {}", args.file.display()))?;

    tracing::debug!(records = ledger.len(), "loaded ledger export");

    // The walk trusts record 0, so recognize a genuine chain start before
    // trusting it.
    let genesis = &ledger.records()[0];
    if genesis.index != 0 || !genesis.previous_hash.is_zero() {
        bail!(
            "{} does not start with a genesis record",
            args.file.display()
        );
    }

    match ledger.verify() {
        Ok(()) => {
            println!(
                "ledger valid: {} records ({})",
                ledger.len(),
                ledger.algorithm()
            );
            Ok(())
        }
        Err(violation) => bail!("{violation}"),
    }
}
