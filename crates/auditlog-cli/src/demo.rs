//! # Demo Subcommand
//!
//! Scripted walkthrough of the ledger's tamper evidence: build a chain of
//! three transfer records, rewrite one payload, then let the forger repair
//! that record's own hash, verifying after each step. The final state is
//! printed as pretty JSON and can be written to a file for later
//! `auditlog verify` runs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use auditlog_chain::Ledger;
use auditlog_core::{Sha256Hasher, Timestamp};

/// Arguments for the `auditlog demo` subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Write the final (tampered) ledger to this path as pretty JSON.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the scripted demo.
pub fn run_demo(args: &DemoArgs) -> Result<()> {
    let mut ledger = Ledger::new();
    tracing::info!("initialized ledger with genesis record");

    for amount in [1i64, 10, 100] {
        let hash = ledger.append_payload(Timestamp::now(), json!({ "amount": amount }))?;
        tracing::info!(amount, hash = %hash, "appended record");
    }

    println!("ledger after 3 appends:");
    println!("{}", serde_json::to_string_pretty(&ledger)?);
    report_verdict(&ledger);

    println!("\ntampering: rewriting record 1 payload in place");
    ledger
        .record_mut(1)
        .expect("record 1 exists")
        .payload = json!({ "amount": 10000000 });
    report_verdict(&ledger);

    println!("\ntampering: resealing record 1 to repair its own hash");
    ledger
        .record_mut(1)
        .expect("record 1 exists")
        .reseal::<Sha256Hasher>()?;
    report_verdict(&ledger);

    println!("\nfinal ledger state:");
    println!("{}", serde_json::to_string_pretty(&ledger)?);

    if let Some(path) = &args.output {
        let encoded = serde_json::to_string_pretty(&ledger)?;
        fs::write(path, encoded)
            .with_context(|| format!("failed to write ledger to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote ledger export");
    }

    Ok(())
}

fn report_verdict(ledger: &Ledger) {
    match ledger.verify() {
        Ok(()) => println!("chain valid? true"),
        Err(violation) => println!("chain valid? false ({violation})"),
    }
}
