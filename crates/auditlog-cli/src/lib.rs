//! # auditlog-cli — CLI for the Auditlog Ledger
//!
//! Provides the `auditlog` command-line interface.
//!
//! ## Subcommands
//!
//! - `auditlog demo` — build a small ledger, stage the two classic tamper
//!   attacks against it, and show the verifier catching each one.
//! - `auditlog verify` — load an exported ledger from JSON and run
//!   full-chain verification, reporting the first offense.
//!
//! The ledger itself lives in `auditlog-chain`; this crate only drives it
//! and formats results.

pub mod demo;
pub mod verify;
