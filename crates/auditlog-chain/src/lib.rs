//! # auditlog-chain — Append-Only Tamper-Evident Ledger
//!
//! A linked sequence of records where each record cryptographically commits
//! to the content and position of the record before it. Any holder of the
//! full sequence can detect, after the fact, whether any record's content
//! or ordering was altered.
//!
//! ## Commitment model
//!
//! ```text
//! record.hash = H(canonical({index, timestamp, payload, previous_hash}))
//! ```
//!
//! where `canonical` is the workspace canonical form (ordered keys, compact
//! separators, integer-only numbers) and `H` is the configured
//! [`ChainHasher`](auditlog_core::ChainHasher). JSON structure makes every
//! field self-delimiting, so shifting bytes across field boundaries cannot
//! produce a colliding encoding.
//!
//! ## Integrity checks
//!
//! - **Self-consistency**: a record's stored `hash` equals recomputation
//!   over its current field values.
//! - **Link integrity**: a record's `previous_hash` equals the stored
//!   `hash` of the record before it.
//! - **Fixed genesis**: position 0 carries the fixed genesis marker payload
//!   and the zero-digest sentinel.
//!
//! [`Ledger::verify`] walks the sequence once and reports the first
//! position where either check fails. Tampering is an expected verification
//! *outcome*, never a panic: records stay plainly mutable precisely so the
//! attack can be staged and detected.
//!
//! ## What this is not
//!
//! Not a distributed ledger. One chain, one process, one logical writer; no
//! consensus, networking, or fork choice. Concurrent appenders must
//! serialize the read-tail/compute/push sequence externally, because two
//! candidates linking to the same predecessor would fork the chain in a way
//! a linear walk cannot see.

pub mod chain;
pub mod error;
pub mod record;

// Re-export primary types.
pub use chain::Ledger;
pub use error::{ChainError, IntegrityViolation, ViolationKind};
pub use record::{Record, GENESIS_PAYLOAD};
