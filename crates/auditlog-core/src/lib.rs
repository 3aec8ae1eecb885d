//! # auditlog-core — Foundational Types for the Auditlog Ledger
//!
//! This crate provides the building blocks the ledger is assembled from:
//!
//! - **Content digests** ([`Digest`]): fixed 32-byte commitment values with
//!   lowercase-hex text representation.
//! - **Canonical serialization** ([`CanonicalBytes`]): the single sanctioned
//!   byte form for anything that gets hashed. Keys are ordered, separators
//!   are compact, and non-integer numbers are rejected so that a logical
//!   value has exactly one byte representation.
//! - **Timestamps** ([`Timestamp`]): RFC 3339 wall-clock markers. Timestamps
//!   stamp records but carry no integrity weight of their own.
//! - **Chain hashing** ([`ChainHasher`]): the narrow seam between chain
//!   logic and the concrete digest algorithm, with [`Sha256Hasher`] as the
//!   provided implementation.
//!
//! Chain logic itself lives in `auditlog-chain`; this crate has no opinion
//! about records or ledgers, only about how their bytes are produced.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod timestamp;

// Re-export primary types.
pub use canonical::CanonicalBytes;
pub use digest::{Digest, DIGEST_LEN};
pub use error::{CanonicalizationError, DigestParseError};
pub use hasher::{ChainHasher, Sha256Hasher};
pub use timestamp::Timestamp;
