//! # Ledger Records
//!
//! A [`Record`] is one sealed unit in the chain: position index, creation
//! timestamp, opaque payload, the predecessor's commitment hash, and its
//! own commitment hash over the other four fields.
//!
//! Fields are public and plainly mutable. Mutation without resealing is the
//! attack model the verifier exists to catch, so the type does nothing to
//! prevent it; a sealed-struct API would make the tamper scenarios
//! impossible to stage.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use auditlog_core::{CanonicalBytes, CanonicalizationError, ChainHasher, Digest, Timestamp};

/// Payload marker carried by every genesis record.
pub const GENESIS_PAYLOAD: &str = "genesis";

/// One record in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the sequence; 0 is genesis.
    pub index: u64,
    /// Creation marker. Externally supplied, never validated; carries no
    /// integrity weight beyond being committed to by `hash`.
    pub timestamp: Timestamp,
    /// Application data. Opaque to the chain; only its canonical byte form
    /// matters.
    pub payload: Value,
    /// Commitment hash of the preceding record, or the zero sentinel for
    /// genesis.
    pub previous_hash: Digest,
    /// Commitment hash over the four fields above.
    pub hash: Digest,
}

impl Record {
    /// Construct a record and seal it.
    ///
    /// Fields are stored verbatim; index monotonicity is the ledger's
    /// concern at append time, not this constructor's. Fails only if the
    /// payload has no canonical form.
    pub fn new<H: ChainHasher>(
        index: u64,
        timestamp: Timestamp,
        payload: Value,
        previous_hash: Digest,
    ) -> Result<Self, CanonicalizationError> {
        let mut record = Self {
            index,
            timestamp,
            payload,
            previous_hash,
            hash: Digest::zero(),
        };
        record.reseal::<H>()?;
        Ok(record)
    }

    /// Construct the fixed chain root: index 0, the genesis marker payload,
    /// and the zero-digest sentinel as predecessor.
    pub fn genesis<H: ChainHasher>(timestamp: Timestamp) -> Result<Self, CanonicalizationError> {
        Self::new::<H>(0, timestamp, Value::String(GENESIS_PAYLOAD.into()), Digest::zero())
    }

    /// Assemble the commitment payload: every field except `hash` itself,
    /// reduced to canonical bytes.
    pub fn hash_material(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::from_value(&json!({
            "index": self.index,
            "timestamp": self.timestamp,
            "payload": self.payload,
            "previous_hash": self.previous_hash,
        }))
    }

    /// Recompute the commitment hash from current field values.
    ///
    /// Pure and idempotent; does not touch `self.hash`. Both the
    /// constructor and the verifier go through here, so there is exactly
    /// one definition of what a record commits to.
    pub fn compute_hash<H: ChainHasher>(&self) -> Result<Digest, CanonicalizationError> {
        Ok(H::digest(&self.hash_material()?))
    }

    /// Recompute the commitment hash and store it.
    ///
    /// This is also the forger's move: after editing a field, resealing
    /// restores local self-consistency. The successor's link check in
    /// [`Ledger::verify`](crate::Ledger::verify) is what catches it.
    pub fn reseal<H: ChainHasher>(&mut self) -> Result<Digest, CanonicalizationError> {
        let digest = self.compute_hash::<H>()?;
        self.hash = digest;
        Ok(digest)
    }
}
