//! # The Ledger
//!
//! An ordered sequence of [`Record`]s rooted at a fixed genesis record.
//! [`Ledger::append`] stitches each candidate onto the current tail and
//! [`Ledger::verify`] walks the whole sequence recomputing and comparing
//! hashes and links.
//!
//! The ledger is an explicitly owned value: no global chain, no interior
//! locking. One logical writer at a time; verification is read-only and may
//! run concurrently with itself, but not with `append`, whose
//! read-tail/compute/push sequence is not atomic.

use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use auditlog_core::{ChainHasher, Digest, Sha256Hasher, Timestamp};

use crate::error::{ChainError, IntegrityViolation, ViolationKind};
use crate::record::Record;

/// An append-only, tamper-evident sequence of records.
///
/// Generic over the digest algorithm; [`Sha256Hasher`] is the default.
/// Length is at least 1 at all times, and element 0 is always genesis.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Ledger<H: ChainHasher = Sha256Hasher> {
    records: Vec<Record>,
    #[serde(skip)]
    _hasher: PhantomData<H>,
}

// Deserializes the wire shape, then rejects an empty record list so the
// never-empty invariant survives round-tripping through untrusted exports.
impl<'de, H: ChainHasher> Deserialize<'de> for Ledger<H> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            records: Vec<Record>,
        }

        let wire = Wire::deserialize(deserializer)?;
        if wire.records.is_empty() {
            return Err(serde::de::Error::custom("ledger contains no records"));
        }
        Ok(Self {
            records: wire.records,
            _hasher: PhantomData,
        })
    }
}

impl Ledger<Sha256Hasher> {
    /// Create a ledger containing only a genesis record stamped with the
    /// current wall-clock time.
    ///
    /// The timestamp is the one non-fixed genesis field, so two ledgers
    /// created independently are distinguishable (and their chains
    /// incomparable). For deterministic construction use
    /// [`with_genesis_timestamp`](Ledger::with_genesis_timestamp).
    pub fn new() -> Self {
        Self::with_genesis_timestamp(Timestamp::now())
    }
}

impl Default for Ledger<Sha256Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ChainHasher> Ledger<H> {
    /// Create a ledger whose genesis record carries an explicit timestamp.
    pub fn with_genesis_timestamp(genesis_timestamp: Timestamp) -> Self {
        // The genesis payload is a fixed string constant; canonicalization
        // of it cannot fail.
        let genesis = Record::genesis::<H>(genesis_timestamp)
            .expect("genesis payload is canonical by construction");
        Self {
            records: vec![genesis],
            _hasher: PhantomData,
        }
    }

    /// Number of records, genesis included. Always at least 1.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Name of the digest algorithm the chain commits with.
    pub fn algorithm(&self) -> &'static str {
        H::ALGORITHM
    }

    /// Always false; present for the conventional pairing with [`len`](Ledger::len).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The current tail record.
    pub fn latest(&self) -> &Record {
        self.records
            .last()
            .expect("ledger always contains the genesis record")
    }

    /// The records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access to a single record.
    ///
    /// Exists so tamper scenarios can be staged against a live ledger:
    /// mutation without resealing is exactly what [`verify`](Ledger::verify)
    /// is meant to catch. Position 0 is the trusted root; edits to it are
    /// outside what verification can detect.
    pub fn record_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    /// Append a candidate record to the chain.
    ///
    /// The candidate's `previous_hash` is overwritten with the current
    /// tail's hash (never trusted as supplied) and its commitment hash is
    /// recomputed from the updated fields before the push. Immediately
    /// after append the new tail is self-consistent and correctly linked by
    /// construction.
    ///
    /// The candidate's `index` must equal the current chain length;
    /// out-of-order and duplicate positions are rejected with
    /// [`ChainError::SequenceMismatch`].
    pub fn append(&mut self, mut record: Record) -> Result<Digest, ChainError> {
        let expected = self.records.len() as u64;
        if record.index != expected {
            return Err(ChainError::SequenceMismatch {
                expected,
                actual: record.index,
            });
        }

        record.previous_hash = self.latest().hash;
        let digest = record.reseal::<H>()?;

        tracing::debug!(index = record.index, hash = %digest, "record appended");
        self.records.push(record);
        Ok(digest)
    }

    /// Construct a record at the next position and append it.
    pub fn append_payload(
        &mut self,
        timestamp: Timestamp,
        payload: Value,
    ) -> Result<Digest, ChainError> {
        let record = Record::new::<H>(
            self.records.len() as u64,
            timestamp,
            payload,
            // Placeholder; append stitches in the real tail hash.
            Digest::zero(),
        )?;
        self.append(record)
    }

    /// Walk the full chain and report the first integrity violation.
    ///
    /// For each position from 1 to the end: recompute the record's
    /// commitment hash and compare it to the stored `hash`, then compare
    /// the record's `previous_hash` to the predecessor's stored `hash`.
    /// Genesis is the trusted root and is not checked against a
    /// predecessor.
    ///
    /// One linear pass, short-circuiting at the first offense: a single
    /// failure invalidates everything after it regardless of later records'
    /// internal consistency. Never panics: tampering is the designed-for
    /// outcome, reported as data.
    pub fn verify(&self) -> Result<(), IntegrityViolation> {
        for i in 1..self.records.len() {
            let current = &self.records[i];
            let previous = &self.records[i - 1];

            // A payload that can no longer be canonicalized cannot match
            // its recorded hash.
            let self_consistent = match current.compute_hash::<H>() {
                Ok(recomputed) => recomputed == current.hash,
                Err(_) => false,
            };
            if !self_consistent {
                return Err(self.report(i, ViolationKind::HashMismatch));
            }

            if current.previous_hash != previous.hash {
                return Err(self.report(i, ViolationKind::LinkMismatch));
            }
        }
        Ok(())
    }

    /// Boolean view of [`verify`](Ledger::verify).
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    fn report(&self, index: usize, kind: ViolationKind) -> IntegrityViolation {
        let violation = IntegrityViolation {
            index: index as u64,
            kind,
        };
        tracing::warn!(index = violation.index, kind = %violation.kind, "integrity violation detected");
        violation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn fixed_timestamp() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn fresh_ledger_is_valid() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.is_valid());
    }

    #[test]
    fn genesis_is_the_root() {
        let ledger = Ledger::new();
        let genesis = &ledger.records()[0];
        assert_eq!(genesis.index, 0);
        assert!(genesis.previous_hash.is_zero());
    }

    #[test]
    fn append_links_to_previous_tail() {
        let mut ledger = Ledger::new();
        let tail_hash = ledger.latest().hash;
        ledger
            .append_payload(fixed_timestamp(), json!({"amount": 1}))
            .unwrap();
        assert_eq!(ledger.latest().previous_hash, tail_hash);
        assert!(ledger.is_valid());
    }

    #[test]
    fn append_overwrites_supplied_previous_hash() {
        let mut ledger = Ledger::new();
        let record = Record::new::<Sha256Hasher>(
            1,
            fixed_timestamp(),
            json!({"amount": 5}),
            Digest::from_bytes([0xee; 32]),
        )
        .unwrap();
        ledger.append(record).unwrap();
        assert_eq!(ledger.latest().previous_hash, ledger.records()[0].hash);
        assert!(ledger.is_valid());
    }

    #[test]
    fn append_returns_new_tail_hash() {
        let mut ledger = Ledger::new();
        let digest = ledger
            .append_payload(fixed_timestamp(), json!({"amount": 1}))
            .unwrap();
        assert_eq!(digest, ledger.latest().hash);
    }

    #[test]
    fn out_of_sequence_index_is_rejected() {
        let mut ledger = Ledger::new();
        let record = Record::new::<Sha256Hasher>(
            7,
            fixed_timestamp(),
            json!({"amount": 5}),
            Digest::zero(),
        )
        .unwrap();
        let err = ledger.append(record).unwrap_err();
        assert!(matches!(
            err,
            ChainError::SequenceMismatch {
                expected: 1,
                actual: 7,
            }
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let mut ledger = Ledger::new();
        ledger
            .append_payload(fixed_timestamp(), json!({"amount": 1}))
            .unwrap();
        let record = Record::new::<Sha256Hasher>(
            1,
            fixed_timestamp(),
            json!({"amount": 2}),
            Digest::zero(),
        )
        .unwrap();
        assert!(ledger.append(record).is_err());
    }

    #[test]
    fn float_payload_is_rejected_at_append() {
        let mut ledger = Ledger::new();
        let err = ledger
            .append_payload(fixed_timestamp(), json!({"amount": 1.25}))
            .unwrap_err();
        assert!(matches!(err, ChainError::Canonicalization(_)));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.is_valid());
    }

    #[test]
    fn serde_roundtrip_preserves_verdict() {
        let mut ledger: Ledger = Ledger::with_genesis_timestamp(fixed_timestamp());
        for amount in [1, 10, 100] {
            ledger
                .append_payload(fixed_timestamp(), json!({"amount": amount}))
                .unwrap();
        }
        let encoded = serde_json::to_string(&ledger).unwrap();
        let decoded: Ledger = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.len(), 4);
        assert!(decoded.is_valid());
        assert_eq!(decoded.latest().hash, ledger.latest().hash);
    }

    #[test]
    fn empty_export_is_rejected_at_deserialization() {
        let result: Result<Ledger, _> = serde_json::from_str(r#"{"records": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip_preserves_invalid_verdict() {
        let mut ledger: Ledger = Ledger::with_genesis_timestamp(fixed_timestamp());
        ledger
            .append_payload(fixed_timestamp(), json!({"amount": 1}))
            .unwrap();
        ledger.record_mut(1).unwrap().payload = json!({"amount": 2});

        let encoded = serde_json::to_string(&ledger).unwrap();
        let decoded: Ledger = serde_json::from_str(&encoded).unwrap();
        assert_eq!(ledger.verify(), decoded.verify());
        assert!(!decoded.is_valid());
    }
}
