//! # Chain Error Types
//!
//! Two distinct surfaces, deliberately kept apart:
//!
//! - [`ChainError`] — append-time failures returned to the caller.
//! - [`IntegrityViolation`] — the verifier's first-offense report.
//!   Detecting tampering is the system's entire purpose, so a violation is
//!   delivered as an inspectable value, never a panic.

use std::fmt;

use thiserror::Error;

use auditlog_core::CanonicalizationError;

/// Errors from mutating operations on a ledger.
#[derive(Error, Debug)]
pub enum ChainError {
    /// Candidate record's index does not continue the sequence.
    #[error("sequence mismatch: expected index {expected}, got {actual}")]
    SequenceMismatch {
        /// The expected next index (current chain length).
        expected: u64,
        /// The index the candidate carried.
        actual: u64,
    },

    /// The record payload has no canonical form.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Which integrity check failed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The record's stored hash does not equal recomputation over its
    /// current field values.
    HashMismatch,
    /// The record's `previous_hash` does not equal the stored hash of the
    /// record before it.
    LinkMismatch,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::HashMismatch => f.write_str("hash mismatch"),
            ViolationKind::LinkMismatch => f.write_str("link mismatch"),
        }
    }
}

/// The first position at which verification failed, and how.
///
/// One failure invalidates the chain's trustworthiness from that point
/// forward regardless of later records' internal consistency, so the
/// verifier stops at the first offense.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("integrity violation at index {index}: {kind}")]
pub struct IntegrityViolation {
    /// Index of the first offending record.
    pub index: u64,
    /// Which check it failed.
    pub kind: ViolationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_mismatch_display() {
        let err = ChainError::SequenceMismatch {
            expected: 4,
            actual: 9,
        };
        let msg = format!("{err}");
        assert!(msg.contains('4'));
        assert!(msg.contains('9'));
    }

    #[test]
    fn violation_display_names_index_and_kind() {
        let v = IntegrityViolation {
            index: 2,
            kind: ViolationKind::LinkMismatch,
        };
        let msg = format!("{v}");
        assert!(msg.contains("index 2"));
        assert!(msg.contains("link mismatch"));
    }

    #[test]
    fn canonicalization_error_converts() {
        let inner = CanonicalizationError::NonIntegerNumber {
            value: "2.5".to_string(),
        };
        let err = ChainError::from(inner);
        assert!(matches!(err, ChainError::Canonicalization(_)));
    }
}
