//! # Core Error Types
//!
//! Structured errors for canonicalization and digest parsing. Uses
//! `thiserror` for ergonomic error definitions with diagnostic context.

use thiserror::Error;

/// Errors from reducing a value to canonical bytes.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// The value contains a JSON number with no exact integer
    /// representation. Floats have no canonical byte form.
    #[error("non-integer number {value} has no canonical form")]
    NonIntegerNumber {
        /// The offending number, as rendered by the serializer.
        value: String,
    },

    /// The value could not be serialized to JSON at all.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from parsing a digest out of its text form.
#[derive(Error, Debug)]
pub enum DigestParseError {
    /// Decoded byte length is not the digest length.
    #[error("invalid digest length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    /// The text is not valid hex.
    #[error("hex decode error: {0}")]
    HexDecode(String),
}
