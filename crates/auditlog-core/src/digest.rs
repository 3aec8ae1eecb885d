//! # Content Digests
//!
//! [`Digest`] is the 32-byte commitment value every chained record carries.
//! The text form is always 64 lowercase hex characters; serde goes through
//! the text form so exported ledgers stay human-inspectable.
//!
//! The all-zero digest is reserved as the genesis sentinel: a record whose
//! `previous_hash` is [`Digest::zero()`] claims to have no predecessor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DigestParseError;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A fixed-length content digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// The all-zero digest, used as the "no predecessor" sentinel.
    pub fn zero() -> Self {
        Self([0u8; DIGEST_LEN])
    }

    /// Construct a digest from raw bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(raw: &str) -> Result<Self, DigestParseError> {
        let bytes = hex::decode(raw).map_err(|e| DigestParseError::HexDecode(e.to_string()))?;
        let arr: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| DigestParseError::InvalidLength(v.len()))?;
        Ok(Self(arr))
    }

    /// Whether this digest is the genesis sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

// Deserializes as a plain string, then routes through `from_hex` so that
// malformed digests are rejected at deserialization time — not silently
// accepted.
impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
