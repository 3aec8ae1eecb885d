//! # Canonical Serialization
//!
//! [`CanonicalBytes`] is the single sanctioned byte form for anything that
//! gets hashed. A commitment digest is only meaningful if a logical value
//! has exactly one byte representation, so canonicalization enforces:
//!
//! - **Ordered keys**: object keys serialize in lexicographic order.
//! - **Compact separators**: no insignificant whitespace.
//! - **Integer-only numbers**: JSON numbers that are not exactly
//!   representable as `i64`/`u64` are rejected. Float formatting is the
//!   classic cross-implementation divergence point, so floats do not get a
//!   canonical form at all.
//!
//! Hashers in this workspace accept `CanonicalBytes`, not raw `&[u8]`, so
//! every digest is guaranteed to have passed through this path.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// A byte string produced by canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize any serializable value.
    pub fn new<T: Serialize>(value: &T) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(value)?;
        Self::from_value(&value)
    }

    /// Canonicalize an already-built JSON value.
    pub fn from_value(value: &Value) -> Result<Self, CanonicalizationError> {
        reject_non_integer_numbers(value)?;
        Ok(Self(serde_json::to_vec(value)?))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the byte string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn reject_non_integer_numbers(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Ok(())
            } else {
                Err(CanonicalizationError::NonIntegerNumber {
                    value: n.to_string(),
                })
            }
        }
        Value::Array(items) => items.iter().try_for_each(reject_non_integer_numbers),
        Value::Object(map) => map.values().try_for_each(reject_non_integer_numbers),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_are_ordered() {
        let a = CanonicalBytes::from_value(&json!({"b": 2, "a": 1})).unwrap();
        let b = CanonicalBytes::from_value(&json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), br#"{"a":1,"b":2}"#);
    }

    #[test]
    fn output_is_compact() {
        let c = CanonicalBytes::from_value(&json!({"key": [1, 2, 3]})).unwrap();
        assert!(!c.as_bytes().contains(&b' '));
    }

    #[test]
    fn canonicalization_is_deterministic() {
        let v = json!({"amount": 100, "memo": "transfer"});
        let a = CanonicalBytes::from_value(&v).unwrap();
        let b = CanonicalBytes::from_value(&v).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn floats_are_rejected() {
        let err = CanonicalBytes::from_value(&json!({"amount": 1.5})).unwrap_err();
        assert!(matches!(
            err,
            CanonicalizationError::NonIntegerNumber { .. }
        ));
    }

    #[test]
    fn nested_floats_are_rejected() {
        let v = json!({"outer": {"inner": [1, 2, 3.25]}});
        assert!(CanonicalBytes::from_value(&v).is_err());
    }

    #[test]
    fn integers_at_u64_range_are_accepted() {
        let v = json!({"big": u64::MAX});
        assert!(CanonicalBytes::from_value(&v).is_ok());
    }

    #[test]
    fn new_matches_from_value() {
        #[derive(Serialize)]
        struct Payload {
            amount: i64,
        }
        let typed = CanonicalBytes::new(&Payload { amount: 7 }).unwrap();
        let untyped = CanonicalBytes::from_value(&json!({"amount": 7})).unwrap();
        assert_eq!(typed, untyped);
    }
}
