//! # Chain Hashing
//!
//! [`ChainHasher`] is the narrow seam between chain logic and the concrete
//! digest algorithm: canonical bytes in, fixed-length digest out. Chain
//! code never names an algorithm directly, so swapping SHA-256 for another
//! ≥256-bit hash touches nothing but the type parameter.
//!
//! The input type is [`CanonicalBytes`], not raw `&[u8]`. Every digest in
//! the workspace is therefore computed from properly canonicalized data;
//! there is no second hashing path to diverge from.

use sha2::{Digest as _, Sha256};

use crate::canonical::CanonicalBytes;
use crate::digest::Digest;

/// A deterministic, collision-resistant digest function over canonical bytes.
///
/// Implementations are stateless: the chain types carry the hasher purely
/// at the type level.
pub trait ChainHasher {
    /// Short algorithm name for display and export metadata.
    const ALGORITHM: &'static str;

    /// Digest canonical bytes.
    fn digest(bytes: &CanonicalBytes) -> Digest;
}

/// SHA-256, the default chain hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl ChainHasher for Sha256Hasher {
    const ALGORITHM: &'static str = "sha256";

    fn digest(bytes: &CanonicalBytes) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(bytes.as_bytes());
        Digest::from_bytes(hasher.finalize().into())
    }
}
