//! Credential digest utilities.

use sha2::{Digest, Sha224};

/// Compute SHA224 hash and return as lowercase hex string.
///
/// Account secrets are stored as this digest, never as plaintext.
///
/// # Example
/// ```
/// use keypanel_engine::sha224_hex;
///
/// let digest = sha224_hex("password123");
/// assert_eq!(digest.len(), 56); // SHA224 = 224 bits = 28 bytes = 56 hex chars
/// ```
#[inline]
pub fn sha224_hex(input: &str) -> String {
    let mut hasher = Sha224::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check whether a plaintext secret matches a stored digest.
#[inline]
pub fn digest_matches(secret: &str, digest: &str) -> bool {
    sha224_hex(secret) == digest
}
