//! Cache-busting token for manifest icon URLs.
//!
//! The token is a SHA-256 of the source image bytes, rendered as lowercase
//! hex. It is content-based rather than time-based, so re-running on an
//! unchanged image yields the same `?v=` value and browsers keep their cached
//! icons; touching a single byte of the source changes it.

use sha2::{Digest, Sha256};

/// SHA-256 hash of the given bytes, returned as a 64-character hex string.
pub fn content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
