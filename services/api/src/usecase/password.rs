//! Game-compatible password hashing.
//!
//! The game server authenticates against the account table using the old
//! MySQL `PASSWORD()` scheme: `"*" + UPPER(HEX(SHA1(SHA1(password))))`.
//! The website must produce byte-identical digests or in-game login breaks,
//! so this is deliberately not a modern password hash.

use sha1::{Digest, Sha1};

/// Hash a raw password into the 41-char legacy digest.
pub fn hash_password(raw: &str) -> String {
    let inner = Sha1::digest(raw.as_bytes());
    let outer = Sha1::digest(inner);
    format!("*{}", hex::encode_upper(outer))
}

/// Verify a raw password against a stored digest. Case-sensitive compare.
pub fn verify_password(digest: &str, raw: &str) -> bool {
    hash_password(raw) == digest
}
