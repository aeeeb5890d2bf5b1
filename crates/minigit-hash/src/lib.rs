//! Content hashing and digest identity for minigit.
//!
//! Objects are identified by a 32-bit FNV-1a digest of their bytes, printed as
//! 8 lowercase hex characters. FNV-1a is fast and deterministic but it is **not**
//! collision resistant and offers no protection against deliberate tampering.
//! It demonstrates content addressing; it must not be relied on for integrity.

mod digest;
mod error;
pub mod hasher;

pub use digest::Digest;
pub use error::HashError;
pub use hasher::{Hasher, FNV_OFFSET_BASIS, FNV_PRIME};

/// Hash `content` and return its digest as an 8-character lowercase hex string.
///
/// Total and pure: every byte sequence, including the empty one, has a digest.
/// See the crate docs for why this digest is not a security boundary.
pub fn hash(content: &[u8]) -> String {
    Hasher::digest(content).to_hex()
}
