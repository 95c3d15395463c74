//! # Message Canonicalization
//!
//! Builds the exact byte sequence that gets hashed for Bitcoin message
//! signing, and the compact-size (varint) length prefixes it uses.
//!
//! The pre-image is:
//!
//! ```text
//! varint(len(prefix)) || prefix || varint(len(message)) || message
//! ```
//!
//! with `prefix = "Bitcoin Signed Message:\n"`, and the digest is double
//! SHA-256 of those bytes. This is the single fixed convention supported by
//! this engine; wallets that deviate (different prefix, extra newlines) will
//! produce signatures that do not verify here.

use super::entities::MessageDigest;
use sha2::{Digest, Sha256};

/// The prefix for Bitcoin's message signing protocol.
pub const SIGNED_MESSAGE_PREFIX: &str = "Bitcoin Signed Message:\n";

/// Encode an unsigned integer in Bitcoin's compact-size (varint) format.
///
/// Matches Bitcoin Core's CompactSize encoding exactly:
/// - `n < 253`: single byte
/// - `n <= 0xFFFF`: marker 253 + 2 little-endian bytes
/// - `n <= 0xFFFFFFFF`: marker 254 + 4 little-endian bytes
/// - otherwise: marker 255 + 8 little-endian bytes
pub fn encode_compact_size(n: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    append_compact_size(&mut out, n);
    out
}

fn append_compact_size(buf: &mut Vec<u8>, n: u64) {
    if n < 253 {
        buf.push(n as u8);
    } else if n <= 0xFFFF {
        buf.push(253);
        buf.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xFFFF_FFFF {
        buf.push(254);
        buf.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        buf.push(255);
        buf.extend_from_slice(&n.to_le_bytes());
    }
}

/// Build the canonical signed-message pre-image for `message`.
///
/// Pure function of the UTF-8 bytes of `message`; accepts the empty string.
/// Rejecting empty messages is orchestrator policy, not a property of the
/// canonical format.
pub fn canonicalize(message: &str) -> Vec<u8> {
    let prefix = SIGNED_MESSAGE_PREFIX.as_bytes();
    let body = message.as_bytes();

    let mut out = Vec::with_capacity(2 + prefix.len() + 9 + body.len());
    append_compact_size(&mut out, prefix.len() as u64);
    out.extend_from_slice(prefix);
    append_compact_size(&mut out, body.len() as u64);
    out.extend_from_slice(body);
    out
}

/// Double-SHA256 digest of arbitrary bytes.
pub fn sha256d(data: &[u8]) -> MessageDigest {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Digest a message string for signature verification: canonicalize, then
/// double-SHA256.
pub fn signed_message_digest(message: &str) -> MessageDigest {
    sha256d(&canonicalize(message))
}
