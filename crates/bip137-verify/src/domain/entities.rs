//! # Domain Entities
//!
//! Core data structures for signed-message verification. Everything here is
//! value-typed and transient per verification call; nothing is retained or
//! shared across calls.

use k256::ecdsa::VerifyingKey;
use serde::{Deserialize, Serialize};

/// Double-SHA256 digest of the canonical signed-message pre-image.
pub type MessageDigest = [u8; 32];

/// RIPEMD160(SHA256(pubkey)) payload of a P2PKH address.
pub type PubkeyHash = [u8; 20];

// =============================================================================
// Network Parameters
// =============================================================================

/// Address-encoding parameters for a Bitcoin network.
///
/// Opaque to the verification core: only the P2PKH version byte is consulted,
/// both when deriving addresses and when validating caller-supplied ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Version byte prepended to the pubkey hash before base58check encoding.
    pub pubkey_hash_version: u8,
}

impl Network {
    /// Bitcoin mainnet (addresses starting with `1`).
    pub const MAINNET: Network = Network {
        pubkey_hash_version: 0x00,
    };

    /// Bitcoin testnet3 (addresses starting with `m` or `n`).
    pub const TESTNET: Network = Network {
        pubkey_hash_version: 0x6F,
    };

    /// Parameters for a custom network.
    pub const fn new(pubkey_hash_version: u8) -> Self {
        Self { pubkey_hash_version }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::MAINNET
    }
}

// =============================================================================
// Signature Envelope
// =============================================================================

/// Decoded BIP-137 signature envelope.
///
/// Derived immutably from the 65-byte base64-decoded signature; constructed
/// per verification call and discarded after use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEnvelope {
    /// The raw header byte (first byte of the envelope).
    pub header_byte: u8,
    /// Recovery id in [0, 3], selects the candidate public key.
    pub recovery_id: u8,
    /// Whether the signing key was serialized in compressed form.
    pub compressed: bool,
    /// R component, big-endian.
    pub r: [u8; 32],
    /// S component, big-endian.
    pub s: [u8; 32],
}

// =============================================================================
// Verification Request
// =============================================================================

/// A message allegedly signed with a Bitcoin private key, together with the
/// identity to check it against.
///
/// At least one of `address` / `public_key` must be present; `message` and
/// `signature` must be non-empty. Violations are rejected as input errors
/// before any cryptography runs.
#[derive(Clone, Debug)]
pub struct SignedMessageRequest {
    /// The Bitcoin P2PKH address that allegedly signed the message.
    pub address: Option<String>,

    /// The secp256k1 public key that allegedly signed the message.
    pub public_key: Option<VerifyingKey>,

    /// The content that was signed.
    pub message: String,

    /// The base64-encoded signature envelope.
    pub signature: String,
}

impl SignedMessageRequest {
    /// Request verification against a Bitcoin address.
    pub fn by_address(
        address: impl Into<String>,
        message: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            address: Some(address.into()),
            public_key: None,
            message: message.into(),
            signature: signature.into(),
        }
    }

    /// Request verification against a public key.
    pub fn by_public_key(
        public_key: VerifyingKey,
        message: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            address: None,
            public_key: Some(public_key),
            message: message.into(),
            signature: signature.into(),
        }
    }
}
