//! # BIP-137 Signed-Message Verification
//!
//! Verifies that a Bitcoin message signature (BIP-137 envelope format) was
//! produced by the private key controlling a given P2PKH address, or by the
//! private key matching a given secp256k1 public key.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure protocol and cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definition for the inbound API
//! - **Service Layer** (`service.rs`): Wires domain logic to the port and adds
//!   the deadline-bounded entry point
//!
//! ## Verification Strategies
//!
//! - **By address**: recovers the public key from the signature envelope and
//!   compares its hash160 against the address payload. Works for any address
//!   whose signer is unknown in advance.
//! - **By public key**: rebuilds a DER signature from the envelope and checks
//!   it directly against the supplied key. Faster, since it skips key recovery
//!   and address re-encoding.
//! - **With fallback**: the public-key path first; on an *error* (never on a
//!   conclusive `false`) the address derived from the key is tried instead.
//!
//! ## Format Notes
//!
//! - The message pre-image is the fixed `"Bitcoin Signed Message:\n"`
//!   convention with compact-size length prefixes, double-SHA256 hashed.
//!   Wallets using a different prefix convention will not verify here.
//! - Header bytes 35-42 are accepted as an extended signature-type space in
//!   addition to the 27-34 range defined by BIP-137.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::address::{decode_address, derive_address, hash160};
pub use domain::der::to_der;
pub use domain::entities::{
    MessageDigest, Network, PubkeyHash, SignatureEnvelope, SignedMessageRequest,
};
pub use domain::errors::{InputField, VerifyError};
pub use domain::message::{
    canonicalize, encode_compact_size, signed_message_digest, SIGNED_MESSAGE_PREFIX,
};
pub use domain::verify::{
    parse_public_key, verify_bip137_signature, verify_by_address, verify_by_public_key,
    verify_by_public_key_with_fallback,
};
pub use ports::inbound::MessageVerificationApi;
pub use service::MessageVerificationService;

// The public key type accepted by this crate's API.
pub use k256::ecdsa::VerifyingKey;
