//! # Inbound Ports (Driving Ports / API)
//!
//! Trait that defines the public API of this crate.

use crate::domain::errors::VerifyError;
use k256::ecdsa::VerifyingKey;

/// Primary signed-message verification API.
///
/// Each call is synchronous, CPU-bound, and owns its own working state, so
/// implementations must be thread-safe (`Send + Sync`) and may be invoked
/// from any number of concurrent callers.
///
/// `Ok(false)` from any operation means "not authenticated", conclusively;
/// errors mean the question could not be answered.
pub trait MessageVerificationApi: Send + Sync {
    /// Verify a BIP-137 signature against a P2PKH address.
    ///
    /// Recovers the public key from the envelope, so it supports any address
    /// whose signer is unknown in advance.
    fn verify_by_address(
        &self,
        address: &str,
        message: &str,
        signature: &str,
    ) -> Result<bool, VerifyError>;

    /// Verify a BIP-137 signature directly against a public key.
    ///
    /// The fast, pubkey-certain path: skips key recovery and address
    /// re-encoding entirely.
    fn verify_by_public_key(
        &self,
        public_key: &VerifyingKey,
        message: &str,
        signature: &str,
    ) -> Result<bool, VerifyError>;

    /// Verify against a public key, falling back to the derived address.
    ///
    /// The fallback fires only on an error from the direct path; a
    /// conclusive `Ok(false)` is returned as-is.
    fn verify_by_public_key_with_fallback(
        &self,
        public_key: &VerifyingKey,
        message: &str,
        signature: &str,
    ) -> Result<bool, VerifyError>;

    /// Derive the P2PKH address controlled by a public key.
    fn derive_address(&self, public_key: &VerifyingKey) -> String;
}
