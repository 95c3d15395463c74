//! # Verification Strategies
//!
//! The two verification paths and the fallback policy between them.
//!
//! - **Address path**: recovers the public key from the envelope and compares
//!   its hash160 to the address payload. Supports any address whose signer is
//!   unknown in advance.
//! - **Public-key path**: rebuilds a DER signature and checks it directly
//!   against the supplied key; strictly cheaper, since it skips key recovery
//!   and address re-encoding.
//! - **Fallback**: public-key path first; an *error* there (never a
//!   conclusive `false`) escalates to the address derived from the key.
//!
//! For a signature produced against a key, the two paths agree whenever both
//! complete without error.

use super::address::{decode_address, derive_address, hash160};
use super::der::to_der;
use super::entities::{MessageDigest, Network, SignatureEnvelope};
use super::errors::{InputField, VerifyError};
use super::message::signed_message_digest;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use tracing::{debug, warn};

/// Verify a BIP-137 signature against a P2PKH address, mainnet parameters.
pub fn verify_bip137_signature(
    address: &str,
    message: &str,
    signature_b64: &str,
) -> Result<bool, VerifyError> {
    verify_by_address(address, message, signature_b64, &Network::MAINNET)
}

/// Verify a BIP-137 signature against a P2PKH address.
///
/// Recovers the public key from the signature envelope, serializes it per
/// the envelope's compression flag, and compares its hash160 against the
/// address payload. A mismatch is a conclusive `Ok(false)`.
///
/// # Errors
///
/// Empty inputs, envelope decode failures, recovery failures, and invalid
/// addresses are errors; none of them mean "signature invalid".
pub fn verify_by_address(
    address: &str,
    message: &str,
    signature_b64: &str,
    network: &Network,
) -> Result<bool, VerifyError> {
    if address.is_empty() {
        return Err(VerifyError::EmptyInput(InputField::Address));
    }
    if message.is_empty() {
        return Err(VerifyError::EmptyInput(InputField::Message));
    }
    if signature_b64.is_empty() {
        return Err(VerifyError::EmptyInput(InputField::Signature));
    }

    let envelope = SignatureEnvelope::from_base64(signature_b64)?;
    let digest = signed_message_digest(message);

    let recovered = recover_public_key(&digest, &envelope)?;
    let point = recovered.to_encoded_point(envelope.compressed);
    let candidate = hash160(point.as_bytes());

    let expected = decode_address(address, network)?;

    let valid = candidate == expected;
    debug!(address, valid, "address-based verification complete");
    Ok(valid)
}

/// Verify a BIP-137 signature directly against a public key.
///
/// Decodes the envelope, double-hashes the canonical message, rebuilds a DER
/// signature from (r, s), and asks the curve backend whether it verifies
/// against the key. The backend's boolean answer is returned unchanged; a
/// cryptographic mismatch is `Ok(false)`, a structural failure is `Err`.
pub fn verify_by_public_key(
    public_key: &VerifyingKey,
    message: &str,
    signature_b64: &str,
) -> Result<bool, VerifyError> {
    if message.is_empty() {
        return Err(VerifyError::EmptyInput(InputField::Message));
    }
    if signature_b64.is_empty() {
        return Err(VerifyError::EmptyInput(InputField::Signature));
    }

    let envelope = SignatureEnvelope::from_base64(signature_b64)?;
    let digest = signed_message_digest(message);

    let der = to_der(&envelope.r, &envelope.s);
    debug!(der = %hex::encode(&der), "rebuilt DER signature");

    let signature = Signature::from_der(&der)
        .map_err(|e| VerifyError::InvalidDerSignature(e.to_string()))?;
    // The backend insists on low-S; high-S envelopes are still legitimate
    // BIP-137 input, so normalize before asking.
    let signature = signature.normalize_s().unwrap_or(signature);

    let valid = public_key.verify_prehash(&digest, &signature).is_ok();
    debug!(valid, "direct verification complete");
    Ok(valid)
}

/// Verify against a public key, falling back to the derived address.
///
/// The direct path runs first. On an error (not on a `false` result) the
/// P2PKH address is derived from the key and the address path is tried
/// instead; its outcome replaces the primary one. `Ok(false)` from the
/// direct path is a conclusive negative and does not trigger the fallback.
pub fn verify_by_public_key_with_fallback(
    public_key: &VerifyingKey,
    message: &str,
    signature_b64: &str,
    network: &Network,
) -> Result<bool, VerifyError> {
    match verify_by_public_key(public_key, message, signature_b64) {
        Ok(valid) => Ok(valid),
        Err(primary) => {
            warn!(error = %primary, "direct verification errored, retrying via derived address");
            let address = derive_address(public_key, network);
            verify_by_address(&address, message, signature_b64, network)
        }
    }
}

/// Parse a SEC1-encoded public key (compressed or uncompressed).
///
/// # Errors
///
/// `KeyParse` when the bytes do not decode to a valid secp256k1 point.
pub fn parse_public_key(bytes: &[u8]) -> Result<VerifyingKey, VerifyError> {
    VerifyingKey::from_sec1_bytes(bytes).map_err(|e| VerifyError::KeyParse(e.to_string()))
}

/// Recover the signing public key from a digest and envelope.
pub(crate) fn recover_public_key(
    digest: &MessageDigest,
    envelope: &SignatureEnvelope,
) -> Result<VerifyingKey, VerifyError> {
    let signature = Signature::from_slice(&envelope.compact()).map_err(|e| {
        debug!(error = %e, "signature scalars rejected by curve backend");
        VerifyError::RecoveryFailed
    })?;

    let recovery_id = RecoveryId::try_from(envelope.recovery_id)
        .map_err(|_| VerifyError::InvalidHeaderByte(envelope.header_byte))?;

    VerifyingKey::recover_from_prehash(digest, &signature, recovery_id).map_err(|e| {
        debug!(error = %e, "public key recovery failed");
        VerifyError::RecoveryFailed
    })
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
