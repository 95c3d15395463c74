//! # Verification Errors
//!
//! Error types for signed-message verification.
//!
//! A `false` verification outcome is NOT an error: it is a conclusive
//! "not authenticated" result. Errors mean the question could not be
//! answered (malformed input, recovery failure, elapsed deadline).

use thiserror::Error;

/// Which request field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputField {
    #[error("address")]
    Address,
    #[error("message")]
    Message,
    #[error("signature")]
    Signature,
}

/// Errors that can occur during signed-message verification.
///
/// Structural and input errors are returned immediately and never retried;
/// they indicate malformed input rather than transient failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// A required request field was an empty string.
    ///
    /// Rejected before any cryptography runs.
    #[error("empty {0}")]
    EmptyInput(InputField),

    /// The request carried neither an address nor a public key.
    #[error("request carries neither an address nor a public key")]
    MissingIdentity,

    /// The signature was not valid standard-alphabet base64.
    #[error("signature is not valid base64: {0}")]
    InvalidBase64(String),

    /// The decoded signature was shorter than the 65-byte envelope.
    #[error("malformed signature: expected at least 65 bytes, got {len}")]
    MalformedSignature { len: usize },

    /// The envelope header byte was outside the accepted [27, 42] ranges.
    #[error("invalid signature header byte: 0x{0:02x}")]
    InvalidHeaderByte(u8),

    /// Public key bytes did not decode to a valid secp256k1 point.
    #[error("could not parse public key: {0}")]
    KeyParse(String),

    /// The rebuilt DER signature was rejected by the curve backend.
    #[error("could not parse DER signature: {0}")]
    InvalidDerSignature(String),

    /// Public key recovery from the signature failed.
    #[error("failed to recover public key from signature")]
    RecoveryFailed,

    /// The supplied address was not a valid base58check P2PKH address for
    /// the requested network.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The deadline elapsed before verification completed.
    ///
    /// Distinct from a `false` result so callers can tell "proven invalid"
    /// from "inconclusive due to time budget".
    #[error("signature verification timed out")]
    Timeout,

    /// The background verification task failed to deliver a result.
    #[error("verification task failed: {0}")]
    TaskFailed(String),
}
