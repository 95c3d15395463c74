//! # Signature Envelope Decoding
//!
//! Parses the base64-encoded 65-byte BIP-137 signature envelope into its
//! header byte, recovery id, compression flag, and raw (r, s) components.
//!
//! ## Header Byte Policy
//!
//! BIP-137 defines header bytes 27-30 (uncompressed key) and 31-34
//! (compressed key). This engine additionally accepts 35-42, an extended
//! signature-type space emitted by some wallets; that range is an engine
//! policy, not canonical BIP-137. Across the whole accepted range the
//! recovery id is `(header - 27) mod 4` and keys are treated as compressed
//! from 31 upward.

use super::entities::SignatureEnvelope;
use super::errors::VerifyError;
use base64::{engine::general_purpose, Engine as _};

impl SignatureEnvelope {
    /// Length of the raw envelope: 1 header byte + 32-byte R + 32-byte S.
    pub const ENCODED_LENGTH: usize = 65;

    /// Decode an envelope from a base64 signature string.
    ///
    /// # Errors
    ///
    /// * `InvalidBase64` - the string is not standard-alphabet base64
    /// * `MalformedSignature` - fewer than 65 decoded bytes
    /// * `InvalidHeaderByte` - header outside [27, 34] and [35, 42]
    pub fn from_base64(signature_b64: &str) -> Result<Self, VerifyError> {
        let bytes = general_purpose::STANDARD
            .decode(signature_b64)
            .map_err(|e| VerifyError::InvalidBase64(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Decode an envelope from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VerifyError> {
        if bytes.len() < Self::ENCODED_LENGTH {
            return Err(VerifyError::MalformedSignature { len: bytes.len() });
        }

        let header_byte = bytes[0];

        // 27-34 per BIP-137; 35-42 is the extended signature-type space.
        let standard = (27..=34).contains(&header_byte);
        let extended = (35..=42).contains(&header_byte);
        if !standard && !extended {
            return Err(VerifyError::InvalidHeaderByte(header_byte));
        }

        let recovery_id = (header_byte - 27) % 4;
        let compressed = header_byte >= 31;

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[1..33]);
        s.copy_from_slice(&bytes[33..65]);

        tracing::debug!(
            header = header_byte,
            recovery_id,
            compressed,
            "decoded signature envelope"
        );

        Ok(Self {
            header_byte,
            recovery_id,
            compressed,
            r,
            s,
        })
    }

    /// The 64-byte compact `r || s` representation.
    pub fn compact(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }
}
