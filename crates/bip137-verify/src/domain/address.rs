//! # P2PKH Address Derivation
//!
//! Maps secp256k1 public keys to base58check P2PKH address strings and back
//! to their hash160 payloads. The network parameter supplies the version
//! byte; nothing else about the network is consulted.

use super::entities::{Network, PubkeyHash};
use super::errors::VerifyError;
use k256::ecdsa::VerifyingKey;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// RIPEMD160(SHA256(data)), the Bitcoin "hash160".
pub fn hash160(data: &[u8]) -> PubkeyHash {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Derive the P2PKH address for a public key on the given network.
///
/// The key is serialized in compressed SEC1 form (33 bytes) before hashing,
/// matching the modern wallet convention.
pub fn derive_address(public_key: &VerifyingKey, network: &Network) -> String {
    let point = public_key.to_encoded_point(true);
    p2pkh_address(&hash160(point.as_bytes()), network)
}

/// Encode a pubkey hash as a version-prefixed base58check address.
pub(crate) fn p2pkh_address(pubkey_hash: &PubkeyHash, network: &Network) -> String {
    let mut payload = Vec::with_capacity(1 + pubkey_hash.len());
    payload.push(network.pubkey_hash_version);
    payload.extend_from_slice(pubkey_hash);
    bs58::encode(payload).with_check().into_string()
}

/// Decode a P2PKH address into its 20-byte pubkey hash.
///
/// # Errors
///
/// `InvalidAddress` when the string is not valid base58check, the payload is
/// not version byte + 20 bytes, or the version byte does not match the
/// requested network.
pub fn decode_address(address: &str, network: &Network) -> Result<PubkeyHash, VerifyError> {
    let payload = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| VerifyError::InvalidAddress(e.to_string()))?;

    if payload.len() != 21 {
        return Err(VerifyError::InvalidAddress(format!(
            "expected 21 payload bytes, got {}",
            payload.len()
        )));
    }
    if payload[0] != network.pubkey_hash_version {
        return Err(VerifyError::InvalidAddress(format!(
            "version byte 0x{:02x} does not match network 0x{:02x}",
            payload[0], network.pubkey_hash_version
        )));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok(hash)
}
