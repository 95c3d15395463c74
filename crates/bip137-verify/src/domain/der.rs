//! # DER Signature Construction
//!
//! Re-encodes the raw 32+32 byte (r, s) pair from a signature envelope into
//! the DER form expected by the curve backend:
//!
//! ```text
//! 0x30 <total> 0x02 <len r> <r> 0x02 <len s> <s>
//! ```
//!
//! Each component is minimally encoded per ASN.1 INTEGER rules: leading zero
//! bytes are stripped, and a single 0x00 is re-prepended when the first byte
//! has its high bit set so the value reads as non-negative.

/// Build a DER-encoded ECDSA signature from raw big-endian `r` and `s`.
pub fn to_der(r: &[u8], s: &[u8]) -> Vec<u8> {
    let r = asn1_integer(r);
    let s = asn1_integer(s);

    let total = 2 + r.len() + 2 + s.len();
    let mut der = Vec::with_capacity(total + 2);
    der.push(0x30); // SEQUENCE
    der.push(total as u8);
    der.push(0x02); // INTEGER
    der.push(r.len() as u8);
    der.extend_from_slice(&r);
    der.push(0x02); // INTEGER
    der.push(s.len() as u8);
    der.extend_from_slice(&s);
    der
}

/// Minimal ASN.1 INTEGER content bytes for an unsigned big-endian value.
///
/// An all-zero input still yields a single 0x00 byte; a zero-length INTEGER
/// field is not legal DER.
fn asn1_integer(bytes: &[u8]) -> Vec<u8> {
    let stripped: &[u8] = {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        &bytes[start..]
    };

    match stripped.first() {
        None => vec![0x00],
        Some(&first) if first & 0x80 != 0 => {
            let mut out = Vec::with_capacity(stripped.len() + 1);
            out.push(0x00);
            out.extend_from_slice(stripped);
            out
        }
        Some(_) => stripped.to_vec(),
    }
}
