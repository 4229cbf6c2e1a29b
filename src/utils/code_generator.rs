//! Deterministic short code generation.
//!
//! A short code is the base62 rendering of the SHA-256 digest of the long
//! URL, truncated to its first 8 characters. The same input always yields
//! the same code.

use sha2::{Digest, Sha256};

/// The 62-symbol alphabet: digits, then uppercase, then lowercase.
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Maximum short code length in characters.
const MAX_CODE_LEN: usize = 8;

/// Derives the short code for a long URL.
///
/// Computes the SHA-256 digest of the UTF-8 bytes, encodes the digest as a
/// base62 string, and truncates to the first [`MAX_CODE_LEN`] characters.
///
/// Codes are not left-padded: when the digest's leading bytes are zero the
/// encoding is shorter and is returned as-is, so the output length is 0..=8.
///
/// # Examples
///
/// ```
/// use shorter::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("https://example.com"), "3nbe4xkn");
/// assert_eq!(generate_code("https://example.com"), generate_code("https://example.com"));
/// ```
pub fn generate_code(long_url: &str) -> String {
    let digest = Sha256::digest(long_url.as_bytes());
    let mut encoded = base62_encode(&digest);
    encoded.truncate(MAX_CODE_LEN);
    encoded
}

/// Encodes a big-endian byte buffer as base62, most significant digit first.
///
/// The buffer is treated as a single unsigned integer and divided by 62
/// repeatedly; each remainder indexes [`BASE62_ALPHABET`]. A 256-bit digest
/// does not fit any fixed-width integer, so the division runs directly over
/// the byte buffer in base 256.
///
/// The integer zero encodes to the empty string.
fn base62_encode(bytes: &[u8]) -> String {
    // Strip leading zero bytes so the loop terminates on an empty quotient.
    let mut digits: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    let mut remainders: Vec<u8> = Vec::new();

    while !digits.is_empty() {
        let mut rem: u16 = 0;
        let mut quotient: Vec<u8> = Vec::with_capacity(digits.len());

        for &byte in &digits {
            let acc = (rem << 8) | u16::from(byte);
            let q = (acc / 62) as u8;
            rem = acc % 62;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q);
            }
        }

        remainders.push(rem as u8);
        digits = quotient;
    }

    remainders
        .iter()
        .rev()
        .map(|&d| char::from(BASE62_ALPHABET[usize::from(d)]))
        .collect()
}
