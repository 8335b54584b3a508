//! Cryptographically secure randomness shared across the engines

use std::fmt::Write as _;

const KEY_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate cryptographically secure random bytes
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut val = [0u8; N];
    aws_lc_rs::rand::fill(&mut val).expect("should be infallible");
    val
}

/// Draw an index uniformly from `0..bound` without modulo bias.
///
/// Values falling in the tail of the `u32` range that cannot be mapped
/// uniformly are rejected and redrawn.
///
/// # Panics
///
/// Panics if `bound` is zero or exceeds `u32::MAX`.
pub fn random_index(bound: usize) -> usize {
    assert!(bound > 0, "bound must be non-zero");
    assert!(bound <= u32::MAX as usize, "bound exceeds u32 range");

    let bound = bound as u64;
    // Largest multiple of `bound` that fits in 2^32 draws.
    let zone = ((1u64 << 32) / bound) * bound;

    loop {
        let draw = u64::from(u32::from_le_bytes(random_bytes::<4>()));
        if draw < zone {
            return (draw % bound) as usize;
        }
    }
}

/// Generate a random alphanumeric key of `len` characters, suitable for use
/// as an HMAC secret or API key.
pub fn random_key(len: usize) -> String {
    (0..len)
        .map(|_| KEY_ALPHABET[random_index(KEY_ALPHABET.len())] as char)
        .collect()
}

/// Generate an RFC 4122 version-4 UUID from secure random bytes.
pub fn uuid_v4() -> String {
    let mut bytes = random_bytes::<16>();

    // RFC 4122 4.4: version nibble 0b0100, variant bits 0b10
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let mut out = String::with_capacity(36);
    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        write!(&mut out, "{byte:02x}").expect("should be infallible");
    }

    out
}
