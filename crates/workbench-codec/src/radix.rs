//! Byte-oriented codecs: base64, hex, and binary.
//!
//! All three operate on the UTF-8 encoding of the input text, so multi-byte
//! characters survive an encode/decode round trip exactly.

use std::fmt::Write as _;

use data_encoding::{BASE64, HEXLOWER_PERMISSIVE};

use crate::error::Error;

/// Encode text as standard base64 (RFC 4648, with padding).
pub fn base64_encode(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

/// Decode standard base64 back to text. Rejects malformed padding, characters
/// outside the alphabet, and byte sequences that are not valid UTF-8.
pub fn base64_decode(text: &str) -> Result<String, Error> {
    let bytes = BASE64.decode(text.as_bytes()).map_err(Error::Base64)?;
    Ok(String::from_utf8(bytes)?)
}

/// Encode text as lowercase hex, two digits per byte, no separators.
pub fn hex_encode(text: &str) -> String {
    HEXLOWER_PERMISSIVE.encode(text.as_bytes())
}

/// Decode hex (either case) back to text. Rejects odd-length input and
/// non-hex characters.
pub fn hex_decode(text: &str) -> Result<String, Error> {
    let bytes = HEXLOWER_PERMISSIVE
        .decode(text.as_bytes())
        .map_err(Error::Hex)?;
    Ok(String::from_utf8(bytes)?)
}

/// Encode text as space-separated groups of 8 zero-padded binary digits,
/// one group per byte.
pub fn binary_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 9);

    for (i, byte) in text.bytes().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(&mut out, "{byte:08b}").expect("should be infallible");
    }

    out
}

/// Decode space-separated binary groups back to text. Each group must be
/// 1-8 binary digits.
pub fn binary_decode(text: &str) -> Result<String, Error> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let mut bytes = Vec::with_capacity(text.len() / 9 + 1);

    for group in text.split(' ') {
        if group.is_empty() || group.len() > 8 {
            return Err(Error::BinaryGroup(group.to_string()));
        }
        let byte = u8::from_str_radix(group, 2)
            .map_err(|_| Error::BinaryGroup(group.to_string()))?;
        bytes.push(byte);
    }

    Ok(String::from_utf8(bytes)?)
}
