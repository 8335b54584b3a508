//! URI component percent-encoding.
//!
//! Follows the `encodeURIComponent` reserved-character rules: unreserved
//! characters (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`) pass through, every other
//! byte of the UTF-8 encoding becomes an uppercase `%XX` escape.

use std::fmt::Write as _;

use crate::error::Error;

const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Percent-encode a URI component.
pub fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for byte in text.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            write!(&mut out, "%{byte:02X}").expect("should be infallible");
        }
    }

    out
}

/// Decode a percent-encoded URI component. A `%` must be followed by exactly
/// two hex digits; `+` is left as-is (this is component decoding, not
/// form decoding).
pub fn percent_decode(text: &str) -> Result<String, Error> {
    let input = text.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        match input[pos] {
            b'%' => {
                let hex = input
                    .get(pos + 1..pos + 3)
                    .ok_or(Error::PercentSequence(pos))?;
                let high = hex_value(hex[0]).ok_or(Error::PercentSequence(pos))?;
                let low = hex_value(hex[1]).ok_or(Error::PercentSequence(pos))?;
                bytes.push(high << 4 | low);
                pos += 3;
            }
            byte => {
                bytes.push(byte);
                pos += 1;
            }
        }
    }

    Ok(String::from_utf8(bytes)?)
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        let text = "AZaz09-_.!~*'()";
        assert_eq!(percent_encode(text), text);
    }

    #[test]
    fn test_reserved_escaped() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("100%"), "100%25");
    }

    #[test]
    fn test_unicode_escaped_per_byte() {
        assert_eq!(percent_encode("é"), "%C3%A9");
        assert_eq!(percent_decode("%C3%A9").unwrap(), "é");
    }

    #[test]
    fn test_round_trip() {
        let text = "key=value & more? 50% off! ☃";
        assert_eq!(percent_decode(&percent_encode(text)).unwrap(), text);
    }

    #[test]
    fn test_plus_is_not_space() {
        assert_eq!(percent_decode("a+b").unwrap(), "a+b");
    }

    #[test]
    fn test_truncated_sequence() {
        assert!(matches!(
            percent_decode("abc%4"),
            Err(Error::PercentSequence(3))
        ));
        assert!(matches!(
            percent_decode("abc%"),
            Err(Error::PercentSequence(3))
        ));
    }

    #[test]
    fn test_non_hex_sequence() {
        assert!(matches!(
            percent_decode("%zz"),
            Err(Error::PercentSequence(0))
        ));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert!(matches!(percent_decode("%FF"), Err(Error::NotUtf8(_))));
    }
}
