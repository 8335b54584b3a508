//! Bidirectional text codecs.
//!
//! Every codec is a stateless pair of pure functions selected by [`Kind`].
//! Encoding is total; decoding reports malformed input through [`Error`]
//! instead of panicking. The byte-oriented codecs (base64, url, hex, binary)
//! operate on the UTF-8 encoding of the text, so any Unicode string survives
//! a round trip: `decode(&encode(s, kind), kind) == s`.
//!
//! The HTML codec is the one documented exception to exact invertibility:
//! decode accepts a superset of what encode emits (see [`entity`]).

// The codec crate uses only safe Rust.
#![forbid(unsafe_code)]

pub mod entity;
pub mod error;
pub mod kind;
pub mod percent;
pub mod radix;
pub mod shift;

pub use error::Error;
pub use kind::Kind;

/// Encode `text` with the selected codec. Total over all input.
pub fn encode(text: &str, kind: Kind) -> String {
    match kind {
        Kind::Base64 => radix::base64_encode(text),
        Kind::Url => percent::percent_encode(text),
        Kind::Html => entity::entity_encode(text),
        Kind::Hex => radix::hex_encode(text),
        Kind::Binary => radix::binary_encode(text),
        Kind::Rot13 => shift::rot13(text),
        Kind::Caesar => shift::caesar_encode(text),
    }
}

/// Decode `text` with the selected codec, failing on malformed input.
pub fn decode(text: &str, kind: Kind) -> Result<String, Error> {
    match kind {
        Kind::Base64 => radix::base64_decode(text),
        Kind::Url => percent::percent_decode(text),
        Kind::Html => Ok(entity::entity_decode(text)),
        Kind::Hex => radix::hex_decode(text),
        Kind::Binary => radix::binary_decode(text),
        Kind::Rot13 => Ok(shift::rot13(text)),
        Kind::Caesar => Ok(shift::caesar_decode(text)),
    }
}
