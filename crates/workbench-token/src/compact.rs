//! Building, parsing, and verifying the three-segment compact form:
//! `base64url(header) . base64url(payload) . base64url(signature)`.

use std::str::FromStr;

use aws_lc_rs::hmac;
use data_encoding::BASE64URL_NOPAD;
use serde_json::{Map, Value};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::error::Error;
use crate::secret::Secret;

/// A decoded compact token. The signature is kept as its raw base64url text;
/// decoding never checks it — see [`verify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub header: Map<String, Value>,
    pub payload: Map<String, Value>,
    pub signature: String,
}

impl Token {
    /// The algorithm the header declares.
    pub fn algorithm(&self) -> Result<Algorithm, Error> {
        algorithm_of(&self.header)
    }
}

/// Build a signed (or, with `alg: none`, unsigned) compact token.
///
/// The header's `alg` field selects the HMAC strength. Signing may suspend
/// while the key is imported and the MAC computed, so the result is awaited.
pub async fn create(
    header: &Map<String, Value>,
    payload: &Map<String, Value>,
    secret: &Secret,
) -> Result<String, Error> {
    let algorithm = algorithm_of(header)?;

    if algorithm != Algorithm::None && secret.is_empty() {
        return Err(Error::MissingSecret);
    }

    let encoded_header = BASE64URL_NOPAD.encode(&serde_json::to_vec(header)?);
    let encoded_payload = BASE64URL_NOPAD.encode(&serde_json::to_vec(payload)?);
    let signing_input = format!("{encoded_header}.{encoded_payload}");

    let signature = match algorithm.hmac() {
        Some(hmac_algorithm) => {
            debug!(%algorithm, "signing token");
            let key = hmac::Key::new(hmac_algorithm, secret.expose());
            let tag = hmac::sign(&key, signing_input.as_bytes());
            BASE64URL_NOPAD.encode(tag.as_ref())
        }
        None => {
            debug!("creating unsecured token (alg 'none')");
            String::new()
        }
    };

    Ok(format!("{signing_input}.{signature}"))
}

/// Split and decode a compact token without verifying its signature.
///
/// Exactly three segments are required; the first two must be base64url
/// (trailing `=` padding is tolerated) JSON objects. Signature verification
/// is deliberately not performed here — callers that need it do so
/// explicitly via [`verify`].
pub fn decode(token: &str) -> Result<Token, Error> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(Error::Malformed(segments.len()));
    };

    Ok(Token {
        header: decode_segment(header, "header")?,
        payload: decode_segment(payload, "payload")?,
        signature: (*signature).to_string(),
    })
}

/// Recompute the HMAC over a token's original encoded segments and compare
/// against its signature in constant time.
///
/// Returns `Ok(false)` for a wrong secret or tampered content. Unsigned
/// (`alg: none`) tokens have nothing to verify and are an error.
pub async fn verify(token: &str, secret: &Secret) -> Result<bool, Error> {
    let decoded = decode(token)?;
    let algorithm = decoded.algorithm()?;

    let Some(hmac_algorithm) = algorithm.hmac() else {
        return Err(Error::UnsignedToken);
    };

    // Verify over the bytes that were actually signed, not a re-serialization
    let signing_input = token
        .rsplit_once('.')
        .map(|(head, _)| head)
        .expect("should be infallible");

    let Ok(signature) = BASE64URL_NOPAD.decode(decoded.signature.as_bytes()) else {
        return Ok(false);
    };

    let key = hmac::Key::new(hmac_algorithm, secret.expose());
    Ok(hmac::verify(&key, signing_input.as_bytes(), &signature).is_ok())
}

/// Cheap structural check: three segments whose header and payload decode.
/// Does not touch the signature.
pub fn validate(token: &str) -> bool {
    decode(token).is_ok()
}

fn algorithm_of(header: &Map<String, Value>) -> Result<Algorithm, Error> {
    let alg = header
        .get("alg")
        .and_then(Value::as_str)
        .ok_or(Error::MissingAlgorithm)?;
    Algorithm::from_str(alg)
}

fn decode_segment(segment: &str, name: &'static str) -> Result<Map<String, Value>, Error> {
    // Tokens produced elsewhere may carry trailing padding; strip it before
    // decoding with the no-pad alphabet.
    let bytes = BASE64URL_NOPAD
        .decode(segment.trim_end_matches('=').as_bytes())
        .map_err(|_| Error::SegmentEncoding(name))?;

    serde_json::from_slice(&bytes).map_err(|_| Error::SegmentJson(name))
}
