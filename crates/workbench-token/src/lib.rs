//! Compact-token construction and parsing.
//!
//! A token is three base64url segments joined by dots: a JSON header, a JSON
//! payload, and an HMAC signature keyed by a caller-supplied [`Secret`]. The
//! signer is illustrative rather than a security-audited JWT implementation;
//! in particular, [`decode`] never verifies signatures — [`verify`] is the
//! explicit, separate operation for that.
//!
//! [`create`] and [`verify`] are async: the underlying key import and MAC
//! computation are treated as suspend points, so callers must not assume
//! same-tick completion.

// The token crate uses only safe Rust.
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod compact;
pub mod error;
pub mod secret;

pub use algorithm::Algorithm;
pub use compact::{Token, create, decode, validate, verify};
pub use error::Error;
pub use secret::Secret;
