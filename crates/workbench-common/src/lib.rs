//! This crate provides shared functionality used by multiple engine crates,
//! currently limited to cryptographically secure randomness helpers.

#![forbid(unsafe_code)]

pub mod crypto;
