//! Randomized password generation under character-class constraints, plus a
//! heuristic strength scorer.
//!
//! Generation draws every position uniformly from the policy's effective
//! alphabet using a cryptographically strong source; predictability is a
//! failure mode here, not a performance trade-off. Scoring is the fixed
//! additive rubric in [`strength`] and is deliberately reproducible.

// The password crate uses only safe Rust.
#![forbid(unsafe_code)]

pub mod error;
pub mod generate;
pub mod policy;
pub mod strength;

pub use error::Error;
pub use generate::{generate, generate_batch, generate_passphrase};
pub use policy::Policy;
pub use strength::{Level, Report, evaluate};
