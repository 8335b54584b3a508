use thiserror::Error;

use crate::policy::{MAX_LENGTH, MIN_LENGTH};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("length {0} is outside the allowed range {MIN_LENGTH}-{MAX_LENGTH}")]
    LengthOutOfRange(usize),

    #[error("at least one character class must be enabled")]
    NoClassesEnabled,

    #[error("exclusions removed every usable character from the alphabet")]
    AlphabetExhausted,
}
