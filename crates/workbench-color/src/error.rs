use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid hex color: '{0}' (expected 6 hex digits, optionally prefixed with '#')")]
    InvalidHex(String),

    #[error("unknown palette kind: '{0}'")]
    UnknownPaletteKind(String),

    #[error("unknown export format: '{0}'")]
    UnknownFormat(String),
}
