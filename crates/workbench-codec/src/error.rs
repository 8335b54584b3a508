use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown codec kind: '{0}'")]
    UnknownKind(String),

    #[error("invalid base64 input: {0}")]
    Base64(data_encoding::DecodeError),

    #[error("invalid hex input: {0}")]
    Hex(data_encoding::DecodeError),

    #[error("binary group '{0}' is not a group of 1-8 binary digits")]
    BinaryGroup(String),

    #[error("malformed percent sequence at byte {0}")]
    PercentSequence(usize),

    #[error("decoded bytes are not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}
