use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("token must have 3 dot-separated segments, found {0}")]
    Malformed(usize),

    #[error("{0} segment is not valid base64url")]
    SegmentEncoding(&'static str),

    #[error("{0} segment is not a JSON object")]
    SegmentJson(&'static str),

    #[error("header has no 'alg' field")]
    MissingAlgorithm,

    #[error("unknown signing algorithm: '{0}'")]
    UnknownAlgorithm(String),

    #[error("a secret is required for signed tokens")]
    MissingSecret,

    #[error("token is unsigned (alg 'none'); nothing to verify")]
    UnsignedToken,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
