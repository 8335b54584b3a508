use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// The codecs the engine understands. Each selects a pure encode/decode
/// function pair; no codec holds state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Base64,
    Url,
    Html,
    Hex,
    Binary,
    Rot13,
    Caesar,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::Base64,
        Kind::Url,
        Kind::Html,
        Kind::Hex,
        Kind::Binary,
        Kind::Rot13,
        Kind::Caesar,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Base64 => "base64",
            Kind::Url => "url",
            Kind::Html => "html",
            Kind::Hex => "hex",
            Kind::Binary => "binary",
            Kind::Rot13 => "rot13",
            Kind::Caesar => "caesar",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base64" => Ok(Kind::Base64),
            "url" => Ok(Kind::Url),
            "html" => Ok(Kind::Html),
            "hex" => Ok(Kind::Hex),
            "binary" => Ok(Kind::Binary),
            "rot13" => Ok(Kind::Rot13),
            "caesar" => Ok(Kind::Caesar),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}
