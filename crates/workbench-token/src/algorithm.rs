use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use aws_lc_rs::hmac;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Signing algorithms a token header may declare. The `none` sentinel
/// produces an unsecured token with an empty signature segment; callers are
/// expected to surface that state to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "HS256")]
    Hs256,
    #[serde(rename = "HS384")]
    Hs384,
    #[serde(rename = "HS512")]
    Hs512,
    #[serde(rename = "none")]
    None,
}

impl Algorithm {
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
            Algorithm::None => "none",
        }
    }

    /// The HMAC primitive for this algorithm, or `None` for unsigned tokens.
    pub fn hmac(&self) -> Option<hmac::Algorithm> {
        match self {
            Algorithm::Hs256 => Some(hmac::HMAC_SHA256),
            Algorithm::Hs384 => Some(hmac::HMAC_SHA384),
            Algorithm::Hs512 => Some(hmac::HMAC_SHA512),
            Algorithm::None => None,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hs256" => Ok(Algorithm::Hs256),
            "hs384" => Ok(Algorithm::Hs384),
            "hs512" => Ok(Algorithm::Hs512),
            "none" => Ok(Algorithm::None),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_either_case() {
        assert_eq!("HS256".parse::<Algorithm>().unwrap(), Algorithm::Hs256);
        assert_eq!("hs512".parse::<Algorithm>().unwrap(), Algorithm::Hs512);
        assert_eq!("none".parse::<Algorithm>().unwrap(), Algorithm::None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(matches!(
            "RS256".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_only_none_lacks_an_hmac() {
        assert!(Algorithm::Hs256.hmac().is_some());
        assert!(Algorithm::Hs384.hmac().is_some());
        assert!(Algorithm::Hs512.hmac().is_some());
        assert!(Algorithm::None.hmac().is_none());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&Algorithm::Hs256).unwrap(),
            "\"HS256\""
        );
        assert_eq!(
            serde_json::from_str::<Algorithm>("\"none\"").unwrap(),
            Algorithm::None
        );
    }
}
