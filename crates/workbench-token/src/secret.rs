use std::fmt::{Debug, Formatter};

use workbench_common::crypto::random_bytes;
use zeroize::ZeroizeOnDrop;

/// Caller-supplied signing key material. Zeroed on drop and kept out of
/// `Debug` output.
#[derive(ZeroizeOnDrop)]
pub struct Secret {
    value: Vec<u8>,
}

impl Secret {
    pub fn new(value: &[u8]) -> Self {
        Self {
            value: Vec::from(value),
        }
    }

    /// A fresh random 32-byte secret.
    pub fn new_random() -> Self {
        Secret::new(&random_bytes::<32>())
    }

    pub fn expose(&self) -> &[u8] {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Secret::new(value.as_bytes())
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(len={})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_value() {
        let secret = Secret::from("hunter2");
        assert_eq!(format!("{secret:?}"), "Secret(len=7)");
    }

    #[test]
    fn test_new_random_is_32_bytes_and_unique() {
        let a = Secret::new_random();
        let b = Secret::new_random();
        assert_eq!(a.len(), 32);
        assert_ne!(a.expose(), b.expose());
    }

    #[test]
    fn test_empty_secret_detected() {
        assert!(Secret::from("").is_empty());
        assert!(!Secret::from("key").is_empty());
    }
}
