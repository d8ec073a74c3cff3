//! Leaf hashers: the cryptographic primitive that turns a data block into a
//! leaf digest

use super::Digest;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A deterministic, fixed-output hash applied to every leaf block.
///
/// Trees are generic over their hasher, so the same primitive that built the
/// leaves is used again when a proof target is hashed.
pub trait LeafHasher {
    /// Name used in CLI output and configuration
    const NAME: &'static str;

    /// Hash one data block into a leaf digest
    fn hash(data: &[u8]) -> Digest;
}

/// SHA-256 leaf hasher (the default)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256;

impl LeafHasher for Sha256 {
    const NAME: &'static str = "sha256";

    fn hash(data: &[u8]) -> Digest {
        use sha2::Digest as _;
        let out = sha2::Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&out);
        Digest::from_bytes(bytes)
    }
}

/// BLAKE3 leaf hasher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blake3;

impl LeafHasher for Blake3 {
    const NAME: &'static str = "blake3";

    fn hash(data: &[u8]) -> Digest {
        Digest::from_bytes(*blake3::hash(data).as_bytes())
    }
}

/// Runtime choice of leaf hasher, as named on the command line and in config
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => Sha256::NAME,
            HashAlgorithm::Blake3 => Blake3::NAME,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(Error::InvalidInput(format!(
                "unknown hasher '{}' (expected sha256 or blake3)",
                other
            ))),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            Sha256::hash(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            Sha256::hash(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_blake3_known_vector() {
        assert_eq!(
            Blake3::hash(b"").to_hex(),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_hashers_are_deterministic_and_distinct() {
        assert_eq!(Sha256::hash(b"hello"), Sha256::hash(b"hello"));
        assert_ne!(Sha256::hash(b"hello"), Sha256::hash(b"world"));
        assert_ne!(Sha256::hash(b"hello"), Blake3::hash(b"hello"));
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::Blake3.to_string(), "blake3");
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("BLAKE3".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Blake3);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = "md5".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_algorithm_serde_names() {
        let parsed: HashAlgorithm = serde_json::from_str("\"blake3\"").unwrap();
        assert_eq!(parsed, HashAlgorithm::Blake3);
        assert_eq!(
            serde_json::to_string(&HashAlgorithm::Sha256).unwrap(),
            "\"sha256\""
        );
    }
}
