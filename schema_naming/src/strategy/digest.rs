//! One-way digests used to keep generated identifiers unique
//!
//! Index and foreign key names embed a hex digest of a key built from the
//! table and column names. The digest only has to be stable, not secure.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Number of digest characters kept in a generated foreign key name
pub const DEFAULT_FOREIGN_KEY_DIGEST_LENGTH: usize = 27;

/// A pure function from a key to a stable hex string
pub trait KeyDigest: Send + Sync {
    /// Digest `key` into a hex string
    fn hex_digest(&self, key: &str) -> String;
}

/// Well-known digest algorithms selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha1,
    Md5,
}

impl DigestAlgorithm {
    /// Length of the hex string this algorithm produces
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 40,
            DigestAlgorithm::Md5 => 32,
        }
    }
}

impl KeyDigest for DigestAlgorithm {
    fn hex_digest(&self, key: &str) -> String {
        match self {
            DigestAlgorithm::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(key.as_bytes());
                format!("{:x}", hasher.finalize())
            }
            DigestAlgorithm::Md5 => format!("{:x}", md5::compute(key.as_bytes())),
        }
    }
}

impl<F> KeyDigest for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn hex_digest(&self, key: &str) -> String {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_known_values() {
        assert_eq!(
            DigestAlgorithm::Sha1.hex_digest("abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            DigestAlgorithm::Sha1.hex_digest(""),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn test_md5_known_values() {
        assert_eq!(
            DigestAlgorithm::Md5.hex_digest("abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            DigestAlgorithm::Md5.hex_digest(""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_hex_len_matches_output() {
        for algorithm in [DigestAlgorithm::Sha1, DigestAlgorithm::Md5] {
            let digest = algorithm.hex_digest("ind_users_email");
            assert_eq!(digest.len(), algorithm.hex_len());
            assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_closure_digest() {
        let digest = |key: &str| key.len().to_string();
        assert_eq!(digest.hex_digest("abcd"), "4");
    }
}
