//! Digest provider: the process-wide registry of named hash algorithms.
//!
//! The registry is populated once at startup and read-only thereafter. Every
//! entry maps an identifier to a pure digest function and the fixed length of
//! its output; lookups of unregistered identifiers fail explicitly instead of
//! handing back a set with no hash function bound.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{DigestSetError, Result};

/// A registered hash algorithm: identifier, output length, digest function.
#[derive(Debug, Clone, Copy)]
pub struct HashAlgorithm {
    id: &'static str,
    digest_len: usize,
    digest_fn: fn(&[u8]) -> Vec<u8>,
}

impl HashAlgorithm {
    /// Identifier this algorithm is registered under.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Fixed length in bytes of every digest this algorithm produces.
    #[must_use]
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    /// Compute the digest of `data`.
    ///
    /// Pure function of its input; always returns exactly
    /// [`digest_len`](Self::digest_len) bytes.
    #[must_use]
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        (self.digest_fn)(data)
    }
}

fn sha256_digest(data: &[u8]) -> Vec<u8> {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

fn sha512_digest(data: &[u8]) -> Vec<u8> {
    use sha2::{Digest, Sha512};

    let mut hasher = Sha512::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

fn sha3_256_digest(data: &[u8]) -> Vec<u8> {
    use sha3::{Digest, Sha3_256};

    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

fn sha3_512_digest(data: &[u8]) -> Vec<u8> {
    use sha3::{Digest, Sha3_512};

    let mut hasher = Sha3_512::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

fn blake2b_digest(data: &[u8]) -> Vec<u8> {
    use blake2::{Blake2b512, Digest};

    let mut hasher = Blake2b512::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

fn blake3_digest(data: &[u8]) -> Vec<u8> {
    blake3::hash(data).as_bytes().to_vec()
}

static SHA256: HashAlgorithm = HashAlgorithm {
    id: "sha256",
    digest_len: 32,
    digest_fn: sha256_digest,
};

static SHA512: HashAlgorithm = HashAlgorithm {
    id: "sha512",
    digest_len: 64,
    digest_fn: sha512_digest,
};

static SHA3_256: HashAlgorithm = HashAlgorithm {
    id: "sha3-256",
    digest_len: 32,
    digest_fn: sha3_256_digest,
};

static SHA3_512: HashAlgorithm = HashAlgorithm {
    id: "sha3-512",
    digest_len: 64,
    digest_fn: sha3_512_digest,
};

static BLAKE2B: HashAlgorithm = HashAlgorithm {
    id: "blake2b",
    digest_len: 64,
    digest_fn: blake2b_digest,
};

static BLAKE3: HashAlgorithm = HashAlgorithm {
    id: "blake3",
    digest_len: 32,
    digest_fn: blake3_digest,
};

/// Identifier of the algorithm bound by [`DigestSet::default`](crate::DigestSet::default).
pub const DEFAULT_ALGORITHM: &str = "sha512";

static REGISTRY: Lazy<HashMap<&'static str, &'static HashAlgorithm>> = Lazy::new(|| {
    [&SHA256, &SHA512, &SHA3_256, &SHA3_512, &BLAKE2B, &BLAKE3]
        .into_iter()
        .map(|algorithm| (algorithm.id, algorithm))
        .collect()
});

pub(crate) fn default_algorithm() -> &'static HashAlgorithm {
    &SHA512
}

/// Look up a registered algorithm by identifier.
///
/// # Errors
///
/// Returns [`DigestSetError::UnknownAlgorithm`] when `algorithm_id` is not
/// registered.
pub fn resolve(algorithm_id: &str) -> Result<&'static HashAlgorithm> {
    REGISTRY
        .get(algorithm_id)
        .copied()
        .ok_or_else(|| DigestSetError::UnknownAlgorithm(algorithm_id.to_owned()))
}

/// Identifiers of every registered algorithm, in no particular order.
pub fn algorithm_ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn resolve_known_algorithms() {
        for (id, expected_len) in [
            ("sha256", 32),
            ("sha512", 64),
            ("sha3-256", 32),
            ("sha3-512", 64),
            ("blake2b", 64),
            ("blake3", 32),
        ] {
            let algorithm = resolve(id).unwrap();
            assert_eq!(algorithm.id(), id);
            assert_eq!(algorithm.digest_len(), expected_len);
        }
    }

    #[test]
    fn resolve_unknown_algorithm() {
        let err = resolve("md5").unwrap_err();
        assert!(matches!(err, DigestSetError::UnknownAlgorithm(id) if id == "md5"));
    }

    #[test]
    fn every_algorithm_honors_its_digest_len() {
        for id in algorithm_ids() {
            let algorithm = resolve(id).unwrap();
            for data in [&b""[..], &b"a"[..], &b"some longer input with \x00 bytes \xff"[..]] {
                assert_eq!(
                    algorithm.digest(data).len(),
                    algorithm.digest_len(),
                    "{id} returned a digest of the wrong length"
                );
            }
        }
    }

    #[test]
    fn digests_are_deterministic() {
        for id in algorithm_ids() {
            let algorithm = resolve(id).unwrap();
            assert_eq!(algorithm.digest(b"same input"), algorithm.digest(b"same input"));
            assert_ne!(algorithm.digest(b"one input"), algorithm.digest(b"another input"));
        }
    }

    #[test]
    fn sha256_known_vector() {
        let algorithm = resolve("sha256").unwrap();
        assert_eq!(
            algorithm.digest(b"test"),
            hex!("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08")
        );
    }

    #[test]
    fn sha512_known_vector() {
        let algorithm = resolve("sha512").unwrap();
        assert_eq!(
            hex::encode(algorithm.digest(b"test")),
            "ee26b0dd4af7e749aa1a8ee3c10ae9923f618980772e473f8819a5d4940e0db2\
             7ac185f8a0e1d5f84f88bc887fd67b143732c304cc5fa9ad8e6f57f50028a8ff"
        );
    }

    #[test]
    fn default_algorithm_is_registered() {
        assert_eq!(default_algorithm().id(), DEFAULT_ALGORITHM);
        assert!(algorithm_ids().any(|id| id == DEFAULT_ALGORITHM));
    }
}
