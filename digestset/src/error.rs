//! Error handling for digest-set operations

use thiserror::Error;

/// Digest-set-specific errors
///
/// Every variant is a deterministic local-validation failure detected at a
/// boundary (construction or decode); none are transient or worth retrying.
#[derive(Debug, Error)]
pub enum DigestSetError {
    /// Requested or decoded algorithm identifier is not in the registry.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Binary payload is missing a header field or carries a non-UTF-8 one.
    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),

    /// Binary payload body does not divide evenly into whole digests.
    #[error(
        "{algorithm} produces {digest_len}-byte digests, but the {body_len}-byte body is not evenly divisible"
    )]
    TruncatedBody {
        /// Algorithm identifier taken from the header.
        algorithm: String,
        /// Digest length that algorithm produces.
        digest_len: usize,
        /// Length of the payload body in bytes.
        body_len: usize,
    },

    /// A document hash entry is not valid base64.
    #[error("invalid digest encoding: {0}")]
    DigestEncoding(#[from] base64::DecodeError),

    /// A decoded digest does not match the bound algorithm's digest length.
    #[error("digest length mismatch: expected {expected} bytes, got {actual}")]
    DigestLength {
        /// Digest length dictated by the bound algorithm.
        expected: usize,
        /// Length of the decoded digest.
        actual: usize,
    },

    /// JSON (de)serialization of a document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a dump file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for digest-set operations
pub type Result<T> = std::result::Result<T, DigestSetError>;
