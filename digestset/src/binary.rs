//! Binary file codec for [`DigestSet`].
//!
//! Layout, all bytes with no alignment padding:
//!
//! ```text
//! <format_version UTF-8> '\n'
//! <algorithm_id UTF-8>   '\n'
//! <digest_1><digest_2>...<digest_N>
//! ```
//!
//! Each digest in the body is exactly `digest_len` bytes, back to back with
//! no delimiters. Digest order is unspecified; round-tripping guarantees set
//! equality, not byte-identical output.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::algorithm;
use crate::error::{DigestSetError, Result};
use crate::set::DigestSet;

const HEADER_DELIMITER: u8 = b'\n';

fn find_delimiter(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == HEADER_DELIMITER)
        .map(|offset| from + offset)
}

impl DigestSet {
    /// Serialize to the binary layout.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let header_len = self.format_version.len() + self.algorithm_id().len() + 2;
        let mut out = Vec::with_capacity(header_len + self.len() * self.algorithm.digest_len());
        out.extend_from_slice(self.format_version.as_bytes());
        out.push(HEADER_DELIMITER);
        out.extend_from_slice(self.algorithm_id().as_bytes());
        out.push(HEADER_DELIMITER);
        for digest in &self.digests {
            out.extend_from_slice(digest);
        }
        out
    }

    /// Reconstruct a set from the binary layout.
    ///
    /// The header's `format_version` is preserved verbatim. Body bytes are
    /// inserted as digests directly, never re-hashed.
    ///
    /// # Errors
    ///
    /// [`DigestSetError::MalformedHeader`] when a header delimiter is missing
    /// or a header field is not valid UTF-8,
    /// [`DigestSetError::UnknownAlgorithm`] when the decoded identifier is
    /// not registered, and [`DigestSetError::TruncatedBody`] when the body
    /// does not divide evenly into whole digests.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let first = find_delimiter(bytes, 0)
            .ok_or(DigestSetError::MalformedHeader("missing format version"))?;
        let second = find_delimiter(bytes, first + 1)
            .ok_or(DigestSetError::MalformedHeader("missing algorithm identifier"))?;

        let format_version = std::str::from_utf8(&bytes[..first])
            .map_err(|_| DigestSetError::MalformedHeader("format version is not valid UTF-8"))?;
        let algorithm_id = std::str::from_utf8(&bytes[first + 1..second]).map_err(|_| {
            DigestSetError::MalformedHeader("algorithm identifier is not valid UTF-8")
        })?;
        let algorithm = algorithm::resolve(algorithm_id)?;

        let body = &bytes[second + 1..];
        if body.len() % algorithm.digest_len() != 0 {
            return Err(DigestSetError::TruncatedBody {
                algorithm: algorithm_id.to_owned(),
                digest_len: algorithm.digest_len(),
                body_len: body.len(),
            });
        }

        let mut set = Self::with_algorithm(algorithm);
        set.format_version = format_version.to_owned();
        for chunk in body.chunks_exact(algorithm.digest_len()) {
            set.digests.insert(chunk.to_vec());
        }
        Ok(set)
    }

    /// Write the binary form to `path` in a single write.
    ///
    /// # Errors
    ///
    /// Returns [`DigestSetError::Io`] when the write fails.
    pub fn dump_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes();
        fs::write(&path, &bytes)?;
        debug!(
            path = %path.as_ref().display(),
            bytes = bytes.len(),
            digests = self.len(),
            "dumped digest set"
        );
        Ok(())
    }

    /// Read a file written by [`dump_file`](Self::dump_file) in a single read.
    ///
    /// # Errors
    ///
    /// Returns [`DigestSetError::Io`] when the read fails, plus every failure
    /// [`from_bytes`](Self::from_bytes) can surface.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(&path)?;
        let set = Self::from_bytes(&bytes)?;
        debug!(
            path = %path.as_ref().display(),
            bytes = bytes.len(),
            digests = set.len(),
            "loaded digest set"
        );
        Ok(set)
    }
}
