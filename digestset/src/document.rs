//! Structured (JSON) codec for [`DigestSet`].
//!
//! Digests are raw bytes, so they travel base64-encoded inside the document;
//! embedding them as naive text would corrupt bytes outside printable ASCII.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::algorithm;
use crate::error::{DigestSetError, Result};
use crate::set::DigestSet;

/// Document form of a [`DigestSet`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestSetDocument {
    /// Schema tag of the set that produced the document.
    pub format_version: String,
    /// Identifier of the bound algorithm.
    pub algorithm_id: String,
    /// Base64 of every stored digest.
    pub hashes: Vec<String>,
}

impl DigestSet {
    /// Produce the structured document form of this set.
    #[must_use]
    pub fn to_document(&self) -> DigestSetDocument {
        DigestSetDocument {
            format_version: self.format_version.clone(),
            algorithm_id: self.algorithm_id().to_owned(),
            hashes: self.digests.iter().map(|digest| STANDARD.encode(digest)).collect(),
        }
    }

    /// Reconstruct a set from its structured document form.
    ///
    /// The document's `format_version` is preserved verbatim; it is not
    /// overwritten with the current tag.
    ///
    /// # Errors
    ///
    /// [`DigestSetError::UnknownAlgorithm`] when `doc.algorithm_id` is not
    /// registered, [`DigestSetError::DigestEncoding`] when a hash entry is not
    /// valid base64, and [`DigestSetError::DigestLength`] when a decoded
    /// digest does not match the algorithm's digest length.
    pub fn from_document(doc: &DigestSetDocument) -> Result<Self> {
        let algorithm = algorithm::resolve(&doc.algorithm_id)?;
        let mut set = Self::with_algorithm(algorithm);
        set.format_version = doc.format_version.clone();
        for encoded in &doc.hashes {
            let digest = STANDARD.decode(encoded)?;
            if digest.len() != algorithm.digest_len() {
                return Err(DigestSetError::DigestLength {
                    expected: algorithm.digest_len(),
                    actual: digest.len(),
                });
            }
            set.digests.insert(digest);
        }
        Ok(set)
    }

    /// Serialize the document form to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DigestSetError::Json`] when serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_document())?)
    }

    /// Parse a JSON document and reconstruct the set.
    ///
    /// # Errors
    ///
    /// Returns [`DigestSetError::Json`] for unparseable input, plus every
    /// failure [`from_document`](Self::from_document) can surface.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: DigestSetDocument = serde_json::from_str(json)?;
        Self::from_document(&doc)
    }
}
