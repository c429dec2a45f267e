//! The content-hash set container.
//!
//! A [`DigestSet`] records which elements have been seen without retaining
//! them: inserting an element stores only its digest under the algorithm the
//! set was bound to at construction. Two distinct elements with equal digests
//! are indistinguishable to the set (collision-as-identity).

use std::collections::HashSet;

use crate::algorithm::{self, HashAlgorithm};
use crate::error::Result;

/// Serialization-schema tag stamped on newly created sets.
///
/// Travels with persisted data; sets reconstructed by a codec keep whatever
/// tag the payload carried rather than being re-tagged with this one.
pub const FORMAT_VERSION: &str = "1.0.1";

/// A set of element digests.
///
/// Elements themselves are never stored and cannot be reconstructed. The set
/// has no internal synchronization; callers sharing one instance across
/// threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct DigestSet {
    pub(crate) format_version: String,
    pub(crate) algorithm: &'static HashAlgorithm,
    pub(crate) digests: HashSet<Vec<u8>>,
}

impl DigestSet {
    /// Create an empty set bound to the given algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`DigestSetError::UnknownAlgorithm`](crate::DigestSetError::UnknownAlgorithm)
    /// when `algorithm_id` is not registered.
    pub fn new(algorithm_id: &str) -> Result<Self> {
        let algorithm = algorithm::resolve(algorithm_id)?;
        Ok(Self::with_algorithm(algorithm))
    }

    pub(crate) fn with_algorithm(algorithm: &'static HashAlgorithm) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_owned(),
            algorithm,
            digests: HashSet::new(),
        }
    }

    /// Schema tag this set carries.
    #[must_use]
    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    /// Identifier of the algorithm this set is bound to.
    #[must_use]
    pub fn algorithm_id(&self) -> &'static str {
        self.algorithm.id()
    }

    /// Insert an element.
    ///
    /// Idempotent: inserting an element whose digest is already present
    /// changes nothing observable.
    pub fn insert<T: AsRef<[u8]>>(&mut self, element: T) {
        self.digests.insert(self.algorithm.digest(element.as_ref()));
    }

    /// Remove an element; removing an absent element is a no-op.
    pub fn remove<T: AsRef<[u8]>>(&mut self, element: T) {
        self.digests.remove(&self.algorithm.digest(element.as_ref()));
    }

    /// Whether the element's digest is present.
    #[must_use]
    pub fn contains<T: AsRef<[u8]>>(&self, element: T) -> bool {
        self.digests.contains(&self.algorithm.digest(element.as_ref()))
    }

    /// Number of distinct digests stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Whether the set holds no digests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Iterate over the stored raw digests, in no particular order.
    pub fn iter_digests(&self) -> impl Iterator<Item = &[u8]> {
        self.digests.iter().map(Vec::as_slice)
    }
}

impl Default for DigestSet {
    /// Empty set bound to the 512-bit default algorithm
    /// ([`DEFAULT_ALGORITHM`](crate::algorithm::DEFAULT_ALGORITHM)).
    fn default() -> Self {
        Self::with_algorithm(algorithm::default_algorithm())
    }
}

impl PartialEq for DigestSet {
    /// Sets are equal iff they share the same format version, the same
    /// algorithm identifier, and the same digests (set equality, which
    /// subsumes the size check). Insertion order never matters; sets bound
    /// to different algorithms are never equal.
    fn eq(&self, other: &Self) -> bool {
        self.format_version == other.format_version
            && self.algorithm.id() == other.algorithm.id()
            && self.digests == other.digests
    }
}

impl Eq for DigestSet {}
