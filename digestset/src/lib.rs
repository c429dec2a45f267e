//! Content-hash set: membership testing over cryptographic digests.
//!
//! A [`DigestSet`] records which elements have been seen without retaining
//! them. Inserting an element stores only its digest under the algorithm the
//! set was constructed with, so membership checks are O(1) regardless of
//! element size and storage never grows with element size. Two distinct
//! elements with colliding digests are indistinguishable to the set; that is
//! the accepted trade-off, not a bug.
//!
//! Two serialization surfaces are provided: a structured JSON document
//! ([`DigestSetDocument`]) with base64-encoded digests, and a compact binary
//! layout with a versioned two-line header.
//!
//! ```
//! use digestset::DigestSet;
//!
//! let mut seen = DigestSet::new("sha512")?;
//! seen.insert("alpha");
//! seen.insert("alpha");
//! assert_eq!(seen.len(), 1);
//! assert!(seen.contains("alpha"));
//!
//! let restored = DigestSet::from_bytes(&seen.to_bytes())?;
//! assert_eq!(restored, seen);
//! # Ok::<(), digestset::DigestSetError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod binary;
pub mod document;
pub mod error;
pub mod set;

pub use algorithm::{algorithm_ids, resolve, HashAlgorithm, DEFAULT_ALGORITHM};
pub use document::DigestSetDocument;
pub use error::{DigestSetError, Result};
pub use set::{DigestSet, FORMAT_VERSION};
