//! Cross-reference types
//!
//! References point between documents by [`DocId`]: the index owns every
//! document and every reference, and a reference names its endpoints by
//! position in the owning document vector. References are created during
//! the build barrier, never mutated, and rebuilt wholesale on re-scan.

use serde::{Deserialize, Serialize};

/// Position of a document within its owning index
pub type DocId = usize;

/// How a reference was written in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    /// Bare proposal identifier in prose (`SE-0001`)
    Identifier,
    /// Relative markdown link to a sibling document (`0001-intro.md`)
    RelativeLink,
}

/// A reference matched in a document body, before resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReference {
    /// The matched text, verbatim
    pub raw: String,
    /// Match shape
    pub kind: ReferenceKind,
}

/// A directed reference from one document toward another
///
/// Dangling references are normal in an evolving corpus: `target` stays
/// `None` and indexing continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    /// Referencing document
    pub source: DocId,
    /// The matched text, verbatim
    pub raw: String,
    /// Match shape
    pub kind: ReferenceKind,
    /// Referenced document, when resolution succeeded
    pub target: Option<DocId>,
}

impl CrossReference {
    /// Whether the reference resolved to a document in the corpus
    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}
