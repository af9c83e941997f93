//! Reference resolution
//!
//! Matches raw references against the assembled document set. Identifier
//! matches are exact and case-sensitive; link matches compare the final
//! path component against known file names.

use crate::reference::{DocId, RawReference, ReferenceKind};
use corpus_document::ProposalDocument;
use std::collections::HashMap;
use std::path::Path;

/// Lookup tables for one resolution pass
///
/// Built once from the full document set at the merge barrier. When
/// multiple documents share an identifier, the first in document order
/// wins resolution; the collision itself is diagnosed separately.
#[derive(Debug, Default)]
pub struct Resolver {
    by_identifier: HashMap<String, DocId>,
    by_file_name: HashMap<String, DocId>,
}

impl Resolver {
    /// Build a resolver over `(id, document)` pairs
    #[must_use]
    pub fn new<'a>(documents: impl IntoIterator<Item = (DocId, &'a ProposalDocument)>) -> Self {
        let mut by_identifier = HashMap::new();
        let mut by_file_name = HashMap::new();

        for (id, document) in documents {
            if let Some(identifier) = &document.identifier {
                by_identifier.entry(identifier.clone()).or_insert(id);
            }
            if let Some(name) = document.path.file_name().and_then(|n| n.to_str()) {
                by_file_name.entry(name.to_string()).or_insert(id);
            }
        }

        Self {
            by_identifier,
            by_file_name,
        }
    }

    /// Resolve a raw reference to a document, if one matches
    #[must_use]
    pub fn resolve(&self, reference: &RawReference) -> Option<DocId> {
        match reference.kind {
            ReferenceKind::Identifier => self.by_identifier.get(&reference.raw).copied(),
            ReferenceKind::RelativeLink => {
                let name = Path::new(&reference.raw)
                    .file_name()
                    .and_then(|n| n.to_str())?;
                self.by_file_name.get(name).copied()
            }
        }
    }
}
