//! The corpus index
//!
//! [`CorpusIndex`] owns every document, cross-reference and diagnostic
//! produced by one scan pass. It is built once behind the merge barrier,
//! immutable afterwards, and replaced wholesale on re-scan. Queries need
//! no locking because nothing mutates after construction.

use corpus_document::{Diagnostic, ProposalDocument, Status};
use corpus_xref::{CrossReference, DocId};
use radix_trie::{Trie, TrieCommon};
use std::collections::{BTreeSet, HashMap};

/// Immutable snapshot of one indexed corpus
pub struct CorpusIndex {
    documents: Vec<ProposalDocument>,
    references: Vec<CrossReference>,
    diagnostics: Vec<Diagnostic>,

    // Derived lookup structures; pure functions of the vectors above.
    by_status: HashMap<Status, Vec<DocId>>,
    by_author: HashMap<String, Vec<DocId>>,
    by_identifier: HashMap<String, Vec<DocId>>,
    identifier_trie: Trie<String, Vec<DocId>>,
}

impl CorpusIndex {
    /// Assemble the snapshot from the merge barrier's output
    pub(crate) fn assemble(
        documents: Vec<ProposalDocument>,
        references: Vec<CrossReference>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let mut by_status: HashMap<Status, Vec<DocId>> = HashMap::new();
        let mut by_author: HashMap<String, Vec<DocId>> = HashMap::new();
        let mut by_identifier: HashMap<String, Vec<DocId>> = HashMap::new();
        let mut identifier_trie: Trie<String, Vec<DocId>> = Trie::new();

        for (id, document) in documents.iter().enumerate() {
            // Exactly one status bucket per document; Unknown included.
            by_status.entry(document.status).or_default().push(id);

            for author in &document.authors {
                let key = author.name.to_lowercase();
                let entry = by_author.entry(key).or_default();
                if entry.last() != Some(&id) {
                    entry.push(id);
                }
            }

            if let Some(identifier) = &document.identifier {
                by_identifier.entry(identifier.clone()).or_default().push(id);
                if let Some(holders) = identifier_trie.get_mut(identifier) {
                    holders.push(id);
                } else {
                    identifier_trie.insert(identifier.clone(), vec![id]);
                }
            }
        }

        Self {
            documents,
            references,
            diagnostics,
            by_status,
            by_author,
            by_identifier,
            identifier_trie,
        }
    }

    /// Number of indexed documents
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus was empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All documents in index order (sorted by path)
    #[inline]
    #[must_use]
    pub fn documents(&self) -> &[ProposalDocument] {
        &self.documents
    }

    /// Document by id
    #[inline]
    #[must_use]
    pub fn document(&self, id: DocId) -> Option<&ProposalDocument> {
        self.documents.get(id)
    }

    /// All cross-references, resolved and dangling
    #[inline]
    #[must_use]
    pub fn references(&self) -> &[CrossReference] {
        &self.references
    }

    /// Diagnostics collected during the scan
    #[inline]
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Documents holding the given status
    ///
    /// An empty result is a valid, non-error answer.
    #[must_use]
    pub fn documents_with_status(&self, status: Status) -> Vec<&ProposalDocument> {
        self.by_status
            .get(&status)
            .map(|ids| ids.iter().map(|&id| &self.documents[id]).collect())
            .unwrap_or_default()
    }

    /// Labels of documents holding the given status
    #[must_use]
    pub fn identifiers_by_status(&self, status: Status) -> BTreeSet<String> {
        self.documents_with_status(status)
            .into_iter()
            .map(ProposalDocument::label)
            .collect()
    }

    /// Documents listing an author with this name (case-insensitive)
    #[must_use]
    pub fn documents_by_author(&self, name: &str) -> Vec<&ProposalDocument> {
        self.by_author
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().map(|&id| &self.documents[id]).collect())
            .unwrap_or_default()
    }

    /// Labels of documents listing an author with this name
    #[must_use]
    pub fn identifiers_by_author(&self, name: &str) -> BTreeSet<String> {
        self.documents_by_author(name)
            .into_iter()
            .map(ProposalDocument::label)
            .collect()
    }

    /// Every document claiming this exact identifier
    ///
    /// More than one entry means a collision (shared placeholder or
    /// conflicting revisions); all holders are returned.
    #[must_use]
    pub fn get_by_identifier(&self, identifier: &str) -> Vec<&ProposalDocument> {
        self.by_identifier
            .get(identifier)
            .map(|ids| ids.iter().map(|&id| &self.documents[id]).collect())
            .unwrap_or_default()
    }

    /// Identifiers beginning with the given prefix, sorted
    #[must_use]
    pub fn identifiers_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut identifiers: Vec<String> = self
            .identifier_trie
            .get_raw_descendant(prefix)
            .map(|subtrie| subtrie.keys().cloned().collect())
            .unwrap_or_default();
        identifiers.sort();
        identifiers
    }

    /// Dangling references as `(source label, raw target text)`
    pub fn unresolved_references(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.references
            .iter()
            .filter(|r| !r.is_resolved())
            .map(|r| (self.documents[r.source].label(), r.raw.as_str()))
    }

    /// Per-status document counts in status declaration order
    #[must_use]
    pub fn status_counts(&self) -> Vec<(Status, usize)> {
        Status::ALL
            .iter()
            .filter_map(|status| {
                self.by_status
                    .get(status)
                    .map(|ids| (*status, ids.len()))
            })
            .collect()
    }
}

// Derived maps are functions of the owned vectors, so equality over the
// vectors is equality of the whole snapshot.
impl PartialEq for CorpusIndex {
    fn eq(&self, other: &Self) -> bool {
        self.documents == other.documents
            && self.references == other.references
            && self.diagnostics == other.diagnostics
    }
}

impl std::fmt::Debug for CorpusIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusIndex")
            .field("documents", &self.documents.len())
            .field("references", &self.references.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_document::{Author, ContentHash};
    use indexmap::IndexMap;
    use std::path::PathBuf;

    fn document(path: &str, identifier: Option<&str>, status: Status, authors: &[&str]) -> ProposalDocument {
        ProposalDocument {
            path: PathBuf::from(path),
            identifier: identifier.map(str::to_string),
            title: None,
            authors: authors.iter().map(|&a| Author::named(a)).collect(),
            review_manager: None,
            status,
            raw_status: None,
            implementation_links: Vec::new(),
            sections: IndexMap::new(),
            checksum: ContentHash::default(),
        }
    }

    fn sample_index() -> CorpusIndex {
        CorpusIndex::assemble(
            vec![
                document("0001-a.md", Some("SE-0001"), Status::Accepted, &["Ana Lang"]),
                document("0002-b.md", Some("SE-0002"), Status::Rejected, &["Ana Lang", "Ben Ode"]),
                document("0117-c.md", Some("SE-0117"), Status::Accepted, &["Ben Ode"]),
                document("draft.md", None, Status::Unknown, &[]),
            ],
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn status_buckets_partition_documents() {
        let index = sample_index();
        let total: usize = Status::ALL
            .iter()
            .map(|&s| index.documents_with_status(s).len())
            .sum();
        assert_eq!(total, index.len());
    }

    #[test]
    fn empty_status_bucket_is_valid() {
        let index = sample_index();
        assert!(index.documents_with_status(Status::Withdrawn).is_empty());
    }

    #[test]
    fn author_query_is_case_insensitive() {
        let index = sample_index();
        let labels = index.identifiers_by_author("ana lang");
        assert_eq!(
            labels.into_iter().collect::<Vec<_>>(),
            vec!["SE-0001".to_string(), "SE-0002".to_string()]
        );
    }

    #[test]
    fn unknown_author_yields_empty_set() {
        let index = sample_index();
        assert!(index.documents_by_author("Nobody").is_empty());
    }

    #[test]
    fn prefix_query_uses_identifier_trie() {
        let index = sample_index();
        assert_eq!(
            index.identifiers_with_prefix("SE-00"),
            vec!["SE-0001".to_string(), "SE-0002".to_string()]
        );
        assert_eq!(
            index.identifiers_with_prefix("SE-"),
            vec![
                "SE-0001".to_string(),
                "SE-0002".to_string(),
                "SE-0117".to_string()
            ]
        );
        assert!(index.identifiers_with_prefix("SR-").is_empty());
    }

    #[test]
    fn label_falls_back_for_missing_identifier() {
        let index = sample_index();
        let labels = index.identifiers_by_status(Status::Unknown);
        assert!(labels.contains("draft.md"));
    }

    #[test]
    fn assemble_is_idempotent() {
        let a = sample_index();
        let b = sample_index();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_identifier_returns_all_holders() {
        let index = CorpusIndex::assemble(
            vec![
                document("a-draft.md", Some("SE-NNNN"), Status::Proposed, &[]),
                document("b-draft.md", Some("SE-NNNN"), Status::Proposed, &[]),
            ],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(index.get_by_identifier("SE-NNNN").len(), 2);
    }
}
