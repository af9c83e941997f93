//! Index construction
//!
//! The merge barrier. Per-document work (parsing, reference scanning)
//! happens independently and in parallel; everything that needs the full
//! document set (ordering, collision detection, lifecycle validation,
//! reference resolution, lookup maps) happens here, once, single-threaded.

use crate::index::CorpusIndex;
use corpus_document::Diagnostic;
use corpus_lifecycle::LifecycleValidator;
use corpus_parser::ParsedDocument;
use corpus_xref::{scan_references, CrossReference, RawReference, Resolver};
use std::collections::BTreeMap;

/// One document's parallel-phase output
///
/// Carries the parse result plus the raw references found in its body.
/// Producing one of these touches no shared state, so the per-document
/// phase is embarrassingly parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedDocument {
    /// Parse result for this document
    pub parsed: ParsedDocument,
    /// Raw references found in the body sections
    pub references: Vec<RawReference>,
}

impl ScannedDocument {
    /// Scan a parsed document's body for references
    ///
    /// Repeated mentions of one target collapse to a single reference
    /// across the whole document.
    #[must_use]
    pub fn scan(parsed: ParsedDocument) -> Self {
        let own_identifier = parsed.document.identifier.as_deref();
        let mut references: Vec<RawReference> = Vec::new();

        for body in parsed.document.sections.values() {
            for reference in scan_references(body, own_identifier) {
                if !references.contains(&reference) {
                    references.push(reference);
                }
            }
        }

        Self { parsed, references }
    }
}

/// Builds a [`CorpusIndex`] from per-document scan results
///
/// Construction is idempotent: the same inputs, pushed in any order,
/// produce indexes that compare equal; documents are ordered by path
/// before anything derived is computed.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    scanned: Vec<ScannedDocument>,
}

impl IndexBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's scan results
    pub fn push(&mut self, scanned: ScannedDocument) {
        self.scanned.push(scanned);
    }

    /// Run the merge barrier and assemble the index
    #[must_use]
    pub fn finish(mut self) -> CorpusIndex {
        self.scanned
            .sort_by(|a, b| a.parsed.document.path.cmp(&b.parsed.document.path));

        let validator = LifecycleValidator::new();
        let mut documents = Vec::with_capacity(self.scanned.len());
        let mut raw_references = Vec::with_capacity(self.scanned.len());
        let mut diagnostics = Vec::new();

        for scanned in self.scanned {
            diagnostics.extend(scanned.parsed.diagnostics);
            diagnostics.extend(validator.validate(&scanned.parsed.document));
            documents.push(scanned.parsed.document);
            raw_references.push(scanned.references);
        }

        // Identifier collisions: expected for shared placeholders,
        // observed for conflicting revisions under one number. Reported,
        // never resolved: choosing a canonical revision is editorial.
        let mut holders: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (id, document) in documents.iter().enumerate() {
            if let Some(identifier) = document.identifier.as_deref() {
                holders.entry(identifier).or_default().push(id);
            }
        }
        for (identifier, ids) in &holders {
            if ids.len() > 1 {
                tracing::info!(identifier = %identifier, holders = ids.len(), "identifier collision");
                diagnostics.push(Diagnostic::IdentifierCollision {
                    identifier: (*identifier).to_string(),
                    paths: ids.iter().map(|&id| documents[id].path.clone()).collect(),
                });
            }
        }

        let resolver = Resolver::new(documents.iter().enumerate());
        let mut references = Vec::new();
        for (source, raw_refs) in raw_references.into_iter().enumerate() {
            for raw in raw_refs {
                let target = resolver.resolve(&raw);
                if target.is_none() {
                    diagnostics.push(Diagnostic::UnresolvedReference {
                        source: documents[source].label(),
                        raw: raw.raw.clone(),
                    });
                }
                references.push(CrossReference {
                    source,
                    raw: raw.raw,
                    kind: raw.kind,
                    target,
                });
            }
        }

        tracing::debug!(
            documents = documents.len(),
            references = references.len(),
            diagnostics = diagnostics.len(),
            "merge barrier complete"
        );

        CorpusIndex::assemble(documents, references, diagnostics)
    }
}
