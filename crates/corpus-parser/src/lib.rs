//! Proposal document parser
//!
//! Turns raw markdown into a [`ProposalDocument`] plus the diagnostics
//! observed along the way. Parsing is a pure function of the input text:
//! it never fails, never touches the filesystem, and fills every metadata
//! field best-effort; a field that cannot be extracted stays absent.
//!
//! # Pipeline
//!
//! ```text
//! raw text → section split (pulldown-cmark) → metadata block → ProposalDocument
//! ```

mod metadata;
mod sections;

use corpus_document::{ContentHash, Diagnostic, ProposalDocument, Status};
use std::path::Path;

/// Result of parsing one document
///
/// The document is always produced; `diagnostics` records what was
/// missing or unrecognized.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// The parsed document
    pub document: ProposalDocument,
    /// Non-fatal conditions observed during this parse
    pub diagnostics: Vec<Diagnostic>,
}

/// Metadata keys the parser expects every proposal to carry
///
/// Each entry is `(canonical name, accepted aliases)`.
const EXPECTED_FIELDS: [(&str, &[&str]); 4] = [
    ("Proposal", &["Proposal"]),
    ("Authors", &["Authors", "Author", "Author(s)"]),
    ("Review Manager", &["Review Manager"]),
    ("Status", &["Status"]),
];

/// Proposal document parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ProposalParser;

impl ProposalParser {
    /// Create a new parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse raw document text
    ///
    /// `path` is recorded on the document and in diagnostics; the text is
    /// the sole input to every extracted field.
    #[must_use]
    pub fn parse(&self, path: impl AsRef<Path>, text: &str) -> ParsedDocument {
        let path = path.as_ref();
        let mut diagnostics = Vec::new();

        let split = sections::split(text);
        let meta = metadata::extract(&split.preamble);

        for (canonical, aliases) in EXPECTED_FIELDS {
            if meta.get(aliases).is_none() {
                diagnostics.push(Diagnostic::MissingField {
                    path: path.to_path_buf(),
                    field: canonical.to_string(),
                });
            }
        }

        let identifier = meta
            .get(&["Proposal"])
            .and_then(metadata::extract_identifier);

        let authors = meta
            .get(&["Authors", "Author", "Author(s)"])
            .map(metadata::split_authors)
            .unwrap_or_default();

        let review_manager = meta.get(&["Review Manager"]).map(metadata::parse_author);

        let raw_status = meta.get(&["Status"]).map(str::to_string);
        let status = raw_status
            .as_deref()
            .map_or(Status::Unknown, metadata::parse_status);
        if let Some(raw) = &raw_status {
            if status == Status::Unknown {
                tracing::warn!(path = %path.display(), raw = %raw, "unrecognized status");
                diagnostics.push(Diagnostic::UnrecognizedStatus {
                    path: path.to_path_buf(),
                    raw: raw.clone(),
                });
            }
        }

        let implementation_links = meta
            .get(&["Implementation"])
            .map(metadata::link_urls)
            .unwrap_or_default();

        tracing::debug!(
            path = %path.display(),
            sections = split.sections.len(),
            diagnostics = diagnostics.len(),
            "parsed document"
        );

        ParsedDocument {
            document: ProposalDocument {
                path: path.to_path_buf(),
                identifier,
                title: split.title,
                authors,
                review_manager,
                status,
                raw_status,
                implementation_links,
                sections: split.sections,
                checksum: ContentHash::compute(text.as_bytes()),
            },
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WELL_FORMED: &str = "# Property Behaviors\n\n* Proposal: [SE-0030](0030-property-behavior-decls.md)\n* Authors: [Joe Groff](https://github.com/jckarter)\n* Review Manager: [Doug Gregor](https://github.com/DougGregor)\n* Status: **Returned for Revision**\n* Implementation: [apple/swift#1234](https://example.com/pr/1234)\n\n## Introduction\n\nProperty behaviors generalize accessors.\n\n## Motivation\n\nLazy properties, observers, and more share structure.\n";

    #[test]
    fn well_formed_document_has_no_diagnostics() {
        let parsed = ProposalParser::new().parse("0030-property-behavior-decls.md", WELL_FORMED);
        assert_eq!(parsed.diagnostics, Vec::new());
    }

    #[test]
    fn proposal_line_yields_identifier() {
        let parsed = ProposalParser::new().parse("0030.md", WELL_FORMED);
        assert_eq!(parsed.document.identifier.as_deref(), Some("SE-0030"));
    }

    #[test]
    fn emphasized_status_parses_to_enum() {
        let parsed = ProposalParser::new().parse("0030.md", WELL_FORMED);
        assert_eq!(parsed.document.status, Status::ReturnedForRevision);
        assert_eq!(
            parsed.document.raw_status.as_deref(),
            Some("**Returned for Revision**")
        );
    }

    #[test]
    fn implementation_links_extracted() {
        let parsed = ProposalParser::new().parse("0030.md", WELL_FORMED);
        assert_eq!(
            parsed.document.implementation_links,
            vec!["https://example.com/pr/1234".to_string()]
        );
    }

    #[test]
    fn sections_keep_declaration_order() {
        let parsed = ProposalParser::new().parse("0030.md", WELL_FORMED);
        let keys: Vec<&str> = parsed
            .document
            .sections
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["Introduction", "Motivation"]);
    }

    #[test]
    fn missing_fields_are_diagnosed_not_invented() {
        let parsed = ProposalParser::new().parse("draft.md", "# Bare Draft\n\nProse only.\n");
        assert_eq!(parsed.document.identifier, None);
        assert_eq!(parsed.document.status, Status::Unknown);
        assert_eq!(parsed.document.raw_status, None);
        assert!(parsed.document.authors.is_empty());

        let missing: Vec<String> = parsed
            .diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::MissingField { field, .. } => Some(field.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            missing,
            vec!["Proposal", "Authors", "Review Manager", "Status"]
        );
    }

    #[test]
    fn unrecognized_status_keeps_document() {
        let text = "# Draft\n\n* Proposal: [SE-0001](0001.md)\n* Authors: A\n* Review Manager: B\n* Status: **Deferred**\n\n## Introduction\n\nText.\n";
        let parsed = ProposalParser::new().parse("0001.md", text);
        assert_eq!(parsed.document.status, Status::Unknown);
        assert_eq!(parsed.document.raw_status.as_deref(), Some("**Deferred**"));
        assert!(parsed
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::UnrecognizedStatus { raw, .. } if raw == "**Deferred**")));
    }

    #[test]
    fn author_names_roundtrip_joined() {
        let text = "# Draft\n\n* Proposal: [SE-0002](0002.md)\n* Authors: [A One](https://example.com/a), B Two, [C Three](https://example.com/c)\n* Review Manager: R\n* Status: Accepted\n\n## Introduction\n\nText.\n";
        let parsed = ProposalParser::new().parse("0002.md", text);
        let joined = parsed
            .document
            .authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(joined, "A One, B Two, C Three");
    }

    #[test]
    fn parse_is_pure_and_idempotent() {
        let parser = ProposalParser::new();
        let first = parser.parse("0030.md", WELL_FORMED);
        let second = parser.parse("0030.md", WELL_FORMED);
        assert_eq!(first, second);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics_and_is_idempotent(text in "\\PC{0,500}") {
                let parser = ProposalParser::new();
                let first = parser.parse("fuzz.md", &text);
                let second = parser.parse("fuzz.md", &text);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn every_status_survives_emphasis(idx in 0usize..9) {
                let status = Status::ALL[idx];
                let text = format!(
                    "# T\n\n* Proposal: [SE-0001](0001.md)\n* Authors: A\n* Review Manager: R\n* Status: **{status}**\n\n## Introduction\n\nx\n"
                );
                let parsed = ProposalParser::new().parse("0001.md", &text);
                prop_assert_eq!(parsed.document.status, status);
            }
        }
    }
}
