//! Proposal document model
//!
//! A [`ProposalDocument`] is an immutable value produced by one parse of
//! one markdown file. Documents carry best-effort metadata: every field
//! that could not be extracted is absent, never inferred.

use crate::hash::ContentHash;
use crate::status::Status;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An author (or review manager) entry from a metadata block
///
/// The name has markdown link markup stripped; the link survives when the
/// metadata used the `[name](url)` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name, markup stripped
    pub name: String,
    /// Profile link, when the metadata carried one
    pub link: Option<String>,
}

impl Author {
    /// Create an author with no link
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: None,
        }
    }
}

/// One parsed proposal document
///
/// Section and author ordering preserve the source declaration order.
/// Identifier uniqueness is NOT an invariant: the same placeholder
/// identifier may be shared by multiple unrelated drafts, which is an
/// expected condition reported via diagnostic, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalDocument {
    /// Source file path
    pub path: PathBuf,

    /// Proposal identifier (e.g. `SE-0001`), possibly a shared placeholder
    pub identifier: Option<String>,

    /// Document title (first H1)
    pub title: Option<String>,

    /// Authors in declaration order
    pub authors: Vec<Author>,

    /// Review manager, when named
    pub review_manager: Option<Author>,

    /// Parsed review status (`Unknown` when unrecognized)
    pub status: Status,

    /// Original status text, preserved verbatim when present
    pub raw_status: Option<String>,

    /// Implementation links from the metadata block
    pub implementation_links: Vec<String>,

    /// Body sections keyed by `##` heading text, insertion order preserved
    pub sections: IndexMap<String, String>,

    /// Blake3 checksum of the full source text
    pub checksum: ContentHash,
}

impl ProposalDocument {
    /// True when the identifier is a placeholder shape (`SE-NNNN`)
    #[must_use]
    pub fn has_placeholder_identifier(&self) -> bool {
        self.identifier
            .as_deref()
            .is_some_and(is_placeholder_identifier)
    }

    /// Identifier when present, file name otherwise
    ///
    /// Used to label the document in diagnostics and reports.
    #[must_use]
    pub fn label(&self) -> String {
        if let Some(identifier) = &self.identifier {
            return identifier.clone();
        }
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Whether an identifier is a draft placeholder rather than an assigned number
///
/// Placeholders keep the `PREFIX-` shape but carry a non-numeric number
/// part (`SE-NNNN`). Multiple unrelated drafts may share one.
#[must_use]
pub fn is_placeholder_identifier(identifier: &str) -> bool {
    match identifier.rsplit_once('-') {
        Some((_, number)) => !number.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
