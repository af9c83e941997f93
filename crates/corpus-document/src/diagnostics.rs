//! Non-fatal scan diagnostics
//!
//! Everything a scan observes short of a fatal read error is recorded as a
//! [`Diagnostic`] and surfaced after the scan completes. A single
//! malformed document never aborts indexing.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Severity of a recorded diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Expected, informational condition
    Note,
    /// Suspicious condition worth human attention
    Warning,
}

/// A non-fatal condition observed while scanning the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// An expected metadata field is absent from a document
    MissingField {
        /// Document the field is missing from
        path: PathBuf,
        /// Metadata key that was expected
        field: String,
    },

    /// Status text did not match the known vocabulary
    UnrecognizedStatus {
        /// Document carrying the status line
        path: PathBuf,
        /// Observed status text, verbatim
        raw: String,
    },

    /// A cross-reference target could not be matched to any document
    UnresolvedReference {
        /// Label of the referencing document
        source: String,
        /// Raw matched reference text
        raw: String,
    },

    /// Multiple documents share one identifier
    ///
    /// Expected for placeholder identifiers shared across drafts, and
    /// observed for conflicting revisions filed under one number. Which
    /// revision is canonical is an editorial question the indexer does
    /// not answer.
    IdentifierCollision {
        /// The shared identifier
        identifier: String,
        /// Every document claiming it
        paths: Vec<PathBuf>,
    },

    /// Declared status or revision history breaks the lifecycle graph
    LifecycleViolation {
        /// Label of the offending document
        source: String,
        /// Human-readable description of the violation
        detail: String,
    },
}

impl Diagnostic {
    /// Severity bucket for this diagnostic
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnresolvedReference { .. } | Diagnostic::IdentifierCollision { .. } => {
                Severity::Note
            }
            Diagnostic::MissingField { .. }
            | Diagnostic::UnrecognizedStatus { .. }
            | Diagnostic::LifecycleViolation { .. } => Severity::Warning,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingField { path, field } => {
                write!(f, "{}: missing metadata field '{}'", path.display(), field)
            }
            Diagnostic::UnrecognizedStatus { path, raw } => {
                write!(f, "{}: unrecognized status '{}'", path.display(), raw)
            }
            Diagnostic::UnresolvedReference { source, raw } => {
                write!(f, "{source}: unresolved reference '{raw}'")
            }
            Diagnostic::IdentifierCollision { identifier, paths } => {
                write!(
                    f,
                    "identifier '{}' claimed by {} documents",
                    identifier,
                    paths.len()
                )
            }
            Diagnostic::LifecycleViolation { source, detail } => {
                write!(f, "{source}: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_buckets() {
        let unresolved = Diagnostic::UnresolvedReference {
            source: "SE-0001".to_string(),
            raw: "SE-9999".to_string(),
        };
        assert_eq!(unresolved.severity(), Severity::Note);

        let missing = Diagnostic::MissingField {
            path: PathBuf::from("draft.md"),
            field: "Status".to_string(),
        };
        assert_eq!(missing.severity(), Severity::Warning);
    }

    #[test]
    fn display_names_the_document() {
        let diag = Diagnostic::UnrecognizedStatus {
            path: PathBuf::from("0042-rebind.md"),
            raw: "Deferred".to_string(),
        };
        let text = diag.to_string();
        assert!(text.contains("0042-rebind.md"));
        assert!(text.contains("Deferred"));
    }

    #[test]
    fn collision_reports_claim_count() {
        let diag = Diagnostic::IdentifierCollision {
            identifier: "SE-NNNN".to_string(),
            paths: vec![PathBuf::from("a.md"), PathBuf::from("b.md")],
        };
        assert!(diag.to_string().contains("2 documents"));
    }
}
