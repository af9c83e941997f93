//! Lifecycle validation
//!
//! Checks a document's declared status and recorded revision history
//! against the transition graph. Every finding is a warning diagnostic:
//! the corpus is historical, authored by humans, and not guaranteed
//! self-consistent, so validation reports rather than rejects.

use crate::transitions;
use corpus_document::{Diagnostic, ProposalDocument, Status};

/// Section heading that carries the recorded status history
const REVISION_HISTORY: &str = "revision history";

/// Status lifecycle validator
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleValidator;

impl LifecycleValidator {
    /// Create a new validator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate one document, returning warning diagnostics
    #[must_use]
    pub fn validate(&self, document: &ProposalDocument) -> Vec<Diagnostic> {
        // Unknown status is already diagnosed by the parser; there is no
        // lifecycle to check against.
        if document.status == Status::Unknown {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        let source = document.label();

        if !transitions::is_reachable(document.status) {
            diagnostics.push(Diagnostic::LifecycleViolation {
                source: source.clone(),
                detail: format!(
                    "declared status '{}' is not reachable from an initial state",
                    document.status
                ),
            });
        }

        let history = document
            .sections
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(REVISION_HISTORY))
            .map(|(_, body)| extract_history(body))
            .unwrap_or_default();

        for pair in history.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from != to && !transitions::is_edge(from, to) {
                tracing::warn!(source = %source, %from, %to, "non-monotonic revision history");
                diagnostics.push(Diagnostic::LifecycleViolation {
                    source: source.clone(),
                    detail: format!(
                        "revision history records '{from}' -> '{to}', which is not a legal transition"
                    ),
                });
            }
        }

        if document.status == Status::Implemented {
            let accepted = history.iter().any(|s| {
                matches!(s, Status::Accepted | Status::AcceptedWithModifications)
            });
            if !accepted {
                tracing::warn!(source = %source, "implemented with no recorded acceptance");
                diagnostics.push(Diagnostic::LifecycleViolation {
                    source,
                    detail: "marked Implemented with no recorded acceptance".to_string(),
                });
            }
        }

        diagnostics
    }
}

/// Ordered status mentions from a revision-history section
///
/// Each history line contributes the statuses it names, in textual order.
/// Lines naming no known status are ignored rather than guessed at.
fn extract_history(body: &str) -> Vec<Status> {
    let mut mentions = Vec::new();

    for line in body.lines() {
        let lower = line.to_ascii_lowercase();
        let mut line_mentions: Vec<(usize, Status)> = Vec::new();

        // Longest names first so "Accepted with Modifications" is not
        // also counted as "Accepted" at the same position.
        let mut statuses: Vec<Status> = Status::ALL
            .into_iter()
            .filter(|s| !matches!(s, Status::Unknown))
            .collect();
        statuses.sort_by_key(|s| std::cmp::Reverse(s.as_str().len()));

        for status in statuses {
            let needle = status.as_str().to_ascii_lowercase();
            let mut offset = 0;
            while let Some(pos) = lower[offset..].find(&needle) {
                let at = offset + pos;
                let covered = line_mentions
                    .iter()
                    .any(|&(p, s)| at >= p && at < p + s.as_str().len());
                if !covered {
                    line_mentions.push((at, status));
                }
                offset = at + needle.len();
            }
        }

        line_mentions.sort_by_key(|&(pos, _)| pos);
        mentions.extend(line_mentions.into_iter().map(|(_, status)| status));
    }

    mentions
}
