//! Review status vocabulary
//!
//! The status lifecycle is a closed vocabulary with an [`Status::Unknown`]
//! fallback bucket. Real corpora contain unrecognized or evolving status
//! text; the original string survives on the document itself (see
//! `ProposalDocument::raw_status`), never inside this enum, so `Status`
//! stays `Copy + Eq + Hash` and partitions cleanly.

use serde::{Deserialize, Serialize};

/// Review status of a proposal document
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Status {
    /// Submitted, not yet scheduled for review
    Proposed,

    /// Scheduled, waiting for a review window
    AwaitingReview,

    /// Under active review
    ActiveReview,

    /// Accepted as written
    Accepted,

    /// Accepted after modifications requested during review
    AcceptedWithModifications,

    /// Rejected
    Rejected,

    /// Sent back to its authors for another revision round
    ReturnedForRevision,

    /// Accepted and shipped
    Implemented,

    /// Withdrawn by its authors
    Withdrawn,

    /// Status text did not match the known vocabulary
    #[default]
    Unknown,
}

impl Status {
    /// All defined statuses, `Unknown` last
    pub const ALL: [Status; 10] = [
        Status::Proposed,
        Status::AwaitingReview,
        Status::ActiveReview,
        Status::Accepted,
        Status::AcceptedWithModifications,
        Status::Rejected,
        Status::ReturnedForRevision,
        Status::Implemented,
        Status::Withdrawn,
        Status::Unknown,
    ];

    /// Canonical display name as it appears in metadata blocks
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Proposed => "Proposed",
            Status::AwaitingReview => "Awaiting Review",
            Status::ActiveReview => "Active Review",
            Status::Accepted => "Accepted",
            Status::AcceptedWithModifications => "Accepted with Modifications",
            Status::Rejected => "Rejected",
            Status::ReturnedForRevision => "Returned for Revision",
            Status::Implemented => "Implemented",
            Status::Withdrawn => "Withdrawn",
            Status::Unknown => "Unknown",
        }
    }

    /// Parse a canonical status name
    ///
    /// Matching is case-insensitive over whitespace-normalized text.
    /// Emphasis markers and trailing annotations are the metadata parser's
    /// concern; this expects bare status text. `Unknown` is not parseable:
    /// it is assigned, never declared.
    #[must_use]
    pub fn parse(text: &str) -> Option<Status> {
        let normalized = normalize(text);
        Status::ALL
            .iter()
            .filter(|s| !matches!(s, Status::Unknown))
            .find(|s| normalize(s.as_str()) == normalized)
            .copied()
    }

    /// Whether this status ends the review lifecycle
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Status::Accepted
                | Status::AcceptedWithModifications
                | Status::Rejected
                | Status::Implemented
                | Status::Withdrawn
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        for status in Status::ALL {
            if matches!(status, Status::Unknown) {
                continue;
            }
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Status::parse("active review"), Some(Status::ActiveReview));
        assert_eq!(Status::parse("REJECTED"), Some(Status::Rejected));
        assert_eq!(
            Status::parse("accepted With modifications"),
            Some(Status::AcceptedWithModifications)
        );
    }

    #[test]
    fn parse_normalizes_whitespace() {
        assert_eq!(Status::parse("Awaiting   Review"), Some(Status::AwaitingReview));
        assert_eq!(Status::parse("  Implemented "), Some(Status::Implemented));
    }

    #[test]
    fn parse_rejects_unknown_text() {
        assert_eq!(Status::parse("Deferred"), None);
        assert_eq!(Status::parse(""), None);
        assert_eq!(Status::parse("Unknown"), None);
    }

    #[test]
    fn terminal_states() {
        assert!(Status::Rejected.is_terminal());
        assert!(Status::Implemented.is_terminal());
        assert!(Status::Withdrawn.is_terminal());
        assert!(!Status::ActiveReview.is_terminal());
        assert!(!Status::ReturnedForRevision.is_terminal());
        assert!(!Status::Unknown.is_terminal());
    }
}
