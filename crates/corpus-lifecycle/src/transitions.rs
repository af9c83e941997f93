//! Status transition graph
//!
//! The review lifecycle:
//!
//! ```text
//! Proposed ─┬→ Awaiting Review ─→ Active Review ─┬→ Accepted ──────────────┬→ Implemented
//!           └→ Active Review                     ├→ Accepted w/ Mods ──────┘
//!                                                ├→ Rejected
//!                                                └→ Returned for Revision ─→ Active Review
//! ```
//!
//! Withdrawal is allowed from any non-terminal state.

use corpus_document::Status;

/// States a review may legally move to from `from`
#[must_use]
pub fn successors(from: Status) -> &'static [Status] {
    match from {
        Status::Proposed => &[
            Status::AwaitingReview,
            Status::ActiveReview,
            Status::Withdrawn,
        ],
        Status::AwaitingReview => &[Status::ActiveReview, Status::Withdrawn],
        Status::ActiveReview => &[
            Status::Accepted,
            Status::AcceptedWithModifications,
            Status::Rejected,
            Status::ReturnedForRevision,
            Status::Withdrawn,
        ],
        Status::ReturnedForRevision => &[Status::ActiveReview, Status::Withdrawn],
        Status::Accepted | Status::AcceptedWithModifications => &[Status::Implemented],
        Status::Rejected | Status::Implemented | Status::Withdrawn | Status::Unknown => &[],
    }
}

/// Whether `from -> to` is an edge of the lifecycle graph
#[inline]
#[must_use]
pub fn is_edge(from: Status, to: Status) -> bool {
    successors(from).contains(&to)
}

/// Whether a review may begin in this state
#[inline]
#[must_use]
pub const fn is_initial(status: Status) -> bool {
    matches!(status, Status::Proposed | Status::AwaitingReview)
}

/// Whether the state is reachable from an initial state
#[must_use]
pub fn is_reachable(status: Status) -> bool {
    if is_initial(status) {
        return true;
    }
    let mut frontier = vec![Status::Proposed, Status::AwaitingReview];
    let mut seen = frontier.clone();
    while let Some(current) = frontier.pop() {
        for &next in successors(current) {
            if next == status {
                return true;
            }
            if !seen.contains(&next) {
                seen.push(next);
                frontier.push(next);
            }
        }
    }
    false
}
