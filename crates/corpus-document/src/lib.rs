//! Proposal document model
//!
//! Core value types shared across the indexer workspace:
//!
//! - [`ProposalDocument`]: one parsed markdown proposal
//! - [`Status`]: the closed review-status vocabulary with `Unknown` fallback
//! - [`Diagnostic`]: non-fatal conditions collected during a scan
//! - [`ContentHash`]: Blake3 identity of a document's source text
//!
//! Everything here is a plain immutable value: documents are produced once
//! per parse, owned by the index that aggregated them, and replaced
//! wholesale on re-scan.

pub mod diagnostics;
pub mod document;
pub mod hash;
pub mod status;

pub use diagnostics::{Diagnostic, Severity};
pub use document::{is_placeholder_identifier, Author, ProposalDocument};
pub use hash::{ContentHash, HashError};
pub use status::Status;
