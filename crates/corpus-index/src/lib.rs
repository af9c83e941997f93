//! Corpus indexing
//!
//! The aggregation layer of the indexer: sweeps a directory of proposal
//! documents, runs the parallel per-document phase, and merges everything
//! into one immutable [`CorpusIndex`].
//!
//! # Architecture
//!
//! ```text
//! directory ─→ Scanner ─→ parse + reference scan (parallel, shareless)
//!                              │
//!                        IndexBuilder::finish (merge barrier)
//!                              │
//!                         CorpusIndex (immutable snapshot) ─→ queries
//! ```
//!
//! The index is rebuilt wholesale on every scan; there is no incremental
//! update and no persistence. Diagnostics collected along the way ride on
//! the index and are surfaced after the scan completes.

pub mod builder;
pub mod error;
pub mod index;
pub mod report;
pub mod scan;

pub use builder::{IndexBuilder, ScannedDocument};
pub use error::ScanError;
pub use index::CorpusIndex;
pub use report::{ScanReport, StatusCount};
pub use scan::{scan_corpus, Scanner};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the corpus index
    pub use crate::builder::{IndexBuilder, ScannedDocument};
    pub use crate::error::ScanError;
    pub use crate::index::CorpusIndex;
    pub use crate::report::ScanReport;
    pub use crate::scan::{scan_corpus, Scanner};
    pub use corpus_document::{Diagnostic, ProposalDocument, Severity, Status};
    pub use corpus_xref::{CrossReference, ReferenceKind};
}
