//! Scan report
//!
//! A serializable summary of one scan pass, for human eyes
//! ([`ScanReport::generate_text`]) or machine consumption (`--json`).

use crate::index::CorpusIndex;
use corpus_document::Severity;
use serde::Serialize;
use std::fmt::Write as _;

/// Per-status document count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Canonical status name
    pub status: String,
    /// Documents holding it
    pub count: usize,
}

/// Summary of one corpus scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Total indexed documents
    pub documents: usize,
    /// Non-empty status buckets, in lifecycle order
    pub status_counts: Vec<StatusCount>,
    /// Total cross-references found
    pub references: usize,
    /// References that resolved to a corpus document
    pub resolved_references: usize,
    /// Dangling references (expected, bounded, non-fatal)
    pub unresolved_references: usize,
    /// Warning-severity diagnostics, rendered
    pub warnings: Vec<String>,
    /// Note-severity diagnostics, rendered
    pub notes: Vec<String>,
}

impl ScanReport {
    /// Summarize an index
    #[must_use]
    pub fn from_index(index: &CorpusIndex) -> Self {
        let resolved = index.references().iter().filter(|r| r.is_resolved()).count();
        let (warnings, notes): (Vec<_>, Vec<_>) = index
            .diagnostics()
            .iter()
            .partition(|d| d.severity() == Severity::Warning);

        Self {
            documents: index.len(),
            status_counts: index
                .status_counts()
                .into_iter()
                .map(|(status, count)| StatusCount {
                    status: status.as_str().to_string(),
                    count,
                })
                .collect(),
            references: index.references().len(),
            resolved_references: resolved,
            unresolved_references: index.references().len() - resolved,
            warnings: warnings.iter().map(ToString::to_string).collect(),
            notes: notes.iter().map(ToString::to_string).collect(),
        }
    }

    /// Render the report as plain text
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Corpus Scan Report");
        let _ = writeln!(out, "==================");
        let _ = writeln!(out, "Documents indexed: {}", self.documents);
        let _ = writeln!(
            out,
            "References: {} ({} resolved, {} unresolved)",
            self.references, self.resolved_references, self.unresolved_references
        );

        if !self.status_counts.is_empty() {
            let _ = writeln!(out, "\nStatus breakdown:");
            for entry in &self.status_counts {
                let _ = writeln!(out, "  {}: {}", entry.status, entry.count);
            }
        }

        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\nWarnings ({}):", self.warnings.len());
            for warning in &self.warnings {
                let _ = writeln!(out, "  - {warning}");
            }
        }

        if !self.notes.is_empty() {
            let _ = writeln!(out, "\nNotes ({}):", self.notes.len());
            for note in &self.notes {
                let _ = writeln!(out, "  - {note}");
            }
        }

        out
    }
}
