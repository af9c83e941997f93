//! Corpus scanning
//!
//! Sweeps a directory tree for markdown documents and runs the two-phase
//! build: a parallel per-document phase (read, parse, reference scan,
//! no shared mutable state) followed by the single merge barrier in
//! [`IndexBuilder::finish`].

use crate::builder::{IndexBuilder, ScannedDocument};
use crate::error::ScanError;
use crate::index::CorpusIndex;
use corpus_parser::ProposalParser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory scanner for proposal corpora
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a scanner rooted at `root`
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scan the corpus and build an index
    ///
    /// An unreadable directory or file aborts the scan with the offending
    /// path named; everything short of that is collected as diagnostics
    /// on the returned index. An empty directory yields an empty index.
    ///
    /// # Errors
    /// - [`ScanError::NotADirectory`] if the root is not a directory
    /// - [`ScanError::Walk`] if traversal fails
    /// - [`ScanError::Io`] / [`ScanError::Decode`] if a file cannot be
    ///   read as text
    pub fn scan(&self) -> Result<CorpusIndex, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: self.root.clone(),
                source: e,
            })?;
            if entry.file_type().is_file() && is_markdown(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        tracing::info!(
            root = %self.root.display(),
            files = paths.len(),
            "scanning corpus"
        );

        let parser = ProposalParser::new();
        let scanned: Vec<ScannedDocument> = paths
            .par_iter()
            .map(|path| {
                let text = read_document(path)?;
                Ok(ScannedDocument::scan(parser.parse(path, &text)))
            })
            .collect::<Result<_, ScanError>>()?;

        let mut builder = IndexBuilder::new();
        for document in scanned {
            builder.push(document);
        }
        let index = builder.finish();

        tracing::info!(
            documents = index.len(),
            diagnostics = index.diagnostics().len(),
            "corpus indexed"
        );

        Ok(index)
    }
}

/// Scan a corpus directory with default settings
///
/// # Errors
/// See [`Scanner::scan`].
pub fn scan_corpus(root: impl Into<PathBuf>) -> Result<CorpusIndex, ScanError> {
    Scanner::new(root).scan()
}

fn read_document(path: &Path) -> Result<String, ScanError> {
    std::fs::read_to_string(path).map_err(|e| ScanError::io_error(path, e))
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md" | "markdown")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_document::Status;
    use corpus_test_utils::proposal_source;
    use std::fs;

    #[test]
    fn empty_directory_yields_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let index = scan_corpus(dir.path()).unwrap();
        assert!(index.is_empty());
        assert!(index.diagnostics().is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = scan_corpus(&missing);
        assert!(matches!(result, Err(ScanError::NotADirectory { .. })));
    }

    #[test]
    fn non_markdown_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "Status: not metadata").unwrap();
        fs::write(
            dir.path().join("0001-a.md"),
            proposal_source("SE-0001", "0001-a.md", "A", "Accepted", &["Ana Lang"], "Body."),
        )
        .unwrap();

        let index = scan_corpus(dir.path()).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn nested_directories_are_swept() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("proposals");
        fs::create_dir(&nested).unwrap();
        fs::write(
            nested.join("0001-a.md"),
            proposal_source("SE-0001", "0001-a.md", "A", "Accepted", &["Ana Lang"], "Body."),
        )
        .unwrap();

        let index = scan_corpus(dir.path()).unwrap();
        assert_eq!(index.identifiers_by_status(Status::Accepted).len(), 1);
    }

    #[test]
    fn scan_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("0001-a.md"),
            proposal_source("SE-0001", "0001-a.md", "A", "Accepted", &["Ana Lang"], "See [SE-0002]."),
        )
        .unwrap();

        let first = scan_corpus(dir.path()).unwrap();
        let second = scan_corpus(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_utf8_is_fatal_and_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.md"), [0xC3u8, 0x28]).unwrap();

        let result = scan_corpus(dir.path());
        match result {
            Err(ScanError::Decode { path }) => assert!(path.ends_with("bad.md")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
