//! Testing utilities for the corpus indexer workspace
//!
//! Shared fixture builders: realistic proposal-document source text,
//! assembled from parts, for parser and index tests.

#![allow(missing_docs)]

use std::fmt::Write as _;

/// Build a well-formed proposal document source
///
/// Carries every expected metadata field, so parsing one of these yields
/// no diagnostics (given a recognized status). `introduction` becomes the
/// body of the `## Introduction` section.
pub fn proposal_source(
    identifier: &str,
    file_name: &str,
    title: &str,
    status: &str,
    authors: &[&str],
    introduction: &str,
) -> String {
    proposal_source_with_history(
        identifier,
        file_name,
        title,
        status,
        authors,
        introduction,
        &[],
    )
}

/// Build a proposal document source with a revision-history section
pub fn proposal_source_with_history(
    identifier: &str,
    file_name: &str,
    title: &str,
    status: &str,
    authors: &[&str],
    introduction: &str,
    history_lines: &[&str],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "* Proposal: [{identifier}]({file_name})");
    let _ = writeln!(out, "* Authors: {}", author_list(authors));
    let _ = writeln!(out, "* Review Manager: [Rex Viewer](https://example.com/rex)");
    let _ = writeln!(out, "* Status: **{status}**");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Introduction");
    let _ = writeln!(out);
    let _ = writeln!(out, "{introduction}");

    if !history_lines.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Revision history");
        let _ = writeln!(out);
        for line in history_lines {
            let _ = writeln!(out, "* {line}");
        }
    }

    out
}

/// Render an authors metadata value from plain names
pub fn author_list(authors: &[&str]) -> String {
    authors.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_carries_every_expected_field() {
        let source = proposal_source(
            "SE-0001",
            "0001-test.md",
            "Test Proposal",
            "Accepted",
            &["Ana Lang", "Ben Ode"],
            "Intro prose.",
        );
        assert!(source.contains("* Proposal: [SE-0001](0001-test.md)"));
        assert!(source.contains("* Authors: Ana Lang, Ben Ode"));
        assert!(source.contains("* Review Manager:"));
        assert!(source.contains("* Status: **Accepted**"));
        assert!(source.contains("## Introduction"));
    }

    #[test]
    fn history_section_is_optional() {
        let bare = proposal_source("SE-0001", "a.md", "T", "Accepted", &["A"], "x");
        assert!(!bare.contains("Revision history"));

        let with = proposal_source_with_history(
            "SE-0001",
            "a.md",
            "T",
            "Implemented",
            &["A"],
            "x",
            &["Active Review", "Accepted", "Implemented"],
        );
        assert!(with.contains("## Revision history"));
        assert!(with.contains("* Accepted"));
    }
}
