//! Metadata block extraction
//!
//! The leading block of a proposal document is a run of `key: value`
//! lines, optionally inside a bullet list, up to the first section
//! heading. Values carry markdown link markup (`[name](url)`) and
//! emphasis markers that must be stripped before interpretation.

use corpus_document::{Author, Status};
use once_cell::sync::Lazy;
use regex::Regex;

// Keys are short: one to three words. An open-ended pattern would treat
// any prose line containing a colon as metadata.
static KEY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-*]?\s*([A-Za-z][A-Za-z()/]*(?:\s+[A-Za-z()/]+){0,2})\s*:\s+(.+?)\s*$")
        .expect("key-value pattern is valid")
});

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("link pattern is valid"));

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z]{2,5}-(?:[0-9]{4}|[A-Z]{4})\b").expect("identifier pattern is valid")
});

static TRAILING_PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\([^)]*\)$").expect("parenthetical pattern is valid"));

/// Raw `key: value` entries from a document's leading block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawMetadata {
    entries: Vec<(String, String)>,
}

impl RawMetadata {
    /// First value whose key matches any of the given aliases
    ///
    /// Key comparison is case-insensitive.
    pub(crate) fn get(&self, aliases: &[&str]) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| aliases.iter().any(|a| key.eq_ignore_ascii_case(a)))
            .map(|(_, value)| value.as_str())
    }
}

/// Extract the leading metadata block from preamble text
///
/// Heading and blank lines are skipped; the block ends at the first
/// non-matching prose line after at least one entry was collected.
pub(crate) fn extract(preamble: &str) -> RawMetadata {
    let mut entries = Vec::new();

    for line in preamble.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(caps) = KEY_VALUE.captures(line) {
            entries.push((caps[1].to_string(), caps[2].to_string()));
        } else if !entries.is_empty() {
            break;
        }
    }

    RawMetadata { entries }
}

/// Extract a proposal identifier from a metadata value
///
/// Accepts assigned numbers (`SE-0001`) and draft placeholders
/// (`SE-NNNN`).
pub(crate) fn extract_identifier(value: &str) -> Option<String> {
    IDENTIFIER.find(value).map(|m| m.as_str().to_string())
}

/// Split an authors value on top-level commas into [`Author`] entries
///
/// Commas inside link markup do not split: `[A](u), [B](v)` yields two
/// authors. Order is preserved.
pub(crate) fn split_authors(value: &str) -> Vec<Author> {
    split_top_level(value)
        .into_iter()
        .map(parse_author)
        .filter(|a| !a.name.is_empty())
        .collect()
}

/// Parse a single author-shaped value, stripping link markup
pub(crate) fn parse_author(value: &str) -> Author {
    let trimmed = value.trim();
    if let Some(caps) = LINK.captures(trimmed) {
        // Full-match link form keeps the URL; anything else is plain text.
        if caps.get(0).map(|m| m.as_str()) == Some(trimmed) {
            return Author {
                name: caps[1].trim().to_string(),
                link: Some(caps[2].trim().to_string()),
            };
        }
        return Author::named(LINK.replace_all(trimmed, "$1").trim());
    }
    Author::named(trimmed)
}

/// Interpret a status value
///
/// Strips emphasis markers, then matches the vocabulary; a trailing
/// parenthetical annotation (an implementation-version note) is tolerated.
/// Returns `Status::Unknown` when nothing matches; the caller keeps the
/// raw text and records the diagnostic.
pub(crate) fn parse_status(value: &str) -> Status {
    let stripped = value.trim().trim_matches(|c| c == '*' || c == '_').trim();
    if let Some(status) = Status::parse(stripped) {
        return status;
    }
    if let Some(caps) = TRAILING_PARENTHETICAL.captures(stripped) {
        if let Some(status) = Status::parse(&caps[1]) {
            return status;
        }
    }
    Status::Unknown
}

/// Collect every markdown link URL from a metadata value
pub(crate) fn link_urls(value: &str) -> Vec<String> {
    LINK.captures_iter(value)
        .map(|caps| caps[2].trim().to_string())
        .collect()
}

fn split_top_level(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}
