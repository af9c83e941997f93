//! Reference scanning
//!
//! Finds reference-shaped text in document bodies: bare proposal
//! identifiers via regex, relative `.md` link targets via pulldown-cmark
//! link events. Scanning is pure text work; resolution happens later,
//! against the assembled document set.

use crate::reference::{RawReference, ReferenceKind};
use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Parser as MdParser, Tag};
use regex::Regex;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z]{2,5}-(?:[0-9]{4}|[A-Z]{4})\b").expect("identifier pattern is valid")
});

/// Scan body text for references
///
/// `own_identifier` suppresses self-mentions: a proposal restating its
/// own number is not a cross-reference. Repeated mentions of one target
/// within the same body collapse to a single reference.
#[must_use]
pub fn scan_references(body: &str, own_identifier: Option<&str>) -> Vec<RawReference> {
    let mut references: Vec<RawReference> = Vec::new();

    for m in IDENTIFIER.find_iter(body) {
        if own_identifier == Some(m.as_str()) {
            continue;
        }
        push_unique(
            &mut references,
            RawReference {
                raw: m.as_str().to_string(),
                kind: ReferenceKind::Identifier,
            },
        );
    }

    for event in MdParser::new(body) {
        if let Event::Start(Tag::Link { dest_url, .. }) = event {
            if let Some(target) = relative_md_target(&dest_url) {
                push_unique(
                    &mut references,
                    RawReference {
                        raw: target.to_string(),
                        kind: ReferenceKind::RelativeLink,
                    },
                );
            }
        }
    }

    references
}

/// Normalize a link destination to a relative `.md` target, if it is one
///
/// External URLs and in-page anchors are not document references. A
/// fragment suffix (`0001-intro.md#motivation`) still names the document.
fn relative_md_target(dest: &str) -> Option<&str> {
    if dest.starts_with("http://") || dest.starts_with("https://") || dest.starts_with('#') {
        return None;
    }
    let without_fragment = dest.split('#').next().unwrap_or(dest);
    without_fragment
        .ends_with(".md")
        .then_some(without_fragment)
}

fn push_unique(references: &mut Vec<RawReference>, candidate: RawReference) {
    if !references.contains(&candidate) {
        references.push(candidate);
    }
}
