//! Section splitting
//!
//! Uses pulldown-cmark offset iteration to slice the raw source into
//! `##`-delimited sections. Raw prose is preserved byte-for-byte; only
//! heading titles are rendered to plain text.

use indexmap::IndexMap;
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use std::ops::Range;

/// Result of splitting one document into title, preamble and sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitDocument {
    /// First H1 text, if any
    pub(crate) title: Option<String>,
    /// Raw text before the first `##` heading (metadata block lives here)
    pub(crate) preamble: String,
    /// Section heading text -> raw section prose, insertion order preserved
    pub(crate) sections: IndexMap<String, String>,
}

struct Heading {
    level: u8,
    title: String,
    span: Range<usize>,
}

/// Split raw markdown into title, preamble and `##` sections
pub(crate) fn split(text: &str) -> SplitDocument {
    let headings = collect_headings(text);

    let title = headings
        .iter()
        .find(|h| h.level == 1)
        .map(|h| h.title.clone());

    // Preamble runs to the first section heading. H1 titles stay inside it;
    // metadata extraction skips heading lines.
    let preamble_end = headings
        .iter()
        .find(|h| h.level >= 2)
        .map_or(text.len(), |h| h.span.start);
    let preamble = text[..preamble_end].to_string();

    let mut sections = IndexMap::new();
    for (i, heading) in headings.iter().enumerate() {
        if heading.level != 2 {
            continue;
        }
        // Section content runs to the next heading at level <= 2, so
        // `###` subsections stay inside their parent section.
        let end = headings[i + 1..]
            .iter()
            .find(|h| h.level <= 2)
            .map_or(text.len(), |h| h.span.start);
        let content = text[heading.span.end..end].trim().to_string();
        sections.insert(heading.title.clone(), content);
    }

    SplitDocument {
        title,
        preamble,
        sections,
    }
}

fn collect_headings(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<Heading> = None;

    for (event, range) in MdParser::new(text).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some(Heading {
                    level: level as u8,
                    title: String::new(),
                    span: range,
                });
            }
            Event::Text(t) => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push_str(&t);
                }
            }
            Event::Code(code) => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push_str(&code);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut heading) = current.take() {
                    heading.title = heading.title.trim().to_string();
                    headings.push(heading);
                }
            }
            _ => {}
        }
    }

    headings
}
