use std::sync::LazyLock;

use regex::Regex;

use crate::records::{Section, SectionKind};
use crate::sanitize::clean;

// Both heading tiers collapse to one heading kind.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[23][^>]*>([^<]+)</h[23]>").unwrap());
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p[^>]*>([^<]+(?:<[^>]+>[^<]*)*)</p>").unwrap());

/// Paragraphs shorter than this after sanitization are captions,
/// credits and similar noise.
const MIN_PARAGRAPH_CHARS: usize = 20;

/// Ordered description sections from a description page.
///
/// Headings and paragraphs are matched in two independent passes; each
/// match carries its starting byte offset, and the union is stably sorted
/// by offset so the result follows source-document order regardless of
/// which pass produced an element.
pub fn extract(html: &str) -> Vec<Section> {
    let mut tagged: Vec<(usize, Section)> = Vec::new();

    for caps in HEADING_RE.captures_iter(html) {
        let text = clean(&caps[1]);
        if !text.is_empty() {
            tagged.push((
                caps.get(0).map_or(0, |m| m.start()),
                Section { kind: SectionKind::Heading, text },
            ));
        }
    }

    for caps in PARAGRAPH_RE.captures_iter(html) {
        let text = clean(&caps[1]);
        if text.chars().count() < MIN_PARAGRAPH_CHARS {
            continue;
        }
        tagged.push((
            caps.get(0).map_or(0, |m| m.start()),
            Section { kind: SectionKind::Paragraph, text },
        ));
    }

    // Vec::sort_by_key is stable, so equal offsets keep pass order.
    tagged.sort_by_key(|(offset, _)| *offset);
    tagged.into_iter().map(|(_, section)| section).collect()
}
