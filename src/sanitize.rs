use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Entities the guide actually emits. Anything else passes through
/// literally; this is not a general entity table.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Strip markup from a fragment: remove tags, decode the known entities,
/// collapse whitespace runs to single spaces, trim. Idempotent for plain
/// text; entity-encoded markup like `&lt;b&gt;` decodes to a literal tag
/// that a second pass would strip.
pub fn clean(fragment: &str) -> String {
    let mut text = TAG_RE.replace_all(fragment, "").into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    collapse_whitespace(&text)
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
