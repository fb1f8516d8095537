use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{RESERVED_SEGMENT, THEME_PATH};

/// One discovered child link on the hub page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLink {
    /// Last path segment, unique within the theme.
    pub id: String,
    /// Root-relative path with trailing slash.
    pub path: String,
}

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"href="({}([^/"]+)/)""#,
        regex::escape(THEME_PATH)
    ))
    .unwrap()
});

/// Anchors under the theme path prefix, deduplicated by id preserving
/// first-occurrence order. The reserved `description` segment is a
/// sub-page of the theme itself, not an object.
pub fn extract(html: &str) -> Vec<ObjectLink> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for caps in LINK_RE.captures_iter(html) {
        let id = caps[2].to_string();
        if id == RESERVED_SEGMENT || !seen.insert(id.clone()) {
            continue;
        }
        links.push(ObjectLink {
            id,
            path: caps[1].to_string(),
        });
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(segment: &str) -> String {
        format!(r#"<a href="{THEME_PATH}{segment}/">x</a>"#)
    }

    #[test]
    fn dedupes_preserving_first_occurrence() {
        let html = [anchor("trumma"), anchor("skrin"), anchor("trumma"), anchor("kniv")].join("\n");
        let links = extract(&html);
        let ids: Vec<&str> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["trumma", "skrin", "kniv"]);
    }

    #[test]
    fn excludes_reserved_segment() {
        let html = [anchor("description"), anchor("trumma")].join("\n");
        let links = extract(&html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, "trumma");
    }

    #[test]
    fn ignores_links_outside_theme_prefix() {
        let html = r#"<a href="/sv/1500-tal/staden/annat-tema/sak/">x</a>"#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn path_keeps_trailing_slash() {
        let links = extract(&anchor("trumma"));
        assert_eq!(links[0].path, format!("{THEME_PATH}trumma/"));
    }
}
