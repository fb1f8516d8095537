use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::clean;

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>([^<]+)</h1>").unwrap());
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>([^<]+)</title>").unwrap());
static HEADING_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)class="[^"]*heading[^"]*"[^>]*>([^<]+)<"#).unwrap());

/// Page title: `<h1>`, then `<title>`, then a heading-class element.
/// Never fails; pages with no usable title get the sentinel.
pub fn extract(html: &str) -> String {
    for re in [&*H1_RE, &*TITLE_RE, &*HEADING_CLASS_RE] {
        if let Some(caps) = re.captures(html) {
            let text = clean(&caps[1]);
            if !text.is_empty() {
                return text;
            }
        }
    }
    "Untitled".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_h1() {
        let html = "<title>Guide</title><h1 class=\"x\">Trumma</h1>";
        assert_eq!(extract(html), "Trumma");
    }

    #[test]
    fn falls_back_to_title_tag() {
        assert_eq!(extract("<title>Skidor &amp; stavar</title>"), "Skidor & stavar");
    }

    #[test]
    fn falls_back_to_heading_class() {
        let html = r#"<div class="page-heading large">Kåsa</div>"#;
        assert_eq!(extract(html), "Kåsa");
    }

    #[test]
    fn sentinel_when_nothing_matches() {
        assert_eq!(extract("<p>no headings here</p>"), "Untitled");
    }

    #[test]
    fn empty_h1_is_skipped() {
        let html = "<h1>   </h1><title>Skrin</title>";
        assert_eq!(extract(html), "Skrin");
    }
}
