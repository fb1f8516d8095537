use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::clean;

static INGRESS_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<p[^>]*class="[^"]*ingress[^"]*"[^>]*>([^<]+(?:<[^>]+>[^<]*)*)</p>"#)
        .unwrap()
});
static PARAGRAPH_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<p[^>]*class="[^"]*paragraph[^"]*"[^>]*>([^<]+(?:<[^>]+>[^<]*)*)</p>"#)
        .unwrap()
});
// Fallback: first paragraph with at least 50 raw characters of lead text.
static SUBSTANTIAL_P_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p[^>]*>([^<]{50,}(?:<[^>]+>[^<]*)*)</p>").unwrap());

/// Ingress / lede text. Never fails; returns `""` when nothing matches.
pub fn extract(html: &str) -> String {
    for re in [&*INGRESS_CLASS_RE, &*PARAGRAPH_CLASS_RE, &*SUBSTANTIAL_P_RE] {
        if let Some(caps) = re.captures(html) {
            let text = clean(&caps[1]);
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingress_class_wins() {
        let html = concat!(
            "<p>Det här är en tillräckligt lång inledande paragraf utan klass.</p>",
            r#"<p class="text ingress">Rätt ingress.</p>"#,
        );
        assert_eq!(extract(html), "Rätt ingress.");
    }

    #[test]
    fn paragraph_class_second() {
        let html = r#"<p class="body paragraph">Andra valet <em>med markup</em>.</p>"#;
        assert_eq!(extract(html), "Andra valet med markup.");
    }

    #[test]
    fn substantial_paragraph_fallback() {
        let html = "<p>kort</p><p>Samerna handlade med dyrbara pälsverk längs kusten under hela seklet.</p>";
        assert!(extract(html).starts_with("Samerna handlade"));
    }

    #[test]
    fn empty_when_nothing_matches() {
        assert_eq!(extract("<p>kort</p><div>inget</div>"), "");
    }
}
