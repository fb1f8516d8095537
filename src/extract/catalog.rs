use std::sync::LazyLock;

use regex::Regex;

// Inventory numbers like "NM.0228784" or "NM 12345a".
static NM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)NM[.\s]?\d+[A-Za-z]?").unwrap());
// Labeled field on some pages: "Föremålsnummer: ..." (ASCII in markup).
static LABELED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)foremalsnummer[^:]*:\s*[^\s<]+").unwrap());

/// Catalog number as it appears in the markup, or `""`.
pub fn extract(html: &str) -> String {
    for re in [&*NM_RE, &*LABELED_RE] {
        if let Some(m) = re.find(html) {
            return m.as_str().to_string();
        }
    }
    String::new()
}
