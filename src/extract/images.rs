use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BASE_URL;

// Only guide media in the known format; external or inline images are noise.
static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="(/media/[^"]+\.webp)""#).unwrap());

/// Image URLs on an object page, absolutized against the fixed origin,
/// deduplicated preserving order.
pub fn extract(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for caps in IMG_RE.captures_iter(html) {
        let url = format!("{BASE_URL}{}", &caps[1]);
        if seen.insert(url.clone()) {
            images.push(url);
        }
    }

    images
}
