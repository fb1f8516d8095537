use crate::config::PLACEHOLDER_THUMBNAIL;
use crate::extract::{catalog, description, images, ingress, title};
use crate::records::{Description, ObjectRecord, Timeline};

/// Merge extractor outputs for one object into a normalized record.
/// The description page is optional; without it the section list is empty.
pub fn assemble(object_html: &str, description_html: Option<&str>, id: &str) -> ObjectRecord {
    let images = images::extract(object_html);
    let sections = description_html.map(description::extract).unwrap_or_default();

    ObjectRecord {
        id: id.to_string(),
        title: title::extract(object_html),
        object_number: catalog::extract(object_html),
        thumbnail: thumbnail_url(&images),
        images,
        intro: ingress::extract(object_html),
        description: Description { sections },
        timeline: Timeline::default_periods(),
    }
}

/// Thumbnail from the first image by filename substitution; the media
/// server exposes a `-thumbnail` variant next to every `-default` one.
fn thumbnail_url(images: &[String]) -> String {
    images
        .first()
        .map(|url| url.replace("-default.webp", "-thumbnail.webp"))
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string())
}
