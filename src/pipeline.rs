use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{info, warn};

use crate::assemble;
use crate::config::{BASE_URL, FETCH_DELAY_MS, PRIMARY_COUNT, THEME_PATH};
use crate::extract::links::ObjectLink;
use crate::extract::{ingress, links, title};
use crate::fetch;
use crate::records::{ObjectRecord, ThemeRecord};
use crate::store;

/// Run summary returned after completion.
pub struct RunStats {
    pub total: usize,
    pub ok: usize,
    pub skipped: usize,
}

/// Hub-level fields extracted from the theme page.
#[derive(Debug)]
struct HubPage {
    title: String,
    ingress: String,
    links: Vec<ObjectLink>,
}

/// Extract the hub fields from theme page markup. A hub without object
/// links is unusable, so that fails here, before anything is written.
fn parse_hub(html: &str) -> Result<HubPage> {
    let title = title::extract(html);
    let ingress = ingress::extract(html);
    let links = links::extract(html);
    if links.is_empty() {
        bail!("no object links found on theme page");
    }
    Ok(HubPage { title, ingress, links })
}

/// One full pipeline run: hub page in, corpus snapshot out.
///
/// Hub-level failure (fetch error or an empty link list) fails the run and
/// writes nothing. A failed child is logged and skipped; the run still
/// succeeds without it.
pub async fn run(out_dir: &Path) -> Result<RunStats> {
    let client = fetch::client()?;

    let hub_url = format!("{BASE_URL}{THEME_PATH}");
    info!("Fetching theme page: {}", hub_url);
    let hub_html = fetch::fetch_page(&client, &hub_url)
        .await
        .context("theme page fetch failed")?;

    let hub = parse_hub(&hub_html).with_context(|| format!("unusable theme page {hub_url}"))?;
    let object_links = hub.links;
    info!("Found {} objects", object_links.len());

    let pb = ProgressBar::new(object_links.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    // Strictly sequential: deterministic order, and the delay is the
    // politeness contract with the guide server.
    let mut objects: Vec<ObjectRecord> = Vec::with_capacity(object_links.len());
    for (i, link) in object_links.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(Duration::from_millis(FETCH_DELAY_MS)).await;
        }
        pb.set_message(link.id.clone());
        if let Some(record) = fetch_object(&client, link).await {
            objects.push(record);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let theme = build_theme(hub.title, hub.ingress, &object_links, &objects);
    store::write_corpus(out_dir, &theme, &objects)?;

    let total = object_links.len();
    let ok = objects.len();
    Ok(RunStats { total, ok, skipped: total - ok })
}

/// Fetch and assemble one object. Any failure on the object page itself is
/// terminal for this child only: logged, `None` returned, batch continues.
/// A missing description page just means an empty section list.
async fn fetch_object(client: &Client, link: &ObjectLink) -> Option<ObjectRecord> {
    let object_url = format!("{BASE_URL}{}", link.path);
    let object_html = match fetch::fetch_page(client, &object_url).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Skipping {}: {}", link.id, e);
            return None;
        }
    };

    let description_url = format!("{object_url}description/");
    let description_html = match fetch::fetch_page(client, &description_url).await {
        Ok(html) => Some(html),
        Err(e) => {
            info!("No description page for {}: {}", link.id, e);
            None
        }
    };

    Some(assemble::assemble(&object_html, description_html.as_deref(), &link.id))
}

/// Build the hub record from assembled objects, split positionally over the
/// discovered link list: first [`PRIMARY_COUNT`] ids are primary, the rest
/// secondary. Skipped children appear in neither list.
fn build_theme(
    title: String,
    ingress: String,
    object_links: &[ObjectLink],
    objects: &[ObjectRecord],
) -> ThemeRecord {
    let primary_ids: HashSet<&str> = object_links
        .iter()
        .take(PRIMARY_COUNT)
        .map(|l| l.id.as_str())
        .collect();

    let mut primary_objects = Vec::new();
    let mut secondary_objects = Vec::new();
    for object in objects {
        let summary = object.summary();
        if primary_ids.contains(object.id.as_str()) {
            primary_objects.push(summary);
        } else {
            secondary_objects.push(summary);
        }
    }

    ThemeRecord { title, ingress, primary_objects, secondary_objects }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::THEME_PATH;
    use crate::records::{Description, Timeline};

    fn link(id: &str) -> ObjectLink {
        ObjectLink {
            id: id.to_string(),
            path: format!("{THEME_PATH}{id}/"),
        }
    }

    fn object(id: &str) -> ObjectRecord {
        ObjectRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            object_number: String::new(),
            images: vec![],
            thumbnail: crate::config::PLACEHOLDER_THUMBNAIL.into(),
            intro: String::new(),
            description: Description { sections: vec![] },
            timeline: Timeline::default_periods(),
        }
    }

    #[test]
    fn hub_without_object_links_fails_with_nothing_written() {
        let dir = tempfile::tempdir().unwrap();
        let html = "<h1>Tomt tema</h1><p>Ett tema utan ett enda föremål att visa upp.</p>";

        let err = parse_hub(html).unwrap_err();
        assert!(err.to_string().contains("no object links"));
        // hub extraction precedes every store write, so the corpus
        // directory stays untouched
        assert!(!dir.path().join("theme.json").exists());
        assert!(!dir.path().join("objects").exists());
    }

    #[test]
    fn hub_fields_from_theme_markup() {
        let html = std::fs::read_to_string("tests/fixtures/theme.html").unwrap();
        let hub = parse_hub(&html).unwrap();
        assert_eq!(hub.title, "Samerna handlar med dyra pälsverk");
        assert!(hub.ingress.starts_with("Under 1500-talet"));
        assert_eq!(hub.links.len(), 12);
    }

    #[test]
    fn twelve_links_split_nine_three() {
        let object_links: Vec<ObjectLink> =
            (0..12).map(|i| link(&format!("foremal-{i}"))).collect();
        let objects: Vec<ObjectRecord> =
            object_links.iter().map(|l| object(&l.id)).collect();

        let theme = build_theme("T".into(), String::new(), &object_links, &objects);
        assert_eq!(theme.primary_objects.len(), 9);
        assert_eq!(theme.secondary_objects.len(), 3);
        assert_eq!(theme.primary_objects[0].id, "foremal-0");
        assert_eq!(theme.primary_objects[8].id, "foremal-8");
        assert_eq!(theme.secondary_objects[0].id, "foremal-9");
        assert_eq!(theme.secondary_objects[2].id, "foremal-11");
    }

    #[test]
    fn skipped_child_absent_from_both_lists() {
        let object_links: Vec<ObjectLink> =
            (0..12).map(|i| link(&format!("foremal-{i}"))).collect();
        // foremal-3 (primary slot) and foremal-10 (secondary slot) failed
        let objects: Vec<ObjectRecord> = object_links
            .iter()
            .filter(|l| l.id != "foremal-3" && l.id != "foremal-10")
            .map(|l| object(&l.id))
            .collect();

        let theme = build_theme("T".into(), String::new(), &object_links, &objects);
        assert_eq!(theme.primary_objects.len(), 8);
        assert_eq!(theme.secondary_objects.len(), 2);
        let all_ids: Vec<&str> = theme
            .primary_objects
            .iter()
            .chain(&theme.secondary_objects)
            .map(|r| r.id.as_str())
            .collect();
        assert!(!all_ids.contains(&"foremal-3"));
        assert!(!all_ids.contains(&"foremal-10"));
    }

    #[test]
    fn fewer_links_than_primary_count() {
        let object_links: Vec<ObjectLink> = (0..4).map(|i| link(&format!("f-{i}"))).collect();
        let objects: Vec<ObjectRecord> = object_links.iter().map(|l| object(&l.id)).collect();

        let theme = build_theme("T".into(), String::new(), &object_links, &objects);
        assert_eq!(theme.primary_objects.len(), 4);
        assert!(theme.secondary_objects.is_empty());
    }

    #[test]
    fn summaries_keep_link_order() {
        let object_links: Vec<ObjectLink> =
            ["kniv", "trumma", "skrin"].iter().map(|id| link(id)).collect();
        let objects: Vec<ObjectRecord> = object_links.iter().map(|l| object(&l.id)).collect();

        let theme = build_theme("T".into(), String::new(), &object_links, &objects);
        let ids: Vec<&str> = theme.primary_objects.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["kniv", "trumma", "skrin"]);
    }
}
