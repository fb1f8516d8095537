use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use crate::records::{ObjectRecord, ThemeRecord};

const THEME_FILE: &str = "theme.json";
const OBJECTS_DIR: &str = "objects";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("failed to load record: {0}")]
    Load(#[from] std::io::Error),

    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Write a complete corpus snapshot: `theme.json` plus one detail file per
/// object under `objects/`. Replaces any prior snapshot in full.
pub fn write_corpus(dir: &Path, theme: &ThemeRecord, objects: &[ObjectRecord]) -> Result<()> {
    let objects_dir = dir.join(OBJECTS_DIR);
    if objects_dir.exists() {
        fs::remove_dir_all(&objects_dir).context("failed to clear previous corpus")?;
    }
    fs::create_dir_all(&objects_dir).context("failed to create output directories")?;

    for object in objects {
        let path = objects_dir.join(format!("{}.json", object.id));
        fs::write(&path, serde_json::to_vec_pretty(object)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let theme_path = dir.join(THEME_FILE);
    fs::write(&theme_path, serde_json::to_vec_pretty(theme)?)
        .with_context(|| format!("failed to write {}", theme_path.display()))?;

    info!(
        "Wrote {} and {} object files under {}",
        theme_path.display(),
        objects.len(),
        objects_dir.display()
    );
    Ok(())
}

/// Read side of the corpus, as the kiosk consumes it: the theme is loaded
/// once, object records lazily on first access, both cached for the
/// store's lifetime. No invalidation; a new corpus means a new store.
pub struct ContentStore {
    dir: PathBuf,
    theme: Option<ThemeRecord>,
    objects: HashMap<String, ObjectRecord>,
}

impl ContentStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        ContentStore {
            dir: dir.into(),
            theme: None,
            objects: HashMap::new(),
        }
    }

    pub fn theme(&mut self) -> Result<&ThemeRecord, StoreError> {
        if self.theme.is_none() {
            let path = self.dir.join(THEME_FILE);
            if !path.exists() {
                return Err(StoreError::NotFound("theme".to_string()));
            }
            let raw = fs::read_to_string(&path)?;
            self.theme = Some(serde_json::from_str(&raw)?);
        }
        Ok(self.theme.as_ref().expect("theme cached above"))
    }

    pub fn object(&mut self, id: &str) -> Result<&ObjectRecord, StoreError> {
        if !self.objects.contains_key(id) {
            let path = self.dir.join(OBJECTS_DIR).join(format!("{id}.json"));
            if !path.exists() {
                return Err(StoreError::NotFound(id.to_string()));
            }
            let raw = fs::read_to_string(&path)?;
            let record: ObjectRecord = serde_json::from_str(&raw)?;
            self.objects.insert(id.to_string(), record);
        }
        Ok(&self.objects[id])
    }
}
