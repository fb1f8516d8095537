use serde::{Deserialize, Serialize};

/// Hub-level record: one per theme, referencing all assembled objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub title: String,
    pub ingress: String,
    pub primary_objects: Vec<ObjectRef>,
    pub secondary_objects: Vec<ObjectRef>,
}

/// Object summary embedded in the theme record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRef {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
}

/// Detail record: one per object page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    pub id: String,
    pub title: String,
    pub object_number: String,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub intro: String,
    pub description: Description,
    pub timeline: Timeline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Heading,
    Paragraph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub periods: Vec<Period>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub label: String,
    pub active: bool,
}

const CENTURY_LABELS: &[&str] = &[
    "1500-tal", "1600-tal", "1700-tal", "1800-tal", "1900-tal", "2000-tal",
];

impl Timeline {
    /// Static default: six century markers with only the first active.
    /// Marking the correct century per object is a future enrichment step.
    pub fn default_periods() -> Timeline {
        Timeline {
            periods: CENTURY_LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| Period {
                    label: (*label).to_string(),
                    active: i == 0,
                })
                .collect(),
        }
    }
}

impl ObjectRecord {
    pub fn summary(&self) -> ObjectRef {
        ObjectRef {
            id: self.id.clone(),
            title: self.title.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}
