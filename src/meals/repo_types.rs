use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::services::NOT_AVAILABLE;

/// A saved meal. Field names follow the app's stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(rename = "image")]
    pub image_reference: String,
    pub is_healthy: bool,
    #[serde(default)]
    pub detected: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub stats: BTreeMap<String, String>,
    #[serde(default = "not_available")]
    pub serving_size: String,
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Saved meals, newest first. Records are only ever prepended or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealHistory(Vec<MealRecord>);

impl MealHistory {
    pub fn new(records: Vec<MealRecord>) -> Self {
        Self(records)
    }

    pub fn prepend(&mut self, record: MealRecord) {
        self.0.insert(0, record);
    }

    /// Drops every record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|r| r.id != id);
        self.0.len() != before
    }

    pub fn records(&self) -> &[MealRecord] {
        &self.0
    }

    pub fn into_records(self) -> Vec<MealRecord> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Save-time facts that do not come from the analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveContext {
    pub image_reference: String,
    pub generated_id: String,
    pub timestamp_display: String,
}
