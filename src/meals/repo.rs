use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use super::repo_types::{MealHistory, MealRecord, SaveContext};
use super::services::{build_record, sample_history};
use crate::analysis::MealAnalysis;
use crate::error::StoreError;
use crate::storage::KeyValueStore;

pub const DEFAULT_HISTORY_KEY: &str = "mealHistory";

/// Result of `load_all`: always a usable history, plus what went wrong if anything.
#[derive(Debug)]
pub struct LoadedHistory {
    pub history: MealHistory,
    pub warning: Option<StoreError>,
}

/// Meal history kept as one serialized blob under one key.
///
/// Every operation reads the whole collection and, for mutations, writes the
/// whole collection back. Overlapping mutations are last-write-wins.
#[derive(Clone)]
pub struct MealStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl MealStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Never fails. No blob yet means the sample history; a blob that cannot be
    /// read or decoded also yields the samples, with the cause as `warning`.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load_all(&self) -> LoadedHistory {
        match self.read().await {
            Ok(Some(history)) => LoadedHistory {
                history,
                warning: None,
            },
            Ok(None) => {
                debug!("no stored history; using samples");
                LoadedHistory {
                    history: sample_history(),
                    warning: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to load meal history; using samples");
                LoadedHistory {
                    history: sample_history(),
                    warning: Some(e),
                }
            }
        }
    }

    /// Prepends a record built from `analysis` and persists the whole history.
    /// Saving the same analysis twice stores two records.
    #[instrument(skip(self, analysis, context), fields(key = %self.key, id = %context.generated_id))]
    pub async fn save(
        &self,
        analysis: &MealAnalysis,
        context: SaveContext,
    ) -> Result<MealRecord, StoreError> {
        let record = build_record(analysis, context);
        let mut history = self.current().await?;
        history.prepend(record.clone());
        self.write(&history).await?;
        info!(title = %record.title, total = history.len(), "meal saved");
        Ok(record)
    }

    /// Removes the record with `id` (no-op if absent), persists and returns the rest.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn delete(&self, id: &str) -> Result<MealHistory, StoreError> {
        let mut history = self.current().await?;
        if !history.remove(id) {
            debug!(%id, "no meal with id; nothing removed");
        }
        self.write(&history).await?;
        if history.is_empty() {
            debug!("meal history is now empty");
        }
        info!(%id, total = history.len(), "meal deleted");
        Ok(history)
    }

    // Mutations start from what load_all would show, but refuse to overwrite
    // a blob that is there and unreadable.
    async fn current(&self) -> Result<MealHistory, StoreError> {
        Ok(self.read().await?.unwrap_or_else(sample_history))
    }

    async fn read(&self) -> Result<Option<MealHistory>, StoreError> {
        let Some(blob) = self.kv.get(&self.key).await.map_err(StoreError::Persistence)? else {
            return Ok(None);
        };
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(StoreError::Corrupt)
    }

    async fn write(&self, history: &MealHistory) -> Result<(), StoreError> {
        let blob = serde_json::to_string(history).map_err(StoreError::Encode)?;
        self.kv.set(&self.key, &blob).await.map_err(|e| {
            error!(error = %e, "failed to persist meal history");
            StoreError::Persistence(e)
        })
    }
}
