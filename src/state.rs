use crate::config::{AppConfig, BackendConfig};
use crate::db::{self, PgStore};
use crate::meals::MealStore;
use crate::storage::{KeyValueStore, MemoryStore, S3Store};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub meals: MealStore,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let kv: Arc<dyn KeyValueStore> = match &config.backend {
            BackendConfig::Memory => {
                tracing::warn!("KV_BACKEND=memory; meal history is lost on restart");
                Arc::new(MemoryStore::new())
            }
            BackendConfig::Postgres { database_url } => {
                Arc::new(PgStore::new(db::connect(database_url).await?))
            }
            BackendConfig::S3(s3) => Arc::new(
                S3Store::new(
                    &s3.endpoint,
                    &s3.bucket,
                    &s3.access_key,
                    &s3.secret_key,
                    &s3.region,
                    &s3.prefix,
                )
                .await?,
            ),
        };

        Ok(Self::from_parts(config, kv))
    }

    pub fn from_parts(config: Arc<AppConfig>, kv: Arc<dyn KeyValueStore>) -> Self {
        let meals = MealStore::new(kv, config.history_key.clone());
        Self { config, meals }
    }

    pub fn fake() -> Self {
        Self::from_parts(Arc::new(AppConfig::default()), Arc::new(MemoryStore::new()))
    }
}
