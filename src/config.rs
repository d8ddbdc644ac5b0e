use anyhow::Context;
use time::UtcOffset;

use crate::meals::DEFAULT_HISTORY_KEY;

#[derive(Debug, Clone)]
pub struct S3Config {
    pub endpoint: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub prefix: String,
}

/// Where the meal history blob lives.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    Memory,
    Postgres { database_url: String },
    S3(S3Config),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub history_key: String,
    pub display_offset: UtcOffset,
    pub backend: BackendConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>().context("APP_PORT must be a port number")?,
            Err(_) => 8080,
        };
        let display_offset =
            parse_display_offset(std::env::var("DISPLAY_UTC_OFFSET_MINUTES").ok().as_deref())?;

        let backend = match std::env::var("KV_BACKEND")
            .unwrap_or_else(|_| "memory".into())
            .as_str()
        {
            "memory" => BackendConfig::Memory,
            "postgres" => BackendConfig::Postgres {
                database_url: std::env::var("DATABASE_URL").context("DATABASE_URL")?,
            },
            "s3" => BackendConfig::S3(S3Config {
                endpoint: std::env::var("S3_ENDPOINT").context("S3_ENDPOINT")?,
                bucket: std::env::var("S3_BUCKET").context("S3_BUCKET")?,
                access_key: std::env::var("S3_ACCESS_KEY").context("S3_ACCESS_KEY")?,
                secret_key: std::env::var("S3_SECRET_KEY").context("S3_SECRET_KEY")?,
                region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into()),
                prefix: std::env::var("S3_PREFIX").unwrap_or_else(|_| "kv/".into()),
            }),
            other => anyhow::bail!("unknown KV_BACKEND {other:?} (expected memory, postgres or s3)"),
        };

        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            history_key: std::env::var("MEAL_HISTORY_KEY")
                .unwrap_or_else(|_| DEFAULT_HISTORY_KEY.into()),
            display_offset,
            backend,
        })
    }
}

/// Minutes east of UTC; unset means UTC.
fn parse_display_offset(value: Option<&str>) -> anyhow::Result<UtcOffset> {
    let Some(value) = value else {
        return Ok(UtcOffset::UTC);
    };
    let minutes = value
        .trim()
        .parse::<i32>()
        .context("DISPLAY_UTC_OFFSET_MINUTES must be a whole number of minutes")?;
    let seconds = minutes
        .checked_mul(60)
        .ok_or_else(|| anyhow::anyhow!("DISPLAY_UTC_OFFSET_MINUTES out of range"))?;
    UtcOffset::from_whole_seconds(seconds).context("DISPLAY_UTC_OFFSET_MINUTES out of range")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            history_key: DEFAULT_HISTORY_KEY.into(),
            display_offset: UtcOffset::UTC,
            backend: BackendConfig::Memory,
        }
    }
}
