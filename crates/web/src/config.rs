use std::collections::HashSet;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use storage::services::event_matching::ShuffleMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!(
                "unknown store backend '{}', expected 'postgres' or 'memory'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub api_tokens: String,
    pub admin_user_ids: HashSet<String>,
    pub suggestion_shuffle: ShuffleMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend: StoreBackend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()
            .context("Invalid STORE_BACKEND")?;

        let database_url = std::env::var("DATABASE_URL").ok();
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            bail!("Cannot load DATABASE_URL env variable");
        }

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            store_backend,
            database_url,
            api_tokens: std::env::var("API_TOKENS").unwrap_or_default(),
            admin_user_ids: parse_id_list(&std::env::var("ADMIN_USER_IDS").unwrap_or_default()),
            suggestion_shuffle: std::env::var("SUGGESTION_SHUFFLE")
                .ok()
                .map(|s| s.parse::<ShuffleMode>())
                .transpose()
                .map_err(|e| anyhow!(e))
                .context("Invalid SUGGESTION_SHUFFLE")?
                .unwrap_or_default(),
        })
    }
}

fn parse_id_list(ids: &str) -> HashSet<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        let ids = parse_id_list(" root, ops ,,");
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("root"));
        assert!(ids.contains("ops"));
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("Memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("postgres".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert!("firestore".parse::<StoreBackend>().is_err());
    }
}
