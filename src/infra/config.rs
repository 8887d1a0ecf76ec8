//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context};
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which store backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!(
                "STORE_BACKEND must be 'postgres' or 'memory' (got '{}')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub backend: StoreBackend,
    /// Only present for the postgres backend.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Reads the process environment (after loading `.env`, if any).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so it can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let backend = match lookup("STORE_BACKEND") {
            Some(v) => v.parse()?,
            None => StoreBackend::Postgres,
        };

        let database = match backend {
            StoreBackend::Memory => None,
            StoreBackend::Postgres => Some(database_from_lookup(&lookup)?),
        };

        Ok(Self {
            bind_addr,
            backend,
            database,
        })
    }
}

/// Database settings alone (used by `preflight`).
pub fn database_config() -> anyhow::Result<DatabaseConfig> {
    dotenv::dotenv().ok();
    database_from_lookup(&|key: &str| std::env::var(key).ok())
}

fn database_from_lookup<F>(lookup: &F) -> anyhow::Result<DatabaseConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // No default for safety.
    let url = lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;
    let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
        Some(v) => v
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?
            .max(1),
        None => DEFAULT_MAX_CONNECTIONS,
    };
    Ok(DatabaseConfig {
        url,
        max_connections,
    })
}
