use anyhow::{anyhow, Context, Result};
use catalog::SourceProfile;
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub catalog_source: String,
    pub allowed_origins: Vec<String>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://mangas.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            catalog_source: env::var("CATALOG_SOURCE")
                .unwrap_or_else(|_| "demonicscans".to_string()),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost".to_string()),
            ),
            user_agent: env::var("USER_AGENT").ok().filter(|ua| !ua.trim().is_empty()),
        })
    }

    /// The built-in source profile named by `CATALOG_SOURCE`.
    pub fn source_profile(&self) -> Result<SourceProfile> {
        SourceProfile::by_name(&self.catalog_source).ok_or_else(|| {
            let known: Vec<&str> = SourceProfile::builtin().iter().map(|p| p.name).collect();
            anyhow!(
                "CATALOG_SOURCE {:?} is not one of: {}",
                self.catalog_source,
                known.join(", ")
            )
        })
    }
}

/// Comma-separated origin list, blanks dropped.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
