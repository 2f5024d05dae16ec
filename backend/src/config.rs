use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

pub const DATABASE_PATH_ENV: &str = "WIKI_DATABASE_PATH";
pub const LOG_FILTER_ENV: &str = "WIKI_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings for the wiki binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    /// SQLite file backing the page store; `None` keeps pages in memory
    pub database_path: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        WikiConfig {
            database_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl WikiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = WikiConfig::default();

        if let Some(path) = lookup(DATABASE_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            if filter.trim().is_empty() {
                bail!("{LOG_FILTER_ENV} is set but empty");
            }
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Apply command line overrides on top of the environment
    pub fn with_overrides(mut self, database_path: Option<PathBuf>, log_filter: Option<String>) -> Self {
        if let Some(path) = database_path {
            self.database_path = Some(path);
        }
        if let Some(filter) = log_filter {
            self.log_filter = filter;
        }
        self
    }
}
