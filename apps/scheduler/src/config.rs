//! Environment-driven configuration.

use anyhow::{ensure, Context};
use srs_core::SchedulerSettings;
use std::path::PathBuf;

/// Runtime configuration for the command-line front end.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub settings: SchedulerSettings,
}

/// Values given on the command line. A set field wins over its variable,
/// which is then not read at all.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database_path: Option<PathBuf>,
    pub coefficient: Option<f64>,
}

impl Config {
    /// Load `.env` if present, then read `SRS_*` variables not overridden.
    pub fn from_env(overrides: Overrides) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    ///
    /// Values are parsed but not validated; call [`Config::validate`] once
    /// everything is in place.
    pub fn from_lookup<F>(lookup: F, overrides: Overrides) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match overrides.database_path {
            Some(path) => path,
            None => lookup("SRS_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
        };

        let mut settings = SchedulerSettings::default();
        match overrides.coefficient {
            Some(coefficient) => settings.coefficient = coefficient,
            None => {
                if let Some(value) = lookup("SRS_COEFFICIENT") {
                    settings.coefficient = value
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid SRS_COEFFICIENT: {value}"))?;
                }
            }
        }
        if let Some(value) = lookup("SRS_BATCH_SIZE") {
            settings.batch_size = value
                .trim()
                .parse()
                .with_context(|| format!("invalid SRS_BATCH_SIZE: {value}"))?;
        }

        Ok(Self {
            database_path,
            settings,
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let coefficient = self.settings.coefficient;
        ensure!(
            coefficient.is_finite() && coefficient > 0.0,
            "coefficient must be a positive number, got {coefficient}"
        );
        ensure!(self.settings.batch_size > 0, "batch size must be at least 1");
        Ok(())
    }
}

/// Default store location under the platform's local data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("word-scheduler")
        .join("reviews.db")
}
