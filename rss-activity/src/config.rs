use crate::types::{ActivityError, CompanyFeeds, FetchConfig, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Thresholds, in days, checked when none are configured: one hour, one
/// day, two days and one week.
pub fn default_thresholds() -> Vec<f64> {
    vec![1.0 / 24.0, 1.0, 2.0, 7.0]
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityConfig {
    pub companies: CompanyFeeds,
    #[serde(default = "default_thresholds")]
    pub min_days_inactive: Vec<f64>,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl ActivityConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(days) = self.min_days_inactive.iter().find(|d| !d.is_finite()) {
            return Err(ActivityError::InvalidThreshold(*days));
        }

        if self.fetch.max_feed_size_mb > usize::MAX / (1024 * 1024) {
            return Err(ActivityError::Config(format!(
                "fetch.max_feed_size_mb of {} is too large",
                self.fetch.max_feed_size_mb
            )));
        }

        if self.companies.is_empty() {
            return Err(ActivityError::Config("no companies configured".to_string()));
        }

        Ok(())
    }
}
