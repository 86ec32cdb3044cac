//! Statistics sources
//!
//! Where match statistics come from. The engine never fetches anything
//! itself; callers pick a source and hand its matches over.

mod demo;

#[cfg(test)]
mod tests;

pub use demo::DemoSource;

use crate::config::SourceConfig;
use crate::error::{Result, TicketError};
use crate::types::MatchData;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Supplies the matches to analyze
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> String;

    /// Matches to analyze, statistics already aggregated
    async fn matches(&self) -> Result<Vec<MatchData>>;
}

/// Reads a JSON array of matches from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StatisticsSource for JsonFileSource {
    fn name(&self) -> String {
        format!("json:{}", self.path.display())
    }

    async fn matches(&self) -> Result<Vec<MatchData>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TicketError::Source(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        let matches: Vec<MatchData> = serde_json::from_str(&raw)?;

        tracing::info!("Loaded {} matches from {}", matches.len(), self.path.display());
        Ok(matches)
    }
}

/// Source described by the `[source]` config section.
///
/// A configured file wins; otherwise the seeded demo fixtures are used.
pub fn from_config(config: &SourceConfig) -> Box<dyn StatisticsSource> {
    match &config.matches_path {
        Some(path) => {
            let expanded = shellexpand::tilde(path);
            Box::new(JsonFileSource::new(expanded.into_owned()))
        }
        None => {
            tracing::info!("No matches file configured, using demo fixtures");
            Box::new(DemoSource::new(config.demo_seed.unwrap_or_default()))
        }
    }
}
