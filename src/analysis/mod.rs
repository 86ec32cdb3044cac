//! Market analysis
//!
//! Turns a match's team statistics into one betting opportunity per market:
//! - Over/Under 2.5 goals
//! - Both teams to score
//! - Over/Under 8.5 corners

mod confidence;
mod markets;


pub use confidence::classify_confidence;
pub use markets::{
    analyze_both_teams_score, analyze_corners, analyze_over_under, MarketAnalyzerFn,
    MARKET_ANALYZERS,
};

use crate::config::AnalysisConfig;
use crate::error::{Result, TicketError};
use crate::types::{BettingOpportunity, MatchData, TeamStats};
use std::sync::Arc;

/// Runs every market analyzer against a match.
#[derive(Debug, Clone, Default)]
pub struct MatchAnalyzer {
    config: AnalysisConfig,
}

impl MatchAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one match, producing one opportunity per market in
    /// [`MARKET_ANALYZERS`] order. Any failing market fails the whole match.
    pub fn analyze(&self, match_data: impl Into<Arc<MatchData>>) -> Result<Vec<BettingOpportunity>> {
        let match_data = match_data.into();
        self.check_sample(&match_data, &match_data.home_stats)?;
        self.check_sample(&match_data, &match_data.away_stats)?;

        MARKET_ANALYZERS
            .iter()
            .map(|(_, analyze)| analyze(&match_data))
            .collect()
    }

    fn check_sample(&self, match_data: &MatchData, stats: &TeamStats) -> Result<()> {
        let required = self.config.min_matches_played;
        if stats.matches_played < required {
            return Err(TicketError::InsufficientSample {
                match_id: match_data.match_id,
                team: stats.team_name.clone(),
                matches_played: stats.matches_played,
                required,
            });
        }
        Ok(())
    }
}
