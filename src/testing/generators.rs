//! Test Data Generators
//!
//! Deterministic builders for matches and opportunities

use crate::types::{BettingOpportunity, ConfidenceLevel, MarketType, MatchData, TeamStats};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

/// Generator for test data
pub struct TestDataGenerator {
    counter: u32,
}

impl TestDataGenerator {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Team with league-average numbers
    pub fn team(&mut self, name: &str) -> TeamStats {
        self.team_stats(name, 1.4, 1.1, 4.5, 5.0, 50.0)
    }

    /// Team with the numbers the analyzers read
    pub fn team_stats(
        &mut self,
        name: &str,
        avg_goals_scored: f64,
        avg_goals_conceded: f64,
        avg_shots_on_target: f64,
        avg_corners: f64,
        btgs_percentage: f64,
    ) -> TeamStats {
        self.counter += 1;
        TeamStats {
            team_id: self.counter as i64,
            team_name: name.to_string(),
            matches_played: 20,
            avg_goals_scored,
            avg_goals_conceded,
            avg_shots: avg_shots_on_target * 2.8,
            avg_shots_on_target,
            avg_corners,
            possession_avg: 50.0,
            btgs_percentage,
        }
    }

    pub fn match_between(&mut self, home: TeamStats, away: TeamStats) -> MatchData {
        self.counter += 1;
        MatchData {
            match_id: self.counter as i64,
            home_team: home.team_name.clone(),
            away_team: away.team_name.clone(),
            league: "Test League".to_string(),
            date: Utc
                .with_ymd_and_hms(2024, 5, 1, 19, 0, 0)
                .single()
                .unwrap_or_default(),
            home_stats: home,
            away_stats: away,
            historical_meetings: Vec::new(),
        }
    }

    /// Match between two average teams
    pub fn fixture(&mut self) -> MatchData {
        let home = self.team(&format!("Home {}", self.counter));
        let away = self.team(&format!("Away {}", self.counter));
        self.match_between(home, away)
    }

    /// Opportunity with chosen confidence, odds and EV on a fresh fixture
    pub fn opportunity(
        &mut self,
        confidence: ConfidenceLevel,
        odds: f64,
        expected_value: f64,
    ) -> Arc<BettingOpportunity> {
        let match_data = Arc::new(self.fixture());
        Arc::new(BettingOpportunity {
            match_data,
            market_type: MarketType::OverUnder,
            prediction: format!("Pick {}", self.counter),
            confidence,
            odds,
            reasoning: "generated".to_string(),
            expected_value,
        })
    }
}

impl Default for TestDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}
