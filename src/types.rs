//! Core data model shared by the analyzers, the ticket generator and the
//! presentation layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

// ---------------------------------------------------------------------------
// Match statistics
// ---------------------------------------------------------------------------

/// Aggregate per-team statistics supplied by a statistics source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: i64,
    pub team_name: String,
    /// Sample size the averages were computed over
    pub matches_played: u32,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
    pub avg_shots: f64,
    pub avg_shots_on_target: f64,
    pub avg_corners: f64,
    /// Average possession (0-100)
    pub possession_avg: f64,
    /// Share of matches where both teams scored (0-100)
    pub btgs_percentage: f64,
}

impl TeamStats {
    /// Non-negative rate fields, by name, for validation.
    pub(crate) fn rates(&self) -> [(&'static str, f64); 5] {
        [
            ("avg_goals_scored", self.avg_goals_scored),
            ("avg_goals_conceded", self.avg_goals_conceded),
            ("avg_shots", self.avg_shots),
            ("avg_shots_on_target", self.avg_shots_on_target),
            ("avg_corners", self.avg_corners),
        ]
    }

    /// Percentage fields, by name, for validation.
    pub(crate) fn percentages(&self) -> [(&'static str, f64); 2] {
        [
            ("possession_avg", self.possession_avg),
            ("btgs_percentage", self.btgs_percentage),
        ]
    }
}

/// A past meeting between the two sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub date: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

/// One fixture under analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchData {
    pub match_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub date: DateTime<Utc>,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    #[serde(default)]
    pub historical_meetings: Vec<HeadToHead>,
}

impl MatchData {
    /// "Home vs Away"
    pub fn label(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

// ---------------------------------------------------------------------------
// Markets and confidence
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketType {
    OverUnder,
    BothTeamsScore,
    CornerKicks,
    /// Reserved; no analyzer produces it yet
    ShotsOnTarget,
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarketType::OverUnder => "Over/Under",
            MarketType::BothTeamsScore => "Both Teams To Score",
            MarketType::CornerKicks => "Corner Kicks",
            MarketType::ShotsOnTarget => "Shots On Target",
        };
        f.write_str(name)
    }
}

/// Ordered confidence band. Variant order is the ranking order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    /// Ranking weight. Not a probability.
    pub fn weight(self) -> f64 {
        match self {
            ConfidenceLevel::Low => 0.4,
            ConfidenceLevel::Medium => 0.6,
            ConfidenceLevel::High => 0.75,
            ConfidenceLevel::VeryHigh => 0.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
            ConfidenceLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "low" => Ok(ConfidenceLevel::Low),
            "medium" => Ok(ConfidenceLevel::Medium),
            "high" => Ok(ConfidenceLevel::High),
            "very_high" | "veryhigh" => Ok(ConfidenceLevel::VeryHigh),
            other => Err(format!("unknown confidence level: {}", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Opportunities and tickets
// ---------------------------------------------------------------------------

/// A single market pick for one match.
#[derive(Debug, Clone, Serialize)]
pub struct BettingOpportunity {
    /// Shared with the other opportunities of the same match
    pub match_data: Arc<MatchData>,
    pub market_type: MarketType,
    pub prediction: String,
    pub confidence: ConfidenceLevel,
    /// Decimal odds, rounded to 2 dp
    pub odds: f64,
    pub reasoning: String,
    /// probability * odds - 1
    pub expected_value: f64,
}

impl BettingOpportunity {
    pub fn match_label(&self) -> String {
        self.match_data.label()
    }
}

/// Ticket construction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Conservative,
    Balanced,
    Value,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Conservative => "Conservative",
            Strategy::Balanced => "Balanced",
            Strategy::Value => "Value",
        };
        f.write_str(name)
    }
}

/// Advisory share of bankroll to put on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeRecommendation {
    /// 2-3% of bankroll
    High,
    /// 1-2% of bankroll
    Moderate,
    /// 0.5-1% of bankroll
    Low,
}

impl StakeRecommendation {
    pub fn label(self) -> &'static str {
        match self {
            StakeRecommendation::High => "2–3% of bankroll",
            StakeRecommendation::Moderate => "1–2% of bankroll",
            StakeRecommendation::Low => "0.5–1% of bankroll",
        }
    }

    /// Lower and upper bankroll fraction
    pub fn fraction_range(self) -> (Decimal, Decimal) {
        match self {
            StakeRecommendation::High => (dec!(0.02), dec!(0.03)),
            StakeRecommendation::Moderate => (dec!(0.01), dec!(0.02)),
            StakeRecommendation::Low => (dec!(0.005), dec!(0.01)),
        }
    }

    /// Money range for a given bankroll, rounded to cents
    pub fn amount_range(self, bankroll: Decimal) -> (Decimal, Decimal) {
        let (lo, hi) = self.fraction_range();
        ((bankroll * lo).round_dp(2), (bankroll * hi).round_dp(2))
    }
}

impl fmt::Display for StakeRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bundle of opportunities presented together.
#[derive(Debug, Clone, Serialize)]
pub struct SmartTicket {
    pub ticket_id: String,
    pub strategy: Strategy,
    /// Presentation order
    pub opportunities: Vec<Arc<BettingOpportunity>>,
    pub total_odds: f64,
    pub confidence_score: f64,
    pub stake_recommendation: StakeRecommendation,
    pub created_at: DateTime<Utc>,
}

impl SmartTicket {
    /// Mean confidence as a whole percentage (0.83 -> 83)
    pub fn confidence_pct(&self) -> u32 {
        (self.confidence_score * 100.0).round() as u32
    }
}
