//! Per-market analyzers
//!
//! Each analyzer is a pure function of the supplied statistics. The
//! coefficients are fixed heuristics and are reproduced as-is.

use super::classify_confidence;
use crate::error::{Result, TicketError};
use crate::types::{round2, BettingOpportunity, MarketType, MatchData, TeamStats};
use std::sync::Arc;

/// Goal line for the Over/Under market
const GOAL_LINE: f64 = 2.5;
/// Expected goals required before "Over" is considered
const OVER_GOALS_TRIGGER: f64 = 2.8;
/// Probability required before "Over" is considered
const OVER_PROBABILITY_TRIGGER: f64 = 0.65;
const OVER_UNDER_PROBABILITY_CAP: f64 = 0.95;

const BTTS_HOME_WEIGHT: f64 = 0.6;
const BTTS_AWAY_WEIGHT: f64 = 0.4;
const BTTS_YES_TRIGGER: f64 = 0.60;

const CORNER_LINE: f64 = 8.5;
const CORNERS_OVER_TRIGGER: f64 = 9.0;
const CORNERS_PROBABILITY_CAP: f64 = 0.9;

/// Analyzer signature shared by every market.
pub type MarketAnalyzerFn = fn(&Arc<MatchData>) -> Result<BettingOpportunity>;

/// Every market analyzed for a match, in output order.
pub const MARKET_ANALYZERS: [(MarketType, MarketAnalyzerFn); 3] = [
    (MarketType::OverUnder, analyze_over_under),
    (MarketType::BothTeamsScore, analyze_both_teams_score),
    (MarketType::CornerKicks, analyze_corners),
];

/// Over/Under 2.5 goals.
pub fn analyze_over_under(match_data: &Arc<MatchData>) -> Result<BettingOpportunity> {
    validate_stats(match_data, MarketType::OverUnder)?;
    let home = &match_data.home_stats;
    let away = &match_data.away_stats;

    let expected_goals = home.avg_goals_scored + away.avg_goals_conceded;
    let shots_on_target = home.avg_shots_on_target + away.avg_shots_on_target;

    let goal_factor = expected_goals / GOAL_LINE;
    let shots_factor = shots_on_target / 6.0;
    let btgs_factor = (home.btgs_percentage + away.btgs_percentage) / 200.0;
    let probability = (goal_factor * 0.5 + shots_factor * 0.3 + btgs_factor * 0.2)
        .min(OVER_UNDER_PROBABILITY_CAP);

    let (prediction, odds) =
        if expected_goals >= OVER_GOALS_TRIGGER && probability >= OVER_PROBABILITY_TRIGGER {
            ("Over 2.5", (3.0 - (expected_goals - GOAL_LINE) * 0.3).max(1.5))
        } else {
            ("Under 2.5", (1.0 + (GOAL_LINE - expected_goals) * 0.5).max(1.3))
        };

    let reasoning = format!(
        "Expected goals: {:.2} | Shots on target: {:.1}",
        expected_goals, shots_on_target
    );

    Ok(build_opportunity(
        match_data,
        MarketType::OverUnder,
        prediction,
        probability,
        odds,
        reasoning,
    ))
}

/// Both teams to score.
pub fn analyze_both_teams_score(match_data: &Arc<MatchData>) -> Result<BettingOpportunity> {
    validate_stats(match_data, MarketType::BothTeamsScore)?;
    let home_btgs = match_data.home_stats.btgs_percentage / 100.0;
    let away_btgs = match_data.away_stats.btgs_percentage / 100.0;

    let probability = home_btgs * BTTS_HOME_WEIGHT + away_btgs * BTTS_AWAY_WEIGHT;

    let (prediction, odds) = if probability >= BTTS_YES_TRIGGER {
        ("Yes", (2.5 - (probability - 0.5) * 2.0).max(1.6))
    } else {
        ("No", (1.0 + (0.5 - probability) * 1.5).max(1.4))
    };

    let reasoning = format!(
        "Probability: {:.2}% | Home: {:.2}% | Away: {:.2}%",
        probability * 100.0,
        home_btgs * 100.0,
        away_btgs * 100.0
    );

    Ok(build_opportunity(
        match_data,
        MarketType::BothTeamsScore,
        prediction,
        probability,
        odds,
        reasoning,
    ))
}

/// Over/Under 8.5 corners.
pub fn analyze_corners(match_data: &Arc<MatchData>) -> Result<BettingOpportunity> {
    validate_stats(match_data, MarketType::CornerKicks)?;
    let home_corners = match_data.home_stats.avg_corners;
    let away_corners = match_data.away_stats.avg_corners;
    let expected_corners = home_corners + away_corners;

    let (prediction, probability, odds) = if expected_corners >= CORNERS_OVER_TRIGGER {
        (
            "Over 8.5",
            (expected_corners / 10.0).min(CORNERS_PROBABILITY_CAP),
            (2.2 - (expected_corners - CORNER_LINE) * 0.2).max(1.5),
        )
    } else {
        (
            "Under 8.5",
            ((CORNER_LINE - expected_corners) / 5.0).min(CORNERS_PROBABILITY_CAP),
            (1.0 + (CORNER_LINE - expected_corners) * 0.3).max(1.3),
        )
    };

    let reasoning = format!(
        "Expected corners: {:.1} | Home: {:.1} | Away: {:.1}",
        expected_corners, home_corners, away_corners
    );

    Ok(build_opportunity(
        match_data,
        MarketType::CornerKicks,
        prediction,
        probability,
        odds,
        reasoning,
    ))
}

/// Odds are rounded before storing; EV and confidence use the raw probability.
fn build_opportunity(
    match_data: &Arc<MatchData>,
    market_type: MarketType,
    prediction: &str,
    probability: f64,
    odds: f64,
    reasoning: String,
) -> BettingOpportunity {
    let odds = round2(odds);
    let expected_value = probability * odds - 1.0;
    let confidence = classify_confidence(probability);

    tracing::debug!(
        match_id = match_data.match_id,
        market = %market_type,
        prediction,
        probability,
        odds,
        expected_value,
        "Market analyzed"
    );

    BettingOpportunity {
        match_data: Arc::clone(match_data),
        market_type,
        prediction: prediction.to_string(),
        confidence,
        odds,
        reasoning,
        expected_value,
    }
}

/// Reject non-finite or out-of-range statistics for either side.
fn validate_stats(match_data: &MatchData, market: MarketType) -> Result<()> {
    validate_team(match_data, market, "home", &match_data.home_stats)?;
    validate_team(match_data, market, "away", &match_data.away_stats)
}

fn validate_team(
    match_data: &MatchData,
    market: MarketType,
    side: &str,
    stats: &TeamStats,
) -> Result<()> {
    let invalid = |reason: String| TicketError::Analysis {
        match_id: match_data.match_id,
        market,
        reason: format!("{} team {}: {}", side, stats.team_name, reason),
    };

    for (name, value) in stats.rates() {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!("{} must be a non-negative number, got {}", name, value)));
        }
    }
    for (name, value) in stats.percentages() {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(invalid(format!("{} must be within 0-100, got {}", name, value)));
        }
    }
    Ok(())
}
