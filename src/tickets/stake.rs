//! Stake sizing per ticket

use crate::types::{StakeRecommendation, Strategy};

/// Mean confidence a Conservative ticket needs for the 2-3% stake
const CONSERVATIVE_HIGH_STAKE: f64 = 0.8;
/// Mean confidence a Balanced ticket needs for the 1-2% stake
const BALANCED_MODERATE_STAKE: f64 = 0.7;

/// Stake for a ticket, from its strategy and unrounded mean confidence.
pub fn recommend_stake(strategy: Strategy, confidence_score: f64) -> StakeRecommendation {
    match strategy {
        Strategy::Conservative if confidence_score >= CONSERVATIVE_HIGH_STAKE => {
            StakeRecommendation::High
        }
        Strategy::Balanced if confidence_score >= BALANCED_MODERATE_STAKE => {
            StakeRecommendation::Moderate
        }
        _ => StakeRecommendation::Low,
    }
}
