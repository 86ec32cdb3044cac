//! Smart ticket generation
//!
//! Filters opportunities, ranks them by expected value and bundles them
//! into up to three strategy tickets (Conservative, Balanced, Value).

mod ids;
mod stake;


pub use ids::TicketIdSource;
pub use stake::recommend_stake;

use crate::config::GeneratorConfig;
use crate::error::{Result, TicketError};
use crate::types::{round2, BettingOpportunity, ConfidenceLevel, SmartTicket, Strategy};
use chrono::Utc;
use std::sync::Arc;

/// Opportunities at or below this EV are dropped before ranking
const MIN_EXPECTED_VALUE: f64 = -0.1;
/// Value ticket takes opportunities strictly above this EV
const VALUE_EXPECTED_VALUE: f64 = 0.1;

const CONSERVATIVE_MIN_LEGS: usize = 2;
const CONSERVATIVE_MAX_LEGS: usize = 3;
const BALANCED_MIN_LEGS: usize = 3;
const BALANCED_MAX_LEGS: usize = 4;
const VALUE_MAX_LEGS: usize = 4;

/// Score of a ticket of the day must reach this
const TICKET_OF_THE_DAY_MIN_CONFIDENCE: f64 = 0.7;

/// Bundles opportunities into strategy tickets
#[derive(Debug)]
pub struct TicketGenerator {
    config: GeneratorConfig,
    ids: TicketIdSource,
}

impl TicketGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let ids = match config.id_seed {
            Some(seed) => TicketIdSource::seeded(seed),
            None => TicketIdSource::random(),
        };
        Self { config, ids }
    }

    pub fn with_id_source(config: GeneratorConfig, ids: TicketIdSource) -> Self {
        Self { config, ids }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate tickets from analyzed opportunities.
    ///
    /// Returns an empty list when nothing passes the filters. Fails only on
    /// malformed input (non-finite odds or EV, odds not above 1.0), before
    /// any ticket is built.
    pub fn generate_tickets(
        &self,
        opportunities: &[Arc<BettingOpportunity>],
    ) -> Result<Vec<SmartTicket>> {
        for opp in opportunities {
            validate_opportunity(opp)?;
        }

        let min_weight = self.config.min_confidence.weight();
        let mut valid: Vec<&Arc<BettingOpportunity>> = opportunities
            .iter()
            .filter(|opp| {
                opp.confidence.weight() >= min_weight && opp.expected_value > MIN_EXPECTED_VALUE
            })
            .collect();

        if valid.is_empty() {
            tracing::info!("No valid opportunities found for ticket generation");
            return Ok(Vec::new());
        }

        // Stable: equal EVs keep their input order.
        valid.sort_by(|a, b| b.expected_value.total_cmp(&a.expected_value));

        let mut plans: Vec<(Strategy, Vec<Arc<BettingOpportunity>>)> = Vec::with_capacity(3);

        let conservative: Vec<_> = valid
            .iter()
            .filter(|opp| opp.confidence >= ConfidenceLevel::High)
            .collect();
        if conservative.len() >= CONSERVATIVE_MIN_LEGS {
            plans.push((
                Strategy::Conservative,
                conservative
                    .into_iter()
                    .take(CONSERVATIVE_MAX_LEGS)
                    .map(|opp| Arc::clone(*opp))
                    .collect(),
            ));
        }

        if valid.len() >= BALANCED_MIN_LEGS {
            plans.push((
                Strategy::Balanced,
                valid
                    .iter()
                    .take(BALANCED_MAX_LEGS)
                    .map(|opp| Arc::clone(*opp))
                    .collect(),
            ));
        }

        let value: Vec<Arc<BettingOpportunity>> = valid
            .iter()
            .filter(|opp| opp.expected_value > VALUE_EXPECTED_VALUE)
            .take(VALUE_MAX_LEGS)
            .map(|opp| Arc::clone(*opp))
            .collect();
        if !value.is_empty() {
            plans.push((Strategy::Value, value));
        }

        plans.truncate(self.config.max_tickets);

        let tickets: Vec<SmartTicket> = plans
            .into_iter()
            .map(|(strategy, legs)| self.create_ticket(strategy, legs))
            .collect();

        tracing::info!(
            candidates = opportunities.len(),
            valid = valid.len(),
            tickets = tickets.len(),
            "Tickets generated"
        );

        Ok(tickets)
    }

    fn create_ticket(
        &self,
        strategy: Strategy,
        opportunities: Vec<Arc<BettingOpportunity>>,
    ) -> SmartTicket {
        let total_odds: f64 = opportunities.iter().map(|opp| opp.odds).product();
        let confidence_sum: f64 = opportunities.iter().map(|opp| opp.confidence.weight()).sum();
        let mean_confidence = confidence_sum / opportunities.len() as f64;

        let ticket = SmartTicket {
            ticket_id: self.ids.next_id(),
            strategy,
            total_odds: round2(total_odds),
            confidence_score: round2(mean_confidence),
            stake_recommendation: recommend_stake(strategy, mean_confidence),
            created_at: Utc::now(),
            opportunities,
        };

        tracing::debug!(
            ticket_id = %ticket.ticket_id,
            strategy = %strategy,
            legs = ticket.opportunities.len(),
            total_odds = ticket.total_odds,
            confidence = ticket.confidence_score,
            "Ticket created"
        );

        ticket
    }
}

impl Default for TicketGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Highest-confidence ticket (first one on ties), if confident enough to
/// headline the day.
pub fn ticket_of_the_day(tickets: &[SmartTicket]) -> Option<&SmartTicket> {
    let mut best: Option<&SmartTicket> = None;
    for ticket in tickets {
        if best.map_or(true, |b| ticket.confidence_score > b.confidence_score) {
            best = Some(ticket);
        }
    }
    best.filter(|t| t.confidence_score >= TICKET_OF_THE_DAY_MIN_CONFIDENCE)
}

fn validate_opportunity(opp: &BettingOpportunity) -> Result<()> {
    if !opp.odds.is_finite() || opp.odds <= 1.0 {
        return Err(TicketError::InvalidArgument(format!(
            "odds for {} ({}) must be a finite number above 1.0, got {}",
            opp.match_label(),
            opp.market_type,
            opp.odds
        )));
    }
    if !opp.expected_value.is_finite() {
        return Err(TicketError::InvalidArgument(format!(
            "expected value for {} ({}) must be finite, got {}",
            opp.match_label(),
            opp.market_type,
            opp.expected_value
        )));
    }
    Ok(())
}
