//! Betting engine
//!
//! Ties match analysis and ticket generation together. Callers construct
//! and own an engine; there is no process-wide instance.

#[cfg(test)]
mod tests;

use crate::analysis::MatchAnalyzer;
use crate::config::Config;
use crate::error::Result;
use crate::source::StatisticsSource;
use crate::tickets::{ticket_of_the_day, TicketGenerator};
use crate::types::{BettingOpportunity, MatchData, SmartTicket};
use serde::Serialize;
use std::sync::Arc;

/// A match dropped from a batch
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisFailure {
    pub match_id: i64,
    pub match_label: String,
    pub reason: String,
}

/// Result of analyzing many matches
#[derive(Debug, Default)]
pub struct BatchAnalysis {
    pub opportunities: Vec<Arc<BettingOpportunity>>,
    pub failures: Vec<AnalysisFailure>,
}

/// Everything a full run produced
#[derive(Debug, Serialize)]
pub struct EngineReport {
    pub matches_analyzed: usize,
    pub opportunities: Vec<Arc<BettingOpportunity>>,
    pub failures: Vec<AnalysisFailure>,
    pub tickets: Vec<SmartTicket>,
}

impl EngineReport {
    pub fn ticket_of_the_day(&self) -> Option<&SmartTicket> {
        ticket_of_the_day(&self.tickets)
    }
}

#[derive(Debug, Default)]
pub struct BettingEngine {
    analyzer: MatchAnalyzer,
    generator: TicketGenerator,
}

impl BettingEngine {
    pub fn new(analyzer: MatchAnalyzer, generator: TicketGenerator) -> Self {
        Self { analyzer, generator }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            MatchAnalyzer::new(config.analysis.clone()),
            TicketGenerator::new(config.generator.clone()),
        )
    }

    pub fn analyzer(&self) -> &MatchAnalyzer {
        &self.analyzer
    }

    pub fn generator(&self) -> &TicketGenerator {
        &self.generator
    }

    /// One opportunity per market for a single match
    pub fn analyze(&self, match_data: impl Into<Arc<MatchData>>) -> Result<Vec<BettingOpportunity>> {
        self.analyzer.analyze(match_data)
    }

    /// Analyze every match. A match that fails is logged, recorded and
    /// skipped; the rest of the batch carries on.
    pub fn analyze_batch<I>(&self, matches: I) -> BatchAnalysis
    where
        I: IntoIterator<Item = MatchData>,
    {
        let mut batch = BatchAnalysis::default();

        for match_data in matches {
            let match_id = match_data.match_id;
            let match_label = match_data.label();
            match self.analyzer.analyze(match_data) {
                Ok(opps) => batch.opportunities.extend(opps.into_iter().map(Arc::new)),
                Err(e) => {
                    tracing::warn!("Skipping {} ({}): {}", match_label, match_id, e);
                    batch.failures.push(AnalysisFailure {
                        match_id,
                        match_label,
                        reason: e.to_string(),
                    });
                }
            }
        }

        batch
    }

    pub fn generate_tickets(
        &self,
        opportunities: &[Arc<BettingOpportunity>],
    ) -> Result<Vec<SmartTicket>> {
        self.generator.generate_tickets(opportunities)
    }

    /// Analyze a batch and bundle the surviving opportunities
    pub fn run(&self, matches: Vec<MatchData>) -> Result<EngineReport> {
        let matches_analyzed = matches.len();
        tracing::info!("Analyzing {} matches", matches_analyzed);

        let batch = self.analyze_batch(matches);
        let tickets = self.generator.generate_tickets(&batch.opportunities)?;

        tracing::info!(
            "Analysis complete: {} opportunities, {} failures, {} tickets",
            batch.opportunities.len(),
            batch.failures.len(),
            tickets.len()
        );

        Ok(EngineReport {
            matches_analyzed,
            opportunities: batch.opportunities,
            failures: batch.failures,
            tickets,
        })
    }

    /// Pull matches from a source, then [`run`](Self::run)
    pub async fn run_from(&self, source: &dyn StatisticsSource) -> Result<EngineReport> {
        tracing::info!("Fetching matches from {}", source.name());
        let matches = source.matches().await?;
        self.run(matches)
    }
}
