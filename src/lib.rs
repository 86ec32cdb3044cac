//! Smart Tickets
//!
//! Turns per-match team statistics into ranked betting opportunities and
//! bundles them into strategy tickets with a stake recommendation.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod notify;
pub mod source;
pub mod testing;
pub mod tickets;
pub mod types;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod error_tests;

pub use analysis::MatchAnalyzer;
pub use engine::{BettingEngine, EngineReport};
pub use error::{Result, TicketError};
pub use tickets::TicketGenerator;
pub use types::{BettingOpportunity, ConfidenceLevel, MatchData, SmartTicket, TeamStats};
