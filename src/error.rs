//! Error types for the ticket engine

use crate::types::MarketType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Analysis error for match {match_id} ({market}): {reason}")]
    Analysis {
        match_id: i64,
        market: MarketType,
        reason: String,
    },

    #[error("Insufficient sample for match {match_id}: {team} played {matches_played}, need {required}")]
    InsufficientSample {
        match_id: i64,
        team: String,
        matches_played: u32,
        required: u32,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Statistics source error: {0}")]
    Source(String),

    #[error("Notification error: {0}")]
    Notify(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

impl TicketError {
    /// Whether this error only concerns a single match and can be skipped
    pub fn is_per_match(&self) -> bool {
        matches!(
            self,
            TicketError::Analysis { .. } | TicketError::InsufficientSample { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
