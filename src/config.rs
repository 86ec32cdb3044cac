//! Configuration management

use crate::error::{Result, TicketError};
use crate::types::ConfidenceLevel;
use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub analysis: AnalysisConfig,
    pub source: SourceConfig,
    pub schedule: ScheduleConfig,
    pub telegram: Option<TelegramConfig>,
    pub bankroll: Option<BankrollConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Upper bound on tickets returned per run
    pub max_tickets: usize,
    /// Weakest confidence band allowed into a ticket
    pub min_confidence: ConfidenceLevel,
    /// Seed for ticket ids; random ids when unset
    pub id_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Teams with fewer matches than this have no usable averages
    pub min_matches_played: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON file holding an array of matches
    pub matches_path: Option<String>,
    /// Seed for the demo fixtures used when no file is configured
    pub demo_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Local time of the daily run, HH:MM
    pub daily_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BankrollConfig {
    /// Bankroll used to turn stake fractions into amounts
    pub amount: Decimal,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| TicketError::Config(format!("Non UTF-8 path: {}", path.display())))?;

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path_str))
            .add_source(config::Environment::with_prefix("TICKETS").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations
    pub fn load_default() -> Result<Self> {
        let paths = ["config.toml", "config.yaml", "~/.config/smart-tickets/config.toml"];

        for path in paths {
            let expanded = shellexpand::tilde(path).into_owned();
            if Path::new(&expanded).exists() {
                return Self::load(&expanded);
            }
        }

        Err(TicketError::Config("No configuration file found".to_string()))
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.as_ref().display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.generator.max_tickets == 0 {
            return Err(TicketError::Config("generator.max_tickets must be at least 1".to_string()));
        }
        self.schedule.daily_time()?;
        if let Some(bankroll) = &self.bankroll {
            if bankroll.amount <= Decimal::ZERO {
                return Err(TicketError::Config("bankroll.amount must be positive".to_string()));
            }
        }
        Ok(())
    }
}

impl ScheduleConfig {
    pub fn daily_time(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(self.daily_at.trim(), "%H:%M").map_err(|e| {
            TicketError::Config(format!("schedule.daily_at '{}' is not HH:MM: {}", self.daily_at, e))
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_tickets: 5,
            min_confidence: ConfidenceLevel::Medium,
            id_seed: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_matches_played: 1,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            daily_at: "09:00".to_string(),
        }
    }
}
