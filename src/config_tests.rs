//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use crate::error::TicketError;
    use crate::types::ConfidenceLevel;
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator.max_tickets, 5);
        assert_eq!(config.generator.min_confidence, ConfidenceLevel::Medium);
        assert!(config.generator.id_seed.is_none());
        assert_eq!(config.analysis.min_matches_played, 1);
        assert_eq!(config.schedule.daily_at, "09:00");
        assert!(config.telegram.is_none());
        assert!(config.bankroll.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml() {
        let raw = r#"
            [generator]
            max_tickets = 2
            min_confidence = "very_high"
            id_seed = 17

            [analysis]
            min_matches_played = 5

            [source]
            matches_path = "data/matches.json"

            [schedule]
            daily_at = "07:30"

            [telegram]
            bot_token = "123:abc"
            chat_id = "42"

            [bankroll]
            amount = "1500.00"
        "#;
        let config: Config = toml::from_str(raw).unwrap();

        assert_eq!(config.generator.max_tickets, 2);
        assert_eq!(config.generator.min_confidence, ConfidenceLevel::VeryHigh);
        assert_eq!(config.generator.id_seed, Some(17));
        assert_eq!(config.analysis.min_matches_played, 5);
        assert_eq!(config.source.matches_path.as_deref(), Some("data/matches.json"));
        assert_eq!(
            config.schedule.daily_time().unwrap(),
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );
        assert_eq!(config.telegram.unwrap().chat_id, "42");
        assert_eq!(config.bankroll.unwrap().amount, dec!(1500.00));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let raw = r#"
            [generator]
            max_tickets = 3
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.generator.max_tickets, 3);
        assert_eq!(config.generator.min_confidence, ConfidenceLevel::Medium);
        assert_eq!(config.schedule.daily_at, "09:00");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.generator.max_tickets = 0;
        assert!(matches!(config.validate(), Err(TicketError::Config(_))));

        let mut config = Config::default();
        config.schedule.daily_at = "9 o'clock".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.bankroll = Some(BankrollConfig { amount: dec!(0) });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("smart_tickets_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[generator]\nmax_tickets = 4\n").unwrap();

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.generator.max_tickets, 4);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let config = Config::load_or_default("/nonexistent/smart-tickets.toml").unwrap();
        assert_eq!(config.generator.max_tickets, 5);
    }
}
