//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::TicketError;
    use crate::types::MarketType;

    #[test]
    fn test_analysis_error() {
        let err = TicketError::Analysis {
            match_id: 42,
            market: MarketType::OverUnder,
            reason: "avg_goals_scored is NaN".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Analysis error"));
        assert!(msg.contains("42"));
        assert!(msg.contains("Over/Under"));
        assert!(msg.contains("avg_goals_scored is NaN"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = TicketError::InvalidArgument("odds must be finite".to_string());
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("odds must be finite"));
    }

    #[test]
    fn test_config_error() {
        let err = TicketError::Config("bad daily_at".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_source_error() {
        let err = TicketError::Source("file missing".to_string());
        assert!(err.to_string().contains("Statistics source error"));
    }

    #[test]
    fn test_notify_error() {
        let err = TicketError::Notify("chat not found".to_string());
        assert!(err.to_string().contains("Notification error"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: TicketError = json_err.into();
        assert!(err.to_string().contains("JSON parsing error"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TicketError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_per_match_classification() {
        let analysis = TicketError::Analysis {
            match_id: 1,
            market: MarketType::CornerKicks,
            reason: "negative corners".to_string(),
        };
        assert!(analysis.is_per_match());
        let sample = TicketError::InsufficientSample {
            match_id: 1,
            team: "Flamengo".to_string(),
            matches_played: 0,
            required: 1,
        };
        assert!(sample.is_per_match());
        assert!(sample.to_string().contains("Flamengo played 0, need 1"));
        assert!(!TicketError::InvalidArgument("x".to_string()).is_per_match());
        assert!(!TicketError::Source("x".to_string()).is_per_match());
    }

    #[test]
    fn test_error_debug() {
        let err = TicketError::Notify("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Notify"));
    }
}
