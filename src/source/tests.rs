//! Tests for statistics sources

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::SourceConfig;
    use crate::testing::TestDataGenerator;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("smart_tickets_{}_{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_json_source_reads_matches() {
        let mut gen = TestDataGenerator::new();
        let fixtures = vec![gen.fixture(), gen.fixture()];
        let path = temp_file("matches.json");
        std::fs::write(&path, serde_json::to_string(&fixtures).unwrap()).unwrap();

        let source = JsonFileSource::new(&path);
        let loaded = source.matches().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, fixtures);
        assert!(source.name().starts_with("json:"));
    }

    #[tokio::test]
    async fn test_json_source_head_to_head_is_optional() {
        let raw = r#"[{
            "match_id": 9,
            "home_team": "Flamengo",
            "away_team": "Palmeiras",
            "league": "Brasileirão Série A",
            "date": "2024-05-01T19:00:00Z",
            "home_stats": {"team_id": 1, "team_name": "Flamengo", "matches_played": 20,
                "avg_goals_scored": 1.8, "avg_goals_conceded": 1.2, "avg_shots": 14.0,
                "avg_shots_on_target": 6.0, "avg_corners": 5.0, "possession_avg": 55.0,
                "btgs_percentage": 60.0},
            "away_stats": {"team_id": 2, "team_name": "Palmeiras", "matches_played": 20,
                "avg_goals_scored": 1.6, "avg_goals_conceded": 1.0, "avg_shots": 12.0,
                "avg_shots_on_target": 5.0, "avg_corners": 4.0, "possession_avg": 50.0,
                "btgs_percentage": 55.0}
        }]"#;
        let path = temp_file("no_h2h.json");
        std::fs::write(&path, raw).unwrap();

        let loaded = JsonFileSource::new(&path).matches().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].historical_meetings.is_empty());
        assert_eq!(loaded[0].home_stats.avg_goals_scored, 1.8);
    }

    #[tokio::test]
    async fn test_json_source_missing_file() {
        let source = JsonFileSource::new(temp_file("does_not_exist.json"));
        let err = source.matches().await.unwrap_err();
        assert!(matches!(err, TicketError::Source(_)));
    }

    #[tokio::test]
    async fn test_json_source_bad_json() {
        let path = temp_file("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonFileSource::new(&path).matches().await.unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, TicketError::Json(_)));
    }

    #[test]
    fn test_demo_source_is_reproducible() {
        let kickoff = Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap();
        let a = DemoSource::with_kickoff(11, kickoff).generate();
        let b = DemoSource::with_kickoff(11, kickoff).generate();
        let c = DemoSource::with_kickoff(12, kickoff).generate();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_demo_source_ranges() {
        let matches = DemoSource::new(3).generate();
        assert_eq!(matches.len(), 3);

        for m in &matches {
            for stats in [&m.home_stats, &m.away_stats] {
                assert!((15..=30).contains(&stats.matches_played));
                assert!((1.0..=2.2).contains(&stats.avg_goals_scored));
                assert!((0.8..=1.5).contains(&stats.avg_goals_conceded));
                assert!((4.5..=7.5).contains(&stats.avg_corners));
                assert!((45.0..=65.0).contains(&stats.btgs_percentage));
            }
        }
        assert_eq!(matches[2].league, "La Liga");
    }

    #[test]
    fn test_demo_source_via_block_on() {
        let source = DemoSource::new(5);
        let matches = tokio_test::block_on(source.matches()).unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(source.name(), "demo:5");
    }

    #[test]
    fn test_from_config_prefers_file() {
        let config = SourceConfig {
            matches_path: Some("/tmp/matches.json".to_string()),
            demo_seed: Some(1),
        };
        assert_eq!(from_config(&config).name(), "json:/tmp/matches.json");

        let config = SourceConfig {
            matches_path: None,
            demo_seed: Some(8),
        };
        assert_eq!(from_config(&config).name(), "demo:8");
    }
}
