//! Tests for the betting engine

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::{Config, GeneratorConfig};
    use crate::error::TicketError;
    use crate::source::{DemoSource, MockStatisticsSource};
    use crate::testing::TestDataGenerator;
    use crate::types::{ConfidenceLevel, MarketType, Strategy};

    fn seeded_engine() -> BettingEngine {
        let config = Config {
            generator: GeneratorConfig {
                id_seed: Some(99),
                ..Default::default()
            },
            ..Default::default()
        };
        BettingEngine::from_config(&config)
    }

    fn strong_match(gen: &mut TestDataGenerator) -> MatchData {
        let home = gen.team_stats("Attackers", 1.8, 1.2, 6.0, 5.5, 60.0);
        let away = gen.team_stats("Leaky", 1.6, 1.0, 5.0, 5.0, 55.0);
        gen.match_between(home, away)
    }

    #[test]
    fn test_reference_match_end_to_end() {
        let mut gen = TestDataGenerator::new();
        let engine = seeded_engine();
        let opps = engine.analyze(strong_match(&mut gen)).unwrap();

        let over_under = opps
            .iter()
            .find(|o| o.market_type == MarketType::OverUnder)
            .unwrap();
        assert_eq!(over_under.prediction, "Over 2.5");
        assert_eq!(over_under.odds, 2.91);
        assert_eq!(over_under.confidence, ConfidenceLevel::VeryHigh);
        assert!((over_under.expected_value - 1.7645).abs() < 1e-6);
    }

    #[test]
    fn test_batch_isolates_bad_match() {
        let mut gen = TestDataGenerator::new();
        let good_a = strong_match(&mut gen);
        let mut bad = gen.fixture();
        bad.home_stats.avg_corners = f64::NAN;
        let good_b = gen.fixture();

        let batch = seeded_engine().analyze_batch(vec![good_a, bad.clone(), good_b]);

        assert_eq!(batch.opportunities.len(), 6);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].match_id, bad.match_id);
        assert_eq!(batch.failures[0].match_label, bad.label());
        assert!(batch.failures[0].reason.contains("avg_corners"));
    }

    #[test]
    fn test_run_with_no_matches() {
        let report = seeded_engine().run(Vec::new()).unwrap();
        assert_eq!(report.matches_analyzed, 0);
        assert!(report.opportunities.is_empty());
        assert!(report.tickets.is_empty());
        assert!(report.ticket_of_the_day().is_none());
    }

    #[test]
    fn test_run_builds_tickets() {
        let mut gen = TestDataGenerator::new();
        let matches: Vec<_> = (0..3).map(|_| strong_match(&mut gen)).collect();
        let report = seeded_engine().run(matches).unwrap();

        assert_eq!(report.matches_analyzed, 3);
        assert_eq!(report.opportunities.len(), 9);
        assert!(report.failures.is_empty());
        assert_eq!(report.tickets[0].strategy, Strategy::Conservative);
        assert!(report.tickets.len() <= 3);

        for ticket in &report.tickets {
            assert!(ticket
                .opportunities
                .iter()
                .all(|o| o.confidence != ConfidenceLevel::Low));
        }
        let best = report.ticket_of_the_day().unwrap();
        assert!(best.confidence_score >= 0.7);
    }

    #[test]
    fn test_run_is_repeatable_with_seed() {
        let mut gen = TestDataGenerator::new();
        let matches: Vec<_> = (0..3).map(|_| strong_match(&mut gen)).collect();
        let first = seeded_engine().run(matches.clone()).unwrap();
        let second = seeded_engine().run(matches).unwrap();

        let ids = |r: &EngineReport| r.tickets.iter().map(|t| t.ticket_id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_run_from_mock_source() {
        let mut gen = TestDataGenerator::new();
        let matches = vec![strong_match(&mut gen), strong_match(&mut gen)];

        let mut source = MockStatisticsSource::new();
        source.expect_name().return_const("mock".to_string());
        source
            .expect_matches()
            .times(1)
            .returning(move || Ok(matches.clone()));

        let report = seeded_engine().run_from(&source).await.unwrap();
        assert_eq!(report.matches_analyzed, 2);
        assert_eq!(report.opportunities.len(), 6);
    }

    #[tokio::test]
    async fn test_run_from_propagates_source_error() {
        let mut source = MockStatisticsSource::new();
        source.expect_name().return_const("broken".to_string());
        source
            .expect_matches()
            .returning(|| Err(TicketError::Source("feed offline".to_string())));

        let err = seeded_engine().run_from(&source).await.unwrap_err();
        assert!(matches!(err, TicketError::Source(_)));
    }

    #[tokio::test]
    async fn test_run_from_demo_source() {
        let report = seeded_engine().run_from(&DemoSource::new(2024)).await.unwrap();
        assert_eq!(report.matches_analyzed, 3);
        assert_eq!(report.opportunities.len(), 9);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_run_from_bundled_fixtures() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/matches.json");
        let source = crate::source::JsonFileSource::new(path);

        let report = seeded_engine().run_from(&source).await.unwrap();
        assert_eq!(report.matches_analyzed, 3);
        assert!(report.failures.is_empty());

        let first = &report.opportunities[0];
        assert_eq!(first.match_label(), "Flamengo vs Palmeiras");
        assert_eq!(first.prediction, "Over 2.5");
        assert_eq!(first.odds, 2.91);
        assert_eq!(first.confidence, ConfidenceLevel::VeryHigh);
    }
}
