//! # riq_core - Confidence-Gated Evaluation and Projection Engine
//!
//! This library turns raw scouted player attributes into trust-weighted
//! evaluations, folds evaluations into team-level readiness metrics, and
//! projects game and season outcomes from those aggregates.
//!
//! ## Features
//! - Fully deterministic pipeline (same inputs + seed = same result)
//! - Confidence gate re-checked at every sync point
//! - Sandbox (what-if) lineups with synchronous metric recomputation
//! - JSON API for easy host integration

pub mod api;
pub mod depth_chart;
pub mod error;
pub mod evaluation;
pub mod gate;
pub mod models;
pub mod notify;
pub mod roster;
pub mod scout;
pub mod simulation;
pub mod state;
pub mod store;

// Re-export main API functions
pub use api::{
    aggregate_roster_json, evaluate_player_json, project_season_json, simulate_matchup_json,
};
pub use error::{CoreError, Result};

// Re-export the pipeline types
pub use depth_chart::DepthChartSandbox;
pub use evaluation::EvaluationEngine;
pub use gate::{ConfidenceGate, ConfidenceTier, SYNC_CONFIDENCE_FLOOR};
pub use models::{
    Band, CoachingBiasProfile, EvaluatedPlayer, FinancialSummary, OpponentProfile,
    PlayerAttributes, RosterEntry, TeamMetrics,
};
pub use notify::{AssistantEvent, AssistantTrigger, MemorySink, NotificationSink, NullSink};
pub use roster::{RosterAggregator, RosterState};
pub use scout::{ScoutQuery, ScoutSource, SyntheticScout};
pub use simulation::{MatchupResult, MatchupSimulator, SeasonProjector, SeasonResult};
pub use state::{LatestWins, ProgramState, SyncDestination};
pub use store::{MemoryStore, ProfileStore, StoreKey};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{ClassYear, ClusterScores, Eligibility, NilReadinessBand, Position};
    use serde_json::json;
    use sha2::{Digest, Sha256};
    use std::sync::Arc;

    fn scouted(name: &str, confidence: f32) -> PlayerAttributes {
        PlayerAttributes {
            name: name.to_string(),
            school: "South Plains CC".to_string(),
            position: Position::SG,
            class_year: ClassYear::Junior,
            confidence,
            clusters: ClusterScores {
                creation: 72.0,
                shooting: 86.0,
                decision: 78.0,
                defensive: 64.0,
                core_motor: 70.0,
            },
            nil_readiness: NilReadinessBand::Solid,
            eligibility: Eligibility::Active,
            red_flags: vec![],
        }
    }

    #[test]
    fn test_scholarship_formula_literal() {
        // The canonical check: cap 12, pool 50000, roster 12, KPI 82
        // => round((82/100) * 12 * (10000/12)) = 8200.
        assert_eq!(evaluation::financial::scholarship_suggestion(82.0, 12.0, 12), 8_200);
    }

    #[test]
    fn test_end_to_end_pipeline() {
        let sink = Arc::new(MemorySink::new());
        let mut state = ProgramState::new(sink.clone());
        state.apply_bias(CoachingBiasProfile::default()).unwrap();

        // Scout, evaluate, sync a small rotation.
        let mut scout = SyntheticScout::with_seed(2024);
        for i in 0..4 {
            let report = scout
                .scope(&ScoutQuery::for_name(format!("Recruit {}", i)))
                .unwrap();
            let evaluation = EvaluationEngine::evaluate(
                &report.attributes,
                state.bias(),
                report.attributes.confidence,
            )
            .unwrap();
            state
                .sync_evaluation(evaluation, SyncDestination::TeamIq)
                .unwrap();
        }

        let metrics = *state.metrics();
        assert!(metrics.team_kpi > 0.0);
        assert!(metrics.confidence_avg >= 80, "synthetic pulls are all trusted");

        // Project a game and a season off the aggregate.
        let opponent = &models::builtin_opponents()[0];
        let game = state.run_matchup(opponent, 7);
        assert!((5.0..=95.0).contains(&game.win_probability));

        let season = state.run_season(models::builtin_opponents(), 7);
        assert_eq!(
            (season.wins + season.losses) as usize,
            models::builtin_opponents().len()
        );

        // The sink saw every stage.
        let triggers = sink.triggers();
        assert!(triggers.contains(&AssistantTrigger::BiasApply));
        assert!(triggers.contains(&AssistantTrigger::RosterAdd));
        assert!(triggers.contains(&AssistantTrigger::PredixtRun));
        assert!(triggers.contains(&AssistantTrigger::ScenarioProjection));
    }

    #[test]
    fn test_pipeline_determinism_digest() {
        // Two identical runs, hashed end to end, must collide exactly.
        let run = || -> String {
            let mut out = String::new();
            let evaluation =
                EvaluationEngine::evaluate(&scouted("Jordan Reeves", 85.0), None, 85.0).unwrap();
            out.push_str(&serde_json::to_string(&evaluation).unwrap());

            let metrics = RosterAggregator::aggregate(&[evaluation], None);
            out.push_str(&serde_json::to_string(&metrics).unwrap());

            let season =
                SeasonProjector::project(metrics.system_weighted_kpi(), models::builtin_opponents(), 42);
            out.push_str(&serde_json::to_string(&season).unwrap());
            out
        };

        let digest_a = Sha256::digest(run().as_bytes());
        let digest_b = Sha256::digest(run().as_bytes());
        assert_eq!(digest_a, digest_b, "pipeline must be reproducible end to end");
    }

    #[test]
    fn test_json_api_smoke() {
        let request = json!({
            "schema_version": SCHEMA_VERSION,
            "player": serde_json::to_value(scouted("Jordan Reeves", 85.0)).unwrap(),
            "confidence": 85.0
        });
        let response = evaluate_player_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert!(parsed["evaluation"]["scholarship_suggestion"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_insufficient_evaluation_flagged_then_refused() {
        let evaluation =
            EvaluationEngine::evaluate(&scouted("Thin File", 52.0), None, 52.0).unwrap();
        assert_eq!(evaluation.confidence_tier, ConfidenceTier::Insufficient);
        assert!(evaluation.final_kpi.is_some(), "partial information is still useful");

        let mut state = ProgramState::with_null_sink();
        let err = state
            .sync_evaluation(evaluation, SyncDestination::TeamIq)
            .unwrap_err();
        assert!(matches!(err, CoreError::GateRejected { .. }));
    }
}
