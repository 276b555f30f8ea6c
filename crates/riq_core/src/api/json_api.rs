//! JSON API
//!
//! String-in/string-out entry points over the pipeline for host
//! integrations. Requests carry an explicit `schema_version` and, where a
//! stochastic element exists, an explicit `seed`; responses echo the schema
//! version. Same request, same response.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::evaluation::EvaluationEngine;
use crate::models::{
    CoachingBiasProfile, EvaluatedPlayer, OpponentProfile, PlayerAttributes, TeamMetrics,
};
use crate::roster::RosterAggregator;
use crate::simulation::{MatchupResult, MatchupSimulator, SeasonProjector, SeasonResult};
use crate::SCHEMA_VERSION;

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(CoreError::SchemaVersionMismatch { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub schema_version: u8,
    pub player: PlayerAttributes,
    #[serde(default)]
    pub bias: Option<CoachingBiasProfile>,
    pub confidence: f32,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub schema_version: u8,
    pub evaluation: EvaluatedPlayer,
}

/// Evaluate one player from a JSON request.
pub fn evaluate_player_json(request_json: &str) -> Result<String> {
    let request: EvaluateRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    let evaluation =
        EvaluationEngine::evaluate(&request.player, request.bias.as_ref(), request.confidence)?;
    let response = EvaluateResponse { schema_version: SCHEMA_VERSION, evaluation };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct AggregateRequest {
    pub schema_version: u8,
    pub players: Vec<EvaluatedPlayer>,
    #[serde(default)]
    pub bias: Option<CoachingBiasProfile>,
}

#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub schema_version: u8,
    pub metrics: TeamMetrics,
}

/// Aggregate a roster (or flattened sandbox lineup) from a JSON request.
pub fn aggregate_roster_json(request_json: &str) -> Result<String> {
    let request: AggregateRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    let metrics = RosterAggregator::aggregate(&request.players, request.bias.as_ref());
    let response = AggregateResponse { schema_version: SCHEMA_VERSION, metrics };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct MatchupRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub team_kpi: f32,
    pub opponent_kpi: f32,
}

#[derive(Debug, Serialize)]
pub struct MatchupResponse {
    pub schema_version: u8,
    pub result: MatchupResult,
}

/// Project a single game from a JSON request.
pub fn simulate_matchup_json(request_json: &str) -> Result<String> {
    let request: MatchupRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    let result = MatchupSimulator::simulate(request.team_kpi, request.opponent_kpi, request.seed);
    let response = MatchupResponse { schema_version: SCHEMA_VERSION, result };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct SeasonRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub team_kpi: f32,
    pub opponents: Vec<OpponentProfile>,
}

#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub schema_version: u8,
    pub result: SeasonResult,
}

/// Project a season from a JSON request.
pub fn project_season_json(request_json: &str) -> Result<String> {
    let request: SeasonRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    let result = SeasonProjector::project(request.team_kpi, &request.opponents, request.seed);
    let response = SeasonResponse { schema_version: SCHEMA_VERSION, result };
    Ok(serde_json::to_string(&response)?)
}
