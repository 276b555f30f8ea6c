pub mod json_api;

pub use json_api::{
    aggregate_roster_json, evaluate_player_json, project_season_json, simulate_matchup_json,
    AggregateRequest, AggregateResponse, EvaluateRequest, EvaluateResponse, MatchupRequest,
    MatchupResponse, SeasonRequest, SeasonResponse,
};
