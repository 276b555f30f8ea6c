//! Season projection.
//!
//! Runs one matchup per scheduled opponent and aggregates the tally. Each
//! game's seed is derived from the master seed and a stable hash of the
//! opponent's name, so reordering the schedule permutes the table without
//! changing any single game's outcome; the win/loss tally is
//! order-independent by construction.

use serde::{Deserialize, Serialize};

use crate::models::{round_tenths, OpponentProfile};
use crate::simulation::matchup::{MatchupResult, MatchupSimulator};
use crate::simulation::narrative;

/// Fixed league size used for the ordinal rank estimate.
pub const LEAGUE_SIZE: u32 = 12;

/// One scheduled game's projection, in schedule order for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameProjection {
    pub opponent: String,
    pub opponent_kpi: f32,
    pub result: MatchupResult,
    /// Advisory stylistic note; reporting only.
    pub archetype_note: String,
}

/// Projected season outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonResult {
    pub team_kpi: f32,
    pub wins: u32,
    pub losses: u32,
    /// Ordinal estimate within a `LEAGUE_SIZE`-team league, 1 = first.
    pub conference_rank: u32,
    pub league_size: u32,
    /// Mean per-game prediction confidence.
    pub avg_confidence: u8,
    /// Likelihood of an automatic tournament bid, percent.
    pub auto_bid_likelihood: u8,
    /// Mean KPI differential across the schedule.
    pub avg_kpi_diff: f32,
    pub games: Vec<GameProjection>,
}

impl SeasonResult {
    pub fn win_pct(&self) -> f32 {
        let total = self.wins + self.losses;
        if total == 0 {
            0.0
        } else {
            self.wins as f32 / total as f32
        }
    }
}

pub struct SeasonProjector;

impl SeasonProjector {
    /// Project a season across a schedule of opponents.
    pub fn project(team_kpi: f32, opponents: &[OpponentProfile], seed: u64) -> SeasonResult {
        let games: Vec<GameProjection> = opponents
            .iter()
            .map(|opponent| {
                let game_seed = seed ^ fxhash::hash64(&opponent.name);
                let result = MatchupSimulator::simulate(team_kpi, opponent.kpi, game_seed);
                GameProjection {
                    opponent: opponent.name.clone(),
                    opponent_kpi: opponent.kpi,
                    result,
                    archetype_note: narrative::archetype_note(opponent.style).to_string(),
                }
            })
            .collect();

        let wins = games.iter().filter(|g| g.result.is_projected_win()).count() as u32;
        let losses = games.len() as u32 - wins;

        let (avg_confidence, avg_kpi_diff) = if games.is_empty() {
            (0, 0.0)
        } else {
            let n = games.len() as f32;
            let conf: f32 =
                games.iter().map(|g| g.result.prediction_confidence as f32).sum::<f32>() / n;
            let diff: f32 =
                games.iter().map(|g| team_kpi - g.opponent_kpi).sum::<f32>() / n;
            (conf.round() as u8, round_tenths(diff))
        };

        let win_pct = if games.is_empty() { 0.0 } else { wins as f32 / games.len() as f32 };

        SeasonResult {
            team_kpi: round_tenths(team_kpi),
            wins,
            losses,
            conference_rank: Self::conference_rank(win_pct),
            league_size: LEAGUE_SIZE,
            avg_confidence,
            auto_bid_likelihood: Self::auto_bid_likelihood(win_pct, avg_kpi_diff),
            avg_kpi_diff,
            games,
        }
    }

    /// Ordinal rank estimate from winning percentage: 100% projects first,
    /// 0% projects last.
    fn conference_rank(win_pct: f32) -> u32 {
        let rank = 1.0 + (1.0 - win_pct.clamp(0.0, 1.0)) * (LEAGUE_SIZE - 1) as f32;
        (rank.round() as u32).clamp(1, LEAGUE_SIZE)
    }

    /// Auto-bid likelihood from winning percentage and schedule-wide KPI
    /// edge, clamped below certainty.
    fn auto_bid_likelihood(win_pct: f32, avg_kpi_diff: f32) -> u8 {
        (win_pct * 60.0 + avg_kpi_diff * 4.0).clamp(0.0, 95.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{builtin_opponents, SystemStyle};

    #[test]
    fn test_projects_every_scheduled_game_in_order() {
        let opponents = builtin_opponents();
        let season = SeasonProjector::project(82.0, opponents, 99);
        assert_eq!(season.games.len(), opponents.len());
        assert_eq!(season.wins + season.losses, opponents.len() as u32);
        for (game, opponent) in season.games.iter().zip(opponents) {
            assert_eq!(game.opponent, opponent.name, "table preserves schedule order");
        }
    }

    #[test]
    fn test_tally_order_independent() {
        let mut opponents = builtin_opponents().to_vec();
        let forward = SeasonProjector::project(80.0, &opponents, 7);
        opponents.reverse();
        let backward = SeasonProjector::project(80.0, &opponents, 7);

        assert_eq!(forward.wins, backward.wins);
        assert_eq!(forward.losses, backward.losses);
        assert_eq!(forward.conference_rank, backward.conference_rank);
        // Each individual game is untouched by the reordering.
        for game in &forward.games {
            let twin = backward
                .games
                .iter()
                .find(|g| g.opponent == game.opponent)
                .expect("same schedule, same opponents");
            assert_eq!(game.result, twin.result);
        }
    }

    #[test]
    fn test_empty_schedule_base_case() {
        let season = SeasonProjector::project(80.0, &[], 1);
        assert_eq!(season.wins, 0);
        assert_eq!(season.losses, 0);
        assert_eq!(season.conference_rank, LEAGUE_SIZE, "no wins projects last");
        assert_eq!(season.avg_confidence, 0);
        assert_eq!(season.auto_bid_likelihood, 0);
    }

    #[test]
    fn test_dominant_team_sweeps() {
        let opponents = builtin_opponents();
        let season = SeasonProjector::project(95.0, opponents, 3);
        assert_eq!(season.wins, opponents.len() as u32, "a 14+ KPI edge wins out");
        assert_eq!(season.conference_rank, 1);
        assert!(season.auto_bid_likelihood >= 60);
    }

    #[test]
    fn test_deterministic_under_same_seed() {
        let opponents = builtin_opponents();
        let a = SeasonProjector::project(81.0, opponents, 555);
        let b = SeasonProjector::project(81.0, opponents, 555);
        assert_eq!(a, b);
    }

    #[test]
    fn test_archetype_notes_attached() {
        let opponents = vec![OpponentProfile::new(
            "Zone Heavy U",
            "D2",
            SystemStyle::ZonePressure,
            76.0,
            None,
            "Test",
        )];
        let season = SeasonProjector::project(80.0, &opponents, 11);
        assert!(!season.games[0].archetype_note.is_empty());
    }
}
