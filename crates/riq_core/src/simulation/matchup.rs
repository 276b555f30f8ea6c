//! Single-game matchup projection.
//!
//! Win probability responds linearly to the KPI differential and is clamped
//! to a plausible band, never certainty in either direction. The score
//! line is derived from the win probability, not drawn independently, so
//! margin always correlates with it. All jitter comes from a seeded RNG;
//! the same seed reproduces the same projection.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Points of win probability per point of KPI differential.
const KPI_SLOPE: f32 = 3.0;

/// Win probability is clamped into this band.
const WIN_PROB_MIN: f32 = 5.0;
const WIN_PROB_MAX: f32 = 95.0;

/// Prediction confidence bounds.
const CONFIDENCE_MIN: f32 = 60.0;
const CONFIDENCE_MAX: f32 = 90.0;

/// Projection for a single game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchupResult {
    /// Chance of winning, 5-95.
    pub win_probability: f32,
    pub our_score: u32,
    pub their_score: u32,
    /// Positive means a projected win.
    pub margin: i32,
    pub total_points: u32,
    /// Probability the result lands within a one-possession margin of the
    /// projection, 60-90. Grows with distance from a coin flip.
    pub prediction_confidence: u8,
}

impl MatchupResult {
    pub fn is_projected_win(&self) -> bool {
        self.margin > 0
    }
}

pub struct MatchupSimulator;

impl MatchupSimulator {
    /// Project a single game from two team KPIs.
    pub fn simulate(team_kpi: f32, opponent_kpi: f32, seed: u64) -> MatchupResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::simulate_with_rng(team_kpi, opponent_kpi, &mut rng)
    }

    pub(crate) fn simulate_with_rng(
        team_kpi: f32,
        opponent_kpi: f32,
        rng: &mut impl Rng,
    ) -> MatchupResult {
        let diff = team_kpi - opponent_kpi;
        let win_probability = (50.0 + diff * KPI_SLOPE).clamp(WIN_PROB_MIN, WIN_PROB_MAX);

        // Baseline scoring with jitter; the opposing score is offset from
        // ours by the win-probability edge.
        let our_score = (75.0 + rng.gen_range(0.0f32..15.0)).round() as u32;
        let offset = ((win_probability - 50.0) / 5.0).round() as i32;
        let their_score = (our_score as i32 - offset).max(0) as u32;
        let margin = our_score as i32 - their_score as i32;

        let noise = rng.gen_range(-2.5f32..2.5);
        let prediction_confidence = (CONFIDENCE_MIN + (win_probability - 50.0).abs() * 0.75
            + noise)
            .clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
            .round() as u8;

        MatchupResult {
            win_probability,
            our_score,
            their_score,
            margin,
            total_points: our_score + their_score,
            prediction_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_matchup_is_a_coin_flip() {
        let result = MatchupSimulator::simulate(78.0, 78.0, 42);
        assert_eq!(result.win_probability, 50.0);
        assert_eq!(result.margin, 0, "even KPIs project an even score");
    }

    #[test]
    fn test_favored_team_clamped_high() {
        let result = MatchupSimulator::simulate(85.0, 70.0, 42);
        // 50 + 15 * 3 = 95, at the clamp.
        assert_eq!(result.win_probability, 95.0);
        assert!(result.margin > 0);
        assert!(result.is_projected_win());
    }

    #[test]
    fn test_overmatched_team_clamped_low() {
        let result = MatchupSimulator::simulate(60.0, 95.0, 7);
        assert_eq!(result.win_probability, 5.0);
        assert!(result.margin < 0);
    }

    #[test]
    fn test_margin_tracks_probability_sign() {
        for seed in 0..50u64 {
            let up = MatchupSimulator::simulate(82.0, 76.0, seed);
            assert!(up.margin > 0, "positive differential must project a win (seed {})", seed);
            let down = MatchupSimulator::simulate(70.0, 79.0, seed);
            assert!(down.margin < 0, "negative differential must project a loss (seed {})", seed);
        }
    }

    #[test]
    fn test_prediction_confidence_bounds_and_correlation() {
        for seed in 0..50u64 {
            let blowout = MatchupSimulator::simulate(90.0, 70.0, seed);
            let tossup = MatchupSimulator::simulate(78.0, 78.0, seed);
            assert!((60..=90).contains(&(blowout.prediction_confidence as i32)));
            assert!((60..=90).contains(&(tossup.prediction_confidence as i32)));
            assert!(
                blowout.prediction_confidence >= tossup.prediction_confidence,
                "confidence grows with distance from a coin flip (seed {})",
                seed
            );
        }
    }

    #[test]
    fn test_same_seed_reproduces() {
        let a = MatchupSimulator::simulate(81.5, 77.2, 1234);
        let b = MatchupSimulator::simulate(81.5, 77.2, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scores_in_plausible_range() {
        for seed in 0..100u64 {
            let result = MatchupSimulator::simulate(80.0, 75.0, seed);
            assert!((75..=90).contains(&result.our_score), "got {}", result.our_score);
            assert_eq!(result.total_points, result.our_score + result.their_score);
        }
    }
}
