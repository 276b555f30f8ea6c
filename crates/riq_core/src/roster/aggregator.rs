//! Roster aggregation
//!
//! Folds evaluated players into team-level readiness metrics. Each call is
//! an independent pure computation; the same function serves the official
//! roster and a flattened sandbox lineup in the same frame.

use crate::models::round_tenths;
use crate::models::{Band, CoachingBiasProfile, EvaluatedPlayer, TeamMetrics};

pub struct RosterAggregator;

impl RosterAggregator {
    /// Aggregate a set of players into team metrics. An empty input is the
    /// defined base case: all-zero metrics, band F.
    pub fn aggregate(
        players: &[EvaluatedPlayer],
        bias: Option<&CoachingBiasProfile>,
    ) -> TeamMetrics {
        if players.is_empty() {
            return TeamMetrics::default();
        }

        let default_bias;
        let bias = match bias {
            Some(b) => b,
            None => {
                default_bias = CoachingBiasProfile::default();
                &default_bias
            }
        };

        let n = players.len() as f32;
        let kpi_sum: f32 = players.iter().map(|p| p.effective_kpi()).sum();
        let fit_sum: f32 = players.iter().map(|p| p.fit as f32).sum();
        let confidence_sum: f32 = players.iter().map(|p| p.confidence).sum();

        let team_kpi = round_tenths(kpi_sum / n);

        // Head count of funded players, not a sum of fractional slots.
        let scholarship_slots_used =
            players.iter().filter(|p| p.scholarship_suggestion > 0).count() as u32;

        let nil_total: f64 = players.iter().map(|p| p.nil_value_suggestion as f64).sum();
        let nil_utilized_pct = if bias.nil_pool > 0.0 {
            (nil_total / bias.nil_pool * 100.0).round().max(0.0) as u32
        } else {
            0
        };

        TeamMetrics {
            team_kpi,
            band: Band::from_kpi(team_kpi),
            system_fit: (fit_sum / n).round().clamp(0.0, 100.0) as u8,
            scholarship_slots_used,
            nil_utilized_pct,
            confidence_avg: (confidence_sum / n).round().clamp(0.0, 100.0) as u8,
        }
    }
}
