//! Derived snapshots: the evaluated player, roster membership records,
//! and team-level metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gate::ConfidenceTier;
use crate::models::player::{ClassYear, Eligibility, NilReadinessBand, Position};

/// Rotation role projected from the final KPI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoleProjection {
    Depth,
    Rotation,
    Starter,
}

impl RoleProjection {
    /// Fixed cut points: Starter above 80, Rotation above 70.
    pub fn from_kpi(kpi: f32) -> Self {
        if kpi > 80.0 {
            RoleProjection::Starter
        } else if kpi > 70.0 {
            RoleProjection::Rotation
        } else {
            RoleProjection::Depth
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleProjection::Depth => "Depth",
            RoleProjection::Rotation => "Rotation",
            RoleProjection::Starter => "Starter",
        }
    }
}

/// Pace-adjusted per-game line projected from the KPI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatLine {
    pub points: f32,
    pub assists: f32,
    pub rebounds: f32,
}

/// Professional outlook, present only for trusted upper-class evaluations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProOutlook {
    pub pro_kpi: f32,
    /// Market grid tier, T1A through T4C.
    pub tier_placement: String,
    pub role: String,
    /// Projected market value in dollars.
    pub market_value: u32,
}

/// Immutable evaluation snapshot. Re-evaluation produces a new instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluatedPlayer {
    pub name: String,
    pub school: String,
    pub position: Position,
    pub class_year: ClassYear,
    pub confidence: f32,
    pub confidence_tier: ConfidenceTier,
    /// Weighted composite (traits x bias x confidence).
    pub final_kpi: Option<f32>,
    /// Raw KPI carried by benchmark/demo records that predate the composite.
    pub legacy_kpi: Option<f32>,
    /// System alignment strength, 0-100.
    pub fit: u8,
    pub role_projection: RoleProjection,
    pub archetype: String,
    pub archetype_tags: Vec<String>,
    pub badges: Vec<String>,
    pub nil_readiness: NilReadinessBand,
    pub eligibility: Eligibility,
    pub red_flags: Vec<String>,
    pub stat_line: StatLine,
    /// Suggested scholarship allocation in dollars.
    pub scholarship_suggestion: u32,
    /// Suggested NIL value in dollars.
    pub nil_value_suggestion: u32,
    pub pro: Option<ProOutlook>,
}

impl EvaluatedPlayer {
    /// Compatibility rule: prefer the composite, fall back to the legacy
    /// raw KPI, then zero.
    pub fn effective_kpi(&self) -> f32 {
        self.final_kpi.or(self.legacy_kpi).unwrap_or(0.0)
    }
}

/// Letter band derived from team KPI. Same shape as the confidence tiers
/// but different cut points; kept as a separate function on purpose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Band {
    F,
    D,
    C,
    B,
    A,
}

impl Band {
    pub fn from_kpi(kpi: f32) -> Self {
        if kpi >= 90.0 {
            Band::A
        } else if kpi >= 80.0 {
            Band::B
        } else if kpi >= 70.0 {
            Band::C
        } else if kpi >= 60.0 {
            Band::D
        } else {
            Band::F
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Band::A => 'A',
            Band::B => 'B',
            Band::C => 'C',
            Band::D => 'D',
            Band::F => 'F',
        }
    }
}

/// Team-level readiness metrics. Always recomputed, never stored as truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TeamMetrics {
    pub team_kpi: f32,
    pub band: Band,
    pub system_fit: u8,
    /// Count of players with a scholarship allocation above zero. This is a
    /// head count, not a sum of fractional slots; the fractional view lives
    /// in `FinancialSummary`.
    pub scholarship_slots_used: u32,
    pub nil_utilized_pct: u32,
    pub confidence_avg: u8,
}

impl Default for TeamMetrics {
    fn default() -> Self {
        Self {
            team_kpi: 0.0,
            band: Band::F,
            system_fit: 0,
            scholarship_slots_used: 0,
            nil_utilized_pct: 0,
            confidence_avg: 0,
        }
    }
}

impl TeamMetrics {
    /// System-weighted KPI fed to the simulators: base KPI adjusted by the
    /// offense/defense/core split (52 / 33 / 15).
    pub fn system_weighted_kpi(&self) -> f32 {
        self.team_kpi * (0.52 + (self.system_fit as f32 / 100.0) * 0.33 + 0.15)
    }
}

/// Where a roster record came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RosterSource {
    /// Synced from a completed evaluation.
    Synced,
    /// Stock benchmark record used before the roster goes live.
    Benchmark,
}

/// Roster membership record wrapping an evaluation snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterEntry {
    pub id: Uuid,
    pub player: EvaluatedPlayer,
    /// Fractional equivalency slot, 0.0-1.0, editable by the coach. Tracked
    /// separately from the dollar suggestion inside the snapshot.
    pub scholarship_slot: f32,
    /// Committed NIL dollars, editable; starts at the suggestion.
    pub nil_committed: u32,
    pub source: RosterSource,
    pub synced_at: DateTime<Utc>,
}

impl RosterEntry {
    /// Wrap a freshly synced evaluation. The initial fractional slot is
    /// derived from the dollar suggestion against the per-player maximum.
    pub fn synced(player: EvaluatedPlayer, cap: f32, now: DateTime<Utc>) -> Self {
        let max_dollars = (cap as f64 * crate::evaluation::financial::SCHOLARSHIP_UNIT) as f32;
        let slot = if max_dollars > 0.0 {
            (player.scholarship_suggestion as f32 / max_dollars).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let nil = player.nil_value_suggestion;
        Self {
            id: Uuid::new_v4(),
            player,
            scholarship_slot: (slot * 10.0).round() / 10.0,
            nil_committed: nil,
            source: RosterSource::Synced,
            synced_at: now,
        }
    }
}

/// Fractional-slot and NIL budget view over the roster entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    /// Sum of fractional scholarship slots.
    pub equivalency_used: f32,
    pub scholarship_cap: f32,
    /// Sum of committed NIL dollars.
    pub nil_committed: f64,
    pub nil_pool: f64,
    /// True once equivalency reaches 90% of the cap.
    pub near_cap: bool,
}

impl FinancialSummary {
    pub fn from_entries(entries: &[RosterEntry], cap: f32, nil_pool: f64) -> Self {
        let equivalency_used: f32 = entries.iter().map(|e| e.scholarship_slot).sum();
        let nil_committed: f64 = entries.iter().map(|e| e.nil_committed as f64).sum();
        let near_cap = cap > 0.0 && equivalency_used >= cap * 0.9;
        Self { equivalency_used, scholarship_cap: cap, nil_committed, nil_pool, near_cap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player(name: &str, kpi: f32, fit: u8, confidence: f32) -> EvaluatedPlayer {
        EvaluatedPlayer {
            name: name.to_string(),
            school: "Test U".to_string(),
            position: Position::PG,
            class_year: ClassYear::Junior,
            confidence,
            confidence_tier: ConfidenceTier::from_confidence(confidence),
            final_kpi: Some(kpi),
            legacy_kpi: None,
            fit,
            role_projection: RoleProjection::from_kpi(kpi),
            archetype: "Floor General".to_string(),
            archetype_tags: vec![],
            badges: vec![],
            nil_readiness: NilReadinessBand::Solid,
            eligibility: Eligibility::Active,
            red_flags: vec![],
            stat_line: StatLine { points: kpi * 0.2, assists: kpi * 0.06, rebounds: kpi * 0.03 },
            scholarship_suggestion: 8_000,
            nil_value_suggestion: 3_000,
            pro: None,
        }
    }

    #[test]
    fn test_role_cut_points() {
        assert_eq!(RoleProjection::from_kpi(80.1), RoleProjection::Starter);
        assert_eq!(RoleProjection::from_kpi(80.0), RoleProjection::Rotation);
        assert_eq!(RoleProjection::from_kpi(70.1), RoleProjection::Rotation);
        assert_eq!(RoleProjection::from_kpi(70.0), RoleProjection::Depth);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::from_kpi(90.0), Band::A);
        assert_eq!(Band::from_kpi(89.9), Band::B);
        assert_eq!(Band::from_kpi(70.0), Band::C);
        assert_eq!(Band::from_kpi(60.0), Band::D);
        assert_eq!(Band::from_kpi(59.9), Band::F);
        assert_eq!(Band::from_kpi(0.0), Band::F);
    }

    #[test]
    fn test_effective_kpi_preference_chain() {
        let mut player = sample_player("A", 82.0, 80, 85.0);
        assert_eq!(player.effective_kpi(), 82.0);

        player.final_kpi = None;
        player.legacy_kpi = Some(74.0);
        assert_eq!(player.effective_kpi(), 74.0, "legacy field is the fallback");

        player.legacy_kpi = None;
        assert_eq!(player.effective_kpi(), 0.0);
    }

    #[test]
    fn test_financial_summary_near_cap() {
        let now = Utc::now();
        let mut entries: Vec<RosterEntry> = (0..11)
            .map(|i| RosterEntry::synced(sample_player(&format!("P{}", i), 80.0, 75, 85.0), 12.0, now))
            .collect();
        for entry in &mut entries {
            entry.scholarship_slot = 1.0;
        }
        let summary = FinancialSummary::from_entries(&entries, 12.0, 50_000.0);
        assert!((summary.equivalency_used - 11.0).abs() < 1e-5);
        assert!(summary.near_cap, "11 of 12 slots is past the 90% line");
    }
}
