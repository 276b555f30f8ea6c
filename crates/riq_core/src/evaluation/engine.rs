//! Evaluation engine
//!
//! Turns a scouted attribute record plus the program's coaching bias into a
//! full evaluation snapshot: KPI composite, fit score, role projection,
//! archetype, financial suggestions and the optional pro outlook.
//!
//! The engine is a pure function of its arguments. A confidence below the
//! sync floor does not fail the evaluation; the snapshot comes back tagged
//! `Insufficient` and the sync operations refuse it later.

use crate::error::{CoreError, Result};
use crate::evaluation::archetype::{derive_archetype, derive_badges};
use crate::evaluation::financial::{
    market_value, nil_value_suggestion, scholarship_suggestion, PRO_KPI_ADJUSTMENT,
};
use crate::gate::ConfidenceGate;
use crate::models::player::{PlayerAttributes, PositionGroup, PositionSlot};
use crate::models::round_tenths;
use crate::models::{
    ClusterWeights, CoachingBiasProfile, EvaluatedPlayer, PositionWeights, ProOutlook,
    RoleProjection, StatLine,
};

/// Minimum characters for a player name, matching the search boundary rule.
pub const MIN_NAME_LEN: usize = 3;

/// Score toward which low confidence compresses an above-baseline KPI.
const KPI_NEUTRAL_BASELINE: f32 = 50.0;

/// At zero confidence the above-baseline component keeps this share.
const CONFIDENCE_SHRINK_FLOOR: f32 = 0.6;

pub struct EvaluationEngine;

impl EvaluationEngine {
    /// Run a full evaluation. `bias` falls back to program defaults
    /// (cap 12, pool $50k, roster 12) when absent.
    pub fn evaluate(
        attributes: &PlayerAttributes,
        bias: Option<&CoachingBiasProfile>,
        confidence: f32,
    ) -> Result<EvaluatedPlayer> {
        let name = attributes.name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyField { field: "name" });
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(CoreError::TooShort { field: "name", min: MIN_NAME_LEN });
        }

        let default_bias;
        let bias = match bias {
            Some(b) => b,
            None => {
                default_bias = CoachingBiasProfile::default();
                &default_bias
            }
        };

        let confidence = confidence.clamp(0.0, 100.0);
        let clusters = attributes.clusters.clamped();

        let kpi = Self::composite_kpi(&clusters, &bias.cluster_weights, confidence);
        let fit = Self::fit_score(attributes, bias);
        let archetype = derive_archetype(&clusters, attributes.position);
        let badges = derive_badges(&clusters, confidence);

        let scholarship =
            scholarship_suggestion(kpi, bias.scholarship_cap, bias.roster_size);
        let nil_value = nil_value_suggestion(
            attributes.nil_readiness.score(),
            confidence,
            bias.nil_pool,
            bias.roster_size,
        );

        let pro = if confidence >= 80.0 && attributes.class_year.pro_eligible() {
            let pro_kpi = round_tenths(kpi + PRO_KPI_ADJUSTMENT);
            Some(ProOutlook {
                pro_kpi,
                tier_placement: Self::pro_tier(pro_kpi),
                role: Self::pro_role(attributes.position.group()).to_string(),
                market_value: market_value(kpi),
            })
        } else {
            None
        };

        Ok(EvaluatedPlayer {
            name: name.to_string(),
            school: attributes.school.clone(),
            position: attributes.position,
            class_year: attributes.class_year,
            confidence,
            confidence_tier: ConfidenceGate::tier(confidence),
            final_kpi: Some(kpi),
            legacy_kpi: None,
            fit,
            role_projection: RoleProjection::from_kpi(kpi),
            archetype: archetype.name.to_string(),
            archetype_tags: archetype.tags.iter().map(|t| t.to_string()).collect(),
            badges: badges.iter().map(|b| b.label().to_string()).collect(),
            nil_readiness: attributes.nil_readiness,
            eligibility: attributes.eligibility,
            red_flags: attributes.red_flags.clone(),
            stat_line: StatLine {
                points: round_tenths(kpi * 0.2),
                assists: round_tenths(kpi * 0.06),
                rebounds: round_tenths(kpi * 0.03),
            },
            scholarship_suggestion: scholarship,
            nil_value_suggestion: nil_value,
            pro,
        })
    }

    /// KPI composite: bias-weighted cluster blend, then confidence
    /// compression of the above-baseline component toward 50. Monotone
    /// non-decreasing in confidence and in every cluster score.
    pub fn composite_kpi(
        clusters: &crate::models::ClusterScores,
        weights: &ClusterWeights,
        confidence: f32,
    ) -> f32 {
        let total = weights.total();
        let raw = if total == 0 {
            (clusters.creation
                + clusters.shooting
                + clusters.decision
                + clusters.defensive
                + clusters.core_motor)
                / 5.0
        } else {
            crate::models::Cluster::ALL
                .iter()
                .map(|c| clusters.get(*c) * weights.get(*c) as f32)
                .sum::<f32>()
                / total as f32
        };

        let kpi = if raw > KPI_NEUTRAL_BASELINE {
            let shrink = CONFIDENCE_SHRINK_FLOOR
                + (1.0 - CONFIDENCE_SHRINK_FLOOR) * (confidence.clamp(0.0, 100.0) / 100.0);
            KPI_NEUTRAL_BASELINE + (raw - KPI_NEUTRAL_BASELINE) * shrink
        } else {
            raw
        };
        round_tenths(kpi)
    }

    /// Fit score: positional alignment (bias weight mass on the slots this
    /// position fills, against a uniform spread) blended with system-trait
    /// alignment. Independent axis from KPI.
    pub fn fit_score(attributes: &PlayerAttributes, bias: &CoachingBiasProfile) -> u8 {
        let clusters = attributes.clusters.clamped();

        let slot_count = PositionSlot::slots_for(attributes.position).len() as f32;
        let mass = bias.position_weights.mass_for_position(attributes.position) as f32;
        let positional = (mass / (PositionWeights::UNIFORM as f32 * slot_count)).clamp(0.0, 1.0);

        let keys = bias.offensive_system.key_clusters();
        let offensive = (clusters.get(keys[0]) + clusters.get(keys[1])) / 2.0 / 100.0;
        let system = 0.7 * offensive + 0.3 * (clusters.defensive / 100.0);

        (100.0 * (0.5 * positional + 0.5 * system)).round().clamp(0.0, 100.0) as u8
    }

    /// Market grid placement, T1A (elite) through T4C.
    fn pro_tier(pro_kpi: f32) -> String {
        let (tier, floor) = if pro_kpi >= 90.0 {
            ("T1", 90.0)
        } else if pro_kpi >= 80.0 {
            ("T2", 80.0)
        } else if pro_kpi >= 70.0 {
            ("T3", 70.0)
        } else {
            ("T4", 60.0)
        };
        let offset = (pro_kpi - floor).clamp(0.0, 10.0);
        let sub = if offset >= 10.0 / 1.5 {
            "A"
        } else if offset >= 10.0 / 3.0 {
            "B"
        } else {
            "C"
        };
        format!("{}{}", tier, sub)
    }

    fn pro_role(group: PositionGroup) -> &'static str {
        match group {
            PositionGroup::Guard => "Secondary Creator",
            PositionGroup::Wing => "Connector Wing",
            PositionGroup::Big => "Rotation Big",
        }
    }
}
