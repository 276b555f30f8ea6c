//! Advisory narrative layer.
//!
//! Player impact notes, matchup narratives and season commentary are
//! reporting-layer annotations. They are generated from the same inputs as
//! the projections but never feed back into win probability or the tally.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::models::{
    CoachingBiasProfile, EvaluatedPlayer, OpponentProfile, SystemStyle,
};
use crate::simulation::season::SeasonResult;

/// Stylistic note attached to a scheduled game.
pub fn archetype_note(style: SystemStyle) -> &'static str {
    match style {
        SystemStyle::ZonePressure => "Zone defense concedes catch-and-shoot volume to shooters",
        SystemStyle::PhysicalForwards => "Physical frontcourt pressures rim finishing",
        SystemStyle::TempoEdge => "Tempo edge inflates fast-break possessions",
        SystemStyle::GuardCreation => "Guard creation stresses point-of-attack defense",
        SystemStyle::InteriorControl => "Interior control tilts the rebounding battle",
        SystemStyle::Balanced => "No pronounced stylistic edge",
    }
}

/// How a single player is expected to show up against an opponent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactNote {
    pub player: String,
    pub archetype: String,
    pub note: String,
}

/// Impact highlights for up to four rostered players. Advisory only.
pub fn player_impacts(
    players: &[EvaluatedPlayer],
    opponent: &OpponentProfile,
    seed: u64,
) -> Vec<ImpactNote> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    players
        .iter()
        .take(4)
        .map(|player| {
            let delta = rng.gen_range(0.5..2.5);
            let note = if player.archetype.contains("Sniper") || player.archetype.contains("3&D") {
                match opponent.style {
                    SystemStyle::ZonePressure => {
                        format!("+{:.1} made threes against the zone", delta)
                    }
                    _ => format!("+{:.1} made threes if spacing holds", delta),
                }
            } else if player.archetype.contains("Slasher")
                || player.archetype.contains("Combo Guard")
            {
                format!("+{:.1} points off rim attacks", delta + 1.0)
            } else if player.archetype.contains("Rim Protector")
                || player.archetype.contains("Def Anchor")
            {
                format!("+{:.1} rebounds with interior pressure contained", delta)
            } else {
                format!("+{:.1} net contribution at 15+ minutes", delta)
            };
            ImpactNote {
                player: player.name.clone(),
                archetype: player.archetype.clone(),
                note,
            }
        })
        .collect()
}

/// One-paragraph matchup read, selected deterministically from the seed.
pub fn matchup_narrative(
    bias: Option<&CoachingBiasProfile>,
    opponent: &OpponentProfile,
    seed: u64,
) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let offense = bias.map(|b| b.offensive_system.label()).unwrap_or("Five-Out");
    let defense = bias.map(|b| b.defensive_system.label()).unwrap_or("Pack Line");
    let extra_possessions = rng.gen_range(2..8);
    match rng.gen_range(0..3) {
        0 => format!(
            "{} spacing creates +{} offensive possessions. Expect tempo near neutral \
             and an edge on the glass; likely decided late.",
            offense, extra_possessions
        ),
        1 => format!(
            "System mismatch favors the {} against {}. Projected +{} fast-break \
             points from the tempo advantage.",
            offense,
            opponent.style.label(),
            extra_possessions
        ),
        _ => format!(
            "Close matchup expected. The {} should limit {} opportunities.",
            defense,
            opponent.style.label()
        ),
    }
}

/// Season-level qualitative commentary. Advisory text, not a control input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonCommentary {
    pub performance_signals: Vec<String>,
    pub archetype_impacts: Vec<String>,
    pub recommendation: String,
}

pub fn season_commentary(
    season: &SeasonResult,
    players: &[EvaluatedPlayer],
    seed: u64,
) -> SeasonCommentary {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let road_penalty = rng.gen_range(8..14);
    let late_tempo_drop = rng.gen_range(4..8);
    let performance_signals = vec![
        format!("Road games project -{} pp win probability versus home.", road_penalty),
        format!(
            "Tempo drops after game 20: +{} pp loss probability late in the season.",
            late_tempo_drop
        ),
    ];

    let shooters = players
        .iter()
        .filter(|p| p.archetype.contains("Sniper") || p.archetype.contains("3&D"))
        .count();
    let anchors = players
        .iter()
        .filter(|p| p.archetype.contains("Rim Protector") || p.archetype.contains("Def Anchor"))
        .count();
    let mut archetype_impacts = Vec::new();
    if shooters > 0 {
        archetype_impacts
            .push(format!("{} shooter(s) carry the offensive load.", shooters));
    }
    if anchors == 0 {
        archetype_impacts
            .push("No defensive anchor: rebounding drops against physical frontcourts.".to_string());
    }

    let recommendation = if season.win_pct() >= 0.75 {
        "Hold the rotation; spend remaining budget on depth insurance.".to_string()
    } else if anchors == 0 {
        format!(
            "Shift bias +{} toward defense and add a rim anchor at 80+ KPI to \
             convert projected losses.",
            rng.gen_range(2..5)
        )
    } else {
        "Rebalance cluster weights toward the roster's dominant archetypes.".to_string()
    };

    SeasonCommentary { performance_signals, archetype_impacts, recommendation }
}
