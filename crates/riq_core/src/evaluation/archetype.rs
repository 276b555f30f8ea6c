//! Archetype, tag and badge derivation.
//!
//! The archetype catalog is keyed by the player's dominant trait cluster
//! crossed with their position group; tags describe how the archetype shows
//! up on the floor.

use crate::models::player::{Cluster, ClusterScores, Position, PositionGroup};

/// Archetype name plus descriptive tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub name: &'static str,
    pub tags: [&'static str; 2],
}

/// Resolve the archetype for a cluster profile at a position.
pub fn derive_archetype(clusters: &ClusterScores, position: Position) -> ArchetypeProfile {
    let dominant = clusters.dominant();
    let group = position.group();
    let (name, tags) = match (dominant, group) {
        (Cluster::Creation, PositionGroup::Guard) => {
            ("Combo Guard", ["Ball Handler", "Pick-and-Roll"])
        }
        (Cluster::Creation, PositionGroup::Wing) => ("Slasher", ["Rim Pressure", "Transition"]),
        (Cluster::Creation, PositionGroup::Big) => {
            ("Offensive Connector", ["Short Roll", "Passing"])
        }
        (Cluster::Shooting, PositionGroup::Guard) => ("Sniper", ["3&D", "Spacing"]),
        (Cluster::Shooting, PositionGroup::Wing) => ("3&D Wing", ["Spacing", "Catch-and-Shoot"]),
        (Cluster::Shooting, PositionGroup::Big) => ("Stretch Big", ["Pick-and-Pop", "Spacing"]),
        (Cluster::Decision, PositionGroup::Guard) => {
            ("Floor General", ["Tempo Control", "Passing Vision"])
        }
        (Cluster::Decision, PositionGroup::Wing) => ("Versatile Wing", ["Connector", "Low Turnover"]),
        (Cluster::Decision, PositionGroup::Big) => ("High-Post Hub", ["Passing", "Screening"]),
        (Cluster::Defensive, PositionGroup::Guard) => {
            ("Havoc Guard", ["On-Ball Defense", "Deflections"])
        }
        (Cluster::Defensive, PositionGroup::Wing) => ("Def Anchor", ["Switchable", "Help Defense"]),
        (Cluster::Defensive, PositionGroup::Big) => {
            ("Rim Protector", ["Shot Blocking", "Rebounding"])
        }
        (Cluster::CoreMotor, PositionGroup::Guard) => ("Energy Guard", ["Pace", "Pressure"]),
        (Cluster::CoreMotor, PositionGroup::Wing) => ("Motor Wing", ["Cutting", "Second Effort"]),
        (Cluster::CoreMotor, PositionGroup::Big) => {
            ("Glass Cleaner", ["Rebounding", "Second Chances"])
        }
    };
    ArchetypeProfile { name, tags }
}

/// Merit badges attached to an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    HighIq,
    Sniper,
    Motor,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::HighIq => "High IQ",
            Badge::Sniper => "Sniper",
            Badge::Motor => "Motor",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Badge::HighIq => "⚡",
            Badge::Sniper => "🏅",
            Badge::Motor => "🔋",
        }
    }
}

/// Badge rules: decision drives High IQ, shooting at a trusted confidence
/// drives Sniper, elite motor drives Motor.
pub fn derive_badges(clusters: &ClusterScores, confidence: f32) -> Vec<Badge> {
    let mut badges = Vec::new();
    if clusters.decision >= 70.0 {
        badges.push(Badge::HighIq);
    }
    if clusters.shooting >= 80.0 && confidence >= 80.0 {
        badges.push(Badge::Sniper);
    }
    if clusters.core_motor >= 85.0 {
        badges.push(Badge::Motor);
    }
    badges
}
