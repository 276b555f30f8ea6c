//! Player-side model: positions, depth-chart slots, class years and the
//! raw scouted attribute record that feeds the evaluation engine.

use serde::{Deserialize, Serialize};

/// On-court position as listed on a roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }

    /// Broad grouping used for archetype derivation.
    pub fn group(&self) -> PositionGroup {
        match self {
            Position::PG | Position::SG => PositionGroup::Guard,
            Position::SF => PositionGroup::Wing,
            Position::PF | Position::C => PositionGroup::Big,
        }
    }
}

/// Guard/Wing/Big grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionGroup {
    Guard,
    Wing,
    Big,
}

/// Depth-chart slot. Slots are coarser than roster positions; a roster
/// position can feed more than one slot (an SG plays both CG and Wing).
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum PositionSlot {
    PG,
    CG,
    Wing,
    Forward,
    Big,
}

impl PositionSlot {
    /// All slots in depth-chart display order.
    pub const ALL: [PositionSlot; 5] = [
        PositionSlot::PG,
        PositionSlot::CG,
        PositionSlot::Wing,
        PositionSlot::Forward,
        PositionSlot::Big,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PositionSlot::PG => "PG",
            PositionSlot::CG => "CG",
            PositionSlot::Wing => "Wing",
            PositionSlot::Forward => "Forward",
            PositionSlot::Big => "Big",
        }
    }

    /// Position-compatibility rule used when the sandbox is unmodified and
    /// views fall back to the official roster.
    pub fn accepts(&self, position: Position) -> bool {
        match self {
            PositionSlot::PG => position == Position::PG,
            PositionSlot::CG => position == Position::SG,
            PositionSlot::Wing => position == Position::SG || position == Position::SF,
            PositionSlot::Forward => position == Position::SF || position == Position::PF,
            PositionSlot::Big => position == Position::PF || position == Position::C,
        }
    }

    /// Slots a given roster position can fill.
    pub fn slots_for(position: Position) -> Vec<PositionSlot> {
        Self::ALL.iter().copied().filter(|slot| slot.accepts(position)).collect()
    }
}

/// Class / year of a scouted player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClassYear {
    HsFreshman,
    HsSophomore,
    HsJunior,
    HsSenior,
    Prep,
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Pro,
}

impl ClassYear {
    pub fn label(&self) -> &'static str {
        match self {
            ClassYear::HsFreshman => "HS FR",
            ClassYear::HsSophomore => "HS SO",
            ClassYear::HsJunior => "HS JR",
            ClassYear::HsSenior => "HS SR",
            ClassYear::Prep => "Prep",
            ClassYear::Freshman => "FR",
            ClassYear::Sophomore => "SO",
            ClassYear::Junior => "JR",
            ClassYear::Senior => "SR",
            ClassYear::Pro => "Pro",
        }
    }

    /// Whether a pro outlook may be computed for this class. College
    /// upperclassmen and pros only.
    pub fn pro_eligible(&self) -> bool {
        matches!(self, ClassYear::Junior | ClassYear::Senior | ClassYear::Pro)
    }
}

/// NIL readiness band derived from verified exposure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NilReadinessBand {
    Low,
    Baseline,
    Solid,
    High,
}

impl NilReadinessBand {
    pub fn label(&self) -> &'static str {
        match self {
            NilReadinessBand::Low => "Low",
            NilReadinessBand::Baseline => "Baseline",
            NilReadinessBand::Solid => "Solid",
            NilReadinessBand::High => "High",
        }
    }

    /// Numeric readiness score used by the NIL value formula.
    pub fn score(&self) -> f32 {
        match self {
            NilReadinessBand::Low => 1.0,
            NilReadinessBand::Baseline => 2.0,
            NilReadinessBand::Solid => 3.0,
            NilReadinessBand::High => 4.0,
        }
    }

    pub fn from_index(index: u8) -> Self {
        match index {
            0 => NilReadinessBand::Low,
            1 => NilReadinessBand::Baseline,
            2 => NilReadinessBand::Solid,
            _ => NilReadinessBand::High,
        }
    }
}

/// Eligibility status reported by the scouting trail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Eligibility {
    Active,
    Pending,
    Ineligible,
}

/// The five trait clusters the KPI composite blends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Cluster {
    Creation,
    Shooting,
    Decision,
    Defensive,
    CoreMotor,
}

impl Cluster {
    pub const ALL: [Cluster; 5] = [
        Cluster::Creation,
        Cluster::Shooting,
        Cluster::Decision,
        Cluster::Defensive,
        Cluster::CoreMotor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Cluster::Creation => "Creation",
            Cluster::Shooting => "Shooting",
            Cluster::Decision => "Decision",
            Cluster::Defensive => "Defensive",
            Cluster::CoreMotor => "Core / Motor",
        }
    }
}

/// Scouted cluster scores, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ClusterScores {
    pub creation: f32,
    pub shooting: f32,
    pub decision: f32,
    pub defensive: f32,
    pub core_motor: f32,
}

impl ClusterScores {
    pub fn uniform(value: f32) -> Self {
        Self {
            creation: value,
            shooting: value,
            decision: value,
            defensive: value,
            core_motor: value,
        }
    }

    pub fn get(&self, cluster: Cluster) -> f32 {
        match cluster {
            Cluster::Creation => self.creation,
            Cluster::Shooting => self.shooting,
            Cluster::Decision => self.decision,
            Cluster::Defensive => self.defensive,
            Cluster::CoreMotor => self.core_motor,
        }
    }

    /// Clamp every score into the 0-100 scale.
    pub fn clamped(&self) -> Self {
        Self {
            creation: self.creation.clamp(0.0, 100.0),
            shooting: self.shooting.clamp(0.0, 100.0),
            decision: self.decision.clamp(0.0, 100.0),
            defensive: self.defensive.clamp(0.0, 100.0),
            core_motor: self.core_motor.clamp(0.0, 100.0),
        }
    }

    /// The cluster with the highest score. Ties resolve in `Cluster::ALL`
    /// order so the result is stable.
    pub fn dominant(&self) -> Cluster {
        let mut best = Cluster::Creation;
        let mut best_score = self.get(best);
        for cluster in Cluster::ALL.iter().skip(1) {
            let score = self.get(*cluster);
            if score > best_score {
                best = *cluster;
                best_score = score;
            }
        }
        best
    }
}

/// Raw scouted player record, immutable once scoped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerAttributes {
    pub name: String,
    pub school: String,
    pub position: Position,
    pub class_year: ClassYear,
    /// Cross-source agreement, 0-100.
    pub confidence: f32,
    pub clusters: ClusterScores,
    pub nil_readiness: NilReadinessBand,
    pub eligibility: Eligibility,
    #[serde(default)]
    pub red_flags: Vec<String>,
}
