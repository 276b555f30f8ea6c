//! Coaching bias profile
//!
//! Per-program configuration: offensive/defensive system, positional and
//! cluster weightings, and the financial setup (scholarship cap, NIL pool,
//! roster size). Owned by the program and read-only to the pipeline; every
//! mutation goes through a setter that enforces the weight invariant.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models::player::{Cluster, Position, PositionSlot};

/// Offensive system identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OffensiveSystem {
    FiveOut,
    Motion,
    PaceAndSpace,
    PostCentric,
    Moreyball,
}

impl OffensiveSystem {
    pub fn label(&self) -> &'static str {
        match self {
            OffensiveSystem::FiveOut => "Five-Out",
            OffensiveSystem::Motion => "Motion",
            OffensiveSystem::PaceAndSpace => "Pace & Space",
            OffensiveSystem::PostCentric => "Post-Centric",
            OffensiveSystem::Moreyball => "Moreyball",
        }
    }

    /// Clusters this system leans on; drives the system half of the fit score.
    pub fn key_clusters(&self) -> [Cluster; 2] {
        match self {
            OffensiveSystem::FiveOut => [Cluster::Shooting, Cluster::Decision],
            OffensiveSystem::Motion => [Cluster::Decision, Cluster::CoreMotor],
            OffensiveSystem::PaceAndSpace => [Cluster::Shooting, Cluster::Creation],
            OffensiveSystem::PostCentric => [Cluster::CoreMotor, Cluster::Creation],
            OffensiveSystem::Moreyball => [Cluster::Shooting, Cluster::Creation],
        }
    }
}

/// Defensive system identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DefensiveSystem {
    PackLine,
    Havoc,
    Switch,
    Zone,
    NoMiddle,
}

impl DefensiveSystem {
    pub fn label(&self) -> &'static str {
        match self {
            DefensiveSystem::PackLine => "Pack Line",
            DefensiveSystem::Havoc => "Havoc",
            DefensiveSystem::Switch => "Switch",
            DefensiveSystem::Zone => "Zone",
            DefensiveSystem::NoMiddle => "No-Middle",
        }
    }
}

/// Program level; selecting one loads its scholarship-cap default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProgramLevel {
    NcaaD1,
    NcaaD2,
    NcaaD3,
    Naia,
    Juco,
    Pro,
}

impl ProgramLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ProgramLevel::NcaaD1 => "NCAA D1",
            ProgramLevel::NcaaD2 => "NCAA D2",
            ProgramLevel::NcaaD3 => "NCAA D3",
            ProgramLevel::Naia => "NAIA",
            ProgramLevel::Juco => "JUCO",
            ProgramLevel::Pro => "Pro",
        }
    }

    /// Default scholarship cap (equivalency units) for the level.
    pub fn default_scholarship_cap(&self) -> f32 {
        match self {
            ProgramLevel::NcaaD1 => 12.0,
            ProgramLevel::NcaaD2 => 8.0,
            ProgramLevel::NcaaD3 => 0.0,
            ProgramLevel::Naia | ProgramLevel::Juco | ProgramLevel::Pro => 12.0,
        }
    }
}

/// Positional importance weights, percentages intended to total 100.
///
/// Mutations that would push the total above 100 are rejected; totals under
/// 100 are an accepted steady state (lowering one slider never renormalizes
/// the others).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionWeights {
    pub pg: u8,
    pub cg: u8,
    pub wing: u8,
    pub forward: u8,
    pub big: u8,
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self { pg: 20, cg: 20, wing: 20, forward: 20, big: 20 }
    }
}

impl PositionWeights {
    /// Uniform share per slot when nothing is emphasized.
    pub const UNIFORM: u8 = 20;

    pub fn get(&self, slot: PositionSlot) -> u8 {
        match slot {
            PositionSlot::PG => self.pg,
            PositionSlot::CG => self.cg,
            PositionSlot::Wing => self.wing,
            PositionSlot::Forward => self.forward,
            PositionSlot::Big => self.big,
        }
    }

    pub fn total(&self) -> u32 {
        self.pg as u32 + self.cg as u32 + self.wing as u32 + self.forward as u32 + self.big as u32
    }

    /// Set one slot weight, rejecting a move that would take the total over 100.
    pub fn set(&mut self, slot: PositionSlot, value: u8) -> Result<()> {
        let proposed = self.total() - self.get(slot) as u32 + value as u32;
        if proposed > 100 {
            return Err(CoreError::WeightOverflow { kind: "positional", total: proposed });
        }
        match slot {
            PositionSlot::PG => self.pg = value,
            PositionSlot::CG => self.cg = value,
            PositionSlot::Wing => self.wing = value,
            PositionSlot::Forward => self.forward = value,
            PositionSlot::Big => self.big = value,
        }
        Ok(())
    }

    /// Weight mass on the slots a given roster position can fill.
    pub fn mass_for_position(&self, position: Position) -> u32 {
        PositionSlot::slots_for(position).iter().map(|slot| self.get(*slot) as u32).sum()
    }
}

/// Trait-cluster weights, percentages intended to total 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterWeights {
    pub creation: u8,
    pub shooting: u8,
    pub decision: u8,
    pub defensive: u8,
    pub core_motor: u8,
}

impl Default for ClusterWeights {
    fn default() -> Self {
        Self { creation: 20, shooting: 20, decision: 20, defensive: 20, core_motor: 20 }
    }
}

impl ClusterWeights {
    pub fn get(&self, cluster: Cluster) -> u8 {
        match cluster {
            Cluster::Creation => self.creation,
            Cluster::Shooting => self.shooting,
            Cluster::Decision => self.decision,
            Cluster::Defensive => self.defensive,
            Cluster::CoreMotor => self.core_motor,
        }
    }

    pub fn total(&self) -> u32 {
        self.creation as u32
            + self.shooting as u32
            + self.decision as u32
            + self.defensive as u32
            + self.core_motor as u32
    }

    /// Set one cluster weight, rejecting a move that would take the total over 100.
    pub fn set(&mut self, cluster: Cluster, value: u8) -> Result<()> {
        let proposed = self.total() - self.get(cluster) as u32 + value as u32;
        if proposed > 100 {
            return Err(CoreError::WeightOverflow { kind: "cluster", total: proposed });
        }
        match cluster {
            Cluster::Creation => self.creation = value,
            Cluster::Shooting => self.shooting = value,
            Cluster::Decision => self.decision = value,
            Cluster::Defensive => self.defensive = value,
            Cluster::CoreMotor => self.core_motor = value,
        }
        Ok(())
    }
}

/// Per-program coaching bias profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachingBiasProfile {
    pub program_name: String,
    pub program_level: ProgramLevel,
    pub offensive_system: OffensiveSystem,
    pub defensive_system: DefensiveSystem,
    pub position_weights: PositionWeights,
    pub cluster_weights: ClusterWeights,
    /// Total equivalency budget (e.g. 12.0 for D1, 0.0 for D3).
    pub scholarship_cap: f32,
    /// Total NIL collective funds, in dollars.
    pub nil_pool: f64,
    pub roster_size: u32,
}

impl Default for CoachingBiasProfile {
    fn default() -> Self {
        Self {
            program_name: String::new(),
            program_level: ProgramLevel::NcaaD1,
            offensive_system: OffensiveSystem::FiveOut,
            defensive_system: DefensiveSystem::PackLine,
            position_weights: PositionWeights::default(),
            cluster_weights: ClusterWeights::default(),
            scholarship_cap: 12.0,
            nil_pool: 50_000.0,
            roster_size: 12,
        }
    }
}

impl CoachingBiasProfile {
    /// Profile for a program level, with that level's scholarship default.
    pub fn for_level(name: impl Into<String>, level: ProgramLevel) -> Self {
        Self {
            program_name: name.into(),
            program_level: level,
            scholarship_cap: level.default_scholarship_cap(),
            ..Self::default()
        }
    }

    /// Check the weight invariants without mutating. Used when a whole
    /// profile arrives at once (apply action, store restore).
    pub fn validate(&self) -> Result<()> {
        let pos_total = self.position_weights.total();
        if pos_total > 100 {
            return Err(CoreError::WeightOverflow { kind: "positional", total: pos_total });
        }
        let cluster_total = self.cluster_weights.total();
        if cluster_total > 100 {
            return Err(CoreError::WeightOverflow { kind: "cluster", total: cluster_total });
        }
        if self.scholarship_cap < 0.0 {
            return Err(CoreError::OutOfRange {
                field: "scholarship_cap",
                value: self.scholarship_cap as f64,
            });
        }
        if self.nil_pool < 0.0 {
            return Err(CoreError::OutOfRange { field: "nil_pool", value: self.nil_pool });
        }
        if self.roster_size == 0 {
            return Err(CoreError::OutOfRange { field: "roster_size", value: 0.0 });
        }
        Ok(())
    }
}
