//! Domain data model
//!
//! Raw scouted attributes, the per-program coaching bias profile, derived
//! evaluation/team snapshots, and opponent descriptors. Every derived type
//! here is produced by a pure function of its declared inputs; nothing in
//! this module reaches for hidden state.

pub mod bias;
pub mod opponent;
pub mod player;
pub mod team;

pub use bias::{
    ClusterWeights, CoachingBiasProfile, DefensiveSystem, OffensiveSystem, PositionWeights,
    ProgramLevel,
};
pub use opponent::{builtin_opponents, OpponentProfile, SystemStyle};
pub use player::{
    ClassYear, Cluster, ClusterScores, Eligibility, NilReadinessBand, PlayerAttributes, Position,
    PositionSlot,
};
pub use team::{
    Band, EvaluatedPlayer, FinancialSummary, ProOutlook, RoleProjection, RosterEntry, RosterSource,
    StatLine, TeamMetrics,
};

/// Round to one decimal place, the display precision used for KPI values.
pub(crate) fn round_tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
