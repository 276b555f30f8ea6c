//! Official roster state and the team-level aggregator.

pub mod aggregator;

pub use aggregator::RosterAggregator;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EvaluatedPlayer, RosterEntry};

/// The official roster: an ordered collection of membership records.
/// Membership changes only through explicit add/remove (or the sandbox
/// commit's wholesale replacement); entries are never pruned implicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterState {
    entries: Vec<RosterEntry>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: RosterEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    pub fn remove(&mut self, id: Uuid) -> Option<RosterEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn get(&self, id: Uuid) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut RosterEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Evaluation snapshots in roster order, the aggregator's input.
    pub fn players(&self) -> Vec<EvaluatedPlayer> {
        self.entries.iter().map(|e| e.player.clone()).collect()
    }

    /// Wholesale replacement used by the sandbox commit. Not a merge.
    pub fn replace_all(&mut self, entries: Vec<RosterEntry>) {
        self.entries = entries;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::ConfidenceTier;
    use crate::models::player::{ClassYear, Eligibility, NilReadinessBand, Position};
    use crate::models::{RoleProjection, StatLine};
    use chrono::Utc;

    fn entry(name: &str) -> RosterEntry {
        let player = EvaluatedPlayer {
            name: name.to_string(),
            school: "Test U".to_string(),
            position: Position::PG,
            class_year: ClassYear::Junior,
            confidence: 85.0,
            confidence_tier: ConfidenceTier::Trusted,
            final_kpi: Some(80.0),
            legacy_kpi: None,
            fit: 75,
            role_projection: RoleProjection::Rotation,
            archetype: "Floor General".to_string(),
            archetype_tags: vec![],
            badges: vec![],
            nil_readiness: NilReadinessBand::Solid,
            eligibility: Eligibility::Active,
            red_flags: vec![],
            stat_line: StatLine { points: 16.0, assists: 4.8, rebounds: 2.4 },
            scholarship_suggestion: 8_000,
            nil_value_suggestion: 3_000,
            pro: None,
        };
        RosterEntry::synced(player, 12.0, Utc::now())
    }

    #[test]
    fn test_explicit_add_remove() {
        let mut roster = RosterState::new();
        let id_a = roster.add(entry("A"));
        let id_b = roster.add(entry("B"));
        assert_eq!(roster.len(), 2);

        let removed = roster.remove(id_a).expect("entry A exists");
        assert_eq!(removed.player.name, "A");
        assert_eq!(roster.len(), 1);
        assert!(roster.get(id_b).is_some());
        assert!(roster.remove(id_a).is_none(), "double remove finds nothing");
    }

    #[test]
    fn test_replace_all_drops_prior_members() {
        let mut roster = RosterState::new();
        roster.add(entry("Old 1"));
        roster.add(entry("Old 2"));

        roster.replace_all(vec![entry("New 1")]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.entries()[0].player.name, "New 1");
    }

    #[test]
    fn test_initial_slot_derived_from_suggestion() {
        let e = entry("A");
        // 8000 of a 120000 per-player maximum, rounded to tenths.
        assert!((e.scholarship_slot - 0.1).abs() < 1e-6);
        assert_eq!(e.nil_committed, 3_000);
    }
}
