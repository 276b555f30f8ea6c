//! Depth-chart sandbox
//!
//! A mutable, non-persistent overlay of slot-to-players assignments for
//! what-if analysis. Two states: Unmodified (empty; views fall back to the
//! official roster partitioned by slot compatibility) and Modified (an
//! explicit assignment map). Committing replaces the official roster
//! wholesale with the flattened sandbox and clears it: an atomic swap,
//! never a merge.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::{PositionSlot, RosterEntry};
use crate::roster::RosterState;

// Deliberately not serializable: the sandbox is a non-persistent overlay,
// discarded unless committed.
#[derive(Debug, Clone, Default)]
pub struct DepthChartSandbox {
    assignments: BTreeMap<PositionSlot, Vec<RosterEntry>>,
}

impl DepthChartSandbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// False until the first manual assignment; true until discard/commit.
    pub fn is_modified(&self) -> bool {
        self.assignments.values().any(|v| !v.is_empty())
    }

    /// Place an entry into a slot, removing any prior assignment of the
    /// same entry first (a drag is a move, not a copy).
    pub fn assign(&mut self, slot: PositionSlot, entry: RosterEntry) {
        self.unassign(entry.id);
        self.assignments.entry(slot).or_default().push(entry);
    }

    /// Remove an entry from wherever it is assigned.
    pub fn unassign(&mut self, id: Uuid) -> Option<RosterEntry> {
        for players in self.assignments.values_mut() {
            if let Some(idx) = players.iter().position(|e| e.id == id) {
                return Some(players.remove(idx));
            }
        }
        None
    }

    /// Entries explicitly assigned to a slot.
    pub fn assigned(&self, slot: PositionSlot) -> &[RosterEntry] {
        self.assignments.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The lineup a slot displays: the explicit assignment when one exists,
    /// otherwise the official roster filtered by slot compatibility.
    pub fn view<'a>(&'a self, slot: PositionSlot, roster: &'a RosterState) -> Vec<&'a RosterEntry> {
        let assigned = self.assigned(slot);
        if !assigned.is_empty() {
            return assigned.iter().collect();
        }
        roster
            .entries()
            .iter()
            .filter(|e| slot.accepts(e.player.position))
            .collect()
    }

    /// Bench for a slot: compatible roster players not already primary,
    /// best fit first, at most three.
    pub fn bench<'a>(&self, slot: PositionSlot, roster: &'a RosterState) -> Vec<&'a RosterEntry> {
        let primary_ids: Vec<Uuid> = self.view(slot, roster).iter().map(|e| e.id).collect();
        let mut candidates: Vec<&RosterEntry> = roster
            .entries()
            .iter()
            .filter(|e| slot.accepts(e.player.position) && !primary_ids.contains(&e.id))
            .collect();
        candidates.sort_by(|a, b| b.player.fit.cmp(&a.player.fit));
        candidates.truncate(3);
        candidates
    }

    /// A slot's share of the sandbox lineup's total KPI, in percent.
    pub fn position_share(&self, slot: PositionSlot) -> f32 {
        let total: f32 = self
            .assignments
            .values()
            .flatten()
            .map(|e| e.player.effective_kpi())
            .sum();
        if total == 0.0 {
            return 0.0;
        }
        let slot_total: f32 = self.assigned(slot).iter().map(|e| e.player.effective_kpi()).sum();
        slot_total / total * 100.0
    }

    /// All assigned entries in slot display order.
    pub fn flatten(&self) -> Vec<RosterEntry> {
        PositionSlot::ALL
            .iter()
            .flat_map(|slot| self.assigned(*slot).iter().cloned())
            .collect()
    }

    /// Promote the sandbox to the official roster: wholesale replacement,
    /// then the sandbox is cleared. Returns the new roster size.
    pub fn commit(&mut self, roster: &mut RosterState) -> Result<usize> {
        if !self.is_modified() {
            return Err(CoreError::SandboxUnmodified);
        }
        let lineup = self.flatten();
        let count = lineup.len();
        roster.replace_all(lineup);
        self.assignments.clear();
        Ok(count)
    }

    /// Throw the overlay away without touching the roster.
    pub fn discard(&mut self) {
        self.assignments.clear();
    }
}
