//! Program state: the composition root.
//!
//! Owns the coaching bias, the official roster, the depth-chart sandbox and
//! the derived team metrics, and threads them explicitly into the pure
//! pipeline functions. Every mutation recomputes the metrics derived from
//! it before returning, and emits the matching assistant event; rejected
//! operations emit a visible signal too.

pub mod latest;

pub use latest::{LatestWins, RunToken};

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::depth_chart::DepthChartSandbox;
use crate::error::{CoreError, Result};
use crate::gate::{ConfidenceGate, SYNC_CONFIDENCE_FLOOR};
use crate::models::{
    CoachingBiasProfile, EvaluatedPlayer, FinancialSummary, OpponentProfile, PositionSlot,
    RosterEntry, RosterSource, TeamMetrics,
};
use crate::notify::{AssistantEvent, AssistantTrigger, NotificationSink, NullSink};
use crate::roster::{RosterAggregator, RosterState};
use crate::simulation::{
    MatchupResult, MatchupSimulator, SeasonProjector, SeasonResult,
};
use crate::store::{ProfileStore, StoreKey};

/// Where a completed evaluation is synced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDestination {
    TeamIq,
    RecruitingBoard,
}

impl SyncDestination {
    pub fn label(&self) -> &'static str {
        match self {
            SyncDestination::TeamIq => "team_iq",
            SyncDestination::RecruitingBoard => "recruiting_board",
        }
    }
}

pub struct ProgramState {
    bias: Option<CoachingBiasProfile>,
    roster: RosterState,
    sandbox: DepthChartSandbox,
    /// Derived from the official roster; recomputed on every mutation.
    metrics: TeamMetrics,
    /// Archive of every synced evaluation, both destinations.
    profiles: Vec<EvaluatedPlayer>,
    sink: Arc<dyn NotificationSink>,
}

impl ProgramState {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            bias: None,
            roster: RosterState::new(),
            sandbox: DepthChartSandbox::new(),
            metrics: TeamMetrics::default(),
            profiles: Vec::new(),
            sink,
        }
    }

    pub fn with_null_sink() -> Self {
        Self::new(Arc::new(NullSink))
    }

    pub fn bias(&self) -> Option<&CoachingBiasProfile> {
        self.bias.as_ref()
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn sandbox(&self) -> &DepthChartSandbox {
        &self.sandbox
    }

    pub fn profiles(&self) -> &[EvaluatedPlayer] {
        &self.profiles
    }

    /// Metrics of the official roster.
    pub fn metrics(&self) -> &TeamMetrics {
        &self.metrics
    }

    /// Metrics of the sandbox lineup, present only while modified.
    pub fn sandbox_metrics(&self) -> Option<TeamMetrics> {
        if !self.sandbox.is_modified() {
            return None;
        }
        let players: Vec<EvaluatedPlayer> =
            self.sandbox.flatten().into_iter().map(|e| e.player).collect();
        Some(RosterAggregator::aggregate(&players, self.bias.as_ref()))
    }

    /// Metrics driving a simulation: sandbox overlay when present,
    /// official roster otherwise.
    pub fn effective_metrics(&self) -> TeamMetrics {
        self.sandbox_metrics().unwrap_or(self.metrics)
    }

    fn recompute(&mut self) {
        self.metrics = RosterAggregator::aggregate(&self.roster.players(), self.bias.as_ref());
    }

    fn scholarship_cap(&self) -> f32 {
        self.bias.as_ref().map(|b| b.scholarship_cap).unwrap_or(12.0)
    }

    fn nil_pool(&self) -> f64 {
        self.bias.as_ref().map(|b| b.nil_pool).unwrap_or(50_000.0)
    }

    /// Replace the coaching bias through the explicit apply action.
    pub fn apply_bias(&mut self, bias: CoachingBiasProfile) -> Result<()> {
        bias.validate()?;
        let event = AssistantEvent::new(AssistantTrigger::BiasApply)
            .with("offense", bias.offensive_system.label())
            .with("defense", bias.defensive_system.label());
        log::info!("coaching bias applied for {}", bias.program_name);
        self.bias = Some(bias);
        self.recompute();
        self.sink.notify(event);
        Ok(())
    }

    /// Sync a completed evaluation. The gate is re-checked here no matter
    /// what the caller believes; a below-floor confidence is refused with a
    /// visible signal.
    pub fn sync_evaluation(
        &mut self,
        player: EvaluatedPlayer,
        destination: SyncDestination,
    ) -> Result<Option<Uuid>> {
        if !ConfidenceGate::allows_sync(player.confidence) {
            log::warn!(
                "sync of {} refused at {:.0}% confidence",
                player.name,
                player.confidence
            );
            self.sink.notify(
                AssistantEvent::new(AssistantTrigger::RosterAdd)
                    .with("player", &player.name)
                    .with("destination", destination.label())
                    .rejected(format!("confidence below {:.0}%", SYNC_CONFIDENCE_FLOOR)),
            );
            return Err(CoreError::GateRejected {
                confidence: player.confidence,
                floor: SYNC_CONFIDENCE_FLOOR,
            });
        }

        self.profiles.push(player.clone());

        match destination {
            SyncDestination::TeamIq => {
                let event = AssistantEvent::new(AssistantTrigger::RosterAdd)
                    .with("player", &player.name)
                    .with("kpi", player.effective_kpi())
                    .with("destination", destination.label());
                let entry = RosterEntry::synced(player, self.scholarship_cap(), Utc::now());
                let id = self.roster.add(entry);
                self.recompute();
                self.sink.notify(event);
                Ok(Some(id))
            }
            SyncDestination::RecruitingBoard => {
                log::info!("evaluation archived to the recruiting board");
                Ok(None)
            }
        }
    }

    /// Seed the roster with a benchmark record (pre-live demo data).
    pub fn add_benchmark_player(&mut self, mut entry: RosterEntry) -> Uuid {
        entry.source = RosterSource::Benchmark;
        let id = self.roster.add(entry);
        self.recompute();
        id
    }

    /// Remove a player from the official roster.
    pub fn remove_player(&mut self, id: Uuid) -> Result<RosterEntry> {
        let entry = self.roster.remove(id).ok_or(CoreError::PlayerNotFound { id })?;
        self.recompute();
        self.sink.notify(
            AssistantEvent::new(AssistantTrigger::RosterRemove)
                .with("player", &entry.player.name)
                .with("team_kpi", self.metrics.team_kpi),
        );
        Ok(entry)
    }

    /// Move a player into a sandbox slot. The player comes from the sandbox
    /// itself (a re-drag) or from the official roster. Returns the freshly
    /// recomputed sandbox metrics, so the display is never stale.
    pub fn depth_swap(&mut self, slot: PositionSlot, id: Uuid) -> Result<TeamMetrics> {
        let entry = match self.sandbox.unassign(id) {
            Some(entry) => entry,
            None => self
                .roster
                .get(id)
                .cloned()
                .ok_or(CoreError::PlayerNotFound { id })?,
        };
        let name = entry.player.name.clone();
        self.sandbox.assign(slot, entry);

        let metrics = self
            .sandbox_metrics()
            .expect("sandbox was just assigned to");
        self.sink.notify(
            AssistantEvent::new(AssistantTrigger::DepthSwap)
                .with("player", name)
                .with("to_slot", slot.label())
                .with("sandbox_kpi", metrics.team_kpi),
        );
        Ok(metrics)
    }

    /// Promote the sandbox lineup to the official roster (atomic swap),
    /// then clear the sandbox and recompute.
    pub fn commit_sandbox(&mut self) -> Result<usize> {
        let count = self.sandbox.commit(&mut self.roster)?;
        self.recompute();
        log::info!("sandbox committed: roster replaced with {} players", count);
        self.sink.notify(
            AssistantEvent::new(AssistantTrigger::RosterApply)
                .with("players", count)
                .with("team_kpi", self.metrics.team_kpi),
        );
        Ok(count)
    }

    /// Drop the sandbox overlay without touching the roster.
    pub fn discard_sandbox(&mut self) {
        self.sandbox.discard();
    }

    /// Edit a player's fractional scholarship slot (clamped to 0.0-1.0).
    pub fn edit_scholarship_slot(&mut self, id: Uuid, slot: f32) -> Result<FinancialSummary> {
        let entry = self.roster.get_mut(id).ok_or(CoreError::PlayerNotFound { id })?;
        entry.scholarship_slot = slot.clamp(0.0, 1.0);
        self.recompute();
        let summary = self.financial_summary();
        if summary.near_cap {
            log::warn!(
                "scholarship equivalency at {:.1} of cap {:.1}",
                summary.equivalency_used,
                summary.scholarship_cap
            );
        }
        self.sink.notify(
            AssistantEvent::new(AssistantTrigger::FinancialEdit)
                .with("field", "scholarship")
                .with("near_cap", summary.near_cap),
        );
        Ok(summary)
    }

    /// Edit a player's committed NIL dollars.
    pub fn edit_nil_value(&mut self, id: Uuid, dollars: u32) -> Result<FinancialSummary> {
        let entry = self.roster.get_mut(id).ok_or(CoreError::PlayerNotFound { id })?;
        entry.nil_committed = dollars;
        self.recompute();
        let summary = self.financial_summary();
        self.sink.notify(
            AssistantEvent::new(AssistantTrigger::FinancialEdit)
                .with("field", "nil")
                .with("near_cap", summary.near_cap),
        );
        Ok(summary)
    }

    /// Fractional-slot and NIL budget view over the roster.
    pub fn financial_summary(&self) -> FinancialSummary {
        FinancialSummary::from_entries(
            self.roster.entries(),
            self.scholarship_cap(),
            self.nil_pool(),
        )
    }

    /// Project a single game against an opponent using the effective
    /// (sandbox-aware) lineup.
    pub fn run_matchup(&self, opponent: &OpponentProfile, seed: u64) -> MatchupResult {
        let sandbox = self.sandbox.is_modified();
        let metrics = self.effective_metrics();
        let result =
            MatchupSimulator::simulate(metrics.system_weighted_kpi(), opponent.kpi, seed);
        self.sink.notify(
            AssistantEvent::new(AssistantTrigger::PredixtRun)
                .with("opponent", &opponent.name)
                .with("sandbox", sandbox)
                .with("win_probability", result.win_probability),
        );
        result
    }

    /// Project a season across a schedule using the effective lineup.
    pub fn run_season(&self, opponents: &[OpponentProfile], seed: u64) -> SeasonResult {
        let sandbox = self.sandbox.is_modified();
        let metrics = self.effective_metrics();
        let result = SeasonProjector::project(metrics.system_weighted_kpi(), opponents, seed);
        self.sink.notify(
            AssistantEvent::new(AssistantTrigger::ScenarioProjection)
                .with("games", result.games.len())
                .with("wins", result.wins)
                .with("sandbox", sandbox),
        );
        result
    }

    /// Write bias, roster and the evaluation archive through the store
    /// boundary.
    pub fn persist(&self, store: &mut dyn ProfileStore) -> Result<()> {
        if let Some(bias) = &self.bias {
            store.put(StoreKey::BiasProfile, serde_json::to_value(bias)?);
        }
        store.put(StoreKey::Roster, serde_json::to_value(self.roster.entries())?);
        store.put(StoreKey::PlayerList, serde_json::to_value(&self.profiles)?);
        Ok(())
    }

    /// Restore from the store boundary, revalidating the bias and
    /// recomputing every derived value.
    pub fn restore(&mut self, store: &dyn ProfileStore) -> Result<()> {
        if let Some(value) = store.get(StoreKey::BiasProfile) {
            let bias: CoachingBiasProfile = serde_json::from_value(value)?;
            bias.validate()?;
            self.bias = Some(bias);
        }
        if let Some(value) = store.get(StoreKey::Roster) {
            let entries: Vec<RosterEntry> = serde_json::from_value(value)?;
            self.roster.replace_all(entries);
        }
        if let Some(value) = store.get(StoreKey::PlayerList) {
            self.profiles = serde_json::from_value(value)?;
        }
        self.recompute();
        Ok(())
    }
}
