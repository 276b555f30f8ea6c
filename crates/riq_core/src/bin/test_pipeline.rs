use riq_core::models::builtin_opponents;
use riq_core::models::player::PositionSlot;
use riq_core::simulation::narrative;
use riq_core::{
    CoachingBiasProfile, EvaluationEngine, ProgramState, ScoutQuery, ScoutSource,
    SyncDestination, SyntheticScout,
};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 Running full pipeline walkthrough...");

    let sink = Arc::new(riq_core::MemorySink::new());
    let mut state = ProgramState::new(sink.clone());

    // Apply a default program configuration
    state.apply_bias(CoachingBiasProfile::default())?;
    println!("✅ Coaching bias applied");

    // Scout and evaluate a small recruiting class
    let mut scout = SyntheticScout::with_seed(2024);
    let names = ["Jordan Reeves", "Marcus Bell", "Trey Nolan", "Cam Whitfield", "Dex Marshall"];
    for name in names {
        let report = scout.scope(&ScoutQuery::for_name(name))?;
        let confidence = report.attributes.confidence;
        let evaluation =
            EvaluationEngine::evaluate(&report.attributes, state.bias(), confidence)?;
        println!(
            "✅ Evaluated {} — KPI {:.1}, fit {}%, {} ({})",
            evaluation.name,
            evaluation.effective_kpi(),
            evaluation.fit,
            evaluation.archetype,
            evaluation.confidence_tier.label(),
        );
        state.sync_evaluation(evaluation, SyncDestination::TeamIq)?;
    }

    let metrics = *state.metrics();
    println!(
        "✅ Roster aggregated — Team KPI {:.1} ({}-band), fit {}%, confidence {}%",
        metrics.team_kpi,
        metrics.band.letter(),
        metrics.system_fit,
        metrics.confidence_avg,
    );

    // What-if: sandbox the two best players and compare
    let top_two: Vec<_> = state.roster().entries().iter().take(2).map(|e| e.id).collect();
    for id in top_two {
        state.depth_swap(PositionSlot::PG, id)?;
    }
    if let Some(sandbox_metrics) = state.sandbox_metrics() {
        println!(
            "✅ Sandbox lineup — Team KPI {:.1} (delta {:+.1})",
            sandbox_metrics.team_kpi,
            sandbox_metrics.team_kpi - metrics.team_kpi,
        );
    }
    state.discard_sandbox();

    // Single game projection with advisory annotations
    let opponent = &builtin_opponents()[0];
    let game = state.run_matchup(opponent, 42);
    println!(
        "✅ Matchup vs {} — win probability {:.0}%, projected {}–{} ({:+})",
        opponent.name, game.win_probability, game.our_score, game.their_score, game.margin,
    );
    for note in narrative::player_impacts(&state.roster().players(), opponent, 42) {
        println!("   • {} ({}): {}", note.player, note.archetype, note.note);
    }
    println!("🧠 {}", narrative::matchup_narrative(state.bias(), opponent, 42));

    // Season projection across the built-in book
    let season = state.run_season(builtin_opponents(), 42);
    println!(
        "✅ Season projected — {}–{}, rank {}/{}, auto-bid {}%",
        season.wins,
        season.losses,
        season.conference_rank,
        season.league_size,
        season.auto_bid_likelihood,
    );
    let commentary = narrative::season_commentary(&season, &state.roster().players(), 42);
    println!("🧠 {}", commentary.recommendation);

    println!("✅ Assistant events emitted: {}", sink.events().len());
    println!("\n🎉 Pipeline walkthrough complete");
    Ok(())
}
