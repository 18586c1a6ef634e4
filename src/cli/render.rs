//! Plain-text rendering of engine results.
//!
//! The engine returns structured values; everything user-visible is
//! formatted here so the shell owns the presentation.

use hegemon::game::{CommandOutcome, ObjectiveReading, StatusSnapshot, TurnReport};

/// Width of the pillar-name column in the status table.
const NAME_WIDTH: usize = 42;

/// Format a status snapshot as a small text table.
pub(crate) fn format_snapshot(snapshot: &StatusSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} - Turn {} - Kardashev Tier {}\n",
        snapshot.player, snapshot.turn, snapshot.kardashev_tier
    ));
    for reading in &snapshot.pillars {
        out.push_str(&format!(
            "  {:<NAME_WIDTH$} {:>3}\n",
            reading.pillar.name(),
            reading.value
        ));
    }
    out.push_str(&format!(
        "  {:<NAME_WIDTH$} {:>3}\n",
        "Net Energy Output", snapshot.net_energy_output
    ));
    for opp in &snapshot.opponents {
        out.push_str(&format!(
            "{} stance: {} | Influence: {} ({}) | Unrest: {}\n",
            opp.name, opp.stance, opp.influence_status, opp.influence_score, opp.unrest_index
        ));
    }
    out.push_str(&"-".repeat(20));
    out.push('\n');

    out
}

/// Format the objective list.
pub(crate) fn format_objectives(objectives: &[ObjectiveReading]) -> String {
    let mut out = String::from("Hegemonic Objectives:\n");
    for reading in objectives {
        out.push_str(&format!("  {}: {}\n", reading.name, reading.status.label()));
    }
    out
}

/// Format a full end-of-turn report.
pub(crate) fn format_turn_report(report: &TurnReport) -> String {
    let mut out = String::from("--- End of Turn ---\n");

    if let Some(event) = &report.event {
        out.push_str(&format!(
            "[Event Triggered: {}] {}\n{}\n",
            event.event.name(),
            event.event.description(),
            event.detail
        ));
    }
    for mv in &report.opponent_moves {
        out.push_str(&format!("{} invests in {}.\n", mv.name, mv.pillar));
    }
    for id in &report.achieved {
        out.push_str(&format!("[Objective Achieved: {}]\n", id.name()));
    }
    if report.promoted {
        out.push_str("\n*** Congratulations! You have advanced to Kardashev Tier 1. ***\n\n");
    }
    out.push_str(&format_snapshot(&report.snapshot));
    out.push_str(&format_objectives(&report.objectives));
    out.push_str(&format!("--- Beginning Turn {} ---\n", report.snapshot.turn));

    out
}

/// Format any command outcome.
pub(crate) fn format_outcome(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Message(msg) => format!("{msg}\n"),
        CommandOutcome::Status(snapshot) => format_snapshot(snapshot),
        CommandOutcome::Objectives(objectives) => format_objectives(objectives),
        CommandOutcome::Turn(report) => format_turn_report(report),
    }
}
