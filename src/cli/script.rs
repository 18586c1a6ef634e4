//! Scripted runs: feed a file of commands through a fresh game.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use hegemon::game::{Game, ObjectiveReading, StatusSnapshot};

use super::parser::{Parsed, parse_line};
use super::render::format_outcome;
use super::{CliError, OutputFormat, resolve_seed};

/// JSON-serializable summary of a finished scripted run.
#[derive(Debug, Serialize)]
struct ScriptReport {
    /// Seed the run was played with.
    seed: u64,
    /// Turn counter when the script ended.
    turn: u32,
    /// Player's final Kardashev tier.
    kardashev_tier: u8,
    /// Final status snapshot.
    snapshot: StatusSnapshot,
    /// Final objective statuses.
    objectives: Vec<ObjectiveReading>,
}

/// Execute the script command: run every line of `path` as a command.
///
/// # Errors
///
/// Returns an error if the script cannot be read or the summary cannot be
/// serialized.
pub(crate) fn execute(
    path: PathBuf,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let text = fs::read_to_string(&path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;

    let seed = resolve_seed(seed);
    let mut game = Game::new(seed);
    let mut transcript = String::new();

    for line in text.lines() {
        if !game.is_running() {
            break;
        }
        match parse_line(&game, line) {
            Parsed::Empty => {}
            Parsed::Rejected(message) => {
                transcript.push_str(&message);
                transcript.push('\n');
            }
            Parsed::Command(command) => match game.execute(command) {
                Ok(outcome) => transcript.push_str(&format_outcome(&outcome)),
                Err(e) => {
                    transcript.push_str(&e.to_string());
                    transcript.push('\n');
                }
            },
        }
    }

    match format {
        OutputFormat::Text => print!("{transcript}"),
        OutputFormat::Json => {
            let report = ScriptReport {
                seed,
                turn: game.turn(),
                kardashev_tier: game.player().kardashev_tier,
                snapshot: game.status_snapshot(),
                objectives: game.objective_readings(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
