//! Interactive play: a blocking command loop over stdin.

use std::io::{self, BufRead, Write};

use hegemon::game::Game;

use super::parser::{Parsed, parse_line};
use super::render::{format_objectives, format_outcome, format_snapshot};
use super::{CliError, resolve_seed};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub(crate) fn execute(seed: Option<u64>) -> Result<(), CliError> {
    let seed = resolve_seed(seed);
    let mut game = Game::new(seed);

    println!("Welcome to Hegemon (seed {seed})");
    print!("{}", format_snapshot(&game.status_snapshot()));
    print!("{}", format_objectives(&game.objective_readings()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.is_running() {
        print!("\nCommand: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // End of input terminates the simulation.
            println!("\nSimulation ended by user.");
            break;
        };
        let line = line?;

        match parse_line(&game, &line) {
            Parsed::Empty => {}
            Parsed::Rejected(message) => println!("{message}"),
            Parsed::Command(command) => match game.execute(command) {
                Ok(outcome) => print!("{}", format_outcome(&outcome)),
                Err(e) => println!("{e}"),
            },
        }
    }

    Ok(())
}
