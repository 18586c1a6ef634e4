//! Free-text command parsing.
//!
//! All string handling lives here: the engine only ever sees a fully
//! resolved [`Command`]. Command words and pillar/opponent names are
//! matched case-insensitively; multi-word names are joined from the
//! remaining tokens.

use hegemon::game::{Command, Game};

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Parsed {
    /// A fully resolved command.
    Command(Command),
    /// Blank input; nothing to do.
    Empty,
    /// Input rejected with a user-facing message.
    Rejected(String),
}

/// Parse a raw input line against the current game's roster.
pub(crate) fn parse_line(game: &Game, line: &str) -> Parsed {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Parsed::Empty;
    };
    let args: Vec<&str> = tokens.collect();

    match word.to_ascii_lowercase().as_str() {
        "invest" => {
            if args.is_empty() {
                return Parsed::Rejected("Please specify which pillar to invest in.".to_string());
            }
            match game.resolve_pillar(&args.join(" ")) {
                Ok(pillar) => Parsed::Command(Command::Invest { pillar }),
                Err(e) => Parsed::Rejected(e.to_string()),
            }
        }
        "broadcast" => parse_targeted(game, &args, "Specify a target civilization for the broadcast.", |target| {
            Command::Broadcast { target }
        }),
        "trade" => parse_targeted(game, &args, "Specify a target civilization for the trade deal.", |target| {
            Command::Trade { target }
        }),
        "military" => parse_targeted(game, &args, "Specify a target civilization.", |target| {
            Command::Military { target }
        }),
        "status" => Parsed::Command(Command::Status),
        "objectives" => Parsed::Command(Command::Objectives),
        "end" => Parsed::Command(Command::EndTurn),
        "quit" | "exit" => Parsed::Command(Command::Quit),
        _ => Parsed::Rejected("I don't understand that command.".to_string()),
    }
}

fn parse_targeted(
    game: &Game,
    args: &[&str],
    missing: &str,
    build: impl FnOnce(usize) -> Command,
) -> Parsed {
    if args.is_empty() {
        return Parsed::Rejected(missing.to_string());
    }
    match game.resolve_opponent(&args.join(" ")) {
        Ok(target) => Parsed::Command(build(target)),
        Err(e) => Parsed::Rejected(e.to_string()),
    }
}
