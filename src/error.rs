//! Error types for the simulation engine.

use std::fmt;

/// A command rejected before any state mutation.
///
/// Every variant is recoverable and user-facing: the command loop reports
/// the message and continues. A rejected command leaves the game state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The named pillar does not exist.
    InvalidPillar(String),
    /// The named opponent does not exist.
    InvalidTarget(String),
    /// The target opponent is hostile and refuses trade talks.
    TargetHostile(String),
    /// The player's military pillar does not exceed the target's.
    InsufficientMilitary,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidPillar(name) => {
                write!(f, "Pillar '{name}' not recognized.")
            }
            CommandError::InvalidTarget(name) => {
                write!(f, "Target '{name}' not recognized.")
            }
            CommandError::TargetHostile(name) => {
                write!(f, "{name} is hostile and refuses trade talks.")
            }
            CommandError::InsufficientMilitary => write!(
                f,
                "Our military strength is insufficient to project power effectively."
            ),
        }
    }
}

impl std::error::Error for CommandError {}

/// Result type for engine command operations.
pub type CommandResult<T> = Result<T, CommandError>;
