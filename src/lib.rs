// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Hegemon: a deterministic turn-based hegemony simulation.
//!
//! This crate provides the turn-resolution engine for a single-player text
//! simulation in which a player civilization competes against scripted
//! opponents by moving nine power pillars, influence scores, and
//! diplomatic stances.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      CLI shell (parse/render)       │
//! ├─────────────────────────────────────┤
//! │     Game (command operations)       │
//! ├─────────────────────────────────────┤
//! │ Civilizations · Influence · Events  │
//! │   Objectives · Opponent policy      │
//! └─────────────────────────────────────┘
//! ```
//!
//! Commands arrive fully resolved ([`Command`]); the engine mutates state,
//! returns structured results ([`CommandOutcome`]), and never prints. The
//! only non-determinism is the event roll, behind the injectable
//! [`RandomSource`] trait, so a whole game replays from a seed.

pub mod error;
pub mod game;

pub use error::{CommandError, CommandResult};

// Re-export key engine types at crate root for convenience
pub use game::{
    Civilization, Command, CommandOutcome, Game, InfluenceStatus, ObjectiveId, ObjectiveStatus,
    Pillar, RandomSource, Stance, StatusSnapshot, TurnReport,
};
