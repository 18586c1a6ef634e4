//! Simulation engine for the hegemony game.
//!
//! Implements the turn-resolution core:
//! - Civilizations with nine clamped power pillars
//! - Influence scoring and status tiers
//! - Hegemonic objectives and their win predicates
//! - Random world events behind an injectable random source
//! - The opponent investment heuristic
//! - The `Game` orchestrator and its command operations

mod civilization;
mod events;
mod influence;
mod objectives;
mod policy;
mod state;

pub use civilization::{Civilization, PILLAR_MAX, Pillar, Stance};
pub use events::{EventTable, RandomSource, ScriptedRandom, SplitMix64, WorldEvent};
pub use influence::{InfluenceStatus, status_for};
pub use objectives::{ObjectiveContext, ObjectiveId, ObjectiveStatus, ObjectiveTracker};
pub use policy::{apply_investment, choose_investment};
pub use state::{
    Command, CommandOutcome, EventReport, Game, ObjectiveReading, OpponentId, OpponentMove,
    OpponentReading, PillarReading, StatusSnapshot, TurnReport,
};
