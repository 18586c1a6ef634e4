//! Game orchestration: the full roster, command operations, and the
//! end-of-turn sequence.

use serde::Serialize;

use crate::error::{CommandError, CommandResult};
use crate::game::civilization::{Civilization, Pillar, Stance};
use crate::game::events::{EventTable, RandomSource, SplitMix64, WorldEvent};
use crate::game::influence::{InfluenceStatus, status_for};
use crate::game::objectives::{ObjectiveContext, ObjectiveId, ObjectiveStatus, ObjectiveTracker};
use crate::game::policy::{apply_investment, choose_investment};

/// Index of an opponent in the roster. Order is significant: index 0 is the
/// default target for objective predicates.
pub type OpponentId = usize;

/// A fully resolved engine command.
///
/// Free-text parsing and name resolution happen in the CLI layer; the
/// engine only sees these typed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Invest in one of the player's pillars.
    Invest {
        /// Pillar receiving the investment.
        pillar: Pillar,
    },
    /// Send a cultural broadcast at an opponent.
    Broadcast {
        /// Opponent receiving the broadcast.
        target: OpponentId,
    },
    /// Propose a trade deal to an opponent.
    Trade {
        /// Opponent receiving the proposal.
        target: OpponentId,
    },
    /// Project military power near an opponent.
    Military {
        /// Opponent being intimidated.
        target: OpponentId,
    },
    /// Request a status snapshot.
    Status,
    /// Request the objective list.
    Objectives,
    /// End the current turn.
    EndTurn,
    /// Stop the simulation.
    Quit,
}

/// One pillar's value in a status snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarReading {
    /// The pillar.
    pub pillar: Pillar,
    /// Its current value.
    pub value: u8,
}

/// One opponent's line in a status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentReading {
    /// Opponent name.
    pub name: String,
    /// Diplomatic stance toward the player.
    pub stance: Stance,
    /// Player's influence score over this opponent.
    pub influence_score: u8,
    /// Status tier derived from the influence score.
    pub influence_status: InfluenceStatus,
    /// Opponent's unrest index.
    pub unrest_index: u8,
}

/// Point-in-time view of the game for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    /// Player civilization name.
    pub player: String,
    /// Current turn number.
    pub turn: u32,
    /// Player's Kardashev tier.
    pub kardashev_tier: u8,
    /// Player pillar values in canonical order.
    pub pillars: Vec<PillarReading>,
    /// Player net energy output.
    pub net_energy_output: u32,
    /// Per-opponent readings in roster order.
    pub opponents: Vec<OpponentReading>,
}

/// One objective's line in an objective report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectiveReading {
    /// Objective name.
    pub name: &'static str,
    /// Current status.
    pub status: ObjectiveStatus,
}

/// A world event that fired during end-of-turn processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventReport {
    /// The event that fired.
    pub event: WorldEvent,
    /// Detail line describing who was affected.
    pub detail: String,
}

/// One opponent's investment during end-of-turn processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentMove {
    /// Opponent name.
    pub name: String,
    /// Pillar the opponent invested in.
    pub pillar: Pillar,
}

/// Everything that happened while ending a turn, for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Event that fired, if any.
    pub event: Option<EventReport>,
    /// Opponent investments in roster order.
    pub opponent_moves: Vec<OpponentMove>,
    /// Objectives achieved during this turn's evaluation.
    pub achieved: Vec<ObjectiveId>,
    /// Whether the player was promoted to Kardashev Tier 1 this turn.
    pub promoted: bool,
    /// Snapshot taken after all end-of-turn processing.
    pub snapshot: StatusSnapshot,
    /// Objective statuses after evaluation.
    pub objectives: Vec<ObjectiveReading>,
}

/// Result of a successfully executed command, for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A short human-readable result line.
    Message(String),
    /// A status snapshot for display.
    Status(StatusSnapshot),
    /// The objective list for display.
    Objectives(Vec<ObjectiveReading>),
    /// A full end-of-turn report.
    Turn(Box<TurnReport>),
}

/// The whole simulation: player, opponents, influence scores, objectives,
/// event table, and turn counter.
///
/// All catalogs are instance data, so independent games can coexist; the
/// only non-determinism is the injected random source.
#[derive(Debug)]
pub struct Game {
    player: Civilization,
    opponents: Vec<Civilization>,
    influence: Vec<u8>,
    objectives: ObjectiveTracker,
    events: EventTable,
    rng: Box<dyn RandomSource>,
    turn: u32,
    running: bool,
}

impl Game {
    /// Create a game with the standard roster and a seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Box::new(SplitMix64::new(seed)))
    }

    /// Create a game with the standard roster and an injected random
    /// source.
    #[must_use]
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        let (player, opponents) = standard_roster();
        Self::with_setup(player, opponents, EventTable::default(), rng)
    }

    /// Create a game from explicit parts. Influence scores start at 0 and
    /// the turn counter at 1.
    #[must_use]
    pub fn with_setup(
        player: Civilization,
        opponents: Vec<Civilization>,
        events: EventTable,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let influence = vec![0; opponents.len()];
        Self {
            player,
            opponents,
            influence,
            objectives: ObjectiveTracker::new(),
            events,
            rng,
            turn: 1,
            running: true,
        }
    }

    /// The player civilization.
    #[must_use]
    pub const fn player(&self) -> &Civilization {
        &self.player
    }

    /// Opponents in roster order.
    #[must_use]
    pub fn opponents(&self) -> &[Civilization] {
        &self.opponents
    }

    /// Player's influence score over an opponent.
    #[must_use]
    pub fn influence_over(&self, target: OpponentId) -> u8 {
        self.influence.get(target).copied().unwrap_or(0)
    }

    /// Objective tracker.
    #[must_use]
    pub const fn objectives(&self) -> &ObjectiveTracker {
        &self.objectives
    }

    /// Current turn number.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Whether the simulation is still running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Resolve a pillar name case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidPillar`] when no pillar matches.
    pub fn resolve_pillar(&self, name: &str) -> CommandResult<Pillar> {
        Pillar::from_name(name).ok_or_else(|| CommandError::InvalidPillar(name.to_string()))
    }

    /// Resolve an opponent name case-insensitively. First match in roster
    /// order wins.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTarget`] when no opponent matches.
    pub fn resolve_opponent(&self, name: &str) -> CommandResult<OpponentId> {
        self.opponents
            .iter()
            .position(|opp| opp.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CommandError::InvalidTarget(name.to_string()))
    }

    /// Execute one resolved command.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when validation rejects the command; the
    /// game state is unchanged in that case.
    pub fn execute(&mut self, command: Command) -> CommandResult<CommandOutcome> {
        match command {
            Command::Invest { pillar } => Ok(CommandOutcome::Message(self.invest(pillar))),
            Command::Broadcast { target } => self
                .cultural_broadcast(target)
                .map(CommandOutcome::Message),
            Command::Trade { target } => self.trade_deal(target).map(CommandOutcome::Message),
            Command::Military { target } => {
                self.military_power(target).map(CommandOutcome::Message)
            }
            Command::Status => Ok(CommandOutcome::Status(self.status_snapshot())),
            Command::Objectives => Ok(CommandOutcome::Objectives(self.objective_readings())),
            Command::EndTurn => Ok(CommandOutcome::Turn(Box::new(self.end_turn()))),
            Command::Quit => Ok(CommandOutcome::Message(self.quit())),
        }
    }

    /// Invest in a player pillar: +5 to the pillar, −2 Economic Size, and
    /// −1 net energy for the energy-hungry pillars.
    pub fn invest(&mut self, pillar: Pillar) -> String {
        self.player.raise_pillar(pillar, 5);
        self.player.lower_pillar(Pillar::EconomicSize, 2);
        if matches!(pillar, Pillar::Innovation | Pillar::FinancialDepth) {
            self.player.drain_energy(1);
        }
        format!("Investment allocated to {pillar}. Our economic size has been slightly impacted.")
    }

    /// Send a cultural broadcast: costs economy and energy, gains influence,
    /// erodes the target's social cohesion.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTarget`] for an unknown opponent.
    pub fn cultural_broadcast(&mut self, target: OpponentId) -> CommandResult<String> {
        self.check_target(target)?;
        self.player.lower_pillar(Pillar::EconomicSize, 3);
        self.player.drain_energy(5);
        self.raise_influence(target, 5);
        let opp = &mut self.opponents[target];
        opp.lower_pillar(Pillar::SocialCohesion, 2);
        Ok(format!("Cultural broadcast sent to {}.", opp.name))
    }

    /// Propose a trade deal: large influence gain and trade growth for both
    /// sides.
    ///
    /// The Economic Size −2 then +2 is applied as two separate clamped
    /// updates, so the net effect differs from zero when the value sits at
    /// a boundary.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTarget`] for an unknown opponent and
    /// [`CommandError::TargetHostile`] when the target refuses talks; no
    /// state changes in either case.
    pub fn trade_deal(&mut self, target: OpponentId) -> CommandResult<String> {
        self.check_target(target)?;
        if self.opponents[target].stance == Stance::Hostile {
            return Err(CommandError::TargetHostile(
                self.opponents[target].name.clone(),
            ));
        }

        self.player.lower_pillar(Pillar::EconomicSize, 2);
        self.raise_influence(target, 10);
        self.player.raise_pillar(Pillar::WorldTrade, 5);
        self.player.raise_pillar(Pillar::EconomicSize, 2);
        let opp = &mut self.opponents[target];
        opp.raise_pillar(Pillar::WorldTrade, 3);
        opp.raise_pillar(Pillar::EconomicSize, 1);
        Ok(format!(
            "{} has accepted our trade deal! Our economies are now more linked.",
            opp.name
        ))
    }

    /// Project military power: costly show of force that unsettles the
    /// target and secures regional resources.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTarget`] for an unknown opponent and
    /// [`CommandError::InsufficientMilitary`] when the player's military
    /// pillar does not exceed the target's; no state changes in either
    /// case.
    pub fn military_power(&mut self, target: OpponentId) -> CommandResult<String> {
        self.check_target(target)?;
        if self.player.pillar(Pillar::Military) <= self.opponents[target].pillar(Pillar::Military)
        {
            return Err(CommandError::InsufficientMilitary);
        }

        self.player.drain_energy(10);
        self.player.lower_pillar(Pillar::EconomicSize, 4);
        self.player.raise_pillar(Pillar::WorldTrade, 3);
        let opp = &mut self.opponents[target];
        opp.raise_unrest(5);
        opp.stance = Stance::Wary;
        self.objectives.mark_resources_secured();
        Ok(format!(
            "Our forces demonstrate power near {}. They are now Wary.",
            self.opponents[target].name
        ))
    }

    /// End the turn: roll for an event, run every opponent's investment,
    /// advance the turn counter, evaluate objectives, check Kardashev
    /// promotion, and snapshot the result.
    pub fn end_turn(&mut self) -> TurnReport {
        let event = self.events.roll(self.rng.as_mut()).map(|ev| {
            let detail = ev.apply(&mut self.player, &mut self.opponents);
            EventReport { event: ev, detail }
        });

        let mut opponent_moves = Vec::with_capacity(self.opponents.len());
        for (id, score) in self.influence.iter().copied().enumerate() {
            let target = choose_investment(&self.opponents[id], score);
            apply_investment(&mut self.opponents[id], target);
            opponent_moves.push(OpponentMove {
                name: self.opponents[id].name.clone(),
                pillar: target,
            });
        }

        self.turn += 1;

        let ctx = self.objective_context();
        let achieved = self.objectives.evaluate(ctx);
        let promoted = self.check_kardashev();

        TurnReport {
            event,
            opponent_moves,
            achieved,
            promoted,
            snapshot: self.status_snapshot(),
            objectives: self.objective_readings(),
        }
    }

    /// Stop the simulation. Idempotent.
    pub fn quit(&mut self) -> String {
        self.running = false;
        "Exiting simulation. The fate of your civilization rests.".to_string()
    }

    /// Build a point-in-time snapshot for display.
    #[must_use]
    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            player: self.player.name.clone(),
            turn: self.turn,
            kardashev_tier: self.player.kardashev_tier,
            pillars: Pillar::ALL
                .into_iter()
                .map(|pillar| PillarReading {
                    pillar,
                    value: self.player.pillar(pillar),
                })
                .collect(),
            net_energy_output: self.player.net_energy_output,
            opponents: self
                .opponents
                .iter()
                .enumerate()
                .map(|(id, opp)| {
                    let score = self.influence[id];
                    OpponentReading {
                        name: opp.name.clone(),
                        stance: opp.stance,
                        influence_score: score,
                        influence_status: status_for(score),
                        unrest_index: opp.unrest_index(),
                    }
                })
                .collect(),
        }
    }

    /// Current objective statuses in display order.
    #[must_use]
    pub fn objective_readings(&self) -> Vec<ObjectiveReading> {
        ObjectiveId::ALL
            .into_iter()
            .map(|id| ObjectiveReading {
                name: id.name(),
                status: self.objectives.status(id),
            })
            .collect()
    }

    fn check_target(&self, target: OpponentId) -> CommandResult<()> {
        if target < self.opponents.len() {
            Ok(())
        } else {
            Err(CommandError::InvalidTarget(format!("opponent #{target}")))
        }
    }

    fn raise_influence(&mut self, target: OpponentId, amount: u8) {
        let slot = &mut self.influence[target];
        *slot = slot.saturating_add(amount).min(100);
    }

    fn objective_context(&self) -> ObjectiveContext {
        let first = self.opponents.first();
        ObjectiveContext {
            influence_over_first: self.influence.first().copied().unwrap_or(0),
            player_trade_share: self.player.pillar(Pillar::WorldTrade),
            first_opponent_cohesion: first.map_or(100, |opp| opp.pillar(Pillar::SocialCohesion)),
        }
    }

    /// Promote to Kardashev Tier 1 when all objectives are achieved, net
    /// energy exceeds 500, and the mean of the three ascension pillars
    /// exceeds 70. Monotonic: once at tier 1 this never fires again.
    fn check_kardashev(&mut self) -> bool {
        if self.player.kardashev_tier != 0 {
            return false;
        }
        let sum = u32::from(self.player.pillar(Pillar::Innovation))
            + u32::from(self.player.pillar(Pillar::EconomicSize))
            + u32::from(self.player.pillar(Pillar::ReserveCurrency));
        // Integer form of mean(three pillars) > 70.
        if self.objectives.all_achieved() && self.player.net_energy_output > 500 && sum > 210 {
            self.player.kardashev_tier = 1;
            return true;
        }
        false
    }
}

/// The fixed starting roster: the player with tech, military, and monetary
/// boosts, and two opponents with their own specialties.
#[must_use]
fn standard_roster() -> (Civilization, Vec<Civilization>) {
    let player = Civilization::new(
        "Player Civ",
        50,
        &[
            (Pillar::Innovation, 55),
            (Pillar::Military, 55),
            (Pillar::ReserveCurrency, 55),
        ],
    );
    let opponents = vec![
        Civilization::new("Neo-Rome", 45, &[(Pillar::EconomicSize, 48)]),
        Civilization::new("Vultari Collective", 46, &[(Pillar::Military, 50)]),
    ];
    (player, opponents)
}
