//! Hegemonic objectives and their win-condition predicates.

use serde::Serialize;

use crate::game::influence::{InfluenceStatus, status_for};

/// Identifier for one of the three hegemonic objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectiveId {
    /// Establish Dominant Trade Route.
    DominantTradeRoute,
    /// Achieve Cultural Ascendancy.
    CulturalAscendancy,
    /// Secure Regional Resources.
    RegionalResources,
}

impl ObjectiveId {
    /// All objectives in display order.
    pub const ALL: [ObjectiveId; 3] = [
        ObjectiveId::DominantTradeRoute,
        ObjectiveId::CulturalAscendancy,
        ObjectiveId::RegionalResources,
    ];

    /// Human-readable objective name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ObjectiveId::DominantTradeRoute => "Establish Dominant Trade Route",
            ObjectiveId::CulturalAscendancy => "Achieve Cultural Ascendancy",
            ObjectiveId::RegionalResources => "Secure Regional Resources",
        }
    }
}

/// Progress state of an objective.
///
/// Transitions are monotonic: an objective never moves backward, and
/// re-evaluating an `Achieved` objective is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ObjectiveStatus {
    /// No progress recorded.
    NotStarted,
    /// Partially complete.
    InProgress,
    /// Permanently complete.
    Achieved,
}

impl ObjectiveStatus {
    /// Human-readable status label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ObjectiveStatus::NotStarted => "Not Started",
            ObjectiveStatus::InProgress => "In Progress",
            ObjectiveStatus::Achieved => "Achieved",
        }
    }
}

/// The slice of game state the objective predicates observe.
///
/// Built by the orchestrator each evaluation; keeps this module free of a
/// dependency on the full game state.
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveContext {
    /// Player's influence score over the first opponent.
    pub influence_over_first: u8,
    /// Player's Share of World Trade pillar.
    pub player_trade_share: u8,
    /// First opponent's Social Cohesion & Wellbeing pillar.
    pub first_opponent_cohesion: u8,
}

/// Tracks the status of every objective.
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveTracker {
    statuses: [ObjectiveStatus; ObjectiveId::ALL.len()],
    resources_secured: bool,
}

impl Default for ObjectiveTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectiveTracker {
    /// Create a tracker with every objective `NotStarted`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: [ObjectiveStatus::NotStarted; ObjectiveId::ALL.len()],
            resources_secured: false,
        }
    }

    /// Current status of an objective.
    #[must_use]
    pub const fn status(&self, id: ObjectiveId) -> ObjectiveStatus {
        self.statuses[id as usize]
    }

    /// Whether every objective is `Achieved`.
    #[must_use]
    pub fn all_achieved(&self) -> bool {
        self.statuses
            .iter()
            .all(|&s| s == ObjectiveStatus::Achieved)
    }

    /// Record that a military-power action secured regional resources.
    ///
    /// The flag is a side channel read by the Secure Regional Resources
    /// predicate at the next evaluation.
    pub fn mark_resources_secured(&mut self) {
        self.resources_secured = true;
    }

    /// Whether the resource-security side channel has fired.
    #[must_use]
    pub const fn resources_secured(&self) -> bool {
        self.resources_secured
    }

    /// Evaluate every objective that is not yet `Achieved` against `ctx`,
    /// promoting those whose predicate holds. Returns the objectives that
    /// became `Achieved` during this call.
    pub fn evaluate(&mut self, ctx: ObjectiveContext) -> Vec<ObjectiveId> {
        let mut newly_achieved = Vec::new();
        for id in ObjectiveId::ALL {
            if self.status(id) == ObjectiveStatus::Achieved {
                continue;
            }
            if self.predicate_holds(id, ctx) {
                self.statuses[id as usize] = ObjectiveStatus::Achieved;
                newly_achieved.push(id);
            }
        }
        newly_achieved
    }

    fn predicate_holds(&self, id: ObjectiveId, ctx: ObjectiveContext) -> bool {
        match id {
            ObjectiveId::DominantTradeRoute => {
                status_for(ctx.influence_over_first) == InfluenceStatus::TradePartner
                    && ctx.player_trade_share > 55
            }
            ObjectiveId::CulturalAscendancy => {
                ctx.influence_over_first > 40 || ctx.first_opponent_cohesion < 40
            }
            ObjectiveId::RegionalResources => self.resources_secured,
        }
    }
}
