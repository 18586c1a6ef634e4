//! Civilization state: the nine power pillars and per-civilization counters.

use std::fmt;

use serde::Serialize;

/// Upper bound for every pillar value, influence score, and unrest index.
pub const PILLAR_MAX: u8 = 100;

/// One dimension of civilizational power.
///
/// The set of pillars is fixed; iteration over [`Pillar::ALL`] is the
/// canonical order and is load-bearing for tie-breaks elsewhere in the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pillar {
    /// Education & Human Capital.
    Education,
    /// Competitiveness & Productivity.
    Competitiveness,
    /// Innovation & Tech Leadership.
    Innovation,
    /// Economic Size.
    EconomicSize,
    /// Share of World Trade.
    WorldTrade,
    /// Military Strength & Tech Edge.
    Military,
    /// Financial-Center & Capital-Market Depth.
    FinancialDepth,
    /// Reserve-Currency / Monetary Influence.
    ReserveCurrency,
    /// Social Cohesion & Wellbeing.
    SocialCohesion,
}

impl Pillar {
    /// Number of pillars.
    pub const COUNT: usize = 9;

    /// All pillars in canonical order.
    pub const ALL: [Pillar; Pillar::COUNT] = [
        Pillar::Education,
        Pillar::Competitiveness,
        Pillar::Innovation,
        Pillar::EconomicSize,
        Pillar::WorldTrade,
        Pillar::Military,
        Pillar::FinancialDepth,
        Pillar::ReserveCurrency,
        Pillar::SocialCohesion,
    ];

    /// Human-readable pillar name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pillar::Education => "Education & Human Capital",
            Pillar::Competitiveness => "Competitiveness & Productivity",
            Pillar::Innovation => "Innovation & Tech Leadership",
            Pillar::EconomicSize => "Economic Size",
            Pillar::WorldTrade => "Share of World Trade",
            Pillar::Military => "Military Strength & Tech Edge",
            Pillar::FinancialDepth => "Financial-Center & Capital-Market Depth",
            Pillar::ReserveCurrency => "Reserve-Currency / Monetary Influence",
            Pillar::SocialCohesion => "Social Cohesion & Wellbeing",
        }
    }

    /// Look up a pillar by its human-readable name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Pillar> {
        Pillar::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An opponent's diplomatic disposition toward the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Stance {
    /// No particular disposition.
    #[default]
    Neutral,
    /// Alarmed by a show of force.
    Wary,
    /// Refuses trade talks.
    Hostile,
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stance::Neutral => "Neutral",
            Stance::Wary => "Wary",
            Stance::Hostile => "Hostile",
        };
        f.write_str(label)
    }
}

/// State for a single civilization.
///
/// Pillar values are kept private so every mutation goes through the
/// clamped accessors; a pillar value is always in `[0, 100]`.
#[derive(Debug, Clone)]
pub struct Civilization {
    /// Unique display name.
    pub name: String,
    pillars: [u8; Pillar::COUNT],
    /// Net energy output. Floored at 0, no upper bound.
    pub net_energy_output: u32,
    /// Kardashev tier. Starts at 0, monotonically non-decreasing, max 1.
    pub kardashev_tier: u8,
    /// Diplomatic stance. Only meaningful for opponents.
    pub stance: Stance,
    unrest_index: u8,
}

impl Civilization {
    /// Create a civilization with every pillar at `base`, then apply the
    /// given absolute `boosts`. All values are clamped to `[0, 100]`.
    #[must_use]
    pub fn new(name: impl Into<String>, base: u8, boosts: &[(Pillar, u8)]) -> Self {
        let mut pillars = [base.min(PILLAR_MAX); Pillar::COUNT];
        for &(pillar, value) in boosts {
            pillars[pillar as usize] = value.min(PILLAR_MAX);
        }
        Self {
            name: name.into(),
            pillars,
            net_energy_output: 100,
            kardashev_tier: 0,
            stance: Stance::Neutral,
            unrest_index: 0,
        }
    }

    /// Current value of a pillar.
    #[must_use]
    pub const fn pillar(&self, pillar: Pillar) -> u8 {
        self.pillars[pillar as usize]
    }

    /// Raise a pillar by `amount`, clamped to 100.
    pub fn raise_pillar(&mut self, pillar: Pillar, amount: u8) {
        let slot = &mut self.pillars[pillar as usize];
        *slot = slot.saturating_add(amount).min(PILLAR_MAX);
    }

    /// Lower a pillar by `amount`, floored at 0.
    pub fn lower_pillar(&mut self, pillar: Pillar, amount: u8) {
        let slot = &mut self.pillars[pillar as usize];
        *slot = slot.saturating_sub(amount);
    }

    /// Reduce net energy output by `amount`, floored at 0.
    pub fn drain_energy(&mut self, amount: u32) {
        self.net_energy_output = self.net_energy_output.saturating_sub(amount);
    }

    /// Current unrest index.
    #[must_use]
    pub const fn unrest_index(&self) -> u8 {
        self.unrest_index
    }

    /// Raise the unrest index by `amount`, clamped to 100.
    pub fn raise_unrest(&mut self, amount: u8) {
        self.unrest_index = self.unrest_index.saturating_add(amount).min(PILLAR_MAX);
    }
}
