//! Random world events and the seeded random source that drives them.

use serde::Serialize;

use crate::game::civilization::{Civilization, Pillar};

/// Source of uniformly distributed random draws.
///
/// The engine's only non-determinism is the event roll, so injecting this
/// trait makes a whole game reproducible from a seed and lets tests force
/// "no event" or a specific event.
pub trait RandomSource: std::fmt::Debug {
    /// Next uniformly distributed 64-bit value.
    fn next_u64(&mut self) -> u64;
}

/// SplitMix64 generator. Small, fast, and bit-exact across platforms.
#[derive(Debug, Clone, Copy)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Useful for forcing a specific event (or no event) in tests and
/// scripted runs.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<u64>,
    next: usize,
}

impl ScriptedRandom {
    /// Create a source that replays `draws` in order.
    #[must_use]
    pub fn new(draws: Vec<u64>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u64(&mut self) -> u64 {
        // With no draws, behave as "never trigger": 99 % 100 >= any
        // capped trigger chance.
        if self.draws.is_empty() {
            return 99;
        }
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

/// A world event that may fire at the end of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorldEvent {
    /// A sudden leap in knowledge boosts the innovation leader.
    TechBreakthrough,
    /// Market optimism increases economic size for all.
    EconomicBoom,
    /// A solar flare lowers net energy output this turn.
    SolarFlare,
}

impl WorldEvent {
    /// Event headline.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            WorldEvent::TechBreakthrough => "Technological Breakthrough",
            WorldEvent::EconomicBoom => "Economic Boom",
            WorldEvent::SolarFlare => "Solar Flare Disruptions",
        }
    }

    /// One-line event description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            WorldEvent::TechBreakthrough => "A sudden leap in knowledge boosts innovation.",
            WorldEvent::EconomicBoom => "Market optimism increases economic size for all.",
            WorldEvent::SolarFlare => "A solar flare lowers net energy output this turn.",
        }
    }

    /// Apply the event to the full roster and return a detail line for
    /// display. The player is considered before opponents wherever the
    /// effect singles out one civilization.
    pub fn apply(self, player: &mut Civilization, opponents: &mut [Civilization]) -> String {
        match self {
            WorldEvent::TechBreakthrough => {
                // First maximum wins: player, then opponents in roster order.
                let mut leader = &mut *player;
                for opp in &mut *opponents {
                    if opp.pillar(Pillar::Innovation) > leader.pillar(Pillar::Innovation) {
                        leader = opp;
                    }
                }
                leader.raise_pillar(Pillar::Innovation, 5);
                format!("{} experiences a surge in innovation!", leader.name)
            }
            WorldEvent::EconomicBoom => {
                player.raise_pillar(Pillar::EconomicSize, 3);
                for opp in &mut *opponents {
                    opp.raise_pillar(Pillar::EconomicSize, 3);
                }
                "Regional economies surge with new opportunities.".to_string()
            }
            WorldEvent::SolarFlare => {
                player.drain_energy(10);
                for opp in &mut *opponents {
                    opp.drain_energy(10);
                }
                "A solar flare disrupts energy production across civilizations.".to_string()
            }
        }
    }
}

/// Fixed catalog of events with a bounded per-turn trigger chance.
#[derive(Debug, Clone)]
pub struct EventTable {
    catalog: Vec<WorldEvent>,
    trigger_percent: u8,
}

impl Default for EventTable {
    fn default() -> Self {
        Self::new(
            vec![
                WorldEvent::TechBreakthrough,
                WorldEvent::EconomicBoom,
                WorldEvent::SolarFlare,
            ],
            25,
        )
    }
}

impl EventTable {
    /// Create a table from a catalog and a trigger chance in percent.
    ///
    /// The chance is capped at 25: at most one event per turn, at most a
    /// quarter of turns.
    #[must_use]
    pub fn new(catalog: Vec<WorldEvent>, trigger_percent: u8) -> Self {
        Self {
            catalog,
            trigger_percent: trigger_percent.min(25),
        }
    }

    /// Roll for this turn's event: `None` most of the time, otherwise a
    /// uniform pick from the catalog.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> Option<WorldEvent> {
        if self.catalog.is_empty() {
            return None;
        }
        if rng.next_u64() % 100 >= u64::from(self.trigger_percent) {
            return None;
        }
        let index = usize::try_from(rng.next_u64() % self.catalog.len() as u64).ok()?;
        Some(self.catalog[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> (Civilization, Vec<Civilization>) {
        let player = Civilization::new("Player Civ", 50, &[(Pillar::Innovation, 55)]);
        let opponents = vec![
            Civilization::new("Neo-Rome", 45, &[]),
            Civilization::new("Vultari Collective", 46, &[]),
        ];
        (player, opponents)
    }

    #[test]
    fn test_splitmix_is_deterministic() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_roll_no_event_on_high_draw() {
        let table = EventTable::default();
        let mut rng = ScriptedRandom::new(vec![25]);
        assert_eq!(table.roll(&mut rng), None);
    }

    #[test]
    fn test_roll_selects_uniformly_by_index() {
        let table = EventTable::default();
        for (pick, expected) in [
            (0, WorldEvent::TechBreakthrough),
            (1, WorldEvent::EconomicBoom),
            (2, WorldEvent::SolarFlare),
        ] {
            let mut rng = ScriptedRandom::new(vec![0, pick]);
            assert_eq!(table.roll(&mut rng), Some(expected));
        }
    }

    #[test]
    fn test_trigger_chance_capped() {
        let table = EventTable::new(vec![WorldEvent::EconomicBoom], 100);
        // Draw of 25 must still mean "no event" after the cap.
        let mut rng = ScriptedRandom::new(vec![25]);
        assert_eq!(table.roll(&mut rng), None);
    }

    #[test]
    fn test_tech_breakthrough_boosts_single_leader() {
        let (mut player, mut opponents) = roster();
        WorldEvent::TechBreakthrough.apply(&mut player, &mut opponents);
        assert_eq!(player.pillar(Pillar::Innovation), 60);
        assert_eq!(opponents[0].pillar(Pillar::Innovation), 45);
        assert_eq!(opponents[1].pillar(Pillar::Innovation), 46);
    }

    #[test]
    fn test_tech_breakthrough_tie_goes_to_player() {
        let mut player = Civilization::new("Player Civ", 50, &[]);
        let mut opponents = vec![Civilization::new("Neo-Rome", 50, &[])];
        WorldEvent::TechBreakthrough.apply(&mut player, &mut opponents);
        assert_eq!(player.pillar(Pillar::Innovation), 55);
        assert_eq!(opponents[0].pillar(Pillar::Innovation), 50);
    }

    #[test]
    fn test_economic_boom_lifts_everyone() {
        let (mut player, mut opponents) = roster();
        WorldEvent::EconomicBoom.apply(&mut player, &mut opponents);
        assert_eq!(player.pillar(Pillar::EconomicSize), 53);
        assert_eq!(opponents[0].pillar(Pillar::EconomicSize), 48);
        assert_eq!(opponents[1].pillar(Pillar::EconomicSize), 49);
    }

    #[test]
    fn test_solar_flare_floors_energy_at_zero() {
        let (mut player, mut opponents) = roster();
        opponents[0].net_energy_output = 4;
        WorldEvent::SolarFlare.apply(&mut player, &mut opponents);
        assert_eq!(player.net_energy_output, 90);
        assert_eq!(opponents[0].net_energy_output, 0);
    }
}
