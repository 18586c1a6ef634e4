//! Opponent investment heuristic, run once per opponent at turn end.

use crate::game::civilization::{Civilization, Pillar};

/// Choose the pillar an opponent invests in this turn.
///
/// An opponent under meaningful player influence (score above 30) shores up
/// Social Cohesion & Wellbeing while it is below 60, then pivots to
/// military strength. Otherwise it reinforces its weakest pillar, taking
/// the first minimum in [`Pillar::ALL`] order on ties.
#[must_use]
pub fn choose_investment(opponent: &Civilization, influence_score: u8) -> Pillar {
    if influence_score > 30 {
        if opponent.pillar(Pillar::SocialCohesion) < 60 {
            return Pillar::SocialCohesion;
        }
        return Pillar::Military;
    }

    let mut weakest = Pillar::ALL[0];
    for pillar in Pillar::ALL {
        if opponent.pillar(pillar) < opponent.pillar(weakest) {
            weakest = pillar;
        }
    }
    weakest
}

/// Apply an investment: +3 to the target pillar, −2 Economic Size.
pub fn apply_investment(opponent: &mut Civilization, target: Pillar) {
    opponent.raise_pillar(target, 3);
    opponent.lower_pillar(Pillar::EconomicSize, 2);
}
