//! Influence scoring: mapping a 0-100 leverage score to a discrete status.

use std::fmt;

use serde::Serialize;

/// Discrete status tier derived from an influence score.
///
/// Variants are ordered from weakest to strongest so the derived `Ord`
/// matches the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum InfluenceStatus {
    /// Score below 20.
    None,
    /// Score 20-39.
    CulturalAffinity,
    /// Score 40-59.
    TradePartner,
    /// Score 60-79.
    Vassalized,
    /// Score 80 and above.
    Integrated,
}

impl fmt::Display for InfluenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InfluenceStatus::None => "None",
            InfluenceStatus::CulturalAffinity => "Cultural Affinity",
            InfluenceStatus::TradePartner => "Trade Partner",
            InfluenceStatus::Vassalized => "Vassalized",
            InfluenceStatus::Integrated => "Integrated",
        };
        f.write_str(label)
    }
}

/// Map an influence score to its status tier.
#[must_use]
pub const fn status_for(score: u8) -> InfluenceStatus {
    match score {
        80.. => InfluenceStatus::Integrated,
        60..=79 => InfluenceStatus::Vassalized,
        40..=59 => InfluenceStatus::TradePartner,
        20..=39 => InfluenceStatus::CulturalAffinity,
        _ => InfluenceStatus::None,
    }
}
