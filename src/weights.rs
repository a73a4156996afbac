use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

/// Percentage weight table over the four tiers.
///
/// One field per tier rather than an open map, so a missing tier is a type
/// error instead of a silent weight of zero.
///
/// Well-formed tables sum to 100, but the sampler is total over any table:
/// an under-sum table sends the uncovered tail of `[0, 100)` to `Common`,
/// and an over-sum table simply leaves the excess weight unreachable. Use
/// [`RarityWeights::sum`] (via pack validation) to reject malformed tables
/// at catalog-load time instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    pub common: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl RarityWeights {
    pub const fn new(common: f64, rare: f64, epic: f64, legendary: f64) -> Self {
        Self { common, rare, epic, legendary }
    }

    /// Weight for one tier.
    #[inline]
    pub const fn weight(&self, tier: Rarity) -> f64 {
        match tier {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }

    /// Sum of all four weights.
    pub fn sum(&self) -> f64 {
        Rarity::ALL.iter().map(|&t| self.weight(t)).sum()
    }

    /// Map a roll in `[0, 100)` onto a tier.
    ///
    /// Walks the tiers in [`Rarity::ALL`] order, keeping a running cumulative
    /// sum; the first tier whose cumulative sum exceeds the roll wins. Tier
    /// boundaries are half-open: weights `{70, 20, 8, 2}` partition the roll
    /// space into `[0,70)`, `[70,90)`, `[90,98)`, `[98,100)`.
    ///
    /// A roll past the cumulative total (under-sum table) lands on `Common`.
    pub fn tier_for_roll(&self, roll: f64) -> Rarity {
        let mut cumulative = 0.0;
        for tier in Rarity::ALL {
            cumulative += self.weight(tier);
            if roll < cumulative {
                return tier;
            }
        }
        Rarity::Common
    }

    /// Sample one tier: uniform roll in `[0, 100)`, then [`Self::tier_for_roll`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rarity {
        self.tier_for_roll(rng.random_range(0.0..100.0))
    }
}
