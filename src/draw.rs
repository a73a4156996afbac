//! The draw engine: weighted tier sampling, uniform item pick, common
//! fallback, and the batch statistical self-test.

use rand::Rng;

use crate::catalog::{CatalogItem, DrawnItem, PackDefinition};
use crate::error::PackError;
use crate::rarity::Rarity;

/// Per-tier draw counts from [`PackDefinition::simulate`].
///
/// Backed by a fixed array indexed by [`Rarity::index`]; no tier can be
/// missing from a tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierTally {
    counts: [u64; 4],
}

impl TierTally {
    #[inline]
    pub fn record(&mut self, tier: Rarity) {
        self.counts[tier.index()] += 1;
    }

    #[inline]
    pub fn count(&self, tier: Rarity) -> u64 {
        self.counts[tier.index()]
    }

    /// Total draws recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Observed frequency of a tier as a percentage of all draws, for
    /// empirical-vs-configured displays. Zero draws yields zero.
    pub fn observed_pct(&self, tier: Rarity) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(tier) as f64 * 100.0 / total as f64
    }

    /// `(tier, count)` pairs in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, u64)> + '_ {
        Rarity::ALL.into_iter().map(|t| (t, self.count(t)))
    }
}

/// Uniform pick over a tier's pool; `None` when the tier has no items.
fn pick_uniform<'a, R: Rng + ?Sized>(
    pack: &'a PackDefinition,
    tier: Rarity,
    rng: &mut R,
) -> Option<&'a CatalogItem> {
    let pool: Vec<&CatalogItem> = pack.pool(tier).collect();
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}

impl PackDefinition {
    /// Draw one item from this pack.
    ///
    /// Samples a tier from the weight table, then picks uniformly among that
    /// tier's items. A sampled tier with no items falls back to the common
    /// pool; if the common pool is empty too the pack is misconfigured and
    /// the draw fails rather than invent an item.
    ///
    /// The pack is never mutated; the only side effect is consuming entropy
    /// from `rng`.
    ///
    /// # Errors
    /// [`PackError::EmptyPool`] when both the sampled tier and the common
    /// fallback pool are empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DrawnItem, PackError> {
        let tier = self.weights.sample(rng);
        let item = match pick_uniform(self, tier, rng) {
            Some(item) => item,
            None => pick_uniform(self, Rarity::Common, rng)
                .ok_or_else(|| PackError::EmptyPool { pack: self.id.clone() })?,
        };
        Ok(DrawnItem::from_pool(item, self))
    }

    /// Run `trials` independent draws and tally results by tier.
    ///
    /// No statistical judgment happens here; callers compare the tally
    /// against the configured weights (see [`TierTally::observed_pct`]).
    ///
    /// # Errors
    /// Propagates the first [`PackError::EmptyPool`] immediately, with no
    /// partial tally.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        trials: usize,
        rng: &mut R,
    ) -> Result<TierTally, PackError> {
        let mut tally = TierTally::default();
        for _ in 0..trials {
            tally.record(self.draw(rng)?.tier);
        }
        Ok(tally)
    }
}
