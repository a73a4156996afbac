//! Catalog model: packs, items, and the load-time validation layer.
//!
//! Pure data. The draw engine in [`crate::draw`] never mutates any of it;
//! validation here is opt-in and exists so a catalog author can reject a
//! broken pack at load time instead of hitting
//! [`PackError::EmptyPool`](crate::PackError::EmptyPool) mid-draw.

use serde::{Deserialize, Serialize};

use crate::error::PackError;
use crate::rarity::Rarity;
use crate::weights::RarityWeights;

/// One obtainable virtual object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable unique identifier, used by callers for dedup and display.
    pub id: String,
    pub name: String,
    pub tier: Rarity,
    /// Presentation passthrough; never consulted by the sampler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One purchasable, drawable bundle: a weight table over tiers plus the
/// pool of items eligible per tier.
///
/// `price` and `description` are informational only. Item pool order is
/// irrelevant to sampling and a tier may hold zero items (the draw falls
/// back to the common pool in that case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: u64,
    pub weights: RarityWeights,
    pub items: Vec<CatalogItem>,
}

impl PackDefinition {
    /// Items of one tier, in pool order.
    pub fn pool(&self, tier: Rarity) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.tier == tier)
    }

    /// Strict load-time check: weights must sum to 100 and the common
    /// fallback pool must be non-empty.
    ///
    /// Drawing stays total without this (an under-sum table degrades to
    /// common), but a pack that fails here can still error at draw time,
    /// so run it once when the catalog is loaded.
    pub fn validate(&self) -> Result<(), PackError> {
        let sum = self.weights.sum();
        if (sum - 100.0).abs() > 1e-9 {
            return Err(PackError::WeightSum { pack: self.id.clone(), sum });
        }
        if self.pool(Rarity::Common).next().is_none() {
            return Err(PackError::NoCommonItems { pack: self.id.clone() });
        }
        Ok(())
    }
}

/// Output of one draw: the item plus which pack it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnItem {
    pub id: String,
    pub name: String,
    pub tier: Rarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub pack_id: String,
    pub pack_name: String,
}

impl DrawnItem {
    pub(crate) fn from_pool(item: &CatalogItem, pack: &PackDefinition) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            tier: item.tier,
            image: item.image.clone(),
            pack_id: pack.id.clone(),
            pack_name: pack.name.clone(),
        }
    }
}

/// A set of pack definitions, typically deserialized from configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub packs: Vec<PackDefinition>,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, PackError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a catalog from any reader (a config file, usually).
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, PackError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Look a pack up by id.
    pub fn get(&self, pack_id: &str) -> Option<&PackDefinition> {
        self.packs.iter().find(|p| p.id == pack_id)
    }

    /// Validate every pack, failing on the first offender.
    pub fn validate(&self) -> Result<(), PackError> {
        for pack in &self.packs {
            pack.validate()?;
        }
        Ok(())
    }
}
