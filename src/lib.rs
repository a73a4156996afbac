//! # packdraw
//!
//! Weighted pack drawing: turn a pack definition (a rarity weight table plus
//! an item pool) into randomly tiered items.
//!
//! A draw is two samples: pick a rarity tier by walking cumulative percentage
//! intervals over `[0, 100)` in `COMMON → RARE → EPIC → LEGENDARY` order,
//! then pick uniformly among the pool's items of that tier. A sampled tier
//! with no items falls back to the common pool; a pack with no common items
//! at all fails with [`PackError::EmptyPool`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use packdraw::{CatalogItem, PackDefinition, Rarity, RarityWeights};
//!
//! # fn main() -> Result<(), packdraw::PackError> {
//! let pack = PackDefinition {
//!     id: "pack_nature_basic".into(),
//!     name: "Nature Basic".into(),
//!     description: "Starter bundle".into(),
//!     price: 10,
//!     weights: RarityWeights::new(70.0, 20.0, 8.0, 2.0),
//!     items: vec![
//!         CatalogItem { id: "leaf".into(), name: "Leaf".into(), tier: Rarity::Common, image: None },
//!         CatalogItem { id: "sequoia".into(), name: "Sequoia".into(), tier: Rarity::Legendary, image: None },
//!     ],
//! };
//!
//! let mut rng = rand::rng();
//! let drawn = pack.draw(&mut rng)?;
//! println!("you got: {} ({})", drawn.name, drawn.tier);
//! # Ok(()) }
//! ```
//!
//! ## Self-test
//!
//! [`PackDefinition::simulate`] runs many draws and tallies outcomes per
//! tier, so callers can display empirical vs configured frequencies:
//!
//! ```rust,ignore
//! let tally = pack.simulate(10_000, &mut rng)?;
//! for (tier, count) in tally.iter() {
//!     println!("{tier}: {count} ({:.2}%)", tally.observed_pct(tier));
//! }
//! ```
//!
//! ## Catalogs
//!
//! Packs usually come from configuration; [`Catalog`] deserializes a JSON
//! bundle of them (serde) and [`Catalog::validate`] rejects broken entries
//! (weights not summing to 100, no common fallback items) at load time so
//! `EmptyPool` never fires mid-draw.
//!
//! ## Gotchas
//! * Weight tables that don't sum to 100 never error at draw time: an
//!   under-sum table sends the uncovered tail of the roll space to
//!   `Common`, an over-sum table leaves the excess unreachable. Use
//!   `validate()` if you want strictness.
//! * The engine holds no state between draws and never mutates the pack;
//!   pass your own `rand::Rng` (a seeded one makes tests deterministic).

mod catalog;
mod draw;
mod error;
mod rarity;
mod weights;

pub use catalog::{Catalog, CatalogItem, DrawnItem, PackDefinition};
pub use draw::TierTally;
pub use error::PackError;
pub use rarity::Rarity;
pub use weights::RarityWeights;
