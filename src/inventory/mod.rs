//! Rolling a shop's stock from the catalogs.
//!
//! Generation runs in a fixed order, drawing every random number from the
//! caller's generator so that a seeded generator reproduces a shop exactly:
//!
//! 1. each catalog's prices are jittered ([`adjust_prices`]),
//! 2. category counts are drawn and pets split evenly across rarity tiers
//!    ([`CategoryCounts`], [`RarityAllocation`]),
//! 3. pets are drawn per tier with replacement ([`sample_pets`]),
//! 4. the candidate pool is blended and the final stock drawn without
//!    replacement ([`blend`], [`draw`]).

use crate::catalog::{Catalogs, Item};
use crate::config::GenerationConfig;
use crate::error::Error;
use rand::Rng;
use serde::Serialize;

mod adjust;
mod allocate;
mod compose;
mod price;
mod sample;

pub use adjust::{adjust_price, adjust_prices};
pub use allocate::{CategoryCounts, RarityAllocation, share_of};
pub use compose::{blend, draw, shop_size};
pub use price::{PRICE_NOT_AVAILABLE, format_price};
pub use sample::sample_pets;

/// One line of a shop's stock.
#[derive(Clone, Eq, PartialEq, Serialize, Debug)]
pub struct InventoryEntry {
    pub name: String,
    pub price: String,
}

impl From<&Item> for InventoryEntry {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: format_price(item.adjusted_price),
        }
    }
}

/// Rolls a fresh inventory. Nothing is returned unless every stage succeeds.
pub fn generate<R: Rng + ?Sized>(
    catalogs: &Catalogs,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<InventoryEntry>, Error> {
    config.validate()?;
    let total_items = catalogs.total_len();

    let pets = adjust_prices(&catalogs.pets, config.price_adjustment, rng);
    let magic = adjust_prices(&catalogs.magic, config.price_adjustment, rng);
    let consumables = adjust_prices(&catalogs.consumables, config.price_adjustment, rng);

    let counts = CategoryCounts::draw(config, total_items, rng);
    let allocation = RarityAllocation::even(counts.pets);
    log::debug!("Category counts {counts:?}, pet allocation {allocation:?}");

    let sampled = sample_pets(&pets, &allocation, rng);
    if sampled.len() < counts.pets {
        log::debug!(
            "Only {} of {} pets stocked; some rarity tiers are empty",
            sampled.len(),
            counts.pets
        );
    }

    let pool = blend(sampled, &magic, &consumables, &counts, config.blend, rng);
    let requested = shop_size(config.shop_size, total_items, rng);
    log::debug!("Drawing {requested} of {} candidate items", pool.len());
    draw(&pool, requested, config.clamp_oversized, rng)
}
