use super::{CategoryCounts, InventoryEntry, share_of};
use crate::catalog::{Catalog, Item};
use crate::config::{BlendPolicy, PercentageRange};
use crate::error::{Error, Stage};
use rand::Rng;
use rand::seq::SliceRandom;

fn take_up_to<R: Rng + ?Sized>(catalog: &Catalog, count: usize, rng: &mut R) -> Vec<Item> {
    if count >= catalog.len() {
        return catalog.items().to_vec();
    }
    catalog
        .items()
        .choose_multiple(rng, count)
        .cloned()
        .collect()
}

/// Builds the candidate pool: sampled pets, then consumables, then magic items.
pub fn blend<R: Rng + ?Sized>(
    pets: Vec<Item>,
    magic: &Catalog,
    consumables: &Catalog,
    counts: &CategoryCounts,
    policy: BlendPolicy,
    rng: &mut R,
) -> Vec<Item> {
    let mut pool = pets;
    match policy {
        BlendPolicy::Uniform => {
            pool.extend(take_up_to(consumables, counts.consumables, rng));
            pool.extend(take_up_to(magic, counts.magic_items, rng));
        }
        BlendPolicy::PetsOnly => {
            pool.extend_from_slice(consumables.items());
            pool.extend_from_slice(magic.items());
        }
    }
    pool
}

/// Number of items the shop stocks, as a share of the combined catalog size.
pub fn shop_size<R: Rng + ?Sized>(range: PercentageRange, total_items: usize, rng: &mut R) -> usize {
    share_of(range.sample(rng), total_items)
}

/// Draws `requested` distinct rows of the pool and prices them for display.
///
/// Asking for more rows than the pool holds is an error unless `clamp` is
/// set, in which case the whole pool is drawn.
pub fn draw<R: Rng + ?Sized>(
    pool: &[Item],
    requested: usize,
    clamp: bool,
    rng: &mut R,
) -> Result<Vec<InventoryEntry>, Error> {
    let count = if requested <= pool.len() {
        requested
    } else if clamp {
        log::warn!(
            "Shop size {requested} exceeds the {} candidate items; stocking all of them",
            pool.len()
        );
        pool.len()
    } else {
        return Err(Error::OversizedSample {
            stage: Stage::Composition,
            requested,
            available: pool.len(),
        });
    };
    Ok(pool
        .choose_multiple(rng, count)
        .map(InventoryEntry::from)
        .collect())
}
