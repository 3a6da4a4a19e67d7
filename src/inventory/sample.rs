use super::RarityAllocation;
use crate::catalog::{Catalog, Item};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draws each tier's allotment from the pets of that rarity, with
/// replacement. Tiers with no pets contribute nothing, so the result can be
/// shorter than the allocation.
pub fn sample_pets<R: Rng + ?Sized>(
    pets: &Catalog,
    allocation: &RarityAllocation,
    rng: &mut R,
) -> Vec<Item> {
    let mut sampled = Vec::with_capacity(allocation.total());
    for (rarity, count) in allocation.iter() {
        if count == 0 {
            continue;
        }
        let tier: Vec<&Item> = pets.of_rarity(rarity).collect();
        if tier.is_empty() {
            log::debug!("No {rarity} pets to fill {count} slots");
            continue;
        }
        for _ in 0..count {
            if let Some(pet) = tier.choose(rng) {
                sampled.push((*pet).clone());
            }
        }
    }
    sampled
}
