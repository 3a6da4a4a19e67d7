use crate::catalog::Rarity;
use crate::config::GenerationConfig;
use rand::Rng;

/// `percent` of `total`, rounded half to even.
pub fn share_of(percent: f64, total: usize) -> usize {
    (percent / 100.0 * total as f64).round_ties_even().max(0.0) as usize
}

/// How many items of each category a shop aims for, as shares of the
/// combined catalog size.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CategoryCounts {
    pub pets: usize,
    pub magic_items: usize,
    pub consumables: usize,
}

impl CategoryCounts {
    pub fn draw<R: Rng + ?Sized>(config: &GenerationConfig, total_items: usize, rng: &mut R) -> Self {
        let pet_percent = config.pets.sample_percent(rng);
        let magic_percent = config.magic_items.sample_percent(rng);
        let consumable_percent = config.consumables.sample_percent(rng);
        Self {
            pets: share_of(pet_percent, total_items),
            magic_items: share_of(magic_percent, total_items),
            consumables: share_of(consumable_percent, total_items),
        }
    }
}

/// Pet counts per rarity tier.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct RarityAllocation([usize; 5]);

impl RarityAllocation {
    /// Splits `total` evenly across the tiers. The remainder goes one apiece
    /// to the most common tiers, so the counts always sum to `total`.
    pub fn even(total: usize) -> Self {
        let tiers = Rarity::ALL.len();
        let mut counts = [total / tiers; 5];
        for count in counts.iter_mut().take(total % tiers) {
            *count += 1;
        }
        Self(counts)
    }

    pub fn get(&self, rarity: Rarity) -> usize {
        self.0[rarity.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rarity, usize)> + '_ {
        Rarity::ALL.into_iter().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PercentageRange;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn remainder_goes_to_common_tiers_first() {
        let allocation = RarityAllocation::even(7);
        assert_eq!(allocation.get(Rarity::Common), 2);
        assert_eq!(allocation.get(Rarity::Uncommon), 2);
        assert_eq!(allocation.get(Rarity::Rare), 1);
        assert_eq!(allocation.get(Rarity::VeryRare), 1);
        assert_eq!(allocation.get(Rarity::Legendary), 1);
    }

    #[test]
    fn small_totals_skip_rare_tiers() {
        let allocation = RarityAllocation::even(3);
        let counts: Vec<_> = allocation.iter().map(|(_, count)| count).collect();
        assert_eq!(counts, [1, 1, 1, 0, 0]);
        assert_eq!(RarityAllocation::even(0).total(), 0);
    }

    #[test]
    fn shares_round_half_to_even() {
        assert_eq!(share_of(5.0, 100), 5);
        assert_eq!(share_of(15.0, 100), 15);
        assert_eq!(share_of(5.0, 50), 2);
        assert_eq!(share_of(5.0, 70), 4);
        assert_eq!(share_of(-5.0, 100), 0);
    }

    #[test]
    fn counts_follow_configured_ranges() {
        let config = GenerationConfig {
            pets: PercentageRange::new(10.0, 10.0),
            magic_items: PercentageRange::new(20.0, 20.0),
            consumables: PercentageRange::new(30.0, 30.0),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let counts = CategoryCounts::draw(&config, 200, &mut rng);
        assert_eq!(
            counts,
            CategoryCounts {
                pets: 20,
                magic_items: 40,
                consumables: 60,
            }
        );
    }

    proptest! {
        #[test]
        fn allocation_sums_to_total(total in 0usize..100_000) {
            let allocation = RarityAllocation::even(total);
            prop_assert_eq!(allocation.total(), total);
            let counts: Vec<_> = allocation.iter().map(|(_, count)| count).collect();
            prop_assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
            prop_assert!(counts[0] - counts[4] <= 1);
        }
    }
}
