use crate::catalog::{Catalog, Item};
use crate::config::PercentageRange;
use rand::Rng;

/// Moves `price` by a percentage drawn from `range`.
pub fn adjust_price<R: Rng + ?Sized>(price: f64, range: PercentageRange, rng: &mut R) -> f64 {
    let percent = range.sample(rng);
    price * (1.0 + percent / 100.0)
}

/// Returns a copy of `catalog` with every priced item given its own adjusted
/// price. Unpriced items stay unpriced.
pub fn adjust_prices<R: Rng + ?Sized>(
    catalog: &Catalog,
    range: PercentageRange,
    rng: &mut R,
) -> Catalog {
    let mut items = Vec::with_capacity(catalog.len());
    for item in catalog.items() {
        let adjusted_price = match item.price {
            Some(price) => Some(adjust_price(price, range, rng)),
            None => None,
        };
        items.push(Item {
            adjusted_price,
            ..item.clone()
        });
    }
    Catalog::new(catalog.kind, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKind;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Catalog {
        Catalog::new(
            CatalogKind::Magic,
            vec![
                Item::new("Bag of Holding", Some(4000.0)),
                Item::new("Deck of Many Things", None),
                Item::new("Cloak of Elvenkind", Some(5000.0)),
            ],
        )
    }

    #[test]
    fn unpriced_items_stay_unpriced() {
        let mut rng = StdRng::seed_from_u64(1);
        let adjusted = adjust_prices(&catalog(), PercentageRange::new(-5.0, 5.0), &mut rng);
        assert_eq!(adjusted.items()[1].adjusted_price, None);
        assert!(adjusted.items()[0].adjusted_price.is_some());
        assert!(adjusted.items()[2].adjusted_price.is_some());
    }

    #[test]
    fn original_prices_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = catalog();
        let adjusted = adjust_prices(&source, PercentageRange::new(50.0, 60.0), &mut rng);
        for (before, after) in source.items().iter().zip(adjusted.items()) {
            assert_eq!(before.price, after.price);
            assert_eq!(before.name, after.name);
        }
        assert!(source.items().iter().all(|item| item.adjusted_price.is_none()));
    }

    #[test]
    fn each_item_draws_its_own_adjustment() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = (0..20).map(|i| Item::new(format!("Rope {i}"), Some(100.0))).collect();
        let adjusted = adjust_prices(
            &Catalog::new(CatalogKind::Consumables, items),
            PercentageRange::new(-50.0, 50.0),
            &mut rng,
        );
        let first = adjusted.items()[0].adjusted_price;
        assert!(adjusted.items().iter().any(|item| item.adjusted_price != first));
    }

    #[test]
    fn degenerate_range_is_exact() {
        let mut rng = StdRng::seed_from_u64(3);
        let price = adjust_price(200.0, PercentageRange::new(10.0, 10.0), &mut rng);
        assert!((price - 220.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn adjusted_price_stays_within_bounds(
            price in 0.0f64..1_000_000.0,
            low in -100.0f64..100.0,
            width in 0.0f64..100.0,
            seed in any::<u64>(),
        ) {
            let high = low + width;
            let mut rng = StdRng::seed_from_u64(seed);
            let adjusted = adjust_price(price, PercentageRange::new(low, high), &mut rng);
            let tolerance = 1e-9 * price.max(1.0);
            prop_assert!(adjusted >= price * (1.0 + low / 100.0) - tolerance);
            prop_assert!(adjusted <= price * (1.0 + high / 100.0) + tolerance);
        }
    }
}
