/// Shown in place of a price for items the catalog does not price.
pub const PRICE_NOT_AVAILABLE: &str = "Price not available";

const PLATINUM: f64 = 1000.0;
const GOLD: f64 = 100.0;
const SILVER: f64 = 10.0;

/// Breaks a copper amount into `"1 platinum, 2 gold, 3 silver, 4 copper"`,
/// leaving out zero denominations.
///
/// The copper remainder is rounded half to even and is not carried into
/// silver, so `19.6` reads `"1 silver, 10 copper"`. Amounts that round to
/// nothing format as the empty string.
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price.filter(|price| price.is_finite()) else {
        return PRICE_NOT_AVAILABLE.to_owned();
    };

    let platinum = (price / PLATINUM).floor();
    let gold = (price.rem_euclid(PLATINUM) / GOLD).floor();
    let silver = (price.rem_euclid(GOLD) / SILVER).floor();
    let copper = price.rem_euclid(SILVER).round_ties_even();

    [
        (platinum, "platinum"),
        (gold, "gold"),
        (silver, "silver"),
        (copper, "copper"),
    ]
    .into_iter()
    .filter(|(amount, _)| *amount != 0.0)
    .map(|(amount, unit)| format!("{} {unit}", amount as i64))
    .collect::<Vec<_>>()
    .join(", ")
}
