use super::{Catalog, CatalogKind, Item, Rarity};
use crate::error::Error;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

struct Columns {
    name: usize,
    price: Option<usize>,
    rarity: Option<usize>,
}

impl Columns {
    fn find(headers: &StringRecord, kind: CatalogKind) -> Result<Self, Error> {
        let position = |column: &str| headers.iter().position(|header| header == column);
        let name = position("Name")
            .ok_or_else(|| Error::Custom(format!("The {kind} catalog has no Name column.")))?;
        let rarity = position("Rarity");
        if kind == CatalogKind::Pets && rarity.is_none() {
            return Err(Error::Custom(format!(
                "The {kind} catalog has no Rarity column."
            )));
        }
        let price = position("Price");
        if price.is_none() {
            log::warn!("The {kind} catalog has no Price column; every price is unavailable");
        }
        Ok(Self {
            name,
            price,
            rarity,
        })
    }
}

fn parse_price(raw: &str, name: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Some(price),
        _ => {
            log::warn!("Price `{raw}` of {name} is not a valid price; treating it as unavailable");
            None
        }
    }
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>, kind: CatalogKind) -> Result<Self, Error> {
        let path = path.as_ref();
        log::debug!("Loading {kind} catalog from {}", path.display());
        let file = std::fs::File::open(path).map_err(|err| {
            Error::Custom(format!(
                "Failed to open {kind} catalog {}: {err}",
                path.display()
            ))
        })?;
        Self::from_reader(file, kind)
    }

    /// Reads a headed CSV table. Rows without a name are dropped; prices that
    /// are not non-negative numbers become unavailable.
    pub fn from_reader(reader: impl Read, kind: CatalogKind) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let columns = Columns::find(reader.headers()?, kind)?;

        let mut items = vec![];
        let mut dropped = 0;
        for record in reader.records() {
            let record = record?;
            let name = record.get(columns.name).unwrap_or_default();
            if name.is_empty() {
                dropped += 1;
                continue;
            }
            let price = columns
                .price
                .and_then(|i| record.get(i))
                .and_then(|raw| parse_price(raw, name));
            let rarity = columns
                .rarity
                .and_then(|i| record.get(i))
                .filter(|raw| !raw.is_empty())
                .and_then(|raw| match raw.parse::<Rarity>() {
                    Ok(rarity) => Some(rarity),
                    Err(error) => {
                        log::warn!("{name}: {error}");
                        None
                    }
                });
            items.push(Item {
                name: name.to_owned(),
                rarity,
                price,
                adjusted_price: None,
            });
        }

        if dropped > 0 {
            log::warn!("Dropped {dropped} unnamed rows from the {kind} catalog");
        }
        log::debug!("{} {kind} loaded", items.len());
        Ok(Self::new(kind, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETS: &str = "\
Name,Rarity,Price,Notes
Mule,Common,800,
Warhorse,Uncommon,40000,
,Rare,100,no name
Griffon,very rare,not for sale,
Owl,Common,-3,
Phoenix,Mythic,90000,
Drake,Rare,,
";

    #[test]
    fn coerces_prices_and_drops_unnamed_rows() {
        let catalog = Catalog::from_reader(PETS.as_bytes(), CatalogKind::Pets).unwrap();
        let names: Vec<_> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mule", "Warhorse", "Griffon", "Owl", "Phoenix", "Drake"]
        );

        let items = catalog.items();
        assert_eq!(items[0].price, Some(800.0));
        assert_eq!(items[0].rarity, Some(Rarity::Common));
        assert_eq!(items[2].price, None);
        assert_eq!(items[2].rarity, Some(Rarity::VeryRare));
        assert_eq!(items[3].price, None);
        assert_eq!(items[4].rarity, None);
        assert_eq!(items[5].price, None);
        assert!(items.iter().all(|item| item.adjusted_price.is_none()));
    }

    #[test]
    fn pets_require_rarity_column() {
        let result = Catalog::from_reader("Name,Price\nMule,800\n".as_bytes(), CatalogKind::Pets);
        assert!(matches!(result, Err(Error::Custom(..))));
    }

    #[test]
    fn other_catalogs_ignore_rarity() {
        let catalog = Catalog::from_reader(
            "Name,Price\nPotion of Healing,50\nRope,1.5\n".as_bytes(),
            CatalogKind::Consumables,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[1].price, Some(1.5));
        assert!(catalog.items().iter().all(|item| item.rarity.is_none()));
    }

    #[test]
    fn name_column_is_required() {
        let result = Catalog::from_reader("Title,Price\nRope,1\n".as_bytes(), CatalogKind::Magic);
        assert!(result.is_err());
    }
}
