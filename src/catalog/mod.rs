//! Item catalogs the shop stocks from.

use serde::Serialize;
use std::fmt::{self, Display};

mod loader;
mod rarity;

pub use rarity::{Rarity, UnknownRarity};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Debug)]
pub enum CatalogKind {
    Pets,
    Magic,
    Consumables,
}

impl Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pets => "pets".fmt(f),
            Self::Magic => "magic items".fmt(f),
            Self::Consumables => "consumables".fmt(f),
        }
    }
}

/// A single catalog row. Prices are in copper.
///
/// Rows are not unique by name; two items may share a name and differ in
/// price or rarity.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct Item {
    pub name: String,
    pub rarity: Option<Rarity>,
    pub price: Option<f64>,
    pub adjusted_price: Option<f64>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            rarity: None,
            price,
            adjusted_price: None,
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    pub kind: CatalogKind,
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, items: Vec<Item>) -> Self {
        Self { kind, items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn of_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.rarity == Some(rarity))
    }
}

/// The three catalogs a shop draws from.
#[derive(Clone, Debug)]
pub struct Catalogs {
    pub pets: Catalog,
    pub magic: Catalog,
    pub consumables: Catalog,
}

impl Catalogs {
    /// Combined number of rows; every percentage is taken of this.
    pub fn total_len(&self) -> usize {
        self.pets.len() + self.magic.len() + self.consumables.len()
    }
}
