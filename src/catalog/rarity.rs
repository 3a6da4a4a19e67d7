use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Debug)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
}

impl Rarity {
    /// Every tier, most common first. Allocation remainders follow this order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::VeryRare,
        Rarity::Legendary,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Common => "Common".fmt(f),
            Self::Uncommon => "Uncommon".fmt(f),
            Self::Rare => "Rare".fmt(f),
            Self::VeryRare => "Very Rare".fmt(f),
            Self::Legendary => "Legendary".fmt(f),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownRarity(pub String);

impl Display for UnknownRarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown rarity `{}`", self.0)
    }
}

impl std::error::Error for UnknownRarity {}

impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "common" => Ok(Self::Common),
            "uncommon" => Ok(Self::Uncommon),
            "rare" => Ok(Self::Rare),
            "veryrare" => Ok(Self::VeryRare),
            "legendary" => Ok(Self::Legendary),
            _ => Err(UnknownRarity(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_spellings() {
        assert_eq!("Common".parse(), Ok(Rarity::Common));
        assert_eq!("Very Rare".parse(), Ok(Rarity::VeryRare));
        assert_eq!(" very_rare ".parse(), Ok(Rarity::VeryRare));
        assert_eq!("LEGENDARY".parse(), Ok(Rarity::Legendary));
        assert!("Artifact".parse::<Rarity>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.to_string().parse(), Ok(rarity));
        }
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, rarity) in Rarity::ALL.into_iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
    }
}
