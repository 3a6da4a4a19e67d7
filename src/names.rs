//! Store names. Callers treat the generator as a black box and fall back to
//! a placeholder title when it fails.

use crate::error::Error;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Title used when a store name cannot be generated.
pub const FALLBACK_NAME: &str = "Error in name generation";

const SHOP_WORDS: &[&str] = &["Emporium", "Curios", "Trading Post", "Sundries", "Wares"];

pub trait NameGenerator {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, Error>;
}

/// Builds names like "The Gilded Griffon", "Mirela's Curios" or
/// "The Lantern and Anvil" from word lists.
#[derive(Clone, Deserialize, Serialize, Debug)]
#[serde(default)]
pub struct TavernNames {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
    pub owners: Vec<String>,
}

impl NameGenerator for TavernNames {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, Error> {
        let noun = self.nouns.choose(rng).ok_or(Error::NoNames)?;
        let style = rng.gen_range(0..3);
        let name = match (style, self.owners.choose(rng), self.adjectives.choose(rng)) {
            (0, Some(owner), _) => {
                let word = SHOP_WORDS.choose(rng).copied().unwrap_or("Wares");
                format!("{owner}'s {word}")
            }
            (0 | 1, _, Some(adjective)) => format!("The {adjective} {noun}"),
            _ => match self.nouns.choose(rng) {
                Some(other) if other != noun => format!("The {noun} and {other}"),
                _ => format!("The {noun}"),
            },
        };
        Ok(name)
    }
}

impl Default for TavernNames {
    fn default() -> Self {
        let words = |words: &[&str]| -> Vec<String> {
            words.iter().map(|word| (*word).to_owned()).collect()
        };
        Self {
            adjectives: words(&[
                "Gilded", "Rusty", "Wandering", "Sleeping", "Crimson", "Drunken", "Silver",
                "Crooked", "Laughing", "Hollow",
            ]),
            nouns: words(&[
                "Griffon", "Lantern", "Anvil", "Dragon", "Tankard", "Owlbear", "Cauldron",
                "Stag", "Mimic", "Wyvern",
            ]),
            owners: words(&[
                "Mirela", "Borin", "Tamsin", "Old Gregor", "Hestia", "Quill", "Ysolde",
            ]),
        }
    }
}

/// Generates a store title, logging any failure and using [`FALLBACK_NAME`].
pub fn store_title<G: NameGenerator, R: Rng + ?Sized>(generator: &G, rng: &mut R) -> String {
    match generator.generate(rng) {
        Ok(name) => name,
        Err(error) => {
            log::error!("An error occurred generating a store name: {error}");
            FALLBACK_NAME.to_owned()
        }
    }
}
