use super::PercentageRange;
use crate::error::{Error, Stage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// How magic items and consumables enter the candidate pool.
#[derive(Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum BlendPolicy {
    /// Every category is capped to the count drawn from its percentage range.
    #[default]
    Uniform,
    /// Only pets are capped; magic items and consumables are included in full.
    PetsOnly,
}

/// The knobs of a single inventory generation request.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct GenerationConfig {
    pub pets: PercentageRange,
    pub magic_items: PercentageRange,
    pub consumables: PercentageRange,
    pub price_adjustment: PercentageRange,
    pub shop_size: PercentageRange,
    pub blend: BlendPolicy,
    /// Shrink an oversized final draw to the pool instead of failing.
    pub clamp_oversized: bool,
    pub seed: Option<u64>,
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), Error> {
        self.price_adjustment
            .validate(Stage::Adjustment, "price adjustment")?;
        if self.price_adjustment.low < -100.0 {
            return Err(Error::InvalidRange {
                stage: Stage::Adjustment,
                name: "price adjustment",
                range: self.price_adjustment,
            });
        }
        self.pets.validate(Stage::Allocation, "pet percentage")?;
        self.magic_items
            .validate(Stage::Allocation, "magic item percentage")?;
        self.consumables
            .validate(Stage::Allocation, "consumable percentage")?;
        self.shop_size.validate(Stage::Composition, "shop size")?;
        Ok(())
    }

    /// A generator for one request, seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            pets: PercentageRange::new(1.0, 5.0),
            magic_items: PercentageRange::new(10.0, 20.0),
            consumables: PercentageRange::new(75.0, 85.0),
            price_adjustment: PercentageRange::new(-5.0, 5.0),
            shop_size: PercentageRange::new(5.0, 15.0),
            blend: BlendPolicy::Uniform,
            clamp_oversized: false,
            seed: None,
        }
    }
}
