use crate::error::{Error, Stage};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A closed interval of percentages, written in configuration as `[low, high]`.
///
/// Nothing stops `low` from exceeding `high`; call [`PercentageRange::validate`]
/// before drawing from a range that came from user input.
#[derive(Copy, Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PercentageRange {
    pub low: f64,
    pub high: f64,
}

impl PercentageRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low <= self.high
    }

    pub fn validate(&self, stage: Stage, name: &'static str) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                stage,
                name,
                range: *self,
            })
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Draws uniformly from the closed interval.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..=self.high)
    }

    /// Draws a whole percentage when both bounds are whole numbers, and a
    /// continuous one otherwise.
    pub fn sample_percent<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.low.fract() == 0.0 && self.high.fract() == 0.0 {
            rng.gen_range(self.low as i64..=self.high as i64) as f64
        } else {
            self.sample(rng)
        }
    }
}

impl From<(f64, f64)> for PercentageRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<PercentageRange> for (f64, f64) {
    fn from(range: PercentageRange) -> Self {
        (range.low, range.high)
    }
}

impl Display for PercentageRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
