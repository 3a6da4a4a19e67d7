use crate::config::PercentageRange;
use std::fmt::{self, Display};

/// The step of inventory generation that failed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Stage {
    Adjustment,
    Allocation,
    Sampling,
    Composition,
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Adjustment => "price adjustment".fmt(f),
            Self::Allocation => "allocation".fmt(f),
            Self::Sampling => "sampling".fmt(f),
            Self::Composition => "composition".fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    InvalidRange {
        stage: Stage,
        name: &'static str,
        range: PercentageRange,
    },
    OversizedSample {
        stage: Stage,
        requested: usize,
        available: usize,
    },
    NoNames,
    Csv(csv::Error),
    Io(std::io::Error),
    Toml(toml::de::Error),
    Custom(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidRange { stage, name, range } => write!(
                f,
                "Inventory generation failed during {stage}: the {name} range {range} is not valid."
            ),
            Self::OversizedSample {
                stage,
                requested,
                available,
            } => write!(
                f,
                "Inventory generation failed during {stage}: {requested} items were requested but only {available} are available. Try a smaller shop size range."
            ),
            Self::NoNames => "There are no words to build a store name from.".fmt(f),
            Self::Csv(error) => write!(f, "Failed to read catalog: {error}"),
            Self::Io(error) => write!(f, "I/O error: {error}"),
            Self::Toml(error) => write!(f, "Failed to parse configuration: {error}"),
            Self::Custom(message) => message.fmt(f),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_sample_names_the_stage() {
        let error = Error::OversizedSample {
            stage: Stage::Composition,
            requested: 12,
            available: 4,
        };
        let message = error.to_string();
        assert!(message.contains("composition"));
        assert!(message.contains("12"));
        assert!(message.contains('4'));
    }

    #[test]
    fn invalid_range_names_the_range() {
        let error = Error::InvalidRange {
            stage: Stage::Allocation,
            name: "pet percentage",
            range: PercentageRange::new(5.0, 1.0),
        };
        assert_eq!(
            error.to_string(),
            "Inventory generation failed during allocation: the pet percentage range (5, 1) is not valid."
        );
    }
}
