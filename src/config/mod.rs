mod generation;
mod range;
mod settings;

pub use generation::{BlendPolicy, GenerationConfig};
pub use range::PercentageRange;
pub use settings::{CatalogPaths, Config};
