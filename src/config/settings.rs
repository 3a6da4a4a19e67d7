use super::GenerationConfig;
use crate::catalog::{Catalog, CatalogKind, Catalogs};
use crate::error::Error;
use crate::names::TavernNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct Config {
    pub catalogs: CatalogPaths,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub names: TavernNames,
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Reads a configuration file. Relative catalog paths are resolved against
    /// the directory containing the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let mut config = Self::from_toml(&std::fs::read_to_string(path)?)?;
        if let Some(dir) = path.parent() {
            config.catalogs = config.catalogs.relative_to(dir);
        }
        Ok(config)
    }
}

#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct CatalogPaths {
    pub pets: PathBuf,
    pub magic: PathBuf,
    pub consumables: PathBuf,
}

impl CatalogPaths {
    fn relative_to(self, dir: &Path) -> Self {
        Self {
            pets: dir.join(self.pets),
            magic: dir.join(self.magic),
            consumables: dir.join(self.consumables),
        }
    }

    pub fn load(&self) -> Result<Catalogs, Error> {
        Ok(Catalogs {
            pets: Catalog::load(&self.pets, CatalogKind::Pets)?,
            magic: Catalog::load(&self.magic, CatalogKind::Magic)?,
            consumables: Catalog::load(&self.consumables, CatalogKind::Consumables)?,
        })
    }
}
