//! Random stock for a fantasy shop, rolled from pet, magic item and
//! consumable catalogs.

pub mod catalog;
pub mod config;
mod error;
pub mod export;
pub mod inventory;
pub mod names;

pub use error::{Error, Stage};
pub use inventory::{InventoryEntry, generate};
