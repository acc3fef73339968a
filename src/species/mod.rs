//! Species catalog: static definitions shared by every other module.

pub mod catalog;
pub mod types;

pub use catalog::{CatalogError, SpeciesCatalog};
pub use types::{
    DepthBand, MovementType, SpawnX, SpeciesDefinition, SpeciesId, StatRange, StrikeRadius,
};
