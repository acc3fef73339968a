//! The species catalog: loading, validation and lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use super::types::{SpeciesDefinition, SpeciesId};
use crate::core::constants::DEPTH_LEVELS;

const DEFAULT_SPECIES_DATA: &str = include_str!("../../data/species.json");

/// Errors raised when species data violates catalog invariants.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("species data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("species id {0} is defined more than once")]
    DuplicateId(SpeciesId),
    #[error("species {id}: depth band {min}..{max} must be ordered and within 0..=10")]
    InvalidDepthBand { id: SpeciesId, min: u8, max: u8 },
    #[error("species {id}: {field} range {min}..{max} is inverted")]
    InvertedRange {
        id: SpeciesId,
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("species {id}: take radius {take} exceeds detect radius {detect}")]
    TakeExceedsDetect { id: SpeciesId, take: f64, detect: f64 },
    #[error("species {id}: speed {speed} must not be negative")]
    NegativeSpeed { id: SpeciesId, speed: f64 },
}

/// Read-only table of every species that can be stocked in a pond.
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    species: BTreeMap<SpeciesId, Arc<SpeciesDefinition>>,
}

impl SpeciesCatalog {
    /// Build a catalog from definitions, rejecting anything inconsistent.
    pub fn new(definitions: Vec<SpeciesDefinition>) -> Result<Self, CatalogError> {
        let mut species = BTreeMap::new();
        for def in definitions {
            validate(&def)?;
            let id = def.id;
            if species.insert(id, Arc::new(def)).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { species })
    }

    /// Parse a JSON array of species definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<SpeciesDefinition> = serde_json::from_str(json)?;
        Self::new(definitions)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_json(DEFAULT_SPECIES_DATA).unwrap_or_else(|err| {
            log::error!("built-in species data rejected: {err}");
            Self::default()
        })
    }

    pub fn get(&self, id: SpeciesId) -> Option<&SpeciesDefinition> {
        self.species.get(&id).map(Arc::as_ref)
    }

    /// Shared handle to a definition, for fish that outlive the borrow.
    pub fn shared(&self, id: SpeciesId) -> Option<Arc<SpeciesDefinition>> {
        self.species.get(&id).cloned()
    }

    pub fn contains(&self, id: SpeciesId) -> bool {
        self.species.contains_key(&id)
    }

    /// All species in id order.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesDefinition> + Clone {
        self.species.values().map(Arc::as_ref)
    }

    /// Species included in aggregate statistics.
    pub fn stat_visible(&self) -> impl Iterator<Item = &SpeciesDefinition> {
        self.species
            .values()
            .map(Arc::as_ref)
            .filter(|s| s.stat_visible)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

fn validate(def: &SpeciesDefinition) -> Result<(), CatalogError> {
    let id = def.id;
    if def.depth.min > def.depth.max || def.depth.max > DEPTH_LEVELS {
        return Err(CatalogError::InvalidDepthBand {
            id,
            min: def.depth.min,
            max: def.depth.max,
        });
    }
    for (field, range) in [("length", def.length), ("weight", def.weight)] {
        if range.min > range.max {
            return Err(CatalogError::InvertedRange {
                id,
                field,
                min: range.min,
                max: range.max,
            });
        }
    }
    if def.strike.take > def.strike.detect {
        return Err(CatalogError::TakeExceedsDetect {
            id,
            take: def.strike.take,
            detect: def.strike.detect,
        });
    }
    if def.speed < 0.0 {
        return Err(CatalogError::NegativeSpeed {
            id,
            speed: def.speed,
        });
    }
    Ok(())
}
