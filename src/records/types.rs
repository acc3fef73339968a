//! Per-species catch records and catch reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::equipment::ItemId;
use crate::species::SpeciesId;

/// Lifetime statistics for one species. Every field only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FishRecord {
    pub caught: u32,
    pub best_length: f64,
    pub best_weight: f64,
}

/// Record table keyed by species id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FishRecords {
    #[serde(default)]
    pub(super) entries: BTreeMap<SpeciesId, FishRecord>,
}

/// Which best-of value to rank species by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMetric {
    Length,
    Weight,
}

impl RecordMetric {
    pub fn of(&self, record: &FishRecord) -> f64 {
        match self {
            Self::Length => record.best_length,
            Self::Weight => record.best_weight,
        }
    }
}

/// What the victory screen says about a catch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatchPresentation {
    /// Nothing to name: no reward item and no custom text.
    Generic,
    /// The species' own text.
    Custom(String),
    /// The reward item's name.
    Item { item: ItemId, name: String },
}

/// Everything known about one landed catch.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchReport {
    pub species: SpeciesId,
    pub species_name: String,
    pub slot: usize,
    pub length: f64,
    pub weight: f64,
    /// Whether length/weight are meant to be shown.
    pub stat_visible: bool,
    pub presentation: CatchPresentation,
    pub new_length_record: bool,
    pub new_weight_record: bool,
    /// Granted item, 0 when none.
    pub reward_item: ItemId,
}

/// Aggregate numbers for a statistics screen.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_caught: u32,
    pub distinct_caught: usize,
    pub visible_species: usize,
    pub completion: f64,
    pub longest: Option<(SpeciesId, f64)>,
    pub heaviest: Option<(SpeciesId, f64)>,
}
