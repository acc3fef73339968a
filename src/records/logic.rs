//! Recording catches and answering statistics queries.

use super::types::{CatchPresentation, FishRecord, FishRecords, RecordMetric, StatsSummary};
use crate::core::constants::GENERIC_CATCH_TEXT;
use crate::equipment::ItemCatalog;
use crate::species::{SpeciesCatalog, SpeciesDefinition, SpeciesId};

impl FishRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, species: SpeciesId) -> Option<&FishRecord> {
        self.entries.get(&species)
    }

    pub fn caught(&self, species: SpeciesId) -> u32 {
        self.get(species).map_or(0, |r| r.caught)
    }

    pub fn best_length(&self, species: SpeciesId) -> f64 {
        self.get(species).map_or(0.0, |r| r.best_length)
    }

    pub fn best_weight(&self, species: SpeciesId) -> f64 {
        self.get(species).map_or(0.0, |r| r.best_weight)
    }

    /// Count a catch and raise the bests. Returns whether length and weight
    /// each set a new record.
    pub fn record_catch(&mut self, species: SpeciesId, length: f64, weight: f64) -> (bool, bool) {
        let record = self.entries.entry(species).or_default();
        record.caught = record.caught.saturating_add(1);
        let new_length = length > record.best_length;
        let new_weight = weight > record.best_weight;
        if new_length {
            record.best_length = length;
        }
        if new_weight {
            record.best_weight = weight;
        }
        (new_length, new_weight)
    }

    /// Catches summed over stat-visible species.
    pub fn total_caught(&self, catalog: &SpeciesCatalog) -> u32 {
        catalog
            .stat_visible()
            .map(|s| self.caught(s.id))
            .fold(0u32, u32::saturating_add)
    }

    /// Stat-visible species caught at least once.
    pub fn distinct_caught(&self, catalog: &SpeciesCatalog) -> usize {
        catalog
            .stat_visible()
            .filter(|s| self.caught(s.id) > 0)
            .count()
    }

    /// Fraction of stat-visible species caught at least once; 0 with none visible.
    pub fn completion_ratio(&self, catalog: &SpeciesCatalog) -> f64 {
        let visible = catalog.stat_visible().count();
        if visible == 0 {
            return 0.0;
        }
        self.distinct_caught(catalog) as f64 / visible as f64
    }

    /// Stat-visible species holding the best value for `metric`, with that value.
    /// Ties go to the lowest species id.
    pub fn record_holder(
        &self,
        metric: RecordMetric,
        catalog: &SpeciesCatalog,
    ) -> Option<(SpeciesId, f64)> {
        let mut best: Option<(SpeciesId, f64)> = None;
        for species in catalog.stat_visible() {
            let Some(record) = self.get(species.id).filter(|r| r.caught > 0) else {
                continue;
            };
            let value = metric.of(record);
            if best.map_or(true, |(_, current)| value > current) {
                best = Some((species.id, value));
            }
        }
        best
    }

    pub fn stats_summary(&self, catalog: &SpeciesCatalog) -> StatsSummary {
        StatsSummary {
            total_caught: self.total_caught(catalog),
            distinct_caught: self.distinct_caught(catalog),
            visible_species: catalog.stat_visible().count(),
            completion: self.completion_ratio(catalog),
            longest: self.record_holder(RecordMetric::Length, catalog),
            heaviest: self.record_holder(RecordMetric::Weight, catalog),
        }
    }
}

/// Decide what the victory screen names.
///
/// A species with no reward and no custom text is never looked up in the
/// item catalog.
pub fn catch_presentation(species: &SpeciesDefinition, items: &dyn ItemCatalog) -> CatchPresentation {
    if species.has_custom_text() {
        return CatchPresentation::Custom(species.custom_text.clone());
    }
    if species.reward_item == 0 {
        return CatchPresentation::Generic;
    }
    match items.item_name(species.reward_item) {
        Some(name) => CatchPresentation::Item {
            item: species.reward_item,
            name: name.to_string(),
        },
        None => {
            log::debug!(
                "reward item {} for {} has no name",
                species.reward_item,
                species.name
            );
            CatchPresentation::Generic
        }
    }
}

impl CatchPresentation {
    pub fn text(&self) -> &str {
        match self {
            Self::Generic => GENERIC_CATCH_TEXT,
            Self::Custom(text) => text,
            Self::Item { name, .. } => name,
        }
    }
}
