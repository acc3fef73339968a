//! Catch records, statistics queries and catch presentation.

pub mod logic;
pub mod types;

pub use logic::catch_presentation;
pub use types::{CatchPresentation, CatchReport, FishRecord, FishRecords, RecordMetric, StatsSummary};
