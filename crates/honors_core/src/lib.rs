//! Core data and rules for the competition honors listing.
//! This crate owns the canonical record list and its invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod store;

pub use export::{from_json_str, to_json_string, write_json, ExportError, ExportResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::honor::{HonorRecord, HonorValidationError, HONOR_DATE_FORMAT};
pub use store::honors::{
    all_honors, find_honor, milestones, sort_by_date, sorted_by_date, DateOrder,
};
pub use store::validate::{validate_collection, CollectionValidationError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
