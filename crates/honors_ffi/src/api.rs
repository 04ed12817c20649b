//! FFI use-case API for the honors page.
//!
//! # Responsibility
//! - Expose the read-only honor list to Dart via FRB.
//! - Flatten core types into plain DTOs with stable field meaning.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Returned lists preserve the ordering the core hands out.

use honors_core::{
    all_honors, core_version as core_version_inner, find_honor,
    init_logging as init_logging_inner, milestones, ping as ping_inner, sorted_by_date,
    to_json_string, DateOrder, HonorRecord,
};
use log::warn;

/// One honor as rendered by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HonorItem {
    /// Stable record id, used as list key only.
    pub id: String,
    /// Event name, may contain non-ASCII text.
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Placement text, e.g. `3rd Place`.
    pub rank: String,
    /// Whether the row is highlighted.
    pub is_milestone: bool,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create `log_dir`.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Returns every honor in canonical order.
#[flutter_rust_bridge::frb(sync)]
pub fn honors_list() -> Vec<HonorItem> {
    all_honors().iter().map(to_honor_item).collect()
}

/// Returns one honor by exact id, or `None` for unknown ids.
#[flutter_rust_bridge::frb(sync)]
pub fn honors_get(id: String) -> Option<HonorItem> {
    find_honor(&id).map(to_honor_item)
}

/// Returns milestone honors in canonical order.
#[flutter_rust_bridge::frb(sync)]
pub fn honors_milestones() -> Vec<HonorItem> {
    milestones().map(to_honor_item).collect()
}

/// Returns honors ordered by date.
#[flutter_rust_bridge::frb(sync)]
pub fn honors_timeline(newest_first: bool) -> Vec<HonorItem> {
    let order = if newest_first {
        DateOrder::NewestFirst
    } else {
        DateOrder::OldestFirst
    };
    sorted_by_date(order).into_iter().map(to_honor_item).collect()
}

/// Returns the honor list as compact JSON.
///
/// # FFI contract
/// - Never panics; returns `[]` if serialization fails.
#[flutter_rust_bridge::frb(sync)]
pub fn honors_json() -> String {
    match to_json_string(all_honors(), false) {
        Ok(text) => text,
        Err(err) => {
            warn!("event=honors_json module=ffi status=error reason={err}");
            "[]".to_string()
        }
    }
}

fn to_honor_item(record: &HonorRecord) -> HonorItem {
    HonorItem {
        id: record.id.to_string(),
        name: record.name.to_string(),
        date: record.date.to_string(),
        rank: record.rank.to_string(),
        is_milestone: record.is_milestone,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, honors_get, honors_json, honors_list, honors_milestones, honors_timeline,
        init_logging, ping,
    };

    #[test]
    fn ping_and_version_are_stable() {
        assert_eq!(ping(), "pong");
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_reports_invalid_input_as_message() {
        let message = init_logging("loud".to_string(), "/tmp/honors-ffi".to_string());
        assert!(message.contains("unsupported log level"));
        let message = init_logging("info".to_string(), "relative/dir".to_string());
        assert!(message.contains("absolute"));
    }

    #[test]
    fn honors_list_mirrors_core() {
        let items = honors_list();
        assert_eq!(items.len(), 11);
        assert_eq!(items[0].id, "tpctf_2025");
        assert_eq!(items[0].rank, "6th Place");
        assert!(!items[0].is_milestone);
    }

    #[test]
    fn honors_get_uses_exact_id_match() {
        let item = honors_get("nkctf_2023".to_string()).expect("known id");
        assert!(item.is_milestone);
        assert!(honors_get(" nkctf_2023 ".to_string()).is_none());
        assert!(honors_get("NKCTF_2023".to_string()).is_none());
        assert!(honors_get("unknown".to_string()).is_none());
    }

    #[test]
    fn milestones_and_timeline_are_consistent() {
        let milestone_ids = honors_milestones()
            .into_iter()
            .map(|item| item.id)
            .collect::<Vec<_>>();
        assert_eq!(
            milestone_ids,
            vec!["nkctf_2023", "qiangwangbei_s8_qual", "qiangwangbei_s8_final"]
        );

        let oldest = honors_timeline(false);
        assert_eq!(oldest[0].id, "nkctf_2023");
        assert_eq!(oldest.len(), 11);
    }

    #[test]
    fn honors_json_is_an_array_of_eleven() {
        let json = honors_json();
        assert!(json.starts_with('['));
        assert_eq!(json.matches("\"id\":").count(), 11);
    }
}
