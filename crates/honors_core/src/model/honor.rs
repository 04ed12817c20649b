//! Honor record domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the store, JSON interchange and FFI.
//! - Validate authoring invariants for a single record.
//!
//! # Invariants
//! - `id`, `name` and `rank` are non-empty after trimming.
//! - `date` is `YYYY-MM-DD` and names a real calendar day.
//! - `is_milestone` defaults to `false` and is only serialized when `true`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire and display format of `HonorRecord::date`.
pub const HONOR_DATE_FORMAT: &str = "%Y-%m-%d";

static HONOR_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid honor date regex"));

/// One competition result.
///
/// Text fields are `Cow` so the canonical collection can live in a `static`
/// of borrowed literals while decoded records own their strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HonorRecord {
    /// Stable identifier. Not displayed.
    pub id: Cow<'static, str>,
    /// Human-readable event name, may contain non-ASCII text.
    pub name: Cow<'static, str>,
    /// Date the result was achieved or announced, `YYYY-MM-DD`.
    pub date: Cow<'static, str>,
    /// Free-form placement, e.g. `6th Place` or `Organizer`.
    pub rank: Cow<'static, str>,
    /// Serialized as `isMilestone` to match the page data schema.
    #[serde(rename = "isMilestone", default, skip_serializing_if = "is_false")]
    pub is_milestone: bool,
}

impl HonorRecord {
    /// Builds a record from static literals. Usable in `static` initializers.
    pub const fn from_static(
        id: &'static str,
        name: &'static str,
        date: &'static str,
        rank: &'static str,
        is_milestone: bool,
    ) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            date: Cow::Borrowed(date),
            rank: Cow::Borrowed(rank),
            is_milestone,
        }
    }

    /// Builds a non-milestone record with owned text.
    ///
    /// This constructor does not validate; call `validate()` before use.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        rank: impl Into<String>,
    ) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            name: Cow::Owned(name.into()),
            date: Cow::Owned(date.into()),
            rank: Cow::Owned(rank.into()),
            is_milestone: false,
        }
    }

    /// Returns a copy flagged as milestone.
    pub fn milestone(mut self) -> Self {
        self.is_milestone = true;
        self
    }

    /// Parses `date` into a calendar date.
    ///
    /// # Errors
    /// - `MalformedDate` when the text is not `YYYY-MM-DD`.
    /// - `InvalidCalendarDate` when the text is well-formed but not a real day.
    pub fn calendar_date(&self) -> Result<NaiveDate, HonorValidationError> {
        let raw: &str = &self.date;
        if !HONOR_DATE_RE.is_match(raw) {
            return Err(HonorValidationError::MalformedDate {
                id: self.id.to_string(),
                date: raw.to_string(),
            });
        }
        NaiveDate::parse_from_str(raw, HONOR_DATE_FORMAT).map_err(|_| {
            HonorValidationError::InvalidCalendarDate {
                id: self.id.to_string(),
                date: raw.to_string(),
            }
        })
    }

    /// Validates single-record authoring invariants.
    pub fn validate(&self) -> Result<(), HonorValidationError> {
        if self.id.trim().is_empty() {
            return Err(HonorValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(HonorValidationError::EmptyName(self.id.to_string()));
        }
        if self.rank.trim().is_empty() {
            return Err(HonorValidationError::EmptyRank(self.id.to_string()));
        }
        self.calendar_date()?;
        Ok(())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Single-record validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HonorValidationError {
    EmptyId,
    EmptyName(String),
    EmptyRank(String),
    MalformedDate { id: String, date: String },
    InvalidCalendarDate { id: String, date: String },
}

impl Display for HonorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "honor id must not be empty"),
            Self::EmptyName(id) => write!(f, "honor `{id}` has an empty name"),
            Self::EmptyRank(id) => write!(f, "honor `{id}` has an empty rank"),
            Self::MalformedDate { id, date } => {
                write!(f, "honor `{id}` date is malformed: {date} (expected YYYY-MM-DD)")
            }
            Self::InvalidCalendarDate { id, date } => {
                write!(f, "honor `{id}` date is not a calendar day: {date}")
            }
        }
    }
}

impl Error for HonorValidationError {}
