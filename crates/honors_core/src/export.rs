//! JSON interchange for honor lists.
//!
//! # Responsibility
//! - Serialize records to the page data shape consumed by the web frontend.
//! - Decode externally authored lists and run collection validation on them.
//!
//! # Invariants
//! - `isMilestone` is emitted only for milestone records.
//! - Decoded lists are returned only after `validate_collection` succeeds.

use crate::model::honor::HonorRecord;
use crate::store::validate::{validate_collection, CollectionValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

pub type ExportResult<T> = Result<T, ExportError>;

/// Serializes `records` as a JSON array.
pub fn to_json_string(records: &[HonorRecord], pretty: bool) -> ExportResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    debug!(
        "event=honor_export module=export status=ok count={} bytes={}",
        records.len(),
        text.len()
    );
    Ok(text)
}

/// Writes `records` as a JSON array followed by a newline.
pub fn write_json<W: Write>(
    mut writer: W,
    records: &[HonorRecord],
    pretty: bool,
) -> ExportResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Decodes a JSON array of records and validates the collection.
pub fn from_json_str(text: &str) -> ExportResult<Vec<HonorRecord>> {
    let records: Vec<HonorRecord> = serde_json::from_str(text)?;
    validate_collection(&records)?;
    debug!(
        "event=honor_import module=export status=ok count={}",
        records.len()
    );
    Ok(records)
}

/// JSON interchange errors.
#[derive(Debug)]
pub enum ExportError {
    Json(serde_json::Error),
    Io(std::io::Error),
    Validation(CollectionValidationError),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "honor json error: {err}"),
            Self::Io(err) => write!(f, "honor export io error: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CollectionValidationError> for ExportError {
    fn from(value: CollectionValidationError) -> Self {
        Self::Validation(value)
    }
}
