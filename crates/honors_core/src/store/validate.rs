//! Collection-level validation for honor lists.

use crate::model::honor::{HonorRecord, HonorValidationError};
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validates every record and id uniqueness across `records`.
///
/// Stops at the first violation, in source order.
pub fn validate_collection(records: &[HonorRecord]) -> Result<(), CollectionValidationError> {
    let mut seen = BTreeSet::<&str>::new();
    for (index, record) in records.iter().enumerate() {
        if let Err(err) = record.validate() {
            warn!("event=honor_validate module=store status=error index={index} reason={err}");
            return Err(CollectionValidationError::Record { index, source: err });
        }
        if !seen.insert(&*record.id) {
            warn!(
                "event=honor_validate module=store status=error index={index} duplicate_id={}",
                record.id
            );
            return Err(CollectionValidationError::DuplicateId(record.id.to_string()));
        }
    }

    info!(
        "event=honor_validate module=store status=ok count={}",
        records.len()
    );
    Ok(())
}

/// Collection validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionValidationError {
    /// Record at `index` failed single-record validation.
    Record {
        index: usize,
        source: HonorValidationError,
    },
    DuplicateId(String),
}

impl Display for CollectionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record { index, source } => write!(f, "honor #{index} is invalid: {source}"),
            Self::DuplicateId(id) => write!(f, "honor id is duplicated: {id}"),
        }
    }
}

impl Error for CollectionValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Record { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_collection, CollectionValidationError};
    use crate::model::honor::{HonorRecord, HonorValidationError};
    use std::error::Error;

    fn sample(id: &str, date: &str) -> HonorRecord {
        HonorRecord::new(id, "Sample CTF", date, "2nd Place")
    }

    #[test]
    fn accepts_empty_and_distinct_lists() {
        assert!(validate_collection(&[]).is_ok());
        assert!(
            validate_collection(&[sample("a", "2024-01-01"), sample("b", "2024-01-02")]).is_ok()
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = validate_collection(&[
            sample("a", "2024-01-01"),
            sample("b", "2024-01-02"),
            sample("a", "2024-01-03"),
        ])
        .unwrap_err();
        assert_eq!(err, CollectionValidationError::DuplicateId("a".to_string()));
        assert!(err.source().is_none());
    }

    #[test]
    fn reports_index_and_chains_record_error() {
        let err = validate_collection(&[sample("a", "2024-01-01"), sample("b", "2024-13-01")])
            .unwrap_err();
        match &err {
            CollectionValidationError::Record { index, source } => {
                assert_eq!(*index, 1);
                assert!(matches!(
                    source,
                    HonorValidationError::InvalidCalendarDate { .. }
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.source().is_some());
        assert!(err.to_string().contains("honor #1"));
    }
}
