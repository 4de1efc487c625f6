//! Error types for reference-data integrity.

use thiserror::Error;

/// Reference tables failed their integrity check.
///
/// Raised when the engine is built, never while answering a query.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SeriesError {
    #[error("malformed reference data ({table}): {detail}")]
    MalformedReferenceData { table: String, detail: String },
}

impl SeriesError {
    pub(crate) fn malformed(table: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedReferenceData {
            table: table.into(),
            detail: detail.into(),
        }
    }
}
