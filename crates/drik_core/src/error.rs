use drik_series::SeriesError;
use thiserror::Error;

/// Core engine errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("epoch out of range: JD {jd}")]
    EpochOutOfRange { jd: f64 },
    #[error(transparent)]
    MalformedReferenceData(#[from] SeriesError),
    #[error("internal error: {0}")]
    Internal(String),
}
