//! Error type for the chart facade.

use drik_core::EngineError;
use drik_series::SeriesError;
use drik_time::TimeError;
use drik_vedic_base::VedicError;
use thiserror::Error;

/// Every way a chart computation can fail. No partial chart accompanies
/// an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrikError {
    /// Calendar or offset fields that do not name a real moment.
    #[error("invalid birth moment: {0}")]
    InvalidBirthMoment(#[from] TimeError),
    /// Valid calendar fields, but too far from J2000 for the series.
    #[error("birth moment JD {jd} is outside the supported range")]
    EpochOutOfRange { jd: f64 },
    #[error("invalid geographic position: {0}")]
    InvalidGeoPosition(&'static str),
    #[error("ascendant is undefined at latitude {latitude_deg}°")]
    UndefinedAscendant { latitude_deg: f64 },
    /// Corrupt periodic-term tables, found when the engine is built.
    #[error("malformed reference data: {0}")]
    MalformedReferenceData(#[from] SeriesError),
    /// A longitude that could not be placed in the zodiac.
    #[error("undefined zodiac placement for {0}")]
    UndefinedPlacement(&'static str),
    #[error("config error: {0}")]
    Config(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("engine already initialized")]
    AlreadyInitialized,
    #[error("engine error: {0}")]
    Engine(EngineError),
}

impl From<EngineError> for DrikError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::MalformedReferenceData(e) => Self::MalformedReferenceData(e),
            EngineError::EpochOutOfRange { jd } => Self::EpochOutOfRange { jd },
            other => Self::Engine(other),
        }
    }
}

impl From<VedicError> for DrikError {
    fn from(err: VedicError) -> Self {
        match err {
            VedicError::UndefinedAscendant { latitude_deg } => {
                Self::UndefinedAscendant { latitude_deg }
            }
            VedicError::InvalidLocation(msg) => Self::InvalidGeoPosition(msg),
            other => Self::Config(other.to_string()),
        }
    }
}
