//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// The ascendant has no meaning at this latitude (the poles).
    #[error("ascendant is undefined at latitude {latitude_deg}°")]
    UndefinedAscendant { latitude_deg: f64 },
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    #[error("unknown ayanamsha system: {0:?}")]
    UnknownAyanamsha(String),
    #[error("unknown node mode: {0:?}")]
    UnknownNodeMode(String),
}
