//! Natal chart facade for the drik ephemeris engine.
//!
//! Provides a global engine and one entry point that turns a birth
//! moment and place into sidereal placements, whole-sign houses, and the
//! optional navamsa and panchanga sections.
//!
//! Call [`init`] or [`ensure_initialized`] once at startup. Both build the
//! engine and validate its reference tables, so a malformed table fails
//! the process there rather than the first chart request.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use drik_rs::*;
//!
//! init(EngineConfig::default()).expect("engine init");
//!
//! let moment = BirthMoment::new(2000, 1, 1, 12, 0, 0.0);
//! let place = GeoPosition::new(55.75, 37.6167).expect("valid place");
//! let chart = compute_positions(&moment, &place).expect("chart");
//! println!("Sun in sign {}", chart.bodies.sun.sign);
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod global;
pub mod response;

pub use chart::{
    Chart, GrahaPlacement, PointPlacement, compute_chart, compute_chart_on,
    compute_chart_with_config, compute_chart_with_settings,
};
pub use config::{ChartConfig, ChartSettings};
pub use error::DrikError;
pub use global::{ensure_initialized, init, is_initialized};
pub use response::{
    AscendantResponse, BodiesResponse, BodyResponse, ChartRequest, ChartResponse,
    NavamsaResponse, PanchangaResponse, compute_positions, compute_positions_with_config,
    compute_request,
};

// Re-export input and engine types so callers need only this crate.
pub use drik_core::{Body, EngineConfig};
pub use drik_time::{BirthMoment, JulianInstant};
pub use drik_vedic_base::{
    AyanamshaSystem, GeoPosition, Graha, Nakshatra, NodeMode, Rashi, nakshatra_from_longitude,
    rashi_from_longitude,
};
