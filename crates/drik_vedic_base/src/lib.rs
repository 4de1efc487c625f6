//! Vedic (sidereal) primitives built on the geocentric engine outputs.
//!
//! This crate provides:
//! - Ayanamsha for six sidereal reference systems
//! - Tropical → sidereal conversion with the zodiac carried in the type
//! - Rashi, nakshatra/pada and navamsa placement
//! - Mean and true lunar nodes (Rahu/Ketu)
//! - Ascendant (lagna) and MC from local sidereal time
//! - Whole-sign houses
//! - Panchanga elements: tithi, karana, yoga, vaar
//!
//! Everything here is pure math over angles and Julian Days; nothing
//! reads files or holds state.

pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod location;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod navamsa;
pub mod panchanga;
pub mod rashi;
pub mod sidereal;
pub mod zodiac;

pub use ayanamsha::{
    AyanamshaSystem, LAHIRI_J2000_DEG, PRECESSION_ARCSEC_PER_YEAR, TROPICAL_YEAR_DAYS,
    ayanamsha_deg, ayanamsha_mean_deg,
};
pub use bhava::{house_of, whole_sign_house, whole_sign_houses};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use lagna::{ascendant_deg, lagna_longitude_deg, local_sidereal_time, mc_deg};
pub use location::GeoPosition;
pub use lunar_nodes::{
    ALL_MODES, ALL_NODES, LunarNode, NodeMode, ketu_from_rahu, lunar_node_deg, mean_rahu_deg,
    node_speed_deg_per_day, rahu_deg, true_rahu_deg,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use navamsa::{NAVAMSA_SPAN, NavamsaInfo, navamsa_from_longitude, navamsa_sign};
pub use panchanga::{
    ALL_YOGAS, Karana, KaranaPosition, Paksha, Panchanga, Tithi, TithiPosition, Vaar, Yoga,
    YogaPosition, karana_from_elongation, panchanga, tithi_from_elongation, vaar_from_jd,
    yoga_from_sum,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use sidereal::{SiderealLongitude, TropicalLongitude, to_sidereal};
pub use zodiac::{SiderealPlacement, placement_from_degrees, zodiac_placement};
