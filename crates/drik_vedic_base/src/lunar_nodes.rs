//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean node: `Ω = 125.04452 − 1934.136261·T + 0.0020708·T² + T³/450000`
//! (Meeus, *Astronomical Algorithms* 2nd ed., Eq. 47.7).
//!
//! True node: mean node plus the five principal periodic terms given by
//! Meeus in Chapter 47.
//!
//! Ketu is always Rahu + 180°; it is never computed on its own.

use std::str::FromStr;

use drik_frames::{normalize_360, wrap_180};
use drik_series::lunar_arguments;
use drik_time::DAYS_PER_CENTURY;

use crate::error::VedicError;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node). Always Rahu + 180 deg.
    Ketu,
}

pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    /// Mean node: smooth polynomial motion only.
    #[default]
    Mean,
    /// True node: mean + short-period perturbation corrections.
    True,
}

pub const ALL_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

impl FromStr for NodeMode {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "true" => Ok(Self::True),
            _ => Err(VedicError::UnknownNodeMode(s.to_string())),
        }
    }
}

/// Mean Rahu (ascending node) ecliptic longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(
        125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0,
    )
}

/// Periodic part of the true node, in degrees.
fn node_perturbation_deg(t: f64) -> f64 {
    // [D, M, M', F, amplitude (deg)]
    #[rustfmt::skip]
    const TERMS: [(i8, i8, i8, i8, f64); 5] = [
        (2, 0, 0, -2, -1.4979),
        (0, 1, 0,  0, -0.1500),
        (2, 0, 0,  0, -0.1226),
        (0, 0, 0,  2,  0.1176),
        (0, 0, 2, -2, -0.0801),
    ];

    let a = lunar_arguments(t);
    TERMS
        .iter()
        .map(|&(d, m, mp, f, amp)| {
            let arg = d as f64 * a.elongation
                + m as f64 * a.sun_anomaly
                + mp as f64 * a.moon_anomaly
                + f as f64 * a.latitude_argument;
            amp * arg.to_radians().sin()
        })
        .sum()
}

/// True Rahu (ascending node) ecliptic longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + node_perturbation_deg(t))
}

/// Rahu longitude in degrees [0, 360) for the given mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

/// Ketu: exactly opposite Rahu.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

/// Unified entry point: lunar node longitude in degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let rahu = rahu_deg(t, mode);
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => ketu_from_rahu(rahu),
    }
}

/// Daily motion of the nodes in degrees per day (central difference over
/// ±0.5 day). Both nodes share it.
pub fn node_speed_deg_per_day(t: f64, mode: NodeMode) -> f64 {
    let h = 0.5 / DAYS_PER_CENTURY;
    wrap_180(rahu_deg(t + h, mode) - rahu_deg(t - h, mode))
}
