//! Natal chart composition.
//!
//! One call runs the whole pipeline for a birth moment and place: time
//! conversion, geocentric positions, nodes, ascendant, ayanamsha, then
//! the sidereal conversion and zodiac/house mapping of every point.

use drik_core::{Engine, Query};
use drik_time::{BirthMoment, JulianInstant};
use drik_vedic_base::{
    ALL_GRAHAS, GeoPosition, Graha, LunarNode, NavamsaInfo, Panchanga, SAPTA_GRAHAS,
    SiderealPlacement, TropicalLongitude, ayanamsha_deg, lagna_longitude_deg, lunar_node_deg,
    navamsa_from_longitude, node_speed_deg_per_day, panchanga, to_sidereal, whole_sign_house,
    whole_sign_houses, zodiac_placement,
};
use log::debug;

use crate::config::{ChartConfig, ChartSettings};
use crate::error::DrikError;
use crate::global::engine;

/// One sidereally placed point of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPlacement {
    /// Longitude before the ayanamsha was removed, degrees [0, 360).
    pub tropical_deg: f64,
    pub placement: SiderealPlacement,
    pub navamsa: NavamsaInfo,
}

impl PointPlacement {
    pub fn sidereal_deg(&self) -> f64 {
        self.placement.longitude_deg
    }

    pub fn sign_index(&self) -> u8 {
        self.placement.sign_index()
    }
}

/// A graha with its placement, motion, and houses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPlacement {
    pub graha: Graha,
    pub point: PointPlacement,
    /// Daily longitude speed; `None` if the engine runs without speeds.
    pub speed_deg_per_day: Option<f64>,
    /// Whole-sign house from the ascendant, 1..=12.
    pub house: u8,
    /// Whole-sign house in the navamsa chart, 1..=12.
    pub navamsa_house: u8,
}

impl GrahaPlacement {
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day.is_some_and(|s| s < 0.0)
    }
}

/// A fully computed natal chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub moment: BirthMoment,
    pub position: GeoPosition,
    pub instant: JulianInstant,
    pub settings: ChartSettings,
    pub ayanamsha_deg: f64,
    pub ascendant: PointPlacement,
    /// In [`ALL_GRAHAS`] order.
    pub grahas: Vec<GrahaPlacement>,
    /// Present when enabled in [`ChartSettings`].
    pub panchanga: Option<Panchanga>,
}

impl Chart {
    pub fn graha(&self, graha: Graha) -> &GrahaPlacement {
        &self.grahas[graha.index() as usize]
    }

    /// Grahas occupying each house; index 0 is house 1.
    pub fn house_buckets(&self) -> [Vec<Graha>; 12] {
        let mut buckets: [Vec<Graha>; 12] = Default::default();
        for g in &self.grahas {
            buckets[(g.house - 1) as usize].push(g.graha);
        }
        buckets
    }
}

/// Tropical inputs for one graha, before sidereal conversion.
struct TropicalPoint {
    graha: Graha,
    longitude: TropicalLongitude,
    speed: Option<f64>,
}

/// Compute a chart with the default configuration.
pub fn compute_chart(moment: &BirthMoment, position: &GeoPosition) -> Result<Chart, DrikError> {
    compute_chart_with_settings(moment, position, ChartSettings::default())
}

/// Compute a chart with a user configuration.
pub fn compute_chart_with_config(
    moment: &BirthMoment,
    position: &GeoPosition,
    config: &ChartConfig,
) -> Result<Chart, DrikError> {
    compute_chart_with_settings(moment, position, config.resolve()?)
}

/// Compute a chart on the global engine.
pub fn compute_chart_with_settings(
    moment: &BirthMoment,
    position: &GeoPosition,
    settings: ChartSettings,
) -> Result<Chart, DrikError> {
    // Input errors take precedence over engine construction.
    moment.validate()?;
    position.validate()?;
    compute_chart_on(engine()?, moment, position, settings)
}

/// Compute a chart on an explicit engine.
pub fn compute_chart_on(
    engine: &Engine,
    moment: &BirthMoment,
    position: &GeoPosition,
    settings: ChartSettings,
) -> Result<Chart, DrikError> {
    moment.validate()?;
    position.validate()?;
    let instant = moment.to_julian_instant()?;
    let jd = instant.jd;
    let t = instant.centuries();
    debug!("chart for {moment}: JD {jd:.6}, T {t:.9}");

    let tropical = tropical_points(engine, jd, t, settings)?;
    let ascendant_tropical = lagna_longitude_deg(jd, position, settings.nutation)?;
    let ayanamsha = ayanamsha_deg(settings.ayanamsha, jd, settings.nutation);
    debug!("ayanamsha {ayanamsha:.6}°, tropical ascendant {ascendant_tropical:.6}°");

    let ascendant = place("ascendant", TropicalLongitude::new(ascendant_tropical), ayanamsha)?;
    let asc_sign = ascendant.sign_index();
    let asc_navamsa_sign = ascendant.navamsa.rashi.index();

    let points = tropical
        .iter()
        .map(|p| place(p.graha.key(), p.longitude, ayanamsha))
        .collect::<Result<Vec<_>, _>>()?;

    let signs: Vec<(Graha, u8)> = tropical
        .iter()
        .zip(&points)
        .map(|(tp, point)| (tp.graha, point.sign_index()))
        .collect();
    let houses = whole_sign_houses(asc_sign, &signs);

    let grahas = tropical
        .iter()
        .zip(points)
        .zip(houses)
        .map(|((tp, point), (_, house))| GrahaPlacement {
            graha: tp.graha,
            point,
            speed_deg_per_day: tp.speed,
            house,
            navamsa_house: whole_sign_house(point.navamsa.rashi.index(), asc_navamsa_sign),
        })
        .collect::<Vec<_>>();

    let panchanga = if settings.include_panchanga {
        let sun = grahas[Graha::Surya.index() as usize].point.sidereal_deg();
        let moon = grahas[Graha::Chandra.index() as usize].point.sidereal_deg();
        let p = panchanga(sun, moon, moment.local_weekday())
            .ok_or(DrikError::UndefinedPlacement("panchanga"))?;
        Some(p)
    } else {
        None
    };

    Ok(Chart {
        moment: *moment,
        position: *position,
        instant,
        settings,
        ayanamsha_deg: ayanamsha,
        ascendant,
        grahas,
        panchanga,
    })
}

/// Tropical longitudes of all nine grahas, in [`ALL_GRAHAS`] order.
fn tropical_points(
    engine: &Engine,
    jd: f64,
    t: f64,
    settings: ChartSettings,
) -> Result<Vec<TropicalPoint>, DrikError> {
    let queries: Vec<Query> = SAPTA_GRAHAS
        .iter()
        .filter_map(|g| g.body())
        .map(|body| Query { body, jd })
        .collect();
    let results = engine.query_batch(&queries);

    let mut points = Vec::with_capacity(ALL_GRAHAS.len());
    for (graha, result) in SAPTA_GRAHAS.iter().zip(results) {
        let pos = result?;
        points.push(TropicalPoint {
            graha: *graha,
            longitude: TropicalLongitude::new(pos.lon_deg),
            speed: pos.speed_deg_per_day,
        });
    }

    let node_speed = engine
        .config()
        .compute_speed
        .then(|| node_speed_deg_per_day(t, settings.node_mode));
    for (graha, node) in [(Graha::Rahu, LunarNode::Rahu), (Graha::Ketu, LunarNode::Ketu)] {
        points.push(TropicalPoint {
            graha,
            longitude: TropicalLongitude::new(lunar_node_deg(node, t, settings.node_mode)),
            speed: node_speed,
        });
    }
    Ok(points)
}

/// The single tropical → sidereal step for every point of the chart.
fn place(
    label: &'static str,
    tropical: TropicalLongitude,
    ayanamsha: f64,
) -> Result<PointPlacement, DrikError> {
    let sidereal = to_sidereal(tropical, ayanamsha);
    let placement = zodiac_placement(sidereal).ok_or(DrikError::UndefinedPlacement(label))?;
    let navamsa =
        navamsa_from_longitude(sidereal.degrees()).ok_or(DrikError::UndefinedPlacement(label))?;
    Ok(PointPlacement {
        tropical_deg: tropical.degrees(),
        placement,
        navamsa,
    })
}
