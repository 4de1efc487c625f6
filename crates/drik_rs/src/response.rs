//! JSON request/response records exchanged with chart renderers.
//!
//! Field names are camelCase on the wire.

use std::collections::BTreeMap;

use drik_time::BirthMoment;
use drik_vedic_base::{GeoPosition, Graha, Panchanga, Rashi};
use serde::{Deserialize, Serialize};

use crate::chart::{Chart, GrahaPlacement, PointPlacement, compute_chart_with_config};
use crate::config::ChartConfig;
use crate::error::DrikError;

/// Birth data as supplied by a front end.
///
/// Calendar fields are plain JSON numbers. A negative month or a
/// fractional hour is an invalid birth moment, reported when the request
/// is converted, not a decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_hours: f64,
}

impl ChartRequest {
    pub fn birth_moment(&self) -> Result<BirthMoment, DrikError> {
        Ok(BirthMoment::from_numeric_fields(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.utc_offset_hours,
        )?)
    }

    /// Unvalidated position; the chart computation validates it.
    pub fn geo_position(&self) -> GeoPosition {
        GeoPosition {
            latitude_deg: self.latitude,
            longitude_deg: self.longitude,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, DrikError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyResponse {
    /// Sidereal, [0, 360).
    pub longitude_deg: f64,
    pub sign: u8,
    pub degree_in_sign: f64,
    pub nakshatra: u8,
    pub pada: u8,
    pub retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub speed_deg_per_day: Option<f64>,
    pub sign_name: String,
    pub nakshatra_name: String,
    /// Degree in sign as `DD°MM'SS"`.
    pub dms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantResponse {
    pub longitude_deg: f64,
    pub sign: u8,
    pub degree_in_sign: f64,
    pub nakshatra: u8,
    pub pada: u8,
    pub sign_name: String,
    pub dms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodiesResponse {
    pub sun: BodyResponse,
    pub moon: BodyResponse,
    pub mercury: BodyResponse,
    pub venus: BodyResponse,
    pub mars: BodyResponse,
    pub jupiter: BodyResponse,
    pub saturn: BodyResponse,
    pub rahu: BodyResponse,
    pub ketu: BodyResponse,
    pub ascendant: AscendantResponse,
}

impl BodiesResponse {
    pub fn get(&self, graha: Graha) -> &BodyResponse {
        match graha {
            Graha::Surya => &self.sun,
            Graha::Chandra => &self.moon,
            Graha::Buddh => &self.mercury,
            Graha::Shukra => &self.venus,
            Graha::Mangal => &self.mars,
            Graha::Guru => &self.jupiter,
            Graha::Shani => &self.saturn,
            Graha::Rahu => &self.rahu,
            Graha::Ketu => &self.ketu,
        }
    }
}

/// D9 signs and houses, keyed by body name (the ascendant included in
/// `signs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavamsaResponse {
    pub signs: BTreeMap<String, u8>,
    pub houses: BTreeMap<String, u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangaResponse {
    /// 0..=29
    pub tithi: u8,
    pub tithi_name: String,
    pub paksha: String,
    /// 1..=15
    pub tithi_in_paksha: u8,
    /// 0..=59
    pub karana: u8,
    pub karana_name: String,
    /// 0..=26
    pub yoga: u8,
    pub yoga_name: String,
    /// Moon's nakshatra, 0..=26.
    pub nakshatra: u8,
    /// Sunday = 0.
    pub vara: u8,
    pub vara_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub ayanamsha_deg: f64,
    pub bodies: BodiesResponse,
    /// Whole-sign house of each body, 1..=12.
    pub houses: BTreeMap<String, u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub navamsa: Option<NavamsaResponse>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub panchanga: Option<PanchangaResponse>,
}

impl ChartResponse {
    pub fn to_json(&self, pretty: bool) -> Result<String, DrikError> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}

fn sign_name(index: u8) -> String {
    Rashi::from_index(index).name().to_string()
}

fn body_response(g: &GrahaPlacement) -> BodyResponse {
    let p = &g.point.placement;
    BodyResponse {
        longitude_deg: p.longitude_deg,
        sign: p.sign_index(),
        degree_in_sign: p.degree_in_sign,
        nakshatra: p.nakshatra_index(),
        pada: p.pada,
        retrograde: g.is_retrograde(),
        speed_deg_per_day: g.speed_deg_per_day,
        sign_name: sign_name(p.sign_index()),
        nakshatra_name: p.nakshatra.name().to_string(),
        dms: p.degree_in_sign_dms().to_string(),
    }
}

fn ascendant_response(a: &PointPlacement) -> AscendantResponse {
    let p = &a.placement;
    AscendantResponse {
        longitude_deg: p.longitude_deg,
        sign: p.sign_index(),
        degree_in_sign: p.degree_in_sign,
        nakshatra: p.nakshatra_index(),
        pada: p.pada,
        sign_name: sign_name(p.sign_index()),
        dms: p.degree_in_sign_dms().to_string(),
    }
}

fn panchanga_response(p: &Panchanga) -> PanchangaResponse {
    PanchangaResponse {
        tithi: p.tithi.tithi_index,
        tithi_name: p.tithi.tithi.name().to_string(),
        paksha: p.tithi.paksha.name().to_string(),
        tithi_in_paksha: p.tithi.tithi_in_paksha,
        karana: p.karana.karana_index,
        karana_name: p.karana.karana.name().to_string(),
        yoga: p.yoga.yoga_index,
        yoga_name: p.yoga.yoga.name().to_string(),
        nakshatra: p.nakshatra.index(),
        vara: p.vaar.index(),
        vara_name: p.vaar.name().to_string(),
    }
}

impl From<&Chart> for ChartResponse {
    fn from(chart: &Chart) -> Self {
        let by_graha = |g: Graha| body_response(chart.graha(g));
        let bodies = BodiesResponse {
            sun: by_graha(Graha::Surya),
            moon: by_graha(Graha::Chandra),
            mercury: by_graha(Graha::Buddh),
            venus: by_graha(Graha::Shukra),
            mars: by_graha(Graha::Mangal),
            jupiter: by_graha(Graha::Guru),
            saturn: by_graha(Graha::Shani),
            rahu: by_graha(Graha::Rahu),
            ketu: by_graha(Graha::Ketu),
            ascendant: ascendant_response(&chart.ascendant),
        };

        let houses = chart
            .grahas
            .iter()
            .map(|g| (g.graha.key().to_string(), g.house))
            .collect();

        let navamsa = chart.settings.include_navamsa.then(|| {
            let mut signs: BTreeMap<String, u8> = chart
                .grahas
                .iter()
                .map(|g| (g.graha.key().to_string(), g.point.navamsa.rashi.index()))
                .collect();
            signs.insert(
                "ascendant".to_string(),
                chart.ascendant.navamsa.rashi.index(),
            );
            let houses = chart
                .grahas
                .iter()
                .map(|g| (g.graha.key().to_string(), g.navamsa_house))
                .collect();
            NavamsaResponse { signs, houses }
        });

        Self {
            ayanamsha_deg: chart.ayanamsha_deg,
            bodies,
            houses,
            navamsa,
            panchanga: chart.panchanga.as_ref().map(panchanga_response),
        }
    }
}

/// Sidereal placements of the nine grahas and the ascendant, with houses,
/// for a birth moment and place (default configuration).
pub fn compute_positions(
    moment: &BirthMoment,
    position: &GeoPosition,
) -> Result<ChartResponse, DrikError> {
    compute_positions_with_config(moment, position, &ChartConfig::default())
}

pub fn compute_positions_with_config(
    moment: &BirthMoment,
    position: &GeoPosition,
    config: &ChartConfig,
) -> Result<ChartResponse, DrikError> {
    let chart = compute_chart_with_config(moment, position, config)?;
    Ok(ChartResponse::from(&chart))
}

/// [`compute_positions_with_config`] for a wire request.
pub fn compute_request(
    request: &ChartRequest,
    config: &ChartConfig,
) -> Result<ChartResponse, DrikError> {
    compute_positions_with_config(&request.birth_moment()?, &request.geo_position(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drik_time::TimeError;

    #[test]
    fn request_parses_camel_case() {
        let req = ChartRequest::from_json(
            r#"{"year":2000,"month":1,"day":1,"hour":12,"minute":0,
                "latitude":55.75,"longitude":37.6167,"utcOffsetHours":0}"#,
        )
        .unwrap();
        assert_eq!(req.year, 2000.0);
        assert_eq!(req.utc_offset_hours, 0.0);
        assert_eq!(
            req.birth_moment().unwrap(),
            BirthMoment::new(2000, 1, 1, 12, 0, 0.0)
        );
    }

    #[test]
    fn malformed_calendar_fields_are_invalid_birth_moments() {
        let cases = [
            (r#""month":-1,"day":1,"hour":12"#, "month"),
            (r#""month":1,"day":1,"hour":12.5"#, "hour"),
        ];
        for (fields, name) in cases {
            let text = format!(
                r#"{{"year":2000,{fields},"minute":0,
                    "latitude":55.75,"longitude":37.6167,"utcOffsetHours":0}}"#
            );
            let req = ChartRequest::from_json(&text).unwrap();
            let err = compute_request(&req, &ChartConfig::default()).unwrap_err();
            assert!(
                matches!(
                    err,
                    DrikError::InvalidBirthMoment(TimeError::InvalidField { field, .. })
                        if field == name
                ),
                "{fields}: {err:?}"
            );
        }
    }

    #[test]
    fn out_of_range_hour_is_invalid_birth_moment() {
        let req = ChartRequest::from_json(
            r#"{"year":2000,"month":1,"day":1,"hour":25,"minute":0,
                "latitude":55.75,"longitude":37.6167,"utcOffsetHours":0}"#,
        )
        .unwrap();
        assert!(matches!(
            req.birth_moment(),
            Err(DrikError::InvalidBirthMoment(TimeError::InvalidHour(25)))
        ));
    }

    #[test]
    fn request_missing_field_is_serialization_error() {
        let err = ChartRequest::from_json(r#"{"year":2000}"#).unwrap_err();
        assert!(matches!(err, DrikError::Serialization(_)));
    }

    #[test]
    fn response_uses_wire_names() {
        let moment = BirthMoment::new(2000, 1, 1, 12, 0, 0.0);
        let pos = GeoPosition::new(55.75, 37.6167).unwrap();
        let resp = compute_positions(&moment, &pos).unwrap();
        let value = serde_json::to_value(&resp).unwrap();
        assert!(value["ayanamshaDeg"].is_number());
        let sun = &value["bodies"]["sun"];
        for key in ["longitudeDeg", "sign", "degreeInSign", "nakshatra", "pada"] {
            assert!(!sun[key].is_null(), "missing {key}");
        }
        assert!(value["bodies"]["ascendant"]["longitudeDeg"].is_number());
        assert!(value["houses"]["ketu"].is_number());
        assert!(value["panchanga"]["tithiName"].is_string());
    }

    #[test]
    fn optional_sections_are_omitted() {
        let moment = BirthMoment::new(2000, 1, 1, 12, 0, 0.0);
        let pos = GeoPosition::new(55.75, 37.6167).unwrap();
        let config = ChartConfig {
            include_navamsa: false,
            include_panchanga: false,
            ..ChartConfig::default()
        };
        let resp = compute_positions_with_config(&moment, &pos, &config).unwrap();
        let json = resp.to_json(false).unwrap();
        assert!(!json.contains("navamsa"));
        assert!(!json.contains("panchanga"));
        let back: ChartResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resp);
    }
}
