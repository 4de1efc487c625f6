//! End-to-end tests of the chart facade on the global engine.

use std::thread;

use drik_frames::normalize_360;
use drik_rs::*;
use drik_vedic_base::ALL_GRAHAS;

fn moscow_j2000() -> (BirthMoment, GeoPosition) {
    (
        BirthMoment::new(2000, 1, 1, 12, 0, 0.0),
        GeoPosition::new(55.75, 37.6167).unwrap(),
    )
}

#[test]
fn moscow_chart_shape() {
    let (moment, place) = moscow_j2000();
    let resp = compute_positions(&moment, &place).unwrap();
    let chart = compute_chart(&moment, &place).unwrap();

    assert_eq!(chart.grahas.len(), 9);
    assert_eq!(resp.houses.len(), 9);
    assert_eq!(chart.house_buckets().len(), 12);
    for g in &ALL_GRAHAS {
        let b = resp.bodies.get(*g);
        assert!((0..12).contains(&b.sign), "{g}: sign {}", b.sign);
        assert!((1..=4).contains(&b.pada), "{g}: pada {}", b.pada);
        assert!(b.nakshatra < 27);
        assert!((1..=12).contains(&resp.houses[g.key()]));
    }
    assert!(resp.bodies.ascendant.sign < 12);
}

#[test]
fn moscow_chart_values() {
    let (moment, place) = moscow_j2000();
    let resp = compute_positions(&moment, &place).unwrap();

    assert!((resp.ayanamsha_deg - 23.8573).abs() < 0.001);
    // Sun: 280.378° tropical → Dhanu 16.52°
    assert_eq!(resp.bodies.sun.sign, 8);
    assert!((resp.bodies.sun.longitude_deg - 256.52).abs() < 0.02);
    // Moon: Tula, Swati pada 4
    assert_eq!(resp.bodies.moon.sign, 6);
    assert_eq!(resp.bodies.moon.nakshatra, 14);
    assert_eq!(resp.bodies.moon.pada, 4);
    assert_eq!(resp.bodies.mars.sign, 10);
    assert_eq!(resp.bodies.jupiter.sign, 0);
    assert_eq!(resp.bodies.saturn.sign, 0);
    assert!(resp.bodies.saturn.retrograde);
    assert!(!resp.bodies.jupiter.retrograde);
    // Ascendant ≈ 87.78° tropical → 63.93° sidereal, Mithuna
    assert_eq!(resp.bodies.ascendant.sign, 2);
    assert!((resp.bodies.ascendant.longitude_deg - 63.93).abs() < 0.05);

    assert_eq!(resp.houses["sun"], 7);
    assert_eq!(resp.houses["moon"], 5);
    assert_eq!(resp.houses["jupiter"], 11);
    assert_eq!(resp.houses["rahu"], 2);
    assert_eq!(resp.houses["ketu"], 8);

    let panchanga = resp.panchanga.unwrap();
    assert_eq!(panchanga.tithi, 25);
    assert_eq!(panchanga.paksha, "Krishna");
    assert_eq!(panchanga.vara, 6);
    assert_eq!(panchanga.nakshatra, 14);
}

#[test]
fn all_longitudes_in_range_over_many_dates() {
    let place = GeoPosition::new(19.076, 72.8777).unwrap();
    for year in (1850..=2150).step_by(15) {
        for month in [1, 5, 9] {
            let moment = BirthMoment::new(year, month, 17, 6, 45, 5.5);
            let chart = compute_chart(&moment, &place).unwrap();
            for g in &chart.grahas {
                let lon = g.point.sidereal_deg();
                assert!((0.0..360.0).contains(&lon), "{year}-{month} {}: {lon}", g.graha);
                let p = &g.point.placement;
                let back = p.sign_index() as f64 * 30.0 + p.degree_in_sign;
                assert!((back - lon).abs() < 1e-9);
            }
            let asc = chart.ascendant.sidereal_deg();
            assert!((0.0..360.0).contains(&asc));
            assert_eq!(
                chart.graha(Graha::Surya).house,
                ((chart.graha(Graha::Surya).point.sign_index() + 12
                    - chart.ascendant.sign_index())
                    % 12)
                    + 1
            );
        }
    }
}

#[test]
fn rahu_ketu_always_opposite() {
    let place = GeoPosition::new(-33.87, 151.21).unwrap();
    for mode in ["mean", "true"] {
        let config = ChartConfig {
            node_mode: mode.to_string(),
            ..ChartConfig::default()
        };
        for day in (1..=28).step_by(3) {
            let moment = BirthMoment::new(1987, 2, day, 23, 10, 10.0);
            let chart = compute_chart_with_config(&moment, &place, &config).unwrap();
            let rahu = chart.graha(Graha::Rahu).point.sidereal_deg();
            let ketu = chart.graha(Graha::Ketu).point.sidereal_deg();
            let diff = normalize_360(ketu - rahu);
            assert!((diff - 180.0).abs() < 1e-9, "{mode} day {day}: {diff}");
        }
    }
}

#[test]
fn sidereal_conversion_applied_exactly_once() {
    let (moment, place) = moscow_j2000();
    let chart = compute_chart(&moment, &place).unwrap();
    let aya = chart.ayanamsha_deg;
    let points = chart
        .grahas
        .iter()
        .map(|g| g.point)
        .chain(std::iter::once(chart.ascendant));
    for p in points {
        let once = normalize_360(p.tropical_deg - aya);
        let twice = normalize_360(p.tropical_deg - 2.0 * aya);
        let sid = p.sidereal_deg();
        assert!((sid - once).abs() < 1e-9, "{sid} vs {once}");
        assert!((sid - twice).abs() > 1.0);
    }
}

#[test]
fn pole_raises_undefined_ascendant() {
    let moment = BirthMoment::new(2000, 1, 1, 12, 0, 0.0);
    let place = GeoPosition::new(90.0, 0.0).unwrap();
    let err = compute_positions(&moment, &place).unwrap_err();
    assert!(matches!(err, DrikError::UndefinedAscendant { .. }), "{err}");
}

#[test]
fn invalid_birth_moment_rejected() {
    let place = GeoPosition::new(0.0, 0.0).unwrap();
    let april_31 = BirthMoment::new(2023, 4, 31, 10, 0, 0.0);
    assert!(matches!(
        compute_positions(&april_31, &place),
        Err(DrikError::InvalidBirthMoment(_))
    ));
    let bad_offset = BirthMoment::new(2023, 4, 1, 10, 0, f64::NAN);
    assert!(matches!(
        compute_positions(&bad_offset, &place),
        Err(DrikError::InvalidBirthMoment(_))
    ));
}

#[test]
fn invalid_geo_position_rejected() {
    let moment = BirthMoment::new(2000, 1, 1, 12, 0, 0.0);
    let place = GeoPosition {
        latitude_deg: 12.0,
        longitude_deg: -181.0,
    };
    assert!(matches!(
        compute_positions(&moment, &place),
        Err(DrikError::InvalidGeoPosition(_))
    ));
}

#[test]
fn far_future_is_out_of_range() {
    let moment = BirthMoment::new(7000, 1, 1, 0, 0, 0.0);
    let place = GeoPosition::new(0.0, 0.0).unwrap();
    assert!(matches!(
        compute_positions(&moment, &place),
        Err(DrikError::EpochOutOfRange { .. })
    ));
}

#[test]
fn utc_offset_shifts_the_instant() {
    let place = GeoPosition::new(28.61, 77.21).unwrap();
    let ist = compute_chart(&BirthMoment::new(2000, 1, 1, 17, 30, 5.5), &place).unwrap();
    let utc = compute_chart(&BirthMoment::new(2000, 1, 1, 12, 0, 0.0), &place).unwrap();
    assert!((ist.instant.jd - utc.instant.jd).abs() < 1e-9);
    let d = ist.graha(Graha::Chandra).point.sidereal_deg()
        - utc.graha(Graha::Chandra).point.sidereal_deg();
    assert!(d.abs() < 1e-9);
}

#[test]
fn alternative_ayanamsha_shifts_every_point_equally() {
    let (moment, place) = moscow_j2000();
    let lahiri = compute_chart(&moment, &place).unwrap();
    let config = ChartConfig {
        ayanamsha: "fagan-bradley".to_string(),
        ..ChartConfig::default()
    };
    let fb = compute_chart_with_config(&moment, &place, &config).unwrap();
    let shift = fb.ayanamsha_deg - lahiri.ayanamsha_deg;
    assert!((shift - 0.879).abs() < 0.01, "shift {shift}");
    for (a, b) in lahiri.grahas.iter().zip(&fb.grahas) {
        let d = normalize_360(a.point.sidereal_deg() - b.point.sidereal_deg());
        assert!((d - shift).abs() < 1e-9);
    }
}

#[test]
fn navamsa_section_consistent() {
    let (moment, place) = moscow_j2000();
    let resp = compute_positions(&moment, &place).unwrap();
    let nav = resp.navamsa.unwrap();
    assert_eq!(nav.signs.len(), 10);
    assert_eq!(nav.houses.len(), 9);
    let asc = nav.signs["ascendant"];
    for (key, house) in &nav.houses {
        let sign = nav.signs[key];
        assert_eq!(*house, (sign + 12 - asc) % 12 + 1, "{key}");
    }
    // Nodes sit six navamsa signs apart as well.
    assert_eq!((nav.signs["ketu"] + 12 - nav.signs["rahu"]) % 12, 6);
}

#[test]
fn json_request_round_trip() {
    let req = ChartRequest::from_json(
        r#"{"year":1990,"month":7,"day":4,"hour":9,"minute":30,
            "latitude":40.7128,"longitude":-74.006,"utcOffsetHours":-4}"#,
    )
    .unwrap();
    let resp = compute_request(&req, &ChartConfig::default()).unwrap();
    let json = resp.to_json(true).unwrap();
    let back: ChartResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resp);
}

#[test]
fn concurrent_charts_agree() {
    let (moment, place) = moscow_j2000();
    let reference = compute_positions(&moment, &place).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || compute_positions(&moment, &place).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), reference);
    }
}
