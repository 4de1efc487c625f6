//! Geocentric lunar longitude and distance.
//!
//! Principal periodic terms of ELP-2000/82 as given in Meeus,
//! *Astronomical Algorithms*, Ch. 47 (Table 47.A). Accuracy is about
//! 10″ in longitude, which is well inside one pada (3°20′).

use drik_frames::normalize_360;

use crate::error::SeriesError;

/// Mean distance term of the distance series, in km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// `[D, M, M′, F, Σl, Σr]`: argument multipliers, then the sine
/// amplitude for longitude (1e-6 deg) and the cosine amplitude for
/// distance (1e-3 km).
#[rustfmt::skip]
static TERMS: [[i32; 6]; 60] = [
    [ 0,  0,  1,  0,  6288774, -20905355],
    [ 2,  0, -1,  0,  1274027,  -3699111],
    [ 2,  0,  0,  0,   658314,  -2955968],
    [ 0,  0,  2,  0,   213618,   -569925],
    [ 0,  1,  0,  0,  -185116,     48888],
    [ 0,  0,  0,  2,  -114332,     -3149],
    [ 2,  0, -2,  0,    58793,    246158],
    [ 2, -1, -1,  0,    57066,   -152138],
    [ 2,  0,  1,  0,    53322,   -170733],
    [ 2, -1,  0,  0,    45758,   -204586],
    [ 0,  1, -1,  0,   -40923,   -129620],
    [ 1,  0,  0,  0,   -34720,    108743],
    [ 0,  1,  1,  0,   -30383,    104755],
    [ 2,  0,  0, -2,    15327,     10321],
    [ 0,  0,  1,  2,   -12528,         0],
    [ 0,  0,  1, -2,    10980,     79661],
    [ 4,  0, -1,  0,    10675,    -34782],
    [ 0,  0,  3,  0,    10034,    -23210],
    [ 4,  0, -2,  0,     8548,    -21636],
    [ 2,  1, -1,  0,    -7888,     24208],
    [ 2,  1,  0,  0,    -6766,     30824],
    [ 1,  0, -1,  0,    -5163,     -8379],
    [ 1,  1,  0,  0,     4987,    -16675],
    [ 2, -1,  1,  0,     4036,    -12831],
    [ 2,  0,  2,  0,     3994,    -10445],
    [ 4,  0,  0,  0,     3861,    -11650],
    [ 2,  0, -3,  0,     3665,     14403],
    [ 0,  1, -2,  0,    -2689,     -7003],
    [ 2,  0, -1,  2,    -2602,         0],
    [ 2, -1, -2,  0,     2390,     10056],
    [ 1,  0,  1,  0,    -2348,      6322],
    [ 2, -2,  0,  0,     2236,     -9884],
    [ 0,  1,  2,  0,    -2120,      5751],
    [ 0,  2,  0,  0,    -2069,         0],
    [ 2, -2, -1,  0,     2048,     -4950],
    [ 2,  0,  1, -2,    -1773,      4130],
    [ 2,  0,  0,  2,    -1595,         0],
    [ 4, -1, -1,  0,     1215,     -3958],
    [ 0,  0,  2,  2,    -1110,         0],
    [ 3,  0, -1,  0,     -892,      3258],
    [ 2,  1,  1,  0,     -810,      2616],
    [ 4, -1, -2,  0,      759,     -1897],
    [ 0,  2, -1,  0,     -713,     -2117],
    [ 2,  2, -1,  0,     -700,      2354],
    [ 2,  1, -2,  0,      691,         0],
    [ 2, -1,  0, -2,      596,         0],
    [ 4,  0,  1,  0,      549,     -1423],
    [ 0,  0,  4,  0,      537,     -1117],
    [ 4, -1,  0,  0,      520,     -1571],
    [ 1,  0, -2,  0,     -487,     -1739],
    [ 2,  1,  0, -2,     -399,         0],
    [ 0,  0,  2, -2,     -381,     -4421],
    [ 1,  1,  1,  0,      351,         0],
    [ 3,  0, -2,  0,     -340,         0],
    [ 4,  0, -3,  0,      330,         0],
    [ 2, -1,  2,  0,      327,         0],
    [ 0,  2,  1,  0,     -323,      1165],
    [ 1,  1, -1,  0,      299,         0],
    [ 2,  0,  3,  0,      294,         0],
    [ 2,  0, -1, -2,        0,      8752],
];

/// Fundamental lunar arguments in degrees (not normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// L′, mean longitude of the Moon.
    pub mean_longitude: f64,
    /// D, mean elongation of the Moon.
    pub elongation: f64,
    /// M, mean anomaly of the Sun.
    pub sun_anomaly: f64,
    /// M′, mean anomaly of the Moon.
    pub moon_anomaly: f64,
    /// F, argument of latitude of the Moon.
    pub latitude_argument: f64,
}

/// Lunar arguments at `t` Julian centuries since J2000.0.
pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    LunarArguments {
        mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0
            - t4 / 65_194_000.0,
        elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
            + t3 / 24_490_000.0,
        moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
            - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    }
}

/// Geocentric Moon, ecliptic of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}

/// Moon position at `t` Julian centuries since J2000.0.
pub fn moon_position(t: f64) -> LunarPosition {
    let args = lunar_arguments(t);
    // Eccentricity of Earth's orbit scales every term containing M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &[d, m, mp, f, l, r] in &TERMS {
        let arg = (d as f64 * args.elongation
            + m as f64 * args.sun_anomaly
            + mp as f64 * args.moon_anomaly
            + f as f64 * args.latitude_argument)
            .to_radians();
        let scale = e.powi(m.abs());
        sum_l += l as f64 * scale * arg.sin();
        sum_r += r as f64 * scale * arg.cos();
    }

    // Venus, Jupiter, and Earth-flattening corrections.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3958.0 * a1.sin()
        + 1962.0 * (args.mean_longitude - args.latitude_argument).to_radians().sin()
        + 318.0 * a2.sin();

    LunarPosition {
        longitude_deg: normalize_360(args.mean_longitude + sum_l * 1e-6),
        distance_km: MEAN_DISTANCE_KM + sum_r * 1e-3,
    }
}

/// Sanity check of the lunar table: multipliers within the ranges the
/// theory uses and at least one non-zero amplitude per row.
pub fn validate_lunar_terms() -> Result<(), SeriesError> {
    for (i, &[d, m, mp, f, l, r]) in TERMS.iter().enumerate() {
        let in_range = (0..=4).contains(&d)
            && (-2..=2).contains(&m)
            && (-4..=4).contains(&mp)
            && (-2..=2).contains(&f);
        if !in_range || (l == 0 && r == 0) {
            return Err(SeriesError::malformed(
                "lunar",
                format!("row {i} [{d}, {m}, {mp}, {f}, {l}, {r}]"),
            ));
        }
    }
    Ok(())
}
